//! Key dispatch for the terminal front end.
//!
//! # Responsibility
//! - Route key presses into view state changes and service dispatches.
//!
//! # Invariants
//! - Ctrl-C exits from any mode.
//! - Printable keys only reach the input buffer in edit mode.

use crate::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyModifiers};
use ticklist_core::{ServiceResult, SlotRepository};

/// Outcome of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventResult {
    Continue,
    Exit,
}

/// Routes one key press into the view state.
///
/// # Errors
/// - Propagates service persistence failures; callers treat these as
///   fatal.
pub fn handle_key_event<R: SlotRepository>(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut AppState<R>,
) -> ServiceResult<KeyEventResult> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(KeyEventResult::Exit);
    }

    match state.mode {
        InputMode::Browse => handle_browse_key(code, state),
        InputMode::Edit => handle_edit_key(code, state),
    }
}

fn handle_browse_key<R: SlotRepository>(
    code: KeyCode,
    state: &mut AppState<R>,
) -> ServiceResult<KeyEventResult> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(KeyEventResult::Exit),
        KeyCode::Char('i') | KeyCode::Char('a') => state.mode = InputMode::Edit,
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => state.toggle_selected()?,
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected()?,
        _ => {}
    }
    Ok(KeyEventResult::Continue)
}

fn handle_edit_key<R: SlotRepository>(
    code: KeyCode,
    state: &mut AppState<R>,
) -> ServiceResult<KeyEventResult> {
    match code {
        KeyCode::Esc => {
            state.input.clear();
            state.mode = InputMode::Browse;
        }
        // Stays in edit mode so several tasks can be entered in a row.
        KeyCode::Enter => state.submit_input()?,
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Char(c) => state.input.push(c),
        _ => {}
    }
    Ok(KeyEventResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::{handle_key_event, KeyEventResult};
    use crate::state::{AppState, InputMode};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ticklist_core::{MemorySlotRepository, TaskListService};

    fn state() -> AppState<MemorySlotRepository> {
        let mut service = TaskListService::new(MemorySlotRepository::new());
        service.hydrate().expect("memory hydrate cannot fail");
        AppState::new(service)
    }

    fn press(state: &mut AppState<MemorySlotRepository>, code: KeyCode) -> KeyEventResult {
        handle_key_event(code, KeyModifiers::NONE, state).expect("key handling should succeed")
    }

    #[test]
    fn ctrl_c_exits_from_any_mode() {
        let mut state = state();
        let result = handle_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, &mut state)
            .expect("key handling should succeed");
        assert_eq!(result, KeyEventResult::Exit);

        state.mode = InputMode::Edit;
        let result = handle_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, &mut state)
            .expect("key handling should succeed");
        assert_eq!(result, KeyEventResult::Exit);
    }

    #[test]
    fn q_exits_browse_but_types_into_the_input_in_edit_mode() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyEventResult::Exit);

        state.mode = InputMode::Edit;
        assert_eq!(
            press(&mut state, KeyCode::Char('q')),
            KeyEventResult::Continue
        );
        assert_eq!(state.input, "q");
    }

    #[test]
    fn typing_and_submitting_adds_a_task_and_stays_in_edit_mode() {
        let mut state = state();
        press(&mut state, KeyCode::Char('i'));
        assert_eq!(state.mode, InputMode::Edit);

        for c in "Buy milk".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.tasks()[0].name, "Buy milk");
        assert!(state.input.is_empty());
        assert_eq!(state.mode, InputMode::Edit);
    }

    #[test]
    fn backspace_edits_and_esc_cancels_the_input() {
        let mut state = state();
        state.mode = InputMode::Edit;

        press(&mut state, KeyCode::Char('h'));
        press(&mut state, KeyCode::Char('i'));
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input, "h");

        press(&mut state, KeyCode::Esc);
        assert!(state.input.is_empty());
        assert_eq!(state.mode, InputMode::Browse);
    }

    #[test]
    fn space_toggles_and_d_deletes_the_selected_task_in_browse_mode() {
        let mut state = state();
        state.mode = InputMode::Edit;
        for c in "first".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);

        press(&mut state, KeyCode::Char(' '));
        assert!(state.tasks()[0].complete);

        press(&mut state, KeyCode::Char('d'));
        assert!(state.tasks().is_empty());
    }
}
