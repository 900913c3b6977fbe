//! Frame rendering for the terminal front end.

use crate::state::{AppState, InputMode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use ticklist_core::{SlotRepository, Task};

const INPUT_PLACEHOLDER: &str = "Add a new task";

/// Renders one full frame of the task list UI.
///
/// The whole sequence is rendered in insertion order on every frame; no
/// pagination, filtering or sorting.
pub fn render_app<R: SlotRepository>(frame: &mut Frame, state: &AppState<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_input(frame, chunks[1], state);
    render_task_list(frame, chunks[2], state);
    render_footer(frame, chunks[3], state.mode);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " To-Do List",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

fn render_input<R: SlotRepository>(frame: &mut Frame, area: Rect, state: &AppState<R>) {
    let (text, text_style) = if state.input.is_empty() {
        (INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (state.input.as_str(), Style::default())
    };

    let border_style = match state.mode {
        InputMode::Edit => Style::default().fg(Color::Yellow),
        InputMode::Browse => Style::default(),
    };

    let input = Paragraph::new(Span::styled(text, text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" New task "),
    );
    frame.render_widget(input, area);

    if state.mode == InputMode::Edit {
        // Park the terminal cursor after the typed text.
        let x = area.x + 1 + state.input.chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_task_list<R: SlotRepository>(frame: &mut Frame, area: Rect, state: &AppState<R>) {
    let block = Block::default().borders(Borders::ALL).title(" Tasks ");

    if state.tasks().is_empty() {
        let empty = Paragraph::new(Span::styled(
            "(no tasks yet; press i to add one)",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks()
        .iter()
        .map(|task| ListItem::new(task_row(task)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(state.selection());
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Row text is derived from the task name; completed rows are dimmed
/// and struck through. Presentation only, no data impact.
fn task_row(task: &Task) -> Line<'_> {
    let mark = if task.complete { "[x] " } else { "[ ] " };
    let name_style = if task.complete {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(mark),
        Span::styled(task.name.as_str(), name_style),
    ])
}

fn render_footer(frame: &mut Frame, area: Rect, mode: InputMode) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = match mode {
        InputMode::Browse => Line::from(vec![
            Span::styled("i", bold),
            Span::raw(" add \u{2502} "),
            Span::styled("space", bold),
            Span::raw(" toggle \u{2502} "),
            Span::styled("d", bold),
            Span::raw(" delete \u{2502} "),
            Span::styled("\u{2191}\u{2193}", bold),
            Span::raw(" move \u{2502} "),
            Span::styled("q", bold),
            Span::raw(" quit"),
        ]),
        InputMode::Edit => Line::from(vec![
            Span::styled("enter", bold),
            Span::raw(" add task \u{2502} "),
            Span::styled("esc", bold),
            Span::raw(" back to list"),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
