use ticklist_core::{apply, IdAllocator, Task, TaskAction, TaskId, TaskStore};

#[test]
fn add_appends_trimmed_task_with_fresh_id() {
    let (tasks, mut ids) = two_task_fixture();

    let next = apply(
        &tasks,
        &TaskAction::Add {
            name: "  Buy milk  ".to_string(),
        },
        &mut ids,
    );

    assert_eq!(next.len(), tasks.len() + 1);
    let added = next.last().unwrap();
    assert_eq!(added.name, "Buy milk");
    assert!(!added.complete);
    assert!(tasks.iter().all(|task| task.id != added.id));
}

#[test]
fn add_with_whitespace_only_name_is_a_no_op() {
    let (tasks, mut ids) = two_task_fixture();

    let next = apply(
        &tasks,
        &TaskAction::Add {
            name: "   ".to_string(),
        },
        &mut ids,
    );

    assert_eq!(next, tasks);
}

#[test]
fn apply_never_mutates_its_input() {
    let (tasks, mut ids) = two_task_fixture();
    let snapshot = tasks.clone();

    apply(
        &tasks,
        &TaskAction::Add {
            name: "new".to_string(),
        },
        &mut ids,
    );
    apply(&tasks, &TaskAction::Toggle { id: tasks[0].id }, &mut ids);
    apply(&tasks, &TaskAction::Delete { id: tasks[1].id }, &mut ids);

    assert_eq!(tasks, snapshot);
}

#[test]
fn toggle_flips_only_the_matching_task() {
    let (tasks, mut ids) = two_task_fixture();

    let next = apply(&tasks, &TaskAction::Toggle { id: tasks[1].id }, &mut ids);

    assert_eq!(next.len(), tasks.len());
    assert_eq!(next[0], tasks[0]);
    assert_eq!(next[1].id, tasks[1].id);
    assert_eq!(next[1].name, tasks[1].name);
    assert!(next[1].complete);
}

#[test]
fn toggle_twice_is_an_involution() {
    let (tasks, mut ids) = two_task_fixture();

    let once = apply(&tasks, &TaskAction::Toggle { id: tasks[0].id }, &mut ids);
    let twice = apply(&once, &TaskAction::Toggle { id: tasks[0].id }, &mut ids);

    assert_eq!(twice, tasks);
}

#[test]
fn toggle_unknown_id_leaves_sequence_unchanged() {
    let (tasks, mut ids) = two_task_fixture();

    let next = apply(&tasks, &TaskAction::Toggle { id: TaskId(999) }, &mut ids);

    assert_eq!(next, tasks);
}

#[test]
fn delete_removes_matching_task_and_preserves_order() {
    let mut ids = IdAllocator::new();
    let tasks = vec![
        task(&mut ids, "first"),
        task(&mut ids, "second"),
        task(&mut ids, "third"),
    ];

    let next = apply(&tasks, &TaskAction::Delete { id: tasks[1].id }, &mut ids);

    assert_eq!(next.len(), 2);
    assert_eq!(next[0], tasks[0]);
    assert_eq!(next[1], tasks[2]);
}

#[test]
fn delete_unknown_id_leaves_sequence_unchanged() {
    let (tasks, mut ids) = two_task_fixture();

    let next = apply(&tasks, &TaskAction::Delete { id: TaskId(999) }, &mut ids);

    assert_eq!(next, tasks);
}

#[test]
fn load_replaces_sequence_and_reseeds_allocator() {
    let (tasks, mut ids) = two_task_fixture();
    let loaded = vec![
        Task::new(TaskId(40), "restored a").unwrap(),
        Task::new(TaskId(41), "restored b").unwrap(),
    ];

    let next = apply(
        &tasks,
        &TaskAction::Load {
            tasks: loaded.clone(),
        },
        &mut ids,
    );
    assert_eq!(next, loaded);

    let after_add = apply(
        &next,
        &TaskAction::Add {
            name: "fresh".to_string(),
        },
        &mut ids,
    );
    let added = after_add.last().unwrap();
    assert!(added.id > TaskId(41));
}

#[test]
fn allocator_ids_are_strictly_increasing() {
    let mut ids = IdAllocator::new();
    let mut tasks = Vec::new();
    for index in 0..5 {
        tasks = apply(
            &tasks,
            &TaskAction::Add {
                name: format!("task {index}"),
            },
            &mut ids,
        );
    }

    for pair in tasks.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[test]
fn store_dispatch_reports_whether_the_sequence_changed() {
    let mut store = TaskStore::new();

    assert!(store.dispatch(&TaskAction::Add {
        name: "only".to_string()
    }));
    let id = store.tasks()[0].id;

    assert!(store.dispatch(&TaskAction::Toggle { id }));
    assert!(!store.dispatch(&TaskAction::Toggle { id: TaskId(999) }));
    assert!(!store.dispatch(&TaskAction::Add {
        name: "  ".to_string()
    }));
    assert!(store.dispatch(&TaskAction::Delete { id }));
    assert!(store.tasks().is_empty());
}

fn task(ids: &mut IdAllocator, name: &str) -> Task {
    let current: Vec<Task> = Vec::new();
    let next = apply(
        &current,
        &TaskAction::Add {
            name: name.to_string(),
        },
        ids,
    );
    next.into_iter().next().unwrap()
}

fn two_task_fixture() -> (Vec<Task>, IdAllocator) {
    let mut ids = IdAllocator::new();
    let tasks = vec![task(&mut ids, "first"), task(&mut ids, "second")];
    (tasks, ids)
}
