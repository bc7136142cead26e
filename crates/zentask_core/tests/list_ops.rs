use uuid::Uuid;
use zentask_core::{TaskId, TaskList};

fn tid(n: u32) -> TaskId {
    Uuid::parse_str(&format!("00000000-0000-4000-8000-{n:012x}")).unwrap()
}

fn sample_list() -> TaskList {
    // Built oldest-first so the newest task ends up at index 0.
    TaskList::new()
        .add(tid(1), "first", 100)
        .add(tid(2), "second", 200)
        .add(tid(3), "third", 300)
}

#[test]
fn add_prepends_new_task() {
    let list = sample_list();
    let next = list.add(tid(4), "fourth", 400);

    assert_eq!(next.len(), list.len() + 1);
    let newest = &next.tasks()[0];
    assert_eq!(newest.id, tid(4));
    assert_eq!(newest.text, "fourth");
    assert!(!newest.completed);
    assert_eq!(newest.created_at, 400);
}

#[test]
fn add_trims_text() {
    let list = TaskList::new().add(tid(1), "  Buy milk  ", 1);
    assert_eq!(list.tasks()[0].text, "Buy milk");
}

#[test]
fn add_with_blank_text_is_noop() {
    let list = sample_list();
    assert_eq!(list.add(tid(9), "", 999), list);
    assert_eq!(list.add(tid(9), "   ", 999), list);
    assert_eq!(list.add(tid(9), "\t\n", 999), list);
}

#[test]
fn add_does_not_mutate_source_list() {
    let list = sample_list();
    let before = list.clone();
    let _ = list.add(tid(4), "fourth", 400);
    assert_eq!(list, before);
}

#[test]
fn toggle_flips_only_target() {
    let list = sample_list();
    let next = list.toggle(tid(2));

    assert_eq!(next.len(), list.len());
    for (original, toggled) in list.tasks().iter().zip(next.tasks()) {
        assert_eq!(original.id, toggled.id);
        assert_eq!(original.text, toggled.text);
        assert_eq!(original.created_at, toggled.created_at);
        if original.id == tid(2) {
            assert_ne!(original.completed, toggled.completed);
        } else {
            assert_eq!(original.completed, toggled.completed);
        }
    }
}

#[test]
fn double_toggle_is_identity() {
    let list = sample_list();
    assert_eq!(list.toggle(tid(1)).toggle(tid(1)), list);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let list = sample_list();
    assert_eq!(list.toggle(tid(42)), list);
}

#[test]
fn delete_removes_and_preserves_order() {
    let list = sample_list();
    let next = list.delete(tid(2));

    assert_eq!(next.len(), 2);
    assert_eq!(next.tasks()[0].id, tid(3));
    assert_eq!(next.tasks()[1].id, tid(1));
}

#[test]
fn delete_is_idempotent() {
    let list = sample_list();
    let once = list.delete(tid(2));
    let twice = once.delete(tid(2));
    assert_eq!(once, twice);
}

#[test]
fn delete_unknown_id_is_noop() {
    let list = sample_list();
    assert_eq!(list.delete(tid(42)), list);
}

#[test]
fn clear_returns_empty_regardless_of_contents() {
    assert!(sample_list().clear().is_empty());
    assert!(TaskList::new().clear().is_empty());

    let five = (1..=5).fold(TaskList::new(), |list, n| {
        list.add(tid(n), &format!("task {n}"), i64::from(n))
    });
    assert_eq!(five.len(), 5);
    assert_eq!(five.clear().len(), 0);
}

#[test]
fn contains_reports_membership() {
    let list = sample_list();
    assert!(list.contains(tid(1)));
    assert!(!list.contains(tid(42)));
}
