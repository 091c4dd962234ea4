use std::cell::RefCell;
use std::collections::HashSet;

use gridkit::identity::KeyResolver;
use gridkit::selection::{SelectionDescriptor, SelectionMode};
use gridkit::{GridRow, RowKey};

#[derive(Debug, Clone, PartialEq)]
struct Task {
    id: i64,
    locked: bool,
}

impl GridRow for Task {
    fn id(&self) -> Option<RowKey> {
        Some(RowKey::Int(self.id))
    }
}

fn tasks(ids: &[i64]) -> Vec<Task> {
    ids.iter()
        .map(|&id| Task { id, locked: false })
        .collect()
}

fn keys(ids: &[i64]) -> Vec<RowKey> {
    ids.iter().map(|&id| RowKey::Int(id)).collect()
}

// ============================================================================
// Derived state
// ============================================================================

#[test]
fn test_summary_states() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);

    let none = SelectionDescriptor::<Task>::multiple([]).summary(&items);
    assert!(!none.all_selected);
    assert!(!none.indeterminate);

    let some = SelectionDescriptor::<Task>::multiple(keys(&[2])).summary(&items);
    assert!(!some.all_selected);
    assert!(some.indeterminate);
    assert_eq!((some.selected, some.selectable), (1, 3));

    let all = SelectionDescriptor::<Task>::multiple(keys(&[1, 2, 3])).summary(&items);
    assert!(all.all_selected);
    assert!(!all.indeterminate);
}

#[test]
fn test_summary_ignores_unselectable_and_stale_keys() {
    let mut rows = tasks(&[1, 2, 3]);
    rows[2].locked = true;
    let items = KeyResolver::new().items(&rows);

    // Key 99 no longer exists; key 3 is not selectable.
    let selection = SelectionDescriptor::multiple(keys(&[1, 2, 3, 99]))
        .selectable(|task: &Task, _| !task.locked);
    let summary = selection.summary(&items);
    assert_eq!(summary.selectable, 2);
    assert_eq!(summary.selected, 2);
    assert!(summary.all_selected);
}

#[test]
fn test_all_selected_false_with_no_rows() {
    let rows: Vec<Task> = Vec::new();
    let items = KeyResolver::new().items(&rows);
    let summary = SelectionDescriptor::<Task>::multiple([]).summary(&items);
    assert!(!summary.all_selected);
    assert!(!summary.indeterminate);
}

// ============================================================================
// toggle_row
// ============================================================================

#[test]
fn test_multiple_toggle_emits_in_data_order() {
    let rows = tasks(&[5, 3, 9, 1]);
    let items = KeyResolver::new().items(&rows);
    let emitted = RefCell::new(Vec::new());

    // Caller inserted 1 before 9; emission follows dataset order.
    let mut selection = SelectionDescriptor::multiple(keys(&[1, 9]))
        .on_change(|change| emitted.borrow_mut().push((change.keys.clone(), change.rows.len())));
    assert!(selection.toggle_row(&items, &items[0]));

    assert_eq!(*emitted.borrow(), vec![(keys(&[5, 9, 1]), 3)]);
}

#[test]
fn test_multiple_toggle_emits_matching_rows() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);
    let emitted_rows = RefCell::new(Vec::new());

    let mut selection = SelectionDescriptor::<Task>::multiple(keys(&[3])).on_change(|change| {
        *emitted_rows.borrow_mut() = change.rows.iter().map(|t| t.id).collect::<Vec<_>>();
    });
    selection.toggle_row(&items, &items[0]);
    assert_eq!(*emitted_rows.borrow(), vec![1, 3]);
}

#[test]
fn test_multiple_toggle_pair_is_identity() {
    let rows = tasks(&[1, 2, 3, 4]);
    let items = KeyResolver::new().items(&rows);
    let original: HashSet<RowKey> = keys(&[2, 4]).into_iter().collect();

    let first = SelectionDescriptor::multiple(original.clone())
        .next_for_row(&items, &items[2])
        .unwrap();
    let second = SelectionDescriptor::multiple(first.key_set())
        .next_for_row(&items, &items[2])
        .unwrap();
    assert_eq!(second.key_set(), original);
}

#[test]
fn test_single_toggle_replaces_selection() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);

    let selection = SelectionDescriptor::single(keys(&[1, 3]));
    let change = selection.next_for_row(&items, &items[1]).unwrap();
    assert_eq!(change.keys, keys(&[2]));

    // Toggling the already selected row keeps it selected.
    let selection = SelectionDescriptor::single(keys(&[2]));
    let change = selection.next_for_row(&items, &items[1]).unwrap();
    assert_eq!(change.keys, keys(&[2]));
}

#[test]
fn test_unselectable_toggle_is_silent() {
    let mut rows = tasks(&[1, 2]);
    rows[1].locked = true;
    let items = KeyResolver::new().items(&rows);
    let calls = RefCell::new(0);

    let mut selection = SelectionDescriptor::multiple([])
        .selectable(|task: &Task, _| !task.locked)
        .on_change(|_| *calls.borrow_mut() += 1);
    assert!(!selection.toggle_row(&items, &items[1]));
    assert_eq!(*calls.borrow(), 0);

    assert!(selection.toggle_row(&items, &items[0]));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_descriptor_is_not_mutated() {
    let rows = tasks(&[1, 2]);
    let items = KeyResolver::new().items(&rows);
    let mut selection = SelectionDescriptor::multiple(keys(&[1])).on_change(|_| {});
    selection.toggle_row(&items, &items[1]);
    assert_eq!(selection.selected_keys, keys(&[1]).into_iter().collect());
}

#[test]
fn test_callbacks_observe_operation_order() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);
    let log = RefCell::new(Vec::new());

    let mut selection =
        SelectionDescriptor::multiple([]).on_change(|change| log.borrow_mut().push(change.keys.len()));
    selection.toggle_row(&items, &items[0]);
    selection.toggle_all(&items);
    selection.toggle_row(&items, &items[2]);
    assert_eq!(*log.borrow(), vec![1, 3, 1]);
}

// ============================================================================
// toggle_all
// ============================================================================

#[test]
fn test_toggle_all_round_trip() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);

    let selection = SelectionDescriptor::<Task>::multiple([]);
    let selected = selection.next_for_all(&items).unwrap();
    assert_eq!(selected.keys, keys(&[1, 2, 3]));

    let selection = SelectionDescriptor::<Task>::multiple(selected.key_set());
    let cleared = selection.next_for_all(&items).unwrap();
    assert!(cleared.keys.is_empty());
    assert!(cleared.rows.is_empty());
}

#[test]
fn test_toggle_all_from_indeterminate_selects_all() {
    let rows = tasks(&[1, 2, 3]);
    let items = KeyResolver::new().items(&rows);
    let selection = SelectionDescriptor::<Task>::multiple(keys(&[2]));
    assert_eq!(selection.next_for_all(&items).unwrap().keys, keys(&[1, 2, 3]));
}

#[test]
fn test_toggle_all_only_selectable_rows() {
    let mut rows = tasks(&[1, 2, 3]);
    rows[1].locked = true;
    let items = KeyResolver::new().items(&rows);
    let selection = SelectionDescriptor::multiple([]).selectable(|task: &Task, _| !task.locked);
    assert_eq!(selection.next_for_all(&items).unwrap().keys, keys(&[1, 3]));
}

#[test]
fn test_toggle_all_noop_cases() {
    let rows = tasks(&[1, 2]);
    let items = KeyResolver::new().items(&rows);
    let calls = RefCell::new(0);

    let mut single = SelectionDescriptor::single([]).on_change(|_| *calls.borrow_mut() += 1);
    assert!(!single.toggle_all(&items));

    let mut nothing_selectable = SelectionDescriptor::multiple([])
        .selectable(|_: &Task, _| false)
        .on_change(|_| *calls.borrow_mut() += 1);
    assert!(!nothing_selectable.toggle_all(&items));

    let empty: Vec<Task> = Vec::new();
    let empty_items = KeyResolver::new().items(&empty);
    let mut no_rows = SelectionDescriptor::multiple([]).on_change(|_| *calls.borrow_mut() += 1);
    assert!(!no_rows.toggle_all(&empty_items));

    assert_eq!(*calls.borrow(), 0);
}

// ============================================================================
// Mode parsing
// ============================================================================

#[test]
fn test_mode_parse_defaults_to_multiple() {
    assert_eq!(SelectionMode::parse("single"), SelectionMode::Single);
    assert_eq!(SelectionMode::parse(" SINGLE "), SelectionMode::Single);
    assert_eq!(SelectionMode::parse("multiple"), SelectionMode::Multiple);
    assert_eq!(SelectionMode::parse("radio"), SelectionMode::Multiple);
    assert_eq!(SelectionMode::parse(""), SelectionMode::Multiple);
    assert_eq!(SelectionMode::default(), SelectionMode::Multiple);
}

#[test]
fn test_mode_deserialize_falls_back() {
    let mode: SelectionMode = serde_json::from_str("\"single\"").unwrap();
    assert_eq!(mode, SelectionMode::Single);
    let mode: SelectionMode = serde_json::from_str("\"bogus\"").unwrap();
    assert_eq!(mode, SelectionMode::Multiple);
}
