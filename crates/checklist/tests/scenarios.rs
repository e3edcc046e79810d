//! User-level scenarios driven through a headless session.

use checklist::platform::headless::{HeadlessSession, MemoryStorage};
use checklist::{ClearOutcome, Config, Item, ItemId, SubmitOutcome};

const KEY: &str = checklist::config::DEFAULT_STORAGE_KEY;

fn session_with(stored: Option<&str>) -> HeadlessSession {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = match stored {
        Some(json) => MemoryStorage::with_value(KEY, json),
        None => MemoryStorage::new(),
    };
    HeadlessSession::start(Config::default(), store)
}

fn items(session: &HeadlessSession) -> Vec<(u64, &str)> {
    session
        .list()
        .all()
        .iter()
        .map(|item| (item.id().0, item.text()))
        .collect()
}

fn stored_items(session: &HeadlessSession) -> Vec<Item> {
    let json = session.store().get(KEY).expect("list was stored");
    serde_json::from_str(json).unwrap()
}

#[test]
fn submit_into_empty_list() {
    let mut session = session_with(None);

    assert_eq!(session.submit("Buy milk"), SubmitOutcome::Added(ItemId(1)));

    assert_eq!(items(&session), vec![(1, "Buy milk")]);
    assert_eq!(stored_items(&session), vec![Item::new(ItemId(1), "Buy milk")]);
    assert_eq!(session.view().row_labels(), vec!["Buy milk"]);
    assert_eq!(session.view().status(), "Buy milk added to the list.");
    assert!(session.view().is_input_focused());
}

#[test]
fn submit_uses_next_id_after_last() {
    let mut session = session_with(Some(r#"[{"id":1,"text":"A"},{"id":2,"text":"B"}]"#));

    assert_eq!(session.submit("C"), SubmitOutcome::Added(ItemId(3)));
    assert_eq!(items(&session), vec![(1, "A"), (2, "B"), (3, "C")]);
}

#[test]
fn whitespace_submission_is_ignored() {
    let mut session = session_with(Some(r#"[{"id":1,"text":"A"}]"#));
    let passes = session.view().render_passes();

    assert_eq!(session.submit("   "), SubmitOutcome::Ignored);

    assert_eq!(items(&session), vec![(1, "A")]);
    assert_eq!(session.store().write_count(), 0);
    assert_eq!(session.view().render_passes(), passes);
}

#[test]
fn completed_item_disappears_after_delay() {
    let mut session = session_with(Some(r#"[{"id":5,"text":"Task"}]"#));

    assert!(session.complete(ItemId(5)));

    // Removed and stored right away, the row lingers.
    assert!(session.list().is_empty());
    assert_eq!(session.store().get(KEY), Some("[]"));
    assert_eq!(session.view().row_labels(), vec!["Task"]);
    assert_eq!(session.view().status(), "Task removed from list.");

    assert_eq!(session.advance_by(2299), 0);
    assert_eq!(session.view().row_labels(), vec!["Task"]);
    assert_eq!(session.advance_by(1), 1);
    assert!(session.view().rows().is_empty());
    assert!(stored_items(&session).is_empty());
}

#[test]
fn declined_clear_keeps_everything() {
    let stored = r#"[{"id":1,"text":"A"},{"id":2,"text":"B"}]"#;
    let mut session = session_with(Some(stored));

    assert_eq!(session.clear_all(false), ClearOutcome::Declined);

    assert_eq!(items(&session), vec![(1, "A"), (2, "B")]);
    assert_eq!(session.store().get(KEY), Some(stored));
    assert_eq!(session.store().write_count(), 0);
    assert_eq!(
        session.view().prompts(),
        ["Do you want to clear the entire list?"]
    );
}

#[test]
fn confirmed_clear_renders_immediately() {
    let mut session = session_with(Some(r#"[{"id":1,"text":"A"},{"id":2,"text":"B"}]"#));
    assert!(session.complete(ItemId(1)));

    assert_eq!(session.clear_all(true), ClearOutcome::Cleared);

    assert!(session.list().is_empty());
    assert!(session.view().rows().is_empty());
    assert_eq!(session.store().get(KEY), Some("[]"));
    // The pending render from the completion no longer applies.
    assert_eq!(session.run_until_idle(), 0);
}

#[test]
fn clear_on_empty_list_does_not_prompt() {
    let mut session = session_with(None);

    assert_eq!(session.clear_all(true), ClearOutcome::AlreadyEmpty);
    assert!(session.view().prompts().is_empty());
    assert_eq!(session.store().write_count(), 0);
}

#[test]
fn removals_within_the_delay_collapse_into_one_render() {
    let mut session = session_with(None);
    for text in ["A", "B", "C"] {
        session.submit(text);
    }
    let passes = session.view().render_passes();

    assert!(session.complete(ItemId(1)));
    session.advance_by(1000);
    assert!(session.complete(ItemId(3)));

    assert_eq!(session.run_until_idle(), 1);
    assert_eq!(session.view().render_passes(), passes + 1);
    assert_eq!(session.view().row_labels(), vec!["B"]);
    assert_eq!(session.now_ms(), 3300);
}

#[test]
fn completing_twice_is_ignored() {
    let mut session = session_with(Some(r#"[{"id":1,"text":"A"}]"#));
    assert!(session.complete(ItemId(1)));
    let writes = session.store().write_count();

    assert!(!session.complete(ItemId(1)));
    assert_eq!(session.store().write_count(), writes);
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut session = session_with(None);
    let plan: &[(&str, Option<u64>)] = &[
        ("a", None),
        ("b", None),
        ("c", Some(3)),
        ("d", Some(1)),
        ("e", None),
        ("f", Some(5)),
        ("g", Some(2)),
        ("h", None),
    ];
    for (text, remove) in plan {
        session.submit(text);
        if let Some(id) = remove {
            session.complete(ItemId(*id));
        }
        let mut ids: Vec<_> = session.list().all().iter().map(Item::id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate id after submitting {text:?}");
    }
    session.run_until_idle();
    assert_eq!(session.view().row_labels(), vec!["d", "f", "g", "h"]);
}

#[test]
fn render_is_idempotent() {
    let mut session = session_with(Some(r#"[{"id":1,"text":"A"},{"id":2,"text":"B"}]"#));
    let rows = session.view().rows().to_vec();
    let passes = session.view().render_passes();

    session.render();
    session.render();

    assert_eq!(session.view().rows(), rows.as_slice());
    assert_eq!(session.view().render_passes(), passes + 2);
}

#[test]
fn malformed_stored_value_starts_empty() {
    let mut session = session_with(Some("{ definitely not a list"));
    assert!(session.list().is_empty());

    assert_eq!(session.submit("fresh"), SubmitOutcome::Added(ItemId(1)));
    assert_eq!(stored_items(&session), vec![Item::new(ItemId(1), "fresh")]);
}
