//! Tests for the TUI shell.

use super::*;
use crate::state::Screen;
use crate::test_harness::{harness_clock, harness_settings, sample_catalog, AcceptanceTestHarness};
use std::time::Duration;

#[test]
fn initial_search_applies_without_waiting() {
    let mut state = AppState::new(sample_catalog(), &harness_settings(), harness_clock());

    apply_initial_search(&mut state, "soup");

    let names: Vec<&str> = state.listed_events().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Soup day", "Breakfast"]);
    assert!(matches!(state.search(), SearchState::Active { .. }));
    assert_eq!(state.next_deadline(), None);
}

#[test]
fn blank_initial_search_leaves_list_alone() {
    let mut state = AppState::new(sample_catalog(), &harness_settings(), harness_clock());
    apply_initial_search(&mut state, "   ");
    assert_eq!(state.listed_events().len(), 3);
    assert_eq!(*state.search(), SearchState::Inactive);
}

#[test]
fn ctrl_c_quits_while_typing() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    harness.send_key(KeyCode::Char('/'));
    assert!(harness.state().search().is_typing());
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn q_is_typed_not_quit_while_searching() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    harness.send_key(KeyCode::Char('/'));
    assert!(!harness.send_key(KeyCode::Char('q')));
    assert_eq!(harness.state().search().text(), "q");
}

#[test]
fn help_overlay_swallows_other_keys() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    harness.send_key(KeyCode::Char('?'));
    assert!(harness.state().help_visible);
    assert!(harness.screen().contains("Keyboard Shortcuts"));

    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().screen(), Screen::MealEvents);

    harness.send_key(KeyCode::Esc);
    assert!(!harness.state().help_visible);
    assert!(!harness.screen().contains("Keyboard Shortcuts"));
}

#[test]
fn question_mark_closes_help_and_q_quits_from_it() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);

    harness.send_key(KeyCode::Char('?'));
    assert!(harness.send_key(KeyCode::Char('q')));
}

#[test]
fn key_release_events_are_ignored() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(!harness.handle_raw_key(release));
}

#[test]
fn tick_reports_day_rollover() {
    let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
    harness.send_key(KeyCode::Char('p'));
    assert_eq!(harness.state().listed_events().len(), 2);

    let tomorrow = harness_clock() + chrono::Duration::days(1);
    assert!(harness.tick_on(Duration::from_millis(1), tomorrow));
    // "Breakfast" on the 15th is now past
    assert_eq!(harness.state().listed_events().len(), 1);
}
