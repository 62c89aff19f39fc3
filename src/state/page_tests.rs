//! Tests for page data.

use super::*;
use crate::model::meal_event::fixtures::event;
use crate::test_harness::{comment, meal_request, menu_set, sample_catalog};
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn upcoming_events_are_after_now_and_soonest_first() {
    let events = vec![
        event(1, "Later", "", (2025, 3, 30)),
        event(2, "Earlier today", "", (2025, 3, 15)),
        event(3, "Yesterday", "", (2025, 3, 14)),
        event(4, "Soon", "", (2025, 3, 16)),
    ];

    let names: Vec<&str> = upcoming_events(&events, at(2025, 3, 15, 9))
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Earlier today", "Soon", "Later"]);

    // events are at noon; at 13:00 today's has started
    assert_eq!(upcoming_events(&events, at(2025, 3, 15, 13)).len(), 2);
}

#[test]
fn tally_counts_only_the_event() {
    let requests = vec![
        meal_request(1, 2, true, 3),
        meal_request(2, 2, false, 1),
        meal_request(3, 9, true, 7),
    ];

    let tally = RequestTally::for_event(&requests, MealEventId::new(2));
    assert_eq!(
        tally,
        RequestTally {
            requests: 2,
            confirmed: 1,
            quantity: 4,
        }
    );
    assert_eq!(
        RequestTally::for_event(&requests, MealEventId::new(5)),
        RequestTally::default()
    );
}

#[test]
fn replies_follow_their_parent() {
    let comments = vec![
        comment(1, 2, "Great soup", 5, None),
        comment(2, 2, "Too salty", 2, None),
        comment(3, 2, "Agreed", 4, Some(1)),
        comment(4, 7, "Other event", 3, None),
        comment(5, 2, "Orphan reply", 3, Some(99)),
    ];

    let texts: Vec<&str> = event_comments(&comments, MealEventId::new(2))
        .iter()
        .map(|c| c.comment.as_str())
        .collect();
    assert_eq!(texts, vec!["Great soup", "Agreed", "Too salty", "Orphan reply"]);
}

#[test]
fn admin_summary_counts_the_next_thirty_days() {
    let mut catalog = sample_catalog();
    catalog.meal_events.push(event(4, "Far away", "", (2025, 4, 14)));
    catalog.meal_events.push(event(5, "Last day", "", (2025, 4, 13)));
    catalog.menu_sets = (1..=7).map(|i| menu_set(i, &format!("Set {i}"), vec![])).collect();

    let summary = AdminSummary::compute(&catalog, day(2025, 3, 14), DayZone::utc());

    let names: Vec<&str> = summary.upcoming.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Pizza night", "Breakfast", "Last day"]);
    assert_eq!(summary.menu_items, 2);
    assert_eq!(summary.menu_sets, 7);
    assert_eq!(summary.recent_sets.len(), RECENT_LIMIT);
    assert_eq!(summary.recent_sets[0].menu_set_name, "Set 1");
}

#[test]
fn recent_events_are_capped() {
    let mut catalog = sample_catalog();
    catalog.meal_events = (1..=8)
        .map(|i| event(i, &format!("Event {i}"), "", (2025, 3, 15 + i as u32)))
        .collect();

    let summary = AdminSummary::compute(&catalog, day(2025, 3, 15), DayZone::utc());

    assert_eq!(summary.upcoming.len(), 8);
    assert_eq!(summary.recent_events().len(), RECENT_LIMIT);
    assert_eq!(summary.recent_events()[0].name, "Event 1");
}

#[test]
fn dashboard_starts_with_one_batch() {
    assert_eq!(
        Page::dashboard(),
        Page::Dashboard {
            shown: DASHBOARD_BATCH,
            selected: 0
        }
    );
    assert_eq!(Page::Admin.title(), "Admin Dashboard");
}
