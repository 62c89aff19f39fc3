//! Meal events: a dated occasion with delivery addresses and offered menu sets.

use super::calendar::DayZone;
use super::identifiers::{AddressId, MealEventId, MenuSetId};
use super::menu::MenuSet;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A delivery location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAddress {
    /// Address id.
    pub id: AddressId,
    /// Short name, e.g. "HQ".
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address_line: String,
}

/// Link between an event and one of its delivery locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEventAddress {
    /// Link id.
    pub id: u64,
    /// Linked address.
    pub address_id: AddressId,
    /// Linked event.
    pub meal_event_id: MealEventId,
    /// The address itself.
    pub address: EventAddress,
}

/// A menu set offered at an event, with an event-specific label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEventSet {
    /// Link id.
    pub id: u64,
    /// Linked event.
    pub meal_event_id: MealEventId,
    /// Linked set.
    pub menu_set_id: MenuSetId,
    /// Label shown at this event, e.g. "Vegetarian".
    #[serde(default)]
    pub label: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
    /// The offered set.
    pub menu_set: MenuSet,
}

/// A dated meal occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEvent {
    /// Event id.
    pub id: MealEventId,
    /// Title.
    pub name: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// When the meal is served.
    pub event_date: DateTime<Utc>,
    /// Duration in minutes.
    #[serde(default)]
    pub event_duration: u32,
    /// Requests close at this instant.
    pub cutoff_time: DateTime<Utc>,
    /// Delivery locations; the first is the primary one.
    #[serde(default)]
    pub addresses: Vec<MealEventAddress>,
    /// Sets on offer.
    #[serde(default)]
    pub menu_sets: Vec<MealEventSet>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MealEvent {
    /// Calendar day of the event in `zone`.
    pub fn event_day_in(&self, zone: DayZone) -> NaiveDate {
        zone.day_of(self.event_date)
    }

    /// True when the event's day in `zone` is strictly before `today`.
    ///
    /// An event later on the same day is not past.
    pub fn is_past_on(&self, today: NaiveDate, zone: DayZone) -> bool {
        self.event_day_in(zone) < today
    }

    /// First delivery location, if any.
    pub fn primary_address(&self) -> Option<&EventAddress> {
        self.addresses.first().map(|a| &a.address)
    }

    /// Whether requests are still accepted at `now`.
    pub fn accepts_requests_at(&self, now: DateTime<Utc>) -> bool {
        now < self.cutoff_time
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::event;
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_api_payload() {
        let json = r#"{
            "id": 9,
            "name": "Friday lunch",
            "description": "Team lunch",
            "event_date": "2025-03-14T12:00:00Z",
            "event_duration": 90,
            "cutoff_time": "2025-03-13T17:00:00Z",
            "addresses": [
                {"id": 1, "address_id": 4, "meal_event_id": 9,
                 "address": {"id": 4, "name": "HQ", "address_line": "1 Main St"}}
            ],
            "menu_sets": []
        }"#;
        let ev: MealEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.id, MealEventId::new(9));
        assert_eq!(ev.primary_address().map(|a| a.name.as_str()), Some("HQ"));
        assert_eq!(
            ev.event_day_in(DayZone::utc()),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
    }

    #[test]
    fn same_day_is_not_past() {
        let ev = event(1, "Lunch", "", (2025, 3, 14));
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(!ev.is_past_on(today, DayZone::utc()));
        assert!(ev.is_past_on(today.succ_opt().unwrap(), DayZone::utc()));
    }

    #[test]
    fn past_is_judged_on_the_local_calendar() {
        // 13:00 UTC on the 14th is already the 15th at UTC+11
        let mut ev = event(1, "Late lunch", "", (2025, 3, 14));
        ev.event_date = Utc.with_ymd_and_hms(2025, 3, 14, 13, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let east = DayZone::Fixed(chrono::FixedOffset::east_opt(11 * 3600).unwrap());
        let west = DayZone::Fixed(chrono::FixedOffset::west_opt(5 * 3600).unwrap());

        assert!(ev.is_past_on(today, DayZone::utc()));
        assert!(!ev.is_past_on(today, east));
        assert!(ev.is_past_on(today, west));
        assert_eq!(ev.event_day_in(east), today);
    }

    #[test]
    fn cutoff_closes_requests() {
        let ev = event(1, "Lunch", "", (2025, 3, 14));
        let before = Utc.with_ymd_and_hms(2025, 3, 13, 11, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 3, 13, 13, 0, 0).unwrap();
        assert!(ev.accepts_requests_at(before));
        assert!(!ev.accepts_requests_at(after));
    }
}
