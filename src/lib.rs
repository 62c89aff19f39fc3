//! mealdesk
//!
//! Terminal client for browsing the meal events, menu items and menu sets
//! of a catering coordination service. Lists are virtualized: only the
//! cards inside the scroll window (plus overscan) are laid out and drawn.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
