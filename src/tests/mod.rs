//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp` through a `TestBackend`
//! with simulated time.
