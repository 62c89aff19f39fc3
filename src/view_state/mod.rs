//! View-state layer - windowing and scrolling for uniform-height lists
//!
//! This module holds the toolkit-independent half of the windowed list
//! renderer: the range math, the host scroll container, and the mounted
//! window that connects the two through scoped listeners. Rendering lives
//! in `crate::view::windowed_list`.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemHeight, ViewportState)
//! - `visible_range`: VisibleRange and WindowLayout - the window computation
//! - `container`: ScrollContainer - scroll metrics plus scroll/resize signals
//! - `window`: MountedWindow - a list mounted on a container

pub mod container;
pub mod types;
pub mod visible_range;
pub mod window;

pub use container::{ContainerSignal, ScrollContainer, Subscription};
pub use types::{InvalidItemHeight, ItemHeight, ViewportState};
pub use visible_range::{VisibleRange, WindowLayout, DEFAULT_OVERSCAN};
pub use window::{MountedWindow, WindowParams, WindowStats};
