//! Core view-state newtypes

/// Height of one list item in rows. Always >= 1.
///
/// Every item in a windowed list shares the same height; a zero height would
/// make the window math divide by zero, so the smart constructor rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize)]
#[serde(try_from = "usize")]
pub struct ItemHeight(usize);

/// Error returned when attempting to create an ItemHeight of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ItemHeight must be >= 1 (got {0})")]
pub struct InvalidItemHeight(pub usize);

impl ItemHeight {
    /// Single-row items.
    pub const ONE: Self = Self(1);

    /// Smart constructor that validates the height is >= 1.
    pub fn new(height: usize) -> Result<Self, InvalidItemHeight> {
        if height == 0 {
            Err(InvalidItemHeight(height))
        } else {
            Ok(Self(height))
        }
    }

    /// Get the raw value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Height clamped into the range a terminal `Rect` can express.
    pub fn as_u16(&self) -> u16 {
        u16::try_from(self.0).unwrap_or(u16::MAX)
    }
}

impl Default for ItemHeight {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<usize> for ItemHeight {
    type Error = InvalidItemHeight;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Scroll metrics sampled from a host container.
///
/// Not owned by the list: it is read fresh from the container on every
/// scroll or resize signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// Rows scrolled past the top of the content.
    pub scroll_offset: usize,
    /// Rows visible inside the container.
    pub visible_height: usize,
}

impl ViewportState {
    /// Create a viewport sample.
    pub fn new(scroll_offset: usize, visible_height: usize) -> Self {
        Self {
            scroll_offset,
            visible_height,
        }
    }

    /// One past the last visible row.
    pub fn bottom(&self) -> usize {
        self.scroll_offset.saturating_add(self.visible_height)
    }
}
