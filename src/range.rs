//! LED index ranges and the legacy packed encoding
//!
//! Block-editor call sites squeeze a `(from, to)` pair into a single
//! integer so it fits a one-argument slot. The proper API is the
//! [`LedRange`] struct; the packed form exists only for interop with
//! payloads produced by those call sites.

/// Marker byte distinguishing a packed range from a plain index.
const RANGE_MARKER: i32 = 0x02;

/// Largest raw value still interpreted as a plain 1-based index.
const PLAIN_INDEX_MAX: i32 = 16;

/// A closed interval of 1-based LED indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRange {
    pub from: u16,
    pub to: u16,
}

impl LedRange {
    pub const fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }

    /// Pack this range into the legacy single-integer encoding.
    pub const fn encode(self) -> i32 {
        (((self.from as i32) - 1) << 16) | (RANGE_MARKER << 8) | (self.to as i32)
    }

    /// Decode a raw legacy argument into a range.
    ///
    /// Values up to [`PLAIN_INDEX_MAX`] are plain 1-based indices and
    /// decode to a single-LED range. Larger values must carry the
    /// marker byte; anything else is malformed and yields `None`, as
    /// does a decoded `from > to` (the "range not yet set" sentinel).
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_raw(raw: i32) -> Option<Self> {
        let idx = raw - 1;
        if idx <= PLAIN_INDEX_MAX - 1 {
            if raw < 1 {
                return None;
            }
            return Some(Self::new(raw as u16, raw as u16));
        }
        if (idx >> 8) & 0xFF != RANGE_MARKER {
            return None;
        }
        let from = (idx >> 16) + 1;
        let to = (idx & 0xFF) + 1;
        if from > to {
            return None;
        }
        Some(Self::new(from as u16, to as u16))
    }
}
