//! Sort direction and the negation that derives descending encoders.

use serde::{Deserialize, Serialize};

/// Byte order of an encoding relative to the natural order of its values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }
}

impl From<bool> for Direction {
    /// `true` selects [`Direction::Descending`].
    fn from(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Maps a value to the one whose ascending encoding sorts like the
/// descending encoding of the original.
pub trait Negate {
    fn negate(self) -> Self;
}

impl Negate for bool {
    fn negate(self) -> Self {
        !self
    }
}

impl Negate for f32 {
    fn negate(self) -> Self {
        -self
    }
}

impl Negate for f64 {
    fn negate(self) -> Self {
        -self
    }
}

/// Descending encoding as the ascending encoding of the negated value.
#[inline]
pub fn encode_descending<T: Negate>(
    buf: Vec<u8>,
    v: T,
    ascending: impl FnOnce(Vec<u8>, T) -> Vec<u8>,
) -> Vec<u8> {
    ascending(buf, v.negate())
}
