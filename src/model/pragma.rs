//! The [Pragma] type.

use super::label;
use crate::err;

/// A named on/off directive printed in the report header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pragma {
    key: String,
    value: bool,
}

impl Pragma {
    /// Constructs a pragma, truncating `key`.
    pub(crate) fn new(key: &str, value: bool) -> err::Result<Self> {
        Ok(Self {
            key: label::truncate(key)?,
            value,
        })
    }

    /// Gets the (possibly truncated) key of this pragma.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets whether this pragma is being switched on.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Gets the sigil used to print this pragma's value: `+` for on, `-` for
    /// off.
    pub fn sigil(&self) -> char {
        if self.value {
            '+'
        } else {
            '-'
        }
    }
}
