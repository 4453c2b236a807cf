//! Bailing out of an exam.

use std::num::NonZeroU8;

/// The exit status used when bailing out, unless configured otherwise.
pub const DEFAULT_STATUS: NonZeroU8 = match NonZeroU8::new(1) {
    Some(status) => status,
    None => panic!("default bail-out status must be non-zero"),
};

/// Evidence that an exam has bailed out and printed its final report.
///
/// The exam is gone by the time one of these exists; all that's left to do is
/// [exit](Bail::exit).
///
/// Statuses are non-zero bytes, so a bailed-out process never reports
/// success.
#[must_use = "a bailed-out test run should exit"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bail {
    status: NonZeroU8,
}

impl Bail {
    pub(super) fn new(status: NonZeroU8) -> Self {
        Self { status }
    }

    /// Gets the status the process should exit with.
    pub fn status(&self) -> NonZeroU8 {
        self.status
    }

    /// Exits the process with this bail-out's status.
    pub fn exit(self) -> ! {
        std::process::exit(i32::from(self.status.get()))
    }
}
