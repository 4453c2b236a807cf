//! Endpoints for outputting an exam's results to the user.
//!
//! The only format is TAP (via [Tap]), but anything implementing [Outputter]
//! can stand in for it.

pub mod abs;
pub mod tap;

pub use abs::Outputter;
pub use tap::Tap;
