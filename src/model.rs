//! Record types owned by an exam.

pub mod label;
pub mod outcome;
pub mod pragma;
pub mod quiz;
pub mod summary;

pub use outcome::Outcome;
pub use pragma::Pragma;
pub use quiz::Quiz;
pub use summary::Summary;
