//! Lightweight tracking of test results, reported as TAP version 14.
//!
//! An [Exam] records the outcome of each [Quiz](model::Quiz) a test runner
//! hands it, and prints the lot as a TAP report on request.
//!
//! ```
//! use quiz::Exam;
//!
//! let mut exam = Exam::new("arithmetic").unwrap();
//! exam.pragma("strict", true).unwrap();
//! exam.run("addition", 1 + 1 == 2, false, false).unwrap();
//! exam.run("division", false, false, true).unwrap();
//!
//! let mut report = Vec::new();
//! exam.output_to(&mut report).unwrap();
//! assert_eq!(
//!     String::from_utf8(report).unwrap(),
//!     "TAP Version 14\npragma strict+\n1..2\nok 1 - addition\nnot ok 2 - division # TODO\n"
//! );
//! ```

pub mod config;
pub mod err;
pub mod exam;
pub mod model;
pub mod ux;

pub use exam::Exam;
