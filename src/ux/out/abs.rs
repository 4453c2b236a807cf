//! Abstract interface for outputters.

use crate::{err, exam::Exam};

/// Trait of things that can output an exam's results.
pub trait Outputter {
    /// Outputs the results recorded in `exam`, flushing and returning any
    /// errors arising.
    ///
    /// Outputting must not change the exam, so outputting the same exam twice
    /// gives the same results.
    fn output(&mut self, exam: &Exam) -> err::Result<()>;
}
