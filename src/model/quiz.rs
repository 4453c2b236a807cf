//! The [Quiz] type.

use super::{label, outcome::Outcome};
use crate::err;

/// The recorded result of a single quiz.
///
/// Quizzes are only ever built by their owning exam, and can't be changed once
/// built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    name: String,
    passed: bool,
    outcome: Outcome,
}

impl Quiz {
    /// Records a quiz, truncating `name` and resolving its outcome.
    pub(crate) fn new(
        name: &str,
        passed: bool,
        global_skip: bool,
        skip: bool,
        todo: bool,
    ) -> err::Result<Self> {
        Ok(Self {
            name: label::truncate(name)?,
            passed,
            outcome: Outcome::resolve(global_skip, skip, todo, passed),
        })
    }

    /// Gets the (possibly truncated) name of this quiz.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets whether the quiz's condition held when it was recorded.
    ///
    /// This is kept even when the outcome is a skip or a todo.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Gets the outcome resolved for this quiz.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
