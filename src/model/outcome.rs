//! Outcomes of running quizzes.

use std::fmt::Display;

/// The resolved category of a single quiz.
///
/// Outcomes are decided once, when the quiz is recorded, and never change
/// afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The quiz's condition held.
    Pass,
    /// The quiz's condition did not hold.
    Fail,
    /// The quiz was skipped, either on its own or through a skip-all.
    Skip,
    /// The quiz is known to be unfinished.
    Todo,
}

/// String representations for outcomes.
pub mod string {
    /// String representation for pass outcomes.
    pub const PASS: &str = "pass";
    /// String representation for fail outcomes.
    pub const FAIL: &str = "fail";
    /// String representation for skip outcomes.
    pub const SKIP: &str = "skip";
    /// String representation for todo outcomes.
    pub const TODO: &str = "todo";
}

/// We can produce a string representation of the outcome.
///
/// # Examples
///
/// ```
/// use quiz::model::Outcome;
/// assert_eq!(Outcome::Pass.to_string(), "pass");
/// assert_eq!(Outcome::Fail.to_string(), "fail");
/// assert_eq!(Outcome::Skip.to_string(), "skip");
/// assert_eq!(Outcome::Todo.to_string(), "todo");
/// ```
impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pass => string::PASS,
                Self::Fail => string::FAIL,
                Self::Skip => string::SKIP,
                Self::Todo => string::TODO,
            }
        )
    }
}

impl Outcome {
    /// Gets an iterator of each [Outcome].
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::model::Outcome;
    /// let set: std::collections::HashSet<Outcome> = Outcome::all().collect();
    ///
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains(&Outcome::Skip));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Pass, Self::Fail, Self::Skip, Self::Todo].into_iter()
    }

    /// Converts a pass/fail Boolean to an [Outcome].
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::model::Outcome;
    /// assert_eq!(Outcome::from_pass_bool(true), Outcome::Pass);
    /// assert_eq!(Outcome::from_pass_bool(false), Outcome::Fail);
    /// ```
    #[must_use]
    pub fn from_pass_bool(is_pass: bool) -> Self {
        if is_pass {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Resolves the outcome of a quiz.
    ///
    /// Skipping (either exam-wide through `global_skip`, or per-quiz through
    /// `skip`) beats `todo`, which beats the pass/fail reading of `passed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::model::Outcome;
    /// assert_eq!(Outcome::resolve(false, true, true, true), Outcome::Skip);
    /// assert_eq!(Outcome::resolve(true, false, true, false), Outcome::Skip);
    /// assert_eq!(Outcome::resolve(false, false, true, true), Outcome::Todo);
    /// assert_eq!(Outcome::resolve(false, false, false, false), Outcome::Fail);
    /// ```
    #[must_use]
    pub fn resolve(global_skip: bool, skip: bool, todo: bool, passed: bool) -> Self {
        if skip || global_skip {
            Self::Skip
        } else if todo {
            Self::Todo
        } else {
            Self::from_pass_bool(passed)
        }
    }

    /// Gets the TAP directive keyword attached to quizzes with this outcome,
    /// if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::model::Outcome;
    /// assert_eq!(Outcome::Skip.directive(), Some("SKIP"));
    /// assert_eq!(Outcome::Todo.directive(), Some("TODO"));
    /// assert_eq!(Outcome::Pass.directive(), None);
    /// ```
    #[must_use]
    pub fn directive(self) -> Option<&'static str> {
        match self {
            Self::Skip => Some("SKIP"),
            Self::Todo => Some("TODO"),
            Self::Pass | Self::Fail => None,
        }
    }
}
