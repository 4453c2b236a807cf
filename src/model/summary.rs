//! The [Summary] type.

use super::outcome::Outcome;

/// Aggregate counts over an exam's quizzes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// The number of quizzes of any outcome.
    pub total: usize,
    /// The number of passing quizzes.
    pub pass: usize,
    /// The number of failing quizzes.
    pub fail: usize,
    /// The number of skipped quizzes.
    pub skip: usize,
    /// The number of todo quizzes.
    pub todo: usize,
}

impl Summary {
    /// Adds an outcome to the summary, updating counts accordingly.
    pub fn insert(&mut self, outcome: Outcome) {
        self.total += 1;
        *self.slot(outcome) += 1;
    }

    /// Gets the count for a particular outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::model::{Outcome, Summary};
    ///
    /// let s: Summary = vec![Outcome::Pass, Outcome::Skip, Outcome::Pass].into_iter().collect();
    /// assert_eq!(s.get(Outcome::Pass), 2);
    /// assert_eq!(s.get(Outcome::Skip), 1);
    /// assert_eq!(s.get(Outcome::Fail), 0);
    /// assert_eq!(s.total, 3);
    /// ```
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Pass => self.pass,
            Outcome::Fail => self.fail,
            Outcome::Skip => self.skip,
            Outcome::Todo => self.todo,
        }
    }

    fn slot(&mut self, outcome: Outcome) -> &mut usize {
        match outcome {
            Outcome::Pass => &mut self.pass,
            Outcome::Fail => &mut self.fail,
            Outcome::Skip => &mut self.skip,
            Outcome::Todo => &mut self.todo,
        }
    }
}

impl std::iter::FromIterator<Outcome> for Summary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut s = Self::default();
        for o in iter {
            s.insert(o);
        }
        s
    }
}
