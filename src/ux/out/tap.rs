//! The TAP outputter.

use super::abs::Outputter;
use crate::{
    err,
    exam::Exam,
    model::{Pragma, Quiz},
};
use std::io::{self, Write};

/// Fixed strings used in TAP reports.
pub mod string {
    /// The version header opening every report.
    pub const HEADER: &str = "TAP Version 14";
    /// The prefix of pragma lines.
    pub const PRAGMA: &str = "pragma";
    /// The prefix of quiz lines whose condition held.
    pub const OK: &str = "ok";
    /// The prefix of quiz lines whose condition didn't hold.
    pub const NOT_OK: &str = "not ok";
    /// The line closing a bailed-out report.
    pub const BAIL_OUT: &str = "Bail Out!";
}

/// An outputter that writes TAP version 14 reports.
///
/// # Examples
///
/// ```
/// use quiz::{ux::out::{Outputter, Tap}, Exam};
///
/// let mut exam = Exam::new("demo").unwrap();
/// exam.run("a", true, false, false).unwrap();
/// exam.run("b", false, false, false).unwrap();
///
/// let mut buf = Vec::new();
/// Tap::new(&mut buf).output(&exam).unwrap();
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "TAP Version 14\n1..2\nok 1 - a\nnot ok 2 - b\n"
/// );
/// ```
pub struct Tap<W> {
    w: W,
}

impl<W: Write> Outputter for Tap<W> {
    fn output(&mut self, exam: &Exam) -> err::Result<()> {
        writeln!(self.w, "{}", string::HEADER)?;
        for pragma in exam.pragmas() {
            self.dump_pragma(pragma)?;
        }
        self.dump_plan(exam)?;
        for (i, quiz) in exam.quizzes().enumerate() {
            self.dump_quiz(i + 1, quiz)?;
        }
        if exam.is_bailed() {
            writeln!(self.w, "{}", string::BAIL_OUT)?;
        }
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Tap<W> {
    /// Constructs a new TAP writer.
    pub fn new(writer: W) -> Self {
        Self { w: writer }
    }

    fn dump_pragma(&mut self, pragma: &Pragma) -> io::Result<()> {
        writeln!(
            self.w,
            "{} {}{}",
            string::PRAGMA,
            pragma.key(),
            pragma.sigil()
        )
    }

    /// Skip-all plans zero quizzes, however many were recorded.
    fn dump_plan(&mut self, exam: &Exam) -> io::Result<()> {
        let planned = if exam.is_skipped() {
            0
        } else {
            exam.total_count()
        };
        writeln!(self.w, "1..{}", planned)
    }

    fn dump_quiz(&mut self, index: usize, quiz: &Quiz) -> io::Result<()> {
        write!(
            self.w,
            "{status} {index} - {name}",
            status = status(quiz),
            index = index,
            name = quiz.name(),
        )?;
        if let Some(directive) = quiz.outcome().directive() {
            write!(self.w, " # {}", directive)?;
        }
        writeln!(self.w)
    }
}

/// The status prefix follows the raw condition, not the outcome; directives
/// carry skip and todo status separately.
fn status(quiz: &Quiz) -> &'static str {
    if quiz.passed() {
        string::OK
    } else {
        string::NOT_OK
    }
}
