//! The [Exam] type: a test run and everything recorded in it.

pub mod bail;

pub use bail::Bail;

use crate::{
    config, err,
    model::{label, Outcome, Pragma, Quiz, Summary},
    ux::out::{Outputter, Tap},
};
use std::{
    io::{self, Write},
    num::NonZeroU8,
};
use tracing::{debug, error, warn};

/// A test run, made up of an ordered sequence of quizzes and pragmas.
///
/// An exam owns all of its records; dropping it frees them.  Records can only
/// be read from outside, never changed.
///
/// # Examples
///
/// ```
/// use quiz::{model::Outcome, Exam};
///
/// let mut exam = Exam::new("demo").unwrap();
/// exam.run("adds", 1 + 1 == 2, false, false).unwrap();
/// exam.run("later", false, false, true).unwrap();
///
/// assert_eq!(exam.total_count(), 2);
/// assert_eq!(exam.pass_count(), 1);
/// assert_eq!(exam.quiz(1).map(|q| q.outcome()), Some(Outcome::Todo));
/// assert!(exam.quiz(2).is_none());
/// ```
#[derive(Debug)]
pub struct Exam {
    name: String,
    skipped: bool,
    bailed: bool,
    bail_status: NonZeroU8,
    quizzes: Vec<Quiz>,
    pragmas: Vec<Pragma>,
}

impl Exam {
    /// Creates an empty exam called `name`.
    ///
    /// Names longer than [label::MAX_LEN] characters are silently truncated.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Alloc] if the name can't be allocated.
    pub fn new(name: &str) -> err::Result<Self> {
        Ok(Self {
            name: label::truncate(name)?,
            skipped: false,
            bailed: false,
            bail_status: bail::DEFAULT_STATUS,
            quizzes: Vec::new(),
            pragmas: Vec::new(),
        })
    }

    /// Creates an exam as described by `config`.
    ///
    /// Pragmas are issued in the order the config lists them; skip-all, if
    /// set, happens after.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Alloc] if any record can't be allocated.
    pub fn from_config(config: &config::Config) -> err::Result<Self> {
        let mut exam = Self::new(&config.name)?.with_bail_status(config.bail_status);
        for p in &config.pragmas {
            exam.pragma(&p.key, p.value)?;
        }
        if config.skip_all {
            exam.skip_all();
        }
        Ok(exam)
    }

    /// Sets the status the process exits with on [bail_out](Exam::bail_out).
    ///
    /// The status is a non-zero byte, so bailing out always reports failure.
    #[must_use]
    pub fn with_bail_status(mut self, status: NonZeroU8) -> Self {
        self.bail_status = status;
        self
    }

    /// Records a quiz called `name`.
    ///
    /// `passed` is the truth of the quiz's condition.  Either `skip` or `todo`
    /// overrides the outcome with a directive; `skip` wins if both are given,
    /// and every quiz is skipped after [skip_all](Exam::skip_all).
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Alloc] if the quiz can't be stored, in which
    /// case the exam is left as it was.
    pub fn run(&mut self, name: &str, passed: bool, skip: bool, todo: bool) -> err::Result<()> {
        self.quizzes.try_reserve(1)?;
        let quiz = Quiz::new(name, passed, self.skipped, skip, todo)?;
        debug!(
            exam = %self.name,
            quiz = quiz.name(),
            outcome = %quiz.outcome(),
            "recorded quiz"
        );
        self.quizzes.push(quiz);
        Ok(())
    }

    /// Skips every quiz recorded from now on, and plans zero quizzes in the
    /// report.
    ///
    /// Quizzes recorded before the call keep their outcomes.
    pub fn skip_all(&mut self) {
        debug!(exam = %self.name, "skipping all");
        self.skipped = true;
    }

    /// Issues a pragma switching `key` on (if `value`) or off.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Alloc] if the pragma can't be stored, in which
    /// case the exam is left as it was.
    pub fn pragma(&mut self, key: &str, value: bool) -> err::Result<()> {
        self.pragmas.try_reserve(1)?;
        let pragma = Pragma::new(key, value)?;
        debug!(exam = %self.name, key = pragma.key(), value, "issued pragma");
        self.pragmas.push(pragma);
        Ok(())
    }

    /// Bails out: prints the final report to stdout with a bail-out marker,
    /// frees the exam, and exits the process.
    ///
    /// The report is always written before the process exits.
    pub fn bail_out(self) -> ! {
        let stdout = io::stdout();
        let status = self.bail_status;
        match self.bail_out_to(stdout.lock()) {
            Ok(bail) => bail.exit(),
            Err(e) => {
                error!(error = %e, "couldn't write bail-out report");
                Bail::new(status).exit()
            }
        }
    }

    /// Bails out like [bail_out](Exam::bail_out), but writes the report to
    /// `writer` and leaves exiting to the caller.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Io] if the report can't be written; the exam
    /// is freed regardless.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiz::Exam;
    ///
    /// let mut exam = Exam::new("demo").unwrap();
    /// exam.run("a", true, false, false).unwrap();
    ///
    /// let mut buf = Vec::new();
    /// let bail = exam.bail_out_to(&mut buf).unwrap();
    /// assert_eq!(bail.status(), 1);
    /// assert!(String::from_utf8(buf).unwrap().ends_with("ok 1 - a\nBail Out!\n"));
    /// ```
    pub fn bail_out_to<W: Write>(mut self, writer: W) -> err::Result<Bail> {
        warn!(exam = %self.name, quizzes = self.quizzes.len(), "bailing out");
        self.bailed = true;
        self.output_to(writer)?;
        Ok(Bail::new(self.bail_status))
    }

    /// Prints the report, in TAP version 14 format, to stdout.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Io] if stdout can't be written.
    pub fn print_results(&self) -> err::Result<()> {
        let stdout = io::stdout();
        self.output_to(stdout.lock())
    }

    /// Writes the report, in TAP version 14 format, to `writer`.
    ///
    /// # Errors
    ///
    /// Fails with [err::Error::Io] if `writer` can't be written.
    pub fn output_to<W: Write>(&self, writer: W) -> err::Result<()> {
        debug!(exam = %self.name, quizzes = self.quizzes.len(), "writing report");
        Tap::new(writer).output(self)
    }

    /// Gets the (possibly truncated) name of this exam.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets whether [skip_all](Exam::skip_all) has been called.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Gets whether this exam has bailed out.
    pub fn is_bailed(&self) -> bool {
        self.bailed
    }

    /// Gets the quiz at `index` (counting from 0), if there is one.
    pub fn quiz(&self, index: usize) -> Option<&Quiz> {
        self.quizzes.get(index)
    }

    /// Iterates over the quizzes in the order they were recorded.
    pub fn quizzes(&self) -> impl Iterator<Item = &Quiz> + '_ {
        self.quizzes.iter()
    }

    /// Iterates over the pragmas in the order they were issued.
    pub fn pragmas(&self) -> impl Iterator<Item = &Pragma> + '_ {
        self.pragmas.iter()
    }

    /// Gets the number of quizzes recorded so far.
    pub fn total_count(&self) -> usize {
        self.quizzes.len()
    }

    /// Gets the number of quizzes recorded with outcome `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.quizzes.iter().filter(|q| q.outcome() == outcome).count()
    }

    /// Gets the number of passing quizzes.
    pub fn pass_count(&self) -> usize {
        self.count(Outcome::Pass)
    }

    /// Gets the number of failing quizzes.
    pub fn fail_count(&self) -> usize {
        self.count(Outcome::Fail)
    }

    /// Gets the number of skipped quizzes.
    pub fn skip_count(&self) -> usize {
        self.count(Outcome::Skip)
    }

    /// Gets the number of todo quizzes.
    pub fn todo_count(&self) -> usize {
        self.count(Outcome::Todo)
    }

    /// Gets every count at once.
    pub fn summary(&self) -> Summary {
        self.quizzes.iter().map(Quiz::outcome).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::outcome::tests::RESOLUTIONS;

    /// Set in a re-run of this test binary to make [bail_out_child] bail out
    /// with the given status (or the default, if empty).
    const BAIL_CHILD_ENV: &str = "QUIZ_TEST_BAIL_STATUS";

    fn status(n: u8) -> NonZeroU8 {
        NonZeroU8::new(n).unwrap()
    }

    fn report(exam: &Exam) -> String {
        let mut buf = Vec::new();
        exam.output_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_new_empty() {
        let exam = Exam::new("demo").unwrap();
        assert_eq!(exam.name(), "demo");
        assert!(!exam.is_skipped());
        assert!(!exam.is_bailed());
        assert_eq!(exam.total_count(), 0);
        assert_eq!(exam.pragmas().count(), 0);
        assert_eq!(exam.summary(), Summary::default());
    }

    #[test]
    /// Exam names are truncated at creation.
    fn test_new_truncates_name() {
        let name = "n".repeat(label::MAX_LEN + 1);
        assert_eq!(Exam::new(&name).unwrap().name(), &name[..label::MAX_LEN]);
    }

    #[test]
    /// Recording through an exam applies the outcome priority rule in every
    /// case.
    fn test_run_resolution() {
        for &(global_skip, skip, todo, passed, want) in RESOLUTIONS {
            let mut exam = Exam::new("resolve").unwrap();
            if global_skip {
                exam.skip_all();
            }
            exam.run("q", passed, skip, todo).unwrap();
            let quiz = exam.quiz(0).unwrap();
            assert_eq!(quiz.outcome(), want);
            assert_eq!(quiz.passed(), passed);
        }
    }

    #[test]
    /// Skip-all only affects quizzes recorded after it.
    fn test_skip_all_not_retroactive() {
        let mut exam = Exam::new("skip").unwrap();
        exam.run("before-pass", true, false, false).unwrap();
        exam.run("before-fail", false, false, false).unwrap();
        exam.run("before-todo", true, false, true).unwrap();
        exam.skip_all();
        exam.skip_all();
        exam.run("after-pass", true, false, false).unwrap();
        exam.run("after-todo", false, false, true).unwrap();

        let outcomes: Vec<Outcome> = exam.quizzes().map(Quiz::outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Pass,
                Outcome::Fail,
                Outcome::Todo,
                Outcome::Skip,
                Outcome::Skip
            ]
        );
    }

    #[test]
    /// Counts track every recorded quiz and always sum to the total.
    fn test_counts_monotonic() {
        let mut exam = Exam::new("counts").unwrap();
        for (i, &(global_skip, skip, todo, passed, _)) in RESOLUTIONS.iter().enumerate() {
            if global_skip {
                break;
            }
            exam.run(&format!("q{}", i), passed, skip, todo).unwrap();
            let n = i + 1;
            assert_eq!(exam.total_count(), n);
            assert_eq!(
                exam.pass_count() + exam.fail_count() + exam.skip_count() + exam.todo_count(),
                n
            );
        }
        let summary = exam.summary();
        assert_eq!(summary.total, 8);
        assert_eq!(summary.pass, exam.pass_count());
        assert_eq!(summary.fail, exam.fail_count());
        assert_eq!(summary.skip, exam.skip_count());
        assert_eq!(summary.todo, exam.todo_count());
        assert_eq!((summary.pass, summary.fail, summary.skip, summary.todo), (1, 1, 4, 2));
    }

    #[test]
    /// Index lookups are only valid inside `[0, total_count())`.
    fn test_quiz_bounds() {
        let mut exam = Exam::new("bounds").unwrap();
        assert!(exam.quiz(0).is_none());
        exam.run("a", true, false, false).unwrap();
        exam.run("b", false, false, false).unwrap();
        assert_eq!(exam.quiz(0).map(Quiz::name), Some("a"));
        assert_eq!(exam.quiz(1).map(Quiz::name), Some("b"));
        assert!(exam.quiz(2).is_none());
        assert!(exam.quiz(usize::MAX).is_none());
    }

    #[test]
    /// The report has a header, one line per pragma, a plan, and one line per
    /// quiz.
    fn test_report_line_count() {
        let mut exam = Exam::new("lines").unwrap();
        exam.pragma("strict", true).unwrap();
        exam.pragma("abc", false).unwrap();
        exam.pragma("xyz", true).unwrap();
        for i in 0..5 {
            exam.run(&i.to_string(), i % 2 == 0, i == 3, i == 4).unwrap();
        }
        assert_eq!(report(&exam).lines().count(), 1 + 3 + 1 + 5);
    }

    #[test]
    fn test_scenario_pass_and_fail() {
        let mut exam = Exam::new("demo").unwrap();
        exam.run("a", true, false, false).unwrap();
        exam.run("b", false, false, false).unwrap();
        assert_eq!(report(&exam), "TAP Version 14\n1..2\nok 1 - a\nnot ok 2 - b\n");
    }

    #[test]
    fn test_scenario_skip_all() {
        let mut exam = Exam::new("demo").unwrap();
        exam.skip_all();
        exam.run("a", false, false, false).unwrap();
        assert_eq!(exam.quiz(0).map(Quiz::outcome), Some(Outcome::Skip));
        assert_eq!(report(&exam), "TAP Version 14\n1..0\nnot ok 1 - a # SKIP\n");
    }

    #[test]
    fn test_scenario_todo() {
        let mut exam = Exam::new("demo").unwrap();
        exam.run("later", false, false, true).unwrap();
        let quiz = exam.quiz(0).unwrap();
        assert_eq!(quiz.outcome(), Outcome::Todo);
        assert!(!quiz.passed());
        assert_eq!(report(&exam).lines().last(), Some("not ok 1 - later # TODO"));
    }

    #[test]
    fn test_scenario_pragmas() {
        let mut exam = Exam::new("demo").unwrap();
        exam.pragma("strict", true).unwrap();
        exam.pragma("abc", false).unwrap();
        assert_eq!(report(&exam), "TAP Version 14\npragma strict+\npragma abc-\n1..0\n");
    }

    #[test]
    fn test_scenario_bail_out() {
        let mut exam = Exam::new("demo").unwrap().with_bail_status(status(3));
        exam.run("a", true, false, false).unwrap();
        exam.run("b", false, false, false).unwrap();

        let mut buf = Vec::new();
        let bail = exam.bail_out_to(&mut buf).unwrap();
        assert_eq!(bail.status(), status(3));
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "TAP Version 14\n1..2\nok 1 - a\nnot ok 2 - b\nBail Out!\n"
        );
    }

    #[test]
    /// Pragma keys and quiz names are truncated like exam names.
    fn test_labels_truncated() {
        let long = "z".repeat(100);
        let mut exam = Exam::new("labels").unwrap();
        exam.pragma(&long, true).unwrap();
        exam.run(&long, true, false, false).unwrap();
        assert_eq!(exam.pragmas().next().map(Pragma::key), Some(&long[..label::MAX_LEN]));
        assert_eq!(exam.quiz(0).map(Quiz::name), Some(&long[..label::MAX_LEN]));
    }

    #[test]
    /// Configs issue their pragmas in order, then skip all.
    fn test_from_config() {
        let config: config::Config = r#"
name = "configured"
skip_all = true
bail_status = 2

[[pragma]]
key = "strict"
value = true

[[pragma]]
key = "abc"
value = false
"#
        .parse()
        .unwrap();

        let mut exam = Exam::from_config(&config).unwrap();
        assert_eq!(exam.name(), "configured");
        assert!(exam.is_skipped());
        exam.run("a", true, false, false).unwrap();
        assert_eq!(
            report(&exam),
            "TAP Version 14\npragma strict+\npragma abc-\n1..0\nok 1 - a # SKIP\n"
        );
        assert_eq!(exam.bail_out_to(io::sink()).unwrap().status(), status(2));
    }
    #[test]
    /// Does nothing unless re-run by [test_bail_out_exits]; then records two
    /// quizzes and bails out for real.
    fn bail_out_child() {
        let requested = match std::env::var(BAIL_CHILD_ENV) {
            Ok(s) => s,
            Err(_) => return,
        };
        let mut exam = Exam::new("demo").unwrap();
        if !requested.is_empty() {
            exam = exam.with_bail_status(requested.parse().unwrap());
        }
        exam.run("a", true, false, false).unwrap();
        exam.run("b", false, false, false).unwrap();
        exam.bail_out()
    }

    /// Re-runs this test binary on [bail_out_child], returning its exit code
    /// and stdout.
    fn run_bail_out_child(requested: &str) -> (Option<i32>, String) {
        let output = std::process::Command::new(std::env::current_exe().unwrap())
            .args(&["--exact", "exam::tests::bail_out_child", "--test-threads=1"])
            .env(BAIL_CHILD_ENV, requested)
            .output()
            .unwrap();
        (
            output.status.code(),
            String::from_utf8(output.stdout).unwrap(),
        )
    }

    #[test]
    /// Bailing out prints the whole report, then exits the process with a
    /// failing status.
    fn test_bail_out_exits() {
        for &(requested, want) in [("", 1), ("3", 3), ("255", 255)].iter() {
            let (code, stdout) = run_bail_out_child(requested);
            assert_eq!(code, Some(want), "status {:?}", requested);
            assert!(stdout.contains("TAP Version 14\n1..2\n"), "{}", stdout);
            assert!(
                stdout.ends_with("ok 1 - a\nnot ok 2 - b\nBail Out!\n"),
                "{}",
                stdout
            );
        }
    }

    #[test]
    /// Statuses that would read as success can't be configured.
    fn test_bail_status_never_zero() {
        for bad in ["bail_status = 0", "bail_status = 256", "bail_status = -1"].iter() {
            assert!(bad.parse::<config::Config>().is_err(), "{}", bad);
        }
        assert!("0".parse::<NonZeroU8>().is_err());
    }
}
