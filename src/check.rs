//! A test runner for translation tests defined in YAML files
//!
//! The file format follows the liblouis YAML tests: a `flags` mapping selects the test mode and a
//! `tests` list holds the tests, each of them `[input, expected]` or `[description, input,
//! expected]`, optionally followed by a mapping with an `xfail` entry. See [`crate::yaml`].

use std::{fs::File, path::Path};

use enumset::EnumSet;
use log::debug;

use crate::{
    translator::{self, Direction},
    yaml::{self, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Invalid test file: {0}")]
    ParseError(#[from] yaml::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TestMode {
    #[default]
    Forward,
    Backward,
    BothDirections,
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
        direction: Direction,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
        direction: Direction,
    },
    UnexpectedSuccess {
        input: String,
        direction: Direction,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

pub type Directions = EnumSet<Direction>;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedFailure {
    Simple(bool),
    Reason(String),
    Direction(Directions),
}

impl Default for ExpectedFailure {
    fn default() -> Self {
        ExpectedFailure::Simple(false)
    }
}

impl ExpectedFailure {
    fn is_failure(&self, direction: Direction) -> bool {
        match &self {
            Self::Simple(v) => *v,
            Self::Reason(_) => true,
            Self::Direction(d) => d.contains(direction),
        }
    }
}

/// A test to verify a translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    description: Option<String>,
    input: String,
    expected: String,
    /// Is the test expected to fail?
    xfail: ExpectedFailure,
}

impl Test {
    pub fn new(
        description: Option<String>,
        input: String,
        expected: String,
        xfail: ExpectedFailure,
    ) -> Self {
        Test {
            description,
            input,
            expected,
            xfail,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn check(&self, direction: Direction) -> TestResult {
        let actual = translator::translate(&self.input, direction);
        if actual == self.expected {
            if !self.xfail.is_failure(direction) {
                TestResult::Success
            } else {
                TestResult::UnexpectedSuccess {
                    input: self.input.to_string(),
                    direction,
                }
            }
        } else if self.xfail.is_failure(direction) {
            TestResult::ExpectedFailure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
                direction,
            }
        } else {
            TestResult::Failure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
                direction,
            }
        }
    }

    /// Create a reversed copy of the test by swapping input and expected values, so that a test
    /// written for the forward direction can be checked backward.
    pub fn reverse(self) -> Self {
        Test {
            input: self.expected,
            expected: self.input,
            ..self
        }
    }
}

/// A group of [`Tests`](Test) that share the same [`TestMode`].
#[derive(Debug, PartialEq)]
pub struct TestSuite {
    mode: TestMode,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(mode: TestMode, tests: Vec<Test>) -> Self {
        TestSuite { mode, tests }
    }

    pub fn check(&self) -> Vec<TestResult> {
        let mut results = Vec::new();
        if matches!(self.mode, TestMode::Forward | TestMode::BothDirections) {
            for test in &self.tests {
                results.push(test.check(Direction::Forward));
            }
        }
        // ignore the backward tests if UEB_TEST_FORWARD_ONLY is defined
        if option_env!("UEB_TEST_FORWARD_ONLY").is_none() {
            match self.mode {
                TestMode::Backward => {
                    for test in &self.tests {
                        results.push(test.check(Direction::Backward));
                    }
                }
                TestMode::BothDirections => {
                    // the expected braille becomes the input
                    for test in self.tests.iter().cloned().map(|t| t.reverse()) {
                        results.push(test.check(Direction::Backward));
                    }
                }
                TestMode::Forward => (),
            }
        }
        debug!("checked {} tests in {:?} mode", self.tests.len(), self.mode);
        results
    }
}

/// Run all tests defined in the YAML file at `path`.
///
/// # Errors
///
/// Returns a [`TestError`] if the file cannot be read or is not a valid test file.
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, TestError> {
    let file = File::open(path)?;
    let mut parser = YAMLParser::new(file)?;
    let suites = parser.yaml()?;
    Ok(suites.iter().flat_map(|suite| suite.check()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test(input: &str, expected: &str) -> Test {
        Test::new(
            None,
            input.to_string(),
            expected.to_string(),
            ExpectedFailure::default(),
        )
    }

    #[test]
    fn check_forward() {
        let suite = TestSuite::new(
            TestMode::Forward,
            vec![test("abc", "⠁⠃⠉"), test("some text", "some braille")],
        );
        assert_eq!(
            suite.check(),
            vec![
                TestResult::Success,
                TestResult::Failure {
                    input: "some text".to_string(),
                    expected: "some braille".to_string(),
                    actual: "⠎⠕⠍⠑⠀⠞⠑⠭⠞".to_string(),
                    direction: Direction::Forward,
                }
            ]
        );
    }

    #[test]
    fn check_both_directions() {
        let suite = TestSuite::new(TestMode::BothDirections, vec![test("A1", "⠠⠁⠼⠁")]);
        assert_eq!(suite.check(), vec![TestResult::Success, TestResult::Success]);
    }

    #[test]
    fn check_expected_failure() {
        let xfail = Test::new(
            Some("directional quotes are normalized".to_string()),
            "“a”".to_string(),
            "⠶⠁⠶".to_string(),
            ExpectedFailure::Direction(Directions::only(Direction::Backward)),
        );
        let suite = TestSuite::new(TestMode::BothDirections, vec![xfail]);
        let results = suite.check();
        assert!(results[0].is_success());
        assert!(results[1].is_expected_failure());
    }

    #[test]
    fn reverse() {
        let reversed = test("a", "⠁").reverse();
        assert_eq!(reversed, test("⠁", "a"));
    }
}
