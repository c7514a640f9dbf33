//! Shared types for labnote.
//!
//! Design goal: versioned, explicit, boring.
//! These structs are the persisted shape of trials, the snapshot handed to
//! the renderer, and the optional config file.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

pub const TRIAL_SCHEMA_V1: &str = "labnote.trial.v1";
pub const SNAPSHOT_SCHEMA_V1: &str = "labnote.snapshot.v1";

/// Exception type recorded for candidates that ran out of time.
///
/// Timeout detection is an exact string match against this value.
pub const TIMEOUT_ERROR_TYPE: &str = "timeout";

/// Observation name reserved for the control branch.
pub const CONTROL_NAME: &str = "control";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backtrace: Vec<String>,
}

impl ExceptionInfo {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            backtrace: Vec::new(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TIMEOUT_ERROR_TYPE, message)
    }

    pub fn is_timeout(&self) -> bool {
        self.type_name == TIMEOUT_ERROR_TYPE
    }
}

/// One execution of either the control or a candidate branch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Observation {
    pub name: String,

    /// Wall time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Cleaned return value, already serialized by the harness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionInfo>,
}

impl Observation {
    pub fn returned(name: impl Into<String>, duration: f64, value: Value) -> Self {
        Self {
            name: name.into(),
            duration: Some(duration),
            value: Some(value),
            exception: None,
        }
    }

    pub fn raised(name: impl Into<String>, duration: f64, exception: ExceptionInfo) -> Self {
        Self {
            name: name.into(),
            duration: Some(duration),
            value: None,
            exception: Some(exception),
        }
    }

    pub fn raised_error(&self) -> bool {
        self.exception.is_some()
    }

    pub fn timed_out(&self) -> bool {
        self.exception.as_ref().is_some_and(ExceptionInfo::is_timeout)
    }
}

/// The exclusive bucket a finished trial lands in.
#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Correct,
    Mismatched,
    TimedOut,
    OtherError,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 4] = [
        Category::Correct,
        Category::Mismatched,
        Category::TimedOut,
        Category::OtherError,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Correct => "correct",
            Category::Mismatched => "mismatched",
            Category::TimedOut => "timed out",
            Category::OtherError => "raised errors",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Correct => "correct",
            Category::Mismatched => "mismatched",
            Category::TimedOut => "timed_out",
            Category::OtherError => "other_error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub total: u64,
    pub correct: u64,
    pub mismatched: u64,
    pub timed_out: u64,
    pub other_error: u64,
}

impl ClassificationCounts {
    /// Count one more finished trial.
    pub fn record(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::Correct => self.correct += 1,
            Category::Mismatched => self.mismatched += 1,
            Category::TimedOut => self.timed_out += 1,
            Category::OtherError => self.other_error += 1,
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Correct => self.correct,
            Category::Mismatched => self.mismatched,
            Category::TimedOut => self.timed_out,
            Category::OtherError => self.other_error,
        }
    }

    /// `correct + mismatched + timed_out + other_error == total`
    pub fn is_consistent(&self) -> bool {
        Category::ALL
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(self.get(*c)))
            == Some(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Persisted form of one trial.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrialRecord {
    pub schema: String,
    pub id: u64,
    pub experiment: String,

    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub created_at: OffsetDateTime,

    #[serde(default)]
    pub equivalent: bool,

    /// Control returned normally while at least one candidate raised.
    #[serde(default)]
    pub raised_error: bool,

    /// Implies `raised_error`.
    #[serde(default)]
    pub timed_out: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_duration: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_duration: Option<f64>,

    /// control_duration - candidate_duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speedup_factor: Option<f64>,

    pub control: Observation,

    #[serde(default)]
    pub candidates: Vec<Observation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl TrialRecord {
    /// The single candidate, when there is exactly one.
    pub fn candidate(&self) -> Option<&Observation> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn timing(&self) -> TimingPair {
        TimingPair {
            time_delta: self.time_delta,
            speedup_factor: self.speedup_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimingPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speedup_factor: Option<f64>,
}

/// One consistent read of everything the summary needs.
///
/// `timings` only covers correct trials.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExperimentSnapshot {
    pub schema: String,
    pub experiment: String,
    pub counts: ClassificationCounts,

    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>")]
    pub earliest: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>")]
    pub latest: Option<OffsetDateTime>,

    #[serde(default)]
    pub timings: Vec<TimingPair>,
}

impl ExperimentSnapshot {
    pub fn empty(experiment: impl Into<String>) -> Self {
        Self {
            schema: SNAPSHOT_SCHEMA_V1.to_string(),
            experiment: experiment.into(),
            counts: ClassificationCounts::default(),
            earliest: None,
            latest: None,
            timings: Vec::new(),
        }
    }
}

// ----------------------------
// Optional config file schema
// ----------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Cells on each side of the chart's center cell.
    pub bar_scale: usize,

    /// Chart magnitude used when every speedup factor is exactly zero.
    pub default_magnitude: u32,

    /// Distance between charted percentiles.
    pub percentile_step: u32,

    /// Width of the `-` rule framing the summary.
    pub rule_width: usize,

    /// Leading spaces before each chart row.
    pub indent: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bar_scale: 25,
            default_magnitude: 25,
            percentile_step: 5,
            rule_width: 80,
            indent: 4,
        }
    }
}
