//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use kidari::domain::services::LessonDetail;
use kidari::{CheckPolicy, ViolationReport};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<CheckPolicy>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            policy: None,
        }
    }

    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}

/// One `lessonsDetail` row, streamed before the final report.
#[derive(Debug, Clone, Serialize)]
pub struct LessonEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub lesson: &'a LessonDetail,
}

impl<'a> LessonEvent<'a> {
    pub fn new(command: &'a str, lesson: &'a LessonDetail) -> Self {
        Self {
            event: "lesson",
            command,
            lesson,
        }
    }
}

/// Command payload that is not a stream of rows (`explain`)
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub brief: bool,
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            brief: false,
            data,
        }
    }

    pub fn brief(mut self, brief: bool) -> Self {
        self.brief = brief;
        self
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a ViolationReport>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
            report: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_report(mut self, report: &'a ViolationReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
