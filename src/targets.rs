//! Target System - Events, Platforms, Formats
//!
//! All three enumerations are closed. Declaration order is the output order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CI event that started the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Push,
    PullRequest,
    Schedule,
    WorkflowDispatch,
    Release,
    /// Anything the CI system sends that we don't recognize
    Other,
}

impl EventKind {
    /// Parse a raw event name. Never fails: unknown names become `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "schedule" => Self::Schedule,
            "workflow_dispatch" => Self::WorkflowDispatch,
            "release" => Self::Release,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Schedule => "schedule",
            Self::WorkflowDispatch => "workflow_dispatch",
            Self::Release => "release",
            Self::Other => "other",
        }
    }

    /// Forcing events run the full matrix regardless of the commit message.
    pub fn is_forcing(&self) -> bool {
        matches!(self, Self::Schedule | Self::WorkflowDispatch | Self::Release)
    }
}

impl From<&str> for EventKind {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    Macos,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Windows, Platform::Macos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Macos => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plugin packaging format checked by the validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationFormat {
    Clap,
    Vst3,
    Auv2,
}

impl ValidationFormat {
    pub const ALL: [ValidationFormat; 3] = [
        ValidationFormat::Clap,
        ValidationFormat::Vst3,
        ValidationFormat::Auv2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clap => "clap",
            Self::Vst3 => "vst3",
            Self::Auv2 => "auv2",
        }
    }
}

impl fmt::Display for ValidationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
