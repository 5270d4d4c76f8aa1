//! Trigger Resolver - Single Entry Point
//!
//! Maps (event, commit message) to a WorkflowDecision. Total: every input
//! pair has a decision, nothing here returns an error.

use serde::Serialize;
use tracing::debug;

use crate::tags::{BuildTags, TagFamily, ValidationTags};
use crate::targets::{EventKind, Platform, ValidationFormat};

pub const NO_TAGS_REASON: &str = "No CI build or validate tags found in commit message";
pub const UNKNOWN_REASON: &str = "Unknown trigger reason";

/// The build/validation plan for one pipeline invocation.
///
/// Built once by [`TriggerResolver::resolve`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowDecision {
    should_run: bool,
    platforms: Vec<Platform>,
    validation_formats: Vec<ValidationFormat>,
    trigger_reason: String,
}

impl WorkflowDecision {
    pub fn should_run(&self) -> bool {
        self.should_run
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn validation_formats(&self) -> &[ValidationFormat] {
        &self.validation_formats
    }

    pub fn trigger_reason(&self) -> &str {
        &self.trigger_reason
    }
}

/// Classifies trigger events using the build and validation tag families.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerResolver {
    build: BuildTags,
    validation: ValidationTags,
}

impl TriggerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a full decision.
    pub fn resolve(&self, event: EventKind, message: &str) -> WorkflowDecision {
        let should_run = self.should_run(event, message);
        let platforms = self.build_platforms(event, message);
        let validation_formats = self.validation_formats(event, message);
        let trigger_reason = self.trigger_reason(event, message, &platforms, &validation_formats);

        debug!(
            event = %event,
            should_run,
            platforms = ?platforms,
            validation_formats = ?validation_formats,
            "resolved trigger"
        );

        WorkflowDecision {
            should_run,
            platforms,
            validation_formats,
            trigger_reason,
        }
    }

    pub fn should_run(&self, event: EventKind, message: &str) -> bool {
        if event.is_forcing() {
            return true;
        }
        self.build.any_present(message) || self.validation.any_present(message)
    }

    pub fn build_platforms(&self, event: EventKind, message: &str) -> Vec<Platform> {
        self.targets(&self.build, event, message)
    }

    pub fn validation_formats(&self, event: EventKind, message: &str) -> Vec<ValidationFormat> {
        self.targets(&self.validation, event, message)
    }

    fn targets<F: TagFamily>(&self, family: &F, event: EventKind, message: &str) -> Vec<F::Target> {
        if !self.should_run(event, message) {
            return vec![];
        }
        if event.is_forcing() {
            return family.all().to_vec();
        }
        let selected = family.selected(message);
        debug!(
            family = family.name(),
            generic = family.has_generic(message),
            count = selected.len(),
            "matched tags"
        );
        selected
    }

    /// Human-readable explanation of a decision.
    ///
    /// Clauses are tried in fixed order (build, then validation), each
    /// preferring the generic-tag wording over the specific-tag listing.
    pub fn trigger_reason(
        &self,
        event: EventKind,
        message: &str,
        platforms: &[Platform],
        formats: &[ValidationFormat],
    ) -> String {
        if !self.should_run(event, message) {
            return NO_TAGS_REASON.to_string();
        }
        if event.is_forcing() {
            return format!("Triggered by {} event", event);
        }

        let clauses: Vec<String> = [
            reason_clause(&self.build, message, platforms),
            reason_clause(&self.validation, message, formats),
        ]
        .into_iter()
        .flatten()
        .collect();

        if clauses.is_empty() {
            UNKNOWN_REASON.to_string()
        } else {
            clauses.join("; ")
        }
    }
}

fn reason_clause<F: TagFamily>(
    family: &F,
    message: &str,
    selected: &[F::Target],
) -> Option<String> {
    if family.has_generic(message) {
        return Some(format!("General {} tag found", family.generic_tag()));
    }
    if selected.is_empty() {
        return None;
    }
    let names: Vec<String> = selected.iter().map(|t| t.to_string()).collect();
    Some(format!("{}: {}", family.specific_label(), names.join(", ")))
}
