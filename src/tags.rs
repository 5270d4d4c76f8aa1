//! Tag System - Commit Message Markers
//!
//! Each family has one generic tag selecting everything and a closed table
//! of specific tags per target. Matching is literal and case-sensitive.

use std::fmt;

use crate::targets::{Platform, ValidationFormat};

/// A family of bracketed commit-message tags selecting targets of one kind.
pub trait TagFamily {
    type Target: Copy + fmt::Display + 'static;

    fn name(&self) -> &'static str;

    /// Prefix for the trigger reason when only specific tags matched.
    fn specific_label(&self) -> &'static str;

    /// Tag that selects every target in the family.
    fn generic_tag(&self) -> &'static str;

    /// Every target, in output order.
    fn all(&self) -> &'static [Self::Target];

    /// Tags that select a single target. Aliases share a target.
    fn specific_tags(&self, target: Self::Target) -> &'static [&'static str];

    fn has_generic(&self, message: &str) -> bool {
        message.contains(self.generic_tag())
    }

    fn has_specific(&self, message: &str, target: Self::Target) -> bool {
        self.specific_tags(target)
            .iter()
            .any(|tag| message.contains(tag))
    }

    /// True if any tag of this family, generic or specific, is present.
    fn any_present(&self, message: &str) -> bool {
        self.has_generic(message)
            || self.all().iter().any(|&t| self.has_specific(message, t))
    }

    /// Targets named by specific tags only, in output order.
    fn specific_targets(&self, message: &str) -> Vec<Self::Target> {
        self.all()
            .iter()
            .copied()
            .filter(|&t| self.has_specific(message, t))
            .collect()
    }

    /// Targets selected by the message: everything if the generic tag is
    /// present, otherwise the specific ones.
    fn selected(&self, message: &str) -> Vec<Self::Target> {
        if self.has_generic(message) {
            self.all().to_vec()
        } else {
            self.specific_targets(message)
        }
    }
}

/// `[ci-build]` and `[ci-build-<platform>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildTags;

impl TagFamily for BuildTags {
    type Target = Platform;

    fn name(&self) -> &'static str { "build" }

    fn specific_label(&self) -> &'static str { "Platform-specific build tags" }

    fn generic_tag(&self) -> &'static str { "[ci-build]" }

    fn all(&self) -> &'static [Platform] {
        &Platform::ALL
    }

    fn specific_tags(&self, platform: Platform) -> &'static [&'static str] {
        match platform {
            Platform::Linux => &["[ci-build-linux]", "[ci-build-ubuntu]"],
            Platform::Windows => &["[ci-build-windows]"],
            Platform::Macos => &["[ci-build-macos]"],
        }
    }
}

/// `[ci-validate]` and `[ci-validate-<format>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationTags;

impl TagFamily for ValidationTags {
    type Target = ValidationFormat;

    fn name(&self) -> &'static str { "validate" }

    fn specific_label(&self) -> &'static str { "Format-specific validation tags" }

    fn generic_tag(&self) -> &'static str { "[ci-validate]" }

    fn all(&self) -> &'static [ValidationFormat] {
        &ValidationFormat::ALL
    }

    fn specific_tags(&self, format: ValidationFormat) -> &'static [&'static str] {
        match format {
            ValidationFormat::Clap => &["[ci-validate-clap]"],
            ValidationFormat::Vst3 => &["[ci-validate-vst3]"],
            ValidationFormat::Auv2 => &["[ci-validate-auv2]"],
        }
    }
}

pub const BUILD_TAGS: BuildTags = BuildTags;
pub const VALIDATION_TAGS: ValidationTags = ValidationTags;
