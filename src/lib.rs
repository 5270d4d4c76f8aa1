//! PluginCI Core - Trigger Resolver
//!
//! # The Rules
//! 1. Forcing events always build everything
//! 2. Tags opt in, nothing opts out
//! 3. Generic tags beat specific tags
//! 4. Every input has an answer

pub mod targets;
pub mod tags;
pub mod resolver;
pub mod report;
pub mod telemetry;

pub use targets::{EventKind, Platform, ValidationFormat};
pub use tags::{TagFamily, BUILD_TAGS, VALIDATION_TAGS};
pub use resolver::{TriggerResolver, WorkflowDecision};
pub use report::{OutputFormat, ReportError, TriggerReport};
pub use telemetry::init_tracing;
