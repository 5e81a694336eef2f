//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that drives the
//! resource build from collected sources to the packaged bundle.
//!
//! # Module Organization
//!
//! - [`orchestrator`] - Main [`Bundler`] struct and the build pipeline
//! - [`workspace`] - Destination and scratch directory layout

mod orchestrator;
mod workspace;

pub use orchestrator::{BundleReport, Bundler};
pub use workspace::{INDEX_SOURCE_FILE_NAME, MANIFEST_FILE_NAME, Workspace};
