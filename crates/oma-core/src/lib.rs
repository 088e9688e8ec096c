//! oma Core Library
//!
//! Installs skills, workflows and rules from a source repository into agent
//! directories, and keeps the generated catalog and documentation counts of
//! that repository in sync.

pub mod catalog;
pub mod config;
pub mod destinations;
pub mod error;
pub mod install;
pub mod logging;
pub mod metadata;
pub mod paths;
pub mod scope;
