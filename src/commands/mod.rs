//! CLI commands for oma

pub mod catalog;
pub mod dispatch;
pub mod doctor;
pub mod metadata;
pub mod setup;
pub mod verify;
