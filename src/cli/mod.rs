//! CLI command implementations

pub mod reset;
pub mod show;
pub mod status;
pub mod submit;
