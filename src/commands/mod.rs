//! CLI command implementations.
//!
//! - **analyze**: catalog mixins under a path
//! - **init**: write a default configuration file

pub mod analyze;
pub mod init;
