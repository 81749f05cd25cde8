//! Blend CLI internals
//!
//! Configuration loading and the subcommand implementations behind the
//! `blend` binary.

pub mod commands;
pub mod config;

pub use config::BlendConfig;
