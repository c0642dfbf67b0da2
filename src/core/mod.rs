//! Core library components.
//!
//! This module contains the encryption stage, the template catalog and
//! the idempotent scaffold writer.

pub mod config;
pub mod constants;
pub mod encrypt;
pub mod project;
pub mod properties;
pub mod runner;
pub mod scaffold;
pub mod template;
pub mod types;
