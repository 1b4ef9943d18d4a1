//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`target_url`] - Redirect target validation

pub mod code_generator;
pub mod target_url;
