//! Error types and error handling for the parser.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for structural and expression errors
//! - Error formatting and suggestions

pub mod errors;
