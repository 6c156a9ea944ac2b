//! Utilities and Helper Functions
//!
//! This module contains helpers that are not part of the font engine:
//! - Logging configuration and setup

pub mod logger;
