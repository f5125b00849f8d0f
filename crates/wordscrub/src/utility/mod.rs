//! # Shared Utilities

pub mod pattern_tools;
pub mod regex;
