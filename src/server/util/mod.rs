//! Utility functions and helpers for server operations.
//!
//! Currently request field checks shared by the character and planet services.

pub mod field;
