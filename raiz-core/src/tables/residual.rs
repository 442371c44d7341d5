//! Residual vowel suffixes

/// Removed outright when found in RV
pub const RESIDUAL_SUFFIXES: &[&str] = &["os", "a", "o", "á", "í", "ó"];

/// Final `e`, optionally with the `u` of a preceding `gu`
pub const RESIDUAL_E_SUFFIXES: &[&str] = &["e", "é", "ue", "ué"];
