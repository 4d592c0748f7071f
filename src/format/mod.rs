// ============================================================================
// Format Module
// Token-template rendering of sexagesimal quantities
// ============================================================================
//
// This module provides:
// - Grammar: the per-domain template alphabet (angle vs time)
// - Token/tokenize: a single-pass scanner producing literal and placeholder
//   segments
// - Formattable + render: one substitution pass over the token stream
//
// Design principles:
// - Templates are scanned exactly once; a substituted value can never be
//   re-scanned and mistaken for another token
// - Unrecognized letters pass through verbatim (permissive templates)
// - Backslash escapes are resolved by the scanner, so literal text that
//   collides with template letters is never substituted

mod engine;
mod token;

pub use engine::{render, Formattable};
pub use token::{tokenize, Component, Grammar, Token};
