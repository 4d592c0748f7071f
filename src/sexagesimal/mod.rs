// ============================================================================
// Sexagesimal Module
// Base-60 decomposition and composition shared by Angle and Time
// ============================================================================
//
// This module provides:
// - decompose/compose: bidirectional conversion between a signed decimal
//   scalar (arcseconds or seconds) and its nested base-60 components
// - Sexagesimal: the transient component tuple produced by decompose
// - Sign: the sign carried by a decomposition
//
// Design principles:
// - The scalar is rounded BEFORE components are extracted, so the integer
//   components and the fraction digit string can never drift apart
// - Components are stored as magnitudes; the sign is carried separately

mod codec;

pub use codec::{compose, decompose, round_half_away, Sexagesimal, Sign};
