//! Integration test crate for synthcam.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the format catalog, layout rules and renderers together.

#[cfg(test)]
mod layout;

#[cfg(test)]
mod pattern;

#[cfg(test)]
mod text;
