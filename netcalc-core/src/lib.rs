#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for deterministic network calculus.
///
/// This module contains the fundamental value types bound derivation is
/// built from: the extended numeric domain and the piecewise-affine curve
/// family. The models are immutable after construction and enforce their
/// invariants when they are created, so the algorithms in `netcalc-solver`
/// never have to re-validate their inputs.
pub mod models;
