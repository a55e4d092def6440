//! Value corpus generator and benchmark utilities for gs1lint.
//!
//! This crate provides deterministic generation of element values, mostly
//! valid with a configurable share of single-byte corruptions, for
//! benchmarking `gs1lint-core`.

pub mod generator;

pub use generator::{Corpus, GeneratorConfig, SizeTier, ValueKind, generate_corpus};
