//! Core types, traits, errors, and configuration for Verdict.
//!
//! Verdict evaluates named quality gates — sets of threshold conditions over
//! code-quality metrics — against materialized measure snapshots for a
//! component. This crate carries the shared vocabulary (levels, metrics,
//! measures, conditions, gates), the storage-seam traits, and the ambient
//! config/error/tracing plumbing. The evaluation itself lives in
//! `verdict-engine`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;
