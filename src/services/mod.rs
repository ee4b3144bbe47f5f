//! Service layer containing the check logic and I/O helpers.
//!
//! ## Service map
//! - `classifier.rs` — internal-package predicate and the built-in name list.
//! - `checker.rs` — policy rules per package type.
//! - `config.rs` — effective configuration assembly from CLI/env input.
//! - `manifest.rs` — package.json location, read, parse.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep `main` thin; delegate to services.

pub mod checker;
pub mod classifier;
pub mod config;
pub mod manifest;
pub mod output;
