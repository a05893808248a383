// src/config/mod.rs

//! Graph description files for the `dagraph` binary.
//!
//! - `model.rs` is the TOML-backed data model.
//! - `loader.rs` reads a file from disk.
//! - `validate.rs` checks edge targets and acyclicity, then builds a [`Dag`].
//!
//! [`Dag`]: crate::dag::Dag

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
