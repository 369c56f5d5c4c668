//! The barista entity-to-source compiler.
//!
//! Takes a parsed [`barista_manifest::Schema`] and deterministically
//! emits Java persistence-layer source: model classes, repositories,
//! services, REST controllers, interfaces, embeddables, and enums.
//!
//! Every compiler here is a pure function of the schema and its
//! configuration. Per-entity failures ([`CompileError`]) are collected
//! by the [`Generator`] and never abort the rest of the run.

mod error;
pub mod fields;
mod files;
mod generator;
pub mod inheritance;
pub mod markers;
pub mod members;
mod validate;
mod writer;

pub use error::{CompileError, Compiled};
pub use files::{
    ControllerFile, EmbeddableFile, EnumFile, InterfaceFile, ModelClass, RepositoryFile,
    ServiceFile,
};
pub use generator::{GenerateSummary, Generator};
pub use validate::{Checked, check_entity};
pub use writer::JavaWriter;
