use barista_core::SourceUnit;
use thiserror::Error;

/// A per-entity compilation failure.
///
/// These never abort the run: the orchestrator collects them and keeps
/// compiling the remaining entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("entity '{entity}' is missing required attribute '{attribute}'")]
    MissingField {
        entity: String,
        attribute: &'static str,
    },

    #[error("parent '{parent}' of entity '{entity}' is missing or not marked as a parent")]
    UnresolvedParent { entity: String, parent: String },
}

/// Output of a compilation stage: the units that compiled plus the
/// per-entity failures that were skipped.
#[derive(Debug, Default)]
pub struct Compiled {
    pub units: Vec<SourceUnit>,
    pub failures: Vec<CompileError>,
}

impl Compiled {
    /// Fold a per-entity result into the stage output.
    pub fn push(&mut self, result: Result<SourceUnit, CompileError>) {
        match result {
            Ok(unit) => self.units.push(unit),
            Err(e) => self.failures.push(e),
        }
    }
}
