//! The generation orchestrator: one compile operation per stage, plus
//! preview and disk-writing wrappers.

use std::{collections::HashMap, io, path::Path};

use barista_core::{File, Overwrite, SourceUnit, WriteResult};
use barista_manifest::{Entity, Schema};

use crate::{
    CompileError, Compiled,
    files::{
        ControllerFile, EmbeddableFile, EnumFile, InterfaceFile, ModelClass, RepositoryFile,
        ServiceFile,
    },
    validate::check_entity,
};

/// Java source generator driven by one parsed schema.
///
/// Every stage is a pure function of the schema and its configuration;
/// only [`Generator::generate`] touches the filesystem.
pub struct Generator<'a> {
    schema: &'a Schema,
    /// Entities indexed by name, for parent lookups.
    index: HashMap<&'a str, &'a Entity>,
}

/// Result of writing generated sources to disk.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Files written.
    pub written: usize,
    /// Files left untouched because they already existed.
    pub skipped: usize,
    /// Entities that failed to compile and were excluded.
    pub failures: Vec<CompileError>,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        let index = schema
            .entities
            .iter()
            .filter_map(|e| e.name.as_deref().map(|n| (n, e)))
            .collect();
        Self { schema, index }
    }

    /// Compile every model class. One bad entity is recorded as a
    /// failure and never aborts the others.
    pub fn compile_models(&self) -> Compiled {
        let mut out = Compiled::default();
        for entity in &self.schema.entities {
            let result = check_entity(entity).and_then(|checked| {
                ModelClass::new(checked, &self.index, &self.schema.config).compile()
            });
            out.push(result);
        }
        out
    }

    /// Compile declared interfaces; an empty list skips the stage.
    pub fn compile_interfaces(&self) -> Vec<SourceUnit> {
        self.schema
            .interfaces
            .iter()
            .map(|spec| InterfaceFile::new(spec, &self.schema.config).unit())
            .collect()
    }

    /// Compile declared embeddable value classes.
    pub fn compile_embeddables(&self) -> Vec<SourceUnit> {
        self.schema
            .embeddables
            .iter()
            .map(|spec| EmbeddableFile::new(spec, &self.schema.config).unit())
            .collect()
    }

    /// Compile declared enums.
    pub fn compile_enums(&self) -> Vec<SourceUnit> {
        self.schema
            .enums
            .iter()
            .map(|spec| EnumFile::new(spec, &self.schema.config).unit())
            .collect()
    }

    /// Compile one repository per named entity.
    pub fn compile_repositories(&self) -> Vec<SourceUnit> {
        self.named_entities()
            .map(|name| RepositoryFile::new(name, &self.schema.config).unit())
            .collect()
    }

    /// Compile one service per named entity.
    pub fn compile_services(&self) -> Vec<SourceUnit> {
        self.named_entities()
            .map(|name| ServiceFile::new(name, &self.schema.config).unit())
            .collect()
    }

    /// Compile one REST controller per named entity.
    pub fn compile_controllers(&self) -> Vec<SourceUnit> {
        self.named_entities()
            .map(|name| ControllerFile::new(name, &self.schema.config).unit())
            .collect()
    }

    /// Run every stage without touching the filesystem.
    pub fn preview(&self) -> Compiled {
        let mut out = self.compile_models();
        out.units.extend(self.compile_interfaces());
        out.units.extend(self.compile_embeddables());
        out.units.extend(self.compile_enums());
        out.units.extend(self.compile_repositories());
        out.units.extend(self.compile_services());
        out.units.extend(self.compile_controllers());
        out
    }

    /// Run every stage and write the results under `output_dir`.
    pub fn generate(
        &self,
        output_dir: &Path,
        overwrite: Overwrite,
    ) -> io::Result<GenerateSummary> {
        let compiled = self.preview();
        let mut summary = GenerateSummary {
            failures: compiled.failures,
            ..Default::default()
        };

        for unit in &compiled.units {
            let file = File::new(output_dir.join(&unit.path), unit.content.clone());
            match file.write(overwrite)? {
                WriteResult::Written => summary.written += 1,
                WriteResult::Skipped => summary.skipped += 1,
            }
        }
        Ok(summary)
    }

    /// Tier compilation needs only entity names; unnamed entities were
    /// already reported by the model stage.
    fn named_entities(&self) -> impl Iterator<Item = &'a str> {
        self.schema.entities.iter().filter_map(|e| e.name.as_deref())
    }
}
