//! The model class compiler: one entity plus configuration (and the
//! entity index for parent lookups) to one Java class body.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use barista_core::{SourceUnit, package_to_path};
use barista_manifest::{Config, Entity};

use crate::{
    CompileError, JavaWriter,
    fields::{ResolvedField, resolve_field},
    inheritance::resolve_header,
    markers::{LombokSet, is_lombok},
    members,
    validate::Checked,
};

/// One model class to compile.
pub struct ModelClass<'a> {
    checked: Checked<'a>,
    index: &'a HashMap<&'a str, &'a Entity>,
    config: &'a Config,
}

impl<'a> ModelClass<'a> {
    pub fn new(
        checked: Checked<'a>,
        index: &'a HashMap<&'a str, &'a Entity>,
        config: &'a Config,
    ) -> Self {
        Self {
            checked,
            index,
            config,
        }
    }

    /// Output path relative to the output root. Model classes honor
    /// the `nested_packages` toggle; flat output drops the package
    /// directories.
    pub fn path(&self) -> PathBuf {
        let file = format!("{}{}.java", self.checked.name, self.config.entity_suffix);
        if self.config.nested_packages {
            Path::new(&package_to_path(&self.config.model_package)).join(file)
        } else {
            PathBuf::from(file)
        }
    }

    /// Compile the class, or fail with a per-entity error.
    pub fn compile(&self) -> Result<SourceUnit, CompileError> {
        let config = self.config;
        let entity = self.checked.entity;
        let header = resolve_header(&self.checked, self.index, config)?;

        let resolved: Vec<ResolvedField> = self
            .checked
            .fields
            .iter()
            .map(|f| resolve_field(f, self.checked.name, config))
            .collect();
        let lombok = LombokSet::collect(entity, self.checked.fields);
        let class_name = format!("{}{}", self.checked.name, config.entity_suffix);

        let mut w = JavaWriter::new();
        if !config.model_package.is_empty() {
            w = w
                .line(&format!("package {};", config.model_package))
                .blank();
        }
        if config.jpa {
            w = w
                .line(&format!("import {}.*;", config.persistence_namespace()))
                .blank();
        }
        if config.serializable_models() {
            w = w.line("import java.io.Serializable;").blank();
        }
        if !lombok.is_empty() {
            w = w.line("import lombok.*;").blank();
        }

        for annotation in entity.annotations.iter().filter(|a| is_lombok(a)) {
            w = w.line(annotation);
        }
        w = w.lines(&header.annotations);
        w = w.line(&self.class_declaration(&header.declaration)).indent();

        for field in &resolved {
            w = w.lines(&field.annotations).line(&field.declaration()).blank();
        }
        w = w.dedent();

        if config.constructors && !lombok.suppresses_constructors() {
            w = w.raw(&members::constructors(&class_name, &resolved));
        }
        if config.accessors && !lombok.suppresses_accessors() {
            w = w.raw(&members::accessors(&resolved));
        }
        if config.object_methods && !lombok.suppresses_object_methods() {
            w = w.raw(&members::object_methods(self.checked.name, &resolved));
        }
        w = w.line("}");

        Ok(SourceUnit::new(self.path(), w.build()))
    }

    /// Append the implements list to the resolved declaration.
    /// Serializable always leads when the models are beans.
    fn class_declaration(&self, resolved: &str) -> String {
        let config = self.config;
        let interfaces = &self.checked.entity.interfaces;

        let mut decl = resolved.to_string();
        if !interfaces.is_empty() || config.serializable_models() {
            decl.push_str(" implements");
            if config.serializable_models() {
                decl.push_str(" Serializable");
                if !interfaces.is_empty() {
                    decl.push_str(", ");
                    decl.push_str(&interfaces.join(", "));
                }
            } else {
                decl.push(' ');
                decl.push_str(&interfaces.join(", "));
            }
        }
        decl.push_str(" {");
        decl
    }
}
