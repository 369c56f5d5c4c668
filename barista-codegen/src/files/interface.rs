use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, package_to_path};
use barista_manifest::{Config, InterfaceSpec};

use crate::JavaWriter;

/// A plain Java interface, methods emitted verbatim.
pub struct InterfaceFile<'a> {
    spec: &'a InterfaceSpec,
    config: &'a Config,
}

impl<'a> InterfaceFile<'a> {
    pub fn new(spec: &'a InterfaceSpec, config: &'a Config) -> Self {
        Self { spec, config }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.model_package))
            .join(format!("{}.java", self.spec.name))
    }

    pub fn unit(&self) -> SourceUnit {
        let mut w = JavaWriter::new();
        if !self.config.model_package.is_empty() {
            w = w
                .line(&format!("package {};", self.config.model_package))
                .blank();
        }
        w = w
            .line(&format!("public interface {} {{", self.spec.name))
            .indent();
        for method in &self.spec.methods {
            w = w.line(&format!("{method};"));
        }
        let content = w.dedent().line("}").build();
        SourceUnit::new(self.path(), content)
    }
}
