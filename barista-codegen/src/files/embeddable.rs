use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, package_to_path};
use barista_manifest::{Config, EmbeddableSpec};

use crate::JavaWriter;

/// An `@Embeddable` value class. Field annotations are emitted
/// verbatim (no marker expansion), and only when persistence mapping
/// is enabled.
pub struct EmbeddableFile<'a> {
    spec: &'a EmbeddableSpec,
    config: &'a Config,
}

impl<'a> EmbeddableFile<'a> {
    pub fn new(spec: &'a EmbeddableSpec, config: &'a Config) -> Self {
        Self { spec, config }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.model_package))
            .join(format!("{}.java", self.spec.name))
    }

    pub fn unit(&self) -> SourceUnit {
        let config = self.config;
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
        w = w
            .line("@Embeddable")
            .line(&format!("public class {} {{", self.spec.name))
            .indent();
        for field in &self.spec.fields {
            if config.jpa {
                w = w.lines(&field.annotations);
            }
            w = w
                .line(&format!(
                    "private {} {};",
                    field.ty.as_deref().unwrap_or_default(),
                    field.name
                ))
                .blank();
        }
        let content = w.dedent().line("}").build();
        SourceUnit::new(self.path(), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> EmbeddableSpec {
        serde_json::from_str(
            r#"{"embeddable_name": "Address",
                "fields": [
                    {"field_name": "street", "field_type": "String",
                     "field_annotations": ["@Column(name = \"street\")"]},
                    {"field_name": "city", "field_type": "String"}
                ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_embeddable_with_jpa() {
        let config = Config::default();
        let unit = EmbeddableFile::new(&spec(), &config).unit();

        assert_eq!(unit.path, PathBuf::from("com/example/model/Address.java"));
        assert_eq!(
            unit.content,
            "package com.example.model;\n\n\
             import jakarta.persistence.*;\n\n\
             @Embeddable\n\
             public class Address {\n\
             \x20   @Column(name = \"street\")\n\
             \x20   private String street;\n\n\
             \x20   private String city;\n\n\
             }\n"
        );
    }

    #[test]
    fn test_embeddable_without_jpa_drops_import_and_annotations() {
        let mut config = Config::default();
        config.jpa = false;
        let unit = EmbeddableFile::new(&spec(), &config).unit();

        assert!(!unit.content.contains("import"));
        assert!(!unit.content.contains("@Column"));
        // The embeddable marker itself is structural and stays
        assert!(unit.content.contains("@Embeddable"));
    }
}
