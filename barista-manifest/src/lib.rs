// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod entity;
mod error;
mod file;

use std::str::FromStr;

pub use config::Config;
pub use entity::{EmbeddableSpec, Entity, EnumSpec, Field, InheritanceStrategy, InterfaceSpec};
pub use error::{Error, Result};
pub use file::SchemaFile;
use serde::Deserialize;

/// Validated root schema: the full input to one generation run.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Entities, in declaration order.
    pub entities: Vec<Entity>,

    /// Generation configuration.
    pub config: Config,

    /// Interfaces to generate; empty skips the stage.
    pub interfaces: Vec<InterfaceSpec>,

    /// Embeddable value classes to generate; empty skips the stage.
    pub embeddables: Vec<EmbeddableSpec>,

    /// Enums to generate; empty skips the stage.
    pub enums: Vec<EnumSpec>,
}

/// Raw top-level shape. The required keys stay optional here so their
/// absence surfaces as a `MalformedSchema` diagnostic rather than an
/// opaque serde error.
#[derive(Deserialize)]
struct RawSchema {
    entities: Option<Vec<Entity>>,
    #[serde(rename = "configurationVariables")]
    configuration_variables: Option<Config>,
    #[serde(rename = "interfaceClasses")]
    interface_classes: Option<Vec<InterfaceSpec>>,
    #[serde(rename = "embeddableClasses")]
    embeddable_classes: Option<Vec<EmbeddableSpec>>,
    #[serde(rename = "enumClasses")]
    enum_classes: Option<Vec<EnumSpec>>,
}

impl Schema {
    /// Parse a schema from JSON, attributing diagnostics to `filename`.
    pub fn from_str_named(src: &str, filename: &str) -> Result<Self> {
        let raw: RawSchema =
            serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))?;

        let entities = raw
            .entities
            .ok_or_else(|| Error::malformed("entities", src, filename))?;
        let config = raw
            .configuration_variables
            .ok_or_else(|| Error::malformed("configurationVariables", src, filename))?;

        Ok(Self {
            entities,
            config,
            interfaces: raw.interface_classes.unwrap_or_default(),
            embeddables: raw.embeddable_classes.unwrap_or_default(),
            enums: raw.enum_classes.unwrap_or_default(),
        })
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_named(s, "schema.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "entities": [
            {"entity_name": "Book", "fields": [{"field_name": "id"}]}
        ],
        "configurationVariables": {}
    }"#;

    #[test]
    fn test_parse_minimal_schema() {
        let schema = Schema::from_str(MINIMAL).unwrap();
        assert_eq!(schema.entities.len(), 1);
        assert!(schema.interfaces.is_empty());
        assert!(schema.embeddables.is_empty());
        assert!(schema.enums.is_empty());
        assert!(schema.config.jpa);
    }

    #[test]
    fn test_missing_entities_is_malformed() {
        let err = Schema::from_str(r#"{"configurationVariables": {}}"#).unwrap_err();
        assert!(matches!(*err, Error::MalformedSchema { key: "entities", .. }));
    }

    #[test]
    fn test_missing_configuration_is_malformed() {
        let err = Schema::from_str(r#"{"entities": []}"#).unwrap_err();
        assert!(matches!(
            *err,
            Error::MalformedSchema {
                key: "configurationVariables",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Schema::from_str("{not json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_optional_sections() {
        let schema = Schema::from_str(
            r#"{
                "entities": [],
                "configurationVariables": {},
                "interfaceClasses": [{"interface_name": "Auditable", "methods": ["void audit()"]}],
                "enumClasses": [{"enum_name": "Status", "enum_values": ["ACTIVE", "INACTIVE"]}]
            }"#,
        )
        .unwrap();
        assert_eq!(schema.interfaces.len(), 1);
        assert_eq!(schema.interfaces[0].methods, vec!["void audit()"]);
        assert_eq!(schema.enums[0].values.len(), 2);
    }
}
