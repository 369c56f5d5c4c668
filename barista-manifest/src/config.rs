//! Generation configuration.
//!
//! The schema's `configurationVariables` object deserializes into one
//! typed, immutable [`Config`] that every compiler stage reads. Every
//! field has a documented default, so an empty object is a valid
//! configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Process-wide generation configuration, loaded once per run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output root directory. Default: `./generated`.
    pub output_dir: PathBuf,

    /// Package for model classes. Default: `com.example.model`.
    pub model_package: String,

    /// Package for repository classes. Default: `com.example.repository`.
    pub repository_package: String,

    /// Package for service classes. Default: `com.example.service`.
    pub service_package: String,

    /// Package for controller classes. Default: `com.example.controller`.
    pub controller_package: String,

    /// Suffix appended to every model class name (e.g. `Model`). Default: empty.
    pub entity_suffix: String,

    /// `GenerationType` constant for synthesized id fields. Default: `IDENTITY`.
    pub id_strategy: String,

    /// Emit JPA annotations and imports. Default: true.
    pub jpa: bool,

    /// Use `jakarta.persistence` rather than legacy `javax.persistence`.
    /// Default: true.
    pub jakarta: bool,

    /// When JPA is off, still make models Serializable beans. Default: false.
    pub pojo_beans: bool,

    /// Generate no-args and all-args constructors. Default: true.
    pub constructors: bool,

    /// Generate getters and setters. Default: true.
    pub accessors: bool,

    /// Generate hashCode/equals/toString. Default: true.
    pub object_methods: bool,

    /// Nest output files under the package path; flat output when false.
    /// Default: true.
    pub nested_packages: bool,

    /// Generate Spring Data repositories and services rather than plain
    /// JPA `EntityManager` classes. Default: true.
    pub spring_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./generated"),
            model_package: "com.example.model".to_string(),
            repository_package: "com.example.repository".to_string(),
            service_package: "com.example.service".to_string(),
            controller_package: "com.example.controller".to_string(),
            entity_suffix: String::new(),
            id_strategy: "IDENTITY".to_string(),
            jpa: true,
            jakarta: true,
            pojo_beans: false,
            constructors: true,
            accessors: true,
            object_methods: true,
            nested_packages: true,
            spring_data: true,
        }
    }
}

impl Config {
    /// The persistence namespace to import, per the `jakarta` toggle.
    pub fn persistence_namespace(&self) -> &'static str {
        if self.jakarta {
            "jakarta.persistence"
        } else {
            "javax.persistence"
        }
    }

    /// Whether generated models are Serializable beans: always under
    /// JPA, and in POJO mode when `pojo_beans` is set.
    pub fn serializable_models(&self) -> bool {
        self.jpa || self.pojo_beans
    }
}
