//! Per-entity schema validation.

use barista_manifest::{Entity, Field};

use crate::CompileError;

/// A validated view of an entity: the required attributes are present
/// and borrowed out, so downstream compilers never see the raw
/// `Option`s.
#[derive(Debug, Clone, Copy)]
pub struct Checked<'a> {
    pub name: &'a str,
    pub fields: &'a [Field],
    pub entity: &'a Entity,
}

/// Check that an entity record has the minimum shape needed to
/// compile, failing with the first absent required attribute.
///
/// A failure excludes only this entity from the run.
pub fn check_entity(entity: &Entity) -> Result<Checked<'_>, CompileError> {
    let name = entity.name.as_deref().ok_or(CompileError::MissingField {
        entity: "<unnamed>".to_string(),
        attribute: "entity_name",
    })?;
    let fields = entity.fields.as_deref().ok_or_else(|| CompileError::MissingField {
        entity: name.to_string(),
        attribute: "fields",
    })?;
    Ok(Checked {
        name,
        fields,
        entity,
    })
}
