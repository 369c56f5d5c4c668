//! Entity and auxiliary record types.
//!
//! These mirror the JSON schema shape one-to-one. `entity_name` and
//! `fields` stay optional in the deserialized record: their absence is
//! a per-entity compile failure that skips that entity, not a parse
//! abort for the whole schema.

use serde::Deserialize;

/// One persistence-mapped type to compile into a Java class.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Class name, unique within the schema.
    #[serde(default, rename = "entity_name")]
    pub name: Option<String>,

    /// Members, in declaration order.
    #[serde(default)]
    pub fields: Option<Vec<Field>>,

    /// Whether this entity is a hierarchy root (generates an abstract class).
    #[serde(default, rename = "entity_is_parent")]
    pub is_parent: bool,

    /// Name of the parent entity, if this is a hierarchy member.
    #[serde(default, rename = "entity_parent_name")]
    pub parent_name: Option<String>,

    /// Mapping strategy for the hierarchy rooted at this entity.
    /// Only consulted when `is_parent` is set, or via a member's parent lookup.
    #[serde(default, rename = "entity_inheritance_strategy")]
    pub inheritance_strategy: Option<InheritanceStrategy>,

    /// Discriminator column value, required for single-table hierarchy members.
    #[serde(default)]
    pub discriminator_value: Option<String>,

    /// Interfaces the generated class implements, beyond Serializable.
    #[serde(default, rename = "interfaces_implemented")]
    pub interfaces: Vec<String>,

    /// Class-level annotations; Lombok ones suppress generated members.
    #[serde(default, rename = "entity_supplementary_annotations")]
    pub annotations: Vec<String>,
}

/// One member of an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    /// Field name.
    #[serde(rename = "field_name")]
    pub name: String,

    /// Declared Java type; inferred when absent.
    #[serde(default, rename = "field_type")]
    pub ty: Option<String>,

    /// Field-level annotation markers, in declaration order.
    #[serde(default, rename = "field_annotations")]
    pub annotations: Vec<String>,
}

/// JPA inheritance mapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InheritanceStrategy {
    #[serde(rename = "SINGLE_TABLE")]
    SingleTable,
    #[serde(rename = "JOINED")]
    Joined,
    #[serde(rename = "TABLE_PER_CLASS")]
    TablePerClass,
    #[serde(rename = "MAPPED_SUPERCLASS", alias = "MAPPED_SUPER_CLASS")]
    MappedSuperclass,
}

impl InheritanceStrategy {
    /// The `InheritanceType` constant name in generated Java.
    pub fn java_name(self) -> &'static str {
        match self {
            Self::SingleTable => "SINGLE_TABLE",
            Self::Joined => "JOINED",
            Self::TablePerClass => "TABLE_PER_CLASS",
            Self::MappedSuperclass => "MAPPED_SUPERCLASS",
        }
    }
}

/// A plain Java interface to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSpec {
    #[serde(rename = "interface_name")]
    pub name: String,

    /// Method signatures, emitted verbatim.
    #[serde(default)]
    pub methods: Vec<String>,
}

/// An `@Embeddable` value class to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddableSpec {
    #[serde(rename = "embeddable_name")]
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A Java enum to generate.
///
/// Values are either bare constants (`"ACTIVE"`), constants with a
/// backing value (`"ACTIVE(1)"`), or at most one bare token naming the
/// backing field itself.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumSpec {
    #[serde(rename = "enum_name")]
    pub name: String,

    #[serde(default, rename = "enum_values")]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_minimal() {
        let entity: Entity = serde_json::from_str(
            r#"{"entity_name": "Book", "fields": [{"field_name": "id"}]}"#,
        )
        .unwrap();
        assert_eq!(entity.name.as_deref(), Some("Book"));
        assert!(!entity.is_parent);
        assert!(entity.parent_name.is_none());
        let fields = entity.fields.unwrap();
        assert_eq!(fields[0].name, "id");
        assert!(fields[0].ty.is_none());
        assert!(fields[0].annotations.is_empty());
    }

    #[test]
    fn test_entity_missing_required_attributes_still_parses() {
        let entity: Entity = serde_json::from_str(r#"{"entity_is_parent": true}"#).unwrap();
        assert!(entity.name.is_none());
        assert!(entity.fields.is_none());
        assert!(entity.is_parent);
    }

    #[test]
    fn test_inheritance_strategy_names() {
        let s: InheritanceStrategy = serde_json::from_str(r#""SINGLE_TABLE""#).unwrap();
        assert_eq!(s, InheritanceStrategy::SingleTable);
        assert_eq!(s.java_name(), "SINGLE_TABLE");

        // The legacy spelling is accepted too
        let s: InheritanceStrategy = serde_json::from_str(r#""MAPPED_SUPER_CLASS""#).unwrap();
        assert_eq!(s, InheritanceStrategy::MappedSuperclass);
    }
}
