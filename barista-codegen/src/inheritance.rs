//! Inheritance resolution: class-level annotations and the class
//! declaration for hierarchy roots, hierarchy members, and plain
//! entities.

use std::collections::HashMap;

use barista_manifest::{Config, Entity, InheritanceStrategy};

use crate::{CompileError, validate::Checked};

/// The resolved class header: annotations above the declaration, and
/// the declaration itself up to (not including) the implements list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    /// Class-level JPA annotation lines; empty when persistence
    /// mapping is off.
    pub annotations: Vec<String>,
    /// e.g. `public class BookModel extends MediaModel`
    pub declaration: String,
}

/// Resolve the class header for one entity.
///
/// Hierarchy members look their parent up in `index`; the parent must
/// exist and be declared a parent, and must carry a strategy.
pub fn resolve_header(
    checked: &Checked<'_>,
    index: &HashMap<&str, &Entity>,
    config: &Config,
) -> Result<ClassHeader, CompileError> {
    let class_name = format!("{}{}", checked.name, config.entity_suffix);

    if checked.entity.is_parent {
        let annotations = if config.jpa {
            root_annotations(checked.name, checked.entity.inheritance_strategy)
        } else {
            Vec::new()
        };
        return Ok(ClassHeader {
            annotations,
            declaration: format!("public abstract class {class_name}"),
        });
    }

    if let Some(parent_name) = checked.entity.parent_name.as_deref() {
        let parent = index
            .get(parent_name)
            .filter(|p| p.is_parent)
            .ok_or_else(|| CompileError::UnresolvedParent {
                entity: checked.name.to_string(),
                parent: parent_name.to_string(),
            })?;

        let annotations = if config.jpa {
            let strategy =
                parent
                    .inheritance_strategy
                    .ok_or_else(|| CompileError::MissingField {
                        entity: parent_name.to_string(),
                        attribute: "entity_inheritance_strategy",
                    })?;
            member_annotations(checked, strategy)?
        } else {
            Vec::new()
        };

        return Ok(ClassHeader {
            annotations,
            declaration: format!(
                "public class {class_name} extends {parent_name}{}",
                config.entity_suffix
            ),
        });
    }

    let annotations = if config.jpa {
        entity_table(checked.name)
    } else {
        Vec::new()
    };
    Ok(ClassHeader {
        annotations,
        declaration: format!("public class {class_name}"),
    })
}

/// `@Entity` plus a `@Table` named after the pluralized entity.
fn entity_table(name: &str) -> Vec<String> {
    vec![
        "@Entity".to_string(),
        format!("@Table(name=\"{name}s\")"),
    ]
}

/// Annotations for a hierarchy root. A root without a declared
/// strategy gets no mapping annotations.
fn root_annotations(name: &str, strategy: Option<InheritanceStrategy>) -> Vec<String> {
    match strategy {
        Some(InheritanceStrategy::MappedSuperclass) => vec!["@MappedSuperclass".to_string()],
        Some(s) => {
            let mut lines = entity_table(name);
            lines.push(format!(
                "@Inheritance(strategy = InheritanceType.{})",
                s.java_name()
            ));
            lines
        }
        None => Vec::new(),
    }
}

/// Annotations for a hierarchy member, keyed on the parent's strategy.
fn member_annotations(
    checked: &Checked<'_>,
    strategy: InheritanceStrategy,
) -> Result<Vec<String>, CompileError> {
    match strategy {
        InheritanceStrategy::SingleTable => {
            let value = checked.entity.discriminator_value.as_deref().ok_or_else(|| {
                CompileError::MissingField {
                    entity: checked.name.to_string(),
                    attribute: "discriminator_value",
                }
            })?;
            Ok(vec![
                "@Entity".to_string(),
                format!("@DiscriminatorValue(\"{value}\")"),
            ])
        }
        InheritanceStrategy::Joined
        | InheritanceStrategy::TablePerClass
        | InheritanceStrategy::MappedSuperclass => Ok(entity_table(checked.name)),
    }
}

#[cfg(test)]
mod tests {
    use crate::validate::check_entity;

    use super::*;

    fn entity(json: &str) -> Entity {
        serde_json::from_str(json).unwrap()
    }

    fn index<'a>(entities: &'a [Entity]) -> HashMap<&'a str, &'a Entity> {
        entities
            .iter()
            .filter_map(|e| e.name.as_deref().map(|n| (n, e)))
            .collect()
    }

    #[test]
    fn test_plain_entity() {
        let e = entity(r#"{"entity_name": "Book", "fields": []}"#);
        let checked = check_entity(&e).unwrap();
        let header = resolve_header(&checked, &HashMap::new(), &Config::default()).unwrap();
        assert_eq!(header.annotations, vec!["@Entity", "@Table(name=\"Books\")"]);
        assert_eq!(header.declaration, "public class Book");
    }

    #[test]
    fn test_plain_entity_with_suffix() {
        let e = entity(r#"{"entity_name": "Book", "fields": []}"#);
        let checked = check_entity(&e).unwrap();
        let mut config = Config::default();
        config.entity_suffix = "Model".to_string();
        let header = resolve_header(&checked, &HashMap::new(), &config).unwrap();
        assert_eq!(header.declaration, "public class BookModel");
    }

    #[test]
    fn test_root_single_table() {
        let e = entity(
            r#"{"entity_name": "Media", "fields": [], "entity_is_parent": true,
                "entity_inheritance_strategy": "SINGLE_TABLE"}"#,
        );
        let checked = check_entity(&e).unwrap();
        let header = resolve_header(&checked, &HashMap::new(), &Config::default()).unwrap();
        assert_eq!(
            header.annotations,
            vec![
                "@Entity",
                "@Table(name=\"Medias\")",
                "@Inheritance(strategy = InheritanceType.SINGLE_TABLE)",
            ]
        );
        assert_eq!(header.declaration, "public abstract class Media");
    }

    #[test]
    fn test_root_mapped_superclass_has_no_table() {
        let e = entity(
            r#"{"entity_name": "Base", "fields": [], "entity_is_parent": true,
                "entity_inheritance_strategy": "MAPPED_SUPERCLASS"}"#,
        );
        let checked = check_entity(&e).unwrap();
        let header = resolve_header(&checked, &HashMap::new(), &Config::default()).unwrap();
        assert_eq!(header.annotations, vec!["@MappedSuperclass"]);
    }

    #[test]
    fn test_member_of_single_table_uses_discriminator() {
        let entities = vec![
            entity(
                r#"{"entity_name": "Media", "fields": [], "entity_is_parent": true,
                    "entity_inheritance_strategy": "SINGLE_TABLE"}"#,
            ),
            entity(
                r#"{"entity_name": "Book", "fields": [], "entity_parent_name": "Media",
                    "discriminator_value": "BOOK"}"#,
            ),
        ];
        let idx = index(&entities);
        let checked = check_entity(&entities[1]).unwrap();
        let header = resolve_header(&checked, &idx, &Config::default()).unwrap();
        assert_eq!(
            header.annotations,
            vec!["@Entity", "@DiscriminatorValue(\"BOOK\")"]
        );
        assert_eq!(header.declaration, "public class Book extends Media");
    }

    #[test]
    fn test_member_missing_discriminator_is_reported() {
        let entities = vec![
            entity(
                r#"{"entity_name": "Media", "fields": [], "entity_is_parent": true,
                    "entity_inheritance_strategy": "SINGLE_TABLE"}"#,
            ),
            entity(r#"{"entity_name": "Book", "fields": [], "entity_parent_name": "Media"}"#),
        ];
        let idx = index(&entities);
        let checked = check_entity(&entities[1]).unwrap();
        let err = resolve_header(&checked, &idx, &Config::default()).unwrap_err();
        assert_eq!(
            err,
            CompileError::MissingField {
                entity: "Book".to_string(),
                attribute: "discriminator_value",
            }
        );
    }

    #[test]
    fn test_member_of_joined_gets_own_table() {
        let entities = vec![
            entity(
                r#"{"entity_name": "Media", "fields": [], "entity_is_parent": true,
                    "entity_inheritance_strategy": "JOINED"}"#,
            ),
            entity(r#"{"entity_name": "Book", "fields": [], "entity_parent_name": "Media"}"#),
        ];
        let idx = index(&entities);
        let checked = check_entity(&entities[1]).unwrap();
        let header = resolve_header(&checked, &idx, &Config::default()).unwrap();
        assert_eq!(header.annotations, vec!["@Entity", "@Table(name=\"Books\")"]);
    }

    #[test]
    fn test_unknown_parent_is_unresolved() {
        let e = entity(r#"{"entity_name": "Book", "fields": [], "entity_parent_name": "Ghost"}"#);
        let checked = check_entity(&e).unwrap();
        let err = resolve_header(&checked, &HashMap::new(), &Config::default()).unwrap_err();
        assert_eq!(
            err,
            CompileError::UnresolvedParent {
                entity: "Book".to_string(),
                parent: "Ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_parent_not_marked_as_parent_is_unresolved() {
        let entities = vec![
            entity(r#"{"entity_name": "Media", "fields": []}"#),
            entity(r#"{"entity_name": "Book", "fields": [], "entity_parent_name": "Media"}"#),
        ];
        let idx = index(&entities);
        let checked = check_entity(&entities[1]).unwrap();
        let err = resolve_header(&checked, &idx, &Config::default()).unwrap_err();
        assert!(matches!(err, CompileError::UnresolvedParent { .. }));
    }
}
