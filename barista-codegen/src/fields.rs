//! Field synthesis: type inference and annotation expansion for one
//! entity member.

use barista_manifest::{Config, Field};

use crate::markers::Marker;

/// Casing variants recognized after the entity name when detecting an
/// identifier field. Matching lowercases the field name first, so the
/// mixed-case variants cannot match; they are kept for compatibility
/// with existing schemas that list them.
const ID_SUFFIXES: [&str; 8] = ["id", "Id", "ID", "iD", "_id", "_Id", "_ID", "_iD"];

/// A field with its type inferred and annotations resolved, ready for
/// declaration and member generation.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub name: String,
    pub ty: String,
    /// Expanded annotation lines; empty when persistence mapping is off.
    pub annotations: Vec<String>,
}

impl ResolvedField {
    /// The Java field declaration, without annotations.
    pub fn declaration(&self) -> String {
        format!("private {} {};", self.ty, self.name)
    }
}

/// Whether a field name designates the synthetic identifier of the
/// entity: exactly `id`, or the entity name followed by an id suffix.
pub fn is_identifier(field_name: &str, entity_name: &str) -> bool {
    if field_name == "id" {
        return true;
    }
    let lower = field_name.to_lowercase();
    let entity = entity_name.to_lowercase();
    ID_SUFFIXES
        .iter()
        .any(|suffix| lower == format!("{entity}{suffix}"))
}

/// Infer a field's type and markers, then expand the markers into
/// concrete annotations.
///
/// Rules, in order: an identifier-named field with no declared type
/// becomes a generated `Long` id; a field with neither type nor
/// markers becomes a named `String` column; everything else is used
/// as declared.
pub fn resolve_field(field: &Field, entity_name: &str, config: &Config) -> ResolvedField {
    let mut ty = field.ty.clone();
    let mut markers = field.annotations.clone();

    if ty.is_none() && is_identifier(&field.name, entity_name) {
        ty = Some("Long".to_string());
        if markers.is_empty() {
            markers = vec![
                "@Id".to_string(),
                format!(
                    "@GeneratedValue(strategy = GenerationType.{})",
                    config.id_strategy
                ),
            ];
        }
    }

    if ty.is_none() && markers.is_empty() {
        ty = Some("String".to_string());
        markers = vec![format!("@Column(name = \"{}\")", field.name)];
    }

    let ty = ty.unwrap_or_default();
    let annotations = if config.jpa {
        markers
            .iter()
            .flat_map(|m| Marker::parse(m).resolve(&field.name, &ty))
            .collect()
    } else {
        Vec::new()
    };

    ResolvedField {
        name: field.name.clone(),
        ty,
        annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(json: &str) -> Field {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_identifier_detection() {
        assert!(is_identifier("id", "Book"));
        assert!(is_identifier("bookId", "Book"));
        assert!(is_identifier("book_id", "Book"));
        assert!(is_identifier("BOOKID", "Book"));
        assert!(!is_identifier("userId", "Book"));
        assert!(!is_identifier("identifier", "Book"));
    }

    #[test]
    fn test_id_field_gets_identifier_markers() {
        let config = Config::default();
        let resolved = resolve_field(&field(r#"{"field_name": "id"}"#), "Book", &config);
        assert_eq!(resolved.ty, "Long");
        assert_eq!(
            resolved.annotations,
            vec![
                "@Id",
                "@GeneratedValue(strategy = GenerationType.IDENTITY)"
            ]
        );
    }

    #[test]
    fn test_id_strategy_comes_from_config() {
        let mut config = Config::default();
        config.id_strategy = "SEQUENCE".to_string();
        let resolved = resolve_field(&field(r#"{"field_name": "id"}"#), "Book", &config);
        assert_eq!(
            resolved.annotations[1],
            "@GeneratedValue(strategy = GenerationType.SEQUENCE)"
        );
    }

    #[test]
    fn test_id_with_declared_type_is_not_synthesized() {
        let config = Config::default();
        let resolved = resolve_field(
            &field(r#"{"field_name": "id", "field_type": "UUID"}"#),
            "Book",
            &config,
        );
        assert_eq!(resolved.ty, "UUID");
        // No type inference, so the default-column rule doesn't fire either
        assert!(resolved.annotations.is_empty());
    }

    #[test]
    fn test_id_with_declared_markers_keeps_them() {
        let config = Config::default();
        let resolved = resolve_field(
            &field(r#"{"field_name": "id", "field_annotations": ["@Id"]}"#),
            "Book",
            &config,
        );
        assert_eq!(resolved.ty, "Long");
        assert_eq!(resolved.annotations, vec!["@Id"]);
    }

    #[test]
    fn test_untyped_unmarked_field_defaults_to_string_column() {
        let config = Config::default();
        let resolved = resolve_field(&field(r#"{"field_name": "title"}"#), "Book", &config);
        assert_eq!(resolved.ty, "String");
        assert_eq!(resolved.annotations, vec!["@Column(name = \"title\")"]);
        assert_eq!(resolved.declaration(), "private String title;");
    }

    #[test]
    fn test_jpa_off_suppresses_annotations() {
        let mut config = Config::default();
        config.jpa = false;
        let resolved = resolve_field(&field(r#"{"field_name": "id"}"#), "Book", &config);
        assert_eq!(resolved.ty, "Long");
        assert!(resolved.annotations.is_empty());
    }

    #[test]
    fn test_markers_expand_in_declaration_order() {
        let config = Config::default();
        let resolved = resolve_field(
            &field(
                r#"{"field_name": "tags", "field_type": "Set<Tag>",
                    "field_annotations": ["@ManyToManyJoinTable", "@Custom"]}"#,
            ),
            "Post",
            &config,
        );
        assert_eq!(resolved.annotations[0], "@ManyToMany");
        assert_eq!(resolved.annotations[2], "    name = \"tags_tag\",");
        assert_eq!(resolved.annotations.last().map(String::as_str), Some("@Custom"));
    }
}
