//! Annotation marker resolution.
//!
//! Field annotations in the schema are a small vocabulary of
//! relationship markers that expand into concrete JPA annotations,
//! plus Lombok annotations and anything else, which pass through
//! verbatim.

use barista_manifest::{Entity, Field};

/// A recognized field-level marker.
///
/// Anything outside the closed vocabulary falls through to
/// [`Marker::Verbatim`] and is emitted as a single annotation line,
/// which covers plain `@Column`/`@Id`/`@GeneratedValue` markers and
/// Lombok annotations placed at field scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    OneToOneJoinColumn,
    OneToOneMappedBy,
    OneToManyMappedBy,
    ManyToOneJoinColumn,
    ManyToManyJoinTable,
    ManyToManyMappedBy,
    Enumerated,
    Embedded,
    Verbatim(String),
}

impl Marker {
    /// Parse a schema annotation string into a marker.
    pub fn parse(s: &str) -> Self {
        match s {
            "@OneToOneJoinColumn" => Self::OneToOneJoinColumn,
            "@OneToOneMappedBy" => Self::OneToOneMappedBy,
            "@OneToManyMappedBy" => Self::OneToManyMappedBy,
            "@ManyToOneJoinColumn" => Self::ManyToOneJoinColumn,
            "@ManyToManyJoinTable" => Self::ManyToManyJoinTable,
            "@ManyToManyMappedBy" => Self::ManyToManyMappedBy,
            "@Enum" | "@Enumerated" => Self::Enumerated,
            "@Embedded" => Self::Embedded,
            other => Self::Verbatim(other.to_string()),
        }
    }

    /// Expand the marker into annotation lines (unindented; the class
    /// writer indents them).
    ///
    /// `field_type` is only consulted for join-table naming, where the
    /// inner type of a parameterized container is used.
    pub fn resolve(&self, field_name: &str, field_type: &str) -> Vec<String> {
        let inner = inner_type(field_type).to_lowercase();
        match self {
            Self::OneToOneJoinColumn => vec![
                "@OneToOne".to_string(),
                format!("@JoinColumn(name = \"{field_name}_id\")"),
            ],
            Self::OneToOneMappedBy => {
                vec![format!("@OneToOne(mappedBy = \"{field_name}\")")]
            }
            Self::OneToManyMappedBy => {
                vec![format!("@OneToMany(mappedBy = \"{field_name}\")")]
            }
            Self::ManyToOneJoinColumn => vec![
                "@ManyToOne".to_string(),
                format!("@JoinColumn(name = \"{field_name}_id\")"),
            ],
            Self::ManyToManyJoinTable => vec![
                "@ManyToMany".to_string(),
                "@JoinTable(".to_string(),
                format!("    name = \"{field_name}_{inner}\","),
                format!("    joinColumns = @JoinColumn(name = \"{field_name}_id\"),"),
                format!("    inverseJoinColumns = @JoinColumn(name = \"{inner}_id\")"),
                ")".to_string(),
            ],
            Self::ManyToManyMappedBy => {
                vec![format!("@ManyToMany(mappedBy = \"{field_name}\")")]
            }
            Self::Enumerated => vec!["@Enumerated(EnumType.STRING)".to_string()],
            Self::Embedded => vec!["@Embedded".to_string()],
            Self::Verbatim(s) => vec![s.clone()],
        }
    }
}

/// Inner type of a parameterized container (`Set<Tag>` -> `Tag`);
/// plain types are returned unchanged.
fn inner_type(ty: &str) -> &str {
    match ty.split_once('<') {
        Some((_, rest)) => rest.trim_end_matches('>'),
        None => ty,
    }
}

/// The Lombok annotation vocabulary. Presence of one of these on an
/// entity or its fields suppresses the equivalent generated members.
pub const LOMBOK_ANNOTATIONS: [&str; 14] = [
    "@NoArgsConstructor",
    "@RequiredArgsConstructor",
    "@AllArgsConstructor",
    "@Getter",
    "@Setter",
    "@ToString",
    "@EqualsAndHashCode",
    "@Data",
    "@Value",
    "@Builder",
    "@With",
    "@NonNull",
    "@SneakyThrows",
    "@Synchronized",
];

/// Whether an annotation string belongs to the Lombok vocabulary.
pub fn is_lombok(annotation: &str) -> bool {
    LOMBOK_ANNOTATIONS.contains(&annotation)
}

/// The Lombok annotations present anywhere on one entity, computed
/// once per compilation.
#[derive(Debug, Default)]
pub struct LombokSet {
    present: Vec<&'static str>,
}

impl LombokSet {
    /// Collect Lombok annotations from the entity's class-level
    /// annotations and every field's annotations.
    pub fn collect(entity: &Entity, fields: &[Field]) -> Self {
        let mut present = Vec::new();
        let mut add = |a: &str| {
            if let Some(known) = LOMBOK_ANNOTATIONS.iter().find(|l| **l == a)
                && !present.contains(known)
            {
                present.push(*known);
            }
        };
        for a in &entity.annotations {
            add(a);
        }
        for field in fields {
            for a in &field.annotations {
                add(a);
            }
        }
        Self { present }
    }

    /// No Lombok annotations anywhere on the entity.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    fn contains_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.present.contains(n))
    }

    /// A constructor-generating annotation is present.
    pub fn suppresses_constructors(&self) -> bool {
        self.contains_any(&[
            "@NoArgsConstructor",
            "@RequiredArgsConstructor",
            "@AllArgsConstructor",
        ])
    }

    /// An accessor-generating annotation is present.
    pub fn suppresses_accessors(&self) -> bool {
        self.contains_any(&["@Getter", "@Setter", "@Data", "@Value"])
    }

    /// A hashCode/equals/toString-generating annotation is present.
    pub fn suppresses_object_methods(&self) -> bool {
        self.contains_any(&["@EqualsAndHashCode", "@ToString", "@Data", "@Value"])
    }
}
