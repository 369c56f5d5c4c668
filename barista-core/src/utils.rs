//! Shared naming helpers for Java code generation.

/// Convert a field name to the PascalCase form used in accessor names
/// (e.g., "first_name" -> "FirstName", "title" -> "Title").
///
/// Characters after the first of each underscore-separated part keep
/// their case, so "firstName" becomes "FirstName".
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Lowercase the first character, for Java field references
/// (e.g., "BookService" -> "bookService").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a Java package name to a relative directory path
/// (e.g., "com.example.model" -> "com/example/model").
pub fn package_to_path(package: &str) -> String {
    package.replace('.', "/")
}
