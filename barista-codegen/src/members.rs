//! Member synthesis: constructors, accessors, and the standard object
//! methods for one model class.
//!
//! All output here is a pure function of the resolved field list, so
//! identical input always renders byte-identical text.

use barista_core::to_pascal_case;

use crate::{JavaWriter, fields::ResolvedField};

/// A no-argument constructor and an all-arguments constructor taking
/// every field in declared order.
pub fn constructors(class_name: &str, fields: &[ResolvedField]) -> String {
    let params = fields
        .iter()
        .map(|f| format!("{} {}", f.ty, f.name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut w = JavaWriter::new()
        .indent()
        .line("// Constructors")
        .line(&format!("public {class_name}() {{"))
        .line("}")
        .line(&format!("public {class_name}({params}) {{"))
        .indent();
    for f in fields {
        w = w.line(&format!("this.{} = {};", f.name, f.name));
    }
    w.dedent().line("}").build()
}

/// One getter/setter pair per field, in declared order.
pub fn accessors(fields: &[ResolvedField]) -> String {
    let mut w = JavaWriter::new().indent().line("// Getters and setters");
    for f in fields {
        let pascal = to_pascal_case(&f.name);
        w = w
            .line(&format!("public {} get{}() {{", f.ty, pascal))
            .indent()
            .line(&format!("return {};", f.name))
            .dedent()
            .line("}")
            .line(&format!("public void set{}({} {}) {{", pascal, f.ty, f.name))
            .indent()
            .line(&format!("this.{} = {};", f.name, f.name))
            .dedent()
            .line("}");
    }
    w.build()
}

/// hashCode, equals, and toString.
///
/// hashCode and equals consider only the first declared field even
/// when more exist; this is a deliberate approximation carried over
/// from the schema format's reference behavior, not a general
/// identity contract. equals also casts to the bare entity name,
/// without the configured class suffix.
pub fn object_methods(entity_name: &str, fields: &[ResolvedField]) -> String {
    let mut w = JavaWriter::new()
        .indent()
        .line("// hashCode(), equals(), toString()")
        .line("@Override")
        .line("public int hashCode() {")
        .indent();
    w = match fields.first() {
        Some(f) => w.line(&format!("return {}.hashCode();", f.name)),
        None => w.line("return super.hashCode();"),
    };
    w = w
        .dedent()
        .line("}")
        .line("@Override")
        .line("public boolean equals(Object obj) {")
        .indent()
        .line("if (this == obj) return true;")
        .line("if (obj == null || getClass() != obj.getClass()) return false;")
        .line(&format!("{entity_name} that = ({entity_name}) obj;"));
    w = match fields.first() {
        Some(f) => w.line(&format!("return {}.equals(that.{});", f.name, f.name)),
        None => w.line("return super.equals(obj);"),
    };
    w = w
        .dedent()
        .line("}")
        .line("@Override")
        .line("public String toString() {")
        .indent()
        .line(&format!("return \"{entity_name}{{\" +"))
        .indent()
        .indent();
    for f in fields {
        w = w.line(&format!(
            "\"{}='\" + String.valueOf({}) + '\\'' +",
            f.name, f.name
        ));
    }
    w.line("'}';").dedent().dedent().dedent().line("}").build()
}
