use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, package_to_path};
use barista_manifest::{Config, EnumSpec};

use crate::JavaWriter;

/// A Java enum.
///
/// Values of the form `NAME(value)` become valued constants backed by
/// a `private final int` field and a one-argument constructor. When
/// any valued constant exists, at most one bare token among the values
/// names the backing field (generic name `value` otherwise). A list of
/// only bare tokens is a plain enum with no backing field.
pub struct EnumFile<'a> {
    spec: &'a EnumSpec,
    config: &'a Config,
}

impl<'a> EnumFile<'a> {
    pub fn new(spec: &'a EnumSpec, config: &'a Config) -> Self {
        Self { spec, config }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.model_package))
            .join(format!("{}.java", self.spec.name))
    }

    pub fn unit(&self) -> SourceUnit {
        let values = &self.spec.values;
        let has_valued = values.iter().any(|v| is_valued(v));
        // The backing-field token only exists among valued constants
        let backing = if has_valued {
            values.iter().find(|v| !is_valued(v)).map(String::as_str)
        } else {
            None
        };
        let constants: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|v| Some(*v) != backing)
            .collect();

        let mut w = JavaWriter::new();
        if !self.config.model_package.is_empty() {
            w = w
                .line(&format!("package {};", self.config.model_package))
                .blank();
        }
        w = w
            .line(&format!("public enum {} {{", self.spec.name))
            .indent();
        for (i, constant) in constants.iter().enumerate() {
            let terminator = if i + 1 == constants.len() { ";" } else { "," };
            w = w.line(&format!("{constant}{terminator}"));
        }

        if has_valued {
            let field = backing.unwrap_or("value");
            w = w
                .blank()
                .line(&format!("private final int {field};"))
                .blank()
                .line(&format!("{}(int {field}) {{", self.spec.name))
                .indent()
                .line(&format!("this.{field} = {field};"))
                .dedent()
                .line("}");
        }

        let content = w.dedent().line("}").build();
        SourceUnit::new(self.path(), content)
    }
}

/// A `NAME(value)` token.
fn is_valued(value: &str) -> bool {
    value.contains('(') && value.contains(')')
}
