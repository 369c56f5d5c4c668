use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, lower_first, package_to_path};
use barista_manifest::Config;

use crate::JavaWriter;

/// A service for one entity: an `@Autowired` repository plus a
/// `findAll` pass-through.
pub struct ServiceFile<'a> {
    entity_name: &'a str,
    config: &'a Config,
}

impl<'a> ServiceFile<'a> {
    pub fn new(entity_name: &'a str, config: &'a Config) -> Self {
        Self {
            entity_name,
            config,
        }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.service_package))
            .join(format!("{}Service.java", self.entity_name))
    }

    pub fn unit(&self) -> SourceUnit {
        let name = self.entity_name;
        let repository = format!("{name}Repository");
        let repository_field = lower_first(&repository);
        let comment = if self.config.spring_data {
            "// Example method using Spring Data JPA"
        } else {
            "// Example method using pure JPA"
        };

        let content = JavaWriter::new()
            .line(&format!("package {};", self.config.service_package))
            .blank()
            .line("import java.util.List;")
            .blank()
            .line("import org.springframework.beans.factory.annotation.Autowired;")
            .line("import org.springframework.stereotype.Service;")
            .line(&format!(
                "import {}.{repository};",
                self.config.repository_package
            ))
            .blank()
            .line("@Service")
            .line(&format!("public class {name}Service {{"))
            .blank()
            .indent()
            .line("@Autowired")
            .line(&format!("private {repository} {repository_field};"))
            .blank()
            .line(comment)
            .line(&format!("public List<{name}> findAll() {{"))
            .indent()
            .line(&format!("return {repository_field}.findAll();"))
            .dedent()
            .line("}")
            .blank()
            .dedent()
            .line("}")
            .build();
        SourceUnit::new(self.path(), content)
    }
}
