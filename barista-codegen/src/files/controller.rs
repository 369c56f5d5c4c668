use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, lower_first, package_to_path};
use barista_manifest::Config;

use crate::JavaWriter;

/// A REST controller for one entity, mounted at
/// `/api/<entity-lowercased>s` with an `@Autowired` service.
pub struct ControllerFile<'a> {
    entity_name: &'a str,
    config: &'a Config,
}

impl<'a> ControllerFile<'a> {
    pub fn new(entity_name: &'a str, config: &'a Config) -> Self {
        Self {
            entity_name,
            config,
        }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.controller_package))
            .join(format!("{}Controller.java", self.entity_name))
    }

    pub fn unit(&self) -> SourceUnit {
        let name = self.entity_name;
        let service = format!("{name}Service");
        let service_field = lower_first(&service);

        let content = JavaWriter::new()
            .line(&format!("package {};", self.config.controller_package))
            .blank()
            .line("import java.util.List;")
            .blank()
            .line("import org.springframework.beans.factory.annotation.Autowired;")
            .line("import org.springframework.web.bind.annotation.*;")
            .line(&format!("import {}.{service};", self.config.service_package))
            .blank()
            .line("@RestController")
            .line(&format!("@RequestMapping(\"/api/{}s\")", name.to_lowercase()))
            .line(&format!("public class {name}Controller {{"))
            .blank()
            .indent()
            .line("@Autowired")
            .line(&format!("private {service} {service_field};"))
            .blank()
            .line("// Example REST endpoint")
            .line("@GetMapping")
            .line(&format!("public List<{name}> findAll() {{"))
            .indent()
            .line(&format!("return {service_field}.findAll();"))
            .dedent()
            .line("}")
            .blank()
            .dedent()
            .line("}")
            .build();
        SourceUnit::new(self.path(), content)
    }
}
