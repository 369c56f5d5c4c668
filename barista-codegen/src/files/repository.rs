use std::path::{Path, PathBuf};

use barista_core::{SourceUnit, package_to_path};
use barista_manifest::Config;

use crate::JavaWriter;

/// A repository for one entity: a Spring Data `JpaRepository`
/// interface, or a plain JPA `EntityManager` class when the framework
/// base is disabled.
pub struct RepositoryFile<'a> {
    entity_name: &'a str,
    config: &'a Config,
}

impl<'a> RepositoryFile<'a> {
    pub fn new(entity_name: &'a str, config: &'a Config) -> Self {
        Self {
            entity_name,
            config,
        }
    }

    pub fn path(&self) -> PathBuf {
        Path::new(&package_to_path(&self.config.repository_package))
            .join(format!("{}Repository.java", self.entity_name))
    }

    pub fn unit(&self) -> SourceUnit {
        let content = if self.config.spring_data {
            self.render_spring_data()
        } else {
            self.render_entity_manager()
        };
        SourceUnit::new(self.path(), content)
    }

    fn render_spring_data(&self) -> String {
        let name = self.entity_name;
        let class = format!("{}{}", name, self.config.entity_suffix);
        JavaWriter::new()
            .line(&format!("package {};", self.config.repository_package))
            .blank()
            .line("import org.springframework.data.jpa.repository.JpaRepository;")
            .line("import org.springframework.stereotype.Repository;")
            .blank()
            .line("@Repository")
            .line(&format!(
                "public interface {name}Repository extends JpaRepository<{class}, Long> {{"
            ))
            .line("}")
            .build()
    }

    fn render_entity_manager(&self) -> String {
        let name = self.entity_name;
        let class = format!("{}{}", name, self.config.entity_suffix);
        let ns = self.config.persistence_namespace();
        JavaWriter::new()
            .line(&format!("package {};", self.config.repository_package))
            .blank()
            .line(&format!("import {ns}.EntityManager;"))
            .line(&format!("import {ns}.PersistenceContext;"))
            .line(&format!("import {ns}.TypedQuery;"))
            .line("import java.util.List;")
            .blank()
            .line(&format!("public class {name}Repository {{"))
            .blank()
            .indent()
            .line("@PersistenceContext")
            .line("private EntityManager entityManager;")
            .blank()
            .line(&format!("public List<{class}> findAll() {{"))
            .indent()
            .line(&format!(
                "TypedQuery<{class}> query = entityManager.createQuery(\"SELECT e FROM {class} e\", {class}.class);"
            ))
            .line("return query.getResultList();")
            .dedent()
            .line("}")
            .blank()
            .line(&format!("public {class} findById(Long id) {{"))
            .indent()
            .line(&format!("return entityManager.find({class}.class, id);"))
            .dedent()
            .line("}")
            .blank()
            .line(&format!("public void save({class} entity) {{"))
            .indent()
            .line("entityManager.persist(entity);")
            .dedent()
            .line("}")
            .blank()
            .line(&format!("public void update({class} entity) {{"))
            .indent()
            .line("entityManager.merge(entity);")
            .dedent()
            .line("}")
            .blank()
            .line("public void delete(Long id) {")
            .indent()
            .line(&format!("{class} entity = findById(id);"))
            .line("if (entity != null) {")
            .indent()
            .line("entityManager.remove(entity);")
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .build()
    }
}
