//! One struct per generated output shape.

mod controller;
mod embeddable;
mod enums;
mod interface;
mod model;
mod repository;
mod service;

pub use controller::ControllerFile;
pub use embeddable::EmbeddableFile;
pub use enums::EnumFile;
pub use interface::InterfaceFile;
pub use model::ModelClass;
pub use repository::RepositoryFile;
pub use service::ServiceFile;
