pub mod catalog;
pub mod record;

mod error;

pub use catalog::{CatalogStore, SharedCatalog};
pub use error::{Error, Result};
pub use record::{
	AiTask, Capability, Constraint, DataArtifact, HumanTask, IoItem, IoSpec, Record, RecordKind,
	SystemTask, TaskKind, Touchpoint, UnknownKind, Variant,
};
