//! Option catalog for the wizard questions.
//!
//! Built-in defaults cover the common archetypes; a TOML file can replace
//! any of the lists.

mod loader;
mod types;

pub use loader::CatalogError;
pub use types::{Archetype, Catalog, CatalogEntry, Preset};
