//! AWS resource kinds for the `asc` table renderer.
//!
//! Each kind contributes a serde record type, a static list schema, a static
//! detail schema and a getter table. [`resolver`] bundles the getter tables
//! into the registry the renderers in `asc_table` consume.

pub mod format;
pub mod kinds;
pub mod resource;
pub mod source;

pub use resource::{Kind, Resource};
pub use source::{parse_resources, SourceError};

use asc_table::Registry;
use std::sync::OnceLock;

/// Shared attribute resolver covering every [`Kind`].
pub fn resolver() -> &'static Registry<Resource> {
    static REGISTRY: OnceLock<Registry<Resource>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        Kind::ALL
            .into_iter()
            .fold(Registry::new(), |registry, kind| registry.with(kind, kind.table()))
    })
}
