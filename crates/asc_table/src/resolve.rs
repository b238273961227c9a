//! Attribute resolution: field name + record -> display string.
//!
//! The engine never looks inside a record. It asks an [`AttributeResolver`],
//! and the standard resolver is a [`Registry`] of per-kind [`KindTable`]s,
//! each a list of named getter functions over one concrete record type.
//!
//! ```
//! use asc_table::{AttributeResolver, KindTable, Record, Registry};
//!
//! struct Group { name: String, max: u32 }
//! enum Resource { Group(Group) }
//!
//! impl Record for Resource {
//!     type Kind = &'static str;
//!     fn kind(&self) -> &'static str { "group" }
//! }
//!
//! fn group(r: &Resource) -> Option<&Group> {
//!     match r { Resource::Group(g) => Some(g) }
//! }
//!
//! let table = KindTable::of(group)
//!     .field("Name", |g: &Group| g.name.clone())
//!     .field("Max", |g: &Group| g.max.to_string())
//!     .build();
//! let registry = Registry::new().with("group", table);
//!
//! let record = Resource::Group(Group { name: "web".into(), max: 16 });
//! assert_eq!(registry.resolve("Max", &record).unwrap(), "16");
//! assert!(registry.resolve("Min", &record).is_err());
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A kind-tagged value the renderer can display.
pub trait Record {
    /// Closed set of record kinds.
    type Kind: Copy + Eq + Hash + fmt::Display;

    fn kind(&self) -> Self::Kind;
}

/// One key/value pair from a record's tag collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Resolves display values for the fields of a record.
pub trait AttributeResolver<R> {
    /// Value of the named field.
    fn resolve(&self, field: &str, record: &R) -> Result<String>;

    /// Value of the tag `key`, or an empty string when the record lacks it.
    fn resolve_tag(&self, key: &str, record: &R) -> Result<String> {
        Ok(self
            .tags(record)?
            .into_iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value)
            .unwrap_or_default())
    }

    /// The record's full tag collection, in provider order.
    fn tags(&self, record: &R) -> Result<Vec<Tag>>;
}

type Getter<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;
type TagsGetter<R> = Box<dyn Fn(&R) -> Option<Vec<Tag>> + Send + Sync>;

/// Named getters for one record kind.
pub struct KindTable<R> {
    names: Vec<&'static str>,
    getters: HashMap<&'static str, Getter<R>>,
    tags: Option<TagsGetter<R>>,
}

impl<R: 'static> KindTable<R> {
    /// Start a table whose getters operate on the concrete type `T` carried by `R`.
    ///
    /// `project` unwraps the record; it returns `None` when the record is some
    /// other kind, which the registry reports as [`Error::UnknownKind`].
    pub fn of<T: 'static>(project: fn(&R) -> Option<&T>) -> KindTableBuilder<R, T> {
        KindTableBuilder {
            project,
            getters: Vec::new(),
            tags: None,
        }
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }
}

impl<R> fmt::Debug for KindTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindTable")
            .field("fields", &self.names)
            .field("tags", &self.tags.is_some())
            .finish()
    }
}

/// Builder for a [`KindTable`] over concrete record type `T`.
pub struct KindTableBuilder<R, T> {
    project: fn(&R) -> Option<&T>,
    getters: Vec<(&'static str, Getter<R>)>,
    tags: Option<TagsGetter<R>>,
}

impl<R: 'static, T: 'static> KindTableBuilder<R, T> {
    /// Register the getter for field `name`.
    pub fn field(mut self, name: &'static str, get: fn(&T) -> String) -> Self {
        let project = self.project;
        self.getters
            .push((name, Box::new(move |record: &R| project(record).map(get))));
        self
    }

    /// Register the tag collection accessor.
    pub fn tags(mut self, get: fn(&T) -> Vec<Tag>) -> Self {
        let project = self.project;
        self.tags = Some(Box::new(move |record: &R| project(record).map(get)));
        self
    }

    pub fn build(self) -> KindTable<R> {
        let names = self.getters.iter().map(|(name, _)| *name).collect();
        KindTable {
            names,
            getters: self.getters.into_iter().collect(),
            tags: self.tags,
        }
    }
}

/// Kind-dispatching resolver built from per-kind tables.
pub struct Registry<R: Record> {
    tables: HashMap<R::Kind, KindTable<R>>,
}

impl<R: Record> Default for Registry<R> {
    fn default() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }
}

impl<R: Record> Registry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the table for `kind`.
    pub fn register(&mut self, kind: R::Kind, table: KindTable<R>) -> &mut Self {
        self.tables.insert(kind, table);
        self
    }

    pub fn with(mut self, kind: R::Kind, table: KindTable<R>) -> Self {
        self.register(kind, table);
        self
    }

    pub fn table(&self, kind: R::Kind) -> Result<&KindTable<R>> {
        self.tables.get(&kind).ok_or_else(|| Error::unknown_kind(kind))
    }

    pub fn contains(&self, kind: R::Kind) -> bool {
        self.tables.contains_key(&kind)
    }
}

impl<R: Record> AttributeResolver<R> for Registry<R> {
    fn resolve(&self, field: &str, record: &R) -> Result<String> {
        let kind = record.kind();
        let table = self.table(kind)?;
        let getter = table
            .getters
            .get(field)
            .ok_or_else(|| Error::field_not_found(field, kind))?;
        getter(record).ok_or_else(|| Error::unknown_kind(kind))
    }

    fn tags(&self, record: &R) -> Result<Vec<Tag>> {
        let kind = record.kind();
        let table = self.table(kind)?;
        match &table.tags {
            // Kinds without a tag collection simply have no tags.
            None => Ok(Vec::new()),
            Some(get) => get(record).ok_or_else(|| Error::unknown_kind(kind)),
        }
    }
}
