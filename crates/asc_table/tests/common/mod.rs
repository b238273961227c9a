//! Shared record fixtures for rendering tests.

#![allow(dead_code)]

use asc_table::{Field, KindTable, Record, Registry, Tag};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Group,
    Orphan,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Group => write!(f, "group"),
            Kind::Orphan => write!(f, "orphan"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub max: u32,
    pub status: String,
    pub arn: String,
    pub tags: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub enum Item {
    Group(Group),
    /// A kind no table is registered for.
    Orphan,
}

impl Record for Item {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        match self {
            Item::Group(_) => Kind::Group,
            Item::Orphan => Kind::Orphan,
        }
    }
}

fn as_group(item: &Item) -> Option<&Group> {
    match item {
        Item::Group(g) => Some(g),
        Item::Orphan => None,
    }
}

pub fn registry() -> Registry<Item> {
    let table = KindTable::of(as_group)
        .field("Name", |g: &Group| g.name.clone())
        .field("Max", |g: &Group| g.max.to_string())
        .field("Status", |g: &Group| g.status.clone())
        .field("ARN", |g: &Group| g.arn.clone())
        .tags(|g: &Group| {
            g.tags
                .iter()
                .map(|(k, v)| Tag::new(k.as_str(), v.as_str()))
                .collect()
        })
        .build();
    Registry::new().with(Kind::Group, table)
}

pub fn group(name: &str, max: u32) -> Item {
    Item::Group(Group {
        name: name.to_string(),
        max,
        status: "InService".to_string(),
        ..Group::default()
    })
}

pub fn tagged(name: &str, max: u32, tags: &[(&str, &str)]) -> Item {
    let mut item = group(name, max);
    if let Item::Group(g) = &mut item {
        g.tags = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
    }
    item
}

pub static LIST_FIELDS: &[Field] = &[
    Field::new("", "Name").default_sort(),
    Field::new("", "Max"),
    Field::new("", "Status"),
    Field::new("", "ARN"),
    Field::tags(),
];
