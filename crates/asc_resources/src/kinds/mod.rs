//! Per-kind record types, field schemas and getter tables.

pub mod asg;
pub mod cloudformation;
pub mod ec2;
pub mod elb;
pub mod vpc;

use asc_table::Tag;
use serde::Deserialize;

/// Key/value tag as it appears in describe output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceTag {
    pub key: String,
    pub value: String,
}

pub(crate) fn to_tags(tags: &[ResourceTag]) -> Vec<Tag> {
    tags.iter()
        .map(|t| Tag::new(t.key.as_str(), t.value.as_str()))
        .collect()
}

/// Value of the conventional `Name` tag.
pub(crate) fn name_tag(tags: &[ResourceTag]) -> String {
    tags.iter()
        .find(|t| t.key == "Name")
        .map(|t| t.value.clone())
        .unwrap_or_default()
}
