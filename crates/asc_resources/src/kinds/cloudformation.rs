//! CloudFormation stacks.

use super::{to_tags, ResourceTag};
use crate::format;
use crate::resource::Resource;
use asc_table::{Field, KindTable};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DriftInformation {
    pub stack_drift_status: String,
    pub last_check_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Stack {
    pub stack_id: String,
    pub stack_name: String,
    pub description: String,
    pub stack_status: String,
    pub stack_status_reason: String,
    pub detailed_status: String,
    pub creation_time: Option<DateTime<Utc>>,
    pub last_updated_time: Option<DateTime<Utc>>,
    pub deletion_time: Option<DateTime<Utc>>,
    pub deletion_mode: String,
    pub drift_information: Option<DriftInformation>,
    pub root_id: String,
    pub parent_id: String,
    pub enable_termination_protection: Option<bool>,
    #[serde(rename = "RoleARN")]
    pub role_arn: String,
    pub tags: Vec<ResourceTag>,
}

impl Stack {
    pub fn matches(&self, id: &str) -> bool {
        self.stack_name == id || self.stack_id == id
    }

    /// Last update, falling back to creation for stacks never updated.
    fn last_updated(&self) -> String {
        format::time(self.last_updated_time.as_ref().or(self.creation_time.as_ref()))
    }

    fn drift_status(&self) -> String {
        self.drift_information
            .as_ref()
            .map(|d| d.stack_drift_status.clone())
            .unwrap_or_default()
    }

    fn drift_checked(&self) -> String {
        format::time(
            self.drift_information
                .as_ref()
                .and_then(|d| d.last_check_timestamp.as_ref()),
        )
    }
}

pub static LIST_FIELDS: &[Field] = &[
    Field::new("", "Stack Name"),
    Field::new("", "Status"),
    Field::new("", "Description").hidden(),
    Field::new("", "Last Updated").default_sort().descending(),
    Field::new("", "Drift Status").hidden(),
    Field::tags(),
];

pub static DETAIL_FIELDS: &[Field] = &[
    Field::new("Stack Details", "Stack Name"),
    Field::new("Stack Details", "Stack ID"),
    Field::new("Stack Details", "Description"),
    Field::new("Stack Details", "Status"),
    Field::new("Stack Details", "Status Reason"),
    Field::new("Stack Details", "Detailed Status"),
    Field::new("Stack Details", "Termination Protection"),
    Field::new("Stack Details", "IAM Role"),
    Field::header("Stack Details", "Nesting"),
    Field::new("Stack Details", "Root Stack"),
    Field::new("Stack Details", "Parent Stack"),
    Field::new("Timeline", "Created Time"),
    Field::new("Timeline", "Last Updated"),
    Field::new("Timeline", "Deletion Time"),
    Field::new("Timeline", "Deletion Mode"),
    Field::new("Drift", "Drift Status"),
    Field::new("Drift", "Last Drift Check"),
    Field::tags(),
];

fn as_stack(r: &Resource) -> Option<&Stack> {
    match r {
        Resource::Stack(s) => Some(s),
        _ => None,
    }
}

pub fn table() -> KindTable<Resource> {
    KindTable::of(as_stack)
        .field("Stack Name", |s| s.stack_name.clone())
        .field("Stack ID", |s| s.stack_id.clone())
        .field("Description", |s| s.description.clone())
        .field("Status", |s| s.stack_status.clone())
        .field("Status Reason", |s| s.stack_status_reason.clone())
        .field("Detailed Status", |s| s.detailed_status.clone())
        .field("Termination Protection", |s| {
            format::label(s.enable_termination_protection, "Enabled", "Disabled")
        })
        .field("IAM Role", |s| s.role_arn.clone())
        .field("Root Stack", |s| s.root_id.clone())
        .field("Parent Stack", |s| s.parent_id.clone())
        .field("Created Time", |s| format::time(s.creation_time.as_ref()))
        .field("Last Updated", Stack::last_updated)
        .field("Deletion Time", |s| format::time(s.deletion_time.as_ref()))
        .field("Deletion Mode", |s| s.deletion_mode.clone())
        .field("Drift Status", Stack::drift_status)
        .field("Last Drift Check", Stack::drift_checked)
        .tags(|s| to_tags(&s.tags))
        .build()
}
