//! Auto Scaling groups, their instances and scheduled actions.

use super::{to_tags, ResourceTag};
use crate::format;
use crate::resource::Resource;
use asc_table::{Field, KindTable};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LaunchTemplateRef {
    pub launch_template_id: String,
    pub launch_template_name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AutoScalingGroup {
    pub auto_scaling_group_name: String,
    #[serde(rename = "AutoScalingGroupARN")]
    pub auto_scaling_group_arn: String,
    pub launch_configuration_name: String,
    pub launch_template: Option<LaunchTemplateRef>,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    pub desired_capacity: Option<i64>,
    pub default_cooldown: Option<i64>,
    pub availability_zones: Vec<String>,
    pub load_balancer_names: Vec<String>,
    #[serde(rename = "TargetGroupARNs")]
    pub target_group_arns: Vec<String>,
    pub health_check_type: String,
    pub health_check_grace_period: Option<i64>,
    pub instances: Vec<AsgInstance>,
    pub created_time: Option<DateTime<Utc>>,
    #[serde(rename = "VPCZoneIdentifier")]
    pub vpc_zone_identifier: String,
    pub status: String,
    pub tags: Vec<ResourceTag>,
}

impl AutoScalingGroup {
    pub fn matches(&self, id: &str) -> bool {
        self.auto_scaling_group_name == id || self.auto_scaling_group_arn == id
    }

    fn launch_source(&self) -> String {
        match &self.launch_template {
            Some(t) => t.launch_template_name.clone(),
            None => self.launch_configuration_name.clone(),
        }
    }

    fn subnets(&self) -> Vec<&str> {
        self.vpc_zone_identifier
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The group's instances, each stamped with the owning group name.
    pub fn member_instances(&self) -> Vec<AsgInstance> {
        self.instances
            .iter()
            .cloned()
            .map(|mut instance| {
                instance.group_name = self.auto_scaling_group_name.clone();
                instance
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AsgInstance {
    pub instance_id: String,
    pub instance_type: String,
    pub availability_zone: String,
    pub lifecycle_state: String,
    pub health_status: String,
    pub launch_configuration_name: String,
    pub launch_template: Option<LaunchTemplateRef>,
    pub protected_from_scale_in: Option<bool>,
    /// Owning group; not part of the instance payload.
    #[serde(skip)]
    pub group_name: String,
}

impl AsgInstance {
    pub fn matches(&self, id: &str) -> bool {
        self.instance_id == id
    }

    fn launch_source(&self) -> String {
        match &self.launch_template {
            Some(t) => t.launch_template_name.clone(),
            None => self.launch_configuration_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScheduledAction {
    pub auto_scaling_group_name: String,
    pub scheduled_action_name: String,
    #[serde(rename = "ScheduledActionARN")]
    pub scheduled_action_arn: String,
    pub recurrence: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub time_zone: String,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    pub desired_capacity: Option<i64>,
}

impl ScheduledAction {
    pub fn matches(&self, id: &str) -> bool {
        self.scheduled_action_name == id || self.scheduled_action_arn == id
    }
}

// -----------------------------------------------------------------------------
// Schemas
// -----------------------------------------------------------------------------

pub static GROUP_LIST_FIELDS: &[Field] = &[
    Field::new("", "Name"),
    Field::new("", "Instances"),
    Field::new("", "Desired"),
    Field::new("", "Min"),
    Field::new("", "Max"),
    Field::new("", "Status").hidden(),
    Field::new("", "ARN").hidden(),
    Field::tags(),
];

pub static GROUP_DETAIL_FIELDS: &[Field] = &[
    Field::new("Auto Scaling Group", "Name"),
    Field::new("Auto Scaling Group", "Status"),
    Field::new("Auto Scaling Group", "Created Time"),
    Field::new("Auto Scaling Group", "ARN"),
    Field::new("Capacity", "Instances"),
    Field::new("Capacity", "Desired"),
    Field::new("Capacity", "Min"),
    Field::new("Capacity", "Max"),
    Field::new("Configuration", "Launch Template/Configuration"),
    Field::new("Configuration", "Health Check Type"),
    Field::new("Configuration", "Health Check Grace Period"),
    Field::new("Configuration", "Default Cooldown"),
    Field::new("Network", "Availability Zones"),
    Field::new("Network", "Subnets"),
    Field::header("Network", "Load Balancing"),
    Field::new("Network", "Target Groups"),
    Field::new("Network", "Load Balancers"),
    Field::tags(),
];

pub static INSTANCE_LIST_FIELDS: &[Field] = &[
    Field::new("", "Name").default_sort(),
    Field::new("", "Auto Scaling Group").hidden(),
    Field::new("", "State"),
    Field::new("", "Instance Type"),
    Field::new("", "Launch Template/Configuration"),
    Field::new("", "Availability Zone"),
    Field::new("", "Health"),
];

pub static INSTANCE_DETAIL_FIELDS: &[Field] = &[
    Field::new("Instance", "Name"),
    Field::new("Instance", "Auto Scaling Group"),
    Field::new("Instance", "State"),
    Field::new("Instance", "Health"),
    Field::new("Instance", "Instance Type"),
    Field::new("Instance", "Launch Template/Configuration"),
    Field::new("Instance", "Availability Zone"),
    Field::new("Instance", "Protected From Scale In"),
];

pub static SCHEDULE_LIST_FIELDS: &[Field] = &[
    Field::new("", "Auto Scaling Group").merged().default_sort(),
    Field::new("", "Name"),
    Field::new("", "Recurrence"),
    Field::new("", "Start Time"),
    Field::new("", "End Time"),
    Field::new("", "Desired Capacity"),
    Field::new("", "Min"),
    Field::new("", "Max"),
];

pub static SCHEDULE_DETAIL_FIELDS: &[Field] = &[
    Field::new("Schedule", "Name"),
    Field::new("Schedule", "Auto Scaling Group"),
    Field::new("Schedule", "Recurrence"),
    Field::new("Schedule", "Time Zone"),
    Field::new("Schedule", "Start Time"),
    Field::new("Schedule", "End Time"),
    Field::new("Capacity", "Desired Capacity"),
    Field::new("Capacity", "Min"),
    Field::new("Capacity", "Max"),
    Field::new("Schedule", "ARN"),
];

// -----------------------------------------------------------------------------
// Getter tables
// -----------------------------------------------------------------------------

fn as_group(r: &Resource) -> Option<&AutoScalingGroup> {
    match r {
        Resource::AutoScalingGroup(g) => Some(g),
        _ => None,
    }
}

fn as_instance(r: &Resource) -> Option<&AsgInstance> {
    match r {
        Resource::AsgInstance(i) => Some(i),
        _ => None,
    }
}

fn as_schedule(r: &Resource) -> Option<&ScheduledAction> {
    match r {
        Resource::ScheduledAction(s) => Some(s),
        _ => None,
    }
}

pub fn group_table() -> KindTable<Resource> {
    KindTable::of(as_group)
        .field("Name", |g| g.auto_scaling_group_name.clone())
        .field("Instances", |g| g.instances.len().to_string())
        .field("Desired", |g| format::count(g.desired_capacity))
        .field("Min", |g| format::count(g.min_size))
        .field("Max", |g| format::count(g.max_size))
        .field("Status", |g| g.status.clone())
        .field("ARN", |g| g.auto_scaling_group_arn.clone())
        .field("Created Time", |g| format::time(g.created_time.as_ref()))
        .field("Launch Template/Configuration", AutoScalingGroup::launch_source)
        .field("Health Check Type", |g| g.health_check_type.clone())
        .field("Health Check Grace Period", |g| {
            format::count(g.health_check_grace_period)
        })
        .field("Default Cooldown", |g| format::count(g.default_cooldown))
        .field("Availability Zones", |g| format::join(&g.availability_zones))
        .field("Subnets", |g| format::join(&g.subnets()))
        .field("Target Groups", |g| {
            let names: Vec<String> = g.target_group_arns.iter().map(|a| format::arn_name(a)).collect();
            format::join(&names)
        })
        .field("Load Balancers", |g| format::join(&g.load_balancer_names))
        .tags(|g| to_tags(&g.tags))
        .build()
}

pub fn instance_table() -> KindTable<Resource> {
    KindTable::of(as_instance)
        .field("Name", |i| i.instance_id.clone())
        .field("Auto Scaling Group", |i| i.group_name.clone())
        .field("State", |i| i.lifecycle_state.clone())
        .field("Instance Type", |i| i.instance_type.clone())
        .field("Launch Template/Configuration", AsgInstance::launch_source)
        .field("Availability Zone", |i| i.availability_zone.clone())
        .field("Health", |i| i.health_status.clone())
        .field("Protected From Scale In", |i| format::yes_no(i.protected_from_scale_in))
        .build()
}

pub fn schedule_table() -> KindTable<Resource> {
    KindTable::of(as_schedule)
        .field("Auto Scaling Group", |s| s.auto_scaling_group_name.clone())
        .field("Name", |s| s.scheduled_action_name.clone())
        .field("Recurrence", |s| s.recurrence.clone())
        .field("Time Zone", |s| s.time_zone.clone())
        .field("Start Time", |s| format::time(s.start_time.as_ref()))
        .field("End Time", |s| format::time(s.end_time.as_ref()))
        .field("Desired Capacity", |s| format::count(s.desired_capacity))
        .field("Min", |s| format::count(s.min_size))
        .field("Max", |s| format::count(s.max_size))
        .field("ARN", |s| s.scheduled_action_arn.clone())
        .build()
}
