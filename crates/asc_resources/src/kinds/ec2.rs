//! EC2 instances.

use super::{name_tag, to_tags, ResourceTag};
use crate::format;
use crate::resource::Resource;
use asc_table::{Field, KindTable};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstanceState {
    pub code: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Placement {
    pub availability_zone: String,
    pub group_name: String,
    pub tenancy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CpuOptions {
    pub core_count: Option<i64>,
    pub threads_per_core: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupIdentifier {
    pub group_id: String,
    pub group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ec2Instance {
    pub instance_id: String,
    pub instance_type: String,
    pub image_id: String,
    pub state: InstanceState,
    pub launch_time: Option<DateTime<Utc>>,
    pub placement: Placement,
    pub public_ip_address: String,
    pub private_ip_address: String,
    pub subnet_id: String,
    pub vpc_id: String,
    pub key_name: String,
    pub architecture: String,
    pub platform_details: String,
    pub root_device_type: String,
    pub root_device_name: String,
    pub virtualization_type: String,
    pub cpu_options: Option<CpuOptions>,
    pub security_groups: Vec<GroupIdentifier>,
    pub tags: Vec<ResourceTag>,
}

impl Ec2Instance {
    pub fn name(&self) -> String {
        name_tag(&self.tags)
    }

    pub fn matches(&self, id: &str) -> bool {
        self.instance_id == id || (!id.is_empty() && self.name() == id)
    }

    fn vcpus(&self) -> String {
        self.cpu_options
            .as_ref()
            .and_then(|cpu| Some(cpu.core_count? * cpu.threads_per_core.unwrap_or(1)))
            .map(|n| n.to_string())
            .unwrap_or_default()
    }

    fn security_group_names(&self) -> String {
        let names: Vec<&str> = self
            .security_groups
            .iter()
            .map(|g| {
                if g.group_name.is_empty() {
                    g.group_id.as_str()
                } else {
                    g.group_name.as_str()
                }
            })
            .collect();
        format::join(&names)
    }
}

pub static LIST_FIELDS: &[Field] = &[
    Field::new("", "Name").default_sort(),
    Field::new("", "Instance ID"),
    Field::new("", "State"),
    Field::new("", "Instance Type"),
    Field::new("", "Public IP"),
    Field::new("", "AMI ID").hidden(),
    Field::new("", "Launch Time").hidden().descending(),
    Field::new("", "Private IP").hidden(),
    Field::new("", "Availability Zone").hidden(),
    Field::tags(),
];

pub static DETAIL_FIELDS: &[Field] = &[
    Field::new("Instance Details", "Name"),
    Field::new("Instance Details", "Instance ID"),
    Field::new("Instance Details", "State"),
    Field::new("Instance Details", "AMI ID"),
    Field::new("Instance Details", "Launch Time"),
    Field::new("Instance Details", "Instance Type"),
    Field::new("Instance Details", "Architecture"),
    Field::new("Instance Details", "Platform"),
    Field::new("Instance Details", "vCPUs"),
    Field::header("Instance Details", "Storage"),
    Field::new("Instance Details", "Root Device Type"),
    Field::new("Instance Details", "Root Device Name"),
    Field::new("Instance Details", "Virtualization Type"),
    Field::new("Networking", "Public IP"),
    Field::new("Networking", "Private IP"),
    Field::new("Networking", "VPC ID"),
    Field::new("Networking", "Subnet ID"),
    Field::new("Networking", "Availability Zone"),
    Field::new("Networking", "Placement Group"),
    Field::new("Security", "Security Group(s)"),
    Field::new("Security", "Key Name"),
    Field::tags(),
];

fn as_instance(r: &Resource) -> Option<&Ec2Instance> {
    match r {
        Resource::Ec2Instance(i) => Some(i),
        _ => None,
    }
}

pub fn table() -> KindTable<Resource> {
    KindTable::of(as_instance)
        .field("Name", Ec2Instance::name)
        .field("Instance ID", |i| i.instance_id.clone())
        .field("State", |i| i.state.name.clone())
        .field("AMI ID", |i| i.image_id.clone())
        .field("Launch Time", |i| format::time(i.launch_time.as_ref()))
        .field("Instance Type", |i| i.instance_type.clone())
        .field("Architecture", |i| i.architecture.clone())
        .field("Platform", |i| i.platform_details.clone())
        .field("vCPUs", Ec2Instance::vcpus)
        .field("Root Device Type", |i| i.root_device_type.clone())
        .field("Root Device Name", |i| i.root_device_name.clone())
        .field("Virtualization Type", |i| i.virtualization_type.clone())
        .field("Public IP", |i| i.public_ip_address.clone())
        .field("Private IP", |i| i.private_ip_address.clone())
        .field("VPC ID", |i| i.vpc_id.clone())
        .field("Subnet ID", |i| i.subnet_id.clone())
        .field("Availability Zone", |i| i.placement.availability_zone.clone())
        .field("Placement Group", |i| i.placement.group_name.clone())
        .field("Security Group(s)", Ec2Instance::security_group_names)
        .field("Key Name", |i| i.key_name.clone())
        .tags(|i| to_tags(&i.tags))
        .build()
}
