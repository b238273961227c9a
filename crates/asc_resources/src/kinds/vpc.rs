//! VPCs and subnets.

use super::{name_tag, to_tags, ResourceTag};
use crate::format;
use crate::resource::Resource;
use asc_table::{Field, KindTable};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ipv6CidrAssociation {
    pub ipv6_cidr_block: String,
    pub association_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Vpc {
    pub vpc_id: String,
    pub state: String,
    pub cidr_block: String,
    pub dhcp_options_id: String,
    pub instance_tenancy: String,
    pub is_default: Option<bool>,
    pub owner_id: String,
    pub ipv6_cidr_block_association_set: Vec<Ipv6CidrAssociation>,
    pub tags: Vec<ResourceTag>,
}

impl Vpc {
    pub fn name(&self) -> String {
        name_tag(&self.tags)
    }

    pub fn matches(&self, id: &str) -> bool {
        self.vpc_id == id || (!id.is_empty() && self.name() == id)
    }

    fn ipv6_cidrs(&self) -> String {
        let blocks: Vec<&str> = self
            .ipv6_cidr_block_association_set
            .iter()
            .map(|a| a.ipv6_cidr_block.as_str())
            .collect();
        format::join(&blocks)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Subnet {
    pub subnet_id: String,
    pub subnet_arn: String,
    pub vpc_id: String,
    pub state: String,
    pub cidr_block: String,
    pub availability_zone: String,
    pub available_ip_address_count: Option<i64>,
    pub default_for_az: Option<bool>,
    pub map_public_ip_on_launch: Option<bool>,
    pub owner_id: String,
    pub tags: Vec<ResourceTag>,
}

impl Subnet {
    pub fn name(&self) -> String {
        name_tag(&self.tags)
    }

    pub fn matches(&self, id: &str) -> bool {
        self.subnet_id == id || self.subnet_arn == id || (!id.is_empty() && self.name() == id)
    }
}

pub static VPC_LIST_FIELDS: &[Field] = &[
    Field::new("", "VPC ID").default_sort(),
    Field::new("", "Name"),
    Field::new("", "State"),
    Field::new("", "IPv4 CIDR"),
    Field::new("", "IPv6 CIDR").hidden(),
    Field::new("", "DHCP Option Set").hidden(),
    Field::new("", "Tenancy").hidden(),
    Field::new("", "Default VPC"),
    Field::new("", "Owner ID").hidden(),
    Field::tags(),
];

pub static VPC_DETAIL_FIELDS: &[Field] = &[
    Field::new("VPC Details", "VPC ID"),
    Field::new("VPC Details", "Name"),
    Field::new("VPC Details", "State"),
    Field::new("VPC Details", "Tenancy"),
    Field::new("VPC Details", "Default VPC"),
    Field::new("VPC Details", "Owner ID"),
    Field::new("Addressing", "IPv4 CIDR"),
    Field::new("Addressing", "IPv6 CIDR"),
    Field::new("Addressing", "DHCP Option Set"),
    Field::tags(),
];

pub static SUBNET_LIST_FIELDS: &[Field] = &[
    Field::new("", "Subnet ID").default_sort(),
    Field::new("", "Name"),
    Field::new("", "VPC ID"),
    Field::new("", "CIDR Block"),
    Field::new("", "Availability Zone"),
    Field::new("", "State"),
    Field::new("", "Available IPs"),
    Field::new("", "Default For AZ").hidden(),
    Field::tags(),
];

pub static SUBNET_DETAIL_FIELDS: &[Field] = &[
    Field::new("Subnet Details", "Subnet ID"),
    Field::new("Subnet Details", "Name"),
    Field::new("Subnet Details", "State"),
    Field::new("Subnet Details", "VPC ID"),
    Field::new("Subnet Details", "Owner"),
    Field::new("Subnet Details", "ARN"),
    Field::new("Addressing", "CIDR Block"),
    Field::new("Addressing", "Available IPs"),
    Field::new("Addressing", "Availability Zone"),
    Field::new("Addressing", "Default For AZ"),
    Field::new("Addressing", "Auto-assign Public IPv4"),
    Field::tags(),
];

fn as_vpc(r: &Resource) -> Option<&Vpc> {
    match r {
        Resource::Vpc(v) => Some(v),
        _ => None,
    }
}

fn as_subnet(r: &Resource) -> Option<&Subnet> {
    match r {
        Resource::Subnet(s) => Some(s),
        _ => None,
    }
}

pub fn vpc_table() -> KindTable<Resource> {
    KindTable::of(as_vpc)
        .field("VPC ID", |v| v.vpc_id.clone())
        .field("Name", Vpc::name)
        .field("State", |v| v.state.clone())
        .field("Tenancy", |v| v.instance_tenancy.clone())
        .field("DHCP Option Set", |v| v.dhcp_options_id.clone())
        .field("IPv4 CIDR", |v| v.cidr_block.clone())
        .field("IPv6 CIDR", Vpc::ipv6_cidrs)
        .field("Default VPC", |v| format::yes_no(v.is_default))
        .field("Owner ID", |v| v.owner_id.clone())
        .tags(|v| to_tags(&v.tags))
        .build()
}

pub fn subnet_table() -> KindTable<Resource> {
    KindTable::of(as_subnet)
        .field("Subnet ID", |s| s.subnet_id.clone())
        .field("Name", Subnet::name)
        .field("VPC ID", |s| s.vpc_id.clone())
        .field("CIDR Block", |s| s.cidr_block.clone())
        .field("Availability Zone", |s| s.availability_zone.clone())
        .field("State", |s| s.state.clone())
        .field("Available IPs", |s| format::count(s.available_ip_address_count))
        .field("Default For AZ", |s| format::yes_no(s.default_for_az))
        .field("Auto-assign Public IPv4", |s| format::yes_no(s.map_public_ip_on_launch))
        .field("Owner", |s| s.owner_id.clone())
        .field("ARN", |s| s.subnet_arn.clone())
        .tags(|s| to_tags(&s.tags))
        .build()
}
