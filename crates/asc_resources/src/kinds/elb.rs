//! Elastic Load Balancing v2: load balancers and target groups.

use super::{to_tags, ResourceTag};
use crate::format;
use crate::resource::Resource;
use asc_table::{Field, KindTable};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerState {
    pub code: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AvailabilityZone {
    pub zone_name: String,
    pub subnet_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancer {
    pub load_balancer_arn: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    pub canonical_hosted_zone_id: String,
    pub created_time: Option<DateTime<Utc>>,
    pub load_balancer_name: String,
    pub scheme: String,
    pub vpc_id: String,
    pub state: Option<LoadBalancerState>,
    #[serde(rename = "Type")]
    pub kind: String,
    pub availability_zones: Vec<AvailabilityZone>,
    pub security_groups: Vec<String>,
    pub ip_address_type: String,
    /// Only present when the document was enriched with describe-tags output.
    pub tags: Vec<ResourceTag>,
}

impl LoadBalancer {
    pub fn matches(&self, id: &str) -> bool {
        self.load_balancer_name == id || self.load_balancer_arn == id || self.dns_name == id
    }

    fn state(&self) -> String {
        self.state
            .as_ref()
            .map(|s| s.code.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Matcher {
    pub http_code: String,
    pub grpc_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetGroup {
    pub target_group_arn: String,
    pub target_group_name: String,
    pub protocol: String,
    pub port: Option<i64>,
    pub vpc_id: String,
    pub health_check_protocol: String,
    pub health_check_port: String,
    pub health_check_enabled: Option<bool>,
    pub health_check_interval_seconds: Option<i64>,
    pub health_check_timeout_seconds: Option<i64>,
    pub healthy_threshold_count: Option<i64>,
    pub unhealthy_threshold_count: Option<i64>,
    pub health_check_path: String,
    pub matcher: Option<Matcher>,
    pub load_balancer_arns: Vec<String>,
    pub target_type: String,
    pub ip_address_type: String,
    pub tags: Vec<ResourceTag>,
}

impl TargetGroup {
    pub fn matches(&self, id: &str) -> bool {
        self.target_group_name == id || self.target_group_arn == id
    }

    fn load_balancers(&self) -> String {
        let names: Vec<String> = self
            .load_balancer_arns
            .iter()
            .map(|arn| format::arn_name(arn))
            .collect();
        format::join(&names)
    }
}

pub static LOAD_BALANCER_LIST_FIELDS: &[Field] = &[
    Field::new("", "Name").default_sort(),
    Field::new("", "DNS Name").hidden(),
    Field::new("", "Scheme").hidden(),
    Field::new("", "State"),
    Field::new("", "Type"),
    Field::new("", "IP Type").hidden(),
    Field::new("", "VPC ID"),
    Field::new("", "Created Time").descending(),
    Field::new("", "ARN").hidden(),
    Field::new("", "Availability Zones").hidden(),
    Field::tags(),
];

pub static LOAD_BALANCER_DETAIL_FIELDS: &[Field] = &[
    Field::new("ELB Details", "Name"),
    Field::new("ELB Details", "Type"),
    Field::new("ELB Details", "State"),
    Field::new("ELB Details", "Scheme"),
    Field::new("ELB Details", "Hosted Zone"),
    Field::new("ELB Details", "VPC ID"),
    Field::new("ELB Details", "Subnets"),
    Field::new("ELB Details", "Availability Zones"),
    Field::new("ELB Details", "Security Groups"),
    Field::new("ELB Details", "IP Type"),
    Field::new("ELB Details", "Created Time"),
    Field::new("ELB Details", "ARN"),
    Field::new("ELB Details", "DNS Name"),
    Field::tags(),
];

pub static TARGET_GROUP_LIST_FIELDS: &[Field] = &[
    Field::new("", "Name").default_sort(),
    Field::new("", "Protocol"),
    Field::new("", "Port"),
    Field::new("", "Target Type"),
    Field::new("", "Load Balancer"),
    Field::new("", "VPC ID"),
    Field::new("", "ARN").hidden(),
    Field::tags(),
];

pub static TARGET_GROUP_DETAIL_FIELDS: &[Field] = &[
    Field::new("Target Group", "Name"),
    Field::new("Target Group", "Protocol"),
    Field::new("Target Group", "Port"),
    Field::new("Target Group", "Target Type"),
    Field::new("Target Group", "IP Type"),
    Field::new("Target Group", "VPC ID"),
    Field::new("Target Group", "Load Balancer"),
    Field::new("Target Group", "ARN"),
    Field::new("Health Check", "Health Check Enabled"),
    Field::new("Health Check", "Health Check Protocol"),
    Field::new("Health Check", "Health Check Port"),
    Field::new("Health Check", "Health Check Path"),
    Field::new("Health Check", "HTTP Code"),
    Field::header("Health Check", "Thresholds"),
    Field::new("Health Check", "Health Check Interval"),
    Field::new("Health Check", "Health Check Timeout"),
    Field::new("Health Check", "Healthy Threshold"),
    Field::new("Health Check", "Unhealthy Threshold"),
    Field::tags(),
];

fn as_load_balancer(r: &Resource) -> Option<&LoadBalancer> {
    match r {
        Resource::LoadBalancer(lb) => Some(lb),
        _ => None,
    }
}

fn as_target_group(r: &Resource) -> Option<&TargetGroup> {
    match r {
        Resource::TargetGroup(tg) => Some(tg),
        _ => None,
    }
}

pub fn load_balancer_table() -> KindTable<Resource> {
    KindTable::of(as_load_balancer)
        .field("Name", |lb| lb.load_balancer_name.clone())
        .field("DNS Name", |lb| lb.dns_name.clone())
        .field("Scheme", |lb| lb.scheme.clone())
        .field("State", LoadBalancer::state)
        .field("Type", |lb| lb.kind.clone())
        .field("IP Type", |lb| lb.ip_address_type.clone())
        .field("VPC ID", |lb| lb.vpc_id.clone())
        .field("Hosted Zone", |lb| lb.canonical_hosted_zone_id.clone())
        .field("Created Time", |lb| format::time(lb.created_time.as_ref()))
        .field("ARN", |lb| lb.load_balancer_arn.clone())
        .field("Availability Zones", |lb| {
            let zones: Vec<&str> = lb.availability_zones.iter().map(|z| z.zone_name.as_str()).collect();
            format::join(&zones)
        })
        .field("Subnets", |lb| {
            let subnets: Vec<&str> = lb.availability_zones.iter().map(|z| z.subnet_id.as_str()).collect();
            format::join(&subnets)
        })
        .field("Security Groups", |lb| format::join(&lb.security_groups))
        .tags(|lb| to_tags(&lb.tags))
        .build()
}

pub fn target_group_table() -> KindTable<Resource> {
    KindTable::of(as_target_group)
        .field("Name", |tg| tg.target_group_name.clone())
        .field("ARN", |tg| tg.target_group_arn.clone())
        .field("Protocol", |tg| tg.protocol.clone())
        .field("Port", |tg| format::count(tg.port))
        .field("VPC ID", |tg| tg.vpc_id.clone())
        .field("Target Type", |tg| tg.target_type.clone())
        .field("IP Type", |tg| tg.ip_address_type.clone())
        .field("Load Balancer", TargetGroup::load_balancers)
        .field("Health Check Enabled", |tg| {
            format::label(tg.health_check_enabled, "Enabled", "Disabled")
        })
        .field("Health Check Protocol", |tg| tg.health_check_protocol.clone())
        .field("Health Check Port", |tg| tg.health_check_port.clone())
        .field("Health Check Path", |tg| tg.health_check_path.clone())
        .field("Health Check Interval", |tg| format::count(tg.health_check_interval_seconds))
        .field("Health Check Timeout", |tg| format::count(tg.health_check_timeout_seconds))
        .field("Healthy Threshold", |tg| format::count(tg.healthy_threshold_count))
        .field("Unhealthy Threshold", |tg| format::count(tg.unhealthy_threshold_count))
        .field("HTTP Code", |tg| {
            tg.matcher.as_ref().map(|m| m.http_code.clone()).unwrap_or_default()
        })
        .tags(|tg| to_tags(&tg.tags))
        .build()
}
