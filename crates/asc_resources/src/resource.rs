//! The closed set of record kinds and the tagged union carrying them.

use crate::kinds::asg::{self, AsgInstance, AutoScalingGroup, ScheduledAction};
use crate::kinds::cloudformation::{self, Stack};
use crate::kinds::ec2::{self, Ec2Instance};
use crate::kinds::elb::{self, LoadBalancer, TargetGroup};
use crate::kinds::vpc::{self, Subnet, Vpc};
use asc_table::{Field, KindTable, Record};
use std::fmt;

/// Every record kind the CLI can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    AutoScalingGroup,
    AsgInstance,
    ScheduledAction,
    Ec2Instance,
    LoadBalancer,
    TargetGroup,
    Vpc,
    Subnet,
    Stack,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::AutoScalingGroup,
        Kind::AsgInstance,
        Kind::ScheduledAction,
        Kind::Ec2Instance,
        Kind::LoadBalancer,
        Kind::TargetGroup,
        Kind::Vpc,
        Kind::Subnet,
        Kind::Stack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::AutoScalingGroup => "auto-scaling-group",
            Kind::AsgInstance => "asg-instance",
            Kind::ScheduledAction => "scheduled-action",
            Kind::Ec2Instance => "ec2-instance",
            Kind::LoadBalancer => "load-balancer",
            Kind::TargetGroup => "target-group",
            Kind::Vpc => "vpc",
            Kind::Subnet => "subnet",
            Kind::Stack => "stack",
        }
    }

    /// Top-level key of the describe document holding records of this kind.
    pub fn envelope(self) -> &'static str {
        match self {
            Kind::AutoScalingGroup | Kind::AsgInstance => "AutoScalingGroups",
            Kind::ScheduledAction => "ScheduledUpdateGroupActions",
            Kind::Ec2Instance => "Reservations",
            Kind::LoadBalancer => "LoadBalancers",
            Kind::TargetGroup => "TargetGroups",
            Kind::Vpc => "Vpcs",
            Kind::Subnet => "Subnets",
            Kind::Stack => "Stacks",
        }
    }

    pub fn list_title(self) -> &'static str {
        match self {
            Kind::AutoScalingGroup => "Auto Scaling Groups",
            Kind::AsgInstance => "Auto Scaling Group Instances",
            Kind::ScheduledAction => "Scheduled Actions",
            Kind::Ec2Instance => "EC2 Instances",
            Kind::LoadBalancer => "Elastic Load Balancers",
            Kind::TargetGroup => "Target Groups",
            Kind::Vpc => "VPCs",
            Kind::Subnet => "Subnets",
            Kind::Stack => "CloudFormation Stacks",
        }
    }

    /// Short noun used in detail titles ("ELB summary for web").
    pub fn short_label(self) -> &'static str {
        match self {
            Kind::AutoScalingGroup => "ASG",
            Kind::AsgInstance => "ASG instance",
            Kind::ScheduledAction => "Schedule",
            Kind::Ec2Instance => "EC2",
            Kind::LoadBalancer => "ELB",
            Kind::TargetGroup => "Target group",
            Kind::Vpc => "VPC",
            Kind::Subnet => "Subnet",
            Kind::Stack => "Stack",
        }
    }

    pub fn list_fields(self) -> &'static [Field] {
        match self {
            Kind::AutoScalingGroup => asg::GROUP_LIST_FIELDS,
            Kind::AsgInstance => asg::INSTANCE_LIST_FIELDS,
            Kind::ScheduledAction => asg::SCHEDULE_LIST_FIELDS,
            Kind::Ec2Instance => ec2::LIST_FIELDS,
            Kind::LoadBalancer => elb::LOAD_BALANCER_LIST_FIELDS,
            Kind::TargetGroup => elb::TARGET_GROUP_LIST_FIELDS,
            Kind::Vpc => vpc::VPC_LIST_FIELDS,
            Kind::Subnet => vpc::SUBNET_LIST_FIELDS,
            Kind::Stack => cloudformation::LIST_FIELDS,
        }
    }

    pub fn detail_fields(self) -> &'static [Field] {
        match self {
            Kind::AutoScalingGroup => asg::GROUP_DETAIL_FIELDS,
            Kind::AsgInstance => asg::INSTANCE_DETAIL_FIELDS,
            Kind::ScheduledAction => asg::SCHEDULE_DETAIL_FIELDS,
            Kind::Ec2Instance => ec2::DETAIL_FIELDS,
            Kind::LoadBalancer => elb::LOAD_BALANCER_DETAIL_FIELDS,
            Kind::TargetGroup => elb::TARGET_GROUP_DETAIL_FIELDS,
            Kind::Vpc => vpc::VPC_DETAIL_FIELDS,
            Kind::Subnet => vpc::SUBNET_DETAIL_FIELDS,
            Kind::Stack => cloudformation::DETAIL_FIELDS,
        }
    }

    /// Getter table for this kind.
    pub fn table(self) -> KindTable<Resource> {
        match self {
            Kind::AutoScalingGroup => asg::group_table(),
            Kind::AsgInstance => asg::instance_table(),
            Kind::ScheduledAction => asg::schedule_table(),
            Kind::Ec2Instance => ec2::table(),
            Kind::LoadBalancer => elb::load_balancer_table(),
            Kind::TargetGroup => elb::target_group_table(),
            Kind::Vpc => vpc::vpc_table(),
            Kind::Subnet => vpc::subnet_table(),
            Kind::Stack => cloudformation::table(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One record of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    AutoScalingGroup(AutoScalingGroup),
    AsgInstance(AsgInstance),
    ScheduledAction(ScheduledAction),
    Ec2Instance(Ec2Instance),
    LoadBalancer(LoadBalancer),
    TargetGroup(TargetGroup),
    Vpc(Vpc),
    Subnet(Subnet),
    Stack(Stack),
}

impl Record for Resource {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        match self {
            Resource::AutoScalingGroup(_) => Kind::AutoScalingGroup,
            Resource::AsgInstance(_) => Kind::AsgInstance,
            Resource::ScheduledAction(_) => Kind::ScheduledAction,
            Resource::Ec2Instance(_) => Kind::Ec2Instance,
            Resource::LoadBalancer(_) => Kind::LoadBalancer,
            Resource::TargetGroup(_) => Kind::TargetGroup,
            Resource::Vpc(_) => Kind::Vpc,
            Resource::Subnet(_) => Kind::Subnet,
            Resource::Stack(_) => Kind::Stack,
        }
    }
}

impl Resource {
    /// Human identifier: name where the kind has one, else its id.
    pub fn display_name(&self) -> &str {
        match self {
            Resource::AutoScalingGroup(r) => &r.auto_scaling_group_name,
            Resource::AsgInstance(r) => &r.instance_id,
            Resource::ScheduledAction(r) => &r.scheduled_action_name,
            Resource::Ec2Instance(r) => &r.instance_id,
            Resource::LoadBalancer(r) => &r.load_balancer_name,
            Resource::TargetGroup(r) => &r.target_group_name,
            Resource::Vpc(r) => &r.vpc_id,
            Resource::Subnet(r) => &r.subnet_id,
            Resource::Stack(r) => &r.stack_name,
        }
    }

    /// Whether `id` names this record by name, id or ARN.
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Resource::AutoScalingGroup(r) => r.matches(id),
            Resource::AsgInstance(r) => r.matches(id),
            Resource::ScheduledAction(r) => r.matches(id),
            Resource::Ec2Instance(r) => r.matches(id),
            Resource::LoadBalancer(r) => r.matches(id),
            Resource::TargetGroup(r) => r.matches(id),
            Resource::Vpc(r) => r.matches(id),
            Resource::Subnet(r) => r.matches(id),
            Resource::Stack(r) => r.matches(id),
        }
    }

    /// Owning Auto Scaling group for kinds that belong to one.
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Resource::AsgInstance(r) => Some(&r.group_name),
            Resource::ScheduledAction(r) => Some(&r.auto_scaling_group_name),
            _ => None,
        }
    }

    /// Title for a detail view of this record.
    pub fn detail_title(&self) -> String {
        format!("{} summary for {}", self.kind().short_label(), self.display_name())
    }
}
