//! `asc elb`: load balancers and target groups.

use super::context::Context;
use super::list::{self, ListArgs};
use super::show::{self, DetailArgs};
use anyhow::Result;
use asc_resources::Kind;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum ElbAction {
    /// List load balancers
    Ls {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one load balancer by name, ARN or DNS name
    Show {
        name: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
    /// List target groups
    TargetGroups {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Target group commands
    TargetGroup {
        #[command(subcommand)]
        action: TargetGroupAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TargetGroupAction {
    /// Show one target group by name or ARN
    Show {
        name: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
}

pub fn run(ctx: &Context, action: ElbAction) -> Result<()> {
    let doc = ctx.document()?;
    match action {
        ElbAction::Ls { list } => {
            let kind = Kind::LoadBalancer;
            list::run(ctx, kind, &doc.records(kind)?, &list, kind.list_title())
        }
        ElbAction::Show { name, detail } => {
            let kind = Kind::LoadBalancer;
            show::run(ctx, kind, &doc.records(kind)?, &name, &detail)
        }
        ElbAction::TargetGroups { list } => {
            let kind = Kind::TargetGroup;
            list::run(ctx, kind, &doc.records(kind)?, &list, kind.list_title())
        }
        ElbAction::TargetGroup {
            action: TargetGroupAction::Show { name, detail },
        } => {
            let kind = Kind::TargetGroup;
            show::run(ctx, kind, &doc.records(kind)?, &name, &detail)
        }
    }
}
