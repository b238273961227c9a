//! `asc vpc`: VPCs and subnets.

use super::context::Context;
use super::list::{self, ListArgs};
use super::show::{self, DetailArgs};
use anyhow::Result;
use asc_resources::Kind;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum VpcAction {
    /// List VPCs
    Ls {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one VPC by id or Name tag
    Show {
        id: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
    /// List subnets
    Subnets {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Subnet commands
    Subnet {
        #[command(subcommand)]
        action: SubnetAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubnetAction {
    /// Show one subnet by id, ARN or Name tag
    Show {
        id: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
}

pub fn run(ctx: &Context, action: VpcAction) -> Result<()> {
    let doc = ctx.document()?;
    match action {
        VpcAction::Ls { list } => {
            let kind = Kind::Vpc;
            list::run(ctx, kind, &doc.records(kind)?, &list, kind.list_title())
        }
        VpcAction::Show { id, detail } => {
            let kind = Kind::Vpc;
            show::run(ctx, kind, &doc.records(kind)?, &id, &detail)
        }
        VpcAction::Subnets { list } => {
            let kind = Kind::Subnet;
            list::run(ctx, kind, &doc.records(kind)?, &list, kind.list_title())
        }
        VpcAction::Subnet {
            action: SubnetAction::Show { id, detail },
        } => {
            let kind = Kind::Subnet;
            show::run(ctx, kind, &doc.records(kind)?, &id, &detail)
        }
    }
}
