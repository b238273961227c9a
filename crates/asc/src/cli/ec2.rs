//! `asc ec2`: EC2 instances.

use super::context::Context;
use super::list::{self, ListArgs};
use super::show::{self, DetailArgs};
use anyhow::Result;
use asc_resources::Kind;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Ec2Action {
    /// List instances
    Ls {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one instance by id or Name tag
    Show {
        id: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
}

pub fn run(ctx: &Context, action: Ec2Action) -> Result<()> {
    let kind = Kind::Ec2Instance;
    let records = ctx.document()?.records(kind)?;
    match action {
        Ec2Action::Ls { list } => list::run(ctx, kind, &records, &list, kind.list_title()),
        Ec2Action::Show { id, detail } => show::run(ctx, kind, &records, &id, &detail),
    }
}
