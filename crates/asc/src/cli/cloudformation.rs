//! `asc cloudformation` (alias `cfn`): stacks.

use super::context::Context;
use super::list::{self, ListArgs};
use super::show::{self, DetailArgs};
use anyhow::Result;
use asc_resources::Kind;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum StackAction {
    /// List stacks, most recently updated first
    Ls {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one stack by name or stack id
    Show {
        name: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
}

pub fn run(ctx: &Context, action: StackAction) -> Result<()> {
    let kind = Kind::Stack;
    let records = ctx.document()?.records(kind)?;
    match action {
        StackAction::Ls { list } => list::run(ctx, kind, &records, &list, kind.list_title()),
        StackAction::Show { name, detail } => show::run(ctx, kind, &records, &name, &detail),
    }
}
