//! `asc asg`: Auto Scaling groups, their instances and scheduled actions.

use super::context::Context;
use super::list::{self, ListArgs};
use super::show::{self, DetailArgs};
use anyhow::Result;
use asc_resources::{Kind, Resource};
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum AsgAction {
    /// List groups, or the instances of GROUP
    Ls {
        group: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one group
    Show {
        group: String,
        #[command(flatten)]
        detail: DetailArgs,
    },
    /// List scheduled actions, optionally only those of GROUP
    Schedules {
        group: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
}

pub fn run(ctx: &Context, action: AsgAction) -> Result<()> {
    let doc = ctx.document()?;
    match action {
        AsgAction::Ls { group: None, list } => {
            let kind = Kind::AutoScalingGroup;
            list::run(ctx, kind, &doc.records(kind)?, &list, kind.list_title())
        }
        AsgAction::Ls {
            group: Some(group),
            list,
        } => {
            let groups = doc.records(Kind::AutoScalingGroup)?;
            let owner = show::find(Kind::AutoScalingGroup, &groups, &group)?;
            let name = owner.display_name().to_string();

            let kind = Kind::AsgInstance;
            let instances = in_group(doc.records(kind)?, &name);
            let title = format!("{} for {name}", kind.list_title());
            list::run(ctx, kind, &instances, &list, title)
        }
        AsgAction::Show { group, detail } => {
            let kind = Kind::AutoScalingGroup;
            show::run(ctx, kind, &doc.records(kind)?, &group, &detail)
        }
        AsgAction::Schedules { group, list } => {
            let kind = Kind::ScheduledAction;
            let actions = doc.records(kind)?;
            match group {
                Some(name) => {
                    let title = format!("{} for {name}", kind.list_title());
                    list::run(ctx, kind, &in_group(actions, &name), &list, title)
                }
                None => list::run(ctx, kind, &actions, &list, kind.list_title()),
            }
        }
    }
}

fn in_group(records: Vec<Resource>, group: &str) -> Vec<Resource> {
    records
        .into_iter()
        .filter(|r| r.group_name() == Some(group))
        .collect()
}
