//! Flags shared by every list command and their translation into render options.

use super::config::Config;
use super::context::Context;
use anyhow::{Context as _, Result};
use asc_resources::{resolver, Kind, Resource};
use asc_table::{render_list, style_for, ColumnSelection, OutputMode, RenderOptions, TableStyle};
use clap::Args;
use tracing::debug;

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Plain, borderless output
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse-sort")]
    pub reverse: bool,

    /// Add a column for tag KEY (repeatable)
    #[arg(short = 't', long = "tag", value_name = "KEY")]
    pub tags: Vec<String>,

    /// Sort by FIELD; the first one given wins (repeatable)
    #[arg(short = 's', long = "sort", value_name = "FIELD")]
    pub sort: Vec<String>,

    /// Show a hidden FIELD (repeatable)
    #[arg(long = "show", value_name = "FIELD")]
    pub show: Vec<String>,

    /// Hide FIELD (repeatable)
    #[arg(long = "hide", value_name = "FIELD")]
    pub hide: Vec<String>,

    /// Table style: rounded, separated or plain
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,

    /// Include the ARN column
    #[arg(short = 'a', long)]
    pub arn: bool,
}

impl ListArgs {
    pub fn selection(&self) -> ColumnSelection {
        let mut selection = ColumnSelection::new();
        for name in &self.show {
            selection = selection.show(name.as_str());
        }
        if self.arn {
            selection = selection.show("ARN");
        }
        for name in &self.hide {
            selection = selection.hide(name.as_str());
        }
        for name in &self.sort {
            selection = selection.sort_by(name.as_str());
        }
        selection
    }

    /// `--style` wins over `-l`, which wins over the config file.
    fn style(&self, config: &Config) -> Option<TableStyle> {
        match (&self.style, self.list) {
            (Some(name), _) => Some(style_for(name)),
            (None, true) => Some(TableStyle::Plain),
            (None, false) => config.table.style.as_deref().map(style_for),
        }
    }

    pub fn options(&self, config: &Config, color: bool, title: impl Into<String>) -> RenderOptions {
        let mode = if self.list {
            OutputMode::List
        } else {
            OutputMode::Table
        };
        let mut opts = RenderOptions::new()
            .with_title(title)
            .with_mode(mode)
            .reversed(self.reverse)
            .with_color(color);
        if let Some(style) = self.style(config) {
            opts = opts.with_style(style);
        }
        if let Some(width) = config.table.max_width {
            opts = opts.with_max_width(width);
        }
        for key in &self.tags {
            opts = opts.with_tag(key.as_str());
        }
        opts
    }
}

/// Render `records` of `kind` as a list table on stdout.
pub fn run(
    ctx: &Context,
    kind: Kind,
    records: &[Resource],
    args: &ListArgs,
    title: impl Into<String>,
) -> Result<()> {
    let fields = args.selection().apply(kind.list_fields());
    let opts = args.options(&ctx.config, ctx.color, title);
    debug!(kind = %kind, records = records.len(), "rendering list");

    let text = render_list(&fields, records, resolver(), &opts)
        .with_context(|| format!("Failed to render {kind} list"))?;
    ctx.emit(&text)
}
