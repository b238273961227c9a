//! Detail view of a single record.

use super::config::Config;
use super::context::Context;
use super::error::HelpfulError;
use anyhow::{Context as _, Result};
use asc_resources::{resolver, Kind, Resource};
use asc_table::{render_detail, style_for, Layout, RenderOptions};
use clap::Args;
use tracing::debug;

const DEFAULT_COLUMNS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default, Args)]
pub struct DetailArgs {
    /// Layout: vertical, horizontal or grid
    #[arg(short = 'o', long, value_name = "LAYOUT")]
    pub layout: Option<String>,

    /// Label/value pairs per row for horizontal and grid layouts
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Table style: rounded, separated or plain
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,
}

impl DetailArgs {
    fn layout(&self, config: &Config) -> Result<Layout> {
        match self.layout.as_deref() {
            Some(name) => name
                .parse::<Layout>()
                .map_err(|_| HelpfulError::invalid_layout(name).into()),
            None => Ok(config.detail.layout()?.unwrap_or_default()),
        }
    }

    pub fn options(&self, config: &Config, color: bool, title: impl Into<String>) -> Result<RenderOptions> {
        let columns = self
            .columns
            .or(config.detail.columns_per_row)
            .unwrap_or(DEFAULT_COLUMNS_PER_ROW);
        let mut opts = RenderOptions::new()
            .with_title(title)
            .with_color(color)
            .with_layout(self.layout(config)?, columns)
            .with_column_width(config.detail.column_min_width, config.detail.column_max_width);
        if let Some(style) = self.style.as_deref().or(config.table.style.as_deref()) {
            opts = opts.with_style(style_for(style));
        }
        if let Some(width) = config.table.max_width {
            opts = opts.with_max_width(width);
        }
        Ok(opts)
    }
}

/// The record `id` names: by name, id or ARN.
pub fn find<'a>(kind: Kind, records: &'a [Resource], id: &str) -> Result<&'a Resource> {
    let mut matches = records.iter().filter(|r| r.matches(id));
    let found = matches.next().ok_or_else(|| {
        let known: Vec<&str> = records.iter().map(Resource::display_name).collect();
        HelpfulError::record_not_found(kind, id, &known)
    })?;
    if matches.next().is_some() {
        debug!(kind = %kind, id, "several records match; showing the first");
    }
    Ok(found)
}

/// Render the record `id` as a detail table on stdout.
pub fn run(ctx: &Context, kind: Kind, records: &[Resource], id: &str, args: &DetailArgs) -> Result<()> {
    let record = find(kind, records, id)?;
    let opts = args.options(&ctx.config, ctx.color, record.detail_title())?;
    debug!(kind = %kind, id, layout = %opts.layout, "rendering detail");

    let text = render_detail(kind.detail_fields(), record, resolver(), &opts)
        .with_context(|| format!("Failed to render {kind} '{id}'"))?;
    ctx.emit(&text)
}
