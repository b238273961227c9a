//! List renderer behaviour: projection, suppression, tag columns, sorting and styles.

mod common;

use asc_table::{
    build_list, compare_natural, render_list, AttributeResolver, ColumnSelection, Error, Field,
    OutputMode, Registry, RenderOptions, SortDirection, TableStyle, Tag,
};
use common::{group, registry, tagged, Item, LIST_FIELDS};
use std::cmp::Ordering;

// =============================================================================
// PROJECTION AND SUPPRESSION
// =============================================================================

/// Zero records still renders every declared visible column.
#[test]
fn test_empty_record_list_keeps_all_columns() -> anyhow::Result<()> {
    let opts = RenderOptions::new().with_tag("Env");
    let table = build_list(LIST_FIELDS, &[] as &[Item], &registry(), &opts)?;

    assert_eq!(table.headers(), ["Name", "Max", "Status", "ARN", "Tag: Env"]);
    assert!(table.rows.is_empty());

    let text = render_list(LIST_FIELDS, &[] as &[Item], &registry(), &opts)?;
    assert!(text.contains("Tag: Env"));
    Ok(())
}

/// A column is dropped when every row leaves it empty.
#[test]
fn test_all_empty_column_is_suppressed() -> anyhow::Result<()> {
    let records = vec![group("web", 4), group("api", 2)];
    let table = build_list(LIST_FIELDS, &records, &registry(), &RenderOptions::new())?;

    assert_eq!(table.headers(), ["Name", "Max", "Status"]);
    assert!(table.rows.iter().all(|row| row.len() == 3));
    Ok(())
}

/// One populated value anywhere keeps the column.
#[test]
fn test_partially_populated_column_is_kept() -> anyhow::Result<()> {
    let mut with_arn = group("web", 4);
    if let Item::Group(g) = &mut with_arn {
        g.arn = "arn:aws:autoscaling:eu-west-1:1:web".to_string();
    }
    let records = vec![with_arn, group("api", 2)];
    let table = build_list(LIST_FIELDS, &records, &registry(), &RenderOptions::new())?;

    assert_eq!(
        table.column_values("ARN"),
        Some(vec!["", "arn:aws:autoscaling:eu-west-1:1:web"])
    );
    Ok(())
}

/// Visibility overrides feed the projection.
#[test]
fn test_hidden_fields_are_not_projected() -> anyhow::Result<()> {
    let fields = ColumnSelection::new().hide("status").apply(LIST_FIELDS);
    let table = build_list(&fields, &[group("web", 1)], &registry(), &RenderOptions::new())?;
    assert_eq!(table.headers(), ["Name", "Max"]);
    Ok(())
}

// =============================================================================
// TAG COLUMNS
// =============================================================================

/// Absent tags are empty values, and an all-empty tag column is suppressed.
#[test]
fn test_tag_expansion_with_missing_key() -> anyhow::Result<()> {
    let records = vec![
        tagged("web", 1, &[("Env", "prod")]),
        tagged("api", 2, &[("Env", "dev")]),
    ];
    let opts = RenderOptions::new().with_tag("Env").with_tag("Team");

    let table = build_list(LIST_FIELDS, &records, &registry(), &opts)?;
    assert_eq!(table.column_values("Tag: Env"), Some(vec!["dev", "prod"]));
    assert_eq!(table.column_index("Tag: Team"), None);

    let table = build_list(LIST_FIELDS, &[] as &[Item], &registry(), &opts)?;
    assert!(table.column_index("Tag: Team").is_some());
    Ok(())
}

/// A tag held by only some records keeps its column with blanks for the rest.
#[test]
fn test_tag_column_blank_for_untagged_records() -> anyhow::Result<()> {
    let records = vec![tagged("web", 1, &[("Team", "core")]), group("api", 2)];
    let opts = RenderOptions::new().with_tag("Team");
    let table = build_list(LIST_FIELDS, &records, &registry(), &opts)?;
    assert_eq!(table.column_values("Tag: Team"), Some(vec!["", "core"]));
    Ok(())
}

// =============================================================================
// SORTING
// =============================================================================

/// Numeric values sort by value, not lexically.
#[test]
fn test_numeric_sort_orders_by_value() -> anyhow::Result<()> {
    let records = vec![group("a", 1), group("b", 16), group("c", 2)];
    let fields = ColumnSelection::new().sort_by("Max").apply(LIST_FIELDS);
    let table = build_list(&fields, &records, &registry(), &RenderOptions::new())?;

    assert_eq!(table.column_values("Max"), Some(vec!["1", "2", "16"]));
    let key = table.sort.expect("sort key");
    assert_eq!(key.field, "Max");
    assert_eq!(key.direction, SortDirection::Ascending);
    Ok(())
}

/// Reverse yields exactly the reversed row order.
#[test]
fn test_reverse_is_exact_reverse() -> anyhow::Result<()> {
    let records = vec![
        group("web", 3),
        group("api", 3),
        group("batch", 1),
        group("cron", 3),
    ];
    let fields = ColumnSelection::new().sort_by("max").apply(LIST_FIELDS);

    let forward = build_list(&fields, &records, &registry(), &RenderOptions::new())?;
    let backward = build_list(
        &fields,
        &records,
        &registry(),
        &RenderOptions::new().reversed(true),
    )?;

    let mut expected = forward.rows.clone();
    expected.reverse();
    assert_eq!(backward.rows, expected);
    Ok(())
}

/// Adjacent rows respect the resolved key and direction.
#[test]
fn test_rows_are_ordered_by_resolved_key() -> anyhow::Result<()> {
    let records = vec![
        group("web-10", 1),
        group("web-2", 1),
        group("Web-1", 1),
        group("api", 1),
    ];
    for reverse in [false, true] {
        let opts = RenderOptions::new().reversed(reverse);
        let table = build_list(LIST_FIELDS, &records, &registry(), &opts)?;
        let names = table.column_values("Name").expect("name column");
        for pair in names.windows(2) {
            let ordering = compare_natural(pair[0], pair[1]);
            if reverse {
                assert_ne!(ordering, Ordering::Less, "{pair:?}");
            } else {
                assert_ne!(ordering, Ordering::Greater, "{pair:?}");
            }
        }
    }
    Ok(())
}

/// With no explicit request the default-sort field orders the rows.
#[test]
fn test_default_sort_field_applies() -> anyhow::Result<()> {
    let records = vec![group("web", 1), group("api", 2)];
    let table = build_list(LIST_FIELDS, &records, &registry(), &RenderOptions::new())?;
    assert_eq!(table.column_values("Name"), Some(vec!["api", "web"]));
    Ok(())
}

/// A hidden field can still drive the ordering.
#[test]
fn test_sort_by_hidden_field() -> anyhow::Result<()> {
    let records = vec![group("a", 16), group("b", 2), group("c", 1)];
    let fields = ColumnSelection::new()
        .hide("Max")
        .sort_by("Max")
        .apply(LIST_FIELDS);
    let table = build_list(&fields, &records, &registry(), &RenderOptions::new())?;
    assert_eq!(table.column_values("Name"), Some(vec!["c", "b", "a"]));
    Ok(())
}

// =============================================================================
// ERRORS
// =============================================================================

/// A field with no getter becomes an inline marker; other cells still render.
#[test]
fn test_missing_getter_renders_error_marker() -> anyhow::Result<()> {
    let fields = [Field::new("", "Name"), Field::new("", "Desired")];
    let table = build_list(&fields, &[group("web", 1)], &registry(), &RenderOptions::new())?;

    assert_eq!(
        table.rows,
        vec![vec![
            "web".to_string(),
            "[error: field 'Desired' not found for kind 'group']".to_string(),
        ]]
    );
    Ok(())
}

/// Registry with no `Max` value for the group named `lost`.
struct MissingMaxForLost(Registry<Item>);

impl AttributeResolver<Item> for MissingMaxForLost {
    fn resolve(&self, field: &str, record: &Item) -> asc_table::Result<String> {
        if field == "Max" && self.0.resolve("Name", record)? == "lost" {
            return Err(Error::field_not_found(field, "group"));
        }
        self.0.resolve(field, record)
    }

    fn tags(&self, record: &Item) -> asc_table::Result<Vec<Tag>> {
        self.0.tags(record)
    }
}

/// An unresolvable sort value orders the same whether or not its column is shown.
#[test]
fn test_unresolved_sort_value_orders_alike_visible_or_hidden() -> anyhow::Result<()> {
    let records = vec![group("a", 16), group("lost", 1), group("c", 2)];
    let resolver = MissingMaxForLost(registry());

    let visible = ColumnSelection::new().sort_by("Max").apply(LIST_FIELDS);
    let shown = build_list(&visible, &records, &resolver, &RenderOptions::new())?;
    assert_eq!(shown.column_values("Name"), Some(vec!["c", "a", "lost"]));
    assert!(shown.column_values("Max").unwrap()[2].starts_with("[error:"));

    let hidden = ColumnSelection::new()
        .hide("Max")
        .sort_by("Max")
        .apply(LIST_FIELDS);
    let unshown = build_list(&hidden, &records, &resolver, &RenderOptions::new())?;
    assert_eq!(unshown.column_values("Name"), shown.column_values("Name"));
    Ok(())
}

#[test]
fn test_empty_schema_is_rejected() {
    let err = build_list(&[], &[group("web", 1)], &registry(), &RenderOptions::new()).unwrap_err();
    assert_eq!(err, Error::NoFieldsDefined);
}

#[test]
fn test_all_hidden_schema_is_rejected() {
    let fields = [Field::new("", "Name").hidden()];
    let err = build_list(&fields, &[group("web", 1)], &registry(), &RenderOptions::new()).unwrap_err();
    assert_eq!(err, Error::NoHeadersDefined);
}

/// An unregistered kind aborts the whole render.
#[test]
fn test_unknown_kind_is_fatal() {
    let records = vec![group("web", 1), Item::Orphan];
    let err = render_list(LIST_FIELDS, &records, &registry(), &RenderOptions::new()).unwrap_err();
    assert_eq!(err, Error::unknown_kind("orphan"));
}

// =============================================================================
// TEXT OUTPUT
// =============================================================================

/// Identical inputs give byte-identical output.
#[test]
fn test_rendering_is_idempotent() -> anyhow::Result<()> {
    let records = vec![tagged("web", 16, &[("Env", "prod")]), group("api", 2)];
    let opts = RenderOptions::new().with_tag("Env").with_title("Groups");

    let first = render_list(LIST_FIELDS, &records, &registry(), &opts)?;
    let second = render_list(LIST_FIELDS, &records, &registry(), &opts)?;
    assert_eq!(first, second);
    assert!(first.starts_with("Groups\n"));
    assert!(first.ends_with('\n'));
    Ok(())
}

/// Plain style has no borders and upper-cases headers.
#[test]
fn test_plain_style_output() -> anyhow::Result<()> {
    let opts = RenderOptions::new().with_mode(OutputMode::List);
    let text = render_list(LIST_FIELDS, &[group("web", 1)], &registry(), &opts)?;

    assert!(text.contains("NAME"));
    assert!(text.contains("web"));
    assert!(!text.contains('│'));
    Ok(())
}

/// Merged columns blank repeats and pick the separated style.
#[test]
fn test_merge_column_blanks_repeats() -> anyhow::Result<()> {
    let fields = [Field::new("", "Name").merged().default_sort(), Field::new("", "Max")];
    let records = vec![group("web", 1), group("api", 3), group("web", 2)];

    let table = build_list(&fields, &records, &registry(), &RenderOptions::new())?;
    assert!(table.is_grouped());
    assert_eq!(table.column_values("Name"), Some(vec!["api", "web", "web"]));

    let plain = render_list(
        &fields,
        &records,
        &registry(),
        &RenderOptions::new().with_style(TableStyle::Plain),
    )?;
    assert_eq!(plain.matches("web").count(), 1);

    let grouped = render_list(&fields, &records, &registry(), &RenderOptions::new())?;
    let rounded = render_list(
        &fields,
        &records,
        &registry(),
        &RenderOptions::new().with_style(TableStyle::Rounded),
    )?;
    assert!(grouped.lines().count() > rounded.lines().count());
    Ok(())
}

/// Status values carry color only when color is enabled.
#[test]
fn test_status_color_follows_option() -> anyhow::Result<()> {
    let records = vec![group("web", 1)];
    let plain = render_list(LIST_FIELDS, &records, &registry(), &RenderOptions::new())?;
    assert!(!plain.contains('\u{1b}'));

    let colored = render_list(
        LIST_FIELDS,
        &records,
        &registry(),
        &RenderOptions::new().with_color(true),
    )?;
    assert!(colored.contains('\u{1b}'));
    Ok(())
}
