//! Describe documents decoded and rendered through the shared resolver.

use asc_resources::{parse_resources, resolver, Kind, Resource};
use asc_table::{
    build_detail, build_list, render_detail, render_list, ColumnSelection, Layout, OutputMode,
    RenderOptions, TableStyle,
};

fn fixture(kind: Kind, name: &str) -> Vec<Resource> {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path).unwrap();
    parse_resources(kind, &text).unwrap()
}

fn find<'a>(records: &'a [Resource], id: &str) -> &'a Resource {
    records.iter().find(|r| r.matches(id)).unwrap()
}

// =============================================================================
// SCHEMA COVERAGE
// =============================================================================

/// Every non-header field of every schema resolves through the registry.
#[test]
fn test_every_kind_is_registered_with_complete_getters() {
    let registry = resolver();
    for kind in Kind::ALL {
        assert!(registry.contains(kind), "{kind}");
        let table = registry.table(kind).unwrap();
        for field in kind.list_fields().iter().chain(kind.detail_fields()) {
            if field.section_header || field.is_tags() {
                continue;
            }
            assert!(table.has_field(field.name), "{kind}: {}", field.name);
        }
    }
}

/// Each list schema has exactly one usable sort fallback.
#[test]
fn test_list_schemas_have_at_most_one_default_sort() {
    for kind in Kind::ALL {
        let defaults = kind.list_fields().iter().filter(|f| f.default_sort).count();
        assert!(defaults <= 1, "{kind} has {defaults} default sort fields");
    }
}

// =============================================================================
// AUTO SCALING
// =============================================================================

/// Groups sort by name and unset columns drop out.
#[test]
fn test_group_list() -> anyhow::Result<()> {
    let records = fixture(Kind::AutoScalingGroup, "auto_scaling_groups.json");
    let fields = Kind::AutoScalingGroup.list_fields();
    let table = build_list(fields, &records, resolver(), &RenderOptions::new())?;

    assert_eq!(table.headers(), ["Name", "Instances", "Desired", "Min", "Max"]);
    assert_eq!(table.column_values("Name"), Some(vec!["batch", "web"]));
    assert_eq!(table.column_values("Instances"), Some(vec!["0", "2"]));
    assert_eq!(table.column_values("Max"), Some(vec!["2", "16"]));
    Ok(())
}

/// Instances come out of their groups carrying the group name.
#[test]
fn test_group_instances_are_flattened() -> anyhow::Result<()> {
    let records = fixture(Kind::AsgInstance, "auto_scaling_groups.json");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.group_name() == Some("web")));

    let fields = ColumnSelection::new()
        .show("Auto Scaling Group")
        .apply(Kind::AsgInstance.list_fields());
    let table = build_list(&fields, &records, resolver(), &RenderOptions::new())?;
    assert_eq!(table.column_values("Name"), Some(vec!["i-0a1", "i-0b2"]));
    assert_eq!(table.column_values("Auto Scaling Group"), Some(vec!["web", "web"]));
    assert_eq!(table.column_values("State"), Some(vec!["Pending", "InService"]));
    Ok(())
}

/// Scheduled actions group by their Auto Scaling group.
#[test]
fn test_schedules_group_by_parent() -> anyhow::Result<()> {
    let records = fixture(Kind::ScheduledAction, "scheduled_actions.json");
    let fields = Kind::ScheduledAction.list_fields();
    let opts = RenderOptions::new().with_mode(OutputMode::Table);
    let table = build_list(fields, &records, resolver(), &opts)?;

    assert!(table.is_grouped());
    assert_eq!(
        table.column_values("Auto Scaling Group"),
        Some(vec!["batch", "web", "web"])
    );
    assert_eq!(
        table.column_values("Name"),
        Some(vec!["nightly", "scale-down", "scale-up"])
    );
    assert_eq!(table.column_index("End Time"), None);

    let text = render_list(fields, &records, resolver(), &opts)?;
    assert_eq!(text.matches("web").count(), 1);
    Ok(())
}

// =============================================================================
// VPC
// =============================================================================

/// Subnet ids sort naturally and tag columns follow the sort.
#[test]
fn test_subnets_natural_order_with_tag_column() -> anyhow::Result<()> {
    let records = fixture(Kind::Subnet, "subnets.json");
    let fields = Kind::Subnet.list_fields();
    let opts = RenderOptions::new().with_tag("Tier");
    let table = build_list(fields, &records, resolver(), &opts)?;

    assert_eq!(
        table.column_values("Subnet ID"),
        Some(vec!["subnet-1", "subnet-2", "subnet-10"])
    );
    assert_eq!(table.column_values("Name"), Some(vec!["public-a", "public-b", ""]));
    assert_eq!(table.column_values("Tag: Tier"), Some(vec!["public", "public", ""]));
    assert_eq!(
        table.column_values("Available IPs"),
        Some(vec!["2", "16", "251"])
    );

    let reversed = build_list(fields, &records, resolver(), &opts.clone().reversed(true))?;
    assert_eq!(
        reversed.column_values("Subnet ID"),
        Some(vec!["subnet-10", "subnet-2", "subnet-1"])
    );
    Ok(())
}

/// Sorting by a requested column overrides the default.
#[test]
fn test_subnets_sorted_by_requested_field() -> anyhow::Result<()> {
    let records = fixture(Kind::Subnet, "subnets.json");
    let fields = ColumnSelection::new()
        .sort_by("availability zone")
        .apply(Kind::Subnet.list_fields());
    let table = build_list(&fields, &records, resolver(), &RenderOptions::new())?;

    assert_eq!(
        table.column_values("Availability Zone"),
        Some(vec!["eu-west-1a", "eu-west-1b", "eu-west-1c"])
    );
    Ok(())
}

/// A subnet with tags gets a tag section; its flags render as labels.
#[test]
fn test_subnet_detail() -> anyhow::Result<()> {
    let records = fixture(Kind::Subnet, "subnets.json");
    let record = find(&records, "public-b");
    let opts = RenderOptions::new().with_layout(Layout::Vertical, 3);
    let table = build_detail(Kind::Subnet.detail_fields(), record, resolver(), &opts)?;

    let titles: Vec<&str> = table.titles().collect();
    assert_eq!(titles, ["Subnet Details", "Addressing", "Tags"]);
    assert_eq!(table.value_of("Auto-assign Public IPv4"), Some("Yes"));
    assert_eq!(table.value_of("Default For AZ"), Some("No"));
    assert_eq!(table.value_of("Tier"), Some("public"));
    Ok(())
}

// =============================================================================
// LOAD BALANCING
// =============================================================================

/// Detail grid joins zone lists and fills gaps with the placeholder.
#[test]
fn test_load_balancer_detail_grid() -> anyhow::Result<()> {
    let records = fixture(Kind::LoadBalancer, "load_balancers.json");
    let opts = RenderOptions::new().with_layout(Layout::Grid, 3);
    let fields = Kind::LoadBalancer.detail_fields();

    let web = build_detail(fields, find(&records, "web"), resolver(), &opts)?;
    assert_eq!(web.titles().collect::<Vec<_>>(), ["ELB Details"]);
    assert_eq!(web.value_of("Subnets"), Some("subnet-0a, subnet-0b"));
    assert_eq!(web.value_of("Created Time"), Some("2023-09-30 12:00:00 UTC"));
    assert!(web.cell_rows().all(|cells| cells.len() == 6));

    let edge = build_detail(fields, find(&records, "edge"), resolver(), &opts)?;
    assert_eq!(edge.value_of("Hosted Zone"), Some("-"));
    assert_eq!(edge.value_of("IP Type"), Some("dualstack"));
    Ok(())
}

/// The list hides DNS names by default and shows state and type.
#[test]
fn test_load_balancer_list() -> anyhow::Result<()> {
    let records = fixture(Kind::LoadBalancer, "load_balancers.json");
    let table = build_list(
        Kind::LoadBalancer.list_fields(),
        &records,
        resolver(),
        &RenderOptions::new(),
    )?;

    assert_eq!(table.column_values("Name"), Some(vec!["edge", "web"]));
    assert_eq!(table.column_values("State"), Some(vec!["provisioning", "active"]));
    assert_eq!(table.column_index("DNS Name"), None);
    Ok(())
}

// =============================================================================
// CLOUDFORMATION
// =============================================================================

/// Stacks list most recently updated first.
#[test]
fn test_stacks_sorted_by_last_update_descending() -> anyhow::Result<()> {
    let records = fixture(Kind::Stack, "stacks.json");
    let table = build_list(Kind::Stack.list_fields(), &records, resolver(), &RenderOptions::new())?;

    assert_eq!(table.headers(), ["Stack Name", "Status", "Last Updated"]);
    assert_eq!(table.column_values("Stack Name"), Some(vec!["app", "network"]));
    assert_eq!(
        table.column_values("Last Updated"),
        Some(vec!["2024-04-20 16:45:10 UTC", "2023-01-10 09:00:00 UTC"])
    );
    Ok(())
}

/// Untagged stacks have no tag section; nesting header is always present.
#[test]
fn test_stack_detail_sections() -> anyhow::Result<()> {
    let records = fixture(Kind::Stack, "stacks.json");
    let opts = RenderOptions::new().with_layout(Layout::Horizontal, 2);
    let fields = Kind::Stack.detail_fields();

    let network = build_detail(fields, find(&records, "network"), resolver(), &opts)?;
    assert_eq!(
        network.titles().collect::<Vec<_>>(),
        ["Stack Details", "Nesting", "Timeline", "Drift", "Tags"]
    );
    assert_eq!(network.value_of("Termination Protection"), Some("Enabled"));

    let app = build_detail(fields, find(&records, "app"), resolver(), &opts)?;
    assert_eq!(
        app.titles().collect::<Vec<_>>(),
        ["Stack Details", "Nesting", "Timeline", "Drift"]
    );
    assert_eq!(app.value_of("Last Drift Check"), Some("2024-04-21 08:00:00 UTC"));
    Ok(())
}

/// Rendering the same stack twice yields the same text.
#[test]
fn test_stack_detail_render_is_stable() -> anyhow::Result<()> {
    let records = fixture(Kind::Stack, "stacks.json");
    let record = find(&records, "app");
    let opts = RenderOptions::new()
        .with_title(record.detail_title())
        .with_style(TableStyle::Plain)
        .with_layout(Layout::Grid, 2);
    let fields = Kind::Stack.detail_fields();

    let first = render_detail(fields, record, resolver(), &opts)?;
    let second = render_detail(fields, record, resolver(), &opts)?;
    assert_eq!(first, second);
    assert!(first.starts_with("Stack summary for app\n"));
    assert!(first.contains("UPDATE_ROLLBACK_COMPLETE"));
    Ok(())
}
