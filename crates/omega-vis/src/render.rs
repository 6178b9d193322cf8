//! Text and JSON rendering of routing results.

use omega_topology::{Path, RoutingTable};

/// Render one path, one line per stage.
pub fn render_path(path: &Path) -> String {
    let mut out = format!("path {} -> {}\n", path.source(), path.destination());
    for step in path.steps() {
        out.push_str(&format!(
            "  stage {}: [node {}] -> [node {}]\n",
            step.stage, step.from, step.to
        ));
    }
    out
}

/// Compact single-line form: the positions a path visits, in order.
pub fn path_summary(path: &Path) -> String {
    let mut out = path.source().to_string();
    for step in path.steps() {
        out.push_str(&format!(" -> {}", step.to));
    }
    out
}

/// Render every path in a table, ascending destination.
pub fn render_table(table: &RoutingTable) -> String {
    let mut out = format!("routes from node {}\n", table.source());
    for (destination, path) in table.iter() {
        out.push_str(&format!("  to {}: {}\n", destination, path_summary(path)));
    }
    out
}

/// Render the full pairwise listing, one line per (source, destination).
pub fn render_all_pairs(tables: &[RoutingTable]) -> String {
    let mut out = String::from("pairwise routes\n");
    for table in tables {
        for (destination, path) in table.iter() {
            out.push_str(&format!(
                "  {} -> {}: {}\n",
                table.source(),
                destination,
                path_summary(path)
            ));
        }
    }
    out
}

/// Serialize a routing table to pretty-printed JSON.
pub fn table_to_json(table: &RoutingTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
