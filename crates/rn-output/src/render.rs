//! Plain-text reports for terminal output.
//!
//! Each function returns a `String`; the caller decides where it goes.

use std::collections::BTreeMap;

use rn_core::CostMatrix;
use rn_mst::SpanningForest;

const RULE_WIDTH: usize = 70;

fn rule(c: &str) -> String {
    c.repeat(RULE_WIDTH)
}

/// Fixed-width table of accepted edges, total cost and edge count.
pub fn render_mst_table(matrix: &CostMatrix, forest: &SpanningForest) -> String {
    let mut out = String::new();
    out.push_str("Minimum Spanning Tree (MST) Edges:\n");
    out.push_str(&rule("="));
    out.push('\n');
    out.push_str(&format!("{:<25} {:<25} {:>15}\n", "City 1", "City 2", "Cost"));
    out.push_str(&rule("-"));
    out.push('\n');
    for e in forest.edges() {
        out.push_str(&format!(
            "{:<25} {:<25} {:>15.2}\n",
            matrix.name(e.a),
            matrix.name(e.b),
            e.cost
        ));
    }
    out.push_str(&rule("-"));
    out.push('\n');
    out.push_str(&format!("{:<50} {:>15.2}\n", "Total MST Cost:", forest.total_cost()));
    out.push_str(&format!("{:<50} {:>15}\n", "Number of edges:", forest.edge_count()));
    out.push_str(&rule("="));
    out.push('\n');
    out
}

/// Adjacency view of the tree: locations sorted by name, each followed by
/// its tree neighbours sorted by name.  Locations without edges are
/// omitted.
pub fn render_connection_summary(matrix: &CostMatrix, forest: &SpanningForest) -> String {
    let mut adjacency: BTreeMap<&str, Vec<(&str, f64)>> = BTreeMap::new();
    for e in forest.edges() {
        let (a, b) = (matrix.name(e.a), matrix.name(e.b));
        adjacency.entry(a).or_default().push((b, e.cost));
        adjacency.entry(b).or_default().push((a, e.cost));
    }

    let mut out = String::new();
    out.push_str("MST Connection Summary:\n");
    out.push_str(&rule("="));
    out.push('\n');
    for (name, mut neighbours) in adjacency {
        neighbours.sort_by(|x, y| x.0.cmp(y.0).then(x.1.total_cmp(&y.1)));
        out.push_str(&format!("\n{name}:\n"));
        for (other, cost) in neighbours {
            out.push_str(&format!("  └─ {other} (cost: {cost:.2})\n"));
        }
    }
    out.push_str(&rule("="));
    out.push('\n');
    out
}

/// Component listing for a disconnected network, `None` when the forest is
/// a single tree.
pub fn render_disconnected(matrix: &CostMatrix, forest: &SpanningForest) -> Option<String> {
    let groups = forest.disconnected_components()?;
    let mut out = format!(
        "WARNING: MST is incomplete! Only {} edges found, need {}\n",
        forest.edge_count(),
        forest.required_edges()
    );
    out.push_str(&format!("Number of disconnected components: {}\n", groups.len()));
    for (k, group) in groups.iter().enumerate() {
        let names: Vec<&str> = group.iter().map(|&id| matrix.name(id)).collect();
        out.push_str(&format!("Component {}: {}\n", k + 1, names.join(", ")));
    }
    Some(out)
}
