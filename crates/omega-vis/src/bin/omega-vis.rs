//! Omega Network Routing Demonstrator
//!
//! Compute and print routing paths for a small network.

use omega_topology::OmegaNetwork;
use omega_vis::{render_all_pairs, render_path, render_table, table_to_json};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let nodes: u64 = args.get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    let source: u64 = args.get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let destination: u64 = args.get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2);

    let json = args.iter().any(|a| a == "--json");

    println!("Omega Network Router");
    println!("====================");
    println!();

    let network = OmegaNetwork::new(nodes)?;
    println!(
        "Network: {} nodes, {} stages, {} switches per stage",
        network.nodes(),
        network.stages(),
        network.switches_per_stage()
    );
    println!();

    // One pair, tracing each switch setting as it is chosen.
    let path = network.route_traced(source, destination, |step| {
        tracing::debug!(stage = step.stage, from = step.from, to = step.to, "switch");
    })?;
    print!("{}", render_path(&path));
    println!();

    // Every destination reachable from the source.
    let table = network.routes_from(source)?;
    if json {
        println!("{}", table_to_json(&table)?);
    } else {
        print!("{}", render_table(&table));
    }
    println!();

    // Full pairwise listing.
    let tables = network.routes_all()?;
    print!("{}", render_all_pairs(&tables));

    Ok(())
}
