//! Omega Network Visualization
//!
//! Human-readable and JSON rendering of routing paths and tables, plus the
//! `omega-vis` demonstration binary.
//!
//! Everything here is presentation: the renderers consume values from
//! [`omega_topology`] and produce text, with no influence on how paths are
//! computed.

mod render;

pub use render::{path_summary, render_all_pairs, render_path, render_table, table_to_json};
