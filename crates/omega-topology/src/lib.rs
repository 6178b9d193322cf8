//! Omega Network Topology
//!
//! Deterministic routing through an Omega multistage interconnection
//! network: N = 2^k endpoints connected by k stages of 2x2 switching
//! elements, with perfect-shuffle wiring between stages.
//!
//! # Mathematical Foundation
//!
//! Positions are k-bit addresses. The shuffle between stages rotates an
//! address left by one bit, so over k stages every bit of the original
//! address passes through the low position. At each stage the 2x2 switch
//! either passes straight or crosses, pinning the low bit to the
//! destination bit owned by that stage (most significant bit first). After
//! all k stages the occupied address is exactly the destination.
//!
//! # Routing
//!
//! [`OmegaNetwork::route`] computes the switch-by-switch path for one
//! (source, destination) pair. [`OmegaNetwork::routes_from`] builds the
//! table of paths from one source to every destination. Both are pure
//! functions of the network size and the endpoints: no state evolves
//! between calls, and a network value can be shared freely across threads.

mod error;
mod network;
mod path;

pub use error::{Error, Result};
pub use network::OmegaNetwork;
pub use path::{Path, PathStep, RoutingTable};

/// Input ports per switching element.
pub const SWITCH_FAN_IN: u64 = 2;

/// Output ports per switching element.
pub const SWITCH_FAN_OUT: u64 = 2;

// A stage permutes the position space onto itself, which requires square
// switching elements.
const _: () = assert!(SWITCH_FAN_IN == SWITCH_FAN_OUT);
