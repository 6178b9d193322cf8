//! Omega network model and shuffle-exchange routing.
//!
//! Between stages the wiring is the perfect shuffle: a position's k-bit
//! address rotates left by one, sending `p` to `2p` in the lower half of
//! the address space and to `2p + 1 - N` in the upper half. Each 2x2
//! switch then either passes straight or crosses, which pins the shuffled
//! address's low bit to the destination bit owned by that stage.

use crate::{Error, Path, PathStep, Result, RoutingTable, SWITCH_FAN_IN};

/// An Omega multistage interconnection network.
///
/// Holds the node count N (a positive power of two) and the derived stage
/// count log2(N). Immutable after construction; every routing operation is
/// a pure function of the network size and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmegaNetwork {
    nodes: u64,
    stages: u32,
}

impl OmegaNetwork {
    /// Build a network over `nodes` endpoints.
    ///
    /// Fails with [`Error::InvalidTopology`] unless `nodes` is a positive
    /// power of two. The single-node network (`nodes == 1`) is legal and
    /// degenerate: it has zero stages, and its only path is empty.
    pub fn new(nodes: u64) -> Result<Self> {
        if nodes == 0 || nodes & (nodes - 1) != 0 {
            return Err(Error::InvalidTopology { nodes });
        }
        Ok(Self {
            nodes,
            stages: nodes.trailing_zeros(),
        })
    }

    /// Number of endpoints (N).
    #[inline]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of switching stages (log2 N).
    #[inline]
    pub const fn stages(&self) -> u32 {
        self.stages
    }

    /// Switching elements per stage (N / 2).
    #[inline]
    pub const fn switches_per_stage(&self) -> u64 {
        self.nodes / SWITCH_FAN_IN
    }

    /// Compute the path from `source` to `destination`.
    ///
    /// Produces exactly [`stages`](Self::stages) steps. Fails with
    /// [`Error::OutOfRange`] when either endpoint is outside `[0, nodes)`.
    pub fn route(&self, source: u64, destination: u64) -> Result<Path> {
        self.route_traced(source, destination, |_| {})
    }

    /// Compute a path, handing each step to `sink` as it is produced.
    ///
    /// The sink sees the same steps the returned path contains, in stage
    /// order. It exists for tracing; it has no influence on the walk.
    pub fn route_traced<F>(&self, source: u64, destination: u64, mut sink: F) -> Result<Path>
    where
        F: FnMut(PathStep),
    {
        self.check_node("source", source)?;
        self.check_node("destination", destination)?;

        let mut steps = Vec::with_capacity(self.stages as usize);
        let mut position = source;
        for stage in 0..self.stages {
            let next = self.next_position(position, destination, stage);
            let step = PathStep {
                stage,
                from: position,
                to: next,
            };
            sink(step);
            steps.push(step);
            position = next;
        }
        Ok(Path::new(source, destination, steps))
    }

    /// Build the routing table from `source` to every destination.
    ///
    /// Each entry is computed independently via [`route`](Self::route);
    /// every destination in `[0, nodes)` appears exactly once.
    pub fn routes_from(&self, source: u64) -> Result<RoutingTable> {
        self.check_node("source", source)?;

        let mut paths = Vec::with_capacity(self.nodes as usize);
        for destination in 0..self.nodes {
            paths.push(self.route(source, destination)?);
        }
        Ok(RoutingTable::new(source, paths))
    }

    /// Routing tables for every source, in ascending source order.
    ///
    /// Purely a composition of [`routes_from`](Self::routes_from) over all
    /// sources; there is no additional routing logic here.
    pub fn routes_all(&self) -> Result<Vec<RoutingTable>> {
        (0..self.nodes)
            .map(|source| self.routes_from(source))
            .collect()
    }

    /// Perfect-shuffle-exchange step: where `position` lands after `stage`.
    ///
    /// Internal to the path walk, which only ever calls it with in-range
    /// arguments.
    fn next_position(&self, position: u64, destination: u64, stage: u32) -> u64 {
        debug_assert!(position < self.nodes);
        debug_assert!(destination < self.nodes);
        debug_assert!(stage < self.stages);

        // Shuffle: rotate the k-bit address left by one.
        let shuffled = if position < self.nodes / 2 {
            2 * position
        } else {
            2 * position + 1 - self.nodes
        };

        // Destination bits are consumed most significant first, one per stage.
        let dest_bit = (destination >> (self.stages - stage - 1)) & 1;

        // Straight or cross: the switch output's parity must match the bit.
        if shuffled & 1 != dest_bit {
            shuffled ^ 1
        } else {
            shuffled
        }
    }

    fn check_node(&self, role: &'static str, node: u64) -> Result<()> {
        if node >= self.nodes {
            return Err(Error::OutOfRange {
                role,
                node,
                nodes: self.nodes,
            });
        }
        Ok(())
    }
}
