//! Path data produced by routing computations.
//!
//! A [`Path`] records one message's walk through every stage of the
//! network; a [`RoutingTable`] collects the paths from one source to all
//! destinations. Both are plain values with no reference back to the
//! network that produced them.

/// One switch traversal: entering a stage at `from`, leaving at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    /// Stage index, counted from the input side.
    pub stage: u32,
    /// Position entering the stage.
    pub from: u64,
    /// Position after the stage's switch.
    pub to: u64,
}

impl std::fmt::Display for PathStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stage {}: {} -> {}", self.stage, self.from, self.to)
    }
}

/// An ordered walk from a source to a destination, one step per stage.
///
/// Always exactly `stages` steps long; empty only on the degenerate
/// single-node network, which has no stages to cross.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    source: u64,
    destination: u64,
    steps: Vec<PathStep>,
}

impl Path {
    pub(crate) fn new(source: u64, destination: u64, steps: Vec<PathStep>) -> Self {
        Self {
            source,
            destination,
            steps,
        }
    }

    /// The node this path starts from.
    #[inline]
    pub fn source(&self) -> u64 {
        self.source
    }

    /// The node this path routes to.
    #[inline]
    pub fn destination(&self) -> u64 {
        self.destination
    }

    /// The switch traversals, stage 0 first.
    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of stages crossed.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True only on a single-node network.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Position occupied after the last stage.
    ///
    /// Equals the destination whenever at least one stage exists; with zero
    /// stages the message never moves, so this is the source.
    pub fn terminal(&self) -> u64 {
        self.steps.last().map_or(self.source, |step| step.to)
    }
}

/// Paths from one fixed source to every destination in the network.
///
/// Stored dense: entry `d` is the path to destination `d`, so a table
/// always holds exactly as many paths as the network has nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingTable {
    source: u64,
    paths: Vec<Path>,
}

impl RoutingTable {
    pub(crate) fn new(source: u64, paths: Vec<Path>) -> Self {
        Self { source, paths }
    }

    /// The source all paths start from.
    #[inline]
    pub fn source(&self) -> u64 {
        self.source
    }

    /// The path to `destination`, or `None` outside the network.
    pub fn get(&self, destination: u64) -> Option<&Path> {
        usize::try_from(destination)
            .ok()
            .and_then(|d| self.paths.get(d))
    }

    /// Number of destinations covered (the network's node count).
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Never true for a table built by [`OmegaNetwork`](crate::OmegaNetwork).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate `(destination, path)` pairs in ascending destination order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(destination, path)| (destination as u64, path))
    }
}
