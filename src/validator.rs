use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::coloring::Coloring;
use crate::map::Map;
use crate::region::Region;

/// Reasons a coloring cannot be judged at all.
///
/// These are programmer errors on the calling side and are surfaced
/// immediately; any coloring of the right size yields a [`Verdict`] instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CheckFailure {
    /// The coloring does not hold exactly one entry per region of the map.
    ColoringSizeMismatch {
        /// Regions on the map being judged against.
        expected: usize,
        /// Entries actually present in the coloring.
        actual: usize,
    },
    /// An operation named a region the coloring does not cover.
    RegionOutOfBounds {
        /// The offending region.
        region: Region,
        /// Regions actually covered.
        region_count: usize,
    },
}

/// The outcome of judging a coloring against a map.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Every region is painted and no border joins two equal colors.
    Proper,
    /// At least one region is still unpainted.
    Unpainted {
        /// The lowest-indexed unpainted region.
        region: Region,
    },
    /// Two bordering regions hold the same paint.
    Conflict {
        /// One offending pair; others may exist.
        regions: UnorderedPair<Region>,
    },
}

/// Judges colorings against the border graph of one [`Map`].
///
/// The checker borrows the graph and carries no other state. Judging is a
/// pure function of the coloring, so one checker may serve any number of
/// colorings of the right size.
pub struct ColoringChecker<'a> {
    graph: &'a UnGraphMap<Region, ()>,
    region_count: usize,
}

impl<'a> From<&'a Map> for ColoringChecker<'a> {
    fn from(map: &'a Map) -> Self {
        Self {
            graph: &map.graph,
            region_count: map.region_count(),
        }
    }
}

impl ColoringChecker<'_> {
    /// Judge `coloring`, returning [`Ok`] with a [`Verdict`] or [`Err`] with
    /// a [`CheckFailure`] if the coloring is not judgeable.
    ///
    /// A coloring is proper exactly when every region holds a nonzero color
    /// and every border joins two distinct colors. Both conditions are
    /// conjunctions over regions and borders respectively, so the boolean
    /// outcome is independent of traversal order; only the witness named by
    /// a non-proper verdict depends on it.
    pub fn check(&self, coloring: &Coloring) -> Result<Verdict, CheckFailure> {
        if coloring.len() != self.region_count {
            return Err(CheckFailure::ColoringSizeMismatch {
                expected: self.region_count,
                actual: coloring.len(),
            });
        }

        if let Some((index, _)) = coloring.colors().iter().find_position(|color| **color == 0) {
            return Ok(Verdict::Unpainted { region: Region(index) });
        }

        // each border appears exactly once here, in either orientation
        for (a, b, _) in self.graph.all_edges() {
            if coloring.colors()[a.as_index()] == coloring.colors()[b.as_index()] {
                return Ok(Verdict::Conflict { regions: UnorderedPair::from((a, b)) });
            }
        }

        Ok(Verdict::Proper)
    }

    /// The boolean form of [`check`](Self::check): `true` exactly for
    /// [`Verdict::Proper`].
    pub fn is_proper(&self, coloring: &Coloring) -> Result<bool, CheckFailure> {
        self.check(coloring).map(|verdict| verdict == Verdict::Proper)
    }
}
