use std::num::NonZero;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::builder::MapBuilder;
use crate::coloring::Coloring;
use crate::region::{Region, RegionCount};
use crate::validator::{CheckFailure, ColoringChecker, Verdict};

/// A fixed planar map: a set of regions and the symmetric border relation
/// between them.
///
/// [`Map`]s should be built with a [`MapBuilder`](crate::builder::MapBuilder)
/// or taken from a preset such as [`pinwheel`](Self::pinwheel). Once built, a
/// map never changes; colorings come and go against it.
pub struct Map {
    pub(crate) graph: UnGraphMap<Region, ()>,
    pub(crate) regions: RegionCount,
}

impl Map {
    /// The nine-region puzzle map: four quadrant wedges (regions 0 through
    /// 3) laid over four inner wedges offset by 45 degrees (4 through 7),
    /// with a circular hub (8) in the middle.
    ///
    /// Four paints suffice for this map and three do not, which is what
    /// makes it worth handing to someone with a tap gesture.
    pub fn pinwheel() -> Self {
        let mut builder = MapBuilder::with_regions(NonZero::new(9).unwrap());
        builder
            .add_borders(Region(0), vec![Region(1), Region(3), Region(4), Region(7)])
            .add_borders(Region(1), vec![Region(2), Region(4), Region(5)])
            .add_borders(Region(2), vec![Region(3), Region(5), Region(6)])
            .add_borders(Region(3), vec![Region(6), Region(7)])
            .add_borders(Region(4), vec![Region(5), Region(7), Region(8)])
            .add_borders(Region(5), vec![Region(6), Region(8)])
            .add_borders(Region(6), vec![Region(7), Region(8)])
            .add_borders(Region(7), vec![Region(8)]);

        builder.build().unwrap()
    }

    /// The four-region map drawn on the rule cards: three 120-degree wedges
    /// (regions 0 through 2) around a circular hub (3). Every region borders
    /// every other.
    pub fn rosette() -> Self {
        let mut builder = MapBuilder::with_regions(NonZero::new(4).unwrap());
        builder
            .add_borders(Region(0), vec![Region(1), Region(2), Region(3)])
            .add_borders(Region(1), vec![Region(2), Region(3)])
            .add_borders(Region(2), vec![Region(3)]);

        builder.build().unwrap()
    }

    /// How many regions this map has.
    pub fn region_count(&self) -> usize {
        self.regions.get()
    }

    /// Number of distinct borders on this map.
    pub fn border_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The regions sharing a border with `region`, in index order.
    pub fn borders_with(&self, region: Region) -> Vec<Region> {
        self.graph.neighbors(region).sorted().collect_vec()
    }

    /// Whether `a` and `b` share a border. Always false for `a == b`.
    pub fn bordering(&self, a: Region, b: Region) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Judge `coloring` against this map, deferring to a
    /// [`ColoringChecker`](crate::validator::ColoringChecker).
    ///
    /// Returns according to the result of [`ColoringChecker::check`].
    pub fn check(&self, coloring: &Coloring) -> Result<Verdict, CheckFailure> {
        ColoringChecker::from(self).check(coloring)
    }

    /// Whether `coloring` paints every region and no border joins two equal
    /// colors.
    pub fn is_proper(&self, coloring: &Coloring) -> Result<bool, CheckFailure> {
        ColoringChecker::from(self).is_proper(coloring)
    }
}
