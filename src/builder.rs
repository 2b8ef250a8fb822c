use std::collections::HashSet;
use std::num::NonZero;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::map::Map;
use crate::region::{Region, RegionCount};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A border named a region outside the bounds given to
    /// [`with_regions`](MapBuilder::with_regions).
    BorderOutOfBounds,
    /// A border joined a region to itself; the border relation is
    /// irreflexive.
    BorderSelfLoop,
}

/// A builder for [`Map`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point. Once a call leaves the builder in an invalid
/// state, later calls do nothing; [`build`](Self::build) reports every
/// reason collected.
#[derive(Clone)]
pub struct MapBuilder {
    regions: RegionCount,
    borders: HashSet<UnorderedPair<Region>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::with_regions(NonZero::new(9).unwrap())
    }
}

impl MapBuilder {
    /// Construct a new builder for a map of `regions` regions with no
    /// borders declared yet.
    pub fn with_regions(regions: RegionCount) -> Self {
        Self {
            regions,
            borders: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Declare that the two `regions` share a border. The order of the pair
    /// does not matter, and declaring the same border twice has no further
    /// effect.
    ///
    /// May cause the builder to enter a
    /// [`BorderOutOfBounds`](BuilderInvalidReason::BorderOutOfBounds) invalid
    /// state if either region is out of bounds, or a
    /// [`BorderSelfLoop`](BuilderInvalidReason::BorderSelfLoop) invalid state
    /// if both regions are the same.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_border(&mut self, regions: UnorderedPair<Region>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for region in [regions.0, regions.1] {
            if region.as_index() >= self.regions.get() {
                self.invalid_reasons.push(BuilderInvalidReason::BorderOutOfBounds);
                return self;
            }
        }

        if regions.0 == regions.1 {
            self.invalid_reasons.push(BuilderInvalidReason::BorderSelfLoop);
            return self;
        }

        self.borders.insert(regions);
        self
    }

    /// Shorthand for multiple calls to [`Self::add_border`], with the same
    /// conditions.
    ///
    /// Declares a border between `region` and each entry of `neighbors`.
    pub fn add_borders(&mut self, region: Region, neighbors: Vec<Region>) -> &mut Self {
        for neighbor in neighbors {
            self.add_border(UnorderedPair::from((region, neighbor)));
        }

        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Map`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Map, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut graph = UnGraphMap::with_capacity(self.regions.get(), self.borders.len());

        // every region is a vertex, bordered or not
        for index in 0..self.regions.get() {
            graph.add_node(Region(index));
        }

        for UnorderedPair(a, b) in self.borders.iter() {
            graph.add_edge(*a, *b, ());
        }

        Ok(Map {
            graph,
            regions: self.regions,
        })
    }
}
