use crate::color::ColorID;
use crate::region::Region;
use crate::validator::CheckFailure;

/// An assignment of one [`ColorID`] to every region of a map, mutated in
/// place over the course of a session.
///
/// A coloring carries no knowledge of the map it is painted on; it is judged
/// against a [`Map`](crate::Map) of matching size by a
/// [`ColoringChecker`](crate::ColoringChecker).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coloring {
    colors: Vec<ColorID>,
}

impl Coloring {
    /// An all-unpainted coloring covering `len` regions.
    pub fn blank(len: usize) -> Self {
        Self { colors: vec![0; len] }
    }

    /// Adopt an explicit assignment, one entry per region index.
    pub fn from_colors(colors: Vec<ColorID>) -> Self {
        Self { colors }
    }

    /// Number of regions this coloring covers.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether this coloring covers no regions.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Every entry, in region-index order.
    pub fn colors(&self) -> &[ColorID] {
        &self.colors
    }

    /// The color currently held by `region`.
    pub fn get(&self, region: Region) -> Result<ColorID, CheckFailure> {
        self.colors
            .get(region.as_index())
            .copied()
            .ok_or(CheckFailure::RegionOutOfBounds { region, region_count: self.colors.len() })
    }

    /// Assign `color` to `region`.
    pub fn paint(&mut self, region: Region, color: ColorID) -> Result<(), CheckFailure> {
        let region_count = self.colors.len();
        match self.colors.get_mut(region.as_index()) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(CheckFailure::RegionOutOfBounds { region, region_count }),
        }
    }

    /// Return `region` to the unpainted state.
    pub fn clear(&mut self, region: Region) -> Result<(), CheckFailure> {
        self.paint(region, 0)
    }

    /// Return every region to the unpainted state, preserving length.
    pub fn reset(&mut self) {
        self.colors.fill(0);
    }
}
