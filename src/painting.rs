use std::convert::identity;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::color::Palette;
use crate::coloring::Coloring;
use crate::map::Map;
use crate::region::Region;
use crate::validator::CheckFailure;

/// One interactive run at painting a [`Map`].
///
/// A painting owns the session's [`Coloring`] and re-judges it after every
/// mutation, so the hosting UI can read [`is_solved`](Self::is_solved) at
/// any time to drive its proceed affordance. All methods are synchronous;
/// gesture detection, rendering, and whatever follows
/// [`confirm`](Self::confirm) belong to the host.
pub struct Painting {
    map: Map,
    palette: Palette,
    coloring: Coloring,
    solved: bool,
}

impl Painting {
    /// Start a blank painting of `map` using `palette`.
    pub fn new(map: Map, palette: Palette) -> Self {
        let coloring = Coloring::blank(map.region_count());

        Self {
            map,
            palette,
            coloring,
            solved: false,
        }
    }

    /// The puzzle as posed: the nine-region [`pinwheel`](Map::pinwheel)
    /// under the [`four-color`](Palette::four_color) palette.
    pub fn pinwheel() -> Self {
        Self::new(Map::pinwheel(), Palette::four_color())
    }

    /// The map being painted.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// The palette colors are drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current state of the coloring.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Step `region` to the next color in the palette, wrapping back through
    /// unpainted, then re-judge the coloring.
    pub fn tap(&mut self, region: Region) -> Result<(), CheckFailure> {
        let next = self.palette.advance(self.coloring.get(region)?);
        self.coloring.paint(region, next)?;
        self.recheck();

        Ok(())
    }

    /// Return `region` to the unpainted state, then re-judge the coloring.
    pub fn long_press(&mut self, region: Region) -> Result<(), CheckFailure> {
        self.coloring.clear(region)?;
        self.recheck();

        Ok(())
    }

    /// Wipe the whole coloring back to unpainted.
    pub fn reset(&mut self) {
        self.coloring.reset();
        self.solved = false;
    }

    /// Whether the coloring was proper as of the latest mutation.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The single decision button: returns `true` if the painting is solved
    /// and the host should move on, otherwise wipes the coloring and returns
    /// `false`.
    pub fn confirm(&mut self) -> bool {
        if self.solved {
            return true;
        }

        self.reset();
        false
    }

    fn recheck(&mut self) {
        // the session coloring always matches its map, so the size gate cannot fail
        self.solved = self.map.is_proper(&self.coloring).is_ok_and(identity);
    }
}

impl Display for Painting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coloring.colors().iter().map(|color| self.palette.display(*color)).join(""))
    }
}
