use itertools::Itertools;
use strum::VariantArray;

/// A color token held by one region.
///
/// 0 is reserved to mean "unpainted"; nonzero values denote distinct paints.
pub type ColorID = usize;

/// The four paints of the built-in palette, in tap-cycle order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum FourColor {
    /// Shown as `g`.
    Green,
    /// Shown as `b`.
    Blue,
    /// Shown as `o`.
    Orange,
    /// Shown as `r`.
    Red,
}

impl FourColor {
    pub(crate) fn display(&self) -> char {
        match self {
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Orange => 'o',
            Self::Red => 'r',
        }
    }
}

/// An ordered set of paints, preceded by the reserved unpainted slot at
/// [`ColorID`] 0.
///
/// Tapping a region steps its color through the palette with
/// [`advance`](Self::advance), wrapping back through unpainted after the
/// last paint.
#[derive(Clone)]
pub struct Palette {
    displays: Vec<char>,
}

impl Palette {
    /// Construct a palette from one display character per paint.
    pub fn new(paints: Vec<char>) -> Self {
        let mut displays = Vec::with_capacity(paints.len() + 1);
        // color 0 is unpainted and will display as empty
        displays.push('.');
        displays.extend(paints);

        Self { displays }
    }

    /// The palette the painting puzzle is posed with: green, blue, orange, red.
    pub fn four_color() -> Self {
        Self::new(FourColor::VARIANTS.iter().map(FourColor::display).collect_vec())
    }

    /// Number of states a region can cycle through, counting unpainted.
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Whether this palette offers no paints at all.
    pub fn is_empty(&self) -> bool {
        self.displays.len() == 1
    }

    /// The color after `color` in tap order.
    ///
    /// The result is always in `0..self.len()`; advancing [`len`](Self::len)
    /// times returns to the starting color.
    pub fn advance(&self, color: ColorID) -> ColorID {
        (color + 1) % self.displays.len()
    }

    /// The display character for `color`, or `'?'` for colors this palette
    /// cannot show.
    pub fn display(&self, color: ColorID) -> char {
        self.displays.get(color).copied().unwrap_or('?')
    }
}
