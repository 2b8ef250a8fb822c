#![warn(missing_docs)]

//! # `gamboge`
//!
//! A proper-coloring checker and interactive painting session for the
//! tap-to-paint map puzzles used to teach the four-color theorem.
//! Begin by building a map object with a [`MapBuilder`], or take a built-in
//! map such as [`Map::pinwheel`]. Hold the per-session state in a
//! [`Painting`] and feed it tap and long-press events; the session re-judges
//! itself after every mutation, so the hosting UI can enable its "next"
//! affordance the moment the coloring becomes proper.
//!
//! # Internals
//! A map is an undirected graph. A vertex corresponds to one paintable
//! region and edges encode shared borders; a coloring assigns every vertex
//! an integer token, with 0 reserved for "unpainted". Judging a coloring is
//! a pure conjunction over that graph (no vertex holds 0 and no edge joins
//! two equal tokens), so the [`ColoringChecker`] borrows the graph, carries
//! no state of its own, and short-circuits on the first witness against
//! either condition.
//!
//! Four paints are enough for any planar map; the built-in
//! [`pinwheel`](Map::pinwheel) map is small enough to discover that by hand,
//! which is the point of the exercise.

pub use builder::{BuilderInvalidReason, MapBuilder};
pub use color::{ColorID, FourColor, Palette};
pub use coloring::Coloring;
pub use map::Map;
pub use painting::Painting;
pub use region::{Region, RegionCount};
pub use validator::{CheckFailure, ColoringChecker, Verdict};

pub(crate) mod map;
mod tests;
pub(crate) mod color;
pub(crate) mod coloring;
pub(crate) mod region;
pub(crate) mod validator;
pub(crate) mod painting;
pub(crate) mod builder;
#[cfg(feature = "wasm")]
pub mod wasm;
