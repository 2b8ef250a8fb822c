//! Bindings exposing the painting session to a browser-hosted UI layer.
//!
//! The page owns the shapes and gesture recognizers; it forwards tap and
//! long-press events here by region index and reads back
//! [`colors`](WasmPainting::colors) and [`is_solved`](WasmPainting::is_solved)
//! to redraw and to enable its "next" button.

use itertools::Itertools;
use js_sys::{Error, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::painting::Painting;
use crate::region::Region;
use crate::validator::CheckFailure;

fn as_js_error(failure: CheckFailure) -> JsValue {
    Error::new(&format!("{:?}", failure)).into()
}

/// The nine-region painting session, driven by tap and long-press events
/// from the host page.
#[wasm_bindgen]
pub struct WasmPainting {
    inner: Painting,
}

#[wasm_bindgen]
impl WasmPainting {
    /// Start a blank session on the nine-region map with the four-color
    /// palette.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Painting::pinwheel() }
    }

    /// Cycle the color of the tapped region.
    pub fn tap(&mut self, region: usize) -> Result<(), JsValue> {
        self.inner.tap(Region(region)).map_err(as_js_error)
    }

    /// Clear the long-pressed region.
    #[wasm_bindgen(js_name = longPress)]
    pub fn long_press(&mut self, region: usize) -> Result<(), JsValue> {
        self.inner.long_press(Region(region)).map_err(as_js_error)
    }

    /// Wipe the coloring.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Whether the proceed affordance should be enabled.
    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }

    /// The decision button: `true` means move on, `false` means the coloring
    /// was wiped for another try.
    pub fn confirm(&mut self) -> bool {
        self.inner.confirm()
    }

    /// The current color of every region, in region-index order.
    pub fn colors(&self) -> Uint32Array {
        Uint32Array::from(
            self.inner.coloring().colors().iter().map(|color| *color as u32).collect_vec().as_slice()
        )
    }

    /// One display character per region.
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}

impl Default for WasmPainting {
    fn default() -> Self {
        Self::new()
    }
}
