//! Bloom Garden core crate.
//!
//! A decorative canvas animation: after a single click, a row of flowers grows
//! out of the ground while hearts and butterflies drift up from the bottom edge
//! and fade away. The animation model ([`garden`]) is plain Rust driven through
//! the [`paint::Painter`] trait, so it runs and tests on the host; the browser
//! binding lives in the `web` module and is reached through [`start_garden`].

use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod garden;
pub mod paint;
mod web;

pub use config::GardenConfig;
pub use error::GardenError;
pub use garden::{
    Butterfly, Flower, Garden, GrowthPhase, Heart, RunState, SpawnStats, Viewport,
};
pub use paint::{CommandRecorder, DrawCommand, Painter};
pub use web::is_garden_running;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Bind to `#mainCanvas` and `#openButton` and wait for the click.
#[wasm_bindgen]
pub fn start_garden() -> Result<(), JsValue> {
    web::mount(GardenConfig::default())?;
    Ok(())
}

/// Like [`start_garden`] with a JSON [`GardenConfig`], e.g.
/// `{"canvas_id": "garden", "seed": 7, "log_level": "debug"}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_garden_with_config(json: &str) -> Result<(), JsValue> {
    let config = GardenConfig::from_json(json)?;
    web::mount(config)?;
    Ok(())
}
