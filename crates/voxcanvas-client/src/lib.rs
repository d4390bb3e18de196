//! Browser glue for the collaborative voxel canvas. The engine runs in
//! wasm and hands mesh buffers to the page's renderer; rendering, camera,
//! and input decoding stay on the JS side.

mod app;
mod transport;

pub use app::CanvasApp;

use wasm_bindgen::prelude::*;
use voxcanvas_core::config::WorldConfig;

/// WASM entry point. Sets the panic hook and initializes logging; world
/// setup happens in [`connect`] once the page asks for a canvas.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger init failed");
    log::info!("voxcanvas client starting...");
}

/// Load a canvas by name: fetch the full snapshot, build the world and its
/// initial meshes, and attach the live update stream. The returned app is
/// not handed to the page until the snapshot has decoded completely, so
/// the renderer never sees a partially loaded world.
#[wasm_bindgen]
pub async fn connect(canvas: String) -> Result<CanvasApp, JsValue> {
    let cfg = WorldConfig::default();

    let bytes = transport::fetch_snapshot(&canvas)
        .await
        .map_err(to_js_error)?;
    let world = voxcanvas_world::World::from_snapshot(cfg, &bytes).map_err(to_js_error)?;

    let app = CanvasApp::new(canvas.clone(), world);
    transport::connect_stream(&canvas, app.shared_world()).map_err(to_js_error)?;

    log::info!("canvas '{canvas}' ready");
    Ok(app)
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    let msg = format!("voxcanvas: {e}");
    log::error!("{msg}");
    JsValue::from_str(&msg)
}
