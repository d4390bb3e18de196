//! Server communication: snapshot fetch, live update stream, and draw
//! submission. Stream handlers are registered once and leaked via
//! `forget()` since they live for the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use voxcanvas_core::error::CanvasError;
use voxcanvas_core::palette::PaletteSelection;
use voxcanvas_core::types::{Cell, CellCoord};
use voxcanvas_net::{decode_update, draw_path, snapshot_path, stream_path, ProtocolError};
use voxcanvas_world::{Mutation, World};

/// Port the canvas API listens on, same host as the page.
const API_PORT: u16 = 8000;

fn hostname() -> String {
    web_sys::window()
        .expect("no global window")
        .location()
        .hostname()
        .unwrap_or_default()
}

fn http_base() -> String {
    format!("http://{}:{}", hostname(), API_PORT)
}

fn ws_base() -> String {
    format!("ws://{}:{}", hostname(), API_PORT)
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Fetch the full canvas snapshot. The world is built only after this
/// resolves; there is no partial rendering before the snapshot lands.
pub async fn fetch_snapshot(canvas: &str) -> Result<Vec<u8>, CanvasError> {
    let url = format!("{}{}", http_base(), snapshot_path(canvas));
    let window = web_sys::window().expect("no global window");

    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| CanvasError::SnapshotFetchFailed(describe(&e)))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|e| CanvasError::SnapshotFetchFailed(describe(&e)))?;
    if !resp.ok() {
        return Err(CanvasError::SnapshotFetchFailed(format!(
            "status {}",
            resp.status()
        )));
    }

    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| CanvasError::SnapshotFetchFailed(describe(&e)))?,
    )
    .await
    .map_err(|e| CanvasError::SnapshotFetchFailed(describe(&e)))?;

    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Open the live update stream and feed decoded updates into the world's
/// queue. Updates are only queued here; they are applied in arrival order
/// at the top of the next frame tick, never mid-rebuild. A message that
/// fails to decode is dropped with a warning and the stream continues.
pub fn connect_stream(
    canvas: &str,
    world: Rc<RefCell<World>>,
) -> Result<web_sys::WebSocket, CanvasError> {
    let url = format!("{}{}", ws_base(), stream_path(canvas));
    let socket = web_sys::WebSocket::new(&url)
        .map_err(|e| CanvasError::StreamConnectFailed(describe(&e)))?;

    let cfg = *world.borrow().config();
    let onmessage =
        Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |e: web_sys::MessageEvent| {
            let Some(text) = e.data().as_string() else {
                log::warn!("dropping non-text stream message");
                return;
            };
            match decode_update(&cfg, &text) {
                Ok(update) => world.borrow_mut().enqueue_remote(Mutation {
                    cell: update.cell,
                    value: update.value,
                }),
                Err(err) => log::warn!("dropping bad stream message: {err}"),
            }
        });
    socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onopen = Closure::<dyn FnMut()>::new(move || {
        log::info!("update stream connected");
    });
    socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onclose = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(move |e: web_sys::CloseEvent| {
        log::warn!("update stream closed: code {}", e.code());
    });
    socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();

    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        log::error!("update stream error");
    });
    socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    Ok(socket)
}

/// Submit one edit. The grid is mutated only after the server accepts; a
/// rejection leaves local state untouched and is logged, with no retry.
pub fn submit_draw(
    canvas: String,
    world: Rc<RefCell<World>>,
    cell: CellCoord,
    selection: PaletteSelection,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match post_draw(&canvas, cell, selection).await {
            Ok(()) => {
                let value = match selection {
                    PaletteSelection::Color(idx) => Cell::Filled(idx),
                    PaletteSelection::Erase => Cell::Empty,
                };
                world.borrow_mut().apply(Mutation { cell, value });
                log::debug!("edit confirmed at {cell}");
            }
            Err(e) => log::warn!("edit at {cell} not applied: {e}"),
        }
    });
}

async fn post_draw(
    canvas: &str,
    cell: CellCoord,
    selection: PaletteSelection,
) -> Result<(), ProtocolError> {
    let url = format!("{}{}", http_base(), draw_path(canvas, cell, selection));
    let window = web_sys::window().expect("no global window");

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");

    let resp = JsFuture::from(window.fetch_with_str_and_init(&url, &opts))
        .await
        .map_err(|e| ProtocolError::EditRejected {
            status: 0,
            body: describe(&e),
        })?;
    let resp: web_sys::Response = resp.dyn_into().map_err(|e| ProtocolError::EditRejected {
        status: 0,
        body: describe(&e),
    })?;

    if resp.ok() {
        return Ok(());
    }

    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(ProtocolError::EditRejected {
        status: resp.status(),
        body,
    })
}
