//! Platform glue: opening links, viewport size and element measurement.
//!
//! Browser builds talk to `web_sys::Window`; native builds (desktop, tests)
//! hand links to the system browser and fall back to a configured viewport.

use std::rc::Rc;

use dioxus::prelude::MountedData;
use hashmd_toolbar_core::{PositionError, Rect, Size};

/// Open `url` in a new browsing context.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn open_link(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(%url, "no window to open link in");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!(%url, "failed to open link: {:?}", e);
    }
}

/// Open `url` in a new browsing context.
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub fn open_link(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!(%url, "failed to open link: {}", e);
    }
}

/// The visible area dropdowns must stay inside.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn viewport(fallback: Size) -> Rect {
    let size = web_sys::window().and_then(|window| {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Size::new(width, height))
    });
    Rect::from_size(size.unwrap_or(fallback))
}

/// The visible area dropdowns must stay inside.
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub fn viewport(fallback: Size) -> Rect {
    Rect::from_size(fallback)
}

/// Client rect of a mounted element, in viewport pixels.
pub async fn measure(
    element: Option<Rc<MountedData>>,
    what: &'static str,
) -> Result<Rect, PositionError> {
    let element = element.ok_or(PositionError::Unmounted(what))?;
    let rect = element
        .get_client_rect()
        .await
        .map_err(|e| PositionError::Measure {
            what,
            reason: format!("{e:?}").into(),
        })?;
    Ok(Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}
