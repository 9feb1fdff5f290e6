//! Map surface for the locations page.
//!
//! Leaflet is loaded by a `<script>` tag in `index.html`, so the Rust side has
//! to wait for the `L` global before mounting. Marker styling lives here so it
//! can be checked off the browser.
#[cfg(target_arch = "wasm32")]
mod leaflet;

#[cfg(target_arch = "wasm32")]
pub use leaflet::LeafletWidget;

use balkan_moto_core::LocationKind;
use serde::Serialize;
use thiserror::Error;

/// DOM id of the element the map mounts into.
pub const MAP_CONTAINER_ID: &str = "locations-map";

const SHOP_COLOR: &str = "#E10600";
const SERVICE_COLOR: &str = "#1FB5A8";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapInitError {
    #[error("map library did not load within {0} ms")]
    LibraryTimeout(u32),
    #[error("map container #{0} is missing")]
    MissingContainer(String),
    #[error("map library rejected the setup: {0}")]
    Library(String),
}

/// Leaflet `CircleMarker` path options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u8,
}

/// Style for a marker of `kind`; the selected marker is larger and outlined.
#[must_use]
pub const fn marker_style(kind: LocationKind, selected: bool) -> MarkerStyle {
    let fill = match kind {
        LocationKind::Shop => SHOP_COLOR,
        LocationKind::Service => SERVICE_COLOR,
    };
    if selected {
        MarkerStyle {
            radius: 12.0,
            color: "#F5F5F7",
            fill_color: fill,
            fill_opacity: 1.0,
            weight: 3,
        }
    } else {
        MarkerStyle {
            radius: 8.0,
            color: "#0B0B0D",
            fill_color: fill,
            fill_opacity: 0.85,
            weight: 2,
        }
    }
}

/// Number of polls to make before giving up on the library.
#[must_use]
pub const fn poll_attempts(wait_ms: u32, poll_ms: u32) -> u32 {
    if poll_ms == 0 {
        return 1;
    }
    wait_ms.div_ceil(poll_ms)
}

/// Poll for the Leaflet global until it appears or `wait_ms` runs out.
///
/// # Errors
///
/// [`MapInitError::LibraryTimeout`] when the script never loaded (offline,
/// blocked by an extension, CDN down).
#[cfg(target_arch = "wasm32")]
pub async fn wait_for_library(wait_ms: u32, poll_ms: u32) -> Result<(), MapInitError> {
    for _ in 0..poll_attempts(wait_ms, poll_ms) {
        if crate::dom::has_global("L") {
            return Ok(());
        }
        if let Err(err) = crate::dom::sleep_ms(poll_ms).await {
            return Err(MapInitError::Library(crate::dom::js_error_message(&err)));
        }
    }
    if crate::dom::has_global("L") {
        Ok(())
    } else {
        Err(MapInitError::LibraryTimeout(wait_ms))
    }
}
