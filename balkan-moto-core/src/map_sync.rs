//! Keeps a map widget's markers and viewport in step with the filtered
//! location list and the active selection.
//!
//! The widget itself sits behind [`MapWidget`]; the browser crate implements it
//! over Leaflet, tests implement it with a recorder.
use crate::directory::{Location, LocationKind};
use crate::geo::{Bounds, LatLng};
use serde::{Deserialize, Serialize};

/// Everything a widget needs to draw one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub id: String,
    pub position: LatLng,
    pub label: String,
    pub kind: LocationKind,
    pub selected: bool,
}

impl MarkerSpec {
    #[must_use]
    pub fn for_location(location: &Location, selected: bool) -> Self {
        Self {
            id: location.id.clone(),
            position: location.coordinates,
            label: location.name.clone(),
            kind: location.kind,
            selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitOptions {
    pub padding_px: u32,
    pub max_zoom: u8,
}

/// Rendering surface for markers and viewport moves.
pub trait MapWidget {
    /// Replace every marker currently drawn with `markers`.
    fn show_markers(&mut self, markers: &[MarkerSpec]);
    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions);
    fn fly_to(&mut self, center: LatLng, zoom: u8);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Viewport move chosen by a sync pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportMove {
    Unchanged,
    Fit(Bounds),
    FlyTo(LatLng),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncReport {
    pub markers_redrawn: bool,
    pub viewport: ViewportMove,
}

impl SyncReport {
    const IDLE: Self = Self {
        markers_redrawn: false,
        viewport: ViewportMove::Unchanged,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub fit: FitOptions,
    pub select_zoom: u8,
}

/// Widget-independent sync state for one map surface.
#[derive(Debug, Clone)]
pub struct MapSync {
    status: MapStatus,
    options: SyncOptions,
    last_visible: Option<Vec<String>>,
    last_selected: Option<String>,
}

impl MapSync {
    #[must_use]
    pub const fn new(options: SyncOptions) -> Self {
        Self {
            status: MapStatus::Loading,
            options,
            last_visible: None,
            last_selected: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &MapStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.status, MapStatus::Ready)
    }

    /// The widget finished initialising. The next sync draws from scratch.
    pub fn mark_ready(&mut self) {
        self.status = MapStatus::Ready;
        self.last_visible = None;
        self.last_selected = None;
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("map unavailable: {reason}");
        self.status = MapStatus::Failed(reason);
    }

    /// Project `visible` and `selected` onto `widget`.
    ///
    /// Markers cover the visible subset only; a selected record hidden by the
    /// filters still gets the fly-to but no marker.
    pub fn sync<W>(
        &mut self,
        widget: &mut W,
        visible: &[&Location],
        selected: Option<&Location>,
    ) -> SyncReport
    where
        W: MapWidget + ?Sized,
    {
        if !self.is_ready() {
            return SyncReport::IDLE;
        }

        let visible_ids: Vec<String> = visible.iter().map(|l| l.id.clone()).collect();
        let selected_id = selected.map(|l| l.id.as_str());
        let visible_changed = self.last_visible.as_ref() != Some(&visible_ids);
        let selection_changed = self.last_selected.as_deref() != selected_id;

        if !visible_changed && !selection_changed {
            return SyncReport::IDLE;
        }

        let markers: Vec<MarkerSpec> = visible
            .iter()
            .map(|l| MarkerSpec::for_location(l, Some(l.id.as_str()) == selected_id))
            .collect();
        widget.show_markers(&markers);

        let viewport = match selected {
            Some(location) if selection_changed => {
                widget.fly_to(location.coordinates, self.options.select_zoom);
                ViewportMove::FlyTo(location.coordinates)
            }
            None if visible_changed => {
                match Bounds::enclosing(visible.iter().map(|l| l.coordinates)) {
                    Some(bounds) => {
                        widget.fit_bounds(bounds, self.options.fit);
                        ViewportMove::Fit(bounds)
                    }
                    None => ViewportMove::Unchanged,
                }
            }
            _ => ViewportMove::Unchanged,
        };

        log::debug!(
            "map sync: {} markers, selected={selected_id:?}, viewport={viewport:?}",
            markers.len()
        );
        self.last_visible = Some(visible_ids);
        self.last_selected = selected_id.map(str::to_string);

        SyncReport {
            markers_redrawn: true,
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    #[derive(Default)]
    struct Recorder {
        markers: Vec<MarkerSpec>,
        fits: usize,
        flights: Vec<(LatLng, u8)>,
    }

    impl MapWidget for Recorder {
        fn show_markers(&mut self, markers: &[MarkerSpec]) {
            self.markers = markers.to_vec();
        }

        fn fit_bounds(&mut self, _bounds: Bounds, _options: FitOptions) {
            self.fits += 1;
        }

        fn fly_to(&mut self, center: LatLng, zoom: u8) {
            self.flights.push((center, zoom));
        }
    }

    fn options() -> SyncOptions {
        SyncOptions {
            fit: FitOptions {
                padding_px: 50,
                max_zoom: 12,
            },
            select_zoom: 14,
        }
    }

    #[test]
    fn nothing_is_drawn_before_ready() {
        let directory = Directory::load_from_static().unwrap();
        let visible: Vec<&Location> = directory.locations.iter().collect();
        let mut sync = MapSync::new(options());
        let mut widget = Recorder::default();
        assert_eq!(sync.sync(&mut widget, &visible, None), SyncReport::IDLE);
        assert!(widget.markers.is_empty());
        assert_eq!(widget.fits, 0);
    }

    #[test]
    fn first_ready_sync_fits_all_markers() {
        let directory = Directory::load_from_static().unwrap();
        let visible: Vec<&Location> = directory.locations.iter().collect();
        let mut sync = MapSync::new(options());
        sync.mark_ready();
        let mut widget = Recorder::default();
        let report = sync.sync(&mut widget, &visible, None);
        assert!(report.markers_redrawn);
        assert!(matches!(report.viewport, ViewportMove::Fit(_)));
        assert_eq!(widget.markers.len(), directory.len());
        assert!(widget.markers.iter().all(|m| !m.selected));

        // Same inputs: nothing to do.
        assert_eq!(sync.sync(&mut widget, &visible, None), SyncReport::IDLE);
        assert_eq!(widget.fits, 1);
    }

    #[test]
    fn clearing_selection_does_not_refit() {
        let directory = Directory::load_from_static().unwrap();
        let visible: Vec<&Location> = directory.locations.iter().collect();
        let target = directory.find("service-2");
        let mut sync = MapSync::new(options());
        sync.mark_ready();
        let mut widget = Recorder::default();
        sync.sync(&mut widget, &visible, None);

        let report = sync.sync(&mut widget, &visible, target);
        assert!(matches!(report.viewport, ViewportMove::FlyTo(_)));
        assert_eq!(widget.flights.len(), 1);
        assert_eq!(widget.flights[0].1, 14);
        assert_eq!(widget.markers.iter().filter(|m| m.selected).count(), 1);

        let report = sync.sync(&mut widget, &visible, None);
        assert_eq!(report.viewport, ViewportMove::Unchanged);
        assert_eq!(widget.fits, 1);
        assert!(widget.markers.iter().all(|m| !m.selected));
    }

    #[test]
    fn failure_keeps_the_widget_untouched() {
        let directory = Directory::load_from_static().unwrap();
        let visible: Vec<&Location> = directory.locations.iter().collect();
        let mut sync = MapSync::new(options());
        sync.mark_failed("library missing");
        let mut widget = Recorder::default();
        sync.sync(&mut widget, &visible, None);
        assert!(widget.markers.is_empty());
        assert_eq!(sync.status(), &MapStatus::Failed("library missing".into()));
    }

    #[test]
    fn empty_visible_set_clears_markers_without_moving() {
        let mut sync = MapSync::new(options());
        sync.mark_ready();
        let mut widget = Recorder::default();
        let report = sync.sync(&mut widget, &[], None);
        assert!(report.markers_redrawn);
        assert_eq!(report.viewport, ViewportMove::Unchanged);
        assert!(widget.markers.is_empty());
    }
}
