//! Balkan Moto Club site core
//!
//! Platform-agnostic logic behind the club website: the static product
//! catalog and location directory, the shared filter engine, selection state,
//! map synchronisation and the simulated form submission cycle.
//! Nothing here touches the DOM; the web crate renders on top of it.

pub mod catalog;
pub mod config;
pub mod data;
pub mod directory;
pub mod filter;
pub mod geo;
pub mod map_sync;
pub mod selection;
pub mod submission;

// Re-export commonly used types
pub use catalog::{
    Availability, Catalog, Product, ProductCategory, ProductCriteria, ProductSpec, format_eur,
};
pub use config::{ConfigError, FormTimings, MapConfig, SiteConfig};
pub use data::{DataError, Record};
pub use directory::{Directory, Location, LocationCriteria, LocationKind};
pub use filter::{CategoryFilter, Criteria, Filterable, SortKey, filter};
pub use geo::{Bounds, CoordinateError, LatLng};
pub use map_sync::{
    FitOptions, MapStatus, MapSync, MapWidget, MarkerSpec, SyncOptions, SyncReport, ViewportMove,
};
pub use selection::{Gallery, Selection, VariantPicker};
pub use submission::{
    ContactForm, Delay, FormFields, MembershipForm, SimulatedSink, SubmitError, SubmitIntent,
    SubmitPhase, SubmitSink, Submission, is_valid_email, run_submission,
};
