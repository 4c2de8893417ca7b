// File: crates/energy-series/src/lib.rs
// Summary: Library entry point; exports the time converter, series model, scaler, store and composer.

pub mod time;
pub mod series;
pub mod scale;
pub mod store;
pub mod compose;
pub mod error;

pub use time::{root_time, EPOCH_UNIX_SECONDS};
pub use series::{Point, Series};
pub use scale::{scale_in_place, scaled, ErrorPolicy};
pub use store::{load_series, ResultsFile};
pub use compose::{compose, ChartSpec, Composition, Rgb, Scenario};
pub use error::{ComposeError, StoreError};
