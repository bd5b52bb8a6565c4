// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; series alignment, return normalization, ticks,
// label placement and the comparison chart composer.

pub mod align;
pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod placement;
pub mod raster;
pub mod returns;
pub mod series;
pub mod source;
pub mod summary;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use align::align_series;
pub use axis::{AxisPolicy, AxisRange};
pub use canvas::{Canvas, LineStyle, TextExtents, TextStyle};
pub use chart::{ChartOptions, ComparisonChart};
pub use error::{ChartError, Result};
pub use palette::{InstrumentStyle, InstrumentTable};
pub use placement::{place_labels, LabelLayout, LabelSpan, PlacedLabel, PlacementRequest};
pub use raster::RasterCanvas;
pub use returns::compute_returns;
pub use series::{AlignedSeries, InstrumentId, RawSeries, ReturnSeries, ReturnSet};
pub use source::{fetch_all, SeriesSource};
pub use theme::Theme;
pub use ticks::{DefaultTicks, MonthTicks, PercentTicks, Tick, Ticker};
