// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter-chart renderer, its scales and DOM model.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod dom;
pub mod error;
pub mod legend;
pub mod marks;
pub mod page;
pub mod record;
pub mod scale;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, Orient};
pub use chart::{ChartRenderer, HoverEvent, RenderOptions, RenderedChart};
pub use dom::{Element, Node};
pub use error::{DatasetError, RenderError};
pub use legend::LegendEntry;
pub use marks::{Mark, MarkRadii};
pub use record::{ColorCategory, Place, Record};
pub use scale::{ChartScales, TimeScale};
pub use theme::{Color, Theme};
pub use ticks::Tick;
pub use tooltip::{Tooltip, TooltipStyle};
pub use types::{Insets, Point};
