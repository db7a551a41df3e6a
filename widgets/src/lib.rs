//! # Dashboard Widgets
//!
//! Property-driven chart and table widgets for the finance dashboard. A host
//! (the Yew frontend, or any other UI layer) owns one [`Widget`] per visual
//! element and drives it with two kinds of calls: lifecycle (`mount`,
//! `unmount`, `resize`) and property writes (`set`). Every write runs the
//! whole pipeline synchronously:
//!
//! ```text
//! set(property, raw) -> PropertyStore -> normalize -> Payload::to_config -> RenderHandle::configure
//! ```
//!
//! ## Key Components:
//! - **property**: bindable property names and the raw value store
//! - **kind**: the seven widget kinds and what each one binds
//! - **normalize**: tolerant decoding into validated payloads
//! - **charts**: per-kind normalizers and render adapters
//! - **config**: engine-facing render configuration (ECharts option / table model)
//! - **style**: static visual policy
//! - **engine**: the seam to the external rendering engine
//! - **widget**: lifecycle controller tying it all together

pub mod charts;
pub mod config;
pub mod engine;
pub mod kind;
pub mod normalize;
pub mod property;
pub mod style;
pub mod test_utils;
pub mod widget;

pub use config::{ChartOption, RenderConfig, TableModel, TableRow};
pub use engine::{EngineError, LayoutBox, RenderBackend, RenderHandle, Surface, SurfaceId, SurfaceKind};
pub use kind::WidgetKind;
pub use normalize::{ErrorKind, InputWarning, Normalized, NormalizationError, Payload};
pub use property::{Property, PropertyStore, UnknownProperty};
pub use shared::RawValue;
pub use style::{StyleError, StylePolicy};
pub use widget::{PropertyError, RenderOutcome, Widget, WidgetState};
