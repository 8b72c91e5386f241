//! # Slint Range Slider
//!
//! The toolkit-independent core of a dual-thumb range slider, with a thin
//! adapter for Slint windows. Two thumbs select a sub-range `[left, right]`
//! of an integer range `[minimum, maximum]`.
//!
//! ## Features
//!
//! - **Invariant-Preserving Values** - `minimum <= left <= right <= maximum` holds after every operation
//! - **Pure Layout** - Track, tick strips, thumb rectangles and paint order are computed without a renderer
//! - **Pointer State Machine** - Hover, press, drag, click-to-step and wheel stepping per thumb
//! - **Host Adapter Trait** - Drawing, measuring, focus and invalidation are delegated via [`HostAdapter`]
//! - **Re-entrant Notifications** - Listeners may call back into the controller
//!
//! ## Quick Start
//!
//! ```
//! use slint_range_slider::{Point, RangeSlider, Size, ThumbDirection, ThumbMetrics, ThumbState, Event};
//!
//! struct Glyphs;
//!
//! impl ThumbMetrics for Glyphs {
//!     fn measure_thumb_size(&self, direction: ThumbDirection, _: ThumbState) -> Size {
//!         match direction {
//!             ThumbDirection::Top | ThumbDirection::Bottom => Size::new(11, 19),
//!             ThumbDirection::Left | ThumbDirection::Right => Size::new(19, 11),
//!         }
//!     }
//! }
//!
//! let mut slider = RangeSlider::new();
//! let effects = slider.handle_event(Event::press(Point::new(140, 22)), &Glyphs);
//! assert!(effects.changes.right());
//! assert_eq!(slider.value_right(), 8);
//! ```
//!
//! ## Modules
//!
//! - [`value`] - Range and thumb values, validation and stepping
//! - [`geometry`] - Track and thumb rectangles, pixel to value mapping
//! - [`hit_test`] - Thumb hit-testing and closest-thumb selection
//! - [`interaction`] - Pointer and wheel state machine
//! - [`layout`] - Tick styles and the paint plan
//! - [`host`] - Traits the UI toolkit implements
//! - [`controller`] - Slint-facing controller and callback factories

pub mod error;
pub mod thumb;
pub mod value;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod host;
pub mod config;
pub mod slider;
pub mod controller;

pub use error::{Property, Result, SliderError};
pub use thumb::{Thumb, ThumbDirection, ThumbSizes, ThumbState};
pub use value::{StepDirection, ValueChanges, ValueEvent, ValueModel};
pub use geometry::{Bounds, Frame, Orientation, Point, Rect, Size, SliderGeometry};
pub use hit_test::{closest_thumb, thumb_at, SimpleThumbLayout, ThumbLayout};
pub use interaction::{Effects, Event, InteractionState, PointerButton};
pub use layout::{BorderStyle, PaintCommand, PaintPlan, TickEdgeStyle, TickStyle};
pub use host::{paint, render, DrawingScope, HostAdapter, ThumbMetrics};
pub use config::{SliderConfig, VisualConfig};
pub use slider::RangeSlider;
pub use controller::RangeSliderController;
