//! The seek control and the pieces it is composed of.
//!
//! # Architecture
//!
//! - `seek_bar`: `SeekBar`, the scrub state machine and progress sync
//! - `slider`: `DraggableRange` trait (pointer geometry, drag hooks, fill)
//! - `tooltip`: tooltip sub-control and its bound computation
//! - `registry`: name -> constructor table for child components
//! - `element`: attribute/style model of rendered nodes

pub mod element;
pub mod registry;
pub mod seek_bar;
pub mod slider;
pub mod tooltip;

pub use element::{CssLength, Element, StyleProperty};
pub use registry::{Component, ComponentFactory, ComponentRegistry, ProgressFill};
pub use seek_bar::{ScrubState, SeekBar, ARIA_LABEL, END_EPSILON, STEP_SECONDS};
pub use slider::{DraggableRange, HorizontalRange, PointerEvent, SliderKey};
pub use tooltip::{compute_bounds, TooltipBar, TooltipBounds};
