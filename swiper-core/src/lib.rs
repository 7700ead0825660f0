//! # Swiper Core
//!
//! Platform-independent logic for a draggable, snap-to-slide carousel.
//! Compiles to WASM so browser hosts and native tools share one gesture model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              swiper-core.wasm               │
//! ├─────────────────────────────────────────────┤
//! │  Carousel        │  Pointer Input           │
//! │  - Offset state  │  - Mouse / touch         │
//! │  - Drag gesture  │  - Start/move/end/cancel │
//! │  - Indicators    │  - Client X extraction   │
//! ├─────────────────────────────────────────────┤
//! │  Snap Math       │  View Model              │
//! │  - Elastic clamp │  - Strip transform       │
//! │  - Commit rule   │  - CSS state hooks       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The core never touches the DOM. Hosts report element sizes through
//! [`StripMetrics`] and render the [`CarouselView`] they get back.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod event;
pub mod metrics;
pub mod slide;
pub mod snap;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use carousel::{Carousel, CarouselState, GesturePhase, SnapOutcome};
pub use config::{SwipeConfig, SWIPE_LIMIT};
pub use error::{SwiperError, SwiperResult};
pub use event::{PointerEvent, PointerPhase, PointerSource, TouchPoint};
pub use metrics::{FixedStrip, MeasuredStrip, StripMetrics};
pub use slide::{sample_slides, Slide, DEMO_SLIDE_COUNT};
pub use view::CarouselView;

/// Swiper core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
