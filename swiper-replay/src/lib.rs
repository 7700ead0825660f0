//! # Swiper Replay
//!
//! Headless host for the Swiper carousel. It replays a scripted sequence of
//! pointer and indicator actions through `swiper-core` and reports the view
//! after every step, so snap behaviour can be inspected without a browser.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p swiper-replay -- --script gesture.json
//! echo '{"container_width":300,"steps":[{"action":"next"}]}' | cargo run -p swiper-replay
//! ```
//!
//! ## Script format
//!
//! ```json
//! {
//!   "container_width": 300,
//!   "slides": 10,
//!   "config": { "swipe_limit": 0.6 },
//!   "steps": [
//!     { "action": "down", "x": 500 },
//!     { "action": "move", "x": 300 },
//!     { "action": "up" },
//!     { "action": "go_to", "index": 3 }
//!   ]
//! }
//! ```
//!
//! `slides` is either a count of numbered sample slides or an array of
//! `{ "content": ... }` objects.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use swiper_core::{
    sample_slides, Carousel, CarouselView, FixedStrip, PointerEvent, PointerPhase, PointerSource,
    Slide, SwipeConfig, TouchPoint, DEMO_SLIDE_COUNT,
};

/// Command-line arguments for swiper-replay.
#[derive(Debug, Clone, Parser)]
#[command(name = "swiper-replay")]
#[command(about = "Replay scripted swiper gestures and print carousel state")]
#[command(version)]
pub struct CliArgs {
    /// Script file; reads stdin when omitted
    #[arg(long, env = "SWIPER_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Print only the final state
    #[arg(long)]
    pub summary: bool,

    /// Override the script's viewport width in pixels
    #[arg(long)]
    pub container_width: Option<f64>,
}

/// Replay configuration.
#[derive(Debug, Clone, Default)]
pub struct ReplayConfig {
    /// Script file, or `None` for stdin.
    pub script: Option<PathBuf>,
    /// Whether to print only the final frame.
    pub summary: bool,
    /// Viewport width that replaces the script's.
    pub container_width: Option<f64>,
}

impl From<CliArgs> for ReplayConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            script: args.script,
            summary: args.summary,
            container_width: args.container_width,
        }
    }
}

/// Slides named by a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptSlides {
    /// That many numbered sample slides.
    Count(usize),
    /// Explicit slide list.
    List(Vec<Slide>),
}

impl Default for ScriptSlides {
    fn default() -> Self {
        Self::Count(DEMO_SLIDE_COUNT)
    }
}

impl ScriptSlides {
    fn into_slides(self) -> Vec<Slide> {
        match self {
            Self::Count(count) => sample_slides(count),
            Self::List(slides) => slides,
        }
    }
}

fn mouse() -> PointerSource {
    PointerSource::Mouse
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
#[allow(missing_docs)] // Fields documented at variant level
pub enum Step {
    /// Press at `x`.
    Down {
        x: f64,
        #[serde(default = "mouse")]
        source: PointerSource,
    },
    /// Move the pressed pointer to `x`.
    Move {
        x: f64,
        #[serde(default = "mouse")]
        source: PointerSource,
    },
    /// Release the pointer.
    Up {
        #[serde(default = "mouse")]
        source: PointerSource,
    },
    /// Touch cancelled by the platform.
    Cancel,
    /// Click "previous".
    Prev,
    /// Click "next".
    Next,
    /// Jump to a slide.
    GoTo { index: isize },
}

impl Step {
    fn pointer_event(&self) -> Option<PointerEvent> {
        let (phase, x, source) = match *self {
            Self::Down { x, source } => (PointerPhase::Start, Some(x), source),
            Self::Move { x, source } => (PointerPhase::Move, Some(x), source),
            Self::Up { source } => (PointerPhase::End, None, source),
            Self::Cancel => (PointerPhase::Cancel, None, PointerSource::Touch),
            Self::Prev | Self::Next | Self::GoTo { .. } => return None,
        };
        let event = match (source, x) {
            (PointerSource::Mouse, Some(x)) => PointerEvent::mouse(phase, x),
            (PointerSource::Touch, Some(x)) => {
                PointerEvent::touch(phase, &[TouchPoint { x }])
            }
            (source, None) => PointerEvent::release(source, phase),
        };
        Some(event)
    }
}

/// A replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Viewport width in pixels.
    pub container_width: f64,
    /// Slides on the strip.
    #[serde(default)]
    pub slides: ScriptSlides,
    /// Carousel tuning.
    #[serde(default)]
    pub config: SwipeConfig,
    /// Actions to replay, in order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a script.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid replay script")
    }

    /// Read a script from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Read a script from any reader (e.g., stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing fails.
    pub fn from_reader(mut reader: impl Read) -> anyhow::Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .context("Failed to read script")?;
        Self::from_json(&json)
    }
}

/// Carousel view after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Zero-based step number.
    pub step: usize,
    /// Action that produced this frame.
    pub action: Step,
    /// Resulting view.
    #[serde(flatten)]
    pub view: CarouselView,
}

/// Replay `script` and return a frame per step.
///
/// # Errors
///
/// Returns an error if the script has no slides, an invalid config, or a
/// non-positive viewport width.
pub fn replay(script: Script, width_override: Option<f64>) -> anyhow::Result<Vec<Frame>> {
    let container_width = width_override.unwrap_or(script.container_width);
    anyhow::ensure!(
        container_width.is_finite() && container_width > 0.0,
        "container_width must be positive, got {container_width}"
    );

    let slides = script.slides.into_slides();
    let strip = FixedStrip::new(container_width, slides.len());
    let mut carousel = Carousel::with_config(slides, script.config)?;

    tracing::info!(
        "Replaying {} steps over {} slides at {}px",
        script.steps.len(),
        carousel.slide_count(),
        container_width
    );

    let frames = script
        .steps
        .into_iter()
        .enumerate()
        .map(|(step, action)| {
            apply(&mut carousel, &strip, &action);
            Frame {
                step,
                action,
                view: carousel.view(),
            }
        })
        .collect();
    Ok(frames)
}

fn apply(carousel: &mut Carousel, strip: &FixedStrip, step: &Step) {
    match *step {
        Step::Down { .. } | Step::Move { .. } | Step::Up { .. } | Step::Cancel => {
            if let Some(event) = step.pointer_event() {
                carousel.handle_pointer(&event, strip);
            }
        }
        Step::Prev => carousel.prev(strip),
        Step::Next => carousel.next(strip),
        Step::GoTo { index } => carousel.go_to(index, strip),
    }
}
