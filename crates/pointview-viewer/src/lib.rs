#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Pointview Viewer
//!
//! A windowing-free model of an interactive 2D point viewer. The windowing layer turns its
//! input into [`ViewerEvent`]s and implements [`RenderSink`] to draw the resulting points.
//!
//! - **Click** adds a point
//! - **Drag** translates the cloud
//! - **Wheel** zooms about the cursor
//! - **Shift + Wheel** rotates about the cursor
//!
//! ## Example
//!
//! ```rust
//! use pointview_viewer::{FrameBuffer, PointViewer, ViewerEvent, ViewerParams};
//!
//! let mut viewer = PointViewer::new(ViewerParams::default()).unwrap();
//! viewer.handle(ViewerEvent::Click { x: 400.0, y: 300.0 }).unwrap();
//! viewer.handle(ViewerEvent::Move { x: 400.0, y: 300.0 }).unwrap();
//! viewer.handle(ViewerEvent::Drag { x: 410.0, y: 305.0 }).unwrap();
//!
//! let mut frame = FrameBuffer::default();
//! viewer.render(&mut frame);
//! assert_eq!(frame.points, vec![[410.0, 305.0]]);
//! ```

/// Error types for the viewer.
pub mod error;

/// Rendering sinks.
pub mod render;

/// The point viewer model.
pub mod viewer;

pub use crate::error::ViewerError;
pub use crate::render::{FrameBuffer, RenderSink};
pub use crate::viewer::{PointViewer, ViewerEvent, ViewerParams};
