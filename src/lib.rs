//! # Keiko
//!
//! A highlight outline library for multi-line text.
//!
//! ## Overview
//!
//! `Keiko` computes the closed outline that tightly wraps a block of laid-out
//! text, following the per-line bounding boxes instead of a single rectangle.
//! The result is the "highlighter pen" shape that steps in and out as line
//! widths vary. The core is a pure geometry algorithm: per-line rects in,
//! path drawing commands out; text layout and rendering stay on the host's
//! side of the [`LineSource`] and [`Path`] seams.
//!
//! ## Usage
//!
//! ```rust
//! use keiko::{HighlightBlock, LineRect, SliceLineSource};
//!
//! // 1. Obtain per-line bounds from your text layout.
//! let lines = [
//!     LineRect::new(0.0, 0.0, 180.0, 22.0),
//!     LineRect::new(0.0, 22.0, 120.0, 44.0),
//!     LineRect::new(0.0, 44.0, 150.0, 66.0),
//! ];
//!
//! // 2. Rebuild the outline each draw; buffers are reused across frames.
//! let mut block = HighlightBlock::new();
//! let path = block.update(&SliceLineSource::new(&lines));
//!
//! // 3. Hand `path.commands()` (or `path.polygons()`) to your renderer,
//! //    then draw the text on top.
//! assert!(!path.is_empty());
//! ```
//!
//! ## Features
//!
//! *   **Notch-step stitching**: one simple polygon around all lines, with
//!     correct inward/outward steps at every width change.
//! *   **Box-per-line stitching**: one rectangle subpath per line for hosts
//!     that prefer merged boxes.
//! *   **Frame-friendly caching**: line rect storage is reallocated only when
//!     the line count changes; paths reset without freeing their storage.

pub mod highlight;
pub mod outline;
pub mod paint;
pub mod path;
pub mod rect;

// common re-exports
pub use highlight::{HighlightBlock, LineSource, SliceLineSource};
pub use outline::{OutlineStyle, build_outline, build_outline_with_style};
pub use paint::{HighlightPaint, PaintStyle};
pub use path::{Path, PathCommand};
pub use rect::{LineRect, RectCache, line_rects};

// re-export dependencies
pub use euclid;
pub use palette;
