use crate::path::Path;
use crate::rect::LineRect;

/// How the per-line rects are stitched into a highlight shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutlineStyle {
    /// One closed polygon tracing the combined boundary of all lines, with
    /// a step notch wherever adjacent line widths differ.
    #[default]
    Stitched,
    /// One closed rectangle subpath per line. Abutting boxes merge visually
    /// when the renderer fills them with a nonzero winding rule.
    BoxPerLine,
}

/// Appends the stitched outline of `rects` to `path`.
///
/// Shorthand for [`build_outline_with_style`] with [`OutlineStyle::Stitched`].
pub fn build_outline(path: &mut Path, rects: &[LineRect]) {
    build_outline_with_style(path, rects, OutlineStyle::Stitched);
}

/// Appends the outline of `rects` to `path` using the given style.
///
/// The path is appended to, never reset; callers wanting a fresh outline
/// reset the path first. An empty slice appends nothing. Rects are expected
/// in top-to-bottom visual order with each rect well formed
/// (`left <= right`, `top <= bottom`); consecutive lines are normally
/// vertically contiguous (line `i`'s bottom equals line `i + 1`'s top), the
/// shape produced by text layout. Gaps are spanned by the connecting
/// segments. Overlapping or out-of-order rects violate the caller contract:
/// debug builds assert, release builds still terminate after a single bounded
/// walk but the resulting polygon is unspecified.
pub fn build_outline_with_style(path: &mut Path, rects: &[LineRect], style: OutlineStyle) {
    debug_assert_ordered(rects);

    match style {
        OutlineStyle::Stitched => stitched(path, rects),
        OutlineStyle::BoxPerLine => box_per_line(path, rects),
    }
}

/// Emits a plain clockwise rectangle, starting at the top-left corner.
fn single_line(path: &mut Path, rect: &LineRect) {
    path.move_to(rect.left, rect.top);
    path.line_to(rect.right, rect.top);
    path.line_to(rect.right, rect.bottom);
    path.line_to(rect.left, rect.bottom);
    path.close();
}

/// Emits the notch-step polygon around all lines.
///
/// The walk happens in two passes over the same transition rule:
///
/// 1. Descend the right-hand boundary from the first line to the last. At
///    each transition the next line either sticks out past the current right
///    edge (drop straight down, then run out to the wider edge) or it does
///    not (run down the current line's full right edge, then cut inward at
///    the shared boundary).
/// 2. Cross the bottom of the last line, then ascend the left-hand boundary
///    with the mirrored rule, and close back onto the starting corner.
///
/// Both passes emit the inward cuts as relative segments measured between
/// the two edges involved, so the command stream for a given rect sequence
/// is fully deterministic. Flush edges produce zero-length relative
/// segments rather than being skipped.
fn stitched(path: &mut Path, rects: &[LineRect]) {
    let count = rects.len();
    match count {
        0 => (),
        1 => single_line(path, &rects[0]),
        _ => {
            let first = &rects[0];
            path.move_to(first.left, first.top);
            path.line_to(first.right, first.top);

            // Pass 1: right boundary, top to bottom. The current point
            // enters each iteration at (cur.right, cur.top).
            for i in 0..count - 1 {
                let cur = &rects[i];
                let next = &rects[i + 1];

                if next.right > cur.right {
                    path.rel_line_to(0.0, next.top - cur.top);
                    path.line_to(next.right, next.top);
                } else {
                    path.line_to(cur.right, cur.bottom);
                    path.rel_line_to(-(cur.right - next.right), 0.0);
                }
            }

            let last = &rects[count - 1];
            path.line_to(last.right, last.bottom);
            path.line_to(last.left, last.bottom);

            // Pass 2: left boundary, bottom to top. The current point
            // enters each iteration at (cur.left, cur.bottom).
            for i in (1..count).rev() {
                let cur = &rects[i];
                let prev = &rects[i - 1];

                if prev.left < cur.left {
                    path.rel_line_to(0.0, -(cur.bottom - prev.bottom));
                    path.line_to(prev.left, prev.bottom);
                } else {
                    path.line_to(cur.left, cur.top);
                    path.rel_line_to(prev.left - cur.left, 0.0);
                }
            }

            path.close();
        }
    }
}

/// Emits one closed rectangle subpath per line.
fn box_per_line(path: &mut Path, rects: &[LineRect]) {
    for rect in rects {
        single_line(path, rect);
    }
}

/// Caller-contract checks, compiled out of release builds.
fn debug_assert_ordered(rects: &[LineRect]) {
    if cfg!(debug_assertions) {
        for (i, rect) in rects.iter().enumerate() {
            debug_assert!(
                rect.left <= rect.right && rect.top <= rect.bottom,
                "line rect {i} is inverted: {rect:?}"
            );
            if i > 0 {
                debug_assert!(
                    rects[i - 1].top <= rect.top,
                    "line rects are not ordered top-to-bottom at index {i}"
                );
            }
        }
    }
}
