use euclid::default::SideOffsets2D;

use crate::outline::{OutlineStyle, build_outline_with_style};
use crate::path::Path;
use crate::rect::{LineRect, RectCache};

/// Per-line geometry queries answered by the text layout collaborator.
///
/// This is the seam between layout and highlighting: any layout engine that
/// can report where its lines sit can drive a [`HighlightBlock`]. Indices
/// run `0..line_count()` in top-to-bottom visual order; the semantics match
/// the usual line-bounds queries of text layout APIs (the right edge is
/// derived as `line_left + line_width`).
pub trait LineSource {
    /// Number of laid-out lines.
    fn line_count(&self) -> usize;
    /// Top edge of the line, y-down.
    fn line_top(&self, line: usize) -> f32;
    /// Bottom edge of the line, y-down.
    fn line_bottom(&self, line: usize) -> f32;
    /// Left edge of the line.
    fn line_left(&self, line: usize) -> f32;
    /// Advance width of the line.
    fn line_width(&self, line: usize) -> f32;
}

/// [`LineSource`] over already-resolved line rects.
///
/// Useful for hosts that computed their line boxes elsewhere, and for tests.
#[derive(Clone, Copy, Debug)]
pub struct SliceLineSource<'a> {
    rects: &'a [LineRect],
}

impl<'a> SliceLineSource<'a> {
    pub fn new(rects: &'a [LineRect]) -> Self {
        Self { rects }
    }
}

impl LineSource for SliceLineSource<'_> {
    fn line_count(&self) -> usize {
        self.rects.len()
    }

    fn line_top(&self, line: usize) -> f32 {
        self.rects[line].top
    }

    fn line_bottom(&self, line: usize) -> f32 {
        self.rects[line].bottom
    }

    fn line_left(&self, line: usize) -> f32 {
        self.rects[line].left
    }

    fn line_width(&self, line: usize) -> f32 {
        self.rects[line].width()
    }
}

/// Owner of the highlight geometry for one block of text.
///
/// A `HighlightBlock` holds the pieces the drawing host would otherwise
/// juggle by hand: the line rect buffer reused across draws, the transient
/// [`Path`] rebuilt on every draw, the stitching style, and the outset
/// applied around every line. One call per redraw:
///
/// ```
/// use keiko::{HighlightBlock, LineRect, SliceLineSource};
///
/// let lines = [
///     LineRect::new(0.0, 0.0, 120.0, 20.0),
///     LineRect::new(0.0, 20.0, 80.0, 40.0),
/// ];
/// let mut block = HighlightBlock::new();
/// let path = block.update(&SliceLineSource::new(&lines));
/// assert!(!path.is_empty());
/// ```
///
/// The block is single-owner state: the rendering thread mutates it once per
/// frame and reads the produced path immediately, no locking involved.
#[derive(Clone, Debug)]
pub struct HighlightBlock {
    rect_cache: RectCache,
    path: Path,
    style: OutlineStyle,
    outset: SideOffsets2D<f32>,
}

impl Default for HighlightBlock {
    fn default() -> Self {
        Self {
            rect_cache: RectCache::new(),
            path: Path::new(),
            style: OutlineStyle::default(),
            outset: SideOffsets2D::zero(),
        }
    }
}

impl HighlightBlock {
    /// Creates a block with the stitched style and no outset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block with the given stitching style.
    pub fn with_style(style: OutlineStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Selects the stitching style for subsequent updates.
    pub fn set_style(&mut self, style: OutlineStyle) {
        self.style = style;
    }

    pub fn style(&self) -> OutlineStyle {
        self.style
    }

    /// Sets the outward offsets applied to every line rect on update.
    ///
    /// Positive values grow the highlight beyond the glyph bounds; negative
    /// values pull it inward.
    pub fn set_outset(&mut self, outset: SideOffsets2D<f32>) {
        self.outset = outset;
    }

    pub fn outset(&self) -> SideOffsets2D<f32> {
        self.outset
    }

    /// Refills the line rects from `source` and rebuilds the outline path.
    ///
    /// The rect buffer is reallocated only when the line count changed since
    /// the previous update; the path is reset and rebuilt unconditionally.
    /// Returns the freshly built path, also reachable through
    /// [`HighlightBlock::path`] afterwards.
    pub fn update<S: LineSource>(&mut self, source: &S) -> &Path {
        let line_count = source.line_count();
        let outset = self.outset;
        let rects = self.rect_cache.rects_for(line_count);

        for (i, rect) in rects.iter_mut().enumerate() {
            let left = source.line_left(i);
            rect.top = source.line_top(i);
            rect.left = left;
            rect.right = left + source.line_width(i);
            rect.bottom = source.line_bottom(i);
            rect.outset(&outset);
        }

        self.path.reset();
        build_outline_with_style(&mut self.path, self.rect_cache.as_slice(), self.style);
        &self.path
    }

    /// The path produced by the most recent update.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The line rects produced by the most recent update (outset applied).
    pub fn line_rects(&self) -> &[LineRect] {
        self.rect_cache.as_slice()
    }
}
