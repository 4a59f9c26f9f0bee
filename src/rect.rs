use euclid::default::{Box2D, Point2D, SideOffsets2D};

/// Axis-aligned bounding box of one rendered text line.
///
/// **Y-axis goes down.** Coordinates live in the text block's local space,
/// after the caller has applied whatever outset it wants (see
/// [`LineRect::outset`]). A well-formed rect has `left <= right` and
/// `top <= bottom`; a sequence of line rects is expected to be ordered
/// top-to-bottom.
///
/// Rects are plain mutable data: the owning view fills them in place on every
/// draw and only reallocates the backing storage when the line count changes
/// (see [`RectCache`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl LineRect {
    /// Creates a rect from its four edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The all-zero rect used to prefill freshly allocated buffers.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns `true` when the rect encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Grows every edge outward by the given offsets.
    ///
    /// Negative offsets shrink the rect, which is how a caller expresses an
    /// inset instead.
    pub fn outset(&mut self, offsets: &SideOffsets2D<f32>) {
        self.left -= offsets.left;
        self.top -= offsets.top;
        self.right += offsets.right;
        self.bottom += offsets.bottom;
    }

    pub fn to_box(&self) -> Box2D<f32> {
        Box2D::new(
            Point2D::new(self.left, self.top),
            Point2D::new(self.right, self.bottom),
        )
    }

    pub fn from_box(b: &Box2D<f32>) -> Self {
        Self::new(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

/// Allocates a fresh sequence of zeroed line rects.
///
/// Returns an empty vec for a zero line count. This is the pure building
/// block; callers that redraw every frame should go through [`RectCache`] so
/// the allocation only happens when the line count actually changes.
pub fn line_rects(line_count: usize) -> Vec<LineRect> {
    if line_count == 0 {
        return vec![];
    }
    vec![LineRect::zero(); line_count]
}

/// Line rect storage reused across draws.
///
/// The cache keeps the buffer from the previous draw and compares its length
/// against the requested count on every call. Only a count change triggers a
/// reallocation; otherwise the caller mutates the existing rects in place.
/// Comparing the stored length instead of tracking a separate dirty boolean
/// means there is no flag that can go stale when several callers touch the
/// owning view.
#[derive(Clone, Debug, Default)]
pub struct RectCache {
    rects: Vec<LineRect>,
}

impl RectCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self { rects: vec![] }
    }

    /// Returns a buffer of exactly `line_count` rects, reallocating only when
    /// the count differs from the previous call.
    ///
    /// A reused buffer keeps its previous contents; the caller overwrites
    /// every rect before building an outline from them. A freshly allocated
    /// buffer is zeroed.
    pub fn rects_for(&mut self, line_count: usize) -> &mut [LineRect] {
        if self.rects.len() != line_count {
            log::trace!(
                "line rect buffer reallocated: {} -> {} lines",
                self.rects.len(),
                line_count
            );
            self.rects = line_rects(line_count);
        }
        &mut self.rects
    }

    /// Current buffer contents without touching the cache.
    pub fn as_slice(&self) -> &[LineRect] {
        &self.rects
    }

    /// Number of rects currently held.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` when no rects are held.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_rects_zero_count() {
        assert!(line_rects(0).is_empty());
    }

    #[test]
    fn test_line_rects_zeroed() {
        let rects = line_rects(3);
        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| *r == LineRect::zero()));
    }

    #[test]
    fn test_outset_grows_every_edge() {
        let mut rect = LineRect::new(10.0, 20.0, 30.0, 40.0);
        rect.outset(&SideOffsets2D::new(1.0, 2.0, 3.0, 4.0));

        // SideOffsets2D::new is (top, right, bottom, left).
        assert_eq!(rect, LineRect::new(6.0, 19.0, 32.0, 43.0));
    }

    #[test]
    fn test_negative_outset_shrinks() {
        let mut rect = LineRect::new(0.0, 0.0, 10.0, 10.0);
        rect.outset(&SideOffsets2D::new_all_same(-2.0));

        assert_eq!(rect, LineRect::new(2.0, 2.0, 8.0, 8.0));
    }

    #[test]
    fn test_cache_reuses_buffer_for_same_count() {
        let mut cache = RectCache::new();

        let rects = cache.rects_for(2);
        rects[0] = LineRect::new(1.0, 2.0, 3.0, 4.0);
        let ptr = rects.as_ptr();

        // Same count: same storage, contents untouched.
        let rects = cache.rects_for(2);
        assert_eq!(rects.as_ptr(), ptr);
        assert_eq!(rects[0], LineRect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_cache_reallocates_on_count_change() {
        let mut cache = RectCache::new();

        let rects = cache.rects_for(2);
        rects[0] = LineRect::new(1.0, 2.0, 3.0, 4.0);

        let rects = cache.rects_for(3);
        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| *r == LineRect::zero()));

        let rects = cache.rects_for(0);
        assert!(rects.is_empty());
    }

    #[test]
    fn test_box_round_trip() {
        let rect = LineRect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(LineRect::from_box(&rect.to_box()), rect);
    }
}
