//! Element geometry.

/// A bounding rectangle in viewport coordinates.
///
/// The analogue of `getBoundingClientRect()`: geometry is authored input
/// (markup `data-rect` attributes or test setup), not computed layout. The
/// simulator does not re-derive rects when the page scrolls; behaviors that
/// need page coordinates add the scroll offset themselves, exactly as the
/// page scripts do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether a viewport point falls inside this rect.
    /// Edges are half-open: the left/top edge is inside, right/bottom is not.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Parse the `data-rect="x,y,w,h"` markup attribute.
    pub fn from_attr(value: &str) -> Option<Self> {
        let mut parts = value.split(',').map(|p| p.trim().parse::<f32>());
        let x = parts.next()?.ok()?;
        let y = parts.next()?.ok()?;
        let width = parts.next()?.ok()?;
        let height = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y, width, height })
    }
}
