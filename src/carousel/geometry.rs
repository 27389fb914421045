//! Layout math shared by the controller and whatever renders it.
//!
//! All values are in the renderer's horizontal unit (points, pixels, terminal
//! cells...); the controller doesn't care which.

/// The measured size of the surface a carousel is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The fixed layout parameters of a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    spacing: f32,
    headspace: f32,
    sides_scaling: f32,
}

impl Layout {
    /// Creates a new [`Layout`]. Negative (or NaN) spacing and headspace are
    /// treated as zero. The sides scaling is stored as given and clamped on
    /// read.
    pub fn new(spacing: f32, headspace: f32, sides_scaling: f32) -> Self {
        Self {
            spacing: spacing.max(0.0),
            headspace: headspace.max(0.0),
            sides_scaling,
        }
    }

    /// The gap between two neighbouring items.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// How much of each side item peeks into the viewport.
    pub fn headspace(&self) -> f32 {
        self.headspace
    }

    /// The scale applied to items that aren't active, within `[0, 1]`.
    pub fn sides_scaling(&self) -> f32 {
        if self.sides_scaling.is_nan() {
            0.0
        } else {
            self.sides_scaling.clamp(0.0, 1.0)
        }
    }

    /// The distance from the viewport's left edge to the active item.
    pub fn default_padding(&self) -> f32 {
        self.headspace + self.spacing
    }

    /// The width of a single item. Never negative, even if the viewport is
    /// narrower than the padding on both sides.
    pub fn item_width(&self, viewport: Size) -> f32 {
        (viewport.width - self.default_padding() * 2.0).max(0.0)
    }

    /// The center-to-center distance between two neighbouring items.
    pub fn item_stride(&self, viewport: Size) -> f32 {
        self.item_width(viewport) + self.spacing
    }

    /// How far a drag must travel before it commits to another item.
    pub fn drag_threshold(&self, viewport: Size) -> f32 {
        self.item_width(viewport) / 3.0
    }

    /// The horizontal translation of the whole strip.
    pub fn offset(&self, viewport: Size, active_index: usize, drag_offset: f32) -> f32 {
        self.default_padding() - active_index as f32 * self.item_stride(viewport) + drag_offset
    }

    /// The x position of the `slot`th item relative to the viewport, given a
    /// strip offset.
    pub fn slot_position(&self, viewport: Size, offset: f32, slot: usize) -> f32 {
        offset + slot as f32 * self.item_stride(viewport)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(10.0, 10.0, 0.8)
    }
}
