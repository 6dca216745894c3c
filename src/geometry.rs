//! Rectangles, aspect/growth algebra, and input validation.
//!
//! Aspect ratios are width / height throughout, matching the CSS
//! `aspect-ratio` property. [`AspectFactors`] is the one exception: it
//! describes height as a function of width, so its `aspect` is the
//! reciprocal (height per unit of width).

use whereat::at;

use crate::error::{LayoutError, Result};

/// Axis-aligned rectangle in absolute layout units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// A rect of the given size at the origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width / height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Grow by `amount` on every edge.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            top: self.top - amount,
            left: self.left - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    /// Shrink by `amount` on every edge. Width and height stop at zero.
    pub fn deflate(self, amount: f64) -> Self {
        Self {
            top: self.top + amount,
            left: self.left + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }

    /// Whether the interiors of the two rects intersect, with `tolerance`
    /// absorbed at the shared edges.
    pub fn overlaps(&self, other: &Rect, tolerance: f64) -> bool {
        self.left < other.right() - tolerance
            && other.left < self.right() - tolerance
            && self.top < other.bottom() - tolerance
            && other.top < self.bottom() - tolerance
    }

    /// Whether `other` lies inside `self`, allowing `tolerance` at each edge.
    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Anything that exposes a width / height aspect ratio.
///
/// Lets callers pass their own item records (photos, tiles) to the selector
/// without first extracting the ratios.
pub trait AspectRatio {
    /// Width / height. Must be positive and finite.
    fn aspect_ratio(&self) -> f64;
}

impl AspectRatio for f64 {
    fn aspect_ratio(&self) -> f64 {
        *self
    }
}

impl AspectRatio for Rect {
    fn aspect_ratio(&self) -> f64 {
        self.aspect()
    }
}

impl<T: AspectRatio + ?Sized> AspectRatio for &T {
    fn aspect_ratio(&self) -> f64 {
        (**self).aspect_ratio()
    }
}

/// Outer height of a rectangulation as a linear function of its width and
/// padding: `height = aspect * width + growth * padding`.
///
/// `aspect` is height per unit of width (the reciprocal of the width/height
/// ratio). `growth` is how much the height changes per unit of padding at a
/// fixed width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectFactors {
    pub aspect: f64,
    pub growth: f64,
}

impl AspectFactors {
    /// Factors for a single slot with the given width / height ratio.
    ///
    /// The slot's content is `width - padding` wide, so its outer height is
    /// `(width - padding) / ratio + padding`.
    pub fn slot(ratio: f64) -> Self {
        let aspect = 1.0 / ratio;
        Self {
            aspect,
            growth: 1.0 - aspect,
        }
    }

    /// Combine two neighbors placed side by side at a shared height.
    pub fn beside(self, other: Self) -> Self {
        let (a1, g1) = (self.aspect, self.growth);
        let (a2, g2) = (other.aspect, other.growth);
        let sum = a1 + a2;
        Self {
            aspect: (a1 * a2) / sum,
            growth: a1 * (g2 - g1) / sum + g1,
        }
    }

    /// Combine two neighbors stacked at a shared width.
    pub fn stacked(self, other: Self) -> Self {
        Self {
            aspect: self.aspect + other.aspect,
            growth: self.growth + other.growth,
        }
    }

    pub fn height_for_width(&self, width: f64, padding: f64) -> f64 {
        self.aspect * width + self.growth * padding
    }

    pub fn width_for_height(&self, height: f64, padding: f64) -> f64 {
        (height - self.growth * padding) / self.aspect
    }

    /// Width / height of the outer rectangle when there is no padding.
    pub fn ratio(&self) -> f64 {
        1.0 / self.aspect
    }

    /// Largest rectangle obeying these factors that fits in `bounds`,
    /// anchored at the bounds' top-left corner.
    ///
    /// Width is tried as the binding dimension first; if that overflows the
    /// bounds height, height binds instead.
    pub fn inscribe(&self, bounds: Rect, padding: f64) -> Rect {
        let mut width = bounds.width;
        let mut height = self.height_for_width(width, padding);
        if height > bounds.height {
            height = bounds.height;
            width = self.width_for_height(height, padding);
        }
        Rect::new(bounds.top, bounds.left, width, height)
    }
}

// ============================================================================
// Validation
// ============================================================================

pub(crate) fn validate_aspect(aspect: f64, index: usize) -> Result<f64> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(aspect)
    } else {
        Err(at!(LayoutError::InvalidAspect { index }))
    }
}

pub(crate) fn validate_aspects(aspects: &[f64]) -> Result<()> {
    for (index, &aspect) in aspects.iter().enumerate() {
        validate_aspect(aspect, index)?;
    }
    Ok(())
}

pub(crate) fn validate_padding(padding: f64) -> Result<f64> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(padding)
    } else {
        Err(at!(LayoutError::InvalidPadding))
    }
}

pub(crate) fn validate_bounds(bounds: &Rect) -> Result<()> {
    let finite = bounds.top.is_finite() && bounds.left.is_finite();
    if finite && positive(bounds.width) && positive(bounds.height) {
        Ok(())
    } else {
        Err(at!(LayoutError::InvalidBounds))
    }
}

pub(crate) fn validate_bounds_aspect(aspect: f64) -> Result<f64> {
    if positive(aspect) {
        Ok(aspect)
    } else {
        Err(at!(LayoutError::InvalidBounds))
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
