//! Absolute slot placement for a rectangulation.
//!
//! # Example
//!
//! ```
//! use rectlayout::{Rect, Rectangulation, shape};
//!
//! let rect = Rectangulation::new(&shape![1, 1]).unwrap();
//! let layout = rect.layout(Rect::sized(100.0, 100.0), 20.0, false).unwrap();
//!
//! // Two 50×50 cells, each inset by half the padding.
//! assert_eq!(layout.slots[0], Rect::new(10.0, 10.0, 30.0, 30.0));
//! assert_eq!(layout.slots[1], Rect::new(10.0, 60.0, 30.0, 30.0));
//! ```

use alloc::vec::Vec;

use whereat::at;

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, validate_bounds, validate_padding};
use crate::orientation::Orientation;
use crate::rectangulation::{Node, Rectangulation};

/// An arrangement of slots within a bounding rectangle.
///
/// Slots are listed in the rectangulation's traversal order (depth-first,
/// left to right), which is the order items were substituted in.
#[derive(Clone, Debug, PartialEq)]
pub struct AspectLayout {
    /// Slot rectangles, padding already removed.
    pub slots: Vec<Rect>,
    /// Height per unit of width of the outer rectangle.
    pub aspect: f64,
    /// Height change per unit of padding at a fixed width.
    pub growth: f64,
    /// Outer height.
    pub height: f64,
    /// Outer width.
    pub width: f64,
    /// Padding the layout was computed with.
    pub padding: f64,
}

impl AspectLayout {
    pub fn height_for_width(&self, width: f64) -> f64 {
        self.aspect * width + self.growth * self.padding
    }

    pub fn width_for_height(&self, height: f64) -> f64 {
        (height - self.growth * self.padding) / self.aspect
    }

    /// The outer rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }
}

impl Rectangulation {
    /// Position every slot inside `bounds`.
    ///
    /// Each slot is inset by `padding / 2` on every edge, so neighbours end
    /// up `padding` apart. With `interior_padding_only`, the outer edges get
    /// no margin: slots touch `bounds` and only the gaps between them remain.
    /// The reported width and height then describe the realized box.
    ///
    /// Fails with [`LayoutError::InvalidPadding`] when the padding leaves any
    /// slot without area inside `bounds`.
    pub fn layout(
        &self,
        bounds: Rect,
        padding: f64,
        interior_padding_only: bool,
    ) -> Result<AspectLayout> {
        validate_bounds(&bounds)?;
        let padding = validate_padding(padding)?;

        let half = padding / 2.0;
        let bounds = if interior_padding_only {
            bounds.inflate(half)
        } else {
            bounds
        };
        let factors = self.aspect_factors();
        let outer = factors.inscribe(bounds, padding);

        let mut slots = Vec::with_capacity(self.leaf_count());
        self.place(outer, padding, &mut slots);
        if slots.iter().any(|slot| slot.width <= 0.0 || slot.height <= 0.0) {
            return Err(at!(LayoutError::InvalidPadding));
        }

        let size = if interior_padding_only {
            outer.deflate(half)
        } else {
            outer
        };
        Ok(AspectLayout {
            slots,
            aspect: factors.aspect,
            growth: factors.growth,
            height: size.height,
            width: size.width,
            padding,
        })
    }

    /// Slot rectangles for already-validated inputs.
    pub(crate) fn slots(&self, bounds: Rect, padding: f64) -> Vec<Rect> {
        let outer = self.inscribe(bounds, padding);
        let mut slots = Vec::with_capacity(self.leaf_count());
        self.place(outer, padding, &mut slots);
        slots
    }

    /// Lay children out inside `outer`, which already satisfies this node's
    /// factors.
    fn place(&self, outer: Rect, padding: f64, slots: &mut Vec<Rect>) {
        let mut edge = match self.orientation() {
            Orientation::Horizontal => outer.left,
            Orientation::Vertical => outer.top,
        };
        for child in self.children() {
            let factors = child.aspect_factors();
            let cell = match self.orientation() {
                Orientation::Horizontal => {
                    let width = factors.width_for_height(outer.height, padding);
                    let cell = Rect::new(outer.top, edge, width, outer.height);
                    edge += width;
                    cell
                }
                Orientation::Vertical => {
                    let height = factors.height_for_width(outer.width, padding);
                    let cell = Rect::new(edge, outer.left, outer.width, height);
                    edge += height;
                    cell
                }
            };
            match child {
                Node::Leaf(_) => slots.push(cell.deflate(padding / 2.0)),
                Node::Split(sub) => sub.place(sub.inscribe(cell, padding), padding, slots),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape;
    use num_traits::Float;

    const EPS: f64 = 1e-9;

    fn rect(shape: &[crate::Shape]) -> Rectangulation {
        Rectangulation::new(shape).unwrap()
    }

    fn assert_rect(actual: Rect, expected: Rect) {
        let close = |a: f64, b: f64| Float::abs(a - b) < EPS;
        assert!(
            close(actual.top, expected.top)
                && close(actual.left, expected.left)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn layout_row_no_padding() {
        let layout = rect(&shape![1, 1])
            .layout(Rect::sized(100.0, 100.0), 0.0, false)
            .unwrap();
        assert_eq!(layout.aspect, 0.5);
        assert_eq!(layout.growth, 0.0);
        assert_eq!(
            layout.slots,
            [Rect::new(0.0, 0.0, 50.0, 50.0), Rect::new(0.0, 50.0, 50.0, 50.0)]
        );
        assert_eq!((layout.width, layout.height), (100.0, 50.0));
    }

    #[test]
    fn layout_row_with_padding() {
        let layout = rect(&shape![1, 1])
            .layout(Rect::sized(100.0, 100.0), 20.0, false)
            .unwrap();
        assert_eq!(
            layout.slots,
            [Rect::new(10.0, 10.0, 30.0, 30.0), Rect::new(10.0, 60.0, 30.0, 30.0)]
        );
        assert_eq!(layout.padding, 20.0);
    }

    #[test]
    fn layout_row_interior_padding_only() {
        let layout = rect(&shape![1, 1])
            .layout(Rect::sized(100.0, 100.0), 20.0, true)
            .unwrap();
        assert_eq!(layout.aspect, 0.5);
        assert_eq!(layout.growth, 0.0);
        assert_eq!(
            layout.slots,
            [Rect::new(0.0, 0.0, 40.0, 40.0), Rect::new(0.0, 60.0, 40.0, 40.0)]
        );
        // The realized box is exactly the requested width, with no margin.
        assert_eq!((layout.width, layout.height), (100.0, 40.0));
    }

    #[test]
    fn layout_two_portraits_with_padding() {
        // Height/width 2 and 3.
        let layout = rect(&shape![0.5, 1.0 / 3.0])
            .layout(Rect::sized(90.0, 90.0), 20.0, false)
            .unwrap();
        assert!(Float::abs(layout.aspect - 6.0 / 5.0) < EPS);
        assert!(Float::abs(layout.growth + 1.4) < EPS);
        assert_rect(layout.slots[0], Rect::new(10.0, 10.0, 30.0, 60.0));
        assert_rect(layout.slots[1], Rect::new(10.0, 60.0, 20.0, 60.0));
    }

    #[test]
    fn layout_nested_column() {
        let layout = rect(&shape![[0.5, 1], 1])
            .layout(Rect::sized(460.0, 460.0), 20.0, false)
            .unwrap();
        assert!(Float::abs(layout.aspect - 0.75) < EPS);
        assert!(Float::abs(layout.growth + 0.25) < EPS);
        assert_eq!(layout.slots.len(), 3);
        assert_rect(layout.slots[0], Rect::new(10.0, 10.0, 100.0, 200.0));
        assert_rect(layout.slots[1], Rect::new(230.0, 10.0, 100.0, 100.0));
        assert_rect(layout.slots[2], Rect::new(10.0, 130.0, 320.0, 320.0));
    }

    #[test]
    fn layout_height_binds() {
        // A tall stack in a wide box: height is the binding dimension.
        let layout = rect(&shape![[1, 1]])
            .layout(Rect::new(5.0, 5.0, 400.0, 100.0), 0.0, false)
            .unwrap();
        assert_rect(layout.slots[0], Rect::new(5.0, 5.0, 50.0, 50.0));
        assert_rect(layout.slots[1], Rect::new(55.0, 5.0, 50.0, 50.0));
        assert_eq!((layout.width, layout.height), (50.0, 100.0));
    }

    #[test]
    fn slots_preserve_aspects_and_do_not_overlap() {
        let r = rect(&shape![1.5, [0.75, [1.0, 1.25]], 0.8]);
        let bounds = Rect::sized(1000.0, 600.0);
        let layout = r.layout(bounds, 12.0, true).unwrap();
        let aspects = r.aspects();
        assert_eq!(layout.slots.len(), aspects.len());
        for (slot, aspect) in layout.slots.iter().zip(&aspects) {
            assert!(Float::abs(slot.aspect() - aspect) < 1e-6, "{slot:?} vs {aspect}");
            assert!(bounds.contains(slot, 1e-6), "{slot:?} escapes {bounds:?}");
        }
        for (i, a) in layout.slots.iter().enumerate() {
            for b in &layout.slots[i + 1..] {
                assert!(!a.overlaps(b, 1e-6), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn height_for_width_round_trip() {
        let layout = rect(&shape![[0.5, 1], 1])
            .layout(Rect::sized(460.0, 460.0), 20.0, false)
            .unwrap();
        assert!(Float::abs(layout.height_for_width(layout.width) - layout.height) < EPS);
        assert!(Float::abs(layout.width_for_height(layout.height) - layout.width) < EPS);
        assert!(Float::abs(layout.height_for_width(460.0) - 340.0) < EPS);
        assert_eq!(layout.bounds(), Rect::sized(layout.width, layout.height));
    }

    #[test]
    fn layout_rejects_bad_inputs() {
        let r = rect(&shape![1, 1]);
        let err = r.layout(Rect::sized(100.0, 100.0), -1.0, false).unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidPadding);
        let err = r.layout(Rect::sized(0.0, 100.0), 0.0, false).unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidBounds);
        let err = r.layout(Rect::sized(100.0, f64::NAN), 0.0, false).unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidBounds);
    }

    #[test]
    fn layout_rejects_padding_that_swallows_slots() {
        let r = rect(&shape![[1, 1], 0.5]);
        let err = r.layout(Rect::sized(100.0, 100.0), 300.0, true).unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidPadding);
        let err = rect(&shape![1, 1])
            .layout(Rect::sized(100.0, 100.0), 150.0, false)
            .unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidPadding);
        // Just under the limit every slot keeps some area.
        let layout = rect(&shape![1, 1])
            .layout(Rect::sized(100.0, 100.0), 49.0, false)
            .unwrap();
        assert!(layout.slots.iter().all(|s| s.width > 0.0 && s.height > 0.0));
    }
}
