//! Rectangulation trees: construction, aspect algebra, symmetry, and
//! substitution.
//!
//! A rectangulation divides a rectangle into sub-rectangles. Rectangles that
//! are not subdivided further are slots, each with a target aspect ratio.
//! Every node lays its children out along one [`Orientation`], and every
//! nested node uses the perpendicular orientation of its parent.
//!
//! Shapes are written in a compact array notation. The root is horizontal,
//! so `[1, [1, 1]]` is one square on the left of a vertical stack of two
//! squares, and `[[1, 1]]` is two squares stacked.
//!
//! # Example
//!
//! ```
//! use rectlayout::{Rectangulation, shape};
//!
//! let rect = Rectangulation::new(&shape![1, [1, [1, 1]]]).unwrap();
//! assert!((rect.aspect() - 5.0 / 3.0).abs() < 1e-9);
//! assert_eq!(rect.leaf_count(), 4);
//! assert_eq!(rect.to_string(), "[1, [1, [1, 1]]]");
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use whereat::at;

use crate::error::{LayoutError, Result};
use crate::geometry::{AspectFactors, Rect, validate_aspect, validate_aspects};
use crate::orientation::Orientation;

/// Smallest ratio between two slot aspects that still counts as a mirror.
const MIRROR_TOLERANCE: f64 = 0.99;

/// Owned nested-array form of a rectangulation.
///
/// A list of shapes is one node's children: each is either a slot with a
/// width / height aspect ratio or a group that becomes a nested node with
/// the perpendicular orientation.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Slot(f64),
    Group(Vec<Shape>),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(aspect) => write!(f, "{aspect}"),
            Self::Group(items) => write_list(f, items),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Shape]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Build a `Vec<Shape>` from bracket notation.
///
/// Leaves are numeric expressions without a leading minus sign.
///
/// ```
/// use rectlayout::{Shape, shape};
///
/// let s = shape![4.0 / 3.0, [1, 2]];
/// assert_eq!(s[1], Shape::Group(vec![Shape::Slot(1.0), Shape::Slot(2.0)]));
/// ```
#[macro_export]
macro_rules! shape {
    (@item [$($inner:tt)*]) => {
        $crate::Shape::Group($crate::shape![$($inner)*])
    };
    (@item $($leaf:tt)+) => {
        $crate::Shape::Slot(($($leaf)+) as f64)
    };
    (@list [$($done:expr,)*] []) => {
        $crate::__private::vec![$($done),*]
    };
    (@list [$($done:expr,)*] [$($cur:tt)+] , $($rest:tt)*) => {
        $crate::shape!(@list [$($done,)* $crate::shape!(@item $($cur)+),] [] $($rest)*)
    };
    (@list [$($done:expr,)*] [$($cur:tt)+]) => {
        $crate::shape!(@list [$($done,)* $crate::shape!(@item $($cur)+),] [])
    };
    (@list [$($done:expr,)*] [$($cur:tt)*] $next:tt $($rest:tt)*) => {
        $crate::shape!(@list [$($done,)*] [$($cur)* $next] $($rest)*)
    };
    ($($items:tt)*) => {
        $crate::shape!(@list [] [] $($items)*)
    };
}

/// One child of a rectangulation node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A slot with a width / height aspect ratio.
    Leaf(f64),
    /// A nested rectangulation, perpendicular to its parent.
    Split(Rectangulation),
}

impl Node {
    pub fn aspect_factors(&self) -> AspectFactors {
        match self {
            Self::Leaf(aspect) => AspectFactors::slot(*aspect),
            Self::Split(sub) => sub.aspect_factors(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(sub) => sub.leaf_count(),
        }
    }

    /// Compare two children for the mirror test.
    fn mirrors(&self, other: &Node, axis: Orientation) -> bool {
        match (self, other) {
            (Self::Split(a), Self::Split(b)) => a.mirrors(b, axis),
            (Self::Leaf(a), Self::Leaf(b)) => a.min(*b) / a.max(*b) >= MIRROR_TOLERANCE,
            _ => false,
        }
    }
}

/// An immutable rectangulation node: an orientation and its ordered,
/// non-empty children.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangulation {
    orientation: Orientation,
    children: Vec<Node>,
}

impl Rectangulation {
    /// Build a horizontal rectangulation from array notation.
    pub fn new(shape: &[Shape]) -> Result<Self> {
        Self::with_orientation(shape, Orientation::Horizontal)
    }

    /// Build a rectangulation with the given root orientation.
    ///
    /// Fails on empty groups and on slot aspects that are not positive and
    /// finite.
    pub fn with_orientation(shape: &[Shape], orientation: Orientation) -> Result<Self> {
        let mut leaf_index = 0;
        Self::build(shape, orientation, &mut leaf_index)
    }

    fn build(shape: &[Shape], orientation: Orientation, leaf_index: &mut usize) -> Result<Self> {
        if shape.is_empty() {
            return Err(at!(LayoutError::EmptyGroup));
        }
        let children = shape
            .iter()
            .map(|item| match item {
                Shape::Slot(aspect) => {
                    let aspect = validate_aspect(*aspect, *leaf_index)?;
                    *leaf_index += 1;
                    Ok(Node::Leaf(aspect))
                }
                Shape::Group(items) => Ok(Node::Split(Self::build(
                    items,
                    orientation.perpendicular(),
                    leaf_index,
                )?)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            orientation,
            children,
        })
    }

    /// Build from already-constructed children.
    ///
    /// Nested children must be perpendicular to `orientation`.
    pub fn from_children(orientation: Orientation, children: Vec<Node>) -> Result<Self> {
        if children.is_empty() {
            return Err(at!(LayoutError::EmptyGroup));
        }
        let mut leaf_index = 0;
        for child in &children {
            match child {
                Node::Leaf(aspect) => {
                    validate_aspect(*aspect, leaf_index)?;
                }
                Node::Split(sub) if sub.orientation == orientation => {
                    return Err(at!(LayoutError::OrientationMismatch));
                }
                Node::Split(_) => {}
            }
            leaf_index += child.leaf_count();
        }
        Ok(Self {
            orientation,
            children,
        })
    }

    /// Construct without validation. Callers guarantee non-empty children,
    /// alternating orientation, and positive aspects.
    pub(crate) fn from_parts(orientation: Orientation, children: Vec<Node>) -> Self {
        Self {
            orientation,
            children,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of slots in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(Node::leaf_count).sum()
    }

    /// Slot aspects in traversal order (depth-first, left to right).
    pub fn aspects(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_aspects(&mut out);
        out
    }

    fn collect_aspects(&self, out: &mut Vec<f64>) {
        for child in &self.children {
            match child {
                Node::Leaf(aspect) => out.push(*aspect),
                Node::Split(sub) => sub.collect_aspects(out),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Aspect algebra
    // ------------------------------------------------------------------------

    /// Width / height of the whole rectangulation, ignoring padding.
    pub fn aspect(&self) -> f64 {
        self.aspect_factors().ratio()
    }

    /// Height-for-width factors of the whole rectangulation.
    ///
    /// Children are folded left to right, which fixes the order of floating
    /// point reduction for nodes with more than two children.
    pub fn aspect_factors(&self) -> AspectFactors {
        let combine = match self.orientation {
            Orientation::Horizontal => AspectFactors::beside,
            Orientation::Vertical => AspectFactors::stacked,
        };
        self.children
            .iter()
            .map(Node::aspect_factors)
            .reduce(combine)
            .unwrap_or(AspectFactors::slot(1.0)) // children are never empty
    }

    /// Largest outer rectangle for this rectangulation inside `bounds`.
    pub fn inscribe(&self, bounds: Rect, padding: f64) -> Rect {
        self.aspect_factors().inscribe(bounds, padding)
    }

    // ------------------------------------------------------------------------
    // Substitution
    // ------------------------------------------------------------------------

    /// A new tree in which slot `i` (traversal order) has `values[i]` as its
    /// aspect ratio.
    ///
    /// `values` must hold exactly one positive, finite ratio per slot.
    pub fn replace_aspects(&self, values: &[f64]) -> Result<Self> {
        let expected = self.leaf_count();
        if values.len() != expected {
            return Err(at!(LayoutError::AspectCountMismatch {
                expected,
                actual: values.len(),
            }));
        }
        validate_aspects(values)?;
        let (replaced, _) = self.substitute(values, 0, expected)?;
        Ok(replaced)
    }

    /// Substitute starting at `cursor`; returns the new subtree and the
    /// cursor just past its last slot.
    fn substitute(&self, values: &[f64], cursor: usize, expected: usize) -> Result<(Self, usize)> {
        let mut cursor = cursor;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let node = match child {
                Node::Leaf(_) => {
                    let value = values.get(cursor).copied().ok_or_else(|| {
                        at!(LayoutError::AspectCountMismatch {
                            expected,
                            actual: values.len(),
                        })
                    })?;
                    cursor += 1;
                    Node::Leaf(value)
                }
                Node::Split(sub) => {
                    let (replaced, next) = sub.substitute(values, cursor, expected)?;
                    cursor = next;
                    Node::Split(replaced)
                }
            };
            children.push(node);
        }
        Ok((Self::from_parts(self.orientation, children), cursor))
    }

    // ------------------------------------------------------------------------
    // Symmetry
    // ------------------------------------------------------------------------

    /// Whether this rectangulation mirrors `other` with respect to `axis`.
    ///
    /// Children of nodes laid out along `axis` are compared in order; all
    /// others are compared against the reversed children of `other`. Slots
    /// match when their aspects are within 1% of each other.
    pub fn mirrors(&self, other: &Rectangulation, axis: Orientation) -> bool {
        if self.orientation != other.orientation || self.children.len() != other.children.len() {
            return false;
        }
        let ours = self.children.iter();
        if axis == self.orientation {
            ours.zip(other.children.iter())
                .all(|(a, b)| a.mirrors(b, axis))
        } else {
            ours.zip(other.children.iter().rev())
                .all(|(a, b)| a.mirrors(b, axis))
        }
    }

    /// Whether the rectangulation is non-trivially symmetric across either
    /// axis.
    ///
    /// A flat horizontal row like `[1, 2]` mirrors itself along its own axis,
    /// but that is uninteresting and does not count; along its own axis a
    /// horizontal node must contain a nested rectangulation. `[1, 2, 1]` is
    /// symmetric through the perpendicular axis.
    pub fn symmetric(&self) -> bool {
        let mut along_orientation = self.mirrors(self, self.orientation);
        if along_orientation && self.orientation.is_horizontal() {
            along_orientation = self.children.iter().any(|child| !child.is_leaf());
        }
        along_orientation || self.mirrors(self, self.orientation.perpendicular())
    }

    // ------------------------------------------------------------------------
    // Array notation
    // ------------------------------------------------------------------------

    /// Array notation for this rectangulation; the inverse of
    /// [`Rectangulation::new`] for horizontal roots.
    ///
    /// A vertical root is returned wrapped in a single group.
    pub fn to_array(&self) -> Vec<Shape> {
        let items = self.items();
        match self.orientation {
            Orientation::Horizontal => items,
            Orientation::Vertical => vec![Shape::Group(items)],
        }
    }

    fn items(&self) -> Vec<Shape> {
        self.children
            .iter()
            .map(|child| match child {
                Node::Leaf(aspect) => Shape::Slot(*aspect),
                Node::Split(sub) => Shape::Group(sub.items()),
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Scoring metrics
    // ------------------------------------------------------------------------

    /// Fraction of a bounds rectangle with the given aspect covered by this
    /// rectangulation once inscribed, padding ignored.
    ///
    /// Reaches 1.0 when the aspects match and falls off symmetrically in
    /// either direction.
    pub fn area_covered(&self, bounds_aspect: f64) -> f64 {
        let bounds = Rect::sized(bounds_aspect, 1.0);
        self.inscribe(bounds, 0.0).area() / bounds.area()
    }

    /// Area of the smallest slot relative to an even share of the bounds.
    ///
    /// With six slots, 1.0 means the smallest slot covers a full sixth of the
    /// bounds, which is the most the smallest slot can get.
    pub fn area_covered_by_smallest_item(&self, bounds_aspect: f64) -> f64 {
        let bounds = Rect::sized(bounds_aspect, 1.0);
        let slots = self.slots(bounds, 0.0);
        let smallest = slots
            .iter()
            .map(Rect::area)
            .fold(f64::INFINITY, f64::min);
        smallest / (bounds.area() / slots.len() as f64)
    }
}

impl fmt::Display for Rectangulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.to_array())
    }
}
