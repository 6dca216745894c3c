//! Precomputed catalog of rectangulation templates.
//!
//! A template is a rectangulation shape whose slots are unit placeholders.
//! The selector substitutes real aspect ratios into every template with the
//! right slot count and scores the results.
//!
//! The [`STANDARD`] catalog lists every alternating-orientation shape with a
//! horizontal root for 1 through 6 slots. Within a slot count, shapes split
//! side by side come first, followed by shapes that stack at the root. Ties
//! during selection go to the earlier template, so this order is part of
//! the catalog's contract.

use alloc::vec::Vec;

use crate::error::Result;
use crate::orientation::Orientation;
use crate::rectangulation::{Node, Rectangulation, Shape};

/// One child of a template node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateNode {
    /// A unit placeholder slot.
    Slot,
    /// A nested group, perpendicular to its parent.
    Split(&'static [TemplateNode]),
}

impl TemplateNode {
    fn slot_count(&self) -> usize {
        match self {
            Self::Slot => 1,
            Self::Split(nodes) => count_slots(nodes),
        }
    }
}

fn count_slots(nodes: &[TemplateNode]) -> usize {
    nodes.iter().map(TemplateNode::slot_count).sum()
}

/// An immutable template shape with a horizontal root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template {
    nodes: &'static [TemplateNode],
}

impl Template {
    /// Create a template from the root's children. Must be non-empty, and
    /// every [`TemplateNode::Split`] must be non-empty too.
    pub const fn new(nodes: &'static [TemplateNode]) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &'static [TemplateNode] {
        self.nodes
    }

    pub fn slot_count(&self) -> usize {
        count_slots(self.nodes)
    }

    /// Array notation with unit aspects.
    pub fn shape(&self) -> Vec<Shape> {
        fn convert(nodes: &[TemplateNode]) -> Vec<Shape> {
            nodes
                .iter()
                .map(|node| match node {
                    TemplateNode::Slot => Shape::Slot(1.0),
                    TemplateNode::Split(inner) => Shape::Group(convert(inner)),
                })
                .collect()
        }
        convert(self.nodes)
    }

    /// The template as a rectangulation of unit slots.
    pub fn rectangulation(&self) -> Rectangulation {
        fn build(nodes: &[TemplateNode], orientation: Orientation) -> Rectangulation {
            let children = nodes
                .iter()
                .map(|node| match node {
                    TemplateNode::Slot => Node::Leaf(1.0),
                    TemplateNode::Split(inner) => {
                        Node::Split(build(inner, orientation.perpendicular()))
                    }
                })
                .collect();
            Rectangulation::from_parts(orientation, children)
        }
        build(self.nodes, Orientation::Horizontal)
    }

    /// Substitute `aspects` into the template's slots in traversal order.
    pub fn instantiate(&self, aspects: &[f64]) -> Result<Rectangulation> {
        self.rectangulation().replace_aspects(aspects)
    }
}

/// Write a [`Template`] in bracket notation, with `1` for every slot.
///
/// ```
/// use rectlayout::template;
///
/// let t = template![1, [1, 1]];
/// assert_eq!(t.slot_count(), 3);
/// ```
#[macro_export]
macro_rules! template {
    (@node 1) => {
        $crate::TemplateNode::Slot
    };
    (@node [$($inner:tt),+ $(,)?]) => {
        $crate::TemplateNode::Split(&[$($crate::template!(@node $inner)),+])
    };
    ($($node:tt),+ $(,)?) => {
        $crate::Template::new(&[$($crate::template!(@node $node)),+])
    };
}

/// Templates grouped by slot count.
#[derive(Copy, Clone, Debug)]
pub struct Catalog {
    by_slot_count: &'static [&'static [Template]],
}

impl Catalog {
    /// Create a catalog where entry `n` lists the templates with `n` slots.
    pub const fn new(by_slot_count: &'static [&'static [Template]]) -> Self {
        Self { by_slot_count }
    }

    /// Templates with exactly `slot_count` slots, in catalog order.
    ///
    /// Empty when the catalog has none, including for zero slots.
    pub fn templates(&self, slot_count: usize) -> impl Iterator<Item = &'static Template> {
        self.by_slot_count
            .get(slot_count)
            .copied()
            .unwrap_or(&[])
            .iter()
            .filter(move |template| template.slot_count() == slot_count)
    }

    /// Largest slot count with at least one template.
    pub fn max_slot_count(&self) -> usize {
        (0..self.by_slot_count.len())
            .rev()
            .find(|&n| self.templates(n).next().is_some())
            .unwrap_or(0)
    }

    /// Every template, ordered by slot count.
    pub fn iter(&self) -> impl Iterator<Item = &'static Template> {
        self.by_slot_count.iter().flat_map(|templates| templates.iter())
    }
}

/// Every slicing shape for 1 through 6 slots.
pub static STANDARD: Catalog = Catalog::new(STANDARD_TEMPLATES);

#[rustfmt::skip]
static STANDARD_TEMPLATES: &[&[Template]] = &[
    // 0 slots
    &[],
    // 1 slot
    &[
        template![1],
    ],
    // 2 slots
    &[
        template![1, 1],
        template![[1, 1]],
    ],
    // 3 slots
    &[
        template![1, 1, 1],
        template![1, [1, 1]],
        template![[1, 1], 1],
        template![[1, 1, 1]],
        template![[1, [1, 1]]],
        template![[[1, 1], 1]],
    ],
    // 4 slots
    &[
        template![1, 1, 1, 1],
        template![1, 1, [1, 1]],
        template![1, [1, 1], 1],
        template![1, [1, 1, 1]],
        template![1, [1, [1, 1]]],
        template![1, [[1, 1], 1]],
        template![[1, 1], 1, 1],
        template![[1, 1], [1, 1]],
        template![[1, 1, 1], 1],
        template![[1, [1, 1]], 1],
        template![[[1, 1], 1], 1],
        template![[1, 1, 1, 1]],
        template![[1, 1, [1, 1]]],
        template![[1, [1, 1], 1]],
        template![[1, [1, 1, 1]]],
        template![[1, [1, [1, 1]]]],
        template![[1, [[1, 1], 1]]],
        template![[[1, 1], 1, 1]],
        template![[[1, 1], [1, 1]]],
        template![[[1, 1, 1], 1]],
        template![[[1, [1, 1]], 1]],
        template![[[[1, 1], 1], 1]],
    ],
    // 5 slots
    &[
        template![1, 1, 1, 1, 1],
        template![1, 1, 1, [1, 1]],
        template![1, 1, [1, 1], 1],
        template![1, 1, [1, 1, 1]],
        template![1, 1, [1, [1, 1]]],
        template![1, 1, [[1, 1], 1]],
        template![1, [1, 1], 1, 1],
        template![1, [1, 1], [1, 1]],
        template![1, [1, 1, 1], 1],
        template![1, [1, [1, 1]], 1],
        template![1, [[1, 1], 1], 1],
        template![1, [1, 1, 1, 1]],
        template![1, [1, 1, [1, 1]]],
        template![1, [1, [1, 1], 1]],
        template![1, [1, [1, 1, 1]]],
        template![1, [1, [1, [1, 1]]]],
        template![1, [1, [[1, 1], 1]]],
        template![1, [[1, 1], 1, 1]],
        template![1, [[1, 1], [1, 1]]],
        template![1, [[1, 1, 1], 1]],
        template![1, [[1, [1, 1]], 1]],
        template![1, [[[1, 1], 1], 1]],
        template![[1, 1], 1, 1, 1],
        template![[1, 1], 1, [1, 1]],
        template![[1, 1], [1, 1], 1],
        template![[1, 1], [1, 1, 1]],
        template![[1, 1], [1, [1, 1]]],
        template![[1, 1], [[1, 1], 1]],
        template![[1, 1, 1], 1, 1],
        template![[1, [1, 1]], 1, 1],
        template![[[1, 1], 1], 1, 1],
        template![[1, 1, 1], [1, 1]],
        template![[1, [1, 1]], [1, 1]],
        template![[[1, 1], 1], [1, 1]],
        template![[1, 1, 1, 1], 1],
        template![[1, 1, [1, 1]], 1],
        template![[1, [1, 1], 1], 1],
        template![[1, [1, 1, 1]], 1],
        template![[1, [1, [1, 1]]], 1],
        template![[1, [[1, 1], 1]], 1],
        template![[[1, 1], 1, 1], 1],
        template![[[1, 1], [1, 1]], 1],
        template![[[1, 1, 1], 1], 1],
        template![[[1, [1, 1]], 1], 1],
        template![[[[1, 1], 1], 1], 1],
        template![[1, 1, 1, 1, 1]],
        template![[1, 1, 1, [1, 1]]],
        template![[1, 1, [1, 1], 1]],
        template![[1, 1, [1, 1, 1]]],
        template![[1, 1, [1, [1, 1]]]],
        template![[1, 1, [[1, 1], 1]]],
        template![[1, [1, 1], 1, 1]],
        template![[1, [1, 1], [1, 1]]],
        template![[1, [1, 1, 1], 1]],
        template![[1, [1, [1, 1]], 1]],
        template![[1, [[1, 1], 1], 1]],
        template![[1, [1, 1, 1, 1]]],
        template![[1, [1, 1, [1, 1]]]],
        template![[1, [1, [1, 1], 1]]],
        template![[1, [1, [1, 1, 1]]]],
        template![[1, [1, [1, [1, 1]]]]],
        template![[1, [1, [[1, 1], 1]]]],
        template![[1, [[1, 1], 1, 1]]],
        template![[1, [[1, 1], [1, 1]]]],
        template![[1, [[1, 1, 1], 1]]],
        template![[1, [[1, [1, 1]], 1]]],
        template![[1, [[[1, 1], 1], 1]]],
        template![[[1, 1], 1, 1, 1]],
        template![[[1, 1], 1, [1, 1]]],
        template![[[1, 1], [1, 1], 1]],
        template![[[1, 1], [1, 1, 1]]],
        template![[[1, 1], [1, [1, 1]]]],
        template![[[1, 1], [[1, 1], 1]]],
        template![[[1, 1, 1], 1, 1]],
        template![[[1, [1, 1]], 1, 1]],
        template![[[[1, 1], 1], 1, 1]],
        template![[[1, 1, 1], [1, 1]]],
        template![[[1, [1, 1]], [1, 1]]],
        template![[[[1, 1], 1], [1, 1]]],
        template![[[1, 1, 1, 1], 1]],
        template![[[1, 1, [1, 1]], 1]],
        template![[[1, [1, 1], 1], 1]],
        template![[[1, [1, 1, 1]], 1]],
        template![[[1, [1, [1, 1]]], 1]],
        template![[[1, [[1, 1], 1]], 1]],
        template![[[[1, 1], 1, 1], 1]],
        template![[[[1, 1], [1, 1]], 1]],
        template![[[[1, 1, 1], 1], 1]],
        template![[[[1, [1, 1]], 1], 1]],
        template![[[[[1, 1], 1], 1], 1]],
    ],
    // 6 slots
    &[
        template![1, 1, 1, 1, 1, 1],
        template![1, 1, 1, 1, [1, 1]],
        template![1, 1, 1, [1, 1], 1],
        template![1, 1, 1, [1, 1, 1]],
        template![1, 1, 1, [1, [1, 1]]],
        template![1, 1, 1, [[1, 1], 1]],
        template![1, 1, [1, 1], 1, 1],
        template![1, 1, [1, 1], [1, 1]],
        template![1, 1, [1, 1, 1], 1],
        template![1, 1, [1, [1, 1]], 1],
        template![1, 1, [[1, 1], 1], 1],
        template![1, 1, [1, 1, 1, 1]],
        template![1, 1, [1, 1, [1, 1]]],
        template![1, 1, [1, [1, 1], 1]],
        template![1, 1, [1, [1, 1, 1]]],
        template![1, 1, [1, [1, [1, 1]]]],
        template![1, 1, [1, [[1, 1], 1]]],
        template![1, 1, [[1, 1], 1, 1]],
        template![1, 1, [[1, 1], [1, 1]]],
        template![1, 1, [[1, 1, 1], 1]],
        template![1, 1, [[1, [1, 1]], 1]],
        template![1, 1, [[[1, 1], 1], 1]],
        template![1, [1, 1], 1, 1, 1],
        template![1, [1, 1], 1, [1, 1]],
        template![1, [1, 1], [1, 1], 1],
        template![1, [1, 1], [1, 1, 1]],
        template![1, [1, 1], [1, [1, 1]]],
        template![1, [1, 1], [[1, 1], 1]],
        template![1, [1, 1, 1], 1, 1],
        template![1, [1, [1, 1]], 1, 1],
        template![1, [[1, 1], 1], 1, 1],
        template![1, [1, 1, 1], [1, 1]],
        template![1, [1, [1, 1]], [1, 1]],
        template![1, [[1, 1], 1], [1, 1]],
        template![1, [1, 1, 1, 1], 1],
        template![1, [1, 1, [1, 1]], 1],
        template![1, [1, [1, 1], 1], 1],
        template![1, [1, [1, 1, 1]], 1],
        template![1, [1, [1, [1, 1]]], 1],
        template![1, [1, [[1, 1], 1]], 1],
        template![1, [[1, 1], 1, 1], 1],
        template![1, [[1, 1], [1, 1]], 1],
        template![1, [[1, 1, 1], 1], 1],
        template![1, [[1, [1, 1]], 1], 1],
        template![1, [[[1, 1], 1], 1], 1],
        template![1, [1, 1, 1, 1, 1]],
        template![1, [1, 1, 1, [1, 1]]],
        template![1, [1, 1, [1, 1], 1]],
        template![1, [1, 1, [1, 1, 1]]],
        template![1, [1, 1, [1, [1, 1]]]],
        template![1, [1, 1, [[1, 1], 1]]],
        template![1, [1, [1, 1], 1, 1]],
        template![1, [1, [1, 1], [1, 1]]],
        template![1, [1, [1, 1, 1], 1]],
        template![1, [1, [1, [1, 1]], 1]],
        template![1, [1, [[1, 1], 1], 1]],
        template![1, [1, [1, 1, 1, 1]]],
        template![1, [1, [1, 1, [1, 1]]]],
        template![1, [1, [1, [1, 1], 1]]],
        template![1, [1, [1, [1, 1, 1]]]],
        template![1, [1, [1, [1, [1, 1]]]]],
        template![1, [1, [1, [[1, 1], 1]]]],
        template![1, [1, [[1, 1], 1, 1]]],
        template![1, [1, [[1, 1], [1, 1]]]],
        template![1, [1, [[1, 1, 1], 1]]],
        template![1, [1, [[1, [1, 1]], 1]]],
        template![1, [1, [[[1, 1], 1], 1]]],
        template![1, [[1, 1], 1, 1, 1]],
        template![1, [[1, 1], 1, [1, 1]]],
        template![1, [[1, 1], [1, 1], 1]],
        template![1, [[1, 1], [1, 1, 1]]],
        template![1, [[1, 1], [1, [1, 1]]]],
        template![1, [[1, 1], [[1, 1], 1]]],
        template![1, [[1, 1, 1], 1, 1]],
        template![1, [[1, [1, 1]], 1, 1]],
        template![1, [[[1, 1], 1], 1, 1]],
        template![1, [[1, 1, 1], [1, 1]]],
        template![1, [[1, [1, 1]], [1, 1]]],
        template![1, [[[1, 1], 1], [1, 1]]],
        template![1, [[1, 1, 1, 1], 1]],
        template![1, [[1, 1, [1, 1]], 1]],
        template![1, [[1, [1, 1], 1], 1]],
        template![1, [[1, [1, 1, 1]], 1]],
        template![1, [[1, [1, [1, 1]]], 1]],
        template![1, [[1, [[1, 1], 1]], 1]],
        template![1, [[[1, 1], 1, 1], 1]],
        template![1, [[[1, 1], [1, 1]], 1]],
        template![1, [[[1, 1, 1], 1], 1]],
        template![1, [[[1, [1, 1]], 1], 1]],
        template![1, [[[[1, 1], 1], 1], 1]],
        template![[1, 1], 1, 1, 1, 1],
        template![[1, 1], 1, 1, [1, 1]],
        template![[1, 1], 1, [1, 1], 1],
        template![[1, 1], 1, [1, 1, 1]],
        template![[1, 1], 1, [1, [1, 1]]],
        template![[1, 1], 1, [[1, 1], 1]],
        template![[1, 1], [1, 1], 1, 1],
        template![[1, 1], [1, 1], [1, 1]],
        template![[1, 1], [1, 1, 1], 1],
        template![[1, 1], [1, [1, 1]], 1],
        template![[1, 1], [[1, 1], 1], 1],
        template![[1, 1], [1, 1, 1, 1]],
        template![[1, 1], [1, 1, [1, 1]]],
        template![[1, 1], [1, [1, 1], 1]],
        template![[1, 1], [1, [1, 1, 1]]],
        template![[1, 1], [1, [1, [1, 1]]]],
        template![[1, 1], [1, [[1, 1], 1]]],
        template![[1, 1], [[1, 1], 1, 1]],
        template![[1, 1], [[1, 1], [1, 1]]],
        template![[1, 1], [[1, 1, 1], 1]],
        template![[1, 1], [[1, [1, 1]], 1]],
        template![[1, 1], [[[1, 1], 1], 1]],
        template![[1, 1, 1], 1, 1, 1],
        template![[1, [1, 1]], 1, 1, 1],
        template![[[1, 1], 1], 1, 1, 1],
        template![[1, 1, 1], 1, [1, 1]],
        template![[1, [1, 1]], 1, [1, 1]],
        template![[[1, 1], 1], 1, [1, 1]],
        template![[1, 1, 1], [1, 1], 1],
        template![[1, [1, 1]], [1, 1], 1],
        template![[[1, 1], 1], [1, 1], 1],
        template![[1, 1, 1], [1, 1, 1]],
        template![[1, 1, 1], [1, [1, 1]]],
        template![[1, 1, 1], [[1, 1], 1]],
        template![[1, [1, 1]], [1, 1, 1]],
        template![[1, [1, 1]], [1, [1, 1]]],
        template![[1, [1, 1]], [[1, 1], 1]],
        template![[[1, 1], 1], [1, 1, 1]],
        template![[[1, 1], 1], [1, [1, 1]]],
        template![[[1, 1], 1], [[1, 1], 1]],
        template![[1, 1, 1, 1], 1, 1],
        template![[1, 1, [1, 1]], 1, 1],
        template![[1, [1, 1], 1], 1, 1],
        template![[1, [1, 1, 1]], 1, 1],
        template![[1, [1, [1, 1]]], 1, 1],
        template![[1, [[1, 1], 1]], 1, 1],
        template![[[1, 1], 1, 1], 1, 1],
        template![[[1, 1], [1, 1]], 1, 1],
        template![[[1, 1, 1], 1], 1, 1],
        template![[[1, [1, 1]], 1], 1, 1],
        template![[[[1, 1], 1], 1], 1, 1],
        template![[1, 1, 1, 1], [1, 1]],
        template![[1, 1, [1, 1]], [1, 1]],
        template![[1, [1, 1], 1], [1, 1]],
        template![[1, [1, 1, 1]], [1, 1]],
        template![[1, [1, [1, 1]]], [1, 1]],
        template![[1, [[1, 1], 1]], [1, 1]],
        template![[[1, 1], 1, 1], [1, 1]],
        template![[[1, 1], [1, 1]], [1, 1]],
        template![[[1, 1, 1], 1], [1, 1]],
        template![[[1, [1, 1]], 1], [1, 1]],
        template![[[[1, 1], 1], 1], [1, 1]],
        template![[1, 1, 1, 1, 1], 1],
        template![[1, 1, 1, [1, 1]], 1],
        template![[1, 1, [1, 1], 1], 1],
        template![[1, 1, [1, 1, 1]], 1],
        template![[1, 1, [1, [1, 1]]], 1],
        template![[1, 1, [[1, 1], 1]], 1],
        template![[1, [1, 1], 1, 1], 1],
        template![[1, [1, 1], [1, 1]], 1],
        template![[1, [1, 1, 1], 1], 1],
        template![[1, [1, [1, 1]], 1], 1],
        template![[1, [[1, 1], 1], 1], 1],
        template![[1, [1, 1, 1, 1]], 1],
        template![[1, [1, 1, [1, 1]]], 1],
        template![[1, [1, [1, 1], 1]], 1],
        template![[1, [1, [1, 1, 1]]], 1],
        template![[1, [1, [1, [1, 1]]]], 1],
        template![[1, [1, [[1, 1], 1]]], 1],
        template![[1, [[1, 1], 1, 1]], 1],
        template![[1, [[1, 1], [1, 1]]], 1],
        template![[1, [[1, 1, 1], 1]], 1],
        template![[1, [[1, [1, 1]], 1]], 1],
        template![[1, [[[1, 1], 1], 1]], 1],
        template![[[1, 1], 1, 1, 1], 1],
        template![[[1, 1], 1, [1, 1]], 1],
        template![[[1, 1], [1, 1], 1], 1],
        template![[[1, 1], [1, 1, 1]], 1],
        template![[[1, 1], [1, [1, 1]]], 1],
        template![[[1, 1], [[1, 1], 1]], 1],
        template![[[1, 1, 1], 1, 1], 1],
        template![[[1, [1, 1]], 1, 1], 1],
        template![[[[1, 1], 1], 1, 1], 1],
        template![[[1, 1, 1], [1, 1]], 1],
        template![[[1, [1, 1]], [1, 1]], 1],
        template![[[[1, 1], 1], [1, 1]], 1],
        template![[[1, 1, 1, 1], 1], 1],
        template![[[1, 1, [1, 1]], 1], 1],
        template![[[1, [1, 1], 1], 1], 1],
        template![[[1, [1, 1, 1]], 1], 1],
        template![[[1, [1, [1, 1]]], 1], 1],
        template![[[1, [[1, 1], 1]], 1], 1],
        template![[[[1, 1], 1, 1], 1], 1],
        template![[[[1, 1], [1, 1]], 1], 1],
        template![[[[1, 1, 1], 1], 1], 1],
        template![[[[1, [1, 1]], 1], 1], 1],
        template![[[[[1, 1], 1], 1], 1], 1],
        template![[1, 1, 1, 1, 1, 1]],
        template![[1, 1, 1, 1, [1, 1]]],
        template![[1, 1, 1, [1, 1], 1]],
        template![[1, 1, 1, [1, 1, 1]]],
        template![[1, 1, 1, [1, [1, 1]]]],
        template![[1, 1, 1, [[1, 1], 1]]],
        template![[1, 1, [1, 1], 1, 1]],
        template![[1, 1, [1, 1], [1, 1]]],
        template![[1, 1, [1, 1, 1], 1]],
        template![[1, 1, [1, [1, 1]], 1]],
        template![[1, 1, [[1, 1], 1], 1]],
        template![[1, 1, [1, 1, 1, 1]]],
        template![[1, 1, [1, 1, [1, 1]]]],
        template![[1, 1, [1, [1, 1], 1]]],
        template![[1, 1, [1, [1, 1, 1]]]],
        template![[1, 1, [1, [1, [1, 1]]]]],
        template![[1, 1, [1, [[1, 1], 1]]]],
        template![[1, 1, [[1, 1], 1, 1]]],
        template![[1, 1, [[1, 1], [1, 1]]]],
        template![[1, 1, [[1, 1, 1], 1]]],
        template![[1, 1, [[1, [1, 1]], 1]]],
        template![[1, 1, [[[1, 1], 1], 1]]],
        template![[1, [1, 1], 1, 1, 1]],
        template![[1, [1, 1], 1, [1, 1]]],
        template![[1, [1, 1], [1, 1], 1]],
        template![[1, [1, 1], [1, 1, 1]]],
        template![[1, [1, 1], [1, [1, 1]]]],
        template![[1, [1, 1], [[1, 1], 1]]],
        template![[1, [1, 1, 1], 1, 1]],
        template![[1, [1, [1, 1]], 1, 1]],
        template![[1, [[1, 1], 1], 1, 1]],
        template![[1, [1, 1, 1], [1, 1]]],
        template![[1, [1, [1, 1]], [1, 1]]],
        template![[1, [[1, 1], 1], [1, 1]]],
        template![[1, [1, 1, 1, 1], 1]],
        template![[1, [1, 1, [1, 1]], 1]],
        template![[1, [1, [1, 1], 1], 1]],
        template![[1, [1, [1, 1, 1]], 1]],
        template![[1, [1, [1, [1, 1]]], 1]],
        template![[1, [1, [[1, 1], 1]], 1]],
        template![[1, [[1, 1], 1, 1], 1]],
        template![[1, [[1, 1], [1, 1]], 1]],
        template![[1, [[1, 1, 1], 1], 1]],
        template![[1, [[1, [1, 1]], 1], 1]],
        template![[1, [[[1, 1], 1], 1], 1]],
        template![[1, [1, 1, 1, 1, 1]]],
        template![[1, [1, 1, 1, [1, 1]]]],
        template![[1, [1, 1, [1, 1], 1]]],
        template![[1, [1, 1, [1, 1, 1]]]],
        template![[1, [1, 1, [1, [1, 1]]]]],
        template![[1, [1, 1, [[1, 1], 1]]]],
        template![[1, [1, [1, 1], 1, 1]]],
        template![[1, [1, [1, 1], [1, 1]]]],
        template![[1, [1, [1, 1, 1], 1]]],
        template![[1, [1, [1, [1, 1]], 1]]],
        template![[1, [1, [[1, 1], 1], 1]]],
        template![[1, [1, [1, 1, 1, 1]]]],
        template![[1, [1, [1, 1, [1, 1]]]]],
        template![[1, [1, [1, [1, 1], 1]]]],
        template![[1, [1, [1, [1, 1, 1]]]]],
        template![[1, [1, [1, [1, [1, 1]]]]]],
        template![[1, [1, [1, [[1, 1], 1]]]]],
        template![[1, [1, [[1, 1], 1, 1]]]],
        template![[1, [1, [[1, 1], [1, 1]]]]],
        template![[1, [1, [[1, 1, 1], 1]]]],
        template![[1, [1, [[1, [1, 1]], 1]]]],
        template![[1, [1, [[[1, 1], 1], 1]]]],
        template![[1, [[1, 1], 1, 1, 1]]],
        template![[1, [[1, 1], 1, [1, 1]]]],
        template![[1, [[1, 1], [1, 1], 1]]],
        template![[1, [[1, 1], [1, 1, 1]]]],
        template![[1, [[1, 1], [1, [1, 1]]]]],
        template![[1, [[1, 1], [[1, 1], 1]]]],
        template![[1, [[1, 1, 1], 1, 1]]],
        template![[1, [[1, [1, 1]], 1, 1]]],
        template![[1, [[[1, 1], 1], 1, 1]]],
        template![[1, [[1, 1, 1], [1, 1]]]],
        template![[1, [[1, [1, 1]], [1, 1]]]],
        template![[1, [[[1, 1], 1], [1, 1]]]],
        template![[1, [[1, 1, 1, 1], 1]]],
        template![[1, [[1, 1, [1, 1]], 1]]],
        template![[1, [[1, [1, 1], 1], 1]]],
        template![[1, [[1, [1, 1, 1]], 1]]],
        template![[1, [[1, [1, [1, 1]]], 1]]],
        template![[1, [[1, [[1, 1], 1]], 1]]],
        template![[1, [[[1, 1], 1, 1], 1]]],
        template![[1, [[[1, 1], [1, 1]], 1]]],
        template![[1, [[[1, 1, 1], 1], 1]]],
        template![[1, [[[1, [1, 1]], 1], 1]]],
        template![[1, [[[[1, 1], 1], 1], 1]]],
        template![[[1, 1], 1, 1, 1, 1]],
        template![[[1, 1], 1, 1, [1, 1]]],
        template![[[1, 1], 1, [1, 1], 1]],
        template![[[1, 1], 1, [1, 1, 1]]],
        template![[[1, 1], 1, [1, [1, 1]]]],
        template![[[1, 1], 1, [[1, 1], 1]]],
        template![[[1, 1], [1, 1], 1, 1]],
        template![[[1, 1], [1, 1], [1, 1]]],
        template![[[1, 1], [1, 1, 1], 1]],
        template![[[1, 1], [1, [1, 1]], 1]],
        template![[[1, 1], [[1, 1], 1], 1]],
        template![[[1, 1], [1, 1, 1, 1]]],
        template![[[1, 1], [1, 1, [1, 1]]]],
        template![[[1, 1], [1, [1, 1], 1]]],
        template![[[1, 1], [1, [1, 1, 1]]]],
        template![[[1, 1], [1, [1, [1, 1]]]]],
        template![[[1, 1], [1, [[1, 1], 1]]]],
        template![[[1, 1], [[1, 1], 1, 1]]],
        template![[[1, 1], [[1, 1], [1, 1]]]],
        template![[[1, 1], [[1, 1, 1], 1]]],
        template![[[1, 1], [[1, [1, 1]], 1]]],
        template![[[1, 1], [[[1, 1], 1], 1]]],
        template![[[1, 1, 1], 1, 1, 1]],
        template![[[1, [1, 1]], 1, 1, 1]],
        template![[[[1, 1], 1], 1, 1, 1]],
        template![[[1, 1, 1], 1, [1, 1]]],
        template![[[1, [1, 1]], 1, [1, 1]]],
        template![[[[1, 1], 1], 1, [1, 1]]],
        template![[[1, 1, 1], [1, 1], 1]],
        template![[[1, [1, 1]], [1, 1], 1]],
        template![[[[1, 1], 1], [1, 1], 1]],
        template![[[1, 1, 1], [1, 1, 1]]],
        template![[[1, 1, 1], [1, [1, 1]]]],
        template![[[1, 1, 1], [[1, 1], 1]]],
        template![[[1, [1, 1]], [1, 1, 1]]],
        template![[[1, [1, 1]], [1, [1, 1]]]],
        template![[[1, [1, 1]], [[1, 1], 1]]],
        template![[[[1, 1], 1], [1, 1, 1]]],
        template![[[[1, 1], 1], [1, [1, 1]]]],
        template![[[[1, 1], 1], [[1, 1], 1]]],
        template![[[1, 1, 1, 1], 1, 1]],
        template![[[1, 1, [1, 1]], 1, 1]],
        template![[[1, [1, 1], 1], 1, 1]],
        template![[[1, [1, 1, 1]], 1, 1]],
        template![[[1, [1, [1, 1]]], 1, 1]],
        template![[[1, [[1, 1], 1]], 1, 1]],
        template![[[[1, 1], 1, 1], 1, 1]],
        template![[[[1, 1], [1, 1]], 1, 1]],
        template![[[[1, 1, 1], 1], 1, 1]],
        template![[[[1, [1, 1]], 1], 1, 1]],
        template![[[[[1, 1], 1], 1], 1, 1]],
        template![[[1, 1, 1, 1], [1, 1]]],
        template![[[1, 1, [1, 1]], [1, 1]]],
        template![[[1, [1, 1], 1], [1, 1]]],
        template![[[1, [1, 1, 1]], [1, 1]]],
        template![[[1, [1, [1, 1]]], [1, 1]]],
        template![[[1, [[1, 1], 1]], [1, 1]]],
        template![[[[1, 1], 1, 1], [1, 1]]],
        template![[[[1, 1], [1, 1]], [1, 1]]],
        template![[[[1, 1, 1], 1], [1, 1]]],
        template![[[[1, [1, 1]], 1], [1, 1]]],
        template![[[[[1, 1], 1], 1], [1, 1]]],
        template![[[1, 1, 1, 1, 1], 1]],
        template![[[1, 1, 1, [1, 1]], 1]],
        template![[[1, 1, [1, 1], 1], 1]],
        template![[[1, 1, [1, 1, 1]], 1]],
        template![[[1, 1, [1, [1, 1]]], 1]],
        template![[[1, 1, [[1, 1], 1]], 1]],
        template![[[1, [1, 1], 1, 1], 1]],
        template![[[1, [1, 1], [1, 1]], 1]],
        template![[[1, [1, 1, 1], 1], 1]],
        template![[[1, [1, [1, 1]], 1], 1]],
        template![[[1, [[1, 1], 1], 1], 1]],
        template![[[1, [1, 1, 1, 1]], 1]],
        template![[[1, [1, 1, [1, 1]]], 1]],
        template![[[1, [1, [1, 1], 1]], 1]],
        template![[[1, [1, [1, 1, 1]]], 1]],
        template![[[1, [1, [1, [1, 1]]]], 1]],
        template![[[1, [1, [[1, 1], 1]]], 1]],
        template![[[1, [[1, 1], 1, 1]], 1]],
        template![[[1, [[1, 1], [1, 1]]], 1]],
        template![[[1, [[1, 1, 1], 1]], 1]],
        template![[[1, [[1, [1, 1]], 1]], 1]],
        template![[[1, [[[1, 1], 1], 1]], 1]],
        template![[[[1, 1], 1, 1, 1], 1]],
        template![[[[1, 1], 1, [1, 1]], 1]],
        template![[[[1, 1], [1, 1], 1], 1]],
        template![[[[1, 1], [1, 1, 1]], 1]],
        template![[[[1, 1], [1, [1, 1]]], 1]],
        template![[[[1, 1], [[1, 1], 1]], 1]],
        template![[[[1, 1, 1], 1, 1], 1]],
        template![[[[1, [1, 1]], 1, 1], 1]],
        template![[[[[1, 1], 1], 1, 1], 1]],
        template![[[[1, 1, 1], [1, 1]], 1]],
        template![[[[1, [1, 1]], [1, 1]], 1]],
        template![[[[[1, 1], 1], [1, 1]], 1]],
        template![[[[1, 1, 1, 1], 1], 1]],
        template![[[[1, 1, [1, 1]], 1], 1]],
        template![[[[1, [1, 1], 1], 1], 1]],
        template![[[[1, [1, 1, 1]], 1], 1]],
        template![[[[1, [1, [1, 1]]], 1], 1]],
        template![[[[1, [[1, 1], 1]], 1], 1]],
        template![[[[[1, 1], 1, 1], 1], 1]],
        template![[[[[1, 1], [1, 1]], 1], 1]],
        template![[[[[1, 1, 1], 1], 1], 1]],
        template![[[[[1, [1, 1]], 1], 1], 1]],
        template![[[[[[1, 1], 1], 1], 1], 1]],
    ],
];
