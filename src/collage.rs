//! Photo collage planning.
//!
//! Couples the selector with the caller's own item records: the chosen
//! rectangulation is zipped back against the items so a renderer can walk one
//! tree holding both the geometry and the payload.
//!
//! # Example
//!
//! ```
//! use rectlayout::{LayoutSelector, collage::plan_collage};
//!
//! let photos = vec![("beach.jpg", 1.5), ("dog.jpg", 0.75), ("cake.jpg", 1.0)];
//! let aspects: Vec<f64> = photos.iter().map(|p| p.1).collect();
//!
//! let mut selector = LayoutSelector::seeded(9);
//! let collage = plan_collage(&mut selector, &aspects, 16.0 / 9.0)
//!     .unwrap()
//!     .expect("three photos are enough");
//!
//! assert!((1.0..=3.0).contains(&collage.gap));
//! assert_eq!(collage.arrangement.items().count(), 3);
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;
use num_traits::Float;
use rand::Rng;
use whereat::at;

use crate::error::{LayoutError, Result};
use crate::geometry::AspectRatio;
use crate::orientation::Orientation;
use crate::rectangulation::{Node, Rectangulation};
use crate::selector::{LayoutSelector, Weights};

/// Collages need at least this many items.
pub const MIN_COLLAGE_ITEMS: usize = 3;

/// Bounds aspect used when the caller has no preference.
pub const DEFAULT_COLLAGE_ASPECT: f64 = 16.0 / 9.0;

/// A rectangulation with caller items in place of the leaf aspects.
#[derive(Clone, Debug, PartialEq)]
pub enum Arrangement<T> {
    Item(T),
    Group {
        orientation: Orientation,
        /// Width / height of the group.
        aspect: f64,
        items: Vec<Arrangement<T>>,
    },
}

impl<T> Arrangement<T> {
    /// Leaf items in traversal order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        let mut out = Vec::new();
        self.collect_items(&mut out);
        out.into_iter()
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            Self::Item(item) => out.push(item),
            Self::Group { items, .. } => {
                for child in items {
                    child.collect_items(out);
                }
            }
        }
    }

    /// Transform every item, keeping the tree shape.
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> Arrangement<U> {
        match self {
            Self::Item(item) => Arrangement::Item(f(item)),
            Self::Group {
                orientation,
                aspect,
                items,
            } => Arrangement::Group {
                orientation,
                aspect,
                items: items.into_iter().map(|child| child.map(f)).collect(),
            },
        }
    }
}

impl Rectangulation {
    /// Zip `items` positionally into this tree.
    ///
    /// The item count must equal [`leaf_count`](Self::leaf_count).
    pub fn arrange<T>(&self, items: impl IntoIterator<Item = T>) -> Result<Arrangement<T>> {
        let items: Vec<T> = items.into_iter().collect();
        let expected = self.leaf_count();
        if items.len() != expected {
            return Err(at!(LayoutError::AspectCountMismatch {
                expected,
                actual: items.len(),
            }));
        }
        let mut items = items.into_iter();
        Ok(self.arrange_from(&mut items))
    }

    fn arrange_from<T>(&self, items: &mut impl Iterator<Item = T>) -> Arrangement<T> {
        let children = self
            .children()
            .iter()
            .filter_map(|child| match child {
                Node::Leaf(_) => items.next().map(Arrangement::Item),
                Node::Split(sub) => Some(sub.arrange_from(items)),
            })
            .collect();
        Arrangement::Group {
            orientation: self.orientation(),
            aspect: self.aspect(),
            items: children,
        }
    }
}

/// A planned collage.
#[derive(Clone, Debug, PartialEq)]
pub struct Collage<T> {
    pub arrangement: Arrangement<T>,
    /// Width / height of the whole collage.
    pub aspect: f64,
    /// Gap between photos, in the renderer's units. Between 1.0 and 3.0 in
    /// steps of 0.1.
    pub gap: f64,
}

/// Choose a layout for `items` aimed at a `desired_aspect` frame.
///
/// Uses [`Weights::COLLAGE`]. Returns `Ok(None)` with fewer than
/// [`MIN_COLLAGE_ITEMS`] items or when no catalog template fits the count.
pub fn plan_collage<'a, R, T>(
    selector: &mut LayoutSelector<R>,
    items: &'a [T],
    desired_aspect: f64,
) -> Result<Option<Collage<&'a T>>>
where
    R: Rng,
    T: AspectRatio,
{
    if items.len() < MIN_COLLAGE_ITEMS {
        debug!("{} items is too few for a collage", items.len());
        return Ok(None);
    }
    let aspects: Vec<f64> = items.iter().map(AspectRatio::aspect_ratio).collect();
    let Some(rectangulation) =
        selector.best_rectangulation(desired_aspect, &aspects, &Weights::COLLAGE)?
    else {
        return Ok(None);
    };
    let arrangement = rectangulation.arrange(items)?;
    let gap = 1.0 + f64::from(selector.rng().random_range(0..=20_u8)) / 10.0;
    Ok(Some(Collage {
        arrangement,
        aspect: rectangulation.aspect(),
        gap,
    }))
}

/// Which grid axis proportions are computed for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Track {
    /// Side-by-side tracks sharing a height: wider items get more.
    Columns,
    /// Stacked tracks sharing a width: taller items get more.
    Rows,
}

/// Percentage of the grid each item's track should take so that every item
/// keeps its aspect ratio. Rounded to four decimals.
pub fn grid_proportions<T: AspectRatio>(items: &[T], track: Track) -> Vec<f64> {
    let factors: Vec<f64> = items
        .iter()
        .map(|item| {
            let aspect = item.aspect_ratio();
            match track {
                Track::Columns => aspect,
                Track::Rows => 1.0 / aspect,
            }
        })
        .collect();
    let total: f64 = factors.iter().sum();
    factors
        .iter()
        .map(|factor| Float::round(1_000_000.0 * factor / total) / 10_000.0)
        .collect()
}

/// [`grid_proportions`] as a CSS `grid-template-columns`/`-rows` value.
pub fn grid_template<T: AspectRatio>(items: &[T], track: Track) -> String {
    grid_proportions(items, track)
        .iter()
        .map(|percent| format!("{percent}%"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape;
    use alloc::vec;

    #[test]
    fn arrange_mirrors_tree() {
        let rect = Rectangulation::new(&shape![1, [1, 1]]).unwrap();
        let arrangement = rect.arrange(["a", "b", "c"]).unwrap();
        let Arrangement::Group {
            orientation,
            aspect,
            items,
        } = &arrangement
        else {
            panic!("root is a group");
        };
        assert_eq!(*orientation, Orientation::Horizontal);
        assert!((aspect - 1.5).abs() < 1e-12);
        assert_eq!(items[0], Arrangement::Item("a"));
        match &items[1] {
            Arrangement::Group {
                orientation, items, ..
            } => {
                assert_eq!(*orientation, Orientation::Vertical);
                assert_eq!(items, &[Arrangement::Item("b"), Arrangement::Item("c")]);
            }
            other => panic!("expected nested group, got {other:?}"),
        }
        assert_eq!(arrangement.items().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn arrange_requires_matching_count() {
        let rect = Rectangulation::new(&shape![1, 1]).unwrap();
        let err = rect.arrange([1, 2, 3]).unwrap_err();
        assert_eq!(
            *err.error(),
            LayoutError::AspectCountMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(rect.arrange([1]).is_err());
    }

    #[test]
    fn map_keeps_shape() {
        let rect = Rectangulation::new(&shape![[1, 1], 1]).unwrap();
        let doubled = rect.arrange([1, 2, 3]).unwrap().map(&mut |n| n * 2);
        assert_eq!(doubled.items().copied().collect::<Vec<_>>(), [2, 4, 6]);
    }

    #[test]
    fn collage_needs_three_items() {
        let mut selector = LayoutSelector::seeded(1);
        assert_eq!(plan_collage(&mut selector, &[1.0, 1.0], 1.0).unwrap(), None);
        assert_eq!(plan_collage::<_, f64>(&mut selector, &[], 1.0).unwrap(), None);
    }

    #[test]
    fn collage_beyond_catalog_is_none() {
        let mut selector = LayoutSelector::seeded(1);
        assert_eq!(plan_collage(&mut selector, &[1.0; 7], 1.0).unwrap(), None);
    }

    #[test]
    fn collage_keeps_item_order_and_gap_steps() {
        let photos = vec![1.5, 0.66, 1.0, 1.33];
        let mut selector = LayoutSelector::seeded(17);
        for _ in 0..25 {
            let collage = plan_collage(&mut selector, &photos, DEFAULT_COLLAGE_ASPECT)
                .unwrap()
                .unwrap();
            let order: Vec<f64> = collage.arrangement.items().map(|p| **p).collect();
            assert_eq!(order, photos);
            assert!((1.0..=3.0).contains(&collage.gap));
            let tenths = collage.gap * 10.0;
            assert!((tenths - Float::round(tenths)).abs() < 1e-9);
            match collage.arrangement {
                Arrangement::Group { aspect, .. } => assert_eq!(aspect, collage.aspect),
                Arrangement::Item(_) => panic!("root is a group"),
            }
        }
    }

    #[test]
    fn collage_borrows_items_not_selector() {
        let photos = [1.0, 1.5, 0.75];
        let mut selector = LayoutSelector::seeded(2);
        let first = plan_collage(&mut selector, &photos, 1.0).unwrap().unwrap();
        // The selector stays usable while the first collage is alive.
        let second = plan_collage(&mut selector, &photos, 2.0).unwrap().unwrap();
        assert!(core::ptr::eq(*first.arrangement.items().next().unwrap(), &photos[0]));
        assert_eq!(second.arrangement.items().count(), 3);
    }

    #[test]
    fn collage_rejects_bad_aspects() {
        let mut selector = LayoutSelector::seeded(1);
        let err = plan_collage(&mut selector, &[1.0, 0.0, 1.0], 1.0).unwrap_err();
        assert_eq!(*err.error(), LayoutError::InvalidAspect { index: 1 });
    }

    #[test]
    fn proportions_for_columns_and_rows() {
        assert_eq!(grid_proportions(&[1.0, 2.0], Track::Columns), [33.3333, 66.6667]);
        assert_eq!(grid_proportions(&[1.0, 2.0], Track::Rows), [66.6667, 33.3333]);
        assert_eq!(grid_proportions(&[1.5, 1.5], Track::Columns), [50.0, 50.0]);
    }

    #[test]
    fn grid_template_is_css() {
        assert_eq!(grid_template(&[1.0, 2.0], Track::Columns), "33.3333% 66.6667%");
        assert_eq!(grid_template(&[1.0], Track::Rows), "100%");
    }
}
