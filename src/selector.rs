//! Template selection by weighted scoring.
//!
//! The selector instantiates every catalog template with the caller's aspect
//! ratios, scores each candidate, and keeps the best one. Slot order in the
//! returned tree matches the order of the supplied aspects, so callers can
//! zip the leaves back against their items.
//!
//! # Example
//!
//! ```
//! use rectlayout::{LayoutSelector, Weights};
//!
//! let mut selector = LayoutSelector::seeded(7);
//! let weights = Weights::AREA_COVERED;
//!
//! let best = selector
//!     .best_rectangulation(1.0, &[1.0, 1.0, 1.0, 1.0], &weights)
//!     .unwrap()
//!     .expect("four-slot templates exist");
//!
//! // A 2×2 grid matches the square bounds exactly.
//! assert_eq!(best.to_string(), "[[1, 1], [1, 1]]");
//! ```

use alloc::vec::Vec;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use whereat::at;

use crate::error::{LayoutError, Result};
use crate::geometry::{
    AspectRatio, Rect, validate_aspects, validate_bounds, validate_bounds_aspect, validate_padding,
};
use crate::layout::AspectLayout;
use crate::rectangulation::Rectangulation;
use crate::templates::{self, Catalog, Template};

/// Scoring coefficients.
///
/// Weights are not normalized; by convention they sum to 1. Any non-zero
/// `random` weight makes selection vary between calls with the same input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights {
    /// Fraction of the bounds covered by the whole layout.
    pub area_covered: f64,
    /// Share of the bounds given to the smallest slot.
    pub smallest_item: f64,
    /// Bonus for symmetric layouts.
    pub symmetry: f64,
    /// Uniform noise in `[0, 1)`.
    pub random: f64,
}

impl Weights {
    /// General-purpose profile with noticeable variety between calls.
    pub const BALANCED: Self = Self {
        area_covered: 0.05,
        smallest_item: 0.4,
        symmetry: 0.1,
        random: 0.45,
    };

    /// Favours giving every item a fair share, with a little variety.
    pub const COLLAGE: Self = Self {
        area_covered: 0.0,
        smallest_item: 0.8,
        symmetry: 0.0,
        random: 0.2,
    };

    /// Deterministic: only how well the layout fills the bounds matters.
    pub const AREA_COVERED: Self = Self {
        area_covered: 1.0,
        smallest_item: 0.0,
        symmetry: 0.0,
        random: 0.0,
    };

    pub fn area_covered(mut self, weight: f64) -> Self {
        self.area_covered = weight;
        self
    }

    pub fn smallest_item(mut self, weight: f64) -> Self {
        self.smallest_item = weight;
        self
    }

    pub fn symmetry(mut self, weight: f64) -> Self {
        self.symmetry = weight;
        self
    }

    pub fn random(mut self, weight: f64) -> Self {
        self.random = weight;
        self
    }

    /// Whether selection with these weights ignores the random source.
    pub fn is_deterministic(&self) -> bool {
        self.random == 0.0
    }

    /// Check that every weight is non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        let all = [
            self.area_covered,
            self.smallest_item,
            self.symmetry,
            self.random,
        ];
        if all.iter().all(|w| w.is_finite() && *w >= 0.0) {
            Ok(())
        } else {
            Err(at!(LayoutError::InvalidWeights))
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Per-criterion scores for one candidate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub area_covered: f64,
    pub smallest_item: f64,
    pub symmetric: bool,
    /// The random draw, or 0 when the random weight is zero.
    pub random: f64,
    /// Weighted sum of the above.
    pub total: f64,
}

/// A template instantiated with real aspects, and its score.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub template: &'static Template,
    pub rectangulation: Rectangulation,
    pub score: Score,
}

/// Chooses rectangulations for sequences of aspect ratios.
///
/// Owns its random source, so selection is reproducible when the source is
/// seeded. See [`LayoutSelector::seeded`].
#[derive(Clone, Debug)]
pub struct LayoutSelector<R> {
    catalog: &'static Catalog,
    rng: R,
}

impl LayoutSelector<SmallRng> {
    /// A selector over the standard catalog with a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "std")]
impl LayoutSelector<rand::rngs::ThreadRng> {
    /// A selector over the standard catalog using the thread-local generator.
    pub fn unseeded() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> LayoutSelector<R> {
    /// A selector over the standard catalog drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            catalog: &templates::STANDARD,
            rng,
        }
    }

    /// Use a different template catalog.
    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Every template with `aspects.len()` slots, instantiated and scored, in
    /// catalog order.
    pub fn candidates(
        &mut self,
        bounds_aspect: f64,
        aspects: &[f64],
        weights: &Weights,
    ) -> Result<Vec<Candidate>> {
        let bounds_aspect = validate_bounds_aspect(bounds_aspect)?;
        validate_aspects(aspects)?;
        weights.validate()?;

        let mut candidates = Vec::new();
        for template in self.catalog.templates(aspects.len()) {
            let rectangulation = template.instantiate(aspects)?;
            let score = self.score(&rectangulation, bounds_aspect, weights);
            trace!("candidate {rectangulation} scored {:.4}", score.total);
            candidates.push(Candidate {
                template,
                rectangulation,
                score,
            });
        }
        Ok(candidates)
    }

    /// The highest-scoring rectangulation for `aspects` inside bounds of
    /// `bounds_aspect`.
    ///
    /// Returns `Ok(None)` when there are no aspects or the catalog has no
    /// template with that many slots. Ties go to the earliest template.
    pub fn best_rectangulation(
        &mut self,
        bounds_aspect: f64,
        aspects: &[f64],
        weights: &Weights,
    ) -> Result<Option<Rectangulation>> {
        let candidates = self.candidates(bounds_aspect, aspects, weights)?;
        let mut best: Option<Candidate> = None;
        for candidate in candidates {
            match &best {
                Some(current) if candidate.score.total <= current.score.total => {}
                _ => best = Some(candidate),
            }
        }
        match &best {
            Some(winner) => debug!(
                "selected {} for {} items (score {:.4})",
                winner.rectangulation,
                aspects.len(),
                winner.score.total
            ),
            None => debug!("no template for {} items", aspects.len()),
        }
        Ok(best.map(|candidate| candidate.rectangulation))
    }

    /// [`best_rectangulation`](Self::best_rectangulation) with
    /// [`Weights::BALANCED`].
    pub fn select_template_for_aspects(
        &mut self,
        bounds_aspect: f64,
        aspects: &[f64],
    ) -> Result<Option<Rectangulation>> {
        self.best_rectangulation(bounds_aspect, aspects, &Weights::BALANCED)
    }

    /// Select with [`Weights::BALANCED`] and lay the winner out in `bounds`
    /// with interior padding only.
    pub fn select_layout_for_aspects(
        &mut self,
        bounds: Rect,
        aspects: &[f64],
        padding: f64,
    ) -> Result<Option<AspectLayout>> {
        validate_bounds(&bounds)?;
        validate_padding(padding)?;
        match self.select_template_for_aspects(bounds.aspect(), aspects)? {
            Some(rectangulation) => Ok(Some(rectangulation.layout(bounds, padding, true)?)),
            None => Ok(None),
        }
    }

    /// [`select_layout_for_aspects`](Self::select_layout_for_aspects) for any
    /// items exposing an aspect ratio.
    pub fn select_layout_for_items<T: AspectRatio>(
        &mut self,
        bounds: Rect,
        items: &[T],
        padding: f64,
    ) -> Result<Option<AspectLayout>> {
        let aspects: Vec<f64> = items.iter().map(AspectRatio::aspect_ratio).collect();
        self.select_layout_for_aspects(bounds, &aspects, padding)
    }

    /// A uniformly random template with `aspects.len()` slots, instantiated
    /// with `aspects`. No scoring.
    pub fn random_template_for_aspects(
        &mut self,
        aspects: &[f64],
    ) -> Result<Option<Rectangulation>> {
        validate_aspects(aspects)?;
        let templates: Vec<&Template> = self.catalog.templates(aspects.len()).collect();
        if templates.is_empty() {
            debug!("no template for {} items", aspects.len());
            return Ok(None);
        }
        let index = self.rng.random_range(0..templates.len());
        templates[index].instantiate(aspects).map(Some)
    }

    /// Lay a random template out in `bounds`, padding every edge.
    pub fn random_layout_for_aspects(
        &mut self,
        bounds: Rect,
        aspects: &[f64],
        padding: f64,
    ) -> Result<Option<AspectLayout>> {
        validate_bounds(&bounds)?;
        validate_padding(padding)?;
        match self.random_template_for_aspects(aspects)? {
            Some(rectangulation) => Ok(Some(rectangulation.layout(bounds, padding, false)?)),
            None => Ok(None),
        }
    }

    /// Draw from the selector's random source.
    pub(crate) fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn score(&mut self, rectangulation: &Rectangulation, bounds_aspect: f64, weights: &Weights) -> Score {
        let area_covered = rectangulation.area_covered(bounds_aspect);
        let smallest_item = rectangulation.area_covered_by_smallest_item(bounds_aspect);
        let symmetric = rectangulation.symmetric();
        let random = if weights.is_deterministic() {
            0.0
        } else {
            self.rng.random::<f64>()
        };
        let total = weights.area_covered * area_covered
            + weights.random * random
            + weights.smallest_item * smallest_item
            + weights.symmetry * if symmetric { 1.0 } else { 0.0 };
        Score {
            area_covered,
            smallest_item,
            symmetric,
            random,
            total,
        }
    }
}
