//! End-to-end checks: select a template for random inputs, lay it out, and
//! verify the geometric guarantees every layout must keep.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rectlayout::{
    AspectLayout, LayoutError, LayoutSelector, Rect, Rectangulation, STANDARD, Weights, shape,
};

const EPS: f64 = 1e-6;

fn random_aspects(rng: &mut SmallRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(0.4..2.5)).collect()
}

/// Slots keep their aspects, stay inside the bounds, and never overlap.
fn assert_well_formed(layout: &AspectLayout, aspects: &[f64], bounds: Rect) {
    assert_eq!(layout.slots.len(), aspects.len());
    for (slot, &aspect) in layout.slots.iter().zip(aspects) {
        assert!(
            (slot.aspect() - aspect).abs() < EPS,
            "slot {slot:?} lost aspect {aspect}"
        );
        assert!(bounds.contains(slot, EPS), "{slot:?} escapes {bounds:?}");
    }
    for (i, a) in layout.slots.iter().enumerate() {
        for b in &layout.slots[i + 1..] {
            assert!(!a.overlaps(b, EPS), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn selected_layouts_are_well_formed() {
    let mut inputs = SmallRng::seed_from_u64(0x5eed);
    let mut selector = LayoutSelector::seeded(1);
    for n in 1..=6 {
        for _ in 0..20 {
            let aspects = random_aspects(&mut inputs, n);
            let bounds = Rect::sized(
                inputs.random_range(200.0..1600.0),
                inputs.random_range(200.0..1200.0),
            );
            let layout = selector
                .select_layout_for_aspects(bounds, &aspects, 10.0)
                .unwrap()
                .unwrap();
            assert_well_formed(&layout, &aspects, bounds);
        }
    }
}

#[test]
fn every_template_lays_out_cleanly() {
    let bounds = Rect::sized(1000.0, 700.0);
    for template in STANDARD.iter() {
        let aspects: Vec<f64> = (0..template.slot_count())
            .map(|i| 0.6 + 0.25 * i as f64)
            .collect();
        let rect = template.instantiate(&aspects).unwrap();
        for interior in [false, true] {
            let layout = rect.layout(bounds, 6.0, interior).unwrap();
            assert_well_formed(&layout, &aspects, bounds);
        }
    }
}

#[test]
fn padding_separates_neighbours() {
    let rect = Rectangulation::new(&shape![1, [1, 1]]).unwrap();
    let layout = rect.layout(Rect::sized(300.0, 200.0), 10.0, false).unwrap();
    let [left, top, bottom] = [layout.slots[0], layout.slots[1], layout.slots[2]];
    assert!((top.left - left.right() - 10.0).abs() < EPS);
    assert!((bottom.top - top.bottom() - 10.0).abs() < EPS);
    // Outer margin is half the gap.
    assert!((left.left - 5.0).abs() < EPS);
    assert!((left.top - 5.0).abs() < EPS);
}

#[test]
fn interior_only_layout_touches_bounds() {
    let rect = Rectangulation::new(&shape![[1, 1], [1, 1]]).unwrap();
    let bounds = Rect::sized(500.0, 500.0);
    let layout = rect.layout(bounds, 20.0, true).unwrap();
    assert_eq!(layout.slots[0].left, 0.0);
    assert_eq!(layout.slots[0].top, 0.0);
    let right = layout.slots.iter().map(Rect::right).fold(0.0, f64::max);
    let bottom = layout.slots.iter().map(Rect::bottom).fold(0.0, f64::max);
    assert!((right - 500.0).abs() < EPS);
    assert!((bottom - 500.0).abs() < EPS);
    assert!((layout.width - 500.0).abs() < EPS);
    assert!((layout.height - 500.0).abs() < EPS);
}

#[test]
fn area_weights_pick_an_exact_fit() {
    // Three squares fill a 3:1 frame exactly only as a single row.
    let mut selector = LayoutSelector::seeded(2);
    let best = selector
        .best_rectangulation(3.0, &[1.0, 1.0, 1.0], &Weights::AREA_COVERED)
        .unwrap()
        .unwrap();
    assert_eq!(best.to_array(), shape![1, 1, 1]);
    assert_eq!(best.area_covered(3.0), 1.0);

    // And only as a single column in a 1:3 frame.
    let best = selector
        .best_rectangulation(1.0 / 3.0, &[1.0, 1.0, 1.0], &Weights::AREA_COVERED)
        .unwrap()
        .unwrap();
    assert_eq!(best.to_array(), shape![[1, 1, 1]]);
}

#[test]
fn unsupported_counts_yield_no_layout() {
    let mut selector = LayoutSelector::seeded(3);
    let bounds = Rect::sized(100.0, 100.0);
    assert!(selector.select_layout_for_aspects(bounds, &[], 0.0).unwrap().is_none());
    assert!(
        selector
            .random_layout_for_aspects(bounds, &[1.0; 8], 0.0)
            .unwrap()
            .is_none()
    );
}

#[test]
fn errors_carry_their_kind() {
    let mut selector = LayoutSelector::seeded(4);
    let err = selector
        .select_layout_for_aspects(Rect::sized(100.0, -1.0), &[1.0], 0.0)
        .unwrap_err();
    assert_eq!(*err.error(), LayoutError::InvalidBounds);

    let err = Rectangulation::new(&shape![1, 1])
        .unwrap()
        .replace_aspects(&[1.0])
        .unwrap_err();
    assert_eq!(
        *err.error(),
        LayoutError::AspectCountMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[cfg(feature = "std")]
#[test]
fn unseeded_selector_still_selects() {
    let mut selector = LayoutSelector::unseeded();
    let best = selector
        .select_template_for_aspects(1.0, &[1.0, 1.0, 1.0])
        .unwrap()
        .unwrap();
    assert_eq!(best.leaf_count(), 3);
}

#[test]
fn collage_arranges_caller_items() {
    use rectlayout::collage::plan_collage;
    use rectlayout::geometry::AspectRatio;

    #[derive(Debug, PartialEq)]
    struct Photo {
        name: &'static str,
        width: u32,
        height: u32,
    }

    impl AspectRatio for Photo {
        fn aspect_ratio(&self) -> f64 {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    let photos = [
        Photo { name: "a", width: 4000, height: 3000 },
        Photo { name: "b", width: 3000, height: 4000 },
        Photo { name: "c", width: 2000, height: 2000 },
        Photo { name: "d", width: 1920, height: 1080 },
        Photo { name: "e", width: 1080, height: 1920 },
    ];
    let mut selector = LayoutSelector::seeded(5);
    let collage = plan_collage(&mut selector, &photos, 16.0 / 9.0)
        .unwrap()
        .unwrap();
    let names: Vec<&str> = collage.arrangement.items().map(|p| p.name).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
    assert!(collage.aspect > 0.0);
}
