//! SVG visualization of computed layouts.
//!
//! Draws the layout's outer box with every slot on top, numbered in
//! traversal order and annotated with its aspect ratio. Useful for eyeballing
//! template choices while tuning [`Weights`](crate::Weights).
//!
//! # Example
//!
//! ```
//! use rectlayout::{LayoutSelector, Rect, svg::render_layout_svg};
//!
//! let mut selector = LayoutSelector::seeded(3);
//! let layout = selector
//!     .select_layout_for_aspects(Rect::sized(1600.0, 900.0), &[1.5, 0.75, 1.0], 10.0)
//!     .unwrap()
//!     .unwrap();
//!
//! let svg = render_layout_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::geometry::Rect;
use crate::layout::AspectLayout;

/// Maximum pixel width of the drawn layout.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of the drawn layout.
const MAX_PANEL_H: f64 = 320.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top and bottom margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;

/// Render a complete SVG document showing every slot of `layout`.
pub fn render_layout_svg(layout: &AspectLayout) -> String {
    render_panel(layout, &title(layout))
}

/// Render several layouts side by side, each with its own caption.
///
/// Handy for comparing the candidates a selector weighed for one input.
pub fn render_gallery_svg<'a, I>(layouts: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a AspectLayout)>,
{
    let panels: Vec<String> = layouts
        .into_iter()
        .map(|(caption, layout)| panel_body(layout, caption))
        .collect();
    if panels.is_empty() {
        return empty_svg();
    }

    let cell_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_w = cell_w * panels.len() as f64;
    let total_h = panel_height();

    let mut svg = header(total_w, total_h);
    for (i, body) in panels.iter().enumerate() {
        svg.push_str(&format!(
            "<g transform=\"translate({:.1} 0)\">\n{body}</g>\n",
            cell_w * i as f64
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

fn title(layout: &AspectLayout) -> String {
    format!(
        "{} slots  {:.0}×{:.0}  padding {}",
        layout.slots.len(),
        layout.width,
        layout.height,
        layout.padding
    )
}

/// Scale a bounds to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(bounds: Rect) -> f64 {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / bounds.width).min(MAX_PANEL_H / bounds.height)
}

fn panel_height() -> f64 {
    MARGIN_TOP + LABEL_H + MAX_PANEL_H + MARGIN_TOP
}

fn empty_svg() -> String {
    String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#)
}

fn render_panel(layout: &AspectLayout, caption: &str) -> String {
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let mut svg = header(total_w, panel_height());
    svg.push_str(&panel_body(layout, caption));
    svg.push_str("</svg>\n");
    svg
}

fn header(total_w: f64, total_h: f64) -> String {
    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #1d3f5e; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .slot { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #e0e0e0; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .slot { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );
    svg
}

/// Label, outer box, and slots for one layout, positioned at the origin.
fn panel_body(layout: &AspectLayout, caption: &str) -> String {
    let mut svg = String::new();
    let center_x = MAX_PANEL_W / 2.0 + MARGIN_X;
    let y = MARGIN_TOP;

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        y + 14.0,
        escape_xml(caption)
    ));
    svg.push('\n');

    // Slots can sit outside the reported box when only interior padding is
    // applied, so draw the union of both.
    let extent = layout
        .slots
        .iter()
        .fold(layout.bounds(), |acc, slot| union(acc, *slot));
    let scale = scale_to_fit(extent);
    let panel_x = center_x - extent.width * scale / 2.0;
    let panel_y = y + LABEL_H;
    let map = |r: Rect| {
        (
            panel_x + (r.left - extent.left) * scale,
            panel_y + (r.top - extent.top) * scale,
            r.width * scale,
            r.height * scale,
        )
    };

    let (ox, oy, ow, oh) = map(layout.bounds());
    svg.push_str(&format!(
        r#"<rect x="{ox:.1}" y="{oy:.1}" width="{ow:.1}" height="{oh:.1}" class="outer" rx="2"/>"#
    ));
    svg.push('\n');

    for (i, slot) in layout.slots.iter().enumerate() {
        let (sx, sy, sw, sh) = map(*slot);
        svg.push_str(&format!(
            r#"<rect x="{sx:.1}" y="{sy:.1}" width="{sw:.1}" height="{sh:.1}" class="slot" rx="1"/>"#
        ));
        svg.push('\n');
        let text = format!("{}  {:.2}", i + 1, slot.aspect());
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            sx + sw / 2.0,
            sy + sh / 2.0 + 4.0,
            escape_xml(&text)
        ));
        svg.push('\n');
    }
    svg
}

fn union(a: Rect, b: Rect) -> Rect {
    let left = a.left.min(b.left);
    let top = a.top.min(b.top);
    let right = a.right().max(b.right());
    let bottom = a.bottom().max(b.bottom());
    Rect::new(top, left, right - left, bottom - top)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rectangulation, shape};

    fn grid_layout() -> AspectLayout {
        Rectangulation::new(&shape![[1, 1], [1, 1]])
            .unwrap()
            .layout(Rect::sized(400.0, 400.0), 10.0, true)
            .unwrap()
    }

    #[test]
    fn svg_draws_every_slot() {
        let svg = render_layout_svg(&grid_layout());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches(r#"class="slot""#).count(), 4);
        assert_eq!(svg.matches(r#"class="outer""#).count(), 1);
        assert!(svg.contains("4 slots"));
    }

    #[test]
    fn svg_numbers_slots_in_order() {
        let svg = render_layout_svg(&grid_layout());
        let first = svg.find(">1  1.00<").unwrap();
        let last = svg.find(">4  1.00<").unwrap();
        assert!(first < last);
    }

    #[test]
    fn gallery_places_panels_side_by_side() {
        let a = grid_layout();
        let b = Rectangulation::new(&shape![1, 1, 1, 1])
            .unwrap()
            .layout(Rect::sized(400.0, 400.0), 10.0, true)
            .unwrap();
        let svg = render_gallery_svg([("grid", &a), ("strip", &b)]);
        assert_eq!(svg.matches("<g transform").count(), 2);
        assert_eq!(svg.matches(r#"class="slot""#).count(), 8);
        assert_eq!(render_gallery_svg(core::iter::empty()), empty_svg());
    }

    #[test]
    fn captions_are_escaped() {
        let svg = render_gallery_svg([("a<b & \"c\"", &grid_layout())]);
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
        assert!(!svg.contains("<<"));
    }

    #[test]
    fn union_covers_both() {
        let u = union(Rect::sized(10.0, 10.0), Rect::new(-5.0, 5.0, 10.0, 10.0));
        assert_eq!(u, Rect::new(-5.0, 0.0, 15.0, 15.0));
    }
}
