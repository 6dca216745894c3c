//! Aspect-preserving rectangle layouts for photo grids and collages.
//!
//! Given items with known aspect ratios, this crate partitions a bounding
//! rectangle into one slot per item by recursive horizontal and vertical
//! splits, so every item is shown whole at its own aspect with a uniform gap
//! between neighbours. A catalog of every distinct split shape for one to six
//! items is scored against the caller's bounds, and the best one is laid out.
//!
//! Pure geometry, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`geometry`]: Rectangles and the aspect/growth algebra behind layouts
//! - [`rectangulation`]: Split trees, aspect substitution, symmetry
//! - [`layout`]: Absolute slot placement inside bounds
//! - [`templates`]: The standard catalog of split shapes
//! - [`selector`]: Weighted template scoring and selection
//! - [`collage`]: Collage planning on top of the selector
//! - `svg`: SVG rendering of layouts (feature `svg`)
//!
//! # Example
//!
//! ```
//! use rectlayout::{LayoutSelector, Rect};
//!
//! let mut selector = LayoutSelector::seeded(42);
//! let layout = selector
//!     .select_layout_for_aspects(Rect::sized(1200.0, 800.0), &[1.5, 0.75, 1.0, 1.33], 8.0)
//!     .unwrap()
//!     .expect("four items fit the standard catalog");
//!
//! assert_eq!(layout.slots.len(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

whereat::define_at_crate_info!();

pub mod collage;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod rectangulation;
pub mod selector;
pub mod templates;

#[cfg(feature = "svg")]
pub mod svg;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}

// Re-exports: core types
pub use collage::{Arrangement, Collage, Track};
pub use error::{LayoutError, Result};
pub use geometry::{AspectFactors, AspectRatio, Rect};
pub use layout::AspectLayout;
pub use orientation::Orientation;
pub use rectangulation::{Node, Rectangulation, Shape};
pub use selector::{Candidate, LayoutSelector, Score, Weights};
pub use templates::{Catalog, STANDARD, Template, TemplateNode};
