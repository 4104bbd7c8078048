//! appicon-core: render one SVG into every icon size a mobile app needs.
//!
//! Two generators live here:
//!
//! - [`generate::generate_fixed`] renders a flat list of square sizes into one
//!   directory and stops at the first failure.
//! - [`generate::generate_catalog`] fills an `AppIcon.appiconset` folder from
//!   [`sizes::CATALOG_TABLE`], classifies each rendition (idiom, scale,
//!   nominal size) and writes the `Contents.json` manifest. A failed rendition
//!   is reported and skipped.
//!
//! Rasterization sits behind the [`render::Rasterizer`] trait. With the
//! default `resvg` feature, [`render::default_rasterizer`] returns a resvg
//! renderer; without it, every render fails.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use appicon_core::generate::generate_catalog;
//! use appicon_core::render::{default_rasterizer, RenderOptions};
//! use appicon_core::sizes::CATALOG_TABLE;
//!
//! let rasterizer = default_rasterizer(&RenderOptions::default());
//! let report = generate_catalog(
//!     Path::new("icon.svg"),
//!     Path::new("Assets.xcassets"),
//!     CATALOG_TABLE,
//!     rasterizer.as_ref(),
//!     std::io::stdout(),
//! )?;
//! println!("{} images declared", report.manifest.images.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classify;
pub mod generate;
pub mod manifest;
pub mod render;
pub mod sizes;
