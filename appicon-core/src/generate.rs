//! The two generators: a flat fixed-size list and a full asset catalog.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classify::classify;
use crate::manifest::{CatalogImage, Manifest, MANIFEST_FILE};
use crate::render::Rasterizer;
use crate::sizes::{CatalogCategory, IconSize};

/// Folder created inside the catalog output directory.
pub const APPICONSET_DIR: &str = "AppIcon.appiconset";

/// Printed after a catalog render fails.
pub const RENDERER_HINT: &str = "Check that the SVG parses and the output directory is writable; \
builds without the default `resvg` feature cannot render (cargo install appicon-cli)";

pub fn fixed_file_name(size: &IconSize) -> String {
    if size.width == size.height {
        format!("nopu_icon_{}.png", size.width)
    } else {
        format!("nopu_icon_{}x{}.png", size.width, size.height)
    }
}

/// Catalog file names use the integer part of each dimension.
pub fn catalog_file_name(width: f32, height: f32) -> String {
    format!("icon_{}x{}.png", width as u32, height as u32)
}

/// Render every entry of `sizes` into `out_dir`.
///
/// Stops at the first render fault; files written before it are left in place.
pub fn generate_fixed(
    svg: &Path,
    out_dir: &Path,
    sizes: &[IconSize],
    rasterizer: &dyn Rasterizer,
    mut out: impl Write,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(sizes.len());
    for size in sizes {
        let dest = out_dir.join(fixed_file_name(size));
        rasterizer
            .render(svg, &dest, size.width, size.height)
            .with_context(|| format!("rendering {}x{} icon", size.width, size.height))?;

        match size.label {
            Some(label) => writeln!(
                out,
                "Generated {}x{} ({label}): {}",
                size.width,
                size.height,
                dest.display()
            )?,
            None => writeln!(
                out,
                "Generated {}x{}: {}",
                size.width,
                size.height,
                dest.display()
            )?,
        }
        written.push(dest);
    }

    Ok(written)
}

/// Outcome of one catalog run.
#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub iconset_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub rendered: Vec<PathBuf>,
    pub failed: Vec<String>,
    pub skipped: usize,
}

/// Render `table` into `<out_dir>/AppIcon.appiconset` and write its manifest.
///
/// A failed entry is reported on `out` and left out of the manifest; the run
/// carries on with the next entry. Only directory and manifest I/O are fatal.
pub fn generate_catalog(
    svg: &Path,
    out_dir: &Path,
    table: &[CatalogCategory],
    rasterizer: &dyn Rasterizer,
    mut out: impl Write,
) -> Result<CatalogReport> {
    let iconset_dir = out_dir.join(APPICONSET_DIR);
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("creating {}", iconset_dir.display()))?;

    let mut manifest = Manifest::new();
    let mut rendered = Vec::new();
    let mut failed = Vec::new();
    let mut skipped = 0;

    for category in table {
        for &(width, height) in category.sizes {
            let Some(class) = classify(category, width, height) else {
                tracing::warn!(
                    category = category.name,
                    width,
                    height,
                    "skipping non-square catalog entry"
                );
                skipped += 1;
                continue;
            };

            let filename = catalog_file_name(width, height);
            let dest = iconset_dir.join(&filename);

            match rasterizer.render(svg, &dest, width as u32, height as u32) {
                Ok(()) => {
                    writeln!(
                        out,
                        "Generated: {filename} ({} {} @{})",
                        class.idiom, class.size, class.scale
                    )?;
                    if !class.is_marketing() {
                        manifest.push(CatalogImage::new(&filename, &class));
                    }
                    rendered.push(dest);
                }
                Err(err) => {
                    writeln!(out, "Error generating {filename}: {err:#}")?;
                    writeln!(out, "{RENDERER_HINT}")?;
                    failed.push(filename);
                }
            }
        }
    }

    let manifest_path = iconset_dir.join(MANIFEST_FILE);
    manifest.save(&manifest_path)?;

    Ok(CatalogReport {
        iconset_dir,
        manifest_path,
        manifest,
        rendered,
        failed,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::{CATALOG_TABLE, FIXED_SIZES};
    use anyhow::anyhow;
    use std::cell::RefCell;

    /// Writes a marker file, failing for the listed widths.
    #[derive(Default)]
    struct FakeRasterizer {
        fail_widths: Vec<u32>,
        calls: RefCell<Vec<(u32, u32)>>,
    }

    impl Rasterizer for FakeRasterizer {
        fn render(&self, _source: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
            self.calls.borrow_mut().push((width, height));
            if self.fail_widths.contains(&width) {
                return Err(anyhow!("simulated failure at {width}"));
            }
            fs::write(dest, format!("{width}x{height}"))?;
            Ok(())
        }
    }

    #[test]
    fn fixed_list_writes_every_size() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out_dir = tmp.path().join("generated-icons");
        let fake = FakeRasterizer::default();
        let mut log = Vec::new();

        let written = generate_fixed(
            Path::new("icon.svg"),
            &out_dir,
            FIXED_SIZES,
            &fake,
            &mut log,
        )
        .expect("generate");

        assert_eq!(written.len(), FIXED_SIZES.len());
        assert!(out_dir.join("nopu_icon_1024.png").exists());
        assert!(out_dir.join("nopu_icon_29.png").exists());

        let log = String::from_utf8(log).expect("utf8");
        assert!(log.contains("Generated 180x180 (iPhone App @3x)"));
    }

    #[test]
    fn fixed_list_stops_at_first_fault() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let fake = FakeRasterizer {
            fail_widths: vec![120],
            ..Default::default()
        };

        let err = generate_fixed(
            Path::new("icon.svg"),
            tmp.path(),
            FIXED_SIZES,
            &fake,
            std::io::sink(),
        )
        .expect_err("fault propagates");

        assert!(format!("{err:#}").contains("simulated failure at 120"));
        assert!(tmp.path().join("nopu_icon_180.png").exists());
        assert!(!tmp.path().join("nopu_icon_87.png").exists());
        assert_eq!(fake.calls.borrow().len(), 4);
    }

    #[test]
    fn catalog_excludes_marketing_icon_from_manifest() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let fake = FakeRasterizer::default();

        let report = generate_catalog(
            Path::new("icon.svg"),
            tmp.path(),
            CATALOG_TABLE,
            &fake,
            std::io::sink(),
        )
        .expect("catalog");

        assert_eq!(report.skipped, 1);
        assert_eq!(report.rendered.len(), 20);
        assert_eq!(report.manifest.images.len(), 19);
        assert!(report
            .manifest
            .images
            .iter()
            .all(|img| img.filename != "icon_1024x1024.png"));
        assert!(report.iconset_dir.join("icon_1024x1024.png").exists());
        assert!(report.manifest_path.exists());
    }

    #[test]
    fn catalog_continues_after_a_failed_entry() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let fake = FakeRasterizer {
            fail_widths: vec![180],
            ..Default::default()
        };
        let mut log = Vec::new();

        let report = generate_catalog(
            Path::new("icon.svg"),
            tmp.path(),
            CATALOG_TABLE,
            &fake,
            &mut log,
        )
        .expect("catalog");

        assert_eq!(report.failed, vec!["icon_180x180.png".to_string()]);
        assert_eq!(report.manifest.images.len(), 18);
        assert!(report
            .manifest
            .images
            .iter()
            .all(|img| img.filename != "icon_180x180.png"));

        // Entries after the failure were still rendered.
        let calls = fake.calls.borrow();
        let failed_at = calls.iter().position(|&c| c == (180, 180)).expect("called");
        assert!(calls.len() > failed_at + 1);

        let log = String::from_utf8(log).expect("utf8");
        assert!(log.contains("Error generating icon_180x180.png: simulated failure at 180"));
        assert!(log.contains(RENDERER_HINT));
    }

    #[test]
    fn generated_line_names_the_classification() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut log = Vec::new();

        generate_catalog(
            Path::new("icon.svg"),
            tmp.path(),
            CATALOG_TABLE,
            &FakeRasterizer::default(),
            &mut log,
        )
        .expect("catalog");

        let log = String::from_utf8(log).expect("utf8");
        assert!(log.contains("Generated: icon_180x180.png (iphone 60x60 @3x)"));
        assert!(log.contains("Generated: icon_167x167.png (ipad 83.5x83.5 @2x)"));
        assert!(log.contains("Generated: icon_1024x1024.png (ios-marketing 1024x1024 @1x)"));
    }

    #[test]
    fn manifest_follows_table_order() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let report = generate_catalog(
            Path::new("icon.svg"),
            tmp.path(),
            CATALOG_TABLE,
            &FakeRasterizer::default(),
            std::io::sink(),
        )
        .expect("catalog");

        let names: Vec<&str> = report
            .manifest
            .images
            .iter()
            .take(3)
            .map(|img| img.filename.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["icon_29x29.png", "icon_58x58.png", "icon_87x87.png"]
        );
    }

    #[test]
    fn file_names_truncate_fractional_points() {
        assert_eq!(catalog_file_name(83.5, 167.0), "icon_83x167.png");
        assert_eq!(
            fixed_file_name(&IconSize {
                width: 64,
                height: 32,
                label: None
            }),
            "nopu_icon_64x32.png"
        );
    }
}
