//! SVG-to-PNG rasterization.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Turns an SVG file into a PNG of an exact pixel size.
pub trait Rasterizer {
    /// Render `source` stretched to `width` x `height` and write the PNG to
    /// `dest`, replacing any existing file.
    fn render(&self, source: &Path, dest: &Path, width: u32, height: u32) -> Result<()>;
}

/// Font configuration for SVG `<text>`.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub load_system_fonts: bool,
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Stand-in used when the crate is built without a renderer. Every call fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableRasterizer;

impl Rasterizer for UnavailableRasterizer {
    fn render(&self, source: &Path, _dest: &Path, _width: u32, _height: u32) -> Result<()> {
        Err(anyhow!(
            "cannot render {}: no SVG renderer compiled in",
            source.display()
        ))
    }
}

/// The best rasterizer this build provides.
#[cfg(feature = "resvg")]
pub fn default_rasterizer(opts: &RenderOptions) -> Box<dyn Rasterizer> {
    Box::new(ResvgRasterizer::new(opts))
}

#[cfg(not(feature = "resvg"))]
pub fn default_rasterizer(_opts: &RenderOptions) -> Box<dyn Rasterizer> {
    Box::new(UnavailableRasterizer)
}

#[cfg(feature = "resvg")]
pub use self::svg::ResvgRasterizer;

#[cfg(feature = "resvg")]
mod svg {
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    use anyhow::{anyhow, Context, Result};
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg::{self, fontdb};

    use super::{Rasterizer, RenderOptions};

    /// Renders with resvg. The font database is built once and shared by
    /// every render.
    #[derive(Clone)]
    pub struct ResvgRasterizer {
        fontdb: Arc<fontdb::Database>,
    }

    impl ResvgRasterizer {
        pub fn new(opts: &RenderOptions) -> Self {
            let mut db = fontdb::Database::new();
            if opts.load_system_fonts {
                db.load_system_fonts();
            }
            for dir in &opts.font_dirs {
                db.load_fonts_dir(dir);
            }
            tracing::debug!(faces = db.len(), "font database ready");

            Self {
                fontdb: Arc::new(db),
            }
        }

        fn parse(&self, source: &Path) -> Result<usvg::Tree> {
            let data = fs::read(source).with_context(|| format!("reading {}", source.display()))?;

            let opt = usvg::Options {
                resources_dir: fs::canonicalize(source)
                    .ok()
                    .and_then(|p| p.parent().map(Path::to_path_buf)),
                fontdb: Arc::clone(&self.fontdb),
                ..usvg::Options::default()
            };

            usvg::Tree::from_data(&data, &opt)
                .with_context(|| format!("parsing SVG {}", source.display()))
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn render(&self, source: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
            let tree = self.parse(source)?;

            let mut pixmap = Pixmap::new(width, height)
                .ok_or_else(|| anyhow!("cannot allocate a {width}x{height} pixmap"))?;

            let svg_size = tree.size();
            let sx = width as f32 / svg_size.width();
            let sy = height as f32 / svg_size.height();
            tracing::debug!(
                svg_width = svg_size.width(),
                svg_height = svg_size.height(),
                sx,
                sy,
                "rendering {}",
                dest.display()
            );

            resvg::render(&tree, Transform::from_scale(sx, sy), &mut pixmap.as_mut());

            let png = pixmap
                .encode_png()
                .with_context(|| format!("encoding {}", dest.display()))?;
            fs::write(dest, png).with_context(|| format!("writing {}", dest.display()))
        }
    }
}
