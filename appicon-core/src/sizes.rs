//! Static size tables for both generators.

/// One square output of the fixed-list generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
    pub label: Option<&'static str>,
}

impl IconSize {
    pub const fn square(size: u32, label: &'static str) -> Self {
        Self {
            width: size,
            height: size,
            label: Some(label),
        }
    }
}

/// Output sizes of `convert-icon`, in render order.
pub const FIXED_SIZES: &[IconSize] = &[
    IconSize::square(1024, "App Store"),
    IconSize::square(256, "Preview"),
    IconSize::square(180, "iPhone App @3x"),
    IconSize::square(120, "iPhone App @2x"),
    IconSize::square(87, "Settings @3x"),
    IconSize::square(80, "Spotlight @2x"),
    IconSize::square(58, "Settings @2x"),
    IconSize::square(40, "Spotlight @1x"),
    IconSize::square(29, "Settings @1x"),
];

/// A named group of catalog renditions sharing one nominal point size.
///
/// Dimensions are `f32` because the iPad Pro row is declared in points on one
/// axis, `(83.5, 167)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCategory {
    pub name: &'static str,
    pub points: f32,
    pub sizes: &'static [(f32, f32)],
}

impl CatalogCategory {
    pub fn is_iphone(&self) -> bool {
        self.name.starts_with("iPhone")
    }
}

/// Platform-mandated icon sizes, in render and manifest order.
pub const CATALOG_TABLE: &[CatalogCategory] = &[
    CatalogCategory {
        name: "AppStore",
        points: 1024.0,
        sizes: &[(1024.0, 1024.0)],
    },
    CatalogCategory {
        name: "iPhone_Settings",
        points: 29.0,
        sizes: &[(29.0, 29.0), (58.0, 58.0), (87.0, 87.0)],
    },
    CatalogCategory {
        name: "iPhone_Spotlight",
        points: 40.0,
        sizes: &[(40.0, 40.0), (80.0, 80.0), (120.0, 120.0)],
    },
    CatalogCategory {
        name: "iPhone_App",
        points: 60.0,
        sizes: &[(60.0, 60.0), (120.0, 120.0), (180.0, 180.0)],
    },
    CatalogCategory {
        name: "iPad_Settings",
        points: 29.0,
        sizes: &[(29.0, 29.0), (58.0, 58.0)],
    },
    CatalogCategory {
        name: "iPad_Spotlight",
        points: 40.0,
        sizes: &[(40.0, 40.0), (80.0, 80.0)],
    },
    CatalogCategory {
        name: "iPad_App",
        points: 76.0,
        sizes: &[(76.0, 76.0), (152.0, 152.0), (167.0, 167.0)],
    },
    CatalogCategory {
        name: "iPad_Pro_App",
        points: 83.5,
        sizes: &[(83.5, 167.0)],
    },
    CatalogCategory {
        name: "Notification",
        points: 20.0,
        sizes: &[(20.0, 20.0), (40.0, 40.0), (60.0, 60.0)],
    },
];

/// Count the square entries of a catalog table.
pub fn square_entries(table: &[CatalogCategory]) -> usize {
    table
        .iter()
        .flat_map(|c| c.sizes.iter())
        .filter(|(w, h)| w == h)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sizes_keep_their_order() {
        let widths: Vec<u32> = FIXED_SIZES.iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![1024, 256, 180, 120, 87, 80, 58, 40, 29]);
        assert!(FIXED_SIZES.iter().all(|s| s.width == s.height));
    }

    #[test]
    fn catalog_has_one_non_square_row() {
        let non_square: Vec<(f32, f32)> = CATALOG_TABLE
            .iter()
            .flat_map(|c| c.sizes.iter().copied())
            .filter(|(w, h)| w != h)
            .collect();
        assert_eq!(non_square, vec![(83.5, 167.0)]);
        assert_eq!(square_entries(CATALOG_TABLE), 20);
    }

    #[test]
    fn iphone_categories_are_detected_by_prefix() {
        assert!(CATALOG_TABLE[1].is_iphone());
        assert!(!CATALOG_TABLE[4].is_iphone());
        assert!(!CATALOG_TABLE[8].is_iphone());
    }
}
