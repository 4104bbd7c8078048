//! Width-keyed classification of catalog renditions.
//!
//! Each square rendition resolves to a scale, a nominal point size and a
//! device idiom. The width threshold table decides first; widths it has no rule
//! for fall back to their category's nominal point size.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sizes::CatalogCategory;

/// Device class a rendition is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Idiom {
    #[serde(rename = "iphone")]
    Phone,
    #[serde(rename = "ipad")]
    Tablet,
    #[serde(rename = "ios-marketing")]
    Marketing,
}

/// Pixel-density multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "1x")]
    One,
    #[serde(rename = "2x")]
    Two,
    #[serde(rename = "3x")]
    Three,
}

impl Scale {
    fn from_factor(factor: f32) -> Self {
        match factor.round() as i64 {
            i64::MIN..=1 => Scale::One,
            2 => Scale::Two,
            _ => Scale::Three,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scale::One => "1x",
            Scale::Two => "2x",
            Scale::Three => "3x",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Idiom::Phone => "iphone",
            Idiom::Tablet => "ipad",
            Idiom::Marketing => "ios-marketing",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub scale: Scale,
    /// Nominal point size, e.g. `60x60` or `83.5x83.5`.
    pub size: String,
    pub idiom: Idiom,
}

impl Classification {
    fn new(scale: Scale, points: f32, idiom: Idiom) -> Self {
        Self {
            scale,
            size: format!("{points}x{points}"),
            idiom,
        }
    }

    /// The App Store icon is rendered but never declared in the manifest.
    pub fn is_marketing(&self) -> bool {
        self.idiom == Idiom::Marketing
    }
}

/// Classify one `(width, height)` entry of `category`.
///
/// Returns `None` for non-square entries.
pub fn classify(category: &CatalogCategory, width: f32, height: f32) -> Option<Classification> {
    if width != height {
        return None;
    }

    let by_category = if category.is_iphone() {
        Idiom::Phone
    } else {
        Idiom::Tablet
    };

    let pick = |one: f32, two: f32| {
        if width == one {
            Scale::One
        } else if width == two {
            Scale::Two
        } else {
            Scale::Three
        }
    };

    let class = if width <= 29.0 {
        Classification::new(pick(29.0, 58.0), 29.0, by_category)
    } else if width <= 40.0 {
        Classification::new(pick(40.0, 80.0), 40.0, by_category)
    } else if width <= 60.0 {
        Classification::new(pick(60.0, 120.0), 60.0, Idiom::Phone)
    } else if width <= 76.0 {
        let scale = if width == 76.0 { Scale::One } else { Scale::Two };
        Classification::new(scale, 76.0, Idiom::Tablet)
    } else if width == 167.0 {
        Classification::new(Scale::Two, 83.5, Idiom::Tablet)
    } else if width == 180.0 {
        Classification::new(Scale::Three, 60.0, Idiom::Phone)
    } else if width == 1024.0 {
        Classification::new(Scale::One, 1024.0, Idiom::Marketing)
    } else {
        let scale = Scale::from_factor(width / category.points);
        Classification::new(scale, category.points, by_category)
    };

    Some(class)
}
