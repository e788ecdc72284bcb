use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, DashboardResult};

const CATEGORY_LIGHT: [&str; 8] = [
    "#f59e0b", // amber-500
    "#06b6d4", // cyan-500
    "#8b5cf6", // purple-500
    "#ef4444", // red-500
    "#10b981", // emerald-500
    "#f97316", // orange-500
    "#3b82f6", // blue-500
    "#ec4899", // pink-500
];

const CATEGORY_DARK: [&str; 8] = [
    "#a855f7", // purple-500
    "#0ea5e9", // sky-500
    "#f97316", // orange-500
    "#ec4899", // pink-500
    "#22c55e", // green-500
    "#8b5cf6", // purple-600
    "#0284c7", // sky-600
    "#ea580c", // orange-600
];

/// Alpha suffix appended to a hex colour for hover states.
pub const HOVER_ALPHA: &str = "CC";

static CATEGORY_PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    light: CATEGORY_LIGHT.iter().map(|c| c.to_string()).collect(),
    dark: CATEGORY_DARK.iter().map(|c| c.to_string()).collect(),
});

// One colour per weekday bar.
static WEEKLY_PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    light: CATEGORY_LIGHT[..7].iter().map(|c| c.to_string()).collect(),
    dark: CATEGORY_DARK[..7].iter().map(|c| c.to_string()).collect(),
});

/// A pair of colour sets, one per theme. Both sets are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaletteSpec")]
pub struct Palette {
    light: Vec<String>,
    dark: Vec<String>,
}

#[derive(Deserialize)]
struct PaletteSpec {
    light: Vec<String>,
    dark: Vec<String>,
}

impl TryFrom<PaletteSpec> for Palette {
    type Error = DashboardError;

    fn try_from(spec: PaletteSpec) -> Result<Self, Self::Error> {
        Palette::new(spec.light, spec.dark)
    }
}

impl Palette {
    pub fn new<I, J, S>(light: I, dark: J) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let light: Vec<String> = light.into_iter().map(Into::into).collect();
        let dark: Vec<String> = dark.into_iter().map(Into::into).collect();
        if light.is_empty() {
            return Err(DashboardError::EmptyPalette("light"));
        }
        if dark.is_empty() {
            return Err(DashboardError::EmptyPalette("dark"));
        }
        Ok(Self { light, dark })
    }

    /// Palette for category slices and legend dots.
    pub fn category() -> &'static Palette {
        &CATEGORY_PALETTE
    }

    /// Palette for the seven weekday bars.
    pub fn weekly() -> &'static Palette {
        &WEEKLY_PALETTE
    }

    /// The whole colour set for a theme.
    pub fn colors(&self, theme_is_dark: bool) -> &[String] {
        if theme_is_dark {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn color_at(&self, index: usize, theme_is_dark: bool) -> &str {
        let colors = self.colors(theme_is_dark);
        &colors[index % colors.len()]
    }
}

/// Colours for `n` consecutive entries, wrapping around the palette.
pub fn assign_colors(n: usize, palette: &Palette, theme_is_dark: bool) -> Vec<String> {
    (0..n)
        .map(|index| palette.color_at(index, theme_is_dark).to_string())
        .collect()
}

/// Hover variant of a hex colour.
pub fn hover_color(color: &str) -> String {
    format!("{}{}", color, HOVER_ALPHA)
}
