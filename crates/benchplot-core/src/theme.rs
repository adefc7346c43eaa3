// File: crates/benchplot-core/src/theme.rs
// Summary: Named visual themes and the style presets that select them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;
use crate::style::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Figure area outside the plot panel.
    pub background: Rgba,
    pub panel: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub legend_background: Rgba,
    pub legend_border: Rgba,
}

impl Theme {
    /// Grey panel with white grid, after ggplot.
    pub fn ggplot() -> Self {
        Self {
            name: "ggplot",
            background: Rgba::WHITE,
            panel: Rgba::rgb(0xE5, 0xE5, 0xE5),
            grid: Rgba::WHITE,
            axis_line: Rgba::WHITE,
            axis_label: Rgba::rgb(0x55, 0x55, 0x55),
            tick: Rgba::rgb(0x55, 0x55, 0x55),
            legend_background: Rgba::rgba(0xE5, 0xE5, 0xE5, 204),
            legend_border: Rgba::rgb(0xCC, 0xCC, 0xCC),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            panel: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            legend_background: Rgba::rgba(30, 30, 34, 220),
            legend_border: Rgba::rgb(80, 80, 90),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            panel: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick: Rgba::rgb(100, 100, 110),
            legend_background: Rgba::rgba(255, 255, 255, 220),
            legend_border: Rgba::rgb(200, 200, 210),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            panel: Rgba::rgb(0x00, 0x2b, 0x36),
            grid: Rgba::rgb(0x07, 0x36, 0x42),      // base02
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1), // base1
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            tick: Rgba::rgb(0x83, 0x94, 0x96),      // base0
            legend_background: Rgba::rgba(0x07, 0x36, 0x42, 230),
            legend_border: Rgba::rgb(0x58, 0x6e, 0x75),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            panel: Rgba::rgb(0xfd, 0xf6, 0xe3),
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36),
            tick: Rgba::rgb(0x58, 0x6e, 0x75),
            legend_background: Rgba::rgba(0xee, 0xe8, 0xd5, 230),
            legend_border: Rgba::rgb(0x93, 0xa1, 0xa1),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::BLACK,
            panel: Rgba::BLACK,
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::WHITE,
            axis_label: Rgba::WHITE,
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            legend_background: Rgba::BLACK,
            legend_border: Rgba::WHITE,
        }
    }
}

/// Theme selector accepted in render options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[default]
    Default,
    Dark,
    Light,
    SolarizedDark,
    SolarizedLight,
    HighContrastDark,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Default,
        StylePreset::Dark,
        StylePreset::Light,
        StylePreset::SolarizedDark,
        StylePreset::SolarizedLight,
        StylePreset::HighContrastDark,
    ];

    pub fn theme(self) -> Theme {
        match self {
            StylePreset::Default => Theme::ggplot(),
            StylePreset::Dark => Theme::dark(),
            StylePreset::Light => Theme::light(),
            StylePreset::SolarizedDark => Theme::solarized_dark(),
            StylePreset::SolarizedLight => Theme::solarized_light(),
            StylePreset::HighContrastDark => Theme::high_contrast_dark(),
        }
    }
}

impl FromStr for StylePreset {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim();
        if want.eq_ignore_ascii_case("default") || want.eq_ignore_ascii_case("ggplot") {
            return Ok(StylePreset::Default);
        }
        StylePreset::ALL
            .into_iter()
            .find(|p| p.theme().name.eq_ignore_ascii_case(want))
            .ok_or_else(|| {
                ParseOptionError::new(
                    "style preset",
                    s,
                    &["default", "dark", "light", "solarized-dark", "solarized-light", "high-contrast-dark"],
                )
            })
    }
}
