//! 主題分類與條紋顏色

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// 宿主回報的主題種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
    HighContrast,
    HighContrastLight,
    Unspecified,
}

/// 主題粗分類：決定使用哪一組條紋
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeBucket {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn bucket(self) -> ThemeBucket {
        match self {
            ThemeKind::Dark | ThemeKind::HighContrast => ThemeBucket::Dark,
            ThemeKind::Light | ThemeKind::HighContrastLight | ThemeKind::Unspecified => {
                ThemeBucket::Light
            }
        }
    }

    /// 循環切換主題（F2）
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::HighContrast,
            ThemeKind::HighContrast => ThemeKind::HighContrastLight,
            ThemeKind::HighContrastLight | ThemeKind::Unspecified => ThemeKind::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
            ThemeKind::HighContrast => "high-contrast",
            ThemeKind::HighContrastLight => "high-contrast-light",
            ThemeKind::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            "high-contrast" | "hc" => Ok(ThemeKind::HighContrast),
            "high-contrast-light" | "hc-light" => Ok(ThemeKind::HighContrastLight),
            _ => bail!(
                "Unknown theme '{}' (expected light, dark, high-contrast, high-contrast-light)",
                s
            ),
        }
    }
}

/// 半透明的條紋顏色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl StripeColor {
    /// 疊加在不透明背景上，得到終端可顯示的顏色
    pub fn blend_over(&self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = fg as f32 * self.alpha + bg as f32 * (1.0 - self.alpha);
            value.round().clamp(0.0, 255.0) as u8
        };
        (
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

impl ThemeBucket {
    pub const ALL: [ThemeBucket; 2] = [ThemeBucket::Light, ThemeBucket::Dark];

    pub fn other(self) -> Self {
        match self {
            ThemeBucket::Light => ThemeBucket::Dark,
            ThemeBucket::Dark => ThemeBucket::Light,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ThemeBucket::Light => 0,
            ThemeBucket::Dark => 1,
        }
    }

    /// 亮色主題用 5% 黑，暗色主題用 5% 白
    pub fn stripe_color(self) -> StripeColor {
        match self {
            ThemeBucket::Light => StripeColor {
                r: 0,
                g: 0,
                b: 0,
                alpha: 0.05,
            },
            ThemeBucket::Dark => StripeColor {
                r: 255,
                g: 255,
                b: 255,
                alpha: 0.05,
            },
        }
    }
}
