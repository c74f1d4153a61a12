// 主題配色

use crate::stripes::{StripeLayers, ThemeBucket, ThemeKind};
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// 這個配色所屬的主題組，繪製條紋時優先使用
    pub bucket: ThemeBucket,
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub line_number: (u8, u8, u8),
    pub status_background: (u8, u8, u8),
    pub status_foreground: (u8, u8, u8),
}

impl Palette {
    pub fn for_theme(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self {
                bucket: kind.bucket(),
                background: (30, 30, 30),
                foreground: (220, 220, 220),
                line_number: (150, 150, 150),
                status_background: (60, 60, 60),
                status_foreground: (220, 220, 220),
            },
            ThemeKind::HighContrast => Self {
                bucket: kind.bucket(),
                background: (0, 0, 0),
                foreground: (255, 255, 255),
                line_number: (255, 255, 0),
                status_background: (255, 255, 255),
                status_foreground: (0, 0, 0),
            },
            ThemeKind::HighContrastLight => Self {
                bucket: kind.bucket(),
                background: (255, 255, 255),
                foreground: (0, 0, 0),
                line_number: (0, 0, 160),
                status_background: (0, 0, 0),
                status_foreground: (255, 255, 255),
            },
            ThemeKind::Light | ThemeKind::Unspecified => Self {
                bucket: kind.bucket(),
                background: (255, 255, 255),
                foreground: (0, 0, 0),
                line_number: (100, 100, 100),
                status_background: (220, 220, 220),
                status_foreground: (0, 0, 0),
            },
        }
    }

    /// 某一行的背景：在條紋組內就疊上該組顏色，兩組都有時用目前主題的組
    pub fn line_background(&self, layers: Option<&StripeLayers>, line: usize) -> Color {
        let rgb = match layers.and_then(|layers| layers.bucket_at(line, self.bucket)) {
            Some(bucket) => self.stripe(bucket),
            None => self.background,
        };
        rgb_color(rgb)
    }

    pub fn stripe(&self, bucket: ThemeBucket) -> (u8, u8, u8) {
        bucket.stripe_color().blend_over(self.background)
    }
}

pub fn rgb_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_striped_line_background() {
        let palette = Palette::for_theme(ThemeKind::Dark);
        let mut layers = StripeLayers::new();
        layers.set(ThemeBucket::Dark, vec![0, 2]);

        assert_eq!(
            palette.line_background(Some(&layers), 2),
            rgb_color(palette.stripe(ThemeBucket::Dark))
        );
        assert_eq!(
            palette.line_background(Some(&layers), 1),
            rgb_color(palette.background)
        );
        assert_eq!(
            palette.line_background(None, 0),
            rgb_color(palette.background)
        );
        assert_ne!(palette.stripe(ThemeBucket::Dark), palette.background);
    }

    #[test]
    fn test_own_bucket_wins_over_stale_set() {
        let palette = Palette::for_theme(ThemeKind::Light);
        let mut layers = StripeLayers::new();
        layers.set(ThemeBucket::Dark, vec![0, 2]);
        layers.set(ThemeBucket::Light, vec![0]);

        // 亮色主題下的亮色條紋是 (242, 242, 242)
        assert_eq!(
            palette.line_background(Some(&layers), 0),
            Color::Rgb {
                r: 242,
                g: 242,
                b: 242
            }
        );
        assert_eq!(
            palette.line_background(Some(&layers), 2),
            rgb_color(palette.stripe(ThemeBucket::Dark))
        );
    }
}
