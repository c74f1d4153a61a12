//! 控制器依賴的宿主能力
//!
//! 控制器不持有宿主狀態，每次呼叫時由宿主把自己傳進來。

use super::range::LineRange;
use super::theme::{ThemeBucket, ThemeKind};

/// 宿主指定的視圖編號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub usize);

/// 重繪時讀取的視圖狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub visible: Vec<LineRange>,
    pub line_count: usize,
}

pub trait ViewSource {
    fn active_view(&self) -> Option<ViewId>;

    /// 所有開啟中的視圖
    fn views(&self) -> Vec<ViewId>;

    /// 視圖已關閉時回傳 None
    fn view_snapshot(&self, view: ViewId) -> Option<ViewSnapshot>;
}

pub trait ThemeSource {
    fn theme_kind(&self) -> ThemeKind;
}

pub trait DecorationSink {
    /// 以 `lines` 完整取代該視圖此主題組的條紋，空陣列即清除
    fn set_stripes(&mut self, view: ViewId, bucket: ThemeBucket, lines: Vec<usize>);
}

pub trait StripeHost: ViewSource + ThemeSource + DecorationSink {}

impl<T: ViewSource + ThemeSource + DecorationSink> StripeHost for T {}

/// 單一視圖的兩組條紋，以主題分類為索引
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripeLayers {
    layers: [Vec<usize>; 2],
}

impl StripeLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: ThemeBucket) -> &[usize] {
        &self.layers[bucket.index()]
    }

    pub fn set(&mut self, bucket: ThemeBucket, mut lines: Vec<usize>) {
        lines.sort_unstable();
        lines.dedup();
        self.layers[bucket.index()] = lines;
    }

    pub fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
    }

    /// 該行屬於哪一組條紋，兩組都有時以 `preferred` 為準
    pub fn bucket_at(&self, line: usize, preferred: ThemeBucket) -> Option<ThemeBucket> {
        [preferred, preferred.other()]
            .into_iter()
            .find(|bucket| self.get(*bucket).binary_search(&line).is_ok())
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }

    pub fn populated(&self) -> Vec<ThemeBucket> {
        ThemeBucket::ALL
            .iter()
            .copied()
            .filter(|bucket| !self.get(*bucket).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_full_replace() {
        let mut layers = StripeLayers::new();
        layers.set(ThemeBucket::Dark, vec![4, 2, 0]);
        assert_eq!(layers.get(ThemeBucket::Dark), &[0, 2, 4]);

        layers.set(ThemeBucket::Dark, vec![8]);
        assert_eq!(layers.get(ThemeBucket::Dark), &[8]);
        assert!(layers.get(ThemeBucket::Light).is_empty());
    }

    #[test]
    fn test_bucket_at() {
        let mut layers = StripeLayers::new();
        layers.set(ThemeBucket::Light, vec![0, 2]);
        layers.set(ThemeBucket::Dark, vec![2, 4]);

        assert_eq!(layers.bucket_at(0, ThemeBucket::Dark), Some(ThemeBucket::Light));
        assert_eq!(layers.bucket_at(2, ThemeBucket::Dark), Some(ThemeBucket::Dark));
        assert_eq!(layers.bucket_at(2, ThemeBucket::Light), Some(ThemeBucket::Light));
        assert_eq!(layers.bucket_at(4, ThemeBucket::Light), Some(ThemeBucket::Dark));
        assert_eq!(layers.bucket_at(1, ThemeBucket::Light), None);
        assert_eq!(layers.populated(), vec![ThemeBucket::Light, ThemeBucket::Dark]);

        layers.clear();
        assert!(layers.is_empty());
    }
}
