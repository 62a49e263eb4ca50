use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

const SET3_COLORS: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

const PAIRED_COLORS: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub pie_colors: [String; 12],
    pub background: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub hover_cursor: String,
}

impl Theme {
    pub fn set3() -> Self {
        Self {
            pie_colors: SET3_COLORS.map(str::to_string),
            background: "none".to_string(),
            stroke_color: "none".to_string(),
            stroke_width: 0.0,
            hover_cursor: "pointer".to_string(),
        }
    }

    pub fn paired() -> Self {
        Self {
            pie_colors: PAIRED_COLORS.map(str::to_string),
            background: "#FFFFFF".to_string(),
            stroke_color: "#FFFFFF".to_string(),
            stroke_width: 1.0,
            hover_cursor: "pointer".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "set3" | "default" => Some(Self::set3()),
            "paired" => Some(Self::paired()),
            _ => None,
        }
    }

    pub fn color_scale<K: Eq + Hash>(&self) -> OrdinalScale<K> {
        OrdinalScale::new(self.pie_colors.to_vec())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::set3()
    }
}

/// Ordinal color scale with an implicit domain: unseen keys take the next
/// palette entry, wrapping around once the palette is exhausted.
#[derive(Debug, Clone)]
pub struct OrdinalScale<K> {
    range: Vec<String>,
    domain: HashMap<K, usize>,
}

impl<K: Eq + Hash> OrdinalScale<K> {
    pub fn new(range: Vec<String>) -> Self {
        Self {
            range,
            domain: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, key: K) -> String {
        if self.range.is_empty() {
            return "none".to_string();
        }
        let next = self.domain.len();
        let slot = *self.domain.entry(key).or_insert(next);
        self.range[slot % self.range.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_assigns_by_first_seen_order() {
        let theme = Theme::set3();
        let mut scale = theme.color_scale::<usize>();
        assert_eq!(scale.resolve(0), "#8dd3c7");
        assert_eq!(scale.resolve(1), "#ffffb3");
        assert_eq!(scale.resolve(0), "#8dd3c7");
    }

    #[test]
    fn scale_wraps_after_twelve_keys() {
        let mut scale = Theme::set3().color_scale::<usize>();
        let colors: Vec<String> = (0..13).map(|idx| scale.resolve(idx)).collect();
        assert_eq!(colors[12], colors[0]);
        assert_eq!(colors[11], "#ffed6f");
    }

    #[test]
    fn empty_range_yields_none() {
        let mut scale = OrdinalScale::<usize>::new(Vec::new());
        assert_eq!(scale.resolve(3), "none");
    }

    #[test]
    fn named_themes() {
        assert!(Theme::from_name("paired").is_some());
        assert!(Theme::from_name("neon").is_none());
    }
}
