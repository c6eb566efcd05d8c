use crate::archive::reduce::LastWriteWins;
use crate::content::Post;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 标签按钮的背景色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 为标签分配显示颜色。渲染时调用，结果不要求可复现
pub trait TagColorizer {
    fn color(&mut self, label: &str) -> Rgb;
}

/// 每个通道在 [100, 150) 内随机取值的柔和色
#[derive(Debug, Default)]
pub struct RandomColors;

impl RandomColors {
    const LOW: u8 = 100;
    const SPAN: u32 = 50;

    fn channel() -> u8 {
        Self::channel_from(getrandom::u32())
    }

    /// 取不到系统随机数时退回区间下限
    fn channel_from(random: Result<u32, getrandom::Error>) -> u8 {
        let r = random.unwrap_or_else(|e| {
            tracing::debug!("读取系统随机数失败，标签颜色退回区间下限：{e}");
            0
        });
        Self::LOW + (r % Self::SPAN) as u8
    }
}

impl TagColorizer for RandomColors {
    fn color(&mut self, _label: &str) -> Rgb {
        Rgb(Self::channel(), Self::channel(), Self::channel())
    }
}

/// 所有标签使用同一颜色
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub Rgb);

#[cfg(test)]
impl TagColorizer for FixedColor {
    fn color(&mut self, _label: &str) -> Rgb {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagOrder {
    /// 标签首次出现的顺序
    #[default]
    FirstSeen,
    Alphabetical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub label: String,
    pub permalink: String,
    pub color: Rgb,
}

/// 汇总所有文章的标签，按 label 去重，后出现的永久链接覆盖先出现的
pub fn list_tags(
    posts: &[Post],
    order: TagOrder,
    colorizer: &mut dyn TagColorizer,
) -> Vec<TagEntry> {
    let tag_links: LastWriteWins<&str, &str> = posts
        .iter()
        .flat_map(|p| p.tags.iter())
        .map(|t| (t.label.as_str(), t.permalink.as_str()))
        .collect();

    let mut pairs: Vec<(&str, &str)> = tag_links.into_iter().collect();
    if order == TagOrder::Alphabetical {
        pairs.sort_by(|a, b| a.0.cmp(b.0));
    }

    pairs
        .into_iter()
        .map(|(label, permalink)| TagEntry {
            label: label.to_string(),
            permalink: permalink.to_string(),
            color: colorizer.color(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::fixtures::post;

    const GREY: Rgb = Rgb(120, 120, 120);

    fn labels(entries: &[TagEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn tags_are_deduplicated_by_label() {
        let posts = vec![
            post("P1", "2024-01-01", &[("a", "/a"), ("b", "/b-first")]),
            post("P2", "2024-01-02", &[("b", "/b-last"), ("c", "/c")]),
        ];
        let entries = list_tags(&posts, TagOrder::FirstSeen, &mut FixedColor(GREY));

        assert_eq!(labels(&entries), ["a", "b", "c"]);
        assert_eq!(entries[1].permalink, "/b-last");
    }

    #[test]
    fn alphabetical_order_sorts_by_label() {
        let posts = vec![post("P", "2024-01-01", &[("zig", "/z"), ("go", "/g"), ("ada", "/a")])];
        let entries = list_tags(&posts, TagOrder::Alphabetical, &mut FixedColor(GREY));
        assert_eq!(labels(&entries), ["ada", "go", "zig"]);
    }

    #[test]
    fn every_tag_gets_a_color() {
        let posts = vec![post("P", "2024-01-01", &[("x", "/x"), ("y", "/y")])];
        let entries = list_tags(&posts, TagOrder::FirstSeen, &mut FixedColor(GREY));
        assert!(entries.iter().all(|e| e.color == GREY));
    }

    #[test]
    fn random_colors_stay_in_soft_range() {
        let mut colors = RandomColors;
        for _ in 0..64 {
            let Rgb(r, g, b) = colors.color("t");
            for channel in [r, g, b] {
                assert!((100..150).contains(&channel));
            }
        }
    }

    #[test]
    fn unavailable_randomness_falls_back_to_lower_bound() {
        assert_eq!(RandomColors::channel_from(Err(getrandom::Error::UNSUPPORTED)), 100);
        assert_eq!(RandomColors::channel_from(Ok(49)), 149);
        assert_eq!(RandomColors::channel_from(Ok(50)), 100);
    }

    #[test]
    fn color_serializes_as_css() {
        let json = serde_json::to_value(Rgb(100, 101, 149)).expect("serialize color");
        assert_eq!(json, "rgb(100,101,149)");
    }
}
