pub mod graph;
pub mod reduce;
pub mod tags;
pub mod years;

pub use graph::{RelationGraph, build_tag_graph, find_duplicate_titles};
pub use tags::{TagColorizer, TagEntry, TagOrder, list_tags};
pub use years::{PostOrder, YearGroup, YearOptions, YearOrder, list_posts_by_years};

use crate::config::ArchiveConfig;
use crate::content::Post;
use serde::Serialize;

/// 派生归档视图所需的参数
#[derive(Debug, Clone, Copy)]
pub struct ArchiveOptions {
    pub years: YearOptions,
    pub tag_order: TagOrder,
    pub base_node_size: u32,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            years: YearOptions::default(),
            tag_order: TagOrder::default(),
            base_node_size: graph::BASE_NODE_SIZE,
        }
    }
}

impl From<&ArchiveConfig> for ArchiveOptions {
    fn from(config: &ArchiveConfig) -> Self {
        Self {
            years: YearOptions {
                year_order: config.year_order,
                post_order: config.post_order,
            },
            tag_order: config.tag_order,
            base_node_size: config.base_node_size,
        }
    }
}

/// 归档页的三块内容：按年份、按标签、关系图
#[derive(Debug, Serialize)]
pub struct ArchiveView<'a> {
    pub years: Vec<YearGroup<'a>>,
    pub tags: Vec<TagEntry>,
    pub graph: RelationGraph,
}

impl<'a> ArchiveView<'a> {
    /// 三个视图互不依赖，各自读取同一份文章列表
    pub fn derive(
        posts: &'a [Post],
        options: &ArchiveOptions,
        colorizer: &mut dyn TagColorizer,
    ) -> Self {
        Self {
            years: list_posts_by_years(posts, &options.years),
            tags: list_tags(posts, options.tag_order, colorizer),
            graph: build_tag_graph(posts, options.base_node_size),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::post;
    use super::graph::GraphLink;
    use super::tags::{FixedColor, Rgb};
    use super::*;

    #[test]
    fn derives_all_three_views() {
        let posts = vec![
            post("Post1", "2023-01-10", &[("x", "/tags/x")]),
            post("Post2", "2023-06-01", &[("x", "/tags/x"), ("y", "/tags/y")]),
        ];
        let view = ArchiveView::derive(
            &posts,
            &ArchiveOptions::default(),
            &mut FixedColor(Rgb(110, 120, 130)),
        );

        assert_eq!(view.years.len(), 1);
        assert_eq!(view.years[0].year, "2023");
        let year_titles: Vec<&str> = view.years[0].posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(year_titles, ["Post2", "Post1"]);

        let ids: Vec<&str> = view.graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["Post1", "Post2", "x", "y"]);
        let categories: Vec<&str> = view.graph.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(categories, ["x", "y"]);

        let link = |s: &str, t: &str| GraphLink {
            source: s.to_string(),
            target: t.to_string(),
        };
        assert_eq!(
            view.graph.links,
            [link("x", "Post1"), link("x", "Post2"), link("y", "Post2")]
        );

        let tag_labels: Vec<&str> = view.tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(tag_labels, ["x", "y"]);
    }

    #[test]
    fn options_follow_config() {
        let config = ArchiveConfig {
            base_node_size: 8,
            year_order: YearOrder::Ascending,
            post_order: PostOrder::OldestFirst,
            tag_order: TagOrder::Alphabetical,
            strict_titles: false,
        };
        let options = ArchiveOptions::from(&config);
        assert_eq!(options.base_node_size, 8);
        assert_eq!(options.years.year_order, YearOrder::Ascending);
        assert_eq!(options.years.post_order, PostOrder::OldestFirst);
        assert_eq!(options.tag_order, TagOrder::Alphabetical);
    }
}
