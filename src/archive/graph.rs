//! 文章与标签的关系图，供前端力导向图组件直接消费。
//!
//! 节点分两类：文章节点（固定大小、无分类）和标签节点（大小随引用文章数增长、
//! 每个标签独占一个分类）。边从标签指向文章。
//!
//! 文章标题即节点 id，调用方需保证标题唯一，可先用 [`find_duplicate_titles`] 检查。

use crate::archive::reduce::LastWriteWins;
use crate::content::{Post, Tag};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// 文章节点的默认大小，标签节点在此基础上累加引用数
pub const BASE_NODE_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub symbol_size: u32,
    pub permalink: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub categories: Vec<Category>,
}

/// 重复出现的文章标题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTitle {
    pub title: String,
    pub permalinks: Vec<String>,
}

/// 由文章列表构建标签关系图
pub fn build_tag_graph(posts: &[Post], base_node_size: u32) -> RelationGraph {
    let tags: LastWriteWins<&str, &Tag> = posts
        .iter()
        .flat_map(|p| p.tags.iter().map(|t| (t.label.as_str(), t)))
        .collect();

    let mut tag_posts: HashMap<&str, Vec<&Post>> =
        tags.keys().map(|label| (*label, Vec::new())).collect();

    let mut graph = RelationGraph::default();

    for post in posts {
        for tag in &post.tags {
            if let Some(bucket) = tag_posts.get_mut(tag.label.as_str()) {
                bucket.push(post);
            }
            graph.links.push(GraphLink {
                source: tag.label.clone(),
                target: post.title.clone(),
            });
        }

        graph.nodes.push(GraphNode {
            id: post.title.clone(),
            name: post.title.clone(),
            symbol_size: base_node_size,
            permalink: post.permalink.clone(),
            category: None,
        });
    }

    for (category, (label, tag)) in tags.iter().enumerate() {
        let referenced = tag_posts.get(label).map_or(0, Vec::len);
        graph.nodes.push(GraphNode {
            id: label.to_string(),
            name: label.to_string(),
            symbol_size: base_node_size + referenced as u32,
            permalink: tag.permalink.clone(),
            category: Some(category),
        });
        graph.categories.push(Category {
            name: label.to_string(),
        });
    }

    graph
}

/// 找出被多篇文章共用的标题，按首次出现顺序返回
pub fn find_duplicate_titles(posts: &[Post]) -> Vec<DuplicateTitle> {
    let mut by_title: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for post in posts {
        by_title
            .entry(post.title.as_str())
            .or_default()
            .push(post.permalink.as_str());
    }

    by_title
        .into_iter()
        .filter(|(_, permalinks)| permalinks.len() > 1)
        .map(|(title, permalinks)| DuplicateTitle {
            title: title.to_string(),
            permalinks: permalinks.into_iter().map(String::from).collect(),
        })
        .collect()
}
