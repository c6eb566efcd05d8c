use crate::archive::{self, ArchiveOptions, ArchiveView, TagColorizer};
use crate::config::SiteConfig;
use crate::content::Post;
use anyhow::Result;

/// 构建归档视图：年份分组、标签列表和关系图
pub fn build_archive<'a>(
    posts: &'a [Post],
    config: &SiteConfig,
    colorizer: &mut dyn TagColorizer,
) -> Result<ArchiveView<'a>> {
    let duplicates = archive::find_duplicate_titles(posts);
    for dup in &duplicates {
        tracing::warn!(
            "文章标题重复：\"{}\"（{}），关系图中将出现重复节点",
            dup.title,
            dup.permalinks.join(", ")
        );
    }
    if config.archive.strict_titles && !duplicates.is_empty() {
        anyhow::bail!("存在 {} 个重复的文章标题", duplicates.len());
    }

    let view = ArchiveView::derive(posts, &ArchiveOptions::from(&config.archive), colorizer);
    tracing::info!(
        "归档索引：{} 个年份，{} 个标签，关系图 {} 个节点 {} 条边",
        view.years.len(),
        view.tags.len(),
        view.graph.nodes.len(),
        view.graph.links.len()
    );
    Ok(view)
}
