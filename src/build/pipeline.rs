use crate::archive::tags::RandomColors;
use crate::build::stages;
use crate::config::SiteConfig;
use anyhow::Result;
use std::path::Path;

/// 构建统计信息
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    pub posts: usize,
    pub years: usize,
    pub tags: usize,
    pub nodes: usize,
    pub links: usize,
    pub files: usize,
}

/// 执行构建管道：加载文章 → 派生归档视图 → 输出
pub fn execute(project_root: &Path, config: &SiteConfig) -> Result<BuildStats> {
    tracing::info!("开始构建...");
    let start = std::time::Instant::now();

    // 阶段 1: content.load
    let posts = stages::load::load_posts(project_root, config)?;
    tracing::info!("加载了 {} 篇文章", posts.len());

    // 阶段 2: archive.derive
    let view = stages::archive::build_archive(&posts, config, &mut RandomColors)?;

    // 阶段 3: archive.render
    let files = stages::render::render_archive(project_root, config, &view)?;

    let stats = BuildStats {
        posts: posts.len(),
        years: view.years.len(),
        tags: view.tags.len(),
        nodes: view.graph.nodes.len(),
        links: view.graph.links.len(),
        files,
    };

    tracing::info!(
        "构建完成，耗时 {:.2}s（{} 篇文章，写入 {} 个文件）",
        start.elapsed().as_secs_f64(),
        stats.posts,
        stats.files,
    );

    Ok(stats)
}
