use crate::config::SiteConfig;
use crate::content::error::ContentError;
use crate::content::frontmatter::{self, RawTag};
use crate::content::{Post, Tag, slugify};
use anyhow::Result;
use chrono::SecondsFormat;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 一篇待加载的文章：源文件及用于推导 slug/日期的名字
#[derive(Debug)]
struct Source {
    path: PathBuf,
    name: String,
}

/// 加载博客目录下的所有文章，按日期降序返回
pub fn load_posts(project_root: &Path, config: &SiteConfig) -> Result<Vec<Post>> {
    let posts_dir = project_root.join(&config.build.content_dir);
    if !posts_dir.exists() {
        tracing::warn!("文章目录不存在：{}", posts_dir.display());
        return Ok(Vec::new());
    }

    let sources = collect_sources(&posts_dir)?;
    let load = |source: &Source| match load_single_post(source, config) {
        Ok(post) => post,
        Err(e) => {
            tracing::error!("加载文章失败 {}: {}", source.path.display(), e);
            None
        }
    };

    let loaded: Vec<Option<Post>> = if config.build.parallel {
        sources.par_iter().map(load).collect()
    } else {
        sources.iter().map(load).collect()
    };

    let mut posts: Vec<Post> = loaded.into_iter().flatten().collect();
    sort_newest_first(&mut posts);
    Ok(posts)
}

/// 收集 `*.md`/`*.mdx` 文件以及含 `index.md(x)` 的子目录，按名字排序
fn collect_sources(posts_dir: &Path) -> Result<Vec<Source>> {
    let mut sources = Vec::new();

    for entry in std::fs::read_dir(posts_dir)?.filter_map(|e| e.ok()) {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            let index = ["index.md", "index.mdx"]
                .iter()
                .map(|f| path.join(f))
                .find(|p| p.is_file());
            if let Some(index) = index {
                sources.push(Source {
                    path: index,
                    name: file_name,
                });
            }
        } else if path
            .extension()
            .is_some_and(|ext| ext == "md" || ext == "mdx")
        {
            sources.push(Source {
                name: frontmatter::strip_extension(&file_name).to_string(),
                path,
            });
        }
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// 草稿和未公开文章返回 `Ok(None)`
fn load_single_post(source: &Source, config: &SiteConfig) -> Result<Option<Post>, ContentError> {
    let parsed = frontmatter::parse_file(&source.path)?;
    let fm = parsed.front_matter;

    let name_prefix = frontmatter::split_date_prefix(&source.name);
    let slug = fm.slug.unwrap_or_else(|| {
        name_prefix
            .map_or(source.name.as_str(), |(_, rest)| rest)
            .to_string()
    });

    if fm.draft.unwrap_or(false) || fm.unlisted.unwrap_or(false) {
        tracing::debug!("跳过草稿：{}", slug);
        return Ok(None);
    }

    let raw_date = fm
        .date
        .or_else(|| name_prefix.map(|(date, _)| date.to_string()))
        .ok_or_else(|| ContentError::MissingDate {
            path: source.path.clone(),
        })?;

    let (date, formatted_date) = match frontmatter::parse_date(&raw_date) {
        Ok(dt) => (
            dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            frontmatter::format_date(&dt),
        ),
        Err(e) => {
            tracing::warn!("{}：{}，按原样保留", source.path.display(), e);
            (raw_date.clone(), raw_date)
        }
    };

    let tags = fm
        .tags
        .unwrap_or_default()
        .iter()
        .map(|t| resolve_tag(t, config))
        .collect();

    Ok(Some(Post {
        title: fm.title.unwrap_or_else(|| slug.clone()),
        permalink: config.routes.post_permalink(&slug),
        slug,
        date,
        formatted_date,
        tags,
    }))
}

fn resolve_tag(raw: &RawTag, config: &SiteConfig) -> Tag {
    let label = raw.label().to_string();
    let permalink = raw
        .permalink()
        .map(String::from)
        .unwrap_or_else(|| config.routes.tag_permalink(&slugify(&label)));
    Tag { label, permalink }
}

/// 按日期降序稳定排序，无法解析的日期排在最后
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_cached_key(|p| std::cmp::Reverse(frontmatter::parse_date(&p.date).ok()));
}
