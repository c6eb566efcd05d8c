use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::archive::{PostOrder, TagOrder, YearOrder};

pub const CONFIG_FILE: &str = "dustarchive.toml";

#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub routes: RouteConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteInfo {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// 永久链接模板，`{slug}` 会被替换
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_post_url")]
    pub post_url: String,
    #[serde(default = "default_tag_url")]
    pub tag_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_base_node_size")]
    pub base_node_size: u32,
    #[serde(default)]
    pub year_order: YearOrder,
    #[serde(default)]
    pub post_order: PostOrder,
    #[serde(default)]
    pub tag_order: TagOrder,
    /// 标题重复时直接让构建失败，而不仅是警告
    #[serde(default)]
    pub strict_titles: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 以 JSON 行输出日志
    #[serde(default)]
    pub json: bool,
}

impl SiteConfig {
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("读取 {} 失败", config_path.display()))?;
        Self::parse(&content).with_context(|| format!("解析 {CONFIG_FILE} 失败"))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl RouteConfig {
    pub fn post_permalink(&self, slug: &str) -> String {
        self.post_url.replace("{slug}", slug)
    }

    pub fn tag_permalink(&self, slug: &str) -> String {
        self.tag_url.replace("{slug}", slug)
    }
}

// 默认值函数
fn default_title() -> String { "My Blog".into() }
fn default_content_dir() -> String { "blog".into() }
fn default_output_dir() -> String { "public".into() }
fn default_archive_dir() -> String { "blog/archive".into() }
fn default_true() -> bool { true }
fn default_post_url() -> String { "/blog/{slug}".into() }
fn default_tag_url() -> String { "/blog/tags/{slug}".into() }
fn default_base_node_size() -> u32 { crate::archive::graph::BASE_NODE_SIZE }
fn default_log_level() -> String { "info".into() }

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            url: String::new(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            archive_dir: default_archive_dir(),
            parallel: true,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            post_url: default_post_url(),
            tag_url: default_tag_url(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_node_size: default_base_node_size(),
            year_order: YearOrder::default(),
            post_order: PostOrder::default(),
            tag_order: TagOrder::default(),
            strict_titles: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
