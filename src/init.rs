use crate::config::CONFIG_FILE;
use anyhow::Result;
use std::fs;
use std::path::Path;

// 嵌入默认 dustarchive.toml
const DEFAULT_CONFIG: &str = r#"[site]
title = "My Blog"
url = "https://example.com"

[build]
content_dir = "blog"
output_dir = "public"
archive_dir = "blog/archive"

[routes]
post_url = "/blog/{slug}"
tag_url = "/blog/tags/{slug}"

[archive]
base_node_size = 5
# first_seen | descending | ascending
year_order = "first_seen"
# reversed | newest_first | oldest_first
post_order = "reversed"
# first_seen | alphabetical
tag_order = "first_seen"
strict_titles = false

[log]
level = "info"
json = false
"#;

const SAMPLE_POST: &str = r#"---
title: Hello Archive
tags: [welcome]
---

第一篇文章。
"#;

/// 检测项目是否已初始化，未初始化则创建配置和示例文章。
/// 返回 `true` 表示执行了初始化，`false` 表示已存在。
pub fn ensure_initialized(root: &Path) -> Result<bool> {
    if root.join(CONFIG_FILE).exists() {
        return Ok(false);
    }

    fs::create_dir_all(root.join("blog"))?;
    fs::write(root.join(CONFIG_FILE), DEFAULT_CONFIG)?;

    let sample = root.join("blog").join("2024-01-01-hello-archive.md");
    if !sample.exists() {
        fs::write(sample, SAMPLE_POST)?;
    }

    Ok(true)
}
