use crate::archive::ArchiveView;
use crate::config::SiteConfig;
use crate::content::slugify;
use anyhow::{Context, Result};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::path::{Path, PathBuf};

const ARCHIVE_TEMPLATE: &str = "archive.html";
const DEFAULT_ARCHIVE_TEMPLATE: &str = include_str!("../../../templates/archive.html");

/// 写出归档页的 JSON 数据和 HTML，返回写入的文件数
pub fn render_archive(project_root: &Path, config: &SiteConfig, view: &ArchiveView<'_>) -> Result<usize> {
    let archive_dir = project_root
        .join(&config.build.output_dir)
        .join(&config.build.archive_dir);
    std::fs::create_dir_all(&archive_dir)?;

    let mut written = vec![
        write_json(&archive_dir.join("years.json"), &view.years)?,
        write_json(&archive_dir.join("tags.json"), &view.tags)?,
        write_json(&archive_dir.join("graph.json"), &view.graph)?,
    ];

    let source = load_template(project_root)?;
    let html = render_html(&source, config, view)?;
    written.push(write_file(&archive_dir.join("index.html"), html)?);

    tracing::info!("归档页已输出到 {}（{} 个文件）", archive_dir.display(), written.len());
    Ok(written.len())
}

/// 项目内 templates/archive.html 优先，否则使用内置模板
fn load_template(project_root: &Path) -> Result<String> {
    let custom = project_root.join("templates").join(ARCHIVE_TEMPLATE);
    if custom.exists() {
        tracing::info!("使用自定义归档模板：{}", custom.display());
        return std::fs::read_to_string(&custom)
            .with_context(|| format!("读取模板 {} 失败", custom.display()));
    }
    Ok(DEFAULT_ARCHIVE_TEMPLATE.to_string())
}

fn render_html(source: &str, config: &SiteConfig, view: &ArchiveView<'_>) -> Result<String> {
    let mut env = Environment::new();
    register_filters(&mut env);

    let source = source.to_string();
    env.set_loader(move |name| {
        Ok((name == ARCHIVE_TEMPLATE).then(|| source.clone()))
    });

    let tmpl = env.get_template(ARCHIVE_TEMPLATE)?;
    let ctx = minijinja::context! {
        site => minijinja::context! {
            title => &config.site.title,
            url => &config.site.url,
        },
        years => &view.years,
        tags => &view.tags,
        graph => &view.graph,
    };
    tmpl.render(ctx)
        .with_context(|| format!("渲染 {ARCHIVE_TEMPLATE} 失败"))
}

fn register_filters(env: &mut Environment) {
    env.add_filter("slugify", filter_slugify);
    env.add_filter("json", filter_json);
}

fn filter_slugify(value: String) -> String {
    slugify(&value)
}

/// 序列化为可直接嵌入 `<script>` 的 JSON
fn filter_json(value: Value) -> Result<Value, minijinja::Error> {
    let json = serde_json::to_string(&value).map_err(|e| {
        minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
    })?;
    Ok(Value::from_safe_string(json.replace("</", "<\\/")))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)?;
    write_file(path, json)
}

/// 写入单个输出文件，返回其路径
fn write_file(path: &Path, contents: String) -> Result<PathBuf> {
    std::fs::write(path, contents).with_context(|| format!("写入 {} 失败", path.display()))?;
    tracing::debug!("已写入：{}", path.display());
    Ok(path.to_path_buf())
}
