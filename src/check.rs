use crate::archive;
use crate::build::stages::load;
use crate::config::{CONFIG_FILE, SiteConfig};
use anyhow::Result;
use std::path::Path;

pub struct CheckResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// 执行项目完整性检查，依次验证配置、内容目录和文章标题唯一性
pub fn run(project_root: &Path) -> Result<CheckResult> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let config = match check_config(project_root, &mut errors) {
        Some(config) => config,
        None => return Ok(CheckResult { errors, warnings }),
    };
    check_content(project_root, &config, &mut errors, &mut warnings)?;
    check_template(project_root, &mut warnings);

    Ok(CheckResult { errors, warnings })
}

fn check_config(root: &Path, errors: &mut Vec<String>) -> Option<SiteConfig> {
    if !root.join(CONFIG_FILE).exists() {
        errors.push(format!("缺少 {CONFIG_FILE} 配置文件"));
        return None;
    }
    match SiteConfig::load(root) {
        Ok(config) => Some(config),
        Err(e) => {
            errors.push(format!("{e:#}"));
            None
        }
    }
}

fn check_content(
    root: &Path,
    config: &SiteConfig,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    let content_dir = root.join(&config.build.content_dir);
    if !content_dir.exists() {
        warnings.push(format!("{}/ 目录不存在", config.build.content_dir));
        return Ok(());
    }

    let posts = load::load_posts(root, config)?;
    if posts.is_empty() {
        warnings.push(format!("{}/ 中没有可发布的文章", config.build.content_dir));
    }

    for dup in archive::find_duplicate_titles(&posts) {
        errors.push(format!(
            "文章标题 \"{}\" 重复：{}",
            dup.title,
            dup.permalinks.join(", ")
        ));
    }
    Ok(())
}

fn check_template(root: &Path, warnings: &mut Vec<String>) {
    let templates = root.join("templates");
    if templates.exists() && !templates.join("archive.html").exists() {
        warnings.push("templates/ 中没有 archive.html，将使用内置模板".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = run(dir.path()).expect("check");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains(CONFIG_FILE));
    }

    #[test]
    fn duplicate_titles_are_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::write(root.join(CONFIG_FILE), "[site]\ntitle = \"t\"\n").expect("config");
        fs::create_dir_all(root.join("blog")).expect("blog dir");
        fs::write(root.join("blog/2023-01-01-a.md"), "---\ntitle: Same\n---\n").expect("a");
        fs::write(root.join("blog/2023-01-02-b.md"), "---\ntitle: Same\n---\n").expect("b");

        let result = run(root).expect("check");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("Same"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_project_only_warns() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "").expect("config");
        let result = run(dir.path()).expect("check");
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }
}
