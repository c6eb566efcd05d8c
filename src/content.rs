pub mod error;
pub mod frontmatter;

use serde::Serialize;

/// 文章上的标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub label: String,
    pub permalink: String,
}

/// 已加载的文章元数据，归档计算只读不写
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub permalink: String,
    /// ISO 风格日期字符串，能解析时规范化为 RFC 3339
    pub date: String,
    pub formatted_date: String,
    pub tags: Vec<Tag>,
}

/// 转为小写并把非字母数字字符折叠成单个 `-`
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Deep Learning"), "deep-learning");
        assert_eq!(slugify("  C++ / Rust  "), "c-rust");
        assert_eq!(slugify("计算机视觉"), "计算机视觉");
    }
}
