use crate::content::error::ContentError;
use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct RawFrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<RawTag>>,
    pub draft: Option<bool>,
    pub unlisted: Option<bool>,
}

/// front matter 中的标签，可写成纯字符串或带永久链接的对象
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTag {
    Label(String),
    Full {
        label: String,
        permalink: Option<String>,
    },
}

impl RawTag {
    pub fn label(&self) -> &str {
        match self {
            RawTag::Label(label) | RawTag::Full { label, .. } => label,
        }
    }

    pub fn permalink(&self) -> Option<&str> {
        match self {
            RawTag::Label(_) => None,
            RawTag::Full { permalink, .. } => permalink.as_deref(),
        }
    }
}

pub struct ParsedContent {
    pub front_matter: RawFrontMatter,
    pub body: String,
}

/// 解析 Markdown 文件，分离 Front Matter 和正文
pub fn parse_file(path: &Path) -> Result<ParsedContent, ContentError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_content(&content).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })
}

/// 解析内容字符串，分离 Front Matter 和正文。
///
/// 没有 Front Matter 时按默认值处理；有但字段类型不符时返回错误，不静默丢弃。
pub fn parse_content(content: &str) -> Result<ParsedContent, serde_json::Error> {
    let matter = gray_matter::Matter::<gray_matter::engine::YAML>::new();
    let parsed = matter.parse(content);

    let front_matter = match parsed.data {
        None | Some(gray_matter::Pod::Null) => RawFrontMatter::default(),
        Some(data) => data.deserialize()?,
    };

    Ok(ParsedContent {
        front_matter,
        body: parsed.content,
    })
}

/// 拆分 `YYYY-MM-DD-rest` 形式的名字，返回日期和剩余部分
pub fn split_date_prefix(name: &str) -> Option<(&str, &str)> {
    let bytes = name.as_bytes();
    if bytes.len() <= 11 {
        return None;
    }
    let has_date_prefix = bytes[0..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(|b| b.is_ascii_digit())
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(|b| b.is_ascii_digit())
        && bytes[10] == b'-';
    has_date_prefix.then(|| (&name[..10], &name[11..]))
}

/// 去掉扩展名后的文章名
pub fn strip_extension(filename: &str) -> &str {
    [".mdx", ".md", ".markdown"]
        .iter()
        .find_map(|ext| filename.strip_suffix(ext))
        .unwrap_or(filename)
}

/// 解析日期字符串为 DateTime<Utc>
pub fn parse_date(date_str: &str) -> Result<DateTime<Utc>, ContentError> {
    let s = date_str.trim();

    // RFC 3339: 2024-01-15T10:30:00+08:00
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.to_utc());
    }
    // ISO 8601 带时间不带时区: 2024-01-15T10:30:00
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }
    // YAML 常见写法: 2024-01-15 10:30:00
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    // 纯日期: 2024-01-15
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    // 斜线格式: 2024/01/15
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ContentError::InvalidDate(s.to_string()))
}

/// 归档列表中显示的日期，如 `January 10, 2023`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}
