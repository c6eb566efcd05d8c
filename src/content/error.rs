use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("读取 {} 失败：{source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} 的 front matter 字段类型不符：{source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("无法解析日期：{0}")]
    InvalidDate(String),

    #[error("{} 缺少日期：请在 front matter 中设置 date，或使用 YYYY-MM-DD- 文件名前缀", .path.display())]
    MissingDate { path: PathBuf },
}
