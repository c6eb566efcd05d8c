pub mod pipeline;
pub mod stages;

use crate::config::SiteConfig;
use anyhow::Result;
use pipeline::BuildStats;
use std::path::Path;

/// 构建运行参数
#[derive(Debug, Default)]
pub struct BuildParams {
    pub clean: bool,
}

pub fn run(project_root: &Path, config: &SiteConfig, params: BuildParams) -> Result<BuildStats> {
    let archive_dir = project_root
        .join(&config.build.output_dir)
        .join(&config.build.archive_dir);

    if params.clean && archive_dir.exists() {
        std::fs::remove_dir_all(&archive_dir)?;
        tracing::info!("已清除输出目录：{}", archive_dir.display());
    }

    pipeline::execute(project_root, config)
}
