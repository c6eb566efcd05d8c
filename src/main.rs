use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod archive;
mod build;
mod check;
mod config;
mod content;
mod init;

#[derive(Parser)]
#[command(name = "dustarchive", about = "博客归档构建器", version = long_version())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成归档页（年份、标签、关系图）
    Build {
        /// 构建前清除归档输出目录
        #[arg(long)]
        clean: bool,

        /// 项目根目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// 检查配置、内容目录和标题唯一性
    Check {
        /// 项目根目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// 创建默认配置和示例文章
    Init {
        /// 项目根目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

impl Commands {
    fn root(&self) -> &Path {
        match self {
            Commands::Build { root, .. } | Commands::Check { root } | Commands::Init { root } => {
                root.as_path()
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // None 等同于 Build { clean: false, root: "." }
    let command = cli.command.unwrap_or(Commands::Build {
        clean: false,
        root: PathBuf::from("."),
    });

    init_tracing(command.root());

    match command {
        Commands::Build { clean, root } => {
            let root = root.canonicalize()?;
            let site_config = config::SiteConfig::load(&root)?;
            build::run(&root, &site_config, build::BuildParams { clean })?;
        }
        Commands::Check { root } => {
            let root = root.canonicalize()?;
            let result = check::run(&root)?;

            for w in &result.warnings {
                tracing::warn!("{w}");
            }
            for e in &result.errors {
                tracing::error!("{e}");
            }

            if result.errors.is_empty() {
                tracing::info!("检查通过（{} 个警告）", result.warnings.len());
            } else {
                anyhow::bail!(
                    "检查未通过：{} 个错误，{} 个警告",
                    result.errors.len(),
                    result.warnings.len()
                );
            }
        }
        Commands::Init { root } => {
            std::fs::create_dir_all(&root)?;
            if init::ensure_initialized(&root)? {
                tracing::info!("已初始化项目：{}", root.display());
            } else {
                tracing::info!("{} 已存在，跳过初始化", config::CONFIG_FILE);
            }
        }
    }

    Ok(())
}

/// 配置中的日志级别作为默认值，RUST_LOG 优先
fn init_tracing(root: &Path) {
    let log = config::SiteConfig::load(root).ok().map(|c| c.log).unwrap_or_default();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

const fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\ncommit: ",
        env!("DUSTARCHIVE_GIT_COMMIT"),
        "\nbuild:  ",
        env!("DUSTARCHIVE_BUILD_DATE"),
        "\ntarget: ",
        env!("DUSTARCHIVE_BUILD_TARGET"),
    )
}
