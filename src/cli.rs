use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::models::Tab;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Researcher portfolio in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 启动时显示的标签
    #[arg(short, long, value_enum)]
    pub tab: Option<Tab>,

    /// 配置文件路径（默认 ~/.config/folio/config.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 不捕获鼠标
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(tab) = self.tab {
            config.start_tab = tab;
        }
        if self.no_mouse {
            config.mouse = false;
        }
        config
    }
}
