use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// 日志级别覆盖变量
const LOG_ENV: &str = "FOLIO_LOG";

/// 获取数据目录路径 (~/.local/share/folio/)
pub fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user data directory"))?
        .join("folio");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化日志，失败时在 stderr 提示一次并继续运行（不记日志）
///
/// 必须在进入备用屏幕之前调用，否则提示会被覆盖。
pub fn init_or_warn(level: &str) -> Option<PathBuf> {
    disabled_on_error(get_data_dir().and_then(|dir| init_in(&dir, level)))
}

fn disabled_on_error(result: io::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("folio: logging disabled: {e}");
            None
        }
    }
}

/// 初始化日志，写入 `dir` 下的 folio.log
///
/// 终端处于备用屏幕时不能写 stdout/stderr，所以日志只进文件。
pub fn init_in(dir: &Path, level: &str) -> io::Result<PathBuf> {
    let log_path = dir.join("folio.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(log_path)
}
