//! 终端模式的进入与恢复
//!
//! 恢复时每一步单独执行，前一步失败不影响后面；panic 时同样会恢复。

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::warn;

/// 持有期间终端处于 raw 模式和备用屏幕，drop 时恢复
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    pub fn enter(mouse: bool) -> io::Result<Self> {
        install_panic_hook(mouse);

        enable_raw_mode()?;
        // 之后任何一步失败，guard 的 drop 都会撤销已做的部分
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.mouse);
    }
}

/// 先恢复终端再交给原来的 panic hook，否则 panic 信息会被备用屏幕吞掉
fn install_panic_hook(mouse: bool) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(mouse);
        previous(info);
    }));
}

fn restore(mouse: bool) {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
    restore_on(&mut io::stdout(), mouse);
}

/// 退出备用屏幕并显示光标，单步失败只记日志
fn restore_on<W: Write>(out: &mut W, mouse: bool) {
    if mouse {
        if let Err(e) = execute!(out, DisableMouseCapture) {
            warn!(error = %e, "failed to disable mouse capture");
        }
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
    if let Err(e) = execute!(out, Show) {
        warn!(error = %e, "failed to show cursor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    /// 第一次写入失败，之后正常
    struct FlakyWriter {
        failed: bool,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal went away"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_on(&mut out, false);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(text.contains(SHOW_CURSOR));
        assert!(text.find(LEAVE_ALTERNATE_SCREEN) < text.find(SHOW_CURSOR));
    }

    #[test]
    fn test_restore_continues_after_failed_step() {
        let mut out = FlakyWriter {
            failed: false,
            written: Vec::new(),
        };
        // 关闭鼠标捕获这一步失败
        restore_on(&mut out, true);

        let text = String::from_utf8(out.written).unwrap();
        assert!(text.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(text.contains(SHOW_CURSOR));
    }
}
