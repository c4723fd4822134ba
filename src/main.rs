mod cli;
mod config;
mod logging;
mod models;
mod terminal;
mod ui;

use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::info;

use crate::cli::Cli;
use crate::config::{Config, default_config_path, load_config, load_explicit_config};
use crate::models::Portfolio;
use crate::terminal::TerminalGuard;
use crate::ui::{App, render};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 显式指定的配置必须存在；默认位置 (~/.config/folio/config.toml) 可以没有
    let config = match (&cli.config, default_config_path()) {
        (Some(path), _) => load_explicit_config(path)?,
        (None, Some(path)) => load_config(&path)?,
        (None, None) => Config::default(),
    };
    let config = cli.apply(config);

    let log_path = logging::init_or_warn(&config.log_level);
    info!(
        start_tab = ?config.start_tab,
        mouse = config.mouse,
        log = ?log_path,
        "starting"
    );

    // 创建应用状态
    let mut app = App::new(Portfolio::builtin(), config.start_tab);

    // 设置终端，guard 离开作用域（包括出错和 panic）时恢复
    let guard = TerminalGuard::enter(config.mouse).context("failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    drop(guard);
    info!(last_tab = ?app.active_tab, "exiting");

    result.context("event loop failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key.code),
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
