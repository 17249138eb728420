use anyhow::Result;
use log::info;

mod app;
mod chat;
mod config;
mod content;
mod gateway;
mod handler;
mod quiz;
mod tui;
mod ui;

use app::App;
use config::Config;
use tui::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::load().unwrap_or_default();
    if config.resolved_api_key().is_none() {
        eprintln!(
            "warning: no Gemini API key found. Set GEMINI_API_KEY or add \
             \"api_key\" to the config file; chat and the daily verse will \
             show fallback text without one."
        );
    }
    info!("starting noor with model {}", config.resolved_model());

    let mut app = App::new(&config)?;
    app.spawn_verse_fetch();

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        match events.next().await {
            Some(event) => {
                handler::handle_event(&mut app, event);
                app.drain_tasks().await;
            }
            None => break,
        }
    }

    tui::restore()?;
    Ok(())
}
