//! Interactive driver for the attachment carousel.
//!
//! Usage: `carousel <source>...`, then type commands on stdin:
//! `next`, `prev`, `goto N`, `tap`, `pinch on|off`, `close`, `show`, `quit`.

use anyhow::{Context, Result, anyhow, bail};
use attachment_carousel::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use attachment_carousel::{
    AttachmentItem, CarouselController, CarouselHost, CarouselSettings, ContainerDimensions,
    ThreadScheduler,
};
use attachment_carousel::constants::{STEP_BACK, STEP_FORWARD};
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// How long to wait for input before checking timers again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct LoggingHost;

impl CarouselHost for LoggingHost {
    fn on_navigate(&mut self, item: &AttachmentItem) {
        tracing::info!(source = %item.source, "Navigated");
    }

    fn on_close(&mut self) {
        tracing::info!("Close requested");
    }

    fn set_pager_page(&mut self, display_index: usize) {
        tracing::debug!(display_index, "Pager moved");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    GoTo(isize),
    Tap,
    Pinch(bool),
    Close,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        bail!("empty command");
    };
    let command = match word {
        "next" => Command::Next,
        "prev" => Command::Prev,
        "goto" => {
            let arg = parts.next().ok_or_else(|| anyhow!("goto needs a page index"))?;
            Command::GoTo(arg.parse().with_context(|| format!("invalid page index: {arg}"))?)
        }
        "tap" => Command::Tap,
        "pinch" => match parts.next() {
            Some("on") => Command::Pinch(true),
            Some("off") => Command::Pinch(false),
            _ => bail!("pinch needs on|off"),
        },
        "close" => Command::Close,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command: {other}"),
    };
    Ok(command)
}

fn print_view(controller: &CarouselController<LoggingHost, ThreadScheduler>) {
    let view = controller.view(ContainerDimensions::new(1.0, 1.0));
    for (index, item) in view.items.iter().enumerate() {
        let marker = if index == view.current_index { '>' } else { ' ' };
        println!("{marker} [{index}] {}", item.url);
    }
    println!(
        "page {} (logical {}), arrows {}, back {}, forward {}",
        view.current_index,
        view.logical_index,
        if view.arrows_visible { "shown" } else { "hidden" },
        view.can_go_back,
        view.can_go_forward,
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let items: Vec<AttachmentItem> = std::env::args().skip(1).map(AttachmentItem::new).collect();
    let Some(first) = items.first().map(|item| item.source.clone()) else {
        bail!("usage: carousel <source>...");
    };

    let settings = CarouselSettings::load();
    let scheduler = ThreadScheduler::new().context("failed to start timer thread")?;
    let mut controller =
        CarouselController::new(&items, 0, first, LoggingHost, scheduler, &settings)?;
    let mut watcher = default_settings_path().and_then(|p| match SettingsWatcher::new(p) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!("Settings hot-reload disabled: {}", e);
            None
        }
    });

    let (tx, lines) = mpsc::channel();
    std::thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;

    print_view(&controller);
    loop {
        while let Some(token) = controller.scheduler().try_recv_fired() {
            if controller.handle_timer(token) {
                println!("arrows hidden");
            }
        }

        if let Some(event) = watcher.as_mut().and_then(|w| w.poll()) {
            match event {
                SettingsEvent::Created | SettingsEvent::Modified => {
                    tracing::info!("Settings file changed, reloading...");
                    controller.apply_settings(&CarouselSettings::load());
                }
                SettingsEvent::Deleted => tracing::warn!("Settings file deleted"),
                SettingsEvent::Error(e) => tracing::error!("Settings watch error: {}", e),
            }
        }

        let line = match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Next) => controller.step(STEP_FORWARD),
            Ok(Command::Prev) => controller.step(STEP_BACK),
            Ok(Command::GoTo(page)) => controller.go_to_page(page),
            Ok(Command::Tap) => controller.handle_tap(),
            Ok(Command::Pinch(active)) => controller.set_gesture_active(active),
            Ok(Command::Close) => {
                controller.swipe_down();
                break;
            }
            Ok(Command::Show) => print_view(&controller),
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("{e:#}");
                continue;
            }
        }
    }

    controller.teardown();
    Ok(())
}
