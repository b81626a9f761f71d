mod app;
mod events;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{Write, stdout};
use std::time::Duration;

use carousel::config::{Config, Overrides, SliderConfig};
use carousel::controller::Step;
use carousel::direction::Direction;
use carousel::error::SliderError;
use carousel::log;
use carousel::runtime::{self, SliderHandle};
use carousel::viewport::{ResizeNotifier, SimulatedViewport};

use app::{App, PX_PER_COLUMN, PX_PER_ROW};
use events::{Action, EventHandler};
use tui::components::strip_columns;

/// Gap change per key press, in px
const GAP_STEP: f64 = 4.0;
/// Autoplay interval change per key press, in ms
const INTERVAL_STEP_MS: u64 = 500;

#[tokio::main]
async fn main() -> Result<()> {
    // Restore the terminal on panic, then log the panic before that
    install_restore_hook();
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments, then apply them over the config file
    let args: Vec<String> = std::env::args().collect();
    let config = Config::load().with_overrides(parse_args(&args));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result
}

/// Undo the mouse capture and alternate screen set up in `main`.
fn leave_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

/// Put the shell back into a usable state before the panic message prints.
fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_terminal(&mut stdout());
        previous(info);
    }));
}

fn parse_args(args: &[String]) -> Overrides {
    let mut overrides = Overrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--items" | "-n" => {
                match args.get(i + 1).map(|v| v.parse::<usize>()) {
                    Some(Ok(items)) => overrides.items = Some(items),
                    _ => eprintln!("Warning: --items requires a number"),
                }
                i += 1;
            }
            "--autoplay" => {
                match args.get(i + 1).map(|v| v.parse::<u64>()) {
                    Some(Ok(ms)) if ms > 0 => overrides.autoplay_interval_ms = Some(ms),
                    _ => eprintln!("Warning: --autoplay requires an interval in ms"),
                }
                i += 1;
            }
            "--rtl" => overrides.direction = Some(Direction::Rtl),
            "--loop" => overrides.loop_enabled = true,
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    overrides
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let resize = ResizeNotifier::new();
    let (mut app, direction) = App::new(config.slider, config.items(), config.direction());
    let size = terminal.size()?;
    app.set_strip_columns(strip_columns(size.width));

    let slider = runtime::mount(
        app.viewport.clone(),
        app.config,
        app.slides.len(),
        direction,
        &resize,
    );
    let mut edges = slider.edges();
    app.edges = *edges.borrow_and_update();

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, &mut app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Event::Resize(width, height) = event {
                            app.set_strip_columns(strip_columns(width));
                            resize.notify(width as f64 * PX_PER_COLUMN, height as f64 * PX_PER_ROW);
                            continue;
                        }
                        let action = EventHandler::handle_event(&app, &event);
                        apply_action(&mut app, &slider, action).await?;
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            // Edge visibility pushed by the slider task
            changed = edges.changed() => {
                if changed.is_err() {
                    return Err(SliderError::Unmounted.into());
                }
                app.edges = *edges.borrow_and_update();
            }

            // Repaint while the viewport animates
            _ = tokio::time::sleep(Duration::from_millis(16)) => {}
        }
    }

    let state = slider.snapshot().await?;
    log::log_state("final", &state);
    slider.unmount().await?;
    Ok(())
}

async fn apply_action(
    app: &mut App,
    slider: &SliderHandle<SimulatedViewport>,
    action: Action,
) -> Result<()> {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Previous => navigate(app, slider, Step::Previous).await?,
        Action::Next => navigate(app, slider, Step::Next).await?,
        Action::Wheel(delta) => {
            if let Some(step) = app.wheel.accumulate(delta) {
                navigate(app, slider, step).await?;
            }
        }
        Action::ToggleDirection => {
            app.toggle_direction();
            log::log_event(&format!("direction {}", app.direction));
        }
        Action::ToggleLoop => reconfigure(app, slider, |c| c.loop_enabled = !c.loop_enabled).await?,
        Action::ToggleAutoplay => {
            reconfigure(app, slider, |c| c.autoplay_enabled = !c.autoplay_enabled).await?
        }
        Action::ToggleScrollIndicator => {
            reconfigure(app, slider, |c| c.show_scroll_indicator = !c.show_scroll_indicator).await?
        }
        Action::IncreaseStep => reconfigure(app, slider, |c| c.items_per_step += 1).await?,
        Action::DecreaseStep => {
            reconfigure(app, slider, |c| c.items_per_step = c.items_per_step.saturating_sub(1)).await?
        }
        Action::IncreaseGap => reconfigure(app, slider, |c| c.gap += GAP_STEP).await?,
        Action::DecreaseGap => {
            reconfigure(app, slider, |c| c.gap = (c.gap - GAP_STEP).max(0.0)).await?
        }
        Action::IncreaseInterval => {
            reconfigure(app, slider, |c| c.autoplay_interval_ms += INTERVAL_STEP_MS).await?
        }
        Action::DecreaseInterval => {
            reconfigure(app, slider, |c| {
                c.autoplay_interval_ms = c.autoplay_interval_ms.saturating_sub(INTERVAL_STEP_MS)
            })
            .await?
        }
        Action::None => {}
    }
    Ok(())
}

async fn navigate(app: &mut App, slider: &SliderHandle<SimulatedViewport>, step: Step) -> Result<()> {
    let navigation = slider.navigate(step).await?;
    app.record(navigation);
    Ok(())
}

/// Edit the config locally, then hand the result to the slider task.
async fn reconfigure(
    app: &mut App,
    slider: &SliderHandle<SimulatedViewport>,
    edit: impl FnOnce(&mut SliderConfig),
) -> Result<()> {
    let config = app.update_config(edit);
    if slider.reconfigure(config, app.slides.len()).await? {
        log::log_event("slider rebuilt after option change");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("carousel")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let overrides = parse_args(&args(&["--items", "4", "--rtl", "--loop", "--autoplay", "1500"]));
        assert_eq!(overrides.items, Some(4));
        assert_eq!(overrides.direction, Some(Direction::Rtl));
        assert!(overrides.loop_enabled);
        assert_eq!(overrides.autoplay_interval_ms, Some(1500));
    }

    #[test]
    fn test_parse_args_ignores_bad_values() {
        let overrides = parse_args(&args(&["--items", "many", "--autoplay", "0", "--bogus"]));
        assert_eq!(overrides.items, None);
        assert_eq!(overrides.autoplay_interval_ms, None);
        assert!(!overrides.loop_enabled);
    }

    #[test]
    fn test_leave_terminal_exits_alternate_screen() {
        let mut out: Vec<u8> = Vec::new();
        leave_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_parse_args_empty() {
        let overrides = parse_args(&args(&[]));
        assert_eq!(overrides.items, None);
        assert_eq!(overrides.direction, None);
    }
}
