use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use endless_runner::core::pacing::FrameClock;
use endless_runner::input::map_event;
use endless_runner::ui::{render_game_over_scene, render_runner_scene};
use endless_runner::{process_input, step_frame, GameConfig, LoopControl, Phase, RunnerGame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    // Silent unless RUST_LOG is set; stderr keeps logs off the alternate screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // Setup terminal; the guard restores it on every exit path from here on
    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal);

    drop(terminal);
    guard.restore()?;

    result
}

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard;

impl TerminalGuard {
    /// Explicit restore that reports the first failure.
    fn restore(self) -> io::Result<()> {
        let result = restore_terminal();
        std::mem::forget(self);
        result
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    // Every step runs even if an earlier one fails
    let steps = [
        disable_raw_mode(),
        io::stdout().execute(LeaveAlternateScreen).map(|_| ()),
        io::stdout().execute(Show).map(|_| ()),
    ];
    first_failure(steps)
}

/// The first error among already-attempted steps, if any.
fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn run(terminal: &mut Term) -> io::Result<()> {
    let mut rng = ChaCha8Rng::from_entropy();
    let config = GameConfig::default();
    let clock = FrameClock::new(config.fps);
    let mut game = RunnerGame::new(config, &mut rng);

    loop {
        match game.phase {
            Phase::Playing => {
                let frame_start = Instant::now();

                // Drain pending input without blocking
                while event::poll(Duration::ZERO)? {
                    let Some(input) = map_event(&event::read()?) else {
                        continue;
                    };
                    if process_input(&mut game, input, &mut rng) == LoopControl::Quit {
                        return Ok(());
                    }
                }

                step_frame(&mut game, &mut rng);

                terminal.draw(|f| {
                    let area = f.size();
                    render_runner_scene(f, area, &game);
                })?;

                clock.wait(frame_start);
            }
            Phase::GameOver => {
                terminal.draw(|f| {
                    let area = f.size();
                    render_game_over_scene(f, area, &game);
                })?;

                // Block until a key changes the state; redraw on resize
                loop {
                    let event = event::read()?;
                    if let Event::Resize(_, _) = event {
                        terminal.draw(|f| {
                            let area = f.size();
                            render_game_over_scene(f, area, &game);
                        })?;
                        continue;
                    }
                    let Some(input) = map_event(&event) else {
                        continue;
                    };
                    if process_input(&mut game, input, &mut rng) == LoopControl::Quit {
                        return Ok(());
                    }
                    if game.phase == Phase::Playing {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_first_failure_reports_earliest_error() {
        let result = first_failure([failed("raw mode"), Ok(()), failed("cursor")]);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_first_failure_after_success() {
        let result = first_failure([Ok(()), failed("alternate screen")]);
        assert_eq!(result.unwrap_err().to_string(), "alternate screen");
    }

    #[test]
    fn test_all_steps_ok() {
        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
