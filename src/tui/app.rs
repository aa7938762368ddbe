//! Main TUI application

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    Terminal,
};
use tracing::warn;

use crate::dance::{AnimationState, Viewport};
use crate::driver::AnimationDriver;
use crate::MoonwalkConfig;

use super::ascii_animation::SlideAnimation;
use super::frames::{figure_lines, FRAME_TICK};
use super::input::{DelayInput, InputAction};
use super::widgets::{ControlBar, ControlRects, HeaderBar, HelpBar, StageWidget, StatusBar};

/// Minimum stage height that fits the figure between ceiling and floor.
const MIN_STAGE_HEIGHT: u16 = 10;

/// The terminal stage measured in offset pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageViewport {
    pub width_cells: u16,
    pub px_per_cell: u32,
}

impl Viewport for StageViewport {
    fn right_edge(&self, right_offset: i32) -> i32 {
        self.width_cells as i32 * self.px_per_cell as i32 - right_offset
    }
}

/// Status line content
#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    is_error: bool,
}

/// Application state
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AnimationState,
    driver: AnimationDriver,
    /// Eased on-screen position of the dancer
    slide: SlideAnimation,
    delay_input: DelayInput,
    px_per_cell: u32,
    status: Option<StatusMessage>,
    should_quit: bool,
    /// Stage area from the last draw; zero until laid out
    stage_rect: Rect,
    /// Control areas from the last draw, for mouse clicks
    controls: ControlRects,
}

impl App {
    /// Create a new App instance and take over the terminal.
    pub fn new(config: &MoonwalkConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app = Self {
            terminal,
            state: AnimationState::new(config),
            driver: AnimationDriver::new(),
            slide: SlideAnimation::new(),
            delay_input: DelayInput::new(config.delay),
            px_per_cell: config.px_per_cell,
            status: None,
            should_quit: false,
            stage_rect: Rect::default(),
            controls: ControlRects::default(),
        };
        if config.autostart {
            app.toggle_running();
        }
        Ok(app)
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Drain any events queued during terminal setup.
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }

        while !self.should_quit {
            self.draw()?;

            // A tick and a redraw deadline race; input is drained after.
            let ticked = tokio::select! {
                _ = self.driver.next_tick() => true,
                _ = tokio::time::sleep(FRAME_TICK) => false,
            };
            if ticked {
                self.on_tick();
            }

            while event::poll(Duration::from_millis(0))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    // Silently consume other events; resize is picked up by draw()
                    _ => {}
                }
                if self.should_quit {
                    break;
                }
            }
        }

        self.driver.stop();
        Ok(())
    }

    fn on_tick(&mut self) {
        self.state.tick();
        self.measure();
    }

    /// Check whether the dancer has left the stage.
    ///
    /// Measures where the current slide started, not its target.
    fn measure(&mut self) {
        // Ignore until the stage has been laid out
        if self.stage_rect.width == 0 {
            return;
        }
        let viewport = StageViewport {
            width_cells: self.stage_rect.width,
            px_per_cell: self.px_per_cell,
        };
        self.state.observe_viewport(&viewport);
    }

    fn toggle_running(&mut self) {
        if self.state.toggle_running() {
            self.driver.start(self.state.tick_interval());
        } else {
            self.driver.stop();
        }
    }

    fn toggle_dance(&mut self) {
        let mode = self.state.toggle_dance();
        self.set_status(format!("Dance style: {}", mode.label()), false);
    }

    fn focus_delay(&mut self) {
        self.delay_input.focus();
    }

    fn apply_delay(&mut self, raw: &str) {
        match self.state.set_delay(raw) {
            Ok(delay) => {
                self.driver.set_period(delay);
                self.set_status(format!("Delay set to {}ms", delay.as_millis()), false);
            }
            Err(e) => {
                warn!("{}", e);
                self.set_status(e.to_string(), true);
            }
        }
        self.delay_input.blur(self.state.tick_interval());
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage { text, is_error });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.delay_input.focused {
            match self.delay_input.handle_key(key) {
                InputAction::None => {}
                InputAction::Submit(raw) => self.apply_delay(&raw),
                InputAction::Cancel => self.delay_input.blur(self.state.tick_interval()),
                InputAction::Quit => self.should_quit = true,
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Char('s') => self.toggle_running(),
            KeyCode::Char('d') => self.toggle_dance(),
            KeyCode::Tab | KeyCode::Enter | KeyCode::Char('e') => self.focus_delay(),
            _ => {}
        }
    }

    /// Clicks on the controls act like the matching keys.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        if self.controls.start.contains(pos) {
            self.toggle_running();
        } else if self.controls.delay.contains(pos) {
            self.focus_delay();
        } else if self.controls.dance.contains(pos) {
            self.toggle_dance();
        } else if self.delay_input.focused {
            self.delay_input.blur(self.state.tick_interval());
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let frame = self.state.render_frame();
        self.slide.retarget(&frame);
        let offset_cells = (self.slide.current_offset() / self.px_per_cell as f32).round() as i32;
        let figure = figure_lines(&frame.pose, frame.dance_mode.is_mirrored());

        let delay_input = &self.delay_input;
        let status = &self.status;
        let mut stage_rect = Rect::default();
        let mut controls = ControlRects::default();

        self.terminal.draw(|f| {
            let size = f.area();

            // Main layout: header, stage, controls, status, help
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),                  // Header
                    Constraint::Min(MIN_STAGE_HEIGHT),      // Stage
                    Constraint::Length(3),                  // Controls
                    Constraint::Length(1),                  // Status
                    Constraint::Length(1),                  // Help
                ])
                .split(size);

            f.render_widget(
                HeaderBar {
                    dance_mode: frame.dance_mode,
                    running: frame.running,
                    offset: frame.cumulative_offset,
                },
                chunks[0],
            );

            f.render_widget(
                StageWidget {
                    figure: &figure,
                    offset_cells,
                },
                chunks[1],
            );
            stage_rect = chunks[1];

            f.render_widget(
                ControlBar {
                    running: frame.running,
                    delay_text: &delay_input.buffer,
                    delay_focused: delay_input.focused,
                    dance_mode: frame.dance_mode,
                },
                chunks[2],
            );
            controls = ControlRects::split(chunks[2]);

            if delay_input.focused {
                let field = controls.delay;
                let text_width = delay_input.buffer.chars().count() as u16;
                let inner_width = field.width.saturating_sub(2);
                let start = field.x + 1 + inner_width.saturating_sub(text_width) / 2;
                let cursor_x = start + delay_input.cursor as u16;
                f.set_cursor_position((
                    cursor_x.min(field.x + field.width.saturating_sub(2)),
                    field.y + 1,
                ));
            }

            if let Some(msg) = status {
                f.render_widget(
                    StatusBar {
                        text: &msg.text,
                        is_error: msg.is_error,
                    },
                    chunks[3],
                );
            }

            f.render_widget(
                HelpBar {
                    editing: delay_input.focused,
                },
                chunks[4],
            );
        })?;

        // Write back the captured layout; a new stage size moves the dancer.
        self.controls = controls;
        if stage_rect != self.stage_rect {
            self.stage_rect = stage_rect;
            self.measure();
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.driver.stop();
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            crossterm::event::DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_viewport_right_edge() {
        let viewport = StageViewport {
            width_cells: 80,
            px_per_cell: 10,
        };
        assert_eq!(viewport.right_edge(0), 800);
        assert_eq!(viewport.right_edge(780), 20);
        assert_eq!(viewport.right_edge(840), -40);
    }

    #[test]
    fn test_dancer_loops_on_terminal_stage() {
        let viewport = StageViewport {
            width_cells: 12,
            px_per_cell: 10,
        };
        let mut state = AnimationState::default();
        let mut resets = 0;
        for _ in 0..8 {
            state.tick();
            if state.observe_viewport(&viewport) {
                resets += 1;
            }
        }
        // 120px stage, 60px steps: shown at 120px on the second tick, back
        // at zero on the third.
        assert_eq!(resets, 2);
        assert_eq!(state.cumulative_offset(), 120);
    }

    #[test]
    fn test_dancer_walks_fully_off_before_looping() {
        let viewport = StageViewport {
            width_cells: 12,
            px_per_cell: 10,
        };
        let mut state = AnimationState::default();
        let mut drawn = Vec::new();
        for _ in 0..6 {
            state.tick();
            state.observe_viewport(&viewport);
            drawn.push(state.render_frame().cumulative_offset);
        }
        assert_eq!(drawn, vec![60, 120, 0, 60, 120, 0]);

        let furthest = drawn.iter().copied().max().unwrap_or_default();
        assert!(viewport.right_edge(furthest) <= 0);
    }
}
