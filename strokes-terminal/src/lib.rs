/// Terminal driver for the strokes slide deck
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use strokes_core::{Config, Point2, Scene, Slide};

pub mod renderer;

pub use renderer::CellCanvas;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: CellCanvas,
    pointer: Point2,
    frame_time: Duration,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Create an app sized to the current terminal
    pub fn new(config: Config, target_fps: u32) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self::with_size(config, target_fps, columns, rows))
    }

    pub fn with_size(config: Config, target_fps: u32, columns: u16, rows: u16) -> Self {
        let pointer = config.canvas.center();

        Self {
            canvas: CellCanvas::new(columns as usize, rows as usize, config.canvas),
            scene: Scene::new(config),
            pointer,
            frame_time: Duration::from_millis(1000 / u64::from(target_fps.max(1))),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.scene.set_slide(slide);
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Drain every pending event before drawing
            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Apply one input event to the app state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Left => self.scene.previous_slide(),
                KeyCode::Right => self.scene.next_slide(),
                _ => {}
            },
            Event::Mouse(MouseEvent { column, row, .. }) => {
                self.pointer = self.canvas.cell_to_canvas(column, row);
            }
            Event::Resize(columns, rows) => {
                log::debug!("terminal resized to {columns}x{rows}");
                self.canvas.resize(columns as usize, rows as usize);
            }
            _ => {}
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pointer(&self) -> Point2 {
        self.pointer
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();

        if let Err(err) = self.scene.draw(&mut self.canvas, self.pointer) {
            log::error!("failed to draw {}: {err}", self.scene.slide().title());
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        let slide = self.scene.slide();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Strokes | {}/{} {} | FPS: {:.1} | Left/Right=Slide Mouse=Pointer Q=Quit",
                slide.index() + 1,
                Slide::ALL.len(),
                slide.title(),
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEventKind};

    fn app() -> TerminalApp {
        TerminalApp::with_size(Config::default(), 30, 80, 30)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys_cycle_slides() {
        let mut app = app();
        assert_eq!(app.scene().slide(), Slide::Line);
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.scene().slide(), Slide::Cube);
        app.handle_event(key(KeyCode::Right));
        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.scene().slide(), Slide::Rectangle);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('x')));
        assert!(app.is_running());
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.is_running());
    }

    #[test]
    fn test_mouse_moves_pointer() {
        let mut app = app();
        assert_eq!(app.pointer(), Point2::new(400, 300));
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.pointer(), Point2::new(5, 10));
    }

    #[test]
    fn test_start_slide() {
        let app = app().with_slide(Slide::Sierpinski);
        assert_eq!(app.scene().slide(), Slide::Sierpinski);
    }
}
