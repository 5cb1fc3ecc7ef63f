//! The interactive frame loop.

use std::time::{Duration, Instant};

use color_eyre::eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use mystify_core::{Dimensions, Settings};
use mystify_render::{CanvasWidget, Renderer};
use mystify_sim::Simulation;

use crate::status;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the animation frozen?
    paused: bool,
    /// Advance exactly one frame while paused.
    single_step: bool,
    /// Current knobs.
    settings: Settings,
    /// Polygon state.
    simulation: Simulation,
    /// Surface and cell buffers.
    renderer: Renderer,
    /// Frames advanced so far.
    frames: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// Buffers start empty; the first [`App::resize`] sizes them.
    pub fn new(settings: Settings) -> Self {
        let mut simulation = Simulation::new(Dimensions::default(), settings.seed);
        simulation.apply(&settings);
        Self {
            running: false,
            paused: false,
            single_step: false,
            settings,
            simulation,
            renderer: Renderer::default(),
            frames: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.resize(Dimensions::from((size.width, size.height)));

        self.running = true;
        while self.running {
            let start = Instant::now();
            self.handle_crossterm_events(Duration::ZERO)?;

            if !self.paused || self.single_step {
                self.advance();
                self.single_step = false;
            }
            terminal.draw(|frame| self.render(frame))?;

            self.wait_for_next_frame(start)?;
        }

        info!(frames = self.frames, "exiting");
        Ok(())
    }

    /// Step the simulation and render it into the cell grid.
    fn advance(&mut self) {
        self.simulation.step(self.settings.max_velocity);
        self.renderer.render(&self.simulation, self.settings.trail_incr);
        self.frames += 1;
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(CanvasWidget::new(self.renderer.cells()), frame.area());
        if self.settings.show_status {
            status::render(frame, &self.settings);
        }
    }

    /// Sleep out the rest of the frame budget, waking early on input.
    fn wait_for_next_frame(&self, start: Instant) -> color_eyre::Result<()> {
        let elapsed = Instant::now()
            .checked_duration_since(start)
            .ok_or_else(|| eyre!("clock went backwards during a frame"))?;

        if let Some(remaining) = self.settings.frame_budget().checked_sub(elapsed) {
            // A pending event is left queued for the next frame to handle.
            event::poll(remaining)?;
        }
        Ok(())
    }

    /// Reallocate buffers for a new screen size and rescale the polygons.
    ///
    /// The cell grid is redrawn from the rescaled state without stepping,
    /// so a paused animation stays on screen.
    fn resize(&mut self, screen: Dimensions) {
        self.renderer.resize(screen);
        self.simulation.resize(Dimensions::surface_for_screen(screen));
        self.renderer.render(&self.simulation, self.settings.trail_incr);
        debug!(width = screen.width, height = screen.height, "resized");
    }

    /// Reads at most one crossterm event and updates the state of [`App`].
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.resize(Dimensions::from((width, height))),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.paused = !self.paused,
            (_, KeyCode::Char('s')) => {
                self.single_step = true;
                self.paused = true;
            }
            (_, KeyCode::Char('r')) => {
                self.simulation.reset();
                info!("reinitialized polygons");
            }
            (_, KeyCode::Char('w')) => self.settings.toggle_status(),
            (_, KeyCode::Char('l')) => self.adjust(Settings::more_points),
            (_, KeyCode::Char('k')) => self.adjust(Settings::fewer_points),
            (_, KeyCode::Char('b')) => self.adjust(Settings::sparser_trails),
            (_, KeyCode::Char('v')) => self.adjust(Settings::denser_trails),
            (_, KeyCode::Char('u')) => self.adjust(Settings::more_polys),
            (_, KeyCode::Char('y')) => self.adjust(Settings::fewer_polys),
            (_, KeyCode::Char('j')) => self.adjust(Settings::longer_trails),
            (_, KeyCode::Char('h')) => self.adjust(Settings::shorter_trails),
            (_, KeyCode::Char('o')) => self.adjust(Settings::faster_frames),
            (_, KeyCode::Char('i')) => self.adjust(Settings::slower_frames),
            (_, KeyCode::Char('m')) => self.adjust(Settings::speed_up),
            (_, KeyCode::Char('n')) => self.adjust(Settings::slow_down),
            _ => {}
        }
    }

    /// Change a setting and push the new counts into the simulation.
    fn adjust(&mut self, change: fn(&mut Settings)) {
        change(&mut self.settings);
        self.simulation.apply(&self.settings);
        debug!(settings = ?self.settings, "settings changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
