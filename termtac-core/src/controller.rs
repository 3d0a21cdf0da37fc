//! Display controller
//!
//! Owns the renderer, the button source and the active state. The board
//! code calls [`Controller::initialize`] once and then
//! [`Controller::run_active_state`] once per tick; each tick runs exactly
//! one state body to completion and never blocks.

use crate::board::Cell;
use crate::config::{ConfigError, TermConfig};
use crate::error::TermError;
use crate::message::UserMessage;
use crate::render::Renderer;
use crate::state::{ErrorKind, Event, State};
use crate::traits::{ButtonInput, Terminal};

/// Cooperative display state machine
pub struct Controller<T, B> {
    renderer: Renderer<T>,
    buttons: B,
    config: TermConfig,
    /// `None` until `initialize` runs
    state: Option<State>,
    /// Consecutive ticks that ended in a transport error
    transport_failures: u8,
}

/// Consecutive failed ticks before the terminal is declared faulty
pub const MAX_TRANSPORT_FAILURES: u8 = 8;

impl<T: Terminal, B: ButtonInput> Controller<T, B> {
    /// Create a controller with the demo button mapping
    pub fn new(terminal: T, buttons: B) -> Self {
        Self {
            renderer: Renderer::new(terminal),
            buttons,
            config: TermConfig::default(),
            state: None,
            transport_failures: 0,
        }
    }

    /// Create a controller with custom button bindings
    pub fn with_config(terminal: T, buttons: B, config: TermConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            renderer: Renderer::new(terminal),
            buttons,
            config,
            state: None,
            transport_failures: 0,
        })
    }

    /// Print the startup banner, put the terminal in passthrough, hide the
    /// cursor and install the Setup state
    ///
    /// The state is installed even if the terminal rejects the banner;
    /// Setup redraws the whole screen anyway.
    pub fn initialize(&mut self) -> Result<(), TermError> {
        self.state = Some(State::Setup);
        self.renderer.write_banner()
    }

    /// Run one iteration of the active state
    ///
    /// After [`MAX_TRANSPORT_FAILURES`] consecutive ticks fail in the
    /// transport the machine faults with [`ErrorKind::TerminalFault`].
    pub fn run_active_state(&mut self) -> Result<(), TermError> {
        let result = match self.state.ok_or(TermError::NotInitialized)? {
            State::Setup => self.run_setup(),
            State::Idle => self.run_idle(),
            State::Error(_) => Ok(()),
        };

        match result {
            Err(TermError::Transport) => {
                self.transport_failures = self.transport_failures.saturating_add(1);
                if self.transport_failures >= MAX_TRANSPORT_FAILURES {
                    self.fault(ErrorKind::TerminalFault);
                }
            }
            _ => self.transport_failures = 0,
        }
        result
    }

    /// Enter the error trap
    pub fn fault(&mut self, kind: ErrorKind) {
        self.apply(Event::ErrorDetected(kind));
    }

    /// Current state, `None` before `initialize`
    pub fn state(&self) -> Option<State> {
        self.state
    }

    fn apply(&mut self, event: Event) {
        self.state = self.state.map(|s| s.transition(event));
    }

    /// Configure the terminal, draw the board and the waiting message
    fn run_setup(&mut self) -> Result<(), TermError> {
        self.renderer.configure_screen()?;
        self.renderer.draw_board()?;
        self.renderer.write_user_message(UserMessage::Waiting)?;
        self.renderer.flush()?;

        self.apply(Event::SetupComplete);
        Ok(())
    }

    /// Handle every latched button press
    fn run_idle(&mut self) -> Result<(), TermError> {
        for binding in self.config.bindings {
            if !self.buttons.was_pressed(binding.button) {
                continue;
            }

            self.buttons.acknowledge(binding.button);
            self.renderer
                .draw_glyph(Cell::new(binding.cell)?, binding.glyph)?;
            self.renderer.write_user_message(binding.message)?;
        }
        Ok(())
    }
}
