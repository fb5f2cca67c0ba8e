//! Clock Engine - Main orchestrator
//!
//! The ClockEngine is the central coordinator that:
//! - Accepts settings commands via channel
//! - Renders the current time on every tick
//! - Applies brightness and power state to the frame
//! - Writes the frame to the LED driver
//!
//! The engine does not read a clock. The host decomposes its RTC time and
//! calls [`ClockEngine::tick`] periodically from a single task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use heapless::String;
use rand::RngCore;

use crate::dialect::Dialect;
use crate::driver::LedDriver;
use crate::grid::LED_COUNT;
use crate::logging::{log_debug, log_warn};
use crate::math8::{MAX_BRIGHTNESS_PERCENT, percent_to_scale, scale_color};
use crate::prefix::PrefixMode;
use crate::render::{Frame, RenderContext, RenderError, Rendering, TRANSCRIPT_CAPACITY, Transcript};
use crate::time::TimeOfDay;
use crate::Rgb;

/// Command channel capacity
const COMMAND_CHANNEL_SIZE: usize = 8;

/// Commands that can be sent to the clock engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    /// Set the color of lit words
    SetColor(Rgb),
    /// Set brightness in percent (0-100)
    SetBrightness(u8),
    /// Turn the display on or off
    SetPower(bool),
    /// Change the prefix policy
    SetPrefixMode(PrefixMode),
    /// Switch to another plate layout
    SetDialect(Dialect),
    /// Enable or disable transcripts
    SetTranscript(Transcript),
}

/// Type alias for command sender
pub type CommandSender = Sender<'static, CriticalSectionRawMutex, ClockCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, ClockCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for the command channel
pub type CommandChannel = Channel<CriticalSectionRawMutex, ClockCommand, COMMAND_CHANNEL_SIZE>;

/// Initial engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockEngineConfig {
    pub color: Rgb,
    /// Brightness in percent (0-100)
    pub brightness: u8,
    pub enabled: bool,
    pub prefix_mode: PrefixMode,
    pub dialect: Dialect,
    pub transcript: Transcript,
}

impl Default for ClockEngineConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(255, 255, 255),
            brightness: 50,
            enabled: true,
            prefix_mode: PrefixMode::Always,
            dialect: Dialect::default(),
            transcript: Transcript::Skip,
        }
    }
}

/// Clock Engine - the main orchestrator
///
/// Generic over `D: LedDriver` to support different hardware backends and
/// over `R: RngCore` for the prefix coin flips.
pub struct ClockEngine<D: LedDriver<LED_COUNT>, R: RngCore> {
    /// Hardware driver for LED output
    driver: D,
    /// Command receiver
    commands: CommandReceiver,
    /// Dialect table, prefix state and random source
    context: RenderContext<R>,
    /// Current settings
    config: ClockEngineConfig,
    /// Last successful render while enabled
    last: Option<Rendering>,
}

impl<D: LedDriver<LED_COUNT>, R: RngCore> ClockEngine<D, R> {
    /// Create a new clock engine reading commands from `commands`
    pub fn new(driver: D, commands: CommandReceiver, rng: R, config: &ClockEngineConfig) -> Self {
        let mut config = *config;
        config.brightness = config.brightness.min(MAX_BRIGHTNESS_PERCENT);
        Self {
            driver,
            commands,
            context: RenderContext::new(config.dialect.table(), rng),
            config,
            last: None,
        }
    }

    /// Current settings
    pub fn config(&self) -> &ClockEngineConfig {
        &self.config
    }

    /// Last render, `None` before the first tick or while powered off
    pub fn last_rendering(&self) -> Option<&Rendering> {
        self.last.as_ref()
    }

    /// Transcript of the last render, if recorded
    pub fn last_transcript(&self) -> Option<&String<TRANSCRIPT_CAPACITY>> {
        self.last.as_ref()?.transcript.as_ref()
    }

    /// Access the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Apply a single command
    pub fn apply(&mut self, command: ClockCommand) {
        match command {
            ClockCommand::SetColor(color) => self.config.color = color,
            ClockCommand::SetBrightness(brightness) => {
                if brightness > MAX_BRIGHTNESS_PERCENT {
                    log_warn!("clock: brightness {} clamped to {}", brightness, MAX_BRIGHTNESS_PERCENT);
                }
                self.config.brightness = brightness.min(MAX_BRIGHTNESS_PERCENT);
            }
            ClockCommand::SetPower(enabled) => {
                self.config.enabled = enabled;
                if !enabled {
                    self.last = None;
                }
            }
            ClockCommand::SetPrefixMode(mode) => self.config.prefix_mode = mode,
            ClockCommand::SetDialect(dialect) => {
                self.config.dialect = dialect;
                self.context.set_table(dialect.table());
            }
            ClockCommand::SetTranscript(transcript) => self.config.transcript = transcript,
        }
    }

    /// Process pending commands from the channel (non-blocking)
    fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            log_debug!("clock: command {:?}", command);
            self.apply(command);
        }
    }

    /// Process one tick
    ///
    /// Drains pending commands, renders `time` and writes the frame. While
    /// powered off an all-dark frame is written.
    pub fn tick(&mut self, time: TimeOfDay) -> Result<(), RenderError> {
        self.process_commands();

        if !self.config.enabled {
            self.driver.write(&[Rgb::default(); LED_COUNT]);
            return Ok(());
        }

        let color = scale_color(self.config.color, percent_to_scale(self.config.brightness));
        let rendering =
            self.context
                .render(time, color, self.config.prefix_mode, self.config.transcript)?;

        let mut frame: Frame = [Rgb::default(); LED_COUNT];
        rendering.paint(&mut frame);
        self.driver.write(&frame);
        self.last = Some(rendering);
        Ok(())
    }
}
