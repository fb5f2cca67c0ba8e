//! Integration tests for the clock engine.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wordclock_composer::math8::{percent_to_scale, scale8};
use wordclock_composer::{
    ClockCommand, ClockEngine, ClockEngineConfig, CommandChannel, Dialect, Frame, LED_COUNT,
    LedDriver, PrefixMode, RenderError, Rgb, TimeError, TimeOfDay, Transcript,
};

/// Driver that keeps every written frame
#[derive(Default)]
struct RecordingDriver {
    frames: Vec<Frame>,
}

impl RecordingDriver {
    fn last(&self) -> &Frame {
        self.frames.last().unwrap()
    }

    fn lit(&self) -> usize {
        self.last().iter().filter(|led| **led != Rgb::default()).count()
    }
}

impl LedDriver<LED_COUNT> for RecordingDriver {
    fn write(&mut self, colors: &[Rgb; LED_COUNT]) {
        self.frames.push(*colors);
    }
}

fn at(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

fn engine(
    channel: &'static CommandChannel,
    config: &ClockEngineConfig,
) -> ClockEngine<RecordingDriver, SmallRng> {
    ClockEngine::new(
        RecordingDriver::default(),
        channel.receiver(),
        SmallRng::seed_from_u64(3),
        config,
    )
}

fn full_brightness() -> ClockEngineConfig {
    ClockEngineConfig {
        brightness: 100,
        ..ClockEngineConfig::default()
    }
}

// -----------------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------------

#[test]
fn default_config() {
    let config = ClockEngineConfig::default();
    assert_eq!(config.color, Rgb::new(255, 255, 255));
    assert_eq!(config.brightness, 50);
    assert!(config.enabled);
    assert_eq!(config.prefix_mode, PrefixMode::Always);
    assert_eq!(config.dialect, Dialect::Alemannic);
    assert_eq!(config.transcript, Transcript::Skip);
}

#[test]
fn initial_brightness_is_clamped() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let config = ClockEngineConfig {
        brightness: 180,
        ..ClockEngineConfig::default()
    };
    assert_eq!(engine(&CHANNEL, &config).config().brightness, 100);
}

// -----------------------------------------------------------------------------
// Ticks
// -----------------------------------------------------------------------------

#[test]
fn tick_writes_one_frame() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    assert!(engine.last_rendering().is_none());

    engine.tick(at(4, 17)).unwrap();
    assert_eq!(engine.driver().frames.len(), 1);

    let rendering = engine.last_rendering().unwrap();
    assert_eq!(engine.driver().lit(), rendering.leds.len());
    assert_eq!(*engine.driver().last(), rendering.frame());
    assert!(engine.last_transcript().is_none());
}

#[test]
fn brightness_scales_the_color() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let config = ClockEngineConfig {
        color: Rgb::new(200, 100, 50),
        brightness: 50,
        ..ClockEngineConfig::default()
    };
    let mut engine = engine(&CHANNEL, &config);
    engine.tick(at(8, 0)).unwrap();

    let scale = percent_to_scale(50);
    let expected = Rgb::new(scale8(200, scale), scale8(100, scale), scale8(50, scale));
    assert_eq!(engine.last_rendering().unwrap().color, expected);
    assert!(engine.driver().last().iter().any(|led| *led == expected));
}

#[test]
fn zero_brightness_renders_dark() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let config = ClockEngineConfig {
        brightness: 0,
        ..ClockEngineConfig::default()
    };
    let mut engine = engine(&CHANNEL, &config);
    engine.tick(at(8, 0)).unwrap();
    assert_eq!(engine.driver().lit(), 0);
    assert!(engine.last_rendering().is_some());
}

#[test]
fn invalid_time_is_reported() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    let time = TimeOfDay::new(9, 60);
    assert_eq!(time, Err(TimeError::MinuteOutOfRange(60)));
    let result = time.map_err(RenderError::from).and_then(|time| engine.tick(time));
    assert_eq!(result, Err(RenderError::Time(TimeError::MinuteOutOfRange(60))));
    assert!(engine.driver().frames.is_empty());
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------

#[test]
fn color_command_is_applied_on_next_tick() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    engine.tick(at(4, 17)).unwrap();

    CHANNEL.try_send(ClockCommand::SetColor(Rgb::new(0, 0, 255))).unwrap();
    engine.tick(at(4, 17)).unwrap();

    assert_eq!(engine.config().color, Rgb::new(0, 0, 255));
    let frame = engine.driver().last();
    assert!(frame.iter().all(|led| *led == Rgb::default() || *led == Rgb::new(0, 0, 255)));
}

#[test]
fn power_off_writes_dark_frames() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    engine.tick(at(4, 17)).unwrap();
    assert!(engine.driver().lit() > 0);

    CHANNEL.try_send(ClockCommand::SetPower(false)).unwrap();
    engine.tick(at(4, 18)).unwrap();
    assert_eq!(engine.driver().lit(), 0);
    assert!(engine.last_rendering().is_none());

    CHANNEL.try_send(ClockCommand::SetPower(true)).unwrap();
    engine.tick(at(4, 18)).unwrap();
    assert!(engine.driver().lit() > 0);
    assert_eq!(engine.driver().frames.len(), 3);
}

#[test]
fn brightness_command_is_clamped() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    engine.apply(ClockCommand::SetBrightness(250));
    assert_eq!(engine.config().brightness, 100);
    engine.apply(ClockCommand::SetBrightness(20));
    assert_eq!(engine.config().brightness, 20);
}

#[test]
fn dialect_and_transcript_commands() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());

    CHANNEL.try_send(ClockCommand::SetTranscript(Transcript::Record)).unwrap();
    CHANNEL.try_send(ClockCommand::SetDialect(Dialect::German)).unwrap();
    CHANNEL.try_send(ClockCommand::SetPrefixMode(PrefixMode::Never)).unwrap();
    engine.tick(at(4, 17)).unwrap();
    assert_eq!(
        engine.last_transcript().map(|text| text.as_str()),
        Some("viertel nach vier + 2 min")
    );

    CHANNEL.try_send(ClockCommand::SetDialect(Dialect::Alemannic)).unwrap();
    CHANNEL.try_send(ClockCommand::SetPrefixMode(PrefixMode::Always)).unwrap();
    engine.tick(at(4, 17)).unwrap();
    assert_eq!(
        engine.last_transcript().map(|text| text.as_str()),
        Some("Es isch viertel noch viere + 2 min")
    );
    assert_eq!(engine.config().dialect, Dialect::Alemannic);
}

#[test]
fn commands_queue_up_to_capacity() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let mut engine = engine(&CHANNEL, &full_brightness());
    for brightness in [10, 20, 30, 40, 50, 60, 70, 80] {
        CHANNEL.try_send(ClockCommand::SetBrightness(brightness)).unwrap();
    }
    assert!(CHANNEL.try_send(ClockCommand::SetBrightness(90)).is_err());

    engine.tick(at(12, 0)).unwrap();
    assert_eq!(engine.config().brightness, 80);
    assert!(CHANNEL.is_empty());
}

#[test]
fn randomized_prefix_is_stable_within_a_minute() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let config = ClockEngineConfig {
        prefix_mode: PrefixMode::Randomized,
        ..full_brightness()
    };
    let mut engine = engine(&CHANNEL, &config);
    for minute in 0..60 {
        engine.tick(at(15, minute)).unwrap();
        let first = engine.last_rendering().unwrap().prefix;
        for _ in 0..5 {
            engine.tick(at(15, minute)).unwrap();
            assert_eq!(engine.last_rendering().unwrap().prefix, first);
        }
    }
}
