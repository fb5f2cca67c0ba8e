//! Integration tests for the settings flow: JSON body, usecases, settings
//! state and the clock engine consuming the resulting commands.

use wordclock::app::usecases::SettingsUsecases;
use wordclock::controllers::{HttpMethod, HttpStatus, SettingsHttpController};
use wordclock::domain::dto::{SettingsChangeIntent, SettingsUpdateBody};
use wordclock::domain::entity::ClockSettings;
use wordclock::domain::ports::{
    SettingsChanger, SettingsError, SettingsReader, SettingsUsecasesPort,
};
use wordclock::infrastructure::services::{
    ClockService, SettingsStateService, init_clock_service,
};
use wordclock_composer::{
    ClockCommand, CommandChannel, Dialect, LED_COUNT, LedDriver, PrefixMode, Rgb, Transcript,
};

/// Driver that keeps the last written frame
struct LastFrame {
    frame: [Rgb; LED_COUNT],
    writes: usize,
}

impl LastFrame {
    fn new() -> Self {
        Self {
            frame: [Rgb::default(); LED_COUNT],
            writes: 0,
        }
    }

    fn lit(&self) -> usize {
        self.frame.iter().filter(|led| **led != Rgb::default()).count()
    }
}

impl LedDriver<LED_COUNT> for LastFrame {
    fn write(&mut self, colors: &[Rgb; LED_COUNT]) {
        self.frame = *colors;
        self.writes += 1;
    }
}

fn parse(body: &str) -> Result<SettingsChangeIntent, SettingsError> {
    let (body, _) = serde_json_core::from_str::<SettingsUpdateBody>(body)
        .map_err(|_| SettingsError::Parse)?;
    SettingsChangeIntent::try_from(body)
}

fn setup(
    channel: &'static CommandChannel,
) -> (
    ClockService<LastFrame>,
    SettingsHttpController<SettingsUsecases<SettingsStateService>>,
) {
    let (clock, state) = init_clock_service(
        channel,
        LastFrame::new(),
        7,
        ClockSettings::default(),
        Transcript::Record,
    )
    .unwrap();
    (clock, SettingsHttpController::new(SettingsUsecases::new(state)))
}

// -----------------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------------

#[test]
fn factory_defaults() {
    let settings = ClockSettings::default();
    assert!(settings.enabled);
    assert_eq!(settings.brightness, 50);
    assert_eq!(settings.color, Rgb::new(255, 255, 255));
    assert_eq!(settings.prefix_mode, PrefixMode::Always);
    assert_eq!(settings.dialect, Dialect::Alemannic);
}

// -----------------------------------------------------------------------------
// Update body
// -----------------------------------------------------------------------------

#[test]
fn full_web_ui_body_is_parsed() {
    let intent = parse(
        r#"{"red":10,"green":20,"blue":30,"language":"deutsch","brightness":80,
            "enabled":true,"superBright":false,"prefixMode":1,"transition":0,
            "transitionSpeed":2}"#,
    )
    .unwrap();
    assert_eq!(
        intent,
        SettingsChangeIntent::new()
            .with_color(10, 20, 30)
            .with_dialect(Dialect::German)
            .with_brightness(80)
            .with_enabled(true)
            .with_prefix_mode(PrefixMode::Randomized)
    );
}

#[test]
fn partial_body_changes_only_given_fields() {
    let intent = parse(r#"{"enabled":false}"#).unwrap();
    assert_eq!(intent, SettingsChangeIntent::new().with_enabled(false));

    let intent = parse("{}").unwrap();
    assert!(intent.is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        parse(r#"{"brightness":101}"#),
        Err(SettingsError::InvalidBrightness(101))
    );
    assert_eq!(
        parse(r#"{"brightness":900}"#),
        Err(SettingsError::InvalidBrightness(900))
    );
    assert_eq!(
        parse(r#"{"language":"english"}"#),
        Err(SettingsError::UnknownLanguage)
    );
    assert_eq!(
        parse(r#"{"prefixMode":7}"#),
        Err(SettingsError::UnknownPrefixMode(7))
    );
    assert_eq!(
        parse(r#"{"red":1,"green":2}"#),
        Err(SettingsError::IncompleteColor)
    );
    assert_eq!(parse(r#"{"red":"#), Err(SettingsError::Parse));
}

#[test]
fn intent_applies_over_current_settings() {
    let settings = SettingsChangeIntent::new()
        .with_brightness(10)
        .with_dialect(Dialect::German)
        .applied_to(ClockSettings::default());
    assert_eq!(settings.brightness, 10);
    assert_eq!(settings.dialect, Dialect::German);
    assert_eq!(settings.color, ClockSettings::default().color);

    let full = SettingsChangeIntent::from(settings);
    assert_eq!(full.applied_to(ClockSettings::default()), settings);
}

// -----------------------------------------------------------------------------
// Settings state
// -----------------------------------------------------------------------------

#[test]
fn state_sends_only_changed_fields() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let state = SettingsStateService::new(ClockSettings::default(), &CHANNEL);

    state
        .apply_settings_intent(
            SettingsChangeIntent::new()
                .with_brightness(50)
                .with_color(1, 2, 3),
        )
        .unwrap();
    assert_eq!(
        CHANNEL.try_receive(),
        Ok(ClockCommand::SetColor(Rgb::new(1, 2, 3)))
    );
    assert!(CHANNEL.try_receive().is_err());
    assert_eq!(state.get_settings().color, Rgb::new(1, 2, 3));
}

#[test]
fn full_queue_rejects_the_whole_intent() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let state = SettingsStateService::new(ClockSettings::default(), &CHANNEL);
    while CHANNEL.free_capacity() > 1 {
        CHANNEL.try_send(ClockCommand::SetPower(true)).unwrap();
    }

    let intent = SettingsChangeIntent::new()
        .with_brightness(20)
        .with_enabled(false);
    assert_eq!(state.apply_settings_intent(intent), Err(SettingsError::Busy));
    assert_eq!(state.get_settings(), ClockSettings::default());
    assert_eq!(CHANNEL.free_capacity(), 1);
}

#[test]
fn usecases_validate_builder_intents() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let state = SettingsStateService::new(ClockSettings::default(), &CHANNEL);
    let usecases = SettingsUsecases::new(state);

    assert_eq!(
        usecases.apply_settings_intent(SettingsChangeIntent::new().with_brightness(150)),
        Err(SettingsError::InvalidBrightness(150))
    );
    assert!(CHANNEL.is_empty());

    usecases
        .apply_settings_json(br#"{"prefixMode":2}"#)
        .unwrap();
    assert_eq!(usecases.get_settings().prefix_mode, PrefixMode::Never);
    assert_eq!(
        CHANNEL.try_receive(),
        Ok(ClockCommand::SetPrefixMode(PrefixMode::Never))
    );
}

// -----------------------------------------------------------------------------
// End to end
// -----------------------------------------------------------------------------

#[test]
fn state_endpoint_reports_settings() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let (_clock, controller) = setup(&CHANNEL);

    let response = controller.handle_request(HttpMethod::Get, "/state", b"");
    assert_eq!(response.status, HttpStatus::Ok);
    assert_eq!(
        response.body.as_str(),
        r#"{"red":255,"green":255,"blue":255,"language":"dialekt","brightness":50,"enabled":true,"prefixMode":0}"#
    );
}

#[test]
fn update_endpoint_drives_the_display() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let (mut clock, controller) = setup(&CHANNEL);

    clock.tick(4, 17).unwrap();
    assert_eq!(
        clock.last_rendering().and_then(|r| r.transcript.as_deref()),
        Some("Es isch viertel noch viere + 2 min")
    );

    let response = controller.handle_request(
        HttpMethod::Post,
        "/update",
        br#"{"language":"deutsch","prefixMode":2,"red":0,"green":255,"blue":0,"brightness":100}"#,
    );
    assert_eq!(response.status, HttpStatus::NoContent);
    assert!(response.body.is_empty());

    clock.tick(4, 17).unwrap();
    let rendering = clock.last_rendering().unwrap();
    assert_eq!(
        rendering.transcript.as_deref(),
        Some("viertel nach vier + 2 min")
    );
    assert_eq!(rendering.color, Rgb::new(0, 255, 0));

    let response = controller.handle_request(HttpMethod::Get, "/state", b"");
    assert!(response.body.contains(r#""language":"deutsch""#));
    assert!(response.body.contains(r#""prefixMode":2"#));
}

#[test]
fn power_off_over_http_darkens_the_display() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let (mut clock, controller) = setup(&CHANNEL);
    clock.tick(9, 0).unwrap();
    assert!(clock.engine().driver().lit() > 0);

    let response = controller.handle_request(HttpMethod::Post, "/update", br#"{"enabled":false}"#);
    assert_eq!(response.status, HttpStatus::NoContent);
    clock.tick(9, 1).unwrap();
    assert_eq!(clock.engine().driver().lit(), 0);
    assert_eq!(clock.engine().driver().writes, 2);
}

#[test]
fn bad_requests_map_to_status_codes() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let (_clock, controller) = setup(&CHANNEL);

    let response = controller.handle_request(HttpMethod::Post, "/update", br#"{"brightness":300}"#);
    assert_eq!(response.status, HttpStatus::BadRequest);
    assert_eq!(response.status.code(), 400);

    let response = controller.handle_request(HttpMethod::Post, "/update", b"not json");
    assert_eq!(response.status, HttpStatus::BadRequest);

    let response = controller.handle_request(HttpMethod::Get, "/missing", b"");
    assert_eq!(response.status.code(), 404);

    let response = controller.handle_request(HttpMethod::Get, "/update", b"");
    assert_eq!(response.status, HttpStatus::NotFound);

    assert_eq!(controller.usecases().get_settings(), ClockSettings::default());
}

#[test]
fn clock_rejects_out_of_range_time() {
    static CHANNEL: CommandChannel = CommandChannel::new();
    let (mut clock, _controller) = setup(&CHANNEL);
    assert!(clock.tick(24, 0).is_err());
    assert!(clock.tick(12, 60).is_err());
    assert_eq!(clock.engine().driver().writes, 0);
    assert!(clock.last_rendering().is_none());
}
