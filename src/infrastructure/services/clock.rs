use rand::rngs::SmallRng;
use wordclock_composer::{
    ClockEngine, CommandChannel, Dialect, LED_COUNT, LedDriver, RenderError, Rendering,
    TableError, TimeOfDay, Transcript,
};

use super::settings_state::SettingsStateService;
use crate::{
    domain::entity::ClockSettings,
    infrastructure::drivers::seeded_rng,
    logging::{log_info, log_warn},
};

/// Clock engine owned by the display task
pub struct ClockService<D: LedDriver<LED_COUNT>> {
    engine: ClockEngine<D, SmallRng>,
}

impl<D: LedDriver<LED_COUNT>> ClockService<D> {
    /// Show the wall-clock time `hour:minute`
    ///
    /// Call periodically with the decomposed RTC time. Out-of-range input is
    /// rejected and leaves the display untouched.
    pub fn tick(&mut self, hour: u8, minute: u8) -> Result<(), RenderError> {
        let time = TimeOfDay::new(hour, minute).inspect_err(|_e| {
            log_warn!("clock: rejected time: {}", _e);
        })?;
        self.engine.tick(time)
    }

    pub fn last_rendering(&self) -> Option<&Rendering> {
        self.engine.last_rendering()
    }

    pub fn engine(&self) -> &ClockEngine<D, SmallRng> {
        &self.engine
    }
}

/// Build the clock engine and the settings service feeding it
///
/// Every dialect table is validated first, a broken table is a build defect
/// and is reported instead of rendering garbage.
pub fn init_clock_service<D: LedDriver<LED_COUNT>>(
    channel: &'static CommandChannel,
    driver: D,
    seed: u64,
    settings: ClockSettings,
    transcript: Transcript,
) -> Result<(ClockService<D>, SettingsStateService), TableError> {
    for dialect in Dialect::ALL {
        dialect.table().validate().inspect_err(|_e| {
            log_warn!("clock: {} table invalid: {}", dialect.as_str(), _e);
        })?;
    }

    let engine = ClockEngine::new(
        driver,
        channel.receiver(),
        seeded_rng(seed),
        &settings.engine_config(transcript),
    );
    log_info!("clock: started with {:?}", settings);

    Ok((
        ClockService { engine },
        SettingsStateService::new(settings, channel),
    ))
}
