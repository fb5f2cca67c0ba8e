use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::Vec;
use wordclock_composer::{ClockCommand, CommandChannel};

use crate::{
    domain::{
        dto::SettingsChangeIntent,
        entity::ClockSettings,
        ports::{SettingsChanger, SettingsError, SettingsHandler, SettingsReader},
    },
    logging::{log_debug, log_warn},
};

/// One command per settings field
const MAX_COMMANDS_PER_INTENT: usize = 5;

/// Settings held for the clock engine
///
/// The service is the source of truth for the settings. Every accepted
/// change is forwarded to the engine as commands, so the engine picks it up
/// on its next tick.
pub struct SettingsStateService {
    settings: Mutex<CriticalSectionRawMutex, Cell<ClockSettings>>,
    commands: &'static CommandChannel,
}

impl SettingsStateService {
    pub fn new(settings: ClockSettings, commands: &'static CommandChannel) -> Self {
        Self {
            settings: Mutex::new(Cell::new(settings)),
            commands,
        }
    }
}

/// Engine commands turning `current` into `next`
fn commands_between(
    current: &ClockSettings,
    next: &ClockSettings,
) -> Vec<ClockCommand, MAX_COMMANDS_PER_INTENT> {
    let changes = [
        (current.color != next.color).then_some(ClockCommand::SetColor(next.color)),
        (current.brightness != next.brightness)
            .then_some(ClockCommand::SetBrightness(next.brightness)),
        (current.prefix_mode != next.prefix_mode)
            .then_some(ClockCommand::SetPrefixMode(next.prefix_mode)),
        (current.dialect != next.dialect).then_some(ClockCommand::SetDialect(next.dialect)),
        (current.enabled != next.enabled).then_some(ClockCommand::SetPower(next.enabled)),
    ];
    changes.into_iter().flatten().collect()
}

impl SettingsReader for SettingsStateService {
    fn get_settings(&self) -> ClockSettings {
        self.settings.lock(Cell::get)
    }
}

impl SettingsChanger for SettingsStateService {
    fn apply_settings_intent(&self, intent: SettingsChangeIntent) -> Result<(), SettingsError> {
        self.settings.lock(|settings| {
            let current = settings.get();
            let next = intent.applied_to(current);
            let commands = commands_between(&current, &next);

            // Send all commands or none
            if self.commands.free_capacity() < commands.len() {
                log_warn!("settings: command queue full, dropping {:?}", intent);
                return Err(SettingsError::Busy);
            }
            for command in commands {
                log_debug!("settings: sending {:?}", command);
                self.commands.try_send(command).map_err(|_| SettingsError::Busy)?;
            }
            settings.set(next);
            Ok(())
        })
    }
}

impl SettingsHandler for SettingsStateService {}
