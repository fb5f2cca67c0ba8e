use crate::{
    domain::{
        dto::{SettingsChangeIntent, SettingsUpdateBody, validate_brightness},
        entity::ClockSettings,
        ports::{
            SettingsChanger, SettingsError, SettingsHandler, SettingsReader,
            SettingsUsecasesPort,
        },
    },
    logging::{log_info, log_warn},
};

pub struct SettingsUsecases<S: SettingsHandler> {
    state: S,
}

impl<S: SettingsHandler> SettingsUsecases<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }
}

impl<S: SettingsHandler> SettingsReader for SettingsUsecases<S> {
    fn get_settings(&self) -> ClockSettings {
        self.state.get_settings()
    }
}

impl<S: SettingsHandler> SettingsChanger for SettingsUsecases<S> {
    fn apply_settings_intent(&self, intent: SettingsChangeIntent) -> Result<(), SettingsError> {
        if let Some(brightness) = intent.brightness {
            validate_brightness(u16::from(brightness))?;
        }
        if intent.is_empty() {
            return Ok(());
        }
        self.state.apply_settings_intent(intent)?;
        log_info!("settings: applied {:?}", intent);
        Ok(())
    }
}

impl<S: SettingsHandler> SettingsUsecasesPort for SettingsUsecases<S> {
    fn apply_settings_json(&self, body: &[u8]) -> Result<(), SettingsError> {
        let (body, _) = serde_json_core::from_slice::<SettingsUpdateBody>(body).map_err(|_e| {
            log_warn!("settings: parse error: {:?}", _e);
            SettingsError::Parse
        })?;
        let intent = SettingsChangeIntent::try_from(body).inspect_err(|_e| {
            log_warn!("settings: rejected update: {}", _e);
        })?;
        self.apply_settings_intent(intent)
    }
}
