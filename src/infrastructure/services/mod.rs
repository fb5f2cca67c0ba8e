mod clock;
mod settings_state;

pub use clock::{ClockService, init_clock_service};
pub use settings_state::SettingsStateService;
