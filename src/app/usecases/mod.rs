mod settings;

pub use settings::SettingsUsecases;
