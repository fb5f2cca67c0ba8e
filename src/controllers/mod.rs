mod http;

pub use http::{HttpMethod, HttpResponse, HttpStatus, SettingsHttpController};
