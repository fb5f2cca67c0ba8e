use heapless::String;

use crate::{
    config::STATE_JSON_CAPACITY,
    domain::{
        dto::SettingsStateBody,
        ports::{SettingsError, SettingsUsecasesPort},
    },
    logging::{log_debug, log_warn},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok,
    NoContent,
    BadRequest,
    NotFound,
    ServiceUnavailable,
    InternalServerError,
}

impl HttpStatus {
    pub const fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::NotFound => 404,
            HttpStatus::ServiceUnavailable => 503,
            HttpStatus::InternalServerError => 500,
        }
    }
}

impl From<SettingsError> for HttpStatus {
    fn from(error: SettingsError) -> Self {
        match error {
            SettingsError::Busy => HttpStatus::ServiceUnavailable,
            SettingsError::Serialize => HttpStatus::InternalServerError,
            SettingsError::InvalidBrightness(_)
            | SettingsError::IncompleteColor
            | SettingsError::UnknownLanguage
            | SettingsError::UnknownPrefixMode(_)
            | SettingsError::Parse => HttpStatus::BadRequest,
        }
    }
}

/// Response of the settings endpoints, the body is JSON when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub body: String<STATE_JSON_CAPACITY>,
}

impl HttpResponse {
    fn empty(status: HttpStatus) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    fn json(body: String<STATE_JSON_CAPACITY>) -> Self {
        Self {
            status: HttpStatus::Ok,
            body,
        }
    }
}

/// Settings endpoints of the web UI
///
/// Transport agnostic: the HTTP server hands over the route and the request
/// body and writes the returned response.
pub struct SettingsHttpController<U: SettingsUsecasesPort> {
    usecases: U,
}

impl<U: SettingsUsecasesPort> SettingsHttpController<U> {
    pub fn new(usecases: U) -> Self {
        Self { usecases }
    }

    pub fn usecases(&self) -> &U {
        &self.usecases
    }

    pub fn handle_request(&self, method: HttpMethod, path: &str, body: &[u8]) -> HttpResponse {
        let result = match (method, path) {
            (HttpMethod::Get, "/state") => self.handle_get_state(),
            (HttpMethod::Post, "/update") => self.handle_update(body),
            _ => return HttpResponse::empty(HttpStatus::NotFound),
        };
        result.unwrap_or_else(|e| {
            log_warn!("settings: {} {} failed: {}", method_name(method), path, e);
            HttpResponse::empty(HttpStatus::from(e))
        })
    }

    /// Current settings as JSON
    pub fn handle_get_state(&self) -> Result<HttpResponse, SettingsError> {
        let state = SettingsStateBody::from(&self.usecases.get_settings());
        let body = serde_json_core::to_string::<_, STATE_JSON_CAPACITY>(&state)
            .map_err(|_| SettingsError::Serialize)?;
        Ok(HttpResponse::json(body))
    }

    /// Apply a partial settings update
    pub fn handle_update(&self, body: &[u8]) -> Result<HttpResponse, SettingsError> {
        self.usecases.apply_settings_json(body)?;
        log_debug!("settings: update applied");
        Ok(HttpResponse::empty(HttpStatus::NoContent))
    }
}

const fn method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET",
        HttpMethod::Post => "POST",
    }
}
