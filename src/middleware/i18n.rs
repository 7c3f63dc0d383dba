// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LANG;

// Extrator de idioma (primeira tag do Accept-Language, sem a região)
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Locale {
    fn from_header(header_str: &str) -> Option<Self> {
        accept_language::parse(header_str)
            .first() // Pega o primeiro idioma (ex: "pt-BR")
            .map(|tag| {
                // "pt-BR" -> "pt", "en" -> "en"
                let primary = tag.split('-').next().unwrap_or(tag);
                Locale(primary.to_ascii_lowercase())
            })
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}
