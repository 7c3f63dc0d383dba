use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Nosso tipo de erro, agora com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo que não é um objeto JSON; erros de tipo de um campo viram ValidationError
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    #[error("Registro não encontrado")]
    NotFound,

    // Chave estrangeira apontando para um registro que não existe
    #[error("Referência inválida no campo '{field}'")]
    InvalidReference { field: &'static str },

    // Variante para erros de banco de dados (exemplo com sqlx)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

// Um id que não é inteiro nunca casa com nenhum registro.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::NotFound
    }
}

/// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    fn simple(status: StatusCode, message: String) -> Self {
        Self { status, message, details: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = BTreeMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| render_validation_message(e, lang, store))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: store.translate(lang, "error.validation"),
                    details: Some(details),
                }
            }
            AppError::InvalidBody(reason) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: store.translate(lang, "error.invalid_body"),
                details: Some(BTreeMap::from([("body".to_string(), vec![reason.clone()])])),
            },
            AppError::NotFound => {
                ApiError::simple(StatusCode::NOT_FOUND, store.translate(lang, "error.not_found"))
            }
            AppError::InvalidReference { field } => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: store.translate(lang, "error.validation"),
                details: Some(BTreeMap::from([(
                    field.to_string(),
                    vec![store.translate(lang, "validation.does_not_exist")],
                )])),
            },
            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::simple(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    store.translate(lang, "error.internal"),
                )
            }
        }
    }
}

// Mensagem do catálogo pelo código do erro; os parâmetros ({max}, ...) são interpolados.
fn render_validation_message(
    error: &validator::ValidationError,
    lang: &str,
    store: &I18nStore,
) -> String {
    let key = format!("validation.{}", error.code);
    let mut message = match store.lookup(lang, &key) {
        Some(template) => template.to_string(),
        None => error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string()),
    };

    for (name, value) in &error.params {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        message = message.replace(&format!("{{{name}}}"), &rendered);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    fn store() -> I18nStore {
        I18nStore::load().unwrap()
    }

    fn pt() -> Locale {
        Locale("pt".to_string())
    }

    #[test]
    fn validation_errors_become_bad_request_with_field_details() {
        let mut errors = ValidationErrors::new();
        errors.add("nome", ValidationError::new("required"));

        let api = AppError::ValidationError(errors).to_api_error(&pt(), &store());

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.unwrap();
        assert_eq!(details["nome"], vec!["Este campo é obrigatório.".to_string()]);
    }

    #[test]
    fn validation_params_are_interpolated() {
        let mut err = ValidationError::new("length");
        err.add_param("max".into(), &100);
        let mut errors = ValidationErrors::new();
        errors.add("titulo", err);

        let api = AppError::ValidationError(errors).to_api_error(&pt(), &store());

        let details = api.details.unwrap();
        assert!(details["titulo"][0].contains("100"));
        assert!(!details["titulo"][0].contains("{max}"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let api = AppError::NotFound.to_api_error(&pt(), &store());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert!(api.details.is_none());
    }

    #[test]
    fn invalid_reference_is_reported_on_the_field() {
        let api = AppError::InvalidReference { field: "imovel" }.to_api_error(&pt(), &store());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert!(api.details.unwrap().contains_key("imovel"));
    }

    #[test]
    fn database_errors_are_hidden_behind_500() {
        let api = AppError::DatabaseError(sqlx::Error::RowNotFound).to_api_error(&pt(), &store());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Ocorreu um erro inesperado.");
    }

    #[test]
    fn english_locale_uses_english_catalog() {
        let api = AppError::NotFound.to_api_error(&Locale("en".to_string()), &store());
        assert_eq!(api.message, "Not found.");
    }
}
