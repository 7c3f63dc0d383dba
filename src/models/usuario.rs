// src/models/usuario.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::{
    error::AppError,
    field::{invalid_choice, Field, FieldErrors, JsonField},
    validation::validate_not_blank,
};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum TipoUsuario {
    Locador,   // Proprietário
    Locatario, // Inquilino
}

impl JsonField for TipoUsuario {
    const INVALID_CODE: &'static str = "invalid_choice";

    fn invalid(value: &serde_json::Value) -> validator::ValidationError {
        invalid_choice(value)
    }
}

// --- Registro ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ana Souza")]
    pub nome: String,

    #[schema(example = "ana@exemplo.com")]
    pub email: String,

    #[schema(example = "(11) 99999-8888")]
    pub telefone: Option<String>,

    pub tipo: TipoUsuario,
}

/// Campos prontos para gravar (já validados).
#[derive(Debug, Clone)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub tipo: TipoUsuario,
}

// --- Payload (POST, PUT e PATCH) ---

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UsuarioPayload {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Ana Souza")]
    pub nome: Field<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "ana@exemplo.com")]
    pub email: Field<String>,

    // `null` apaga o telefone gravado
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "(11) 99999-8888")]
    pub telefone: Field<String>,

    #[serde(default)]
    #[schema(value_type = Option<TipoUsuario>)]
    pub tipo: Field<TipoUsuario>,
}

// Campos já resolvidos, conferidos pelo `Validate`.
#[derive(Validate)]
struct RascunhoUsuario {
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    nome: Option<String>,

    #[validate(length(max = 254), email)]
    email: Option<String>,

    #[validate(length(max = 20))]
    telefone: Option<String>,

    tipo: Option<TipoUsuario>,
}

impl UsuarioPayload {
    /// PATCH: campos ausentes mantêm o valor gravado.
    pub fn merged_over(self, atual: &Usuario) -> Self {
        Self {
            nome: self.nome.or_stored(atual.nome.clone()),
            email: self.email.or_stored(atual.email.clone()),
            telefone: self.telefone.or_stored_nullable(atual.telefone.clone()),
            tipo: self.tipo.or_stored(atual.tipo),
        }
    }

    pub fn validate_into(self) -> Result<NovoUsuario, AppError> {
        let mut pending = FieldErrors::default();
        let rascunho = RascunhoUsuario {
            nome: self.nome.required("nome", &mut pending),
            email: self.email.required("email", &mut pending),
            telefone: self.telefone.nullable("telefone", &mut pending),
            tipo: self.tipo.required("tipo", &mut pending),
        };
        let errors = pending.finish(rascunho.validate());

        match rascunho {
            RascunhoUsuario {
                nome: Some(nome),
                email: Some(email),
                telefone,
                tipo: Some(tipo),
            } if errors.is_empty() => Ok(NovoUsuario { nome, email, telefone, tipo }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_codes(err: AppError, field: &str) -> Vec<String> {
        match err {
            AppError::ValidationError(errors) => errors
                .field_errors()
                .get(field)
                .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
                .unwrap_or_default(),
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    fn payload(value: serde_json::Value) -> UsuarioPayload {
        serde_json::from_value(value).unwrap()
    }

    fn ana() -> Usuario {
        Usuario {
            id: 7,
            nome: "Ana".into(),
            email: "ana@x.com".into(),
            telefone: Some("1234".into()),
            tipo: TipoUsuario::Locador,
        }
    }

    #[test]
    fn valid_payload_becomes_novo_usuario() {
        let novo = payload(json!({"nome": "Ana", "email": "ana@x.com", "tipo": "LOCADOR"}))
            .validate_into()
            .unwrap();

        assert_eq!(novo.nome, "Ana");
        assert_eq!(novo.tipo, TipoUsuario::Locador);
        assert!(novo.telefone.is_none());
    }

    #[test]
    fn unknown_tipo_is_reported_on_the_field() {
        let err = payload(json!({"nome": "Ana", "email": "ana@x.com", "tipo": "ADMIN"}))
            .validate_into()
            .unwrap_err();
        assert_eq!(field_codes(err, "tipo"), vec!["invalid_choice"]);
    }

    #[test]
    fn missing_fields_are_reported_as_required() {
        let err = UsuarioPayload::default().validate_into().unwrap_err();
        assert_eq!(field_codes(err, "tipo"), vec!["required"]);
    }

    #[test]
    fn invalid_email_and_long_phone_are_reported() {
        let err = payload(json!({
            "nome": "Ana", "email": "nao-e-email", "telefone": "1".repeat(21), "tipo": "LOCATARIO"
        }))
        .validate_into()
        .unwrap_err();

        match err {
            AppError::ValidationError(errors) => {
                let fields = errors.field_errors();
                assert_eq!(fields["email"][0].code, "email");
                assert_eq!(fields["telefone"][0].code, "length");
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn patch_keeps_stored_values_for_absent_fields() {
        let novo = payload(json!({"tipo": "LOCATARIO"}))
            .merged_over(&ana())
            .validate_into()
            .unwrap();

        assert_eq!(novo.nome, "Ana");
        assert_eq!(novo.telefone.as_deref(), Some("1234"));
        assert_eq!(novo.tipo, TipoUsuario::Locatario);
    }

    #[test]
    fn patch_with_null_phone_clears_it() {
        let novo = payload(json!({"telefone": null}))
            .merged_over(&ana())
            .validate_into()
            .unwrap();
        assert!(novo.telefone.is_none());
    }

    #[test]
    fn null_on_required_field_is_rejected() {
        let err = payload(json!({"nome": null}))
            .merged_over(&ana())
            .validate_into()
            .unwrap_err();
        assert_eq!(field_codes(err, "nome"), vec!["null"]);
    }
}
