// src/models/imovel.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::{
    error::AppError,
    field::{invalid_choice, Field, FieldErrors, JsonField},
    validation::{validate_money, validate_not_blank},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusImovel {
    Disponivel,
    Alugado,
}

impl JsonField for StatusImovel {
    const INVALID_CODE: &'static str = "invalid_choice";

    fn invalid(value: &serde_json::Value) -> validator::ValidationError {
        invalid_choice(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Imovel {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Apartamento 2 quartos no Centro")]
    pub titulo: String,

    #[schema(example = "Apartamento")]
    pub tipo: String,

    #[schema(example = "1500.00")]
    pub valor_aluguel: Decimal,

    pub status: StatusImovel,
}

#[derive(Debug, Clone)]
pub struct NovoImovel {
    pub titulo: String,
    pub tipo: String,
    pub valor_aluguel: Decimal,
    pub status: StatusImovel,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ImovelPayload {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Apartamento 2 quartos no Centro")]
    pub titulo: Field<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Apartamento")]
    pub tipo: Field<String>,

    // Aceita "1500.00" ou 1500.0
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1500.00")]
    pub valor_aluguel: Field<Decimal>,

    #[serde(default)]
    #[schema(value_type = Option<StatusImovel>)]
    pub status: Field<StatusImovel>,
}

#[derive(Validate)]
struct RascunhoImovel {
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    titulo: Option<String>,

    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    tipo: Option<String>,

    #[validate(custom(function = "validate_money"))]
    valor_aluguel: Option<Decimal>,

    status: Option<StatusImovel>,
}

impl ImovelPayload {
    pub fn merged_over(self, atual: &Imovel) -> Self {
        Self {
            titulo: self.titulo.or_stored(atual.titulo.clone()),
            tipo: self.tipo.or_stored(atual.tipo.clone()),
            valor_aluguel: self.valor_aluguel.or_stored(atual.valor_aluguel),
            status: self.status.or_stored(atual.status),
        }
    }

    pub fn validate_into(self) -> Result<NovoImovel, AppError> {
        let mut pending = FieldErrors::default();
        let rascunho = RascunhoImovel {
            titulo: self.titulo.required("titulo", &mut pending),
            tipo: self.tipo.required("tipo", &mut pending),
            valor_aluguel: self.valor_aluguel.required("valor_aluguel", &mut pending),
            status: self.status.required("status", &mut pending),
        };
        let errors = pending.finish(rascunho.validate());

        match rascunho {
            RascunhoImovel {
                titulo: Some(titulo),
                tipo: Some(tipo),
                valor_aluguel: Some(valor_aluguel),
                status: Some(status),
            } if errors.is_empty() => Ok(NovoImovel { titulo, tipo, valor_aluguel, status }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn payload(value: serde_json::Value) -> ImovelPayload {
        serde_json::from_value(value).unwrap()
    }

    fn codes(err: AppError) -> std::collections::BTreeMap<String, String> {
        match err {
            AppError::ValidationError(errors) => errors
                .field_errors()
                .into_iter()
                .map(|(field, errs)| (field.to_string(), errs[0].code.to_string()))
                .collect(),
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn rent_accepts_string_and_number() {
        let from_string = payload(json!({
            "titulo": "Casa", "tipo": "Casa", "valor_aluguel": "1500.50", "status": "DISPONIVEL"
        }))
        .validate_into()
        .unwrap();
        let from_number = payload(json!({
            "titulo": "Casa", "tipo": "Casa", "valor_aluguel": 1500.5, "status": "DISPONIVEL"
        }))
        .validate_into()
        .unwrap();

        assert_eq!(from_string.valor_aluguel, from_number.valor_aluguel);
    }

    #[test]
    fn unknown_status_and_bad_rent_are_reported_together() {
        let err = payload(json!({
            "titulo": "Casa", "tipo": "Casa", "valor_aluguel": "barato", "status": "VENDIDO"
        }))
        .validate_into()
        .unwrap_err();

        let codes = codes(err);
        assert_eq!(codes["status"], "invalid_choice");
        assert_eq!(codes["valor_aluguel"], "invalid_number");
    }

    #[test]
    fn rent_with_three_decimal_places_is_rejected() {
        let err = payload(json!({
            "titulo": "Casa", "tipo": "Casa", "valor_aluguel": "10.125", "status": "ALUGADO"
        }))
        .validate_into()
        .unwrap_err();
        assert_eq!(codes(err)["valor_aluguel"], "max_decimal_places");
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = payload(json!({
            "titulo": "  ", "tipo": "Casa", "valor_aluguel": 100, "status": "DISPONIVEL"
        }))
        .validate_into()
        .unwrap_err();
        assert_eq!(codes(err)["titulo"], "blank");
    }

    #[test]
    fn status_is_rendered_in_upper_case() {
        let imovel = Imovel {
            id: 1,
            titulo: "Casa".into(),
            tipo: "Casa".into(),
            valor_aluguel: Decimal::from_str("1500.00").unwrap(),
            status: StatusImovel::Disponivel,
        };
        let value = serde_json::to_value(&imovel).unwrap();
        assert_eq!(value["status"], "DISPONIVEL");
        assert_eq!(value["valor_aluguel"], "1500.00");
    }
}
