// src/models/contrato.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::{
    error::AppError,
    field::{Field, FieldErrors},
    validation::validate_money,
};

// Contrato de locação: liga um imóvel, o locador e o locatário.
// As chaves estrangeiras saem no JSON só com o id do registro pai.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contrato {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(value_type = String, format = Date, example = "2025-01-01")]
    pub data_inicio: NaiveDate,

    #[schema(value_type = String, format = Date, example = "2025-12-31")]
    pub data_fim: NaiveDate,

    #[schema(example = "1500.00")]
    pub valor: Decimal,

    #[sqlx(rename = "imovel_id")]
    #[schema(example = 1)]
    pub imovel: i64,

    #[sqlx(rename = "locador_id")]
    #[schema(example = 1)]
    pub locador: i64,

    #[sqlx(rename = "locatario_id")]
    #[schema(example = 2)]
    pub locatario: i64,
}

#[derive(Debug, Clone)]
pub struct NovoContrato {
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub valor: Decimal,
    pub imovel: i64,
    pub locador: i64,
    pub locatario: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContratoPayload {
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2025-01-01")]
    pub data_inicio: Field<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2025-12-31")]
    pub data_fim: Field<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1500.00")]
    pub valor: Field<Decimal>,

    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub imovel: Field<i64>,

    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub locador: Field<i64>,

    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 2)]
    pub locatario: Field<i64>,
}

#[derive(Validate)]
struct RascunhoContrato {
    data_inicio: Option<NaiveDate>,
    data_fim: Option<NaiveDate>,

    #[validate(custom(function = "validate_money"))]
    valor: Option<Decimal>,

    imovel: Option<i64>,
    locador: Option<i64>,
    locatario: Option<i64>,
}

impl ContratoPayload {
    pub fn merged_over(self, atual: &Contrato) -> Self {
        Self {
            data_inicio: self.data_inicio.or_stored(atual.data_inicio),
            data_fim: self.data_fim.or_stored(atual.data_fim),
            valor: self.valor.or_stored(atual.valor),
            imovel: self.imovel.or_stored(atual.imovel),
            locador: self.locador.or_stored(atual.locador),
            locatario: self.locatario.or_stored(atual.locatario),
        }
    }

    pub fn validate_into(self) -> Result<NovoContrato, AppError> {
        let mut pending = FieldErrors::default();
        let rascunho = RascunhoContrato {
            data_inicio: self.data_inicio.required("data_inicio", &mut pending),
            data_fim: self.data_fim.required("data_fim", &mut pending),
            valor: self.valor.required("valor", &mut pending),
            imovel: self.imovel.required("imovel", &mut pending),
            locador: self.locador.required("locador", &mut pending),
            locatario: self.locatario.required("locatario", &mut pending),
        };
        let errors = pending.finish(rascunho.validate());

        match rascunho {
            RascunhoContrato {
                data_inicio: Some(data_inicio),
                data_fim: Some(data_fim),
                valor: Some(valor),
                imovel: Some(imovel),
                locador: Some(locador),
                locatario: Some(locatario),
            } if errors.is_empty() => Ok(NovoContrato {
                data_inicio,
                data_fim,
                valor,
                imovel,
                locador,
                locatario,
            }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contrato() -> Contrato {
        Contrato {
            id: 3,
            data_inicio: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            valor: Decimal::new(150000, 2),
            imovel: 1,
            locador: 1,
            locatario: 2,
        }
    }

    fn payload(value: serde_json::Value) -> ContratoPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn foreign_keys_are_rendered_as_parent_ids() {
        let value = serde_json::to_value(contrato()).unwrap();
        assert_eq!(value["imovel"], 1);
        assert_eq!(value["locatario"], 2);
        assert_eq!(value["data_inicio"], "2025-01-01");
        assert_eq!(value["valor"], "1500.00");
    }

    #[test]
    fn every_invalid_date_is_reported() {
        let err = payload(json!({
            "data_inicio": "2025-02-30", "data_fim": "nope", "valor": "10.00",
            "imovel": 1, "locador": 1, "locatario": 2
        }))
        .validate_into()
        .unwrap_err();

        match err {
            AppError::ValidationError(errors) => {
                let fields = errors.field_errors();
                assert_eq!(fields["data_inicio"][0].code, "invalid_date");
                assert_eq!(fields["data_fim"][0].code, "invalid_date");
                assert_eq!(fields.len(), 2);
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn non_integer_reference_is_reported_on_the_field() {
        let err = payload(json!({"imovel": "um"}))
            .merged_over(&contrato())
            .validate_into()
            .unwrap_err();

        match err {
            AppError::ValidationError(errors) => {
                assert_eq!(errors.field_errors()["imovel"][0].code, "invalid_integer");
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn every_missing_field_is_reported() {
        match ContratoPayload::default().validate_into().unwrap_err() {
            AppError::ValidationError(errors) => assert_eq!(errors.field_errors().len(), 6),
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn patch_can_move_contract_to_another_property() {
        let novo = payload(json!({"imovel": 9}))
            .merged_over(&contrato())
            .validate_into()
            .unwrap();
        assert_eq!(novo.imovel, 9);
        assert_eq!(novo.locador, 1);
        assert_eq!(novo.valor, Decimal::new(150000, 2));
    }
}
