// src/models/pagamento.rs

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

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pagamento {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(value_type = String, format = Date, example = "2025-02-05")]
    pub data_pagamento: NaiveDate,

    #[schema(example = "1500.00")]
    pub valor: Decimal,

    // true = pago
    #[schema(example = true)]
    pub status: bool,

    #[sqlx(rename = "contrato_id")]
    #[schema(example = 1)]
    pub contrato: i64,
}

#[derive(Debug, Clone)]
pub struct NovoPagamento {
    pub data_pagamento: NaiveDate,
    pub valor: Decimal,
    pub status: bool,
    pub contrato: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PagamentoPayload {
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2025-02-05")]
    pub data_pagamento: Field<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1500.00")]
    pub valor: Field<Decimal>,

    #[serde(default)]
    #[schema(value_type = Option<bool>, example = true)]
    pub status: Field<bool>,

    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub contrato: Field<i64>,
}

#[derive(Validate)]
struct RascunhoPagamento {
    data_pagamento: Option<NaiveDate>,

    #[validate(custom(function = "validate_money"))]
    valor: Option<Decimal>,

    status: Option<bool>,
    contrato: Option<i64>,
}

impl PagamentoPayload {
    pub fn merged_over(self, atual: &Pagamento) -> Self {
        Self {
            data_pagamento: self.data_pagamento.or_stored(atual.data_pagamento),
            valor: self.valor.or_stored(atual.valor),
            status: self.status.or_stored(atual.status),
            contrato: self.contrato.or_stored(atual.contrato),
        }
    }

    pub fn validate_into(self) -> Result<NovoPagamento, AppError> {
        let mut pending = FieldErrors::default();
        let rascunho = RascunhoPagamento {
            data_pagamento: self.data_pagamento.required("data_pagamento", &mut pending),
            valor: self.valor.required("valor", &mut pending),
            status: self.status.required("status", &mut pending),
            contrato: self.contrato.required("contrato", &mut pending),
        };
        let errors = pending.finish(rascunho.validate());

        match rascunho {
            RascunhoPagamento {
                data_pagamento: Some(data_pagamento),
                valor: Some(valor),
                status: Some(status),
                contrato: Some(contrato),
            } if errors.is_empty() => Ok(NovoPagamento { data_pagamento, valor, status, contrato }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}
