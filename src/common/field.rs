// src/common/field.rs
//
// Campo de payload que distingue "ausente" de `null` e guarda o erro de tipo
// em vez de abortar a desserialização do corpo inteiro.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

#[derive(Debug, Clone)]
pub enum Field<T> {
    Missing,
    Null,
    Present(T),
    Invalid(ValidationError),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

/// Tipos aceitos num payload, cada um com o código do erro quando o JSON não casa.
pub trait JsonField: DeserializeOwned {
    const INVALID_CODE: &'static str;

    fn invalid(_value: &Value) -> ValidationError {
        ValidationError::new(Self::INVALID_CODE)
    }
}

impl JsonField for String {
    const INVALID_CODE: &'static str = "invalid_string";
}

impl JsonField for i64 {
    const INVALID_CODE: &'static str = "invalid_integer";
}

impl JsonField for bool {
    const INVALID_CODE: &'static str = "invalid_boolean";
}

impl JsonField for Decimal {
    const INVALID_CODE: &'static str = "invalid_number";
}

impl JsonField for NaiveDate {
    const INVALID_CODE: &'static str = "invalid_date";
}

/// Erro de enum com o valor recebido em `{input}`.
pub fn invalid_choice(value: &Value) -> ValidationError {
    let input = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let mut err = ValidationError::new("invalid_choice");
    err.add_param("input".into(), &input);
    err
}

impl<'de, T: JsonField> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Field::Null);
        }
        Ok(match T::deserialize(&value) {
            Ok(parsed) => Field::Present(parsed),
            Err(_) => Field::Invalid(T::invalid(&value)),
        })
    }
}

impl<T> Field<T> {
    /// PATCH: ausente vira o valor gravado.
    pub fn or_stored(self, stored: T) -> Self {
        match self {
            Field::Missing => Field::Present(stored),
            other => other,
        }
    }

    /// PATCH de campo anulável: ausente vira o valor gravado, que pode ser `null`.
    pub fn or_stored_nullable(self, stored: Option<T>) -> Self {
        match self {
            Field::Missing => stored.map_or(Field::Null, Field::Present),
            other => other,
        }
    }

    pub fn required(self, name: &'static str, errors: &mut FieldErrors) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing => {
                errors.push(name, ValidationError::new("required"));
                None
            }
            Field::Null => {
                errors.push(name, ValidationError::new("null"));
                None
            }
            Field::Invalid(err) => {
                errors.push(name, err);
                None
            }
        }
    }

    pub fn nullable(self, name: &'static str, errors: &mut FieldErrors) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing | Field::Null => None,
            Field::Invalid(err) => {
                errors.push(name, err);
                None
            }
        }
    }
}

/// Erros de presença e de tipo, acumulados antes do `Validate`.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<(&'static str, ValidationError)>);

impl FieldErrors {
    fn push(&mut self, name: &'static str, err: ValidationError) {
        self.0.push((name, err));
    }

    /// Junta com o resultado do `Validate` num só `ValidationErrors`.
    pub fn finish(self, validated: Result<(), ValidationErrors>) -> ValidationErrors {
        let mut errors = validated.err().unwrap_or_else(ValidationErrors::new);
        for (name, err) in self.0 {
            errors.add(name, err);
        }
        errors
    }
}
