pub mod db_utils;
pub mod error;
pub mod field;
pub mod i18n;
pub mod validation;
