use crate::common::error::AppError;

// ---
// Helper FK: traduz violação de chave estrangeira no campo do payload
// ---
/// `constraints` liga o nome da constraint no banco ao nome do campo no JSON.
pub(crate) fn map_fk_violation(
    err: sqlx::Error,
    constraints: &[(&str, &'static str)],
) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            if let Some((_, field)) = constraints.iter().find(|(name, _)| *name == constraint) {
                return AppError::InvalidReference { field: *field };
            }
        }
    }
    err.into()
}
