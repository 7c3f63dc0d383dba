use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::map_fk_violation, error::AppError},
    models::contrato::{Contrato, NovoContrato},
};

// Constraint no banco -> campo no JSON
const FOREIGN_KEYS: &[(&str, &str)] = &[
    ("contratos_imovel_id_fkey", "imovel"),
    ("contratos_locador_id_fkey", "locador"),
    ("contratos_locatario_id_fkey", "locatario"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ContratoRepository;

impl ContratoRepository {
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Contrato>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let contratos = sqlx::query_as::<_, Contrato>("SELECT * FROM contratos ORDER BY id")
            .fetch_all(executor)
            .await?;
        Ok(contratos)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Contrato>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let contrato = sqlx::query_as::<_, Contrato>("SELECT * FROM contratos WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(contrato)
    }

    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<Contrato>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let contrato =
            sqlx::query_as::<_, Contrato>("SELECT * FROM contratos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(contrato)
    }

    /// Imóvel, locador ou locatário inexistente vira erro no respectivo campo.
    pub async fn create<'e, E>(&self, executor: E, novo: &NovoContrato) -> Result<Contrato, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Contrato>(
            r#"
            INSERT INTO contratos (data_inicio, data_fim, valor, imovel_id, locador_id, locatario_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(novo.data_inicio)
        .bind(novo.data_fim)
        .bind(novo.valor)
        .bind(novo.imovel)
        .bind(novo.locador)
        .bind(novo.locatario)
        .fetch_one(executor)
        .await
        .map_err(|e| map_fk_violation(e, FOREIGN_KEYS))
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        novo: &NovoContrato,
    ) -> Result<Option<Contrato>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Contrato>(
            r#"
            UPDATE contratos
            SET data_inicio = $2, data_fim = $3, valor = $4,
                imovel_id = $5, locador_id = $6, locatario_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(novo.data_inicio)
        .bind(novo.data_fim)
        .bind(novo.valor)
        .bind(novo.imovel)
        .bind(novo.locador)
        .bind(novo.locatario)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_fk_violation(e, FOREIGN_KEYS))
    }

    // Pagamentos do contrato saem junto via ON DELETE CASCADE
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM contratos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
