use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::map_fk_violation, error::AppError},
    models::pagamento::{NovoPagamento, Pagamento},
};

const FOREIGN_KEYS: &[(&str, &str)] = &[("pagamentos_contrato_id_fkey", "contrato")];

#[derive(Debug, Clone, Copy, Default)]
pub struct PagamentoRepository;

impl PagamentoRepository {
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamentos = sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos ORDER BY id")
            .fetch_all(executor)
            .await?;
        Ok(pagamentos)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(pagamento)
    }

    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento =
            sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(pagamento)
    }

    pub async fn create<'e, E>(&self, executor: E, novo: &NovoPagamento) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Pagamento>(
            r#"
            INSERT INTO pagamentos (data_pagamento, valor, status, contrato_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(novo.data_pagamento)
        .bind(novo.valor)
        .bind(novo.status)
        .bind(novo.contrato)
        .fetch_one(executor)
        .await
        .map_err(|e| map_fk_violation(e, FOREIGN_KEYS))
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        novo: &NovoPagamento,
    ) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Pagamento>(
            r#"
            UPDATE pagamentos
            SET data_pagamento = $2, valor = $3, status = $4, contrato_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(novo.data_pagamento)
        .bind(novo.valor)
        .bind(novo.status)
        .bind(novo.contrato)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_fk_violation(e, FOREIGN_KEYS))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM pagamentos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
