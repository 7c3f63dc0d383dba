use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::imovel::{Imovel, NovoImovel},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ImovelRepository;

impl ImovelRepository {
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Imovel>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imoveis = sqlx::query_as::<_, Imovel>("SELECT * FROM imoveis ORDER BY id")
            .fetch_all(executor)
            .await?;
        Ok(imoveis)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Imovel>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imovel = sqlx::query_as::<_, Imovel>("SELECT * FROM imoveis WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(imovel)
    }

    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<Imovel>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imovel = sqlx::query_as::<_, Imovel>("SELECT * FROM imoveis WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(imovel)
    }

    pub async fn create<'e, E>(&self, executor: E, novo: &NovoImovel) -> Result<Imovel, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imovel = sqlx::query_as::<_, Imovel>(
            r#"
            INSERT INTO imoveis (titulo, tipo, valor_aluguel, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&novo.titulo)
        .bind(&novo.tipo)
        .bind(novo.valor_aluguel)
        .bind(novo.status)
        .fetch_one(executor)
        .await?;
        Ok(imovel)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        novo: &NovoImovel,
    ) -> Result<Option<Imovel>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imovel = sqlx::query_as::<_, Imovel>(
            r#"
            UPDATE imoveis
            SET titulo = $2, tipo = $3, valor_aluguel = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&novo.titulo)
        .bind(&novo.tipo)
        .bind(novo.valor_aluguel)
        .bind(novo.status)
        .fetch_optional(executor)
        .await?;
        Ok(imovel)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM imoveis WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
