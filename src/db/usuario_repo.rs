use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::usuario::{NovoUsuario, Usuario},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'usuarios'
#[derive(Debug, Clone, Copy, Default)]
pub struct UsuarioRepository;

impl UsuarioRepository {
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Usuario>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios ORDER BY id")
            .fetch_all(executor)
            .await?;
        Ok(usuarios)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Usuario>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(usuario)
    }

    /// Mesma busca, travando a linha até o fim da transação (PATCH).
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<Usuario>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario =
            sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(usuario)
    }

    pub async fn create<'e, E>(&self, executor: E, novo: &NovoUsuario) -> Result<Usuario, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nome, email, telefone, tipo)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&novo.nome)
        .bind(&novo.email)
        .bind(&novo.telefone)
        .bind(novo.tipo)
        .fetch_one(executor)
        .await?;
        Ok(usuario)
    }

    /// Substitui todos os campos; `None` se o id não existe.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        novo: &NovoUsuario,
    ) -> Result<Option<Usuario>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios
            SET nome = $2, email = $3, telefone = $4, tipo = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&novo.nome)
        .bind(&novo.email)
        .bind(&novo.telefone)
        .bind(novo.tipo)
        .fetch_optional(executor)
        .await?;
        Ok(usuario)
    }

    // Contratos (e seus pagamentos) saem junto via ON DELETE CASCADE
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
