// src/services/contrato_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::ContratoRepository,
    models::contrato::{Contrato, ContratoPayload},
};

#[derive(Debug, Clone)]
pub struct ContratoService {
    repo: ContratoRepository,
}

impl ContratoService {
    pub fn new(repo: ContratoRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Contrato>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_all(executor).await
    }

    pub async fn get<'e, E>(&self, executor: E, id: i64) -> Result<Contrato, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create<'e, E>(&self, executor: E, payload: ContratoPayload) -> Result<Contrato, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let novo = payload.validate_into()?;
        tracing::debug!("Criando contrato para o imóvel {}", novo.imovel);
        self.repo.create(executor, &novo).await
    }

    /// PUT: todos os campos obrigatórios precisam vir no payload.
    pub async fn replace<'a, A>(&self, conn: A, id: i64, payload: ContratoPayload) -> Result<Contrato, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        // 404 antes de validar
        self.repo
            .find_by_id_for_update(&mut *tx, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let novo = payload.validate_into()?;
        let contrato = self
            .repo
            .update(&mut *tx, id, &novo)
            .await?
            .ok_or(AppError::NotFound)?;

        tx.commit().await?;
        Ok(contrato)
    }

    /// PATCH: mescla com o registro gravado e valida o resultado como um payload completo.
    pub async fn patch<'a, A>(&self, conn: A, id: i64, payload: ContratoPayload) -> Result<Contrato, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let atual = self
            .repo
            .find_by_id_for_update(&mut *tx, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let novo = payload.merged_over(&atual).validate_into()?;
        let contrato = self
            .repo
            .update(&mut *tx, id, &novo)
            .await?
            .ok_or(AppError::NotFound)?;

        tx.commit().await?;
        Ok(contrato)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if !self.repo.delete(executor, id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!("Contrato {} removido (pagamentos em cascata)", id);
        Ok(())
    }
}
