// src/config.rs

use std::{env, net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{ContratoRepository, ImovelRepository, PagamentoRepository, UsuarioRepository},
    services::{ContratoService, ImovelService, PagamentoService, UsuarioService},
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        Ok(Self {
            database_url,
            bind_addr: env_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 3)?),
        })
    }
}

// Variável opcional: ausente usa o padrão, presente mas inválida é erro
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} inválida: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: Arc<I18nStore>,
    pub usuario_service: UsuarioService,
    pub imovel_service: ImovelService,
    pub contrato_service: ContratoService,
    pub pagamento_service: PagamentoService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Self::from_pool(db_pool)
    }

    /// Monta o gráfico de dependências sobre uma pool já criada.
    pub fn from_pool(db_pool: PgPool) -> anyhow::Result<Self> {
        let i18n_store = I18nStore::load().context("Catálogo de mensagens inválido")?;

        Ok(Self {
            db_pool,
            i18n_store: Arc::new(i18n_store),
            usuario_service: UsuarioService::new(UsuarioRepository),
            imovel_service: ImovelService::new(ImovelRepository),
            contrato_service: ContratoService::new(ContratoRepository),
            pagamento_service: PagamentoService::new(PagamentoRepository),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_variable_uses_default() {
        let port: u16 = env_or("GESTAO_ALUGUEIS_TESTE_INEXISTENTE", 3000).unwrap();
        assert_eq!(port, 3000);
    }
}
