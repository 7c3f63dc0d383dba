//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gestao_alugueis::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gestao_alugueis=debug,tower_http=info,sqlx=warn".into()),
        )
        .with(fmt::layer().with_target(false).compact())
        .init();

    let app_state = AppState::new(&config).await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = create_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
