// src/routes.rs

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::AppState,
    docs,
    handlers::{contratos, imoveis, pagamentos, usuarios},
};

pub fn create_router(app_state: AppState) -> Router {
    let usuario_routes = Router::new()
        .route(
            "/usuarios/",
            get(usuarios::list_usuarios).post(usuarios::create_usuario),
        )
        .route(
            "/usuarios/{id}/",
            get(usuarios::get_usuario)
                .put(usuarios::update_usuario)
                .patch(usuarios::patch_usuario)
                .delete(usuarios::delete_usuario),
        )
        // Rota duplicada mantida por compatibilidade com clientes antigos
        .route(
            "/users",
            get(usuarios::list_usuarios).post(usuarios::create_usuario),
        );

    let imovel_routes = Router::new()
        .route(
            "/imoveis/",
            get(imoveis::list_imoveis).post(imoveis::create_imovel),
        )
        .route(
            "/imoveis/{id}/",
            get(imoveis::get_imovel)
                .put(imoveis::update_imovel)
                .patch(imoveis::patch_imovel)
                .delete(imoveis::delete_imovel),
        )
        .route(
            "/imoveis_list",
            get(imoveis::list_imoveis).post(imoveis::create_imovel),
        );

    let contrato_routes = Router::new()
        .route(
            "/contratos/",
            get(contratos::list_contratos).post(contratos::create_contrato),
        )
        .route(
            "/contratos/{id}/",
            get(contratos::get_contrato)
                .put(contratos::update_contrato)
                .patch(contratos::patch_contrato)
                .delete(contratos::delete_contrato),
        )
        .route(
            "/contratos_list",
            get(contratos::list_contratos).post(contratos::create_contrato),
        );

    let pagamento_routes = Router::new()
        .route(
            "/pagamentos/",
            get(pagamentos::list_pagamentos).post(pagamentos::create_pagamento),
        )
        .route(
            "/pagamentos/{id}/",
            get(pagamentos::get_pagamento)
                .put(pagamentos::update_pagamento)
                .patch(pagamentos::patch_pagamento)
                .delete(pagamentos::delete_pagamento),
        )
        .route(
            "/pagamentos_list",
            get(pagamentos::list_pagamentos).post(pagamentos::create_pagamento),
        );

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(usuario_routes)
        .merge(imovel_routes)
        .merge(contrato_routes)
        .merge(pagamento_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
