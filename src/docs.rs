// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Usuarios ---
        handlers::usuarios::list_usuarios,
        handlers::usuarios::create_usuario,
        handlers::usuarios::get_usuario,
        handlers::usuarios::update_usuario,
        handlers::usuarios::patch_usuario,
        handlers::usuarios::delete_usuario,

        // --- Imoveis ---
        handlers::imoveis::list_imoveis,
        handlers::imoveis::create_imovel,
        handlers::imoveis::get_imovel,
        handlers::imoveis::update_imovel,
        handlers::imoveis::patch_imovel,
        handlers::imoveis::delete_imovel,

        // --- Contratos ---
        handlers::contratos::list_contratos,
        handlers::contratos::create_contrato,
        handlers::contratos::get_contrato,
        handlers::contratos::update_contrato,
        handlers::contratos::patch_contrato,
        handlers::contratos::delete_contrato,

        // --- Pagamentos ---
        handlers::pagamentos::list_pagamentos,
        handlers::pagamentos::create_pagamento,
        handlers::pagamentos::get_pagamento,
        handlers::pagamentos::update_pagamento,
        handlers::pagamentos::patch_pagamento,
        handlers::pagamentos::delete_pagamento,
    ),
    components(
        schemas(
            models::usuario::TipoUsuario,
            models::usuario::Usuario,
            models::usuario::UsuarioPayload,

            models::imovel::StatusImovel,
            models::imovel::Imovel,
            models::imovel::ImovelPayload,

            models::contrato::Contrato,
            models::contrato::ContratoPayload,

            models::pagamento::Pagamento,
            models::pagamento::PagamentoPayload,
        )
    ),
    tags(
        (name = "Usuarios", description = "Locadores e locatários"),
        (name = "Imoveis", description = "Imóveis para locação"),
        (name = "Contratos", description = "Contratos de locação"),
        (name = "Pagamentos", description = "Pagamentos de aluguel")
    )
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
