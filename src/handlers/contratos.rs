// src/handlers/contratos.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::contrato::{Contrato, ContratoPayload},
};

// GET /contratos/  (e GET /contratos_list)
#[utoipa::path(
    get,
    path = "/contratos/",
    tag = "Contratos",
    responses(
        (status = 200, description = "Lista de contratos", body = Vec<Contrato>)
    )
)]
pub async fn list_contratos(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let contratos = app_state
        .contrato_service
        .list(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(contratos)))
}

// POST /contratos/  (e POST /contratos_list)
#[utoipa::path(
    post,
    path = "/contratos/",
    tag = "Contratos",
    request_body = ContratoPayload,
    responses(
        (status = 201, description = "Contrato criado", body = Contrato),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_contrato(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<ContratoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let contrato = app_state
        .contrato_service
        .create(&app_state.db_pool, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(contrato)))
}

// GET /contratos/{id}/
#[utoipa::path(
    get,
    path = "/contratos/{id}/",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Contrato encontrado", body = Contrato),
        (status = 404, description = "Contrato não encontrado")
    )
)]
pub async fn get_contrato(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let contrato = app_state
        .contrato_service
        .get(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(contrato)))
}

// PUT /contratos/{id}/
#[utoipa::path(
    put,
    path = "/contratos/{id}/",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    request_body = ContratoPayload,
    responses(
        (status = 200, description = "Contrato atualizado", body = Contrato),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Contrato não encontrado")
    )
)]
pub async fn update_contrato(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ContratoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let contrato = app_state
        .contrato_service
        .replace(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(contrato)))
}

// PATCH /contratos/{id}/
#[utoipa::path(
    patch,
    path = "/contratos/{id}/",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    request_body = ContratoPayload,
    responses(
        (status = 200, description = "Contrato atualizado parcialmente", body = Contrato),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Contrato não encontrado")
    )
)]
pub async fn patch_contrato(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ContratoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let contrato = app_state
        .contrato_service
        .patch(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(contrato)))
}

// DELETE /contratos/{id}/
#[utoipa::path(
    delete,
    path = "/contratos/{id}/",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    responses(
        (status = 204, description = "Contrato removido"),
        (status = 404, description = "Contrato não encontrado")
    )
)]
pub async fn delete_contrato(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .contrato_service
        .delete(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
