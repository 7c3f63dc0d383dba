// src/handlers/imoveis.rs

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
    models::imovel::{Imovel, ImovelPayload},
};

// GET /imoveis/  (e GET /imoveis_list)
#[utoipa::path(
    get,
    path = "/imoveis/",
    tag = "Imoveis",
    responses(
        (status = 200, description = "Lista de imóveis", body = Vec<Imovel>)
    )
)]
pub async fn list_imoveis(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let imoveis = app_state
        .imovel_service
        .list(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(imoveis)))
}

// POST /imoveis/  (e POST /imoveis_list)
#[utoipa::path(
    post,
    path = "/imoveis/",
    tag = "Imoveis",
    request_body = ImovelPayload,
    responses(
        (status = 201, description = "Imóvel criado", body = Imovel),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_imovel(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<ImovelPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let imovel = app_state
        .imovel_service
        .create(&app_state.db_pool, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(imovel)))
}

// GET /imoveis/{id}/
#[utoipa::path(
    get,
    path = "/imoveis/{id}/",
    tag = "Imoveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Imóvel encontrado", body = Imovel),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn get_imovel(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let imovel = app_state
        .imovel_service
        .get(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(imovel)))
}

// PUT /imoveis/{id}/
#[utoipa::path(
    put,
    path = "/imoveis/{id}/",
    tag = "Imoveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    request_body = ImovelPayload,
    responses(
        (status = 200, description = "Imóvel atualizado", body = Imovel),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn update_imovel(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ImovelPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let imovel = app_state
        .imovel_service
        .replace(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(imovel)))
}

// PATCH /imoveis/{id}/
#[utoipa::path(
    patch,
    path = "/imoveis/{id}/",
    tag = "Imoveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    request_body = ImovelPayload,
    responses(
        (status = 200, description = "Imóvel atualizado parcialmente", body = Imovel),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn patch_imovel(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ImovelPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let imovel = app_state
        .imovel_service
        .patch(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(imovel)))
}

// DELETE /imoveis/{id}/
#[utoipa::path(
    delete,
    path = "/imoveis/{id}/",
    tag = "Imoveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    responses(
        (status = 204, description = "Imóvel removido"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn delete_imovel(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .imovel_service
        .delete(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
