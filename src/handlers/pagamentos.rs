// src/handlers/pagamentos.rs

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
    models::pagamento::{Pagamento, PagamentoPayload},
};

// GET /pagamentos/  (e GET /pagamentos_list)
#[utoipa::path(
    get,
    path = "/pagamentos/",
    tag = "Pagamentos",
    responses(
        (status = 200, description = "Lista de pagamentos", body = Vec<Pagamento>)
    )
)]
pub async fn list_pagamentos(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let pagamentos = app_state
        .pagamento_service
        .list(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamentos)))
}

// POST /pagamentos/  (e POST /pagamentos_list)
#[utoipa::path(
    post,
    path = "/pagamentos/",
    tag = "Pagamentos",
    request_body = PagamentoPayload,
    responses(
        (status = 201, description = "Pagamento criado", body = Pagamento),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<PagamentoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .create(&app_state.db_pool, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(pagamento)))
}

// GET /pagamentos/{id}/
#[utoipa::path(
    get,
    path = "/pagamentos/{id}/",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento encontrado", body = Pagamento),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn get_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .get(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamento)))
}

// PUT /pagamentos/{id}/
#[utoipa::path(
    put,
    path = "/pagamentos/{id}/",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento")),
    request_body = PagamentoPayload,
    responses(
        (status = 200, description = "Pagamento atualizado", body = Pagamento),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn update_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PagamentoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .replace(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamento)))
}

// PATCH /pagamentos/{id}/
#[utoipa::path(
    patch,
    path = "/pagamentos/{id}/",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento")),
    request_body = PagamentoPayload,
    responses(
        (status = 200, description = "Pagamento atualizado parcialmente", body = Pagamento),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn patch_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PagamentoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .patch(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamento)))
}

// DELETE /pagamentos/{id}/
#[utoipa::path(
    delete,
    path = "/pagamentos/{id}/",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento")),
    responses(
        (status = 204, description = "Pagamento removido"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn delete_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .pagamento_service
        .delete(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
