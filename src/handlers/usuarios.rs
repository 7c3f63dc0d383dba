// src/handlers/usuarios.rs

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
    models::usuario::{Usuario, UsuarioPayload},
};

// GET /usuarios/  (e GET /users)
#[utoipa::path(
    get,
    path = "/usuarios/",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Lista de usuários", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let usuarios = app_state
        .usuario_service
        .list(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(usuarios)))
}

// POST /usuarios/  (e POST /users)
#[utoipa::path(
    post,
    path = "/usuarios/",
    tag = "Usuarios",
    request_body = UsuarioPayload,
    responses(
        (status = 201, description = "Usuário criado", body = Usuario),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<UsuarioPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .create(&app_state.db_pool, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(usuario)))
}

// GET /usuarios/{id}/
#[utoipa::path(
    get,
    path = "/usuarios/{id}/",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = Usuario),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .get(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(usuario)))
}

// PUT /usuarios/{id}/
#[utoipa::path(
    put,
    path = "/usuarios/{id}/",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    request_body = UsuarioPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = Usuario),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn update_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UsuarioPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .replace(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(usuario)))
}

// PATCH /usuarios/{id}/
#[utoipa::path(
    patch,
    path = "/usuarios/{id}/",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    request_body = UsuarioPayload,
    responses(
        (status = 200, description = "Usuário atualizado parcialmente", body = Usuario),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn patch_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UsuarioPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;
    let Json(payload) = payload
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .patch(&app_state.db_pool, id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(usuario)))
}

// DELETE /usuarios/{id}/
#[utoipa::path(
    delete,
    path = "/usuarios/{id}/",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn delete_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .usuario_service
        .delete(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
