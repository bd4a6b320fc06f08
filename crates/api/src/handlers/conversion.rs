//! Handler for `/conversao`.

use axum::extract::State;
use axum::Json;
use portfolio_core::currency::ConversionRequest;
use portfolio_core::error::CoreError;

use crate::error::AppResult;
use crate::exchange::Conversion;
use crate::extract::ApiQuery;
use crate::query::ConversionParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /conversao?valor=&de=&para=
pub async fn convert(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ConversionParams>,
) -> AppResult<Json<DataResponse<Conversion>>> {
    let request = ConversionRequest::parse(
        query.valor.as_deref(),
        query.de.as_deref(),
        query.para.as_deref(),
    )?;

    let conversion = state
        .exchange
        .convert(&request)
        .await
        .map_err(CoreError::from)?;
    tracing::debug!(
        amount = request.amount,
        from = %request.from,
        to = %request.to,
        converted = ?conversion.converted,
        "Currency converted"
    );

    Ok(Json(DataResponse { data: conversion }))
}
