//! Request extractors whose rejections render as JSON errors.
//!
//! Axum's stock `Query` and `Json` reject malformed input with a plain-text
//! body. These wrappers route the rejection through [`AppError`] so every
//! failure carries the same `{ "error", "code" }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Query-string extractor (`?id=1`).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
