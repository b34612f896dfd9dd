/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use eyre::WrapErr;
use liboneview::{OneView, OneViewClientPool};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::cfg::file::OneViewRedfishConfig;
use crate::error::ApiError;

pub mod cfg;
pub mod error;
pub mod json;
pub mod logging;
pub mod redfish;

#[derive(Clone)]
pub struct AppState {
    pub oneview: Arc<dyn OneView>,
}

/// Redfish routes served from OneView. Trailing slashes are not
/// normalized here, see [`run`].
pub fn router(state: AppState) -> Router {
    let r = Router::new();
    let r = redfish::resource_block::add_routes(r);
    let r = redfish::computer_system::add_routes(r);
    let r = redfish::volume_collection::add_routes(r);
    r.fallback(not_found)
        .layer(middleware::from_fn(log_failures))
        .with_state(state)
}

async fn not_found(request: Request) -> ApiError {
    let uri = request.uri().path().to_string();
    ApiError::NotFoundAtUri {
        message: format!("Resource {uri} not found"),
        uri,
    }
}

async fn log_failures(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    if !response.status().is_success() {
        tracing::warn!(method, path, status = response.status().to_string());
    }
    response
}

pub async fn run(config: OneViewRedfishConfig) -> eyre::Result<()> {
    let pool = OneViewClientPool::builder(config.oneview.allow_insecure)
        .timeout(config.oneview.timeout)
        .build()
        .wrap_err("Failed to build OneView client")?;
    let oneview = pool
        .create_client(config.oneview.endpoint())
        .await
        .wrap_err_with(|| format!("Failed to connect to OneView at {}", config.oneview.host))?;

    let app = NormalizePathLayer::trim_trailing_slash().layer(router(AppState { oneview }));
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.listen))?;
    tracing::info!(address = %config.listen, "Serving Redfish API");

    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .wrap_err("Redfish server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
