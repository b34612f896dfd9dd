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

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use liboneview::OneViewApiError;
use serde::Serialize;

use crate::json::JsonExt;

const BASE_REGISTRY_PREFIX: &str = "Base.1.1.";
const MESSAGE_ODATA_TYPE: &str = "#Message.v1_0_5.Message";

pub const INTERNAL_ERROR_MESSAGE: &str =
    "The request failed due to an internal service error.  The service is still operational.";

/// Messages of the DMTF Base registry used by this service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaseMessage {
    GeneralError,
    InternalError,
    ResourceMissingAtUri,
}

impl BaseMessage {
    pub fn id(self) -> &'static str {
        match self {
            BaseMessage::GeneralError => "GeneralError",
            BaseMessage::InternalError => "InternalError",
            BaseMessage::ResourceMissingAtUri => "ResourceMissingAtURI",
        }
    }

    /// Message text, `%1`..`%n` are replaced by message args.
    fn template(self) -> &'static str {
        match self {
            BaseMessage::GeneralError => {
                "A general error has occurred. See ExtendedInfo for more information."
            }
            BaseMessage::InternalError => INTERNAL_ERROR_MESSAGE,
            BaseMessage::ResourceMissingAtUri => "The resource at the URI %1 was not found.",
        }
    }

    fn severity(self) -> &'static str {
        "Critical"
    }

    fn resolution(self) -> &'static str {
        match self {
            BaseMessage::GeneralError => "See ExtendedInfo for more information.",
            BaseMessage::InternalError => {
                "Resubmit the request.  If the problem persists, consider resetting the service."
            }
            BaseMessage::ResourceMissingAtUri => {
                "Place a valid resource at the URI or correct the URI and resubmit the request."
            }
        }
    }

    fn format(self, args: &[String]) -> String {
        args.iter()
            .enumerate()
            .rev()
            .fold(self.template().to_string(), |text, (i, arg)| {
                text.replace(&format!("%{}", i + 1), arg)
            })
    }
}

/// Redfish error payload as returned with every non-success status.
#[derive(Debug, Serialize)]
pub struct RedfishError {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(rename = "@Message.ExtendedInfo")]
    extended_info: Vec<ExtendedInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ExtendedInfo {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    message_id: String,
    message: String,
    related_properties: Vec<String>,
    message_args: Vec<String>,
    severity: &'static str,
    resolution: &'static str,
}

impl RedfishError {
    pub fn new(code: BaseMessage, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: format!("{BASE_REGISTRY_PREFIX}{}", code.id()),
                message: message.into(),
                extended_info: Vec::new(),
            },
        }
    }

    /// The canonical body for failures whose details must not leak.
    pub fn internal_error() -> Self {
        Self::new(BaseMessage::InternalError, INTERNAL_ERROR_MESSAGE)
            .with_extended_info(BaseMessage::InternalError, &[], &[])
    }

    pub fn with_extended_info(
        mut self,
        message: BaseMessage,
        message_args: &[&str],
        related_properties: &[&str],
    ) -> Self {
        let message_args = message_args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        self.error.extended_info.push(ExtendedInfo {
            odata_type: MESSAGE_ODATA_TYPE,
            message_id: format!("{BASE_REGISTRY_PREFIX}{}", message.id()),
            message: message.format(&message_args),
            related_properties: related_properties
                .iter()
                .map(ToString::to_string)
                .collect(),
            message_args,
            severity: message.severity(),
            resolution: message.resolution(),
        });
        self
    }

    pub fn into_json(self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

/// Failures of a Redfish request handler. Every variant maps onto exactly
/// one HTTP status.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    NotFoundAtUri { uri: String, message: String },

    #[error("OneView request failed: {0}")]
    OneView(#[source] OneViewApiError),
}

impl From<OneViewApiError> for ApiError {
    fn from(err: OneViewApiError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::OneView(err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => RedfishError::new(BaseMessage::GeneralError, message)
                .into_json()
                .into_response(StatusCode::NOT_FOUND),
            ApiError::NotFoundAtUri { uri, message } => {
                RedfishError::new(BaseMessage::GeneralError, message)
                    .with_extended_info(BaseMessage::ResourceMissingAtUri, &[uri.as_str()], &[])
                    .into_json()
                    .into_response(StatusCode::NOT_FOUND)
            }
            ApiError::OneView(err) => {
                tracing::error!(error = %err, "OneView request failed");
                RedfishError::internal_error()
                    .into_json()
                    .into_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn not_found_body_has_no_extended_info() {
        let body = RedfishError::new(BaseMessage::GeneralError, "server-hardware not found").into_json();
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": "Base.1.1.GeneralError",
                    "message": "server-hardware not found",
                    "@Message.ExtendedInfo": []
                }
            })
        );
    }

    #[test]
    fn message_args_are_substituted() {
        let body = RedfishError::new(BaseMessage::GeneralError, "missing")
            .with_extended_info(BaseMessage::ResourceMissingAtUri, &["/redfish/v1/Foo"], &[])
            .into_json();
        assert_eq!(
            body["error"]["@Message.ExtendedInfo"][0]["Message"],
            "The resource at the URI /redfish/v1/Foo was not found."
        );
        assert_eq!(
            body["error"]["@Message.ExtendedInfo"][0]["MessageArgs"],
            json!(["/redfish/v1/Foo"])
        );
    }

    #[test]
    fn vendor_not_found_becomes_not_found() {
        let err = ApiError::from(OneViewApiError::ResourceNotFound {
            url: "https://ov/rest/server-hardware/1".to_string(),
            message: "server-hardware not found".to_string(),
        });
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "server-hardware not found"));
    }

    #[test]
    fn other_vendor_errors_stay_internal() {
        let err = ApiError::from(OneViewApiError::LoginFailure("nope".to_string()));
        assert!(matches!(err, ApiError::OneView(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
