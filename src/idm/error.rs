// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # IDM client error

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::BuilderError;

/// IDM provider error.
#[derive(Error, Debug)]
pub enum IdmProviderError {
    /// The IDM rejected the credentials (`401`).
    #[error("the identity service denied access")]
    AccessDenied,

    /// Request data can not be built.
    #[error("building request data: {source}")]
    Builder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// The additional root certificate can not be read.
    #[error("reading CA certificate {path:?}")]
    CaCertificate {
        /// Certificate location.
        path: PathBuf,
        /// The source of the error.
        source: std::io::Error,
    },

    /// The HTTP client can not be constructed.
    #[error("building http client: {source}")]
    HttpClient {
        /// The source of the error.
        source: reqwest::Error,
    },

    /// The token can not be passed as a header value.
    #[error("token is not a valid header value")]
    InvalidToken,

    /// The response body is not the expected JSON document.
    #[error("malformed identity service response: {source}")]
    MalformedResponse {
        /// The source of the error.
        source: serde_json::Error,
    },

    /// Token issued without the `X-Subject-Token` header.
    #[error("the identity service did not return the subject token")]
    MissingSubjectToken,

    /// The request did not produce any response (connect, TLS, read errors).
    #[error("identity service request failed: {source}")]
    Transport {
        /// The source of the error.
        source: reqwest::Error,
    },

    /// Any response status the operation does not expect.
    #[error("identity service responded with {0}")]
    UnexpectedStatus(StatusCode),

    /// Request data is invalid.
    #[error(transparent)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl IdmProviderError {
    /// HTTP status of the IDM response that caused the error, when there was
    /// a response at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::AccessDenied => Some(StatusCode::UNAUTHORIZED),
            Self::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}
