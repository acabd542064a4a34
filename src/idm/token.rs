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
//! # Token issue.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use validator::Validate;

use fiware_idm_api_types::auth::AuthRequest;

use crate::idm::{IdmProvider, IdmProviderError, types::IdmToken};

/// Response header carrying the issued token.
pub(super) const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

impl IdmProvider {
    /// Issue a token with the password method.
    ///
    /// # Returns
    /// * Success with the token of the `X-Subject-Token` header when the IDM
    ///   responds with `201`.
    /// * `IdmProviderError::AccessDenied` on `401`.
    /// * `IdmProviderError::UnexpectedStatus` on any other status.
    /// * `IdmProviderError::Transport` when no response was received.
    pub(super) async fn issue_token(
        &self,
        username: &str,
        password: &SecretString,
        domain_id: &str,
    ) -> Result<IdmToken, IdmProviderError> {
        let req = AuthRequest::password(username, password.expose_secret(), domain_id)?;
        req.validate()?;

        let response = self
            .client
            .post(self.url("auth/tokens"))
            .json(&req)
            .send()
            .await
            .map_err(|source| IdmProviderError::Transport { source })?;

        match response.status() {
            StatusCode::CREATED => response
                .headers()
                .get(SUBJECT_TOKEN_HEADER)
                .and_then(|val| val.to_str().ok())
                .map(IdmToken::new)
                .ok_or(IdmProviderError::MissingSubjectToken),
            StatusCode::UNAUTHORIZED => {
                debug!("identity service rejected the credentials");
                Err(IdmProviderError::AccessDenied)
            }
            status => {
                debug!("identity service returned {} for token issue", status);
                Err(IdmProviderError::UnexpectedStatus(status))
            }
        }
    }
}
