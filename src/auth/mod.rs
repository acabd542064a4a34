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
//! # Login through the FIWARE IDM
//!
//! The IDM decides whether the password is right. The host user system
//! decides whether an existing account may log in:
//!
//! 1. empty or blacklisted usernames are rejected without contacting the
//!    IDM,
//! 2. the credentials are exchanged for an IDM token (`domain_id` of the
//!    `[idm]` section),
//! 3. the local account with the email equal to the login name is looked up.
//!    An existing account must carry exactly that email and must be neither
//!    blocked nor waiting for the activation. The back-office only admits
//!    users with a local account.
//!
//! Existing accounts keep their local username. The token is not used past
//! the check.

use secrecy::ExposeSecret;
use tracing::{info, warn};

pub mod error;
pub mod types;

use crate::idm::IdmApi;
use crate::local_user::LocalUserApi;
use crate::service::ServiceState;

pub use error::AuthenticationError;
pub use types::*;

/// FIWARE IDM authentication plugin.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthBridge {}

impl AuthBridge {
    pub fn new() -> Self {
        Self {}
    }

    /// Authenticate the credentials.
    ///
    /// Never fails: every failure is reported as [`AuthStatus::Failure`] with
    /// the translated message.
    #[tracing::instrument(
        level = "info",
        skip(self, state, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn authenticate(
        &self,
        state: &ServiceState,
        credentials: &Credentials,
        options: &AuthOptions,
    ) -> AuthResult {
        match self.try_authenticate(state, credentials, options).await {
            Ok(user) => AuthResult::success(user),
            Err(err) => {
                match &err {
                    AuthenticationError::RemoteUnknown { .. }
                    | AuthenticationError::LocalStore { .. } => {
                        warn!("authentication could not be completed: {}", err);
                    }
                    _ => {
                        info!("authentication failed: {}", err);
                    }
                }
                AuthResult::failure(err.message(state.language.as_ref()))
            }
        }
    }

    /// Authenticate the credentials and resolve the account the login is
    /// granted for.
    pub async fn try_authenticate(
        &self,
        state: &ServiceState,
        credentials: &Credentials,
        options: &AuthOptions,
    ) -> Result<AuthenticatedUser, AuthenticationError> {
        if credentials.username.is_empty() || credentials.password.expose_secret().is_empty() {
            return Err(AuthenticationError::InputInvalid);
        }
        if state
            .config
            .authentication
            .is_blacklisted(&credentials.username)
        {
            return Err(AuthenticationError::Blacklisted(
                credentials.username.clone(),
            ));
        }

        state
            .provider
            .get_idm_provider()
            .get_token(
                &credentials.username,
                &credentials.password,
                &state.config.idm.domain_id,
            )
            .await?;

        let email = credentials.username.clone();
        match state
            .provider
            .get_local_user_provider()
            .find_user_by_email(state, &email)
            .await?
        {
            Some(local) => {
                if local.email != email {
                    return Err(AuthenticationError::LocalConflict(email));
                }
                if local.blocked || local.has_pending_activation() {
                    return Err(AuthenticationError::LocalAccountDisabled(local.username));
                }
                Ok(AuthenticatedUser {
                    username: local.username,
                    email: local.email,
                })
            }
            None if options.client == ClientContext::Administrator => {
                Err(AuthenticationError::LocalAccountRequired(email))
            }
            None => Ok(AuthenticatedUser {
                username: email.clone(),
                email,
            }),
        }
    }
}
