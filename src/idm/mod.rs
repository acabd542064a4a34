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
//! # FIWARE IDM client
//!
//! The remote identity service speaks the Keystone v3 identity API. The
//! bridge uses four calls of it:
//!
//! - `POST auth/tokens` with the password method to validate credentials and
//!   to obtain a token (`X-Subject-Token` response header),
//! - `POST users` to create a user,
//! - `GET users?name=` to find users by name,
//! - `PATCH users/{id}` to change the password of a user.
//!
//! All paths are appended verbatim to the configured endpoint. TLS peer
//! verification is always on and redirects are followed.

use async_trait::async_trait;
use reqwest::{Certificate, Client, redirect::Policy};
use secrecy::SecretString;
use std::fs;

pub mod error;
#[cfg(test)]
mod mock;
mod token;
pub mod types;
mod user;

use crate::config::Config;
pub use error::IdmProviderError;
#[cfg(test)]
pub use mock::MockIdmProvider;
pub use types::*;

/// Maximal number of redirects followed for a single request.
const MAX_REDIRECTS: usize = 10;

/// IDM provider.
#[derive(Clone, Debug)]
pub struct IdmProvider {
    /// Base URL of the identity API.
    endpoint: String,

    /// Reqwest client.
    client: Client,
}

impl IdmProvider {
    pub fn new(config: &Config) -> Result<Self, IdmProviderError> {
        let mut client_builder = Client::builder().redirect(Policy::limited(MAX_REDIRECTS));

        if let Some(path) = &config.idm.ca_file {
            let pem = fs::read(path).map_err(|source| IdmProviderError::CaCertificate {
                path: path.clone(),
                source,
            })?;
            client_builder = client_builder.add_root_certificate(
                Certificate::from_pem(&pem)
                    .map_err(|source| IdmProviderError::HttpClient { source })?,
            );
        }

        Ok(Self {
            endpoint: config.idm.endpoint.clone(),
            client: client_builder
                .build()
                .map_err(|source| IdmProviderError::HttpClient { source })?,
        })
    }

    /// Full URL of the API path.
    fn url<P: AsRef<str>>(&self, path: P) -> String {
        format!("{}{}", self.endpoint, path.as_ref())
    }
}

#[async_trait]
impl IdmApi for IdmProvider {
    /// Exchange user credentials for a token.
    #[tracing::instrument(level = "info", skip(self, password))]
    async fn get_token<'a>(
        &self,
        username: &'a str,
        password: &SecretString,
        domain_id: &'a str,
    ) -> Result<IdmToken, IdmProviderError> {
        self.issue_token(username, password, domain_id).await
    }

    /// Create user.
    #[tracing::instrument(level = "info", skip(self, token, password))]
    async fn create_user<'a>(
        &self,
        token: &IdmToken,
        name: &'a str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError> {
        self.post_user(token, name, password).await
    }

    /// Find users by name.
    #[tracing::instrument(level = "info", skip(self, token))]
    async fn find_users_by_name<'a>(
        &self,
        token: &IdmToken,
        name: &'a str,
    ) -> Result<Vec<RemoteUser>, IdmProviderError> {
        self.list_users(token, name).await
    }

    /// Update the user password.
    #[tracing::instrument(level = "info", skip(self, token, password))]
    async fn update_user_password<'a>(
        &self,
        token: &IdmToken,
        user_id: &'a str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError> {
        self.patch_user_password(token, user_id, password).await
    }
}
