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
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use fiware_idm_api_types::user as api_types;

use crate::idm::error::IdmProviderError;

/// Token issued by the IDM.
///
/// The value only lives for the chain of requests it was obtained for and is
/// never logged.
#[derive(Clone, Debug)]
pub struct IdmToken(SecretString);

impl IdmToken {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Raw token value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// User entity of the IDM.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoteUser {
    /// User ID.
    pub id: String,
    /// User name (the email of the host user).
    pub name: String,
    /// Whether the user is enabled.
    pub enabled: bool,
    /// Domain of the user.
    pub domain_id: Option<String>,
}

impl From<api_types::User> for RemoteUser {
    fn from(value: api_types::User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            enabled: value.enabled,
            domain_id: value.domain_id,
        }
    }
}

/// Calls to the remote identity service.
#[async_trait]
pub trait IdmApi: Send + Sync {
    /// Exchange user credentials for a token.
    async fn get_token<'a>(
        &self,
        username: &'a str,
        password: &SecretString,
        domain_id: &'a str,
    ) -> Result<IdmToken, IdmProviderError>;

    /// Create the user and return whether it is enabled.
    async fn create_user<'a>(
        &self,
        token: &IdmToken,
        name: &'a str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError>;

    /// List users with the exact name.
    async fn find_users_by_name<'a>(
        &self,
        token: &IdmToken,
        name: &'a str,
    ) -> Result<Vec<RemoteUser>, IdmProviderError>;

    /// Set a new password of the user and return whether it is enabled.
    async fn update_user_password<'a>(
        &self,
        token: &IdmToken,
        user_id: &'a str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError>;
}
