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
use serde::Serialize;

use crate::local_user::error::LocalUserProviderError;
use crate::service::ServiceState;

/// Account of the host user system.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LocalUser {
    /// Local user ID.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// The account is blocked by an administrator.
    pub blocked: bool,
    /// Activation code of a not yet activated account.
    pub activation: String,
}

impl LocalUser {
    /// Whether the account still waits for the activation.
    ///
    /// The host writes either an empty string or `"0"` once the account is
    /// activated.
    pub fn has_pending_activation(&self) -> bool {
        !self.activation.is_empty() && self.activation != "0"
    }
}

/// Lookup of accounts of the host user system.
#[async_trait]
pub trait LocalUserApi: Send + Sync {
    /// Find the account with the exact email.
    async fn find_user_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<LocalUser>, LocalUserProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_activation() {
        let mut user = LocalUser::default();
        assert!(!user.has_pending_activation());
        user.activation = "0".into();
        assert!(!user.has_pending_activation());
        user.activation = "a1b2c3".into();
        assert!(user.has_pending_activation());
    }
}
