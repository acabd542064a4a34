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
//! # IDM user synchronization
//!
//! Mirrors local user saves to the IDM with the service account configured in
//! the `[user_sync]` section. The email of the host user is the IDM user
//! name.
//!
//! - Before a new user is stored, the save is vetoed when the IDM already
//!   knows a user with the email, or when the IDM can not be asked.
//! - After a user is stored with a new password, a new user is created in the
//!   IDM, or the password of the single IDM user with the email is replaced.

use tracing::{debug, info, warn};

pub mod error;
pub mod types;

use crate::idm::{IdmApi, IdmToken};
use crate::service::ServiceState;

pub use error::UserSyncError;
pub use types::*;

/// FIWARE IDM user synchronization plugin.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserSync {}

impl UserSync {
    pub fn new() -> Self {
        Self {}
    }

    /// Decide whether the user may be stored.
    ///
    /// Existing users are always allowed. A new user is denied when the IDM
    /// already has a user with the email or when the check fails.
    #[tracing::instrument(level = "info", skip(self, state, _old, new), fields(email = %new.email))]
    pub async fn on_user_before_save(
        &self,
        state: &ServiceState,
        _old: Option<&HostUser>,
        is_new: bool,
        new: &HostUser,
    ) -> bool {
        if !is_new {
            return true;
        }
        match self.check_new_user(state, new).await {
            Ok(()) => true,
            Err(err @ UserSyncError::DuplicateRemoteUser(_)) => {
                info!("denying user save: {}", err);
                false
            }
            Err(err) => {
                warn!("denying user save, the identity service check failed: {}", err);
                false
            }
        }
    }

    /// Mirror the stored user to the IDM.
    ///
    /// Returns whether the IDM user is enabled after the change.
    #[tracing::instrument(level = "info", skip(self, state, user, _msg), fields(email = %user.email))]
    pub async fn on_user_after_save(
        &self,
        state: &ServiceState,
        user: &HostUser,
        is_new: bool,
        success: bool,
        _msg: Option<&str>,
    ) -> bool {
        if !success {
            debug!("user was not stored, skipping synchronization");
            return false;
        }
        match self.sync_user(state, user, is_new).await {
            Ok(()) => true,
            Err(err) => {
                warn!("user synchronization failed: {}", err);
                false
            }
        }
    }

    /// Ensure no IDM user carries the email of the new user.
    pub async fn check_new_user(
        &self,
        state: &ServiceState,
        new: &HostUser,
    ) -> Result<(), UserSyncError> {
        let token = self.service_token(state).await?;
        let users = state
            .provider
            .get_idm_provider()
            .find_users_by_name(&token, &new.email)
            .await?;
        if !users.is_empty() {
            return Err(UserSyncError::DuplicateRemoteUser(new.email.clone()));
        }
        Ok(())
    }

    /// Create the IDM user or update the password of the existing one.
    pub async fn sync_user(
        &self,
        state: &ServiceState,
        user: &HostUser,
        is_new: bool,
    ) -> Result<(), UserSyncError> {
        if user.id <= 0 {
            return Err(UserSyncError::InvalidUserId(user.id));
        }
        let password = user
            .new_password()
            .ok_or(UserSyncError::PasswordUnavailable)?;

        let token = self.service_token(state).await?;
        let idm = state.provider.get_idm_provider();
        let enabled = if is_new {
            idm.create_user(&token, &user.email, password).await?
        } else {
            let users = idm.find_users_by_name(&token, &user.email).await?;
            match users.as_slice() {
                [remote] => {
                    idm.update_user_password(&token, &remote.id, password)
                        .await?
                }
                other => {
                    return Err(UserSyncError::AmbiguousRemoteUser {
                        name: user.email.clone(),
                        count: other.len(),
                    });
                }
            }
        };

        if !enabled {
            return Err(UserSyncError::RemoteUserDisabled(user.email.clone()));
        }
        Ok(())
    }

    /// Token of the service account.
    async fn service_token(&self, state: &ServiceState) -> Result<IdmToken, UserSyncError> {
        state
            .provider
            .get_idm_provider()
            .get_token(
                &state.config.user_sync.admin,
                &state.config.user_sync.password,
                &state.config.idm.domain_id,
            )
            .await
            .map_err(|source| UserSyncError::ServiceAuthentication { source })
    }
}
