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
//! # Host hooks
//!
//! The host calls the bridge at three points of its user handling: the login
//! and the moments before and after a user is stored. Plugins implementing
//! [`AuthenticationPlugin`] or [`UserPlugin`] are registered in the
//! [`PluginManager`](crate::plugin_manager::PluginManager) and invoked in the
//! registration order:
//!
//! - [`authenticate`] returns the first successful result, or the result of
//!   the last plugin when none succeeds,
//! - [`before_user_save`] denies the save as soon as one plugin denies it,
//! - [`after_user_save`] runs every plugin and reports whether all of them
//!   succeeded.

use async_trait::async_trait;
use tracing::debug;

use crate::auth::{AuthBridge, AuthOptions, AuthResult, Credentials};
use crate::language::MessageKey;
use crate::service::ServiceState;
use crate::user_sync::{HostUser, UserSync};

/// Plugin taking part in the login.
#[async_trait]
pub trait AuthenticationPlugin: Send + Sync {
    /// Authenticate the credentials.
    async fn on_user_authenticate(
        &self,
        state: &ServiceState,
        credentials: &Credentials,
        options: &AuthOptions,
    ) -> AuthResult;
}

/// Plugin observing user saves.
#[async_trait]
pub trait UserPlugin: Send + Sync {
    /// Decide whether the user may be stored.
    async fn on_user_before_save(
        &self,
        state: &ServiceState,
        old: Option<&HostUser>,
        is_new: bool,
        new: &HostUser,
    ) -> bool;

    /// React on the stored (or failed to store) user.
    async fn on_user_after_save(
        &self,
        state: &ServiceState,
        user: &HostUser,
        is_new: bool,
        success: bool,
        msg: Option<&str>,
    ) -> bool;
}

#[async_trait]
impl AuthenticationPlugin for AuthBridge {
    async fn on_user_authenticate(
        &self,
        state: &ServiceState,
        credentials: &Credentials,
        options: &AuthOptions,
    ) -> AuthResult {
        self.authenticate(state, credentials, options).await
    }
}

#[async_trait]
impl UserPlugin for UserSync {
    async fn on_user_before_save(
        &self,
        state: &ServiceState,
        old: Option<&HostUser>,
        is_new: bool,
        new: &HostUser,
    ) -> bool {
        UserSync::on_user_before_save(self, state, old, is_new, new).await
    }

    async fn on_user_after_save(
        &self,
        state: &ServiceState,
        user: &HostUser,
        is_new: bool,
        success: bool,
        msg: Option<&str>,
    ) -> bool {
        UserSync::on_user_after_save(self, state, user, is_new, success, msg).await
    }
}

/// Run the login through the registered authentication plugins.
#[tracing::instrument(level = "info", skip(state, credentials))]
pub async fn authenticate(
    state: &ServiceState,
    credentials: &Credentials,
    options: &AuthOptions,
) -> AuthResult {
    let mut last = None;
    for plugin in state.plugin_manager.authentication_plugins() {
        let result = plugin
            .on_user_authenticate(state, credentials, options)
            .await;
        if result.is_success() {
            return result;
        }
        last = Some(result);
    }
    last.unwrap_or_else(|| {
        debug!("no authentication plugin registered");
        AuthResult::failure(state.language.sprintf(
            MessageKey::AuthFailed,
            &state.language.text(MessageKey::UnknownAccessDenied),
        ))
    })
}

/// Ask the registered user plugins whether the user may be stored.
#[tracing::instrument(level = "info", skip(state, old, new))]
pub async fn before_user_save(
    state: &ServiceState,
    old: Option<&HostUser>,
    is_new: bool,
    new: &HostUser,
) -> bool {
    for plugin in state.plugin_manager.user_plugins() {
        if !plugin.on_user_before_save(state, old, is_new, new).await {
            return false;
        }
    }
    true
}

/// Notify every registered user plugin about the save.
#[tracing::instrument(level = "info", skip(state, user, msg))]
pub async fn after_user_save(
    state: &ServiceState,
    user: &HostUser,
    is_new: bool,
    success: bool,
    msg: Option<&str>,
) -> bool {
    let mut all = true;
    for plugin in state.plugin_manager.user_plugins() {
        all &= plugin
            .on_user_after_save(state, user, is_new, success, msg)
            .await;
    }
    all
}
