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
//! # Plugin manager
//!
//! The [PluginManager] carries everything the host plugs into the bridge:
//!
//! - local user backends, picked by the local user provider through the
//!   `[local_user] driver` option,
//! - authentication plugins run by [crate::hooks::authenticate],
//! - user plugins run by [crate::hooks::before_user_save] and
//!   [crate::hooks::after_user_save].
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::AuthBridge;
use crate::hooks::{AuthenticationPlugin, UserPlugin};
use crate::local_user::backend::LocalUserBackend;
use crate::user_sync::UserSync;

/// Plugin manager allowing to pass custom plugins implementing required
/// trait during the service start.
#[derive(Clone, Default)]
pub struct PluginManager {
    /// Local user backend plugins.
    local_user_backends: HashMap<String, Arc<dyn LocalUserBackend>>,
    /// Authentication plugins in the invocation order.
    authentication_plugins: Vec<Arc<dyn AuthenticationPlugin>>,
    /// User plugins in the invocation order.
    user_plugins: Vec<Arc<dyn UserPlugin>>,
}

impl PluginManager {
    /// Plugin manager with the FIWARE IDM plugins registered.
    pub fn with_fiware_plugins() -> Self {
        let mut plugin_manager = Self::default();
        plugin_manager.register_authentication_plugin(Arc::new(AuthBridge::new()));
        plugin_manager.register_user_plugin(Arc::new(UserSync::new()));
        plugin_manager
    }

    /// Register local user backend.
    pub fn register_local_user_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn LocalUserBackend>,
    ) {
        self.local_user_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Get registered local user backend.
    pub fn get_local_user_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn LocalUserBackend>> {
        self.local_user_backends.get(name.as_ref())
    }

    /// Register authentication plugin.
    pub fn register_authentication_plugin(&mut self, plugin: Arc<dyn AuthenticationPlugin>) {
        self.authentication_plugins.push(plugin);
    }

    /// Registered authentication plugins.
    pub fn authentication_plugins(&self) -> &[Arc<dyn AuthenticationPlugin>] {
        &self.authentication_plugins
    }

    /// Register user plugin.
    pub fn register_user_plugin(&mut self, plugin: Arc<dyn UserPlugin>) {
        self.user_plugins.push(plugin);
    }

    /// Registered user plugins.
    pub fn user_plugins(&self) -> &[Arc<dyn UserPlugin>] {
        &self.user_plugins
    }
}
