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
//! # Local user provider
//!
//! Read only access to the accounts of the host user system. The host remains
//! the source of truth for the `block` and `activation` state of an account,
//! while the IDM is only asked whether the password is right.
//!
//! Default backend is the [crate::local_user::backend::sql] reading the
//! `{table_prefix}users` table of the host database. Other backends can be
//! registered in the [PluginManager] and selected with the
//! `[local_user] driver` option.

use std::sync::Arc;

use async_trait::async_trait;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::Config;
use crate::local_user::backend::{LocalUserBackend, sql::SqlBackend};
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;

pub use error::LocalUserProviderError;
#[cfg(test)]
pub use mock::MockLocalUserProvider;
pub use types::*;

/// Local user provider.
#[derive(Clone)]
pub struct LocalUserProvider {
    /// Backend driver.
    backend_driver: Arc<dyn LocalUserBackend>,
}

impl LocalUserProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, LocalUserProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_local_user_backend(config.local_user.driver.clone())
        {
            driver.clone()
        } else {
            match config.local_user.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(LocalUserProviderError::UnsupportedDriver(
                        config.local_user.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl LocalUserApi for LocalUserProvider {
    /// Find the account with the exact email.
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn find_user_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<LocalUser>, LocalUserProviderError> {
        self.backend_driver.find_by_email(state, email).await
    }
}
