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
//! # Provider manager
//!
//! Provider manager provides access to the individual providers. Hooks get
//! the IDM client and the local user store through it, which also allows an
//! easy injection of mocked providers.
use derive_builder::Builder;
use mockall_double::double;

use crate::config::Config;
use crate::error::BridgeError;
use crate::idm::IdmApi;
#[double]
use crate::idm::IdmProvider;
use crate::local_user::LocalUserApi;
#[double]
use crate::local_user::LocalUserProvider;
use crate::plugin_manager::PluginManager;

/// Global provider manager.
#[derive(Builder, Clone)]
// It is necessary to use the owned pattern since otherwise builder invokes clone which immediately
// confuses mockall used in tests
#[builder(pattern = "owned")]
pub struct Provider {
    /// IDM provider.
    idm: IdmProvider,
    /// Local user provider.
    local_user: LocalUserProvider,
}

impl Provider {
    pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, BridgeError> {
        let idm_provider = IdmProvider::new(cfg)?;
        let local_user_provider = LocalUserProvider::new(cfg, plugin_manager)?;

        Ok(Self {
            idm: idm_provider,
            local_user: local_user_provider,
        })
    }

    /// Get the IDM provider.
    pub fn get_idm_provider(&self) -> &impl IdmApi {
        &self.idm
    }

    /// Get the local user provider.
    pub fn get_local_user_provider(&self) -> &impl LocalUserApi {
        &self.local_user
    }
}

#[cfg(test)]
impl Provider {
    pub fn mocked_builder() -> ProviderBuilder {
        let idm_mock = crate::idm::MockIdmProvider::default();
        let local_user_mock = crate::local_user::MockLocalUserProvider::default();

        ProviderBuilder::default()
            .idm(idm_mock)
            .local_user(local_user_mock)
    }
}
