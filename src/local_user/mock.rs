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
//! Internal mock structures for the [LocalUserProvider].

use async_trait::async_trait;
use mockall::mock;

use super::error::LocalUserProviderError;
use super::types::{LocalUser, LocalUserApi};
use crate::config::Config;
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;

mock! {
    pub LocalUserProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, LocalUserProviderError>;
    }

    #[async_trait]
    impl LocalUserApi for LocalUserProvider {
        async fn find_user_by_email<'a>(
            &self,
            state: &ServiceState,
            email: &'a str,
        ) -> Result<Option<LocalUser>, LocalUserProviderError>;
    }

    impl Clone for LocalUserProvider {
        fn clone(&self) -> Self;
    }
}
