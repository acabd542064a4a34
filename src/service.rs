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
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::language::{EnglishLanguage, Language};
use crate::plugin_manager::PluginManager;
use crate::provider::Provider;

// Placing ServiceState behind Arc is necessary to address DatabaseConnection
// not implementing Clone.
pub struct Service {
    /// Config file
    pub config: Config,
    /// Service/resource Provider
    pub provider: Provider,
    /// Database connection of the host
    pub db: DatabaseConnection,
    /// Message catalog
    pub language: Arc<dyn Language>,
    /// Registered plugins
    pub plugin_manager: PluginManager,
}

pub type ServiceState = Arc<Service>;

impl Service {
    pub fn new(
        cfg: Config,
        db: DatabaseConnection,
        provider: Provider,
        plugin_manager: PluginManager,
    ) -> Self {
        Self {
            config: cfg,
            provider,
            db,
            language: Arc::new(EnglishLanguage),
            plugin_manager,
        }
    }

    /// Replace the message catalog.
    pub fn with_language<L: Language + 'static>(mut self, language: L) -> Self {
        self.language = Arc::new(language);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{CatalogLanguage, MessageKey};

    #[test]
    fn test_with_language() {
        let state = Service::new(
            Config::default(),
            DatabaseConnection::Disconnected,
            Provider::mocked_builder().build().unwrap(),
            PluginManager::default(),
        )
        .with_language(CatalogLanguage::new([(
            "JGLOBAL_AUTH_ACCESS_DENIED",
            "Zugriff verweigert",
        )]));
        assert_eq!(
            "Zugriff verweigert",
            state.language.text(MessageKey::AccessDenied)
        );
    }
}
