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
//! # FIWARE IDM bridge
//!
//! Connects the user system of a host application (a CMS with its own user
//! table) to a FIWARE Identity Management service speaking the Keystone v3
//! identity API.
//!
//! Two plugins are provided:
//!
//! - [`auth::AuthBridge`] authenticates logins against the IDM and reconciles
//!   the result with the local account (blocked, not activated, back-office
//!   access).
//! - [`user_sync::UserSync`] keeps the IDM users in line with the local ones.
//!   It vetoes the creation of a local user whose email is already known to
//!   the IDM and creates the IDM user, or replaces its password, after the
//!   local user is stored.
//!
//! Both are stateless. Every call acquires a fresh IDM token which is dropped
//! at the end of the call. The host drives them through the [`hooks`] module
//! with a [`service::ServiceState`] assembled from the configuration:
//!
//! ```no_run
//! # async fn run() -> eyre::Result<()> {
//! use secrecy::ExposeSecret;
//! use std::sync::Arc;
//!
//! use fiware_idm_bridge::auth::{AuthOptions, Credentials};
//! use fiware_idm_bridge::config::Config;
//! use fiware_idm_bridge::hooks;
//! use fiware_idm_bridge::plugin_manager::PluginManager;
//! use fiware_idm_bridge::provider::Provider;
//! use fiware_idm_bridge::service::Service;
//!
//! let cfg = Config::new("/etc/fiware/bridge.conf".into())?;
//! let db = sea_orm::Database::connect(cfg.database.get_connection().expose_secret()).await?;
//! let plugin_manager = PluginManager::with_fiware_plugins();
//! let provider = Provider::new(&cfg, &plugin_manager)?;
//! let state = Arc::new(Service::new(cfg, db, provider, plugin_manager));
//!
//! let result = hooks::authenticate(
//!     &state,
//!     &Credentials::new("jane@example.com", "secret"),
//!     &AuthOptions::default(),
//! )
//! .await;
//! println!("{}", result.error_message());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod hooks;
pub mod idm;
pub mod language;
pub mod local_user;
pub mod plugin_manager;
pub mod provider;
pub mod service;
pub mod user_sync;
