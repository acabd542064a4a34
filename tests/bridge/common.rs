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

use std::collections::BTreeMap;
use std::sync::Arc;

use eyre::Result;
use httpmock::{Mock, MockServer};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
use serde_json::json;

use fiware_idm_bridge::config::Config;
use fiware_idm_bridge::plugin_manager::PluginManager;
use fiware_idm_bridge::provider::Provider;
use fiware_idm_bridge::service::{Service, ServiceState};

/// Service state talking to the mocked IDM and the mocked host database.
pub fn get_state(mock_srv: &MockServer, db: DatabaseConnection) -> Result<ServiceState> {
    let mut cfg = Config::default();
    cfg.idm.endpoint = mock_srv.url("/v3/");
    cfg.authentication.user_blacklist = vec!["admin".into()];
    cfg.database.table_prefix = "jos_".into();

    let plugin_manager = PluginManager::with_fiware_plugins();
    let provider = Provider::new(&cfg, &plugin_manager)?;
    Ok(Arc::new(Service::new(cfg, db, provider, plugin_manager)))
}

/// Host database returning the query results in order.
pub fn get_db(results: Vec<Vec<BTreeMap<&'static str, Value>>>) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results(results)
        .into_connection()
}

/// Row of the host users table.
pub fn user_row(
    username: &str,
    email: &str,
    block: i16,
    activation: &str,
) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(42i32)),
        ("username", Value::from(username)),
        ("email", Value::from(email)),
        ("block", Value::from(block)),
        ("activation", Value::from(activation)),
    ])
}

/// Token issue for the user answered with the status.
pub async fn token_mock<'a>(
    mock_srv: &'a MockServer,
    name: &str,
    password: &str,
    status: u16,
) -> Mock<'a> {
    let body = json!({"auth": {"identity": {
        "methods": ["password"],
        "password": {"user": {
            "name": name,
            "domain": {"id": "default"},
            "password": password
        }}
    }}});
    mock_srv
        .mock_async(|when, then| {
            when.method("POST").path("/v3/auth/tokens").json_body(body);
            if status == 201 {
                then.status(201)
                    .header("x-subject-token", format!("token-{name}"))
                    .json_body(json!({"token": {"methods": ["password"]}}));
            } else {
                then.status(status)
                    .json_body(json!({"error": {"code": status}}));
            }
        })
        .await
}
