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

use eyre::Result;
use httpmock::MockServer;
use secrecy::SecretString;
use serde_json::json;

use fiware_idm_bridge::hooks;
use fiware_idm_bridge::user_sync::HostUser;

use crate::common::*;

fn jane(password: Option<&str>) -> HostUser {
    HostUser {
        id: 42,
        username: "jane".into(),
        email: "jane@example.com".into(),
        password_clear: password.map(SecretString::from),
    }
}

#[tokio::test]
async fn test_before_save_duplicate() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "idm", "idm", 201).await;
    let list = mock_srv
        .mock_async(|when, then| {
            when.method("GET")
                .path("/v3/users")
                .query_param("name", "jane@example.com")
                .header("x-auth-token", "token-idm");
            then.status(200)
                .json_body(json!({"users": [{"id": "uid", "name": "jane@example.com", "enabled": true}]}));
        })
        .await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    assert!(!hooks::before_user_save(&state, None, true, &jane(Some("pass"))).await);
    list.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_before_save_service_account_rejected() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "idm", "idm", 401).await;
    let list = mock_srv
        .mock_async(|when, then| {
            when.method("GET").path("/v3/users");
            then.status(200).json_body(json!({"users": []}));
        })
        .await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    assert!(!hooks::before_user_save(&state, None, true, &jane(Some("pass"))).await);
    list.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_after_save_create() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "idm", "idm", 201).await;
    let create = mock_srv
        .mock_async(|when, then| {
            when.method("POST")
                .path("/v3/users")
                .header("x-auth-token", "token-idm")
                .json_body(json!({"user": {"name": "jane@example.com", "password": "pass"}}));
            then.status(201)
                .json_body(json!({"user": {"id": "uid", "name": "jane@example.com", "enabled": true}}));
        })
        .await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    assert!(hooks::after_user_save(&state, &jane(Some("pass")), true, true, None).await);
    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_after_save_update_password() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "idm", "idm", 201).await;
    mock_srv
        .mock_async(|when, then| {
            when.method("GET")
                .path("/v3/users")
                .query_param("name", "jane@example.com");
            then.status(200)
                .json_body(json!({"users": [{"id": "uid", "name": "jane@example.com", "enabled": true}]}));
        })
        .await;
    let update = mock_srv
        .mock_async(|when, then| {
            when.method("PATCH")
                .path("/v3/users/uid")
                .header("x-auth-token", "token-idm")
                .json_body(json!({"user": {"password": "new"}}));
            then.status(200)
                .json_body(json!({"user": {"id": "uid", "enabled": true}}));
        })
        .await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    assert!(hooks::after_user_save(&state, &jane(Some("new")), false, true, None).await);
    update.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_after_save_without_password() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let token = token_mock(&mock_srv, "idm", "idm", 201).await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    assert!(!hooks::after_user_save(&state, &jane(None), false, true, None).await);
    token.assert_hits_async(0).await;
    Ok(())
}
