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

use fiware_idm_bridge::auth::{AuthOptions, AuthStatus, Credentials};
use fiware_idm_bridge::hooks;

use crate::common::*;

#[tokio::test]
async fn test_login_without_local_account() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let token = token_mock(&mock_srv, "jane@example.com", "pass", 201).await;
    let state = get_state(&mock_srv, get_db(vec![Vec::new()]))?;

    let res = hooks::authenticate(
        &state,
        &Credentials::new("jane@example.com", "pass"),
        &AuthOptions::default(),
    )
    .await;
    assert_eq!(AuthStatus::Success, res.status());
    assert_eq!("Fiware", res.auth_type());
    assert_eq!("jane@example.com", res.username());
    assert_eq!("jane@example.com", res.email());
    token.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_login_with_local_account() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "jane@example.com", "pass", 201).await;
    let state = get_state(
        &mock_srv,
        get_db(vec![vec![user_row("jane", "jane@example.com", 0, "0")]]),
    )?;

    let res = hooks::authenticate(
        &state,
        &Credentials::new("jane@example.com", "pass"),
        &AuthOptions::administrator(),
    )
    .await;
    assert!(res.is_success());
    assert_eq!("jane", res.username());
    assert_eq!("jane", res.fullname());
    Ok(())
}

#[tokio::test]
async fn test_login_blocked_local_account() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    token_mock(&mock_srv, "jane@example.com", "pass", 201).await;
    let state = get_state(
        &mock_srv,
        get_db(vec![vec![user_row("jane", "jane@example.com", 1, "")]]),
    )?;

    let res = hooks::authenticate(
        &state,
        &Credentials::new("jane@example.com", "pass"),
        &AuthOptions::default(),
    )
    .await;
    assert_eq!(AuthStatus::Failure, res.status());
    assert_eq!(
        "Username and password do not match or you do not have an account yet.",
        res.error_message()
    );
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let token = token_mock(&mock_srv, "jane@example.com", "wrong", 401).await;
    // No query result is prepared: a lookup would fail the login differently.
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    let res = hooks::authenticate(
        &state,
        &Credentials::new("jane@example.com", "wrong"),
        &AuthOptions::default(),
    )
    .await;
    assert_eq!(
        "Failed to authenticate: Username and password do not match or you do not have an account yet.",
        res.error_message()
    );
    token.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_login_blacklisted() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let token = token_mock(&mock_srv, "admin", "pass", 201).await;
    let state = get_state(&mock_srv, get_db(Vec::new()))?;

    let res = hooks::authenticate(
        &state,
        &Credentials::new("admin", "pass"),
        &AuthOptions::default(),
    )
    .await;
    assert_eq!(
        "Failed to authenticate: User is blacklisted.",
        res.error_message()
    );
    token.assert_hits_async(0).await;
    Ok(())
}
