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
//! # User calls.

use reqwest::{RequestBuilder, Response, header::HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use fiware_idm_api_types::user::*;

use crate::idm::{
    IdmProvider, IdmProviderError,
    types::{IdmToken, RemoteUser},
};

/// Request header carrying the caller token.
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

impl IdmProvider {
    /// Create user and return the `enabled` flag of the new user.
    pub(super) async fn post_user(
        &self,
        token: &IdmToken,
        name: &str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError> {
        let req = UserCreateRequest {
            user: UserCreate {
                name: name.into(),
                password: password.expose_secret().into(),
            },
        };
        req.validate()?;

        let rsp: UserResponse = self
            .execute(self.client.post(self.url("users")).json(&req), token)
            .await?;
        Ok(rsp.user.enabled)
    }

    /// List users with the name.
    pub(super) async fn list_users(
        &self,
        token: &IdmToken,
        name: &str,
    ) -> Result<Vec<RemoteUser>, IdmProviderError> {
        let params = UserListParameters {
            name: Some(name.into()),
        };
        params.validate()?;

        let rsp: UserList = self
            .execute(self.client.get(self.url("users")).query(&params), token)
            .await?;
        Ok(rsp.users.into_iter().map(Into::into).collect())
    }

    /// Change the user password and return the `enabled` flag of the user.
    pub(super) async fn patch_user_password(
        &self,
        token: &IdmToken,
        user_id: &str,
        password: &SecretString,
    ) -> Result<bool, IdmProviderError> {
        let req = UserPasswordUpdateRequest {
            user: UserPasswordUpdate {
                password: password.expose_secret().into(),
            },
        };
        req.validate()?;

        let rsp: UserResponse = self
            .execute(
                self.client
                    .patch(self.url(format!("users/{user_id}")))
                    .json(&req),
                token,
            )
            .await?;
        Ok(rsp.user.enabled)
    }

    /// Send the authorized request and decode the successful response.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &IdmToken,
    ) -> Result<T, IdmProviderError> {
        let mut token_header =
            HeaderValue::from_str(token.expose()).map_err(|_| IdmProviderError::InvalidToken)?;
        token_header.set_sensitive(true);

        let response = request
            .header(AUTH_TOKEN_HEADER, token_header)
            .send()
            .await
            .map_err(|source| IdmProviderError::Transport { source })?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IdmProviderError> {
    let status = response.status();
    if !status.is_success() {
        debug!("identity service returned {}", status);
        return Err(IdmProviderError::UnexpectedStatus(status));
    }
    let body = response
        .bytes()
        .await
        .map_err(|source| IdmProviderError::Transport { source })?;
    serde_json::from_slice(&body).map_err(|source| IdmProviderError::MalformedResponse { source })
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use httpmock::MockServer;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::config::Config;

    fn get_provider(mock_srv: &MockServer) -> IdmProvider {
        let mut cfg = Config::default();
        cfg.idm.endpoint = mock_srv.url("/v3/");
        IdmProvider::new(&cfg).unwrap()
    }

    #[tokio::test]
    async fn test_post_user() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        let mock = mock_srv
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v3/users")
                    .header("x-auth-token", "T")
                    .json_body(json!({"user": {"name": "jane@example.com", "password": "pass"}}));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"user": {
                        "id": "uid",
                        "name": "jane@example.com",
                        "enabled": true,
                        "domain_id": "default"
                    }}));
            })
            .await;

        assert!(
            get_provider(&mock_srv)
                .post_user(
                    &IdmToken::new("T"),
                    "jane@example.com",
                    &SecretString::from("pass")
                )
                .await?
        );
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_post_user_disabled() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        mock_srv
            .mock_async(|when, then| {
                when.method("POST").path("/v3/users");
                then.status(201)
                    .json_body(json!({"user": {"id": "uid", "enabled": false}}));
            })
            .await;

        assert!(
            !get_provider(&mock_srv)
                .post_user(
                    &IdmToken::new("T"),
                    "jane@example.com",
                    &SecretString::from("pass")
                )
                .await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_post_user_conflict() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        mock_srv
            .mock_async(|when, then| {
                when.method("POST").path("/v3/users");
                then.status(409)
                    .json_body(json!({"error": {"code": 409, "title": "Conflict"}}));
            })
            .await;

        let res = get_provider(&mock_srv)
            .post_user(
                &IdmToken::new("T"),
                "jane@example.com",
                &SecretString::from("pass"),
            )
            .await;
        match res {
            Err(IdmProviderError::UnexpectedStatus(status)) => {
                assert_eq!(StatusCode::CONFLICT, status)
            }
            other => panic!("unexpected result {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_list_users() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        let mock = mock_srv
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v3/users")
                    .query_param("name", "jane+work@example.com")
                    .header("x-auth-token", "T");
                then.status(200).json_body(json!({
                    "users": [{
                        "id": "uid",
                        "name": "jane+work@example.com",
                        "enabled": true,
                        "domain_id": "default",
                        "links": {"self": "http://idm/v3/users/uid"}
                    }],
                    "links": {"self": "http://idm/v3/users", "next": null}
                }));
            })
            .await;

        let users = get_provider(&mock_srv)
            .list_users(&IdmToken::new("T"), "jane+work@example.com")
            .await?;
        assert_eq!(
            vec![RemoteUser {
                id: "uid".into(),
                name: "jane+work@example.com".into(),
                enabled: true,
                domain_id: Some("default".into()),
            }],
            users
        );
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_list_users_malformed() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        mock_srv
            .mock_async(|when, then| {
                when.method("GET").path("/v3/users");
                then.status(200).body("<html>proxy error</html>");
            })
            .await;

        let res = get_provider(&mock_srv)
            .list_users(&IdmToken::new("T"), "jane@example.com")
            .await;
        assert!(matches!(
            res,
            Err(IdmProviderError::MalformedResponse { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_patch_user_password() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        let mock = mock_srv
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/v3/users/uid")
                    .header("x-auth-token", "T")
                    .json_body(json!({"user": {"password": "new"}}));
                then.status(200)
                    .json_body(json!({"user": {"id": "uid", "enabled": true}}));
            })
            .await;

        assert!(
            get_provider(&mock_srv)
                .patch_user_password(&IdmToken::new("T"), "uid", &SecretString::from("new"))
                .await?
        );
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_patch_user_password_not_found() -> Result<()> {
        let mock_srv = MockServer::start_async().await;
        mock_srv
            .mock_async(|when, then| {
                when.method("PATCH").path("/v3/users/uid");
                then.status(404);
            })
            .await;

        let res = get_provider(&mock_srv)
            .patch_user_password(&IdmToken::new("T"), "uid", &SecretString::from("new"))
            .await;
        assert_eq!(
            Some(StatusCode::NOT_FOUND),
            res.err().and_then(|e| e.status())
        );
        Ok(())
    }
}
