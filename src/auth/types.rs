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
//! Authentication types.
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Authentication type reported in every [`AuthResult`].
pub const AUTH_TYPE: &str = "Fiware";

/// Login credentials.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Submitted login name. The IDM knows users by their email, so this is
    /// expected to be the email address.
    pub username: String,
    /// Submitted password.
    pub password: SecretString,
}

impl Credentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Part of the host application performing the login.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientContext {
    /// Public site.
    #[default]
    Site,
    /// Back-office.
    Administrator,
}

/// Options of the authentication attempt.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthOptions {
    /// Login context.
    pub client: ClientContext,
}

impl AuthOptions {
    pub fn administrator() -> Self {
        Self {
            client: ClientContext::Administrator,
        }
    }
}

/// Outcome status.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthStatus {
    Success,
    Failure,
}

/// Account the login is granted for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthenticatedUser {
    /// Local username for existing accounts, the submitted name otherwise.
    pub username: String,
    /// Email of the account.
    pub email: String,
}

/// Result of a single authentication attempt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuthResult {
    status: AuthStatus,
    #[serde(rename = "type")]
    auth_type: &'static str,
    username: String,
    email: String,
    fullname: String,
    error_message: String,
}

impl AuthResult {
    pub(crate) fn success(user: AuthenticatedUser) -> Self {
        Self {
            status: AuthStatus::Success,
            auth_type: AUTH_TYPE,
            fullname: user.username.clone(),
            username: user.username,
            email: user.email,
            error_message: String::new(),
        }
    }

    pub(crate) fn failure<M: Into<String>>(error_message: M) -> Self {
        Self {
            status: AuthStatus::Failure,
            auth_type: AUTH_TYPE,
            username: String::new(),
            email: String::new(),
            fullname: String::new(),
            error_message: error_message.into(),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == AuthStatus::Success
    }

    pub fn auth_type(&self) -> &str {
        self.auth_type
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_result_serialization() {
        let res = AuthResult::success(AuthenticatedUser {
            username: "jane".into(),
            email: "jane@example.com".into(),
        });
        assert_eq!(
            json!({
                "status": "SUCCESS",
                "type": "Fiware",
                "username": "jane",
                "email": "jane@example.com",
                "fullname": "jane",
                "error_message": ""
            }),
            serde_json::to_value(&res).unwrap()
        );
        assert_eq!(
            "FAILURE",
            serde_json::to_value(AuthResult::failure("nope")).unwrap()["status"]
        );
    }
}
