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
//! # User API types (`/v3/users`).
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// User object as returned by the IDM.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct User {
    /// User domain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// If the user is enabled, this value is true. If the user is disabled,
    /// this value is false.
    #[serde(default)]
    pub enabled: bool,
    /// Additional user properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
    /// User ID.
    #[validate(length(max = 64))]
    pub id: String,
    /// User name.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,
}

/// Complete response with the user data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserResponse {
    /// User object.
    #[validate(nested)]
    pub user: UserStatus,
}

/// The part of the user object returned after create or update that the
/// bridge relies on.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserStatus {
    /// If the user is enabled, this value is true. If the user is disabled,
    /// this value is false.
    pub enabled: bool,
    /// Additional user properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// List of users.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserList {
    /// Collection of user objects.
    #[validate(nested)]
    pub users: Vec<User>,
}

/// Create user data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserCreate {
    /// The user name. Must be unique within the owning domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// The password for the user.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Complete create user request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserCreateRequest {
    /// User object.
    #[validate(nested)]
    pub user: UserCreate,
}

/// Password update data.
///
/// The user name is intentionally not part of the update: a remote user is
/// never renamed by the bridge.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserPasswordUpdate {
    /// The new password for the user.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Complete password update request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserPasswordUpdateRequest {
    /// User object.
    #[validate(nested)]
    pub user: UserPasswordUpdate,
}

/// User list parameters.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserListParameters {
    /// Filter users by Name.
    #[validate(length(max = 255))]
    pub name: Option<String>,
}
