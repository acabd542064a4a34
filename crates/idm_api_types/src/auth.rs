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
//! # Token issue (`POST /v3/auth/tokens`) request types.
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// An authentication request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct AuthRequest {
    /// An identity object.
    #[validate(nested)]
    pub auth: AuthRequestInner,
}

/// An authentication request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct AuthRequestInner {
    /// An identity object.
    #[validate(nested)]
    pub identity: Identity,
}

/// An identity object.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Identity {
    /// The authentication method. For password authentication, specify
    /// password.
    pub methods: Vec<String>,

    /// The password object, contains the authentication information.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub password: Option<PasswordAuth>,
}

/// The password object, contains the authentication information.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct PasswordAuth {
    /// A user object.
    #[validate(nested)]
    pub user: UserPassword,
}

/// User password information.
///
/// The IDM resolves users by name, so the name must be accompanied by the
/// owning domain.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserPassword {
    /// User name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// User domain.
    #[validate(nested)]
    pub domain: Domain,

    /// User password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Domain information.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Domain {
    /// Domain ID.
    #[validate(length(min = 1, max = 64))]
    pub id: String,
}

impl AuthRequest {
    /// Build the password authentication request for the user in the domain.
    pub fn password<N, P, D>(name: N, password: P, domain_id: D) -> Result<Self, BuilderError>
    where
        N: Into<String>,
        P: Into<String>,
        D: Into<String>,
    {
        Ok(Self {
            auth: AuthRequestInner {
                identity: IdentityBuilder::default()
                    .methods(vec!["password".to_string()])
                    .password(
                        PasswordAuthBuilder::default()
                            .user(
                                UserPasswordBuilder::default()
                                    .name(name)
                                    .domain(DomainBuilder::default().id(domain_id).build()?)
                                    .password(password)
                                    .build()?,
                            )
                            .build()?,
                    )
                    .build()?,
            },
        })
    }
}
