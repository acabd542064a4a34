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
use thiserror::Error;

use crate::idm::IdmProviderError;
use crate::language::{Language, MessageKey};
use crate::local_user::LocalUserProviderError;

/// Reasons for a failed login.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// Username or password is empty.
    #[error("username and password must not be empty")]
    InputInvalid,

    /// The user may not authenticate through the IDM.
    #[error("user {0} is blacklisted")]
    Blacklisted(String),

    /// The IDM rejected the credentials.
    #[error("the identity service rejected the credentials")]
    RemoteAuthDenied,

    /// The IDM could not decide.
    #[error("the identity service did not answer: {source}")]
    RemoteUnknown {
        /// The source of the error.
        source: IdmProviderError,
    },

    /// The local account email differs from the IDM login name.
    #[error("local account does not match {0}")]
    LocalConflict(String),

    /// The back-office requires an existing local account.
    #[error("no local account for {0}")]
    LocalAccountRequired(String),

    /// The local account is blocked or not activated.
    #[error("the account is disabled for user: {0}")]
    LocalAccountDisabled(String),

    /// The local user store failed.
    #[error(transparent)]
    LocalStore {
        /// The source of the error.
        #[from]
        source: LocalUserProviderError,
    },
}

impl From<IdmProviderError> for AuthenticationError {
    fn from(value: IdmProviderError) -> Self {
        match value {
            IdmProviderError::AccessDenied => Self::RemoteAuthDenied,
            source => Self::RemoteUnknown { source },
        }
    }
}

impl AuthenticationError {
    /// Message presented to the user.
    pub fn message(&self, language: &dyn Language) -> String {
        match self {
            Self::InputInvalid | Self::Blacklisted(_) => language.sprintf(
                MessageKey::AuthFailed,
                &language.text(MessageKey::UserBlacklisted),
            ),
            Self::RemoteAuthDenied => language.sprintf(
                MessageKey::AuthFailed,
                &language.text(MessageKey::AccessDenied),
            ),
            Self::RemoteUnknown { .. } | Self::LocalStore { .. } => language.sprintf(
                MessageKey::AuthFailed,
                &language.text(MessageKey::UnknownAccessDenied),
            ),
            Self::LocalConflict(_) => language.text(MessageKey::Conflict),
            Self::LocalAccountDisabled(_) => language.text(MessageKey::AccessDenied),
            Self::LocalAccountRequired(_) => language.text(MessageKey::LoginDenied),
        }
    }
}
