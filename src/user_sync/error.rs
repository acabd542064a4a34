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

/// User synchronization error.
#[derive(Error, Debug)]
pub enum UserSyncError {
    /// The user was not stored with a valid ID.
    #[error("invalid user id {0}")]
    InvalidUserId(i64),

    /// The save did not carry a new password.
    #[error("no clear text password available")]
    PasswordUnavailable,

    /// The service account can not get a token.
    #[error("service account authentication failed: {source}")]
    ServiceAuthentication {
        /// The source of the error.
        source: IdmProviderError,
    },

    /// Any IDM failure after the service account authenticated.
    #[error(transparent)]
    Remote {
        /// The source of the error.
        #[from]
        source: IdmProviderError,
    },

    /// A remote user with the name already exists.
    #[error("user {0} already exists in the identity service")]
    DuplicateRemoteUser(String),

    /// Not exactly one remote user carries the name.
    #[error("{count} users named {name} found in the identity service")]
    AmbiguousRemoteUser {
        /// Searched name.
        name: String,
        /// Number of found users.
        count: usize,
    },

    /// The remote user ended up disabled.
    #[error("user {0} is disabled in the identity service")]
    RemoteUserDisabled(String),
}
