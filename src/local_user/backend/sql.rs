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
//! Local user: database backend.
//!
//! Reads the user table of the host (`{table_prefix}users`).

use async_trait::async_trait;

use super::LocalUserBackend;
use crate::local_user::{LocalUserProviderError, types::LocalUser};
use crate::service::ServiceState;

mod user;

/// Sql Database local user backend.
#[derive(Default)]
pub struct SqlBackend {}

#[async_trait]
impl LocalUserBackend for SqlBackend {
    /// Find the account with the exact email.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn find_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<LocalUser>, LocalUserProviderError> {
        Ok(user::find_by_email(&state.db, &state.config.database.users_table(), email).await?)
    }
}
