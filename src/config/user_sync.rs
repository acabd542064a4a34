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
//! # User synchronization plugin configuration.
use secrecy::SecretString;
use serde::Deserialize;

/// Service account the user synchronization acts as on the IDM.
#[derive(Debug, Deserialize, Clone)]
pub struct UserSyncSection {
    /// Service account name.
    #[serde(default = "default_admin")]
    pub admin: String,

    /// Service account password.
    #[serde(default = "default_password")]
    pub password: SecretString,
}

impl Default for UserSyncSection {
    fn default() -> Self {
        Self {
            admin: default_admin(),
            password: default_password(),
        }
    }
}

fn default_admin() -> String {
    "idm".into()
}

fn default_password() -> SecretString {
    SecretString::from("idm")
}
