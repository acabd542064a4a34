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
//! # Authentication plugin configuration.
use serde::Deserialize;

use crate::config::common::csv;

/// Authentication plugin configuration.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AuthenticationSection {
    /// Users that are never authenticated against the IDM.
    #[serde(default, deserialize_with = "csv")]
    pub user_blacklist: Vec<String>,
}

impl AuthenticationSection {
    /// Whether the username is on the blacklist.
    pub fn is_blacklisted<U: AsRef<str>>(&self, username: U) -> bool {
        self.user_blacklist
            .iter()
            .any(|entry| entry == username.as_ref())
    }
}
