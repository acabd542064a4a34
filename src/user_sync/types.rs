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
use secrecy::{ExposeSecret, SecretString};

/// User record handed over by the host when saving a user.
#[derive(Clone, Debug, Default)]
pub struct HostUser {
    /// Local user ID. Not yet assigned (`0`) before the first save.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Email address, used as the IDM user name.
    pub email: String,
    /// Password in clear text when it was set or changed with this save.
    pub password_clear: Option<SecretString>,
}

impl HostUser {
    /// Password set with this save, if any.
    pub fn new_password(&self) -> Option<&SecretString> {
        self.password_clear
            .as_ref()
            .filter(|password| !password.expose_secret().is_empty())
    }
}
