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
//! # Remote IDM connection.
use serde::Deserialize;
use std::path::PathBuf;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://192.168.99.100:5000/v3/";

/// The only domain users are authenticated in.
pub const DEFAULT_DOMAIN_ID: &str = "default";

/// Remote IDM connection.
#[derive(Debug, Deserialize, Clone)]
pub struct IdmSection {
    /// Base URL of the identity API including the version and the trailing
    /// slash. Request paths are appended to it verbatim.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Domain of the authenticated users.
    #[serde(default = "default_domain_id")]
    pub domain_id: String,

    /// Additional PEM encoded root certificate trusted for the IDM
    /// connection.
    #[serde(default)]
    pub ca_file: Option<PathBuf>,
}

impl Default for IdmSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            domain_id: default_domain_id(),
            ca_file: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_domain_id() -> String {
    DEFAULT_DOMAIN_ID.into()
}
