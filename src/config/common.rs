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
//! # Common deserialization helpers.
use serde::{Deserialize, Deserializer};

/// Deserialize a comma separated list.
///
/// Entries are trimmed and empty entries are dropped, so `"root, admin,"`
/// yields `["root", "admin"]`.
pub fn csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?
        .split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(Into::into)
        .collect())
}

pub fn default_sql_driver() -> String {
    "sql".into()
}
