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
//! # Messages
//!
//! User facing messages are looked up by key so that the host can present
//! them in its own language. The keys are the ones of the host language
//! files; [`EnglishLanguage`] carries the default strings.
use std::collections::HashMap;

/// Message keys used by the bridge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MessageKey {
    /// `Failed to authenticate: %s`, wraps one of the other reasons.
    AuthFailed,
    /// Credentials rejected or the account is not usable.
    AccessDenied,
    /// The IDM answered with something else than accept or reject.
    UnknownAccessDenied,
    /// The user may not authenticate through the bridge.
    UserBlacklisted,
    /// The back-office login requires an existing local account.
    LoginDenied,
    /// The local account and the IDM account disagree.
    Conflict,
}

impl MessageKey {
    /// Key in the host language files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthFailed => "JGLOBAL_AUTH_FAILED",
            Self::AccessDenied => "JGLOBAL_AUTH_ACCESS_DENIED",
            Self::UnknownAccessDenied => "JGLOBAL_AUTH_UNKNOWN_ACCESS_DENIED",
            Self::UserBlacklisted => "JGLOBAL_AUTH_USER_BLACKLISTED",
            Self::LoginDenied => "JERROR_LOGIN_DENIED",
            Self::Conflict => "PLG_FIWARE_ERROR_CONFLICT",
        }
    }
}

/// Message lookup.
pub trait Language: Send + Sync {
    /// Translated message.
    fn text(&self, key: MessageKey) -> String;

    /// Translated message with the first `%s` placeholder replaced by `arg`.
    fn sprintf(&self, key: MessageKey, arg: &str) -> String {
        self.text(key).replacen("%s", arg, 1)
    }
}

/// Built-in English messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishLanguage;

impl Language for EnglishLanguage {
    fn text(&self, key: MessageKey) -> String {
        match key {
            MessageKey::AuthFailed => "Failed to authenticate: %s",
            MessageKey::AccessDenied => {
                "Username and password do not match or you do not have an account yet."
            }
            MessageKey::UnknownAccessDenied => "Result Unknown. Access Denied",
            MessageKey::UserBlacklisted => "User is blacklisted.",
            MessageKey::LoginDenied => "You cannot access the private section of this site.",
            MessageKey::Conflict => {
                "The local account does not match the FIWARE IDM account. Please contact the administrator."
            }
        }
        .to_string()
    }
}

/// Messages provided by the host, keyed by [`MessageKey::as_str`].
///
/// Keys missing in the catalog fall back to [`EnglishLanguage`].
#[derive(Clone, Debug, Default)]
pub struct CatalogLanguage {
    strings: HashMap<String, String>,
}

impl CatalogLanguage {
    pub fn new<I, K, V>(strings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            strings: strings
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Language for CatalogLanguage {
    fn text(&self, key: MessageKey) -> String {
        self.strings
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| EnglishLanguage.text(key))
    }
}
