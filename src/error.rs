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
//! # Error
//!
//! Errors that can occur while assembling the bridge service. Errors of the
//! individual hooks never leave the hook boundary and are not part of this
//! enum.
use thiserror::Error;

use crate::idm::error::IdmProviderError;
use crate::local_user::error::LocalUserProviderError;

pub use fiware_idm_api_types::BuilderError;

/// Bridge error.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    IdmProvider {
        #[from]
        source: IdmProviderError,
    },

    #[error(transparent)]
    LocalUserProvider {
        #[from]
        source: LocalUserProviderError,
    },
}
