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
//! Internal mock structures for the [IdmProvider].

use async_trait::async_trait;
use mockall::mock;
use secrecy::SecretString;

use super::error::IdmProviderError;
use super::types::{IdmApi, IdmToken, RemoteUser};
use crate::config::Config;

mock! {
    pub IdmProvider {
        pub fn new(cfg: &Config) -> Result<Self, IdmProviderError>;
    }

    #[async_trait]
    impl IdmApi for IdmProvider {
        async fn get_token<'a>(
            &self,
            username: &'a str,
            password: &SecretString,
            domain_id: &'a str,
        ) -> Result<IdmToken, IdmProviderError>;

        async fn create_user<'a>(
            &self,
            token: &IdmToken,
            name: &'a str,
            password: &SecretString,
        ) -> Result<bool, IdmProviderError>;

        async fn find_users_by_name<'a>(
            &self,
            token: &IdmToken,
            name: &'a str,
        ) -> Result<Vec<RemoteUser>, IdmProviderError>;

        async fn update_user_password<'a>(
            &self,
            token: &IdmToken,
            user_id: &'a str,
            password: &SecretString,
        ) -> Result<bool, IdmProviderError>;
    }

    impl Clone for IdmProvider {
        fn clone(&self) -> Self;
    }
}
