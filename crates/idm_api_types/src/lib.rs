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

//! # FIWARE IDM API types
//!
//! Request and response bodies of the Keystone v3 identity API calls issued by
//! the bridge. Only the attributes the bridge reads or writes are modelled;
//! everything else returned by the IDM is collected into `extra`.

pub mod auth;
pub mod error;
pub mod user;

pub use error::BuilderError;
