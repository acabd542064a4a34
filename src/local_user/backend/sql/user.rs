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
//! Find host user by email.
use sea_orm::sea_query::{Alias, Expr, Query, SelectStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};

use crate::local_user::backend::error::{LocalUserDatabaseError, db_err};
use crate::local_user::types::LocalUser;

/// Row of the host user table.
///
/// MySQL stores `id` as `int` and `block` as `tinyint`, PostgreSQL as `serial`
/// and `smallint`.
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    block: i16,
    activation: String,
}

impl From<UserRow> for LocalUser {
    fn from(value: UserRow) -> Self {
        Self {
            id: i64::from(value.id),
            username: value.username,
            email: value.email,
            blocked: value.block != 0,
            activation: value.activation,
        }
    }
}

/// Prepare the query selecting the user by email.
fn get_find_query(table: &str, email: &str) -> SelectStatement {
    Query::select()
        .columns([
            Alias::new("id"),
            Alias::new("username"),
            Alias::new("email"),
            Alias::new("block"),
            Alias::new("activation"),
        ])
        .from(Alias::new(table))
        .and_where(Expr::col(Alias::new("email")).eq(email))
        .limit(1)
        .to_owned()
}

/// Find the user by the exact email.
pub async fn find_by_email(
    db: &DatabaseConnection,
    table: &str,
    email: &str,
) -> Result<Option<LocalUser>, LocalUserDatabaseError> {
    let stmt = db.get_database_backend().build(&get_find_query(table, email));
    Ok(UserRow::find_by_statement(stmt)
        .one(db)
        .await
        .map_err(|err| db_err(err, "reading host user by email"))?
        .map(Into::into))
}
