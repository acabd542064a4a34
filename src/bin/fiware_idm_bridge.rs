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
//! FIWARE IDM bridge executable.
//!
//! Runs the host hooks by hand: useful to verify the configuration and the
//! IDM connectivity without going through the host application.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    prelude::*,
};

use fiware_idm_bridge::auth::{AuthOptions, ClientContext, Credentials};
use fiware_idm_bridge::config::Config;
use fiware_idm_bridge::hooks;
use fiware_idm_bridge::plugin_manager::PluginManager;
use fiware_idm_bridge::provider::Provider;
use fiware_idm_bridge::service::Service;
use fiware_idm_bridge::user_sync::HostUser;

/// FIWARE IDM bridge.
///
/// Authenticates host users against the FIWARE Identity Management and keeps
/// the IDM users synchronized with the host user table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the bridge config file.
    #[arg(short, long, default_value = "/etc/fiware/idm-bridge.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate the user and print the authentication result.
    Authenticate {
        /// Login name (email).
        #[arg(long)]
        username: String,

        /// Password.
        #[arg(long, env = "FIWARE_PASSWORD", hide_env_values = true)]
        password: String,

        /// Authenticate for the back-office.
        #[arg(long)]
        administrator: bool,
    },

    /// Check whether a new user with the email may be created.
    CheckUser {
        /// Email of the new user.
        #[arg(long)]
        email: String,
    },

    /// Mirror the saved user to the IDM.
    SyncUser {
        /// Local user ID.
        #[arg(long)]
        id: i64,

        /// Email of the user.
        #[arg(long)]
        email: String,

        /// Login name of the user.
        #[arg(long, default_value = "")]
        username: String,

        /// New password.
        #[arg(long, env = "FIWARE_PASSWORD", hide_env_values = true)]
        password: String,

        /// The user was created with this save.
        #[arg(long)]
        new: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let cfg = Config::new(args.config)?;

    let verbose = if cfg.default.debug {
        args.verbose.max(2)
    } else {
        args.verbose
    };
    let filter = Targets::new()
        .with_default(match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        })
        .with_target("sqlx", LevelFilter::WARN)
        .with_target("hyper_util", LevelFilter::INFO);

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    // build the tracing registry
    tracing_subscriber::registry().with(log_layer).init();

    info!("Starting FIWARE IDM bridge...");

    let conn = if cfg.database.connection.expose_secret().is_empty() {
        warn!("No database connection configured, local accounts are not available");
        DatabaseConnection::Disconnected
    } else {
        let opt: ConnectOptions =
            ConnectOptions::new(cfg.database.get_connection().expose_secret())
                // Prevent dumping the password in plaintext.
                .sqlx_logging(false)
                .to_owned();

        debug!("Establishing the database connection...");
        Database::connect(opt)
            .await
            .wrap_err("Database connection failed")?
    };

    let plugin_manager = PluginManager::with_fiware_plugins();
    let provider = Provider::new(&cfg, &plugin_manager)?;
    let state = Arc::new(Service::new(cfg, conn, provider, plugin_manager));

    let success = match args.command {
        Command::Authenticate {
            username,
            password,
            administrator,
        } => {
            let options = AuthOptions {
                client: if administrator {
                    ClientContext::Administrator
                } else {
                    ClientContext::Site
                },
            };
            let result =
                hooks::authenticate(&state, &Credentials::new(username, password), &options).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            result.is_success()
        }
        Command::CheckUser { email } => {
            let new = HostUser {
                email,
                ..Default::default()
            };
            let allowed = hooks::before_user_save(&state, None, true, &new).await;
            println!("{}", json!({"allowed": allowed}));
            allowed
        }
        Command::SyncUser {
            id,
            email,
            username,
            password,
            new,
        } => {
            let user = HostUser {
                id,
                username,
                email,
                password_clear: Some(SecretString::from(password)),
            };
            let synced = hooks::after_user_save(&state, &user, new, true, None).await;
            println!("{}", json!({"success": synced}));
            synced
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
