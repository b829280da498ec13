//! Credential arguments shared by every command that needs a session

use std::io::{self, BufRead, Write};

use clap::Args;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{AuthService, Session};
use crate::storage::Storage;

/// Global `--user` / `--password` options
#[derive(Args, Clone, Default)]
pub struct CredentialArgs {
    /// Email to sign in with
    #[arg(short, long, global = true, env = "EXPENSIFY_USER")]
    pub user: Option<String>,

    /// Password; prompted for when omitted
    #[arg(long, global = true, env = "EXPENSIFY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Resolved identity and secret
pub struct Credentials {
    pub identity: String,
    pub secret: Zeroizing<String>,
}

impl CredentialArgs {
    /// Fill in whatever was not passed on the command line by prompting
    pub fn resolve(&self) -> ExpenseResult<Credentials> {
        let identity = match &self.user {
            Some(user) => user.clone(),
            None => prompt_line("Email: ")?,
        };

        let secret = match &self.password {
            Some(password) => Zeroizing::new(password.clone()),
            None => Zeroizing::new(
                rpassword::prompt_password("Password: ")
                    .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))?,
            ),
        };

        Ok(Credentials { identity, secret })
    }
}

fn prompt_line(prompt: &str) -> ExpenseResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Authenticate and open a session for this invocation
pub fn open_session(
    storage: &Storage,
    settings: &Settings,
    args: &CredentialArgs,
) -> ExpenseResult<Session> {
    let credentials = args.resolve()?;
    AuthService::new(&storage.credentials, settings)
        .authenticate(&credentials.identity, &credentials.secret)
}
