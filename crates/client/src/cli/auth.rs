//! Session CLI commands.

use clap::{Parser, Subcommand};

/// Session commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available session actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Sign in with --email/--password and print the access token.
    Login,
    /// Show the signed-in user.
    Whoami,
    /// End the current session.
    Logout,
}
