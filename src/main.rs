use clap::Subcommand;

mod cli_commands;
mod cli_exec;
mod cli_runtime;

use self::cli_commands::{JsonArgs, LoginArgs, OpenArgs, ProfileArgs, RenameArgs};

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login(LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami(JsonArgs),
    /// List establishments (the built-in list when signed out)
    List(JsonArgs),
    /// Rename an establishment on the server
    Rename(RenameArgs),
    /// Change display name and/or password
    Profile(ProfileArgs),
    /// Open an establishment in the browser
    Open(OpenArgs),
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
