use super::establishments::{handle_list_command, handle_open_command, handle_rename_command};
use super::session::{
    handle_login_command, handle_logout_command, handle_profile_command, handle_whoami_command,
};
use super::*;

pub(crate) fn handle_command(
    config: &LauncherConfig,
    ephemeral: bool,
    command: Commands,
) -> Result<()> {
    with_launcher(config, ephemeral, |l| match command {
        Commands::Login(args) => handle_login_command(l, args.username, args.password),
        Commands::Logout => handle_logout_command(l),
        Commands::Whoami(args) => handle_whoami_command(l, args.json),
        Commands::List(args) => handle_list_command(l, args.json),
        Commands::Rename(args) => handle_rename_command(l, args.id, args.name),
        Commands::Profile(args) => handle_profile_command(l, args.name, args.password),
        Commands::Open(args) => handle_open_command(l, args.id, args.print),
    })
}
