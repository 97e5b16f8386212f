use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Subject { action } => commands::subject::handle(&action, ctx, flags),
        Commands::Session { action } => commands::session::handle(&action, ctx, flags),
        Commands::Task { action } => commands::task::handle(&action, ctx, flags),
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Analytics => commands::analytics::handle(ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Reset => commands::reset::handle(ctx, flags),
        Commands::Schema(_) | Commands::Ipc => {
            unreachable!("schema/ipc are pre-dispatched in main")
        }
    }
}
