use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Facts(args) => commands::facts::handle(&args, ctx, flags).await,
        Commands::Dataset(args) => commands::dataset::handle(&args, ctx, flags).await,
        Commands::Train(args) => commands::train::handle(&args, ctx, flags).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
    }
}
