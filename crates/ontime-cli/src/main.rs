use anyhow::Context;
use clap::Parser;
use ontime_config::OntimeConfig;
use ontime_core::errors::CoreError;
use ontime_store::BufferedNotifier;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        // Validation failures were already shown as a notice.
        let notified = matches!(
            error.downcast_ref::<CoreError>(),
            Some(CoreError::Validation(_))
        );
        if !notified {
            eprintln!("ontime error: {error:#}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = OntimeConfig::load_with_dotenv().context("failed to load configuration")?;

    if matches!(cli.command, cli::Commands::Ipc) {
        let notifier = BufferedNotifier::new();
        let mut ctx = context::AppContext::init(config, &flags, Box::new(notifier.clone()))
            .context("failed to initialize ontime application context")?;
        return commands::ipc::handle(&mut ctx, &notifier);
    }

    let mut ctx = context::AppContext::init(config, &flags, Box::new(ui::StderrNotifier))
        .context("failed to initialize ontime application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ONTIME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
