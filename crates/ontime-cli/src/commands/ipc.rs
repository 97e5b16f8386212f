use ontime_store::BufferedNotifier;

use crate::context::AppContext;

/// Handle `ontime ipc`: serve line-delimited JSON requests until stdin closes.
pub fn handle(ctx: &mut AppContext, notifier: &BufferedNotifier) -> anyhow::Result<()> {
    tracing::info!(dir = %ctx.data_dir().display(), "ipc channel open");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ontime_store::ipc::serve(&mut ctx.planner, notifier, stdin.lock(), stdout.lock())?;
    tracing::info!("ipc channel closed");
    Ok(())
}
