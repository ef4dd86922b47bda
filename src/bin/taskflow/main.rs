//! Command-line front end for TaskFlow boards.
//!
//! Usage:
//!
//! ```text
//! taskflow [--data-dir PATH] [--log-json] [--log-filter FILTER] <command>
//! ```
//!
//! Each invocation runs one command against the snapshot directory, prints
//! the resulting view on stdout, then prints the notifications the command
//! raised. The signed-in user and the board collection persist between
//! invocations as `taskflow_user.json` and `taskflow_boards.json`.

mod app;
mod cli;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use taskflow::config::TaskflowConfig;
use taskflow::logging::init_tracing;
use taskflow::notify::{Notification, RecordingNotifier};
use taskflow::storage::adapters::DirSnapshotStore;
use tokio::runtime::Builder;

use app::App;
use cli::Cli;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = TaskflowConfig::resolve(cli.overrides());
    init_tracing(&config);

    let store = Arc::new(DirSnapshotStore::open(config.data_dir())?);
    let notifier = RecordingNotifier::new();
    let app = App::new(store, Arc::new(notifier.clone()))?;
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let outcome = runtime.block_on(app.run(cli.command));

    let mut stdout = io::stdout().lock();
    if let Ok(view) = &outcome {
        stdout.write_all(view.as_bytes())?;
    }
    write_notifications(&mut stdout, &notifier.drain())?;
    stdout.flush()?;
    outcome?;
    Ok(())
}

fn write_notifications(out: &mut impl Write, notifications: &[Notification]) -> io::Result<()> {
    for notification in notifications {
        let marker = if notification.is_destructive() { "!" } else { "*" };
        writeln!(out, "{marker} {notification}")?;
    }
    Ok(())
}
