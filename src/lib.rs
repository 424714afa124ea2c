// src/lib.rs

pub mod buffer;
pub mod cli;
pub mod config;
pub mod console;
pub mod directory;
pub mod errors;
pub mod filename;
pub mod format;
pub mod logging;
pub mod types;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::buffer::{MemoryBuffer, SystemClipboard, TextBuffer};
use crate::cli::CliArgs;
use crate::config::load_config;
use crate::console::Console;
use crate::directory::{create_directory, directory_exists};
use crate::format::start_banner;
use crate::watch::{NotifySource, WatchSupervisor, WatchedPath};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - clipboard backend
/// - watch supervisor (one `notify` session at a time)
/// - the stdin console
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref().map(Path::new))
        .context("loading configuration")?;
    debug!(?cfg, "configuration loaded");

    let buffer: Arc<dyn TextBuffer> = if args.no_clipboard {
        Arc::new(MemoryBuffer::new())
    } else if let Some((read, write)) = cfg.clipboard_commands() {
        Arc::new(SystemClipboard::with_commands(read.to_vec(), write.to_vec())?)
    } else {
        Arc::new(SystemClipboard::new())
    };

    let supervisor = Arc::new(
        WatchSupervisor::new(
            WatchedPath::default(),
            Arc::new(NotifySource::new()),
            buffer,
            cfg.loop_options(),
        )
        .with_shutdown_timeout(cfg.shutdown_timeout()),
    );

    let dir = args
        .dir
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| cfg.directory().cloned());

    if args.no_console {
        let Some(dir) = dir else {
            bail!("no directory configured; pass --dir or set [watch].directory");
        };
        if !directory_exists(&dir) {
            if !args.create_dir {
                bail!("directory {:?} does not exist (pass --create-dir to create it)", dir);
            }
            create_directory(&dir)?;
        }
        supervisor.change_directory(dir).await?;

        wait_for_ctrl_c().await;
    } else {
        println!("{}", start_banner());

        let mut console = Console::new(BufReader::new(tokio::io::stdin()), Arc::clone(&supervisor));

        match dir {
            Some(dir) if directory_exists(&dir) => {
                supervisor.change_directory(dir).await?;
            }
            Some(dir) if args.create_dir => {
                create_directory(&dir)?;
                supervisor.change_directory(dir).await?;
            }
            Some(dir) => {
                console
                    .handle_missing_directory(
                        dir,
                        "Please update the directory path to an existing directory using the \
                         'change' command or stop the application with the 'stop' command.",
                    )
                    .await?;
            }
            None => println!("No directory configured yet. Use the 'change' command to pick one.\n"),
        }

        tokio::select! {
            res = console.run() => res?,
            _ = wait_for_ctrl_c() => {}
        }
    }

    println!("Stopping application...");
    supervisor.shutdown().await;
    info!("clipinc stopped");
    Ok(())
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("failed to listen for Ctrl+C: {e}");
        // Without a signal handler the only way out is the console.
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received; shutting down");
}
