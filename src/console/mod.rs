// src/console/mod.rs

//! Line-oriented command console.
//!
//! Reads commands from any async line source (stdin in production, an
//! in-memory reader in tests) and drives the [`WatchSupervisor`].

pub mod parse;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use crate::directory::{create_directory, directory_exists, open_in_file_manager};
use crate::errors::Result;
use crate::watch::WatchSupervisor;

pub use parse::{parse_command, split_args, Command, HELP_TEXT};

pub struct Console<R> {
    lines: Lines<R>,
    supervisor: Arc<WatchSupervisor>,
}

impl<R> std::fmt::Debug for Console<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("supervisor", &self.supervisor)
            .finish_non_exhaustive()
    }
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    pub fn new(reader: R, supervisor: Arc<WatchSupervisor>) -> Self {
        Self {
            lines: reader.lines(),
            supervisor,
        }
    }

    /// Process commands until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        while let Some(line) = self.read_line().await? {
            let Some(command) = parse_command(&line) else {
                continue;
            };
            debug!(?command, "console command");

            match command {
                Command::Help => println!("{HELP_TEXT}"),
                Command::Directory => self.print_directory().await,
                Command::Change(arg) => self.change_directory(arg).await?,
                Command::Open => self.open_directory().await,
                Command::Exit => return Ok(()),
                Command::Unknown(word) => eprintln!("Unknown command: {word}"),
            }
        }

        debug!("console input closed");
        Ok(())
    }

    /// Ask whether to create a missing directory, then start watching it.
    ///
    /// `otherwise` is printed when the user declines. Returns whether the
    /// directory is now being watched.
    pub async fn handle_missing_directory(&mut self, dir: PathBuf, otherwise: &str) -> Result<bool> {
        println!(
            "Directory {} does not exist.\nWould you like to create it? (yes/no)",
            dir.display()
        );

        let Some(create) = self.prompt_yes_no().await? else {
            return Ok(false);
        };

        if !create {
            println!("Directory not created.\n{otherwise}");
            return Ok(false);
        }

        if let Err(err) = create_directory(&dir) {
            warn!(dir = ?dir, error = %err, "could not create directory");
            eprintln!("Could not create directory {}: {err}", dir.display());
            return Ok(false);
        }
        println!("Successfully created directory: {}\n", dir.display());
        Ok(self.watch(dir).await)
    }

    async fn change_directory(&mut self, arg: Option<String>) -> Result<()> {
        let dir = match arg {
            Some(arg) if !arg.is_empty() => PathBuf::from(arg),
            _ => match self.prompt_path().await? {
                Some(dir) => dir,
                None => return Ok(()),
            },
        };

        if directory_exists(&dir) {
            self.watch(dir).await;
            return Ok(());
        }

        let otherwise = match self.supervisor.active_dir().await {
            Some(current) => format!("Continuing to watch {} for changes...\n", current.display()),
            None => "No directory is being watched.\n".to_string(),
        };
        self.handle_missing_directory(dir, &otherwise).await?;
        Ok(())
    }

    /// Point the supervisor at `dir`. Registration failures are reported,
    /// not retried.
    async fn watch(&mut self, dir: PathBuf) -> bool {
        match self.supervisor.change_directory(&dir).await {
            Ok(_) => true,
            Err(err) => {
                warn!(dir = ?dir, error = %err, "could not start watching directory");
                eprintln!("Could not watch {}: {err}", dir.display());
                false
            }
        }
    }

    async fn print_directory(&self) {
        match self.supervisor.active_dir().await {
            Some(dir) => println!("Currently watching: {}", dir.display()),
            None => println!("No directory is being watched"),
        }
    }

    async fn open_directory(&self) {
        let Some(dir) = self.supervisor.paths().get() else {
            eprintln!(
                "Directory path is not configured yet\n\
                 Please configure the directory path using the 'change' command first"
            );
            return;
        };

        match open_in_file_manager(&dir).await {
            Ok(()) => println!("Opened directory: {}", dir.display()),
            Err(err) => {
                warn!(dir = ?dir, error = %err, "could not open directory");
                eprintln!("Could not open directory: {}", dir.display());
            }
        }
    }

    async fn prompt_path(&mut self) -> Result<Option<PathBuf>> {
        println!("Enter the new directory path:");
        loop {
            match self.read_line().await? {
                None => return Ok(None),
                Some(line) if line.is_empty() => {
                    eprintln!("Directory path cannot be empty. Please enter a valid directory path:");
                }
                Some(line) => return Ok(Some(strip_quotes(&line).to_path_buf())),
            }
        }
    }

    /// `Some(true)` for yes/y, `Some(false)` for no/n, `None` at end of input.
    async fn prompt_yes_no(&mut self) -> Result<Option<bool>> {
        loop {
            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => println!("Invalid input. Please enter 'yes' or 'no'"),
            }
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }
}

fn strip_quotes(input: &str) -> &Path {
    let trimmed = input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(input);
    Path::new(trimmed)
}
