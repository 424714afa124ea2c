// src/main.rs

use clipinc::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        // Exit explicitly: the stdin reader thread may still be blocked on a
        // read and would otherwise keep the runtime from shutting down.
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("clipinc error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
