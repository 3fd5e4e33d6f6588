//! soundpoint CLI - builds an L1 soundness checkpoint from a JSON-RPC endpoint.

use clap::Parser;

mod commands;
mod config;
mod error;
mod output;
mod telemetry;

use commands::checkpoint;
use config::CheckpointArgs;

#[derive(Parser)]
#[command(name = "soundpoint")]
#[command(
    about = "Generate an L1 soundness checkpoint by hashing recent block roots for use in ZK / rollup systems"
)]
struct Cli {
    #[command(flatten)]
    args: CheckpointArgs,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors are input failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    telemetry::init_tracing();

    if let Err(e) = checkpoint::run(cli.args).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
