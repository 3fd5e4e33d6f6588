//! Checkpoint command implementation.

use chrono::Utc;
use soundpoint_core::{ChainIdentity, CheckpointError, CheckpointPlan, CheckpointResult};
use soundpoint_rpc::{PrefetchingSource, RpcClient, RpcConfig};
use tracing::{info, warn};

use crate::config::{CheckpointArgs, OutputMode, RunConfig};
use crate::error::CliError;
use crate::output;

pub async fn run(args: CheckpointArgs) -> Result<(), CliError> {
    // Validate before any network work
    let config = RunConfig::from_args(args)?;

    info!(started_at = %output::utc_timestamp(Utc::now()), "run started");
    if config.window.is_large() {
        warn!(
            blocks = config.window.requested_blocks(),
            "large block window requested; this may take a long time"
        );
    }
    info!(endpoint = %config.endpoint, "using RPC endpoint");

    let mut client = RpcClient::connect(&config.endpoint, &config.rpc)
        .await
        .map_err(CheckpointError::connection)?;
    let head = client
        .tip_height()
        .await
        .map_err(CheckpointError::connection)?;
    let identity = ChainIdentity::resolve(client.chain_id());
    info!(
        network = %identity.network_label,
        chain_id = identity.chain_id,
        tip = head,
        "connected"
    );

    let plan = CheckpointPlan::new(identity, config.window.at_head(head))?;

    // Dropping the build future between fold steps discards the transcript.
    let result = tokio::select! {
        result = execute(plan, &mut client, &config.rpc) => result?,
        _ = tokio::signal::ctrl_c() => return Err(CliError::Cancelled),
    };

    match config.output {
        OutputMode::Json => println!("{}", output::format_json(&result, Utc::now())?),
        OutputMode::Human => print!("{}", output::format_human(&result, Utc::now())),
    }

    Ok(())
}

async fn execute(
    plan: CheckpointPlan,
    client: &mut RpcClient,
    rpc: &RpcConfig,
) -> Result<CheckpointResult, CheckpointError> {
    if rpc.prefetch_enabled() {
        let mut source =
            PrefetchingSource::new(client, plan.sequence().as_slice(), rpc.prefetch_concurrency);
        plan.execute(&mut source).await
    } else {
        plan.execute(client).await
    }
}
