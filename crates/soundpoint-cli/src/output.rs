//! Output formatting utilities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use soundpoint_core::CheckpointResult;

/// Value of the `mode` field in JSON output.
pub const OUTPUT_MODE: &str = "l1_soundness_checkpoint";

/// JSON envelope. Fields are declared in key order so the output is sorted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckpointReport<'a> {
    data: &'a CheckpointResult,
    generated_at_utc: String,
    mode: &'static str,
}

/// UTC RFC3339 timestamp with `Z` suffix, second precision.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Formats a result as the machine-readable report.
pub fn format_json(
    result: &CheckpointResult,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CheckpointReport {
        data: result,
        generated_at_utc: utc_timestamp(generated_at),
        mode: OUTPUT_MODE,
    })
}

/// Formats a result for people.
pub fn format_human(result: &CheckpointResult, completed_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "Network: {} (chainId {})\n",
        result.network_label(),
        result.chain_id()
    ));
    out.push_str(&format!(
        "Window: head={} start={} (blocksRequested={} step={})\n",
        result.head_height(),
        result.start_height(),
        result.requested_blocks(),
        result.stride()
    ));
    out.push_str(&format!(
        "Sampled blocks: {}  (elapsed={}s)\n",
        result.sampled_count(),
        result.elapsed_seconds()
    ));
    out.push('\n');
    out.push_str("L1 Soundness Checkpoint (Keccak-256 hex):\n");
    out.push_str(&format!("   {}\n", result.commitment()));
    out.push('\n');
    out.push_str(
        "This checkpoint is a rolling commitment over (blockNumber, stateRoot, \
         receiptsRoot, transactionsRoot) for sampled blocks.\n",
    );
    out.push_str(
        "It can be used as public input for ZK circuits, rollups, \
         or soundness verification jobs.\n",
    );
    out.push_str(&format!("Completed at UTC: {}\n", utc_timestamp(completed_at)));
    out
}
