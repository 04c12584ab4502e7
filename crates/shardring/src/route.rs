//! Batch routing of identifier files.
//!
//! Input is one identifier per line (LF or CRLF). Output is one
//! `identifier<TAB>shard` line per routed identifier, in input order.

use std::io::{BufRead, Write};

use anyhow::Context;
use shardring_placement::Ring;
use shardring_types::ShardConfig;
use tracing::debug;

/// Totals for one routing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Identifiers routed.
    pub routed: usize,
    /// Identifiers routed to each shard, by shard index.
    pub per_shard: Vec<usize>,
}

/// Route every identifier read from `input`, writing results to `output`.
///
/// Blank lines are skipped; everything else on a line, minus a trailing
/// `\r`, is the identifier.
pub fn route_lines<R: BufRead, W: Write>(
    ring: &Ring<ShardConfig>,
    input: R,
    mut output: W,
) -> anyhow::Result<RouteSummary> {
    let mut summary = RouteSummary {
        routed: 0,
        per_shard: vec![0; ring.shard_count()],
    };

    for line in input.lines() {
        let line = line.context("failed to read identifiers")?;
        let identifier = line.strip_suffix('\r').unwrap_or(&line);
        if identifier.is_empty() {
            continue;
        }

        let index = ring.shard_index_for(identifier);
        let label = ring.shards()[index].label(index);
        writeln!(output, "{identifier}\t{label}").context("failed to write route")?;
        debug!(identifier, shard = %label, "routed");

        summary.routed += 1;
        summary.per_shard[index] += 1;
    }

    output.flush().context("failed to flush routes")?;
    Ok(summary)
}
