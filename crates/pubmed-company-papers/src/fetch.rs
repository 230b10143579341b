//! Adaptive fetch controller.
//!
//! Accumulates a target number of post-filter papers from an API that returns
//! unfiltered results. Batch sizes adapt to the observed yield of the
//! affiliation filter; the loop is an explicit state machine with three exit
//! transitions (upstream exhausted, ceiling hit, target reached).

use tracing::{info, warn};

use crate::client::EntrezClient;
use crate::error::FetchResult;
use crate::models::CompanyPaper;
use crate::parser;

/// Tuning knobs for the fetch loop.
///
/// Defaults are the production values; tests inject smaller ones.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Upper bound on any single esearch page.
    pub max_batch: usize,

    /// Lower bound applied to rate-derived batch sizes.
    pub min_batch: usize,

    /// Hard ceiling on total records fetched; bounds worst-case cost against
    /// a query region with too few company papers.
    pub fetch_ceiling: usize,

    /// Chunk size for efetch batch requests.
    pub efetch_batch_size: usize,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self { max_batch: 1000, min_batch: 100, fetch_ceiling: 10_000, efetch_batch_size: 200 }
    }
}

/// Why the fetch loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Accumulated the requested number of qualifying papers.
    TargetReached,

    /// The search returned no further IDs — no more matches exist upstream.
    UpstreamExhausted,

    /// Total records fetched hit the hard ceiling before the target was met.
    CeilingReached,
}

/// Result of one fetch run.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Qualifying papers, truncated to at most the requested target.
    pub papers: Vec<CompanyPaper>,

    /// The exit transition that ended the loop.
    pub stop: StopCondition,

    /// Total records fetched from the API (pre-filter).
    pub total_fetched: usize,
}

/// Fetch qualifying papers for a query, up to `target` results.
///
/// Errors from the client or parser abort the whole run — no partial results
/// are returned on failure.
pub async fn run(
    client: &EntrezClient,
    query: &str,
    target: usize,
) -> FetchResult<Vec<CompanyPaper>> {
    let outcome = run_with_policy(client, query, target, &FetchPolicy::default()).await?;
    Ok(outcome.papers)
}

/// Fetch loop with an explicit policy; exposed for tests and callers that
/// need the stop condition.
pub async fn run_with_policy(
    client: &EntrezClient,
    query: &str,
    target: usize,
    policy: &FetchPolicy,
) -> FetchResult<FetchOutcome> {
    // Start with triple the requested size: the filter typically discards
    // most records.
    let mut batch_size = (target * 3).min(policy.max_batch);
    let mut papers: Vec<CompanyPaper> = Vec::new();
    let mut total_fetched = 0usize;

    let stop = loop {
        if papers.len() >= target {
            break StopCondition::TargetReached;
        }

        let needed = target - papers.len();

        // Resize from the observed yield once the filter has produced
        // anything; until then the zero-yield doubling below governs.
        if !papers.is_empty() && total_fetched > 0 {
            let filter_rate = papers.len() as f64 / total_fetched as f64;
            let adjusted = ((needed as f64 / filter_rate.max(0.01)) as usize).min(policy.max_batch);
            batch_size = adjusted.max(policy.min_batch);
        }

        info!(batch_size, have = papers.len(), target, "fetching next batch");

        let pmids = client.search(query, batch_size, total_fetched).await?;
        if pmids.is_empty() {
            warn!("no more papers found matching the query");
            break StopCondition::UpstreamExhausted;
        }
        total_fetched += pmids.len();

        let batches = client.fetch_all_batches(&pmids, policy.efetch_batch_size).await?;
        let mut batch_papers = Vec::new();
        for xml in &batches {
            batch_papers.extend(parser::parse(xml)?);
        }

        let yielded = batch_papers.len();
        papers.extend(batch_papers);

        info!(
            qualifying = papers.len(),
            total_fetched, "batch processed"
        );

        // A batch with zero qualifying papers suggests a low-yield region of
        // the ID space; double the request size.
        if yielded == 0 {
            batch_size = (batch_size * 2).min(policy.max_batch);
        }

        if total_fetched >= policy.fetch_ceiling && papers.len() < target {
            warn!(
                total_fetched,
                qualifying = papers.len(),
                "stopping at fetch ceiling before reaching target"
            );
            break StopCondition::CeilingReached;
        }
    };

    papers.truncate(target);

    info!(
        qualifying = papers.len(),
        total_fetched,
        ?stop,
        "fetch loop finished"
    );

    Ok(FetchOutcome { papers, stop, total_fetched })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = FetchPolicy::default();
        assert_eq!(policy.max_batch, 1000);
        assert_eq!(policy.min_batch, 100);
        assert_eq!(policy.fetch_ceiling, 10_000);
        assert_eq!(policy.efetch_batch_size, 200);
    }
}
