//! NCBI E-utilities API client.
//!
//! Wraps the two endpoints this pipeline consumes:
//! - esearch: paginated PMID lookup for a query (JSON)
//! - efetch: batch record fetch for a PMID list (XML)
//!
//! Failures are fatal. There is no retry; the only pacing mechanism is the
//! fixed pause between efetch batches.

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// esearch JSON envelope.
#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(default)]
    esearchresult: EsearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// E-utilities API client.
#[derive(Clone)]
pub struct EntrezClient {
    client: reqwest::Client,
    config: Config,
}

impl EntrezClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }

    /// Identification parameters NCBI asks every client to send.
    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("tool", self.config.tool.clone()),
            ("email", self.config.email.clone()),
        ];
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search PubMed and return one page of PMIDs.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        retmax: usize,
        retstart: usize,
    ) -> ClientResult<Vec<String>> {
        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("term", query.to_string()));
        params.push(("retmode", "json".to_string()));
        params.push(("retmax", retmax.to_string()));
        params.push(("retstart", retstart.to_string()));

        let response = self.client.get(&self.config.esearch_url).query(&params).send().await?;
        let response = handle_response(response).await?;
        let body = response.text().await?;

        let envelope: EsearchResponse = serde_json::from_str(&body)?;
        let pmids = envelope.esearchresult.idlist;
        debug!(count = pmids.len(), retstart, "esearch returned PMIDs");

        Ok(pmids)
    }

    /// Fetch the raw efetch XML for a list of PMIDs.
    ///
    /// Returns `Ok(None)` when `pmids` is empty — there is nothing to fetch.
    #[instrument(skip(self, pmids), fields(count = pmids.len()))]
    pub async fn fetch_batch(&self, pmids: &[String]) -> ClientResult<Option<String>> {
        if pmids.is_empty() {
            warn!("no PMIDs provided to fetch_batch");
            return Ok(None);
        }

        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("id", pmids.join(",")));
        params.push(("retmode", "xml".to_string()));

        let response = self.client.get(&self.config.efetch_url).query(&params).send().await?;
        let response = handle_response(response).await?;
        let xml = response.text().await?;

        Ok(Some(xml))
    }

    /// Fetch records for all PMIDs, chunked into batches.
    ///
    /// Inserts the configured pause after each batch to respect NCBI's rate
    /// limits; chunks whose fetch yields nothing are skipped.
    pub async fn fetch_all_batches(
        &self,
        pmids: &[String],
        batch_size: usize,
    ) -> ClientResult<Vec<String>> {
        let mut results = Vec::new();

        for chunk in pmids.chunks(batch_size) {
            if let Some(xml) = self.fetch_batch(chunk).await? {
                results.push(xml);
            }
            // Be nice to the API
            tokio::time::sleep(self.config.fetch_delay).await;
        }

        Ok(results)
    }
}

/// Map non-success HTTP statuses to structured errors.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::status(status.as_u16(), message))
}

impl std::fmt::Debug for EntrezClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrezClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
