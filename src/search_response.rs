use super::*;

// Both fields stay optional so a partial payload survives deserialization
// and is rejected by the state layer instead of the codec.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  pub(crate) items: Option<Vec<SearchResult>>,
  pub(crate) total_count: Option<u64>,
}
