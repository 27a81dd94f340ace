use super::*;

// Build-time stand-in for the real client, selected by the `fake` feature.
// Returns the same envelope for every query without touching the network.
pub(crate) struct FakeRepository;

impl FakeRepository {
  pub(crate) const TOTAL_COUNT: u64 = 42;

  fn canned_results() -> Vec<SearchResult> {
    vec![
      SearchResult {
        description: Some(
          "Empowering everyone to build reliable and efficient software."
            .into(),
        ),
        full_name: "rust-lang/rust".into(),
        html_url: Some("https://github.com/rust-lang/rust".into()),
        id: 724_712,
        language: Some("Rust".into()),
        owner: Some(Owner {
          login: Some("rust-lang".into()),
        }),
        stargazers_count: Some(103_000),
      },
      SearchResult {
        description: Some(
          "A runtime for writing reliable asynchronous applications.".into(),
        ),
        full_name: "tokio-rs/tokio".into(),
        html_url: Some("https://github.com/tokio-rs/tokio".into()),
        id: 20_929_025,
        language: Some("Rust".into()),
        owner: Some(Owner {
          login: Some("tokio-rs".into()),
        }),
        stargazers_count: Some(28_000),
      },
      SearchResult {
        description: Some("Serialization framework for Rust".into()),
        full_name: "serde-rs/serde".into(),
        html_url: Some("https://github.com/serde-rs/serde".into()),
        id: 35_236_050,
        language: Some("Rust".into()),
        owner: Some(Owner {
          login: Some("serde-rs".into()),
        }),
        stargazers_count: Some(9_500),
      },
    ]
  }
}

#[async_trait::async_trait]
impl Repository for FakeRepository {
  async fn search(&self, _query: &str) -> Result<SearchResponse> {
    Ok(SearchResponse {
      items: Some(Self::canned_results()),
      total_count: Some(Self::TOTAL_COUNT),
    })
  }
}
