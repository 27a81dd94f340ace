use super::*;

// The seam production code and tests share: the app only ever sees a
// repository, never the concrete HTTP client.
#[async_trait::async_trait]
pub(crate) trait Repository: Send + Sync {
  async fn search(&self, query: &str) -> Result<SearchResponse>;
}

#[async_trait::async_trait]
impl Repository for GitHubClient {
  async fn search(&self, query: &str) -> Result<SearchResponse> {
    self.search_repositories(query).await
  }
}
