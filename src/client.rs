use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct GitHubClient {
  base_url: String,
  client: reqwest::Client,
  token: Option<String>,
}

impl Default for GitHubClient {
  fn default() -> Self {
    Self::new(Self::API_BASE_URL.into(), env::var("GITHUB_TOKEN").ok())
  }
}

impl GitHubClient {
  const API_BASE_URL: &str = "https://api.github.com";

  // GitHub rejects requests without a user agent.
  const USER_AGENT: &str = "ghs";

  pub(crate) fn new(base_url: String, token: Option<String>) -> Self {
    Self {
      base_url,
      client: reqwest::Client::new(),
      token,
    }
  }

  pub(crate) async fn search_repositories(
    &self,
    query: &str,
  ) -> Result<SearchResponse> {
    let url = format!(
      "{}/search/repositories",
      self.base_url.trim_end_matches('/')
    );

    let mut request = self
      .client
      .get(url)
      .query(&[("q", query)])
      .header(reqwest::header::USER_AGENT, Self::USER_AGENT);

    if let Some(token) = &self.token {
      request = request.bearer_auth(token);
    }

    request
      .send()
      .await
      .context("search request failed")?
      .error_for_status()
      .context("search returned an error status")?
      .json::<SearchResponse>()
      .await
      .context("could not parse search response")
  }
}
