use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SearchResult {
  pub(crate) description: Option<String>,
  pub(crate) full_name: String,
  pub(crate) html_url: Option<String>,
  #[allow(dead_code)]
  pub(crate) id: u64,
  pub(crate) language: Option<String>,
  pub(crate) owner: Option<Owner>,
  pub(crate) stargazers_count: Option<u64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_github_search_hit() {
    let result: SearchResult = serde_json::from_str(
      r#"{
        "id": 724712,
        "full_name": "rust-lang/rust",
        "owner": { "login": "rust-lang" },
        "description": "Empowering everyone",
        "language": "Rust",
        "html_url": "https://github.com/rust-lang/rust",
        "stargazers_count": 103000,
        "watchers_count": 103000
      }"#,
    )
    .expect("hit deserializes");

    assert_eq!(result.full_name, "rust-lang/rust");
    assert_eq!(result.owner.and_then(|owner| owner.login).as_deref(), Some("rust-lang"));
    assert_eq!(result.stargazers_count, Some(103_000));
  }

  #[test]
  fn tolerates_missing_optional_fields() {
    let result: SearchResult =
      serde_json::from_str(r#"{ "id": 1, "full_name": "o/r" }"#)
        .expect("sparse hit deserializes");

    assert!(result.description.is_none());
    assert!(result.language.is_none());
    assert!(result.owner.is_none());
  }
}
