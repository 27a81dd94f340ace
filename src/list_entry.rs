use super::*;

pub(crate) struct ListEntry {
  pub(crate) detail: Option<String>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl From<SearchResult> for ListEntry {
  fn from(result: SearchResult) -> Self {
    let mut parts = Vec::new();

    if let Some(stars) = result.stargazers_count {
      parts.push(format_stars(stars));
    }

    if let Some(language) = result.language {
      parts.push(language);
    }

    if let Some(login) = result.owner.and_then(|owner| owner.login) {
      parts.push(format!("by {login}"));
    }

    if let Some(description) = result.description {
      parts.push(truncate(&description, 80));
    }

    let detail = (!parts.is_empty()).then(|| parts.join(" • "));

    Self {
      detail,
      title: result.full_name,
      url: result.html_url,
    }
  }
}
