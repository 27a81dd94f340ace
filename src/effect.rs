#[derive(Clone)]
pub(crate) enum Effect {
  FetchSearchResults { query: String },
  OpenUrl { url: String },
}
