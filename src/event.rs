use super::*;

pub(crate) enum Event {
  SearchResults { result: Result<SearchResponse> },
}
