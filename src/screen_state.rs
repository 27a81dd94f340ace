use super::*;

// The single observable UI state. Exactly one variant is active at a time
// and it is replaced wholesale on every request outcome.
pub(crate) enum ScreenState {
  Content {
    total_count: u64,
    view: ListView<ListEntry>,
  },
  Error(String),
  Idle,
  Loading,
}
