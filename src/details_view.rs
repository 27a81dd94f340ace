// The details screen: a counter seeded with the latest result total.
// Nothing is persisted past the screen's lifetime.
pub(crate) struct DetailsView {
  count: i64,
}

impl DetailsView {
  pub(crate) fn counter_text(&self) -> String {
    format!("Number of results: {}", self.count)
  }

  pub(crate) fn decrement(&mut self) {
    self.count = self.count.saturating_sub(1);
  }

  pub(crate) fn increment(&mut self) {
    self.count = self.count.saturating_add(1);
  }

  pub(crate) fn new(count: i64) -> Self {
    Self { count }
  }
}
