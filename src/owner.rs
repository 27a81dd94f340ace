use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Owner {
  pub(crate) login: Option<String>,
}
