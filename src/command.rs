#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelSearch,
  CloseDetails,
  DecrementCounter,
  HideHelp,
  IncrementCounter,
  None,
  OpenCurrentInBrowser,
  OpenDetails,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartSearch,
  SubmitSearch,
}
