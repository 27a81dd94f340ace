use super::*;

pub(crate) enum Mode {
  Details(DetailsView),
  Results,
}

impl Mode {
  pub(crate) fn handle_key(&self, key: KeyEvent) -> Command {
    match self {
      Mode::Details(_) => match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Esc => Command::CloseDetails,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('+' | '=') => Command::IncrementCounter,
        KeyCode::Char('-' | '_') => Command::DecrementCounter,
        _ => Command::None,
      },
      Mode::Results => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Char('/') => Command::StartSearch,
          KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
          KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
          KeyCode::PageDown => Command::PageDown,
          KeyCode::PageUp => Command::PageUp,
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageDown
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageUp
          }
          KeyCode::Home => Command::SelectFirst,
          KeyCode::End => Command::SelectLast,
          KeyCode::Enter => Command::OpenDetails,
          KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
          _ => Command::None,
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn results_mode_maps_keys_to_commands() {
    let mode = Mode::Results;

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Char('/'))),
      Command::StartSearch
    );

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Enter)),
      Command::OpenDetails
    );

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Char('q'))),
      Command::Quit
    );
  }

  #[test]
  fn details_mode_maps_counter_keys() {
    let mode = Mode::Details(DetailsView::new(0));

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Char('+'))),
      Command::IncrementCounter
    );

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Char('-'))),
      Command::DecrementCounter
    );

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Esc)),
      Command::CloseDetails
    );
  }

  #[test]
  fn details_mode_ignores_search_keys() {
    let mode = Mode::Details(DetailsView::new(0));

    assert_eq!(
      mode.handle_key(KeyEvent::from(KeyCode::Char('/'))),
      Command::None
    );
  }
}
