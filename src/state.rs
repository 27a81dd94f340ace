use super::*;

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  pending_effects: Vec<Effect>,
  query: String,
  screen: ScreenState,
  search_input: Option<SearchInput>,
  toast: Option<Toast>,
}

impl State {
  fn cancel_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.message = input.message_backup;
    }
  }

  fn close_details(&mut self) {
    self.mode = Mode::Results;

    if !self.help.is_visible() {
      self.message = RESULTS_STATUS.into();
    }
  }

  fn current_entry(&self) -> Option<&ListEntry> {
    self.view().and_then(|view| view.selected_item())
  }

  fn decrement_counter(&mut self) {
    if let Mode::Details(view) = &mut self.mode {
      view.decrement();
    }
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search(),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_last(),
      Command::OpenDetails => self.open_details(),
      Command::CloseDetails => self.close_details(),
      Command::IncrementCounter => self.increment_counter(),
      Command::DecrementCounter => self.decrement_counter(),
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::SearchResults { result } => match result {
        Ok(response) => match (response.total_count, response.items) {
          (Some(total_count), Some(items)) => {
            let mut view = ListView::new(
              items.into_iter().map(ListEntry::from).collect(),
            );

            if !view.is_empty() {
              view.set_selected(0);
            }

            let result_count = view.len();

            self.screen = ScreenState::Content { total_count, view };

            if !self.help.is_visible() {
              let truncated = truncate(&self.query, 40);

              self.message = match total_count {
                0 => format!("No results for \"{truncated}\""),
                1 => format!("Found 1 result for \"{truncated}\""),
                _ => format!(
                  "Found {total_count} results for \"{truncated}\", showing {result_count}"
                ),
              };
            }
          }
          _ => {
            self.screen = ScreenState::Error(NULL_FIELDS_ERROR.into());

            if !self.help.is_visible() {
              self.message = RESULTS_STATUS.into();
            }
          }
        },
        Err(error) => {
          self.screen =
            ScreenState::Error(UNSUCCESSFUL_RESPONSE_ERROR.into());

          if !self.help.is_visible() {
            self.set_toast(format!("Could not search: {error:#}"));
          }
        }
      },
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Command {
    if self.search_input.is_none() {
      return Command::None;
    }

    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        if let Some(input) = self.search_input.as_mut() {
          input.buffer.pop();
        }

        self.update_search_message();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(input) = self.search_input.as_mut() {
          input.buffer.push(ch);
        }

        self.update_search_message();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn increment_counter(&mut self) {
    if let Mode::Details(view) = &mut self.mode {
      view.increment();
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn new() -> Self {
    Self {
      help: HelpView::new(),
      list_height: 0,
      message: RESULTS_STATUS.into(),
      mode: Mode::Results,
      pending_effects: Vec::new(),
      query: String::new(),
      screen: ScreenState::Idle,
      search_input: None,
      toast: None,
    }
  }

  fn open_current_in_browser(&mut self) {
    let url = self.current_entry().and_then(|entry| entry.url.clone());

    if let Some(url) = url {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn open_details(&mut self) {
    let total = match &self.screen {
      ScreenState::Content { total_count, .. } => {
        i64::try_from(*total_count).unwrap_or(i64::MAX)
      }
      _ => 0,
    };

    self.mode = Mode::Details(DetailsView::new(total));

    if !self.help.is_visible() {
      self.message = DETAILS_STATUS.into();
    }
  }

  fn page_down(&mut self) {
    let current = self
      .view()
      .map_or(0, ListView::<ListEntry>::selected_raw);

    let jump = self.page_jump();

    self.select_index(current.saturating_add(jump));
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let current = self
      .view()
      .map_or(0, ListView::<ListEntry>::selected_raw);

    let jump = self.page_jump();

    self.select_index(current.saturating_sub(jump));
  }

  pub(crate) fn screen(&self) -> &ScreenState {
    &self.screen
  }

  pub(crate) fn search_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.search_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  fn select_index(&mut self, target: usize) {
    if let Some(view) = self.view_mut() {
      view.set_selected(target);
    }
  }

  fn select_last(&mut self) {
    let last = self
      .view()
      .map_or(0, |view| view.len().saturating_sub(1));

    self.select_index(last);
  }

  fn select_next(&mut self) {
    let current = self
      .view()
      .map_or(0, ListView::<ListEntry>::selected_raw);

    self.select_index(current.saturating_add(1));
  }

  fn select_previous(&mut self) {
    let current = self
      .view()
      .map_or(0, ListView::<ListEntry>::selected_raw);

    self.select_index(current.saturating_sub(1));
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    if let ScreenState::Content { view, .. } = &mut self.screen {
      view.set_offset(offset);
    }
  }

  pub(crate) fn set_toast(&mut self, message: String) {
    let original = self.toast.as_ref().map_or_else(
      || self.message.clone(),
      |toast| toast.original().to_string(),
    );

    self.toast = Some(Toast::new(message.clone(), original));

    self.message = message;
  }

  fn start_search(&mut self) {
    if self.search_input.is_some() {
      return;
    }

    let backup = self.message.clone();

    self.search_input = Some(SearchInput::new(backup));

    self.update_search_message();
  }

  fn submit_search(&mut self) {
    let Some(search) = self.search_input.take() else {
      return;
    };

    let query = search.buffer.trim().to_string();

    if query.is_empty() {
      self.message = search.message_backup;
      self.set_toast(BLANK_QUERY_MESSAGE.into());
      return;
    }

    self.query = query.clone();
    self.screen = ScreenState::Loading;

    self.message = format!("Searching for \"{}\"...", truncate(&query, 40));

    self
      .pending_effects
      .push(Effect::FetchSearchResults { query });
  }

  fn update_search_message(&mut self) {
    if let Some(input) = &self.search_input {
      let prompt = input.prompt();
      self.message = truncate(&prompt, 80);
    }
  }

  pub(crate) fn update_toast(&mut self) {
    if let Some(toast) = self.toast.clone() {
      if self.message != toast.current() {
        self.toast = None;
      } else if toast.is_expired() {
        self.message = toast.original().to_string();
        self.toast = None;
      }
    }
  }

  fn view(&self) -> Option<&ListView<ListEntry>> {
    match &self.screen {
      ScreenState::Content { view, .. } => Some(view),
      _ => None,
    }
  }

  fn view_mut(&mut self) -> Option<&mut ListView<ListEntry>> {
    match &mut self.screen {
      ScreenState::Content { view, .. } => Some(view),
      _ => None,
    }
  }
}
