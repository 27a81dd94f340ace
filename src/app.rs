use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  repository: Arc<dyn Repository>,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    let title = Paragraph::new(Line::from(vec![
      Span::styled(
        "ghs",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::raw(" "),
      Span::styled(
        "GitHub repository search",
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    frame.render_widget(title, layout[0]);

    if let Mode::Details(view) = self.state.mode() {
      let details = Paragraph::new(vec![
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            view.counter_text(),
            Style::default()
              .fg(Color::White)
              .add_modifier(Modifier::BOLD),
          ),
        ]),
        Line::default(),
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(DETAILS_STATUS, Style::default().fg(Color::DarkGray)),
        ]),
      ]);

      frame.render_widget(details, layout[1]);
    } else {
      self.draw_results(frame, layout[1]);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
    let (list_items, selected_index, offset) = match self.state.screen() {
      ScreenState::Content { view, .. } => {
        let list_items: Vec<ListItem> = if view.is_empty() {
          vec![Self::placeholder_item("No results yet. Try another query.")]
        } else {
          view
            .items()
            .iter()
            .map(|entry| {
              let mut lines = vec![Line::from(vec![
                Span::raw(BASE_INDENT),
                Span::styled(
                  entry.title.clone(),
                  Style::default().fg(Color::White),
                ),
              ])];

              if let Some(detail) = &entry.detail {
                lines.push(Line::from(vec![
                  Span::raw(BASE_INDENT),
                  Span::styled(
                    detail.clone(),
                    Style::default().fg(Color::DarkGray),
                  ),
                ]));
              }

              lines.push(Line::from(Span::raw(BASE_INDENT)));

              ListItem::new(lines)
            })
            .collect()
        };

        (list_items, view.selected_index(), view.offset())
      }
      ScreenState::Error(message) => (
        vec![ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(message.clone(), Style::default().fg(Color::Red)),
        ]))],
        None,
        0,
      ),
      ScreenState::Idle => (vec![Self::placeholder_item(IDLE_HINT)], None, 0),
      ScreenState::Loading => {
        (vec![Self::placeholder_item(LOADING_SEARCH_STATUS)], None, 0)
      }
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    self.state.set_list_offset(list_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchSearchResults { query } => {
        let (repository, sender) =
          (self.repository.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::SearchResults {
            result: repository.search(&query).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_toast(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_toast(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(repository: Arc<dyn Repository>) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      repository,
      state: State::new(),
    }
  }

  fn placeholder_item(text: &str) -> ListItem {
    ListItem::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::raw(text.to_string()),
    ]))
  }

  fn process_pending_events(&mut self) {
    self.state.update_toast();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.search_input_command(key) {
        command
      } else {
        self.state.mode().handle_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
