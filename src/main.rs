use {
  app::App,
  client::GitHubClient,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  details_view::DetailsView,
  effect::Effect,
  event::Event,
  fake_repository::FakeRepository,
  help_view::HelpView,
  list_entry::ListEntry,
  list_view::ListView,
  mode::Mode,
  owner::Owner,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  repository::Repository,
  screen_state::ScreenState,
  search_input::SearchInput,
  search_response::SearchResponse,
  search_result::SearchResult,
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal, Stdout},
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
  toast::Toast,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  utils::{format_stars, truncate},
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod details_view;
mod effect;
mod event;
mod fake_repository;
mod help_view;
mod list_entry;
mod list_view;
mod mode;
mod owner;
mod repository;
mod screen_state;
mod search_input;
mod search_response;
mod search_result;
mod state;
mod toast;
mod utils;

const RESULTS_STATUS: &str = "↑/k up • ↓/j down • enter details • o open repo • / search • q/esc quit • ? help";

const DETAILS_STATUS: &str = "+/= increment • -/_ decrement • esc back • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const IDLE_HINT: &str = "Press / to search GitHub repositories.";
const LOADING_SEARCH_STATUS: &str = "Searching...";

const BLANK_QUERY_MESSAGE: &str = "Enter a search word";

const NULL_FIELDS_ERROR: &str = "Search results or total count are null";
const UNSUCCESSFUL_RESPONSE_ERROR: &str = "Response is null or unsuccessful";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Results:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to the first result
  end     jump to the last result

Actions:
  /       start a search (type to edit, enter to submit)
  enter   open the details screen
  o       open the selected repository in your browser
  q       quit ghs
  esc     close help or quit from the results
  ?       toggle this help

Details:
  + / =   increment the counter
  - / _   decrement the counter
  esc     return to the results
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let repository: Arc<dyn Repository> = if cfg!(feature = "fake") {
    Arc::new(FakeRepository)
  } else {
    Arc::new(GitHubClient::default())
  };

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(repository);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
