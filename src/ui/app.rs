use std::{
    io::stdout,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    model::champselect::ChampSelectSession,
    model::rank::RankedOverview,
    service::{
        assets::AssetStore,
        lcu::{client::LcuClient, locator::SessionLocator},
        riot::client::RiotApiClient,
    },
    ui::views,
};

use super::UiError;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

pub struct Services<L: SessionLocator> {
    pub riot: RiotApiClient,
    pub assets: AssetStore,
    pub lcu: LcuClient<L>,
}

pub(crate) enum Screen {
    Search,
    ChampSelect,
}

#[derive(PartialEq, Eq)]
pub(crate) enum Focus {
    Name,
    Tag,
}

pub(crate) enum SearchOutcome {
    Idle,
    Message(String),
    Ranks(RankedOverview),
}

pub(crate) struct App {
    pub(crate) screen: Screen,
    pub(crate) focus: Focus,
    pub(crate) name_input: String,
    pub(crate) tag_input: String,
    pub(crate) outcome: SearchOutcome,
    pub(crate) flex_visible: bool,
    pub(crate) session: Option<Result<ChampSelectSession, String>>,
    last_poll: Option<Instant>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            screen: Screen::Search,
            focus: Focus::Name,
            name_input: String::new(),
            tag_input: String::new(),
            outcome: SearchOutcome::Idle,
            flex_visible: false,
            session: None,
            last_poll: None,
            should_quit: false,
        }
    }

    fn run<L: SessionLocator>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        services: &Services<L>,
    ) -> Result<(), UiError> {
        loop {
            // Polling state: every due tick does a full fetch including
            // credential rediscovery, with no backoff on failure.
            if matches!(self.screen, Screen::ChampSelect) {
                let due = self.last_poll.map_or(true, |at| at.elapsed() >= POLL_INTERVAL);
                if due {
                    self.session = Some(services.lcu.get_champ_select().map_err(|err| err.to_string()));
                    self.last_poll = Some(Instant::now());
                }
            }

            terminal.draw(|frame| views::render(frame, self, &services.assets))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code, services);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key<L: SessionLocator>(&mut self, code: KeyCode, services: &Services<L>) {
        match self.screen {
            Screen::Search => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => {
                    self.focus = match self.focus {
                        Focus::Name => Focus::Tag,
                        Focus::Tag => Focus::Name,
                    }
                }
                KeyCode::Enter => self.on_search(services),
                KeyCode::F(2) => self.toggle_flex(),
                KeyCode::F(3) => self.enter_champ_select(),
                KeyCode::Backspace => {
                    self.focused_input_mut().pop();
                }
                KeyCode::Char(c) => self.focused_input_mut().push(c),
                _ => {}
            },
            Screen::ChampSelect => match code {
                // Back to idle; the poll timer stops with the screen.
                KeyCode::Esc | KeyCode::Char('q') => self.leave_champ_select(),
                _ => {}
            },
        }
    }

    // The flex panel only exists once a search produced a flex standing;
    // without one the toggle stays inert, like the hidden toggle button.
    fn toggle_flex(&mut self) {
        if self.has_flex() {
            self.flex_visible = !self.flex_visible;
        }
    }

    pub(crate) fn has_flex(&self) -> bool {
        matches!(&self.outcome, SearchOutcome::Ranks(overview) if overview.flex.is_some())
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Name => &mut self.name_input,
            Focus::Tag => &mut self.tag_input,
        }
    }

    fn enter_champ_select(&mut self) {
        self.screen = Screen::ChampSelect;
        self.session = None;
        self.last_poll = None;
    }

    fn leave_champ_select(&mut self) {
        self.screen = Screen::Search;
        self.session = None;
        self.last_poll = None;
    }

    fn on_search<L: SessionLocator>(&mut self, services: &Services<L>) {
        self.flex_visible = false;

        let name = self.name_input.trim().to_string();
        let tag = self.tag_input.trim().to_string();
        if name.is_empty() || tag.is_empty() {
            self.outcome = SearchOutcome::Message("Please enter both Name and Tag line".to_string());
            return;
        }

        let puuid = match services.riot.resolve_account(&name, &tag) {
            Ok(puuid) => puuid,
            Err(err) => {
                self.outcome = SearchOutcome::Message(format!("Error getting PUUID:\n{}", err));
                return;
            }
        };

        match services.riot.fetch_standings(&puuid) {
            Ok(overview) => self.outcome = SearchOutcome::Ranks(overview),
            Err(err) => self.outcome = SearchOutcome::Message(format!("Error getting ranked data:\n{}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::rank::RankedStanding;

    use super::*;

    fn gold_standing() -> RankedStanding {
        RankedStanding {
            tier: "GOLD".to_string(),
            division: "II".to_string(),
            league_points: 54,
            wins: 10,
            losses: 8,
        }
    }

    #[test]
    fn flex_toggle_is_inert_without_a_flex_standing() {
        let mut app = App::new();
        app.outcome = SearchOutcome::Ranks(RankedOverview {
            solo: Some(gold_standing()),
            flex: None,
        });

        app.toggle_flex();
        assert!(!app.flex_visible);
    }

    #[test]
    fn flex_toggle_flips_once_a_flex_standing_exists() {
        let mut app = App::new();
        app.outcome = SearchOutcome::Ranks(RankedOverview {
            solo: None,
            flex: Some(gold_standing()),
        });

        app.toggle_flex();
        assert!(app.flex_visible);
        app.toggle_flex();
        assert!(!app.flex_visible);
    }
}

pub fn run<L: SessionLocator>(services: Services<L>) -> Result<(), UiError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal, &services);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
