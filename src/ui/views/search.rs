use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    model::rank::{RankedOverview, RankedStanding},
    service::assets::AssetStore,
    ui::app::{App, Focus, SearchOutcome},
};

use super::title_case;

pub(crate) fn render(frame: &mut Frame, app: &App, assets: &AssetStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    render_form(frame, chunks[0], app, assets);
    render_outcome(frame, chunks[1], app, assets);
    render_footer(frame, chunks[2], app);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App, assets: &AssetStore) {
    let marker = |focus: Focus| if app.focus == focus { "► " } else { "  " };
    let lines = vec![
        Line::from(format!("{}Name:        {}", marker(Focus::Name), app.name_input)),
        Line::from(format!("{}Tag Line #:  {}", marker(Focus::Tag), app.tag_input)),
    ];

    let title = match assets.patch() {
        Some(patch) => format!("League Summoner Tracker (patch {})", patch),
        None => "League Summoner Tracker (patch unknown)".to_string(),
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(form, area);
}

fn render_outcome(frame: &mut Frame, area: Rect, app: &App, assets: &AssetStore) {
    match &app.outcome {
        SearchOutcome::Idle => {
            let hint = Paragraph::new("\n  Enter a Riot ID and press Enter.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
        }
        SearchOutcome::Message(message) => {
            let paragraph = Paragraph::new(format!("\n{}", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(panel_block("Solo/Duo"));
            frame.render_widget(paragraph, area);
        }
        SearchOutcome::Ranks(overview) => render_rank_panels(frame, area, app, assets, overview),
    }
}

// The solo panel is always shown after a search; the flex panel stays hidden
// until toggled with F2.
fn render_rank_panels(frame: &mut Frame, area: Rect, app: &App, assets: &AssetStore, overview: &RankedOverview) {
    if app.flex_visible {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        render_standing(frame, halves[0], "Solo/Duo", "Solo", &overview.solo, assets);
        render_standing(frame, halves[1], "Flex", "Flex", &overview.flex, assets);
    } else {
        render_standing(frame, area, "Solo/Duo", "Solo", &overview.solo, assets);
    }
}

fn render_standing(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    label: &str,
    standing: &Option<RankedStanding>,
    assets: &AssetStore,
) {
    let lines = match standing {
        Some(standing) => {
            let emblem = assets.emblem_path(&standing.tier);
            vec![
                Line::from(""),
                Line::styled(
                    format!(
                        "{} {} - {} LP",
                        title_case(&standing.tier),
                        standing.division,
                        standing.league_points
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::from(format!("Wins: {}  Losses: {}", standing.wins, standing.losses)),
                Line::from(""),
                Line::styled(
                    format!("Emblem: {}", emblem.display()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        }
        None => vec![Line::from(""), Line::from(format!("{} Rank: Unranked", label))],
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel_block(title));
    frame.render_widget(paragraph, area);
}

fn panel_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title.to_string())
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec!["Tab: switch field", "Enter: search"];
    if app.has_flex() {
        hints.push(if app.flex_visible {
            "F2: hide flex ranking"
        } else {
            "F2: show flex ranking"
        });
    }
    hints.push("F3: champ select");
    hints.push("Esc: quit");

    let footer = Paragraph::new(hints.join("    ")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
