use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    model::champselect::{ChampSelectCell, ChampSelectSession},
    model::ids::{ChampionId, SpellId},
    service::assets::AssetStore,
    ui::app::App,
};

pub(crate) fn render(frame: &mut Frame, app: &App, assets: &AssetStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("Champ Select Mirror")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    match &app.session {
        None => {
            let paragraph = Paragraph::new("\n  Connecting to League client...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, chunks[0]);
        }
        Some(Err(message)) => {
            let paragraph = Paragraph::new(format!("\n  Not in champ select!\n\n  {}", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, chunks[0]);
        }
        Some(Ok(session)) => {
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);
            render_session(frame, inner, session, assets);
        }
    }

    let footer = Paragraph::new("Esc: back    (refreshes every 2s)").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}

fn render_session(frame: &mut Frame, area: Rect, session: &ChampSelectSession, assets: &AssetStore) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let bans = Paragraph::new(vec![
        Line::from(format!("Bans:       {}", ban_list(&session.my_team_bans, assets))),
        Line::from(format!("Enemy bans: {}", ban_list(&session.their_team_bans, assets))),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bans, rows[0]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_team(frame, halves[0], "Your Team", &session.my_team, assets);
    render_team(frame, halves[1], "Enemy Team", &session.their_team, assets);
}

fn render_team(frame: &mut Frame, area: Rect, title: &str, team: &[ChampSelectCell], assets: &AssetStore) {
    let mut lines = Vec::new();
    for cell in team {
        lines.extend(cell_lines(cell, assets));
        lines.push(Line::from(""));
    }
    if team.is_empty() {
        lines.push(Line::from("No players visible."));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title.to_string()),
    );
    frame.render_widget(paragraph, area);
}

fn cell_lines(cell: &ChampSelectCell, assets: &AssetStore) -> Vec<Line<'static>> {
    let position = if cell.position.is_empty() { "?" } else { cell.position.as_str() };
    let icon = match assets.champion_icon(cell.champion) {
        Some(path) => path.display().to_string(),
        None => "unavailable".to_string(),
    };

    vec![
        Line::styled(
            format!("[{}] {} ({})", cell.cell_id, champion_label(cell.champion, assets), position),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(format!(
            "    Spells: {} / {}",
            spell_label(cell.spell1, assets),
            spell_label(cell.spell2, assets)
        )),
        Line::styled(format!("    Icon: {}", icon), Style::default().fg(Color::DarkGray)),
    ]
}

fn ban_list(bans: &[ChampionId], assets: &AssetStore) -> String {
    if bans.is_empty() {
        return "none".to_string();
    }
    bans.iter()
        .map(|id| champion_label(*id, assets))
        .collect::<Vec<_>>()
        .join(", ")
}

fn champion_label(id: ChampionId, assets: &AssetStore) -> String {
    if id.value() == 0 {
        return "(not picked)".to_string();
    }
    match assets.champion_name(id) {
        Some(name) => name.to_string(),
        None => format!("Champion #{}", id),
    }
}

fn spell_label(id: SpellId, assets: &AssetStore) -> String {
    if id.value() == 0 {
        return "none".to_string();
    }
    // The icon lookup doubles as the download trigger; the file stem is the
    // spell's canonical name.
    match assets.spell_icon(id) {
        Some(path) => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| id.to_string()),
        None => format!("Spell #{}", id),
    }
}
