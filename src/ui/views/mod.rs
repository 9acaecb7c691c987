use ratatui::Frame;

use crate::service::assets::AssetStore;
use crate::ui::app::{App, Screen};

pub mod champselect;
pub mod search;

pub(crate) fn render(frame: &mut Frame, app: &App, assets: &AssetStore) {
    match app.screen {
        Screen::Search => search::render(frame, app, assets),
        Screen::ChampSelect => champselect::render(frame, app, assets),
    }
}

/// "GOLD" to "Gold", for display next to the emblem.
pub(crate) fn title_case(tier: &str) -> String {
    let mut chars = tier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_title_cased() {
        assert_eq!(title_case("GOLD"), "Gold");
        assert_eq!(title_case("GRANDMASTER"), "Grandmaster");
        assert_eq!(title_case(""), "");
    }
}
