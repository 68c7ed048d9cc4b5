use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::{
    model::{champion::Champion, item::Item},
    styled_line, styled_span,
    ui::{labels::Labels, ACCENT},
};

pub fn details_lines(champ: &Champion, labels: &Labels) -> Vec<Line<'static>> {
    let details = champ.details();
    let mut lines = Vec::new();

    match &details.title {
        Some(title) => lines.push(styled_line!(LIST [
            styled_span!(champ.name; Bold ACCENT),
            styled_span!(", {}", title),
        ])),
        None => lines.push(styled_line!(champ.name; Bold ACCENT)),
    }
    if !details.tags.is_empty() {
        lines.push(styled_line!(details.tags.join(", "); Color::DarkGray));
    }

    if let Some(blurb) = &details.blurb {
        lines.push(styled_line!());
        lines.push(styled_line!(blurb));
    }

    if !details.spells.is_empty() {
        lines.push(styled_line!());
        lines.push(styled_line!(labels.skills; Bold Color::White));
        for (name, description) in &details.spells {
            lines.push(styled_line!(LIST [
                styled_span!("  • {}: ", name; Color::Cyan),
                styled_span!(description),
            ]));
        }
    }

    if !details.skins.is_empty() {
        lines.push(styled_line!());
        lines.push(styled_line!(labels.skins; Bold Color::White));
        for skin in &details.skins {
            lines.push(styled_line!("  • {}", skin));
        }
    }

    lines
}

pub fn item_details_lines(item: &Item, labels: &Labels) -> Vec<Line<'static>> {
    let details = item.details();
    let mut lines = vec![styled_line!(item.name; Bold ACCENT)];

    if !item.tags.is_empty() {
        lines.push(styled_line!(item.tags.join(", "); Color::DarkGray));
    }

    let mut price = format!("{}: {}", labels.gold, item.gold_total);
    if let Some(sell) = details.gold_sell {
        price.push_str(&format!(", {} {}", labels.sell, sell));
    }
    lines.push(styled_line!(price; Color::Yellow));

    if let Some(plaintext) = &details.plaintext {
        lines.push(styled_line!());
        lines.push(styled_line!(plaintext; Bold Color::White));
    }

    if let Some(description) = &details.description {
        lines.push(styled_line!());
        for line in plain_lines(description) {
            lines.push(styled_line!(line));
        }
    }

    lines
}

/// Item descriptions carry markup like `<stats>` and `<br>`; keep the text, one line per break.
fn plain_lines(markup: &str) -> Vec<String> {
    let mut text = String::new();
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => {
                let tag = rest[start + 1..start + end].trim_end_matches('/').trim();
                if tag.eq_ignore_ascii_case("br") {
                    text.push('\n');
                }
                rest = &rest[start + end + 1..];
            }
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }
    text.push_str(rest);

    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn draw_details(frame: &mut Frame, area: Rect, champ: &Champion, labels: &Labels, scroll: u16) {
    draw_popup(frame, area, &champ.name, details_lines(champ, labels), scroll);
}

pub fn draw_item_details(frame: &mut Frame, area: Rect, item: &Item, labels: &Labels, scroll: u16) {
    draw_popup(frame, area, &item.name, item_details_lines(item, labels), scroll);
}

fn draw_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, scroll: u16) {
    let popup = centered(area, 80, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .title(title.to_string())
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(ACCENT));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ids::LanguageCode, ui::labels::labels_for};

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn full_record() {
        let mut champ = Champion::new("Garen", "Garen");
        champ.extra = json::parse(
            r#"{"title": "the Might of Demacia", "tags": ["Fighter", "Tank"],
                "blurb": "A proud and noble warrior.",
                "spells": [{"name": "Decisive Strike", "description": "Breaks free of slows."}],
                "skins": [{"name": "default"}, {"name": "Sanguine Garen"}]}"#,
        )
        .unwrap();

        let lines = text(&details_lines(&champ, labels_for(None)));
        assert_eq!(lines[0], "Garen, the Might of Demacia");
        assert_eq!(lines[1], "Fighter, Tank");
        assert!(lines.contains(&"A proud and noble warrior.".to_string()));
        assert!(lines.contains(&"Skills".to_string()));
        assert!(lines.contains(&"  • Decisive Strike: Breaks free of slows.".to_string()));
        assert!(lines.contains(&"  • Sanguine Garen".to_string()));
    }

    #[test]
    fn headers_follow_language() {
        let mut champ = Champion::new("Ahri", "Ahri");
        champ.extra = json::parse(r#"{"skins": [{"name": "default"}]}"#).unwrap();

        let lines = text(&details_lines(&champ, labels_for(Some(&LanguageCode::from("pl_PL")))));
        assert!(lines.contains(&"Skórki".to_string()));
    }

    #[test]
    fn bare_record_is_just_the_name() {
        let lines = text(&details_lines(&Champion::new("1", "Ahri"), labels_for(None)));
        assert_eq!(lines, vec!["Ahri"]);
    }

    #[test]
    fn item_record_without_markup() {
        let mut item = Item::new("3031", "Infinity Edge", 3400).with_tags(&["Damage", "CriticalStrike"]);
        item.extra = json::parse(
            r#"{"plaintext": "Massively enhances critical strikes",
                "description": "<mainText><stats><attention>65</attention> Attack Damage</stats><br><br><passive>Perfection</passive><br/>Bonus crit damage.</mainText>",
                "gold": {"base": 1225, "total": 3400, "sell": 2380}}"#,
        )
        .unwrap();

        let lines = text(&item_details_lines(&item, labels_for(None)));
        assert_eq!(
            lines,
            vec![
                "Infinity Edge",
                "Damage, CriticalStrike",
                "Gold: 3400, sells for 2380",
                "",
                "Massively enhances critical strikes",
                "",
                "65 Attack Damage",
                "Perfection",
                "Bonus crit damage.",
            ]
        );
    }

    #[test]
    fn bare_item_shows_name_and_price_in_polish() {
        let lines = text(&item_details_lines(
            &Item::new("1001", "Buty", 300),
            labels_for(Some(&LanguageCode::from("pl_PL"))),
        ));
        assert_eq!(lines, vec!["Buty", "Złoto: 300"]);
    }

    #[test]
    fn unclosed_markup_is_kept_as_text() {
        assert_eq!(plain_lines("Heals <b>50</b> health <3"), vec!["Heals 50 health <3"]);
    }
}
