use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    model::card::Card,
    service::render::Presenter,
    styled_line,
    ui::ACCENT,
};

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 4;

/// Card grid drawn into the terminal. Holds every presented card and a selection cursor.
#[derive(Debug, Default)]
pub struct TerminalGrid {
    cards: Vec<Card>,
    selected: usize,
    columns: usize,
    scroll_row: usize,
}

impl Presenter for TerminalGrid {
    fn present(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
        self.selected = 0;
        self.scroll_row = 0;
    }
}

impl TerminalGrid {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selected(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns.max(1));
    }

    pub fn move_down(&mut self) {
        let next = self.selected + self.columns.max(1);
        if next < self.cards.len() {
            self.selected = next;
        }
    }

    pub fn columns_for(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        self.columns = Self::columns_for(area.width);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // Keep the selected row on screen
        let selected_row = self.selected / self.columns;
        if selected_row < self.scroll_row {
            self.scroll_row = selected_row;
        } else if selected_row >= self.scroll_row + visible_rows {
            self.scroll_row = selected_row + 1 - visible_rows;
        }

        let first = self.scroll_row * self.columns;
        let last = (first + visible_rows * self.columns).min(self.cards.len());

        for (offset, card) in self.cards[first.min(last)..last].iter().enumerate() {
            let row = (offset / self.columns) as u16;
            let col = (offset % self.columns) as u16;
            let cell = Rect::new(
                area.x + col * CARD_WIDTH,
                area.y + row * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            )
            .intersection(area);

            let is_selected = first + offset == self.selected;
            frame.render_widget(card_widget(card, is_selected), cell);
        }
    }
}

fn card_widget(card: &Card, selected: bool) -> Paragraph<'static> {
    let border_style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line<'static>> = vec![
        styled_line!(card.label.clone(); Bold Color::White),
        styled_line!(image_ref(card); Color::DarkGray),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("[{}]", card.image_alt)),
    )
}

/// Short image reference that fits the card, e.g. `img/champion/Ahri.jpg`.
fn image_ref(card: &Card) -> String {
    card.image_url
        .split_once("/cdn/")
        .map(|(_, path)| path.to_string())
        .unwrap_or_else(|| card.image_url.clone())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            label: name.to_string(),
            image_url: format!("https://ddragon.leagueoflegends.com/cdn/img/champion/{}.jpg", id),
            image_alt: name.to_string(),
        }
    }

    fn draw(grid: &mut TerminalGrid, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                grid.draw(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_every_card_once() {
        let mut grid = TerminalGrid::default();
        grid.present(&[card("1", "Ahri"), card("2", "Garen"), card("3", "Lux")]);

        let screen = draw(&mut grid, 80, 8);
        assert_eq!(screen.matches("Garen").count(), 2); // title and label
        assert!(screen.contains("img/champion/3.jpg"));
    }

    #[test]
    fn present_replaces_previous_cards() {
        let mut grid = TerminalGrid::default();
        grid.present(&[card("1", "Ahri"), card("2", "Garen")]);
        grid.present(&[card("2", "Garen")]);

        assert_eq!(grid.cards().len(), 1);
        let screen = draw(&mut grid, 80, 8);
        assert!(!screen.contains("Ahri"));
    }

    #[test]
    fn selection_moves_by_rows() {
        let mut grid = TerminalGrid::default();
        grid.present(&(0..7).map(|i| card(&i.to_string(), "X")).collect::<Vec<_>>());
        draw(&mut grid, CARD_WIDTH * 3, 20);

        grid.move_down();
        assert_eq!(grid.selected().unwrap().id, "3");
        grid.move_down();
        assert_eq!(grid.selected().unwrap().id, "6");
        grid.move_down();
        assert_eq!(grid.selected().unwrap().id, "6");
        grid.move_right();
        assert_eq!(grid.selected().unwrap().id, "6");
        grid.move_up();
        grid.move_left();
        assert_eq!(grid.selected().unwrap().id, "2");
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let mut grid = TerminalGrid::default();
        grid.present(&[card("1", "Ahri"), card("2", "Garen"), card("3", "Lux")]);

        // One column, one row of cards on screen
        draw(&mut grid, CARD_WIDTH, CARD_HEIGHT);
        grid.move_down();
        grid.move_down();
        let screen = draw(&mut grid, CARD_WIDTH, CARD_HEIGHT);

        assert!(screen.contains("Lux"));
        assert!(!screen.contains("Ahri"));
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let mut grid = TerminalGrid::default();
        grid.present(&[]);
        assert!(grid.selected().is_none());
        draw(&mut grid, 40, 10);
    }
}
