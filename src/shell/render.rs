//! Screen rendering with ratatui widgets.
//!
//! `draw` is a pure function of the `App` and the `View` overlay state; the
//! runner calls it once per event loop turn.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::cards::Deck;
use crate::core::DeckLevel;

use super::app::{App, Screen};
use super::assets::{deck_back_image, COVER_IMAGE};
use super::command::HELP;
use super::View;

pub const TITLE: &str = "Getting To Know Someone, Deeply";

const CARD_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame, app: &App, view: &View) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, main_area, notice_area, hint_area] = layout.areas(frame.area());

    let music = if app.music_on { "music on" } else { "music off" };
    frame.render_widget(
        Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {}", music)),
        ]),
        title_area,
    );

    match app.screen {
        Screen::Loading => draw_loading(frame, main_area),
        Screen::Picker => draw_picker(frame, main_area, app),
        Screen::Transition(level) => {
            let lines = vec![Line::raw(format!(">> [{}] >>", deck_back_image(level)))];
            draw_card_frame(frame, main_area, app.machine.deck(level), lines);
        }
        Screen::Shuffling(level) => {
            let lines = vec![
                Line::raw(format!("~~ [{}] ~~", deck_back_image(level))),
                Line::raw(""),
                Line::raw("Shuffling..."),
            ];
            draw_card_frame(frame, main_area, app.machine.deck(level), lines);
        }
        Screen::Card(level) => draw_card(frame, main_area, app, level),
    }

    if let Some(notice) = &view.notice {
        frame.render_widget(
            Span::styled(notice.as_str(), Style::default().fg(Color::Yellow)),
            notice_area,
        );
    }
    frame.render_widget(
        Span::styled(hints(app), Style::default().add_modifier(Modifier::DIM)),
        hint_area,
    );

    if view.show_help {
        draw_help(frame, main_area);
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let cover = Paragraph::new(vec![
        Line::raw(format!("[{}]", COVER_IMAGE)),
        Line::raw(""),
        Line::raw("Loading..."),
    ])
    .block(Block::bordered())
    .alignment(Alignment::Center);
    frame.render_widget(cover, area);
}

fn draw_picker(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    for (deck, column) in app.machine.table().iter().zip(columns.iter()) {
        let remaining = app.machine.remaining_count(deck.level());
        let style = if remaining == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut lines: Vec<Line> = deck.label_lines().map(Line::raw).collect();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("[{}]", deck_back_image(deck.level()))));
        lines.push(Line::raw(format!("{}/{} left", remaining, deck.len())));

        let tile = Paragraph::new(lines)
            .block(Block::bordered().title(format!(" {} ", deck.level().raw())))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(tile, *column);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App, level: DeckLevel) {
    let deck = app.machine.deck(level);
    let [card_area, count_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let lines = match app.drawn_card() {
        Some(card) if app.face_up => {
            let mut lines = vec![
                Line::raw(level.stars()),
                Line::raw(""),
                Line::styled(card.content.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                Line::raw(""),
            ];
            lines.extend(deck.label_lines().map(Line::raw));
            lines
        }
        _ => vec![Line::raw(format!("[{}]", deck_back_image(level)))],
    };
    draw_card_frame(frame, card_area, deck, lines);

    let count = format!("{} of {} cards left", app.machine.remaining_count(level), deck.len());
    frame.render_widget(
        Paragraph::new(count).alignment(Alignment::Center),
        count_area,
    );
}

fn draw_card_frame(frame: &mut Frame, area: Rect, deck: &Deck, lines: Vec<Line>) {
    let [column] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let card = Paragraph::new(lines)
        .block(Block::bordered().title(format!(" {} ", deck.label())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, column);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let height = HELP.lines().count() as u16 + 2;
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(CARD_WIDTH + 4)])
        .flex(Flex::Center)
        .areas(row);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(HELP).block(Block::bordered().title(" Help ")),
        popup,
    );
}

fn hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Loading => "q: quit",
        Screen::Picker => "0-3: pick a deck   r: reset all decks   m: music   h: help   q: quit",
        Screen::Card(_) if app.face_up && app.drawn_card().is_some() => {
            "n: draw next card   f: flip back   b: back to decks"
        }
        Screen::Card(_) => "f: flip card   b: back to decks",
        Screen::Transition(_) | Screen::Shuffling(_) => "b: back to decks",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DeckSpec, DeckTable};
    use crate::core::DrawRng;
    use crate::machine::DeckMachine;
    use crate::shell::config::Timings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(table: DeckTable) -> App {
        App::new(DeckMachine::new(table, DrawRng::new(3)), Timings::default())
    }

    fn short_table() -> DeckTable {
        let specs = (0..4)
            .map(|l| DeckSpec {
                label: format!("Level {l} - Short"),
                cards: vec![format!("Card {l}a?"), format!("Card {l}b?")],
            })
            .collect();
        DeckTable::from_specs(specs).unwrap()
    }

    fn rendered(app: &App, view: &View) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_loading_shows_cover() {
        let out = rendered(&app(short_table()), &View::default());
        assert!(out.contains("cover.jpg"));
        assert!(out.contains("Loading"));
        assert!(out.contains(TITLE));
    }

    #[test]
    fn test_picker_lists_all_decks() {
        let mut app = app(DeckTable::builtin().unwrap());
        app.screen = Screen::Picker;
        let out = rendered(&app, &View::default());
        assert!(out.contains("Warm Up"));
        assert!(out.contains("Heart to Heart"));
        assert!(out.contains("12/12 left"));
        assert!(out.contains("level3.png"));
    }

    #[test]
    fn test_face_up_card_shows_content_and_stars() {
        let mut app = app(short_table());
        let level = DeckLevel::ALL[2];
        app.machine.select_deck(level).unwrap();
        let card = app.machine.draw_card(level).unwrap();
        app.screen = Screen::Card(level);

        let hidden = rendered(&app, &View::default());
        assert!(hidden.contains("level2.png"));
        assert!(!hidden.contains(&card.content));
        assert!(hidden.contains("1 of 2 cards left"));

        app.face_up = true;
        let shown = rendered(&app, &View::default());
        assert!(shown.contains(&card.content));
        assert!(shown.contains("★"));
        assert!(shown.contains("n: draw next card"));
    }

    #[test]
    fn test_notice_and_help_overlay() {
        let mut app = app(short_table());
        app.screen = Screen::Picker;
        let view = View {
            notice: Some("All decks reshuffled.".to_string()),
            show_help: true,
        };
        let out = rendered(&app, &view);
        assert!(out.contains("All decks reshuffled."));
        assert!(out.contains("pick a deck"));
        assert!(out.contains("ctrl-c"));
    }
}
