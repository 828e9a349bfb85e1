use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::format;
use crate::sprite;
use crate::sprite_backend;
use crate::state::{AppState, PokemonCard};

const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);

/// Uniform message for every failure kind; the distinction lives in the
/// debug overlay and the recorded action log, not here
const ERROR_TEXT: &str = "Pokemon not found. Check the name or number.";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct CardBody;

pub struct CardBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for CardBody {
    type Props<'a> = CardBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match CardView::from_state(props.state) {
            CardView::Ready(card) => render_ready(frame, area, props.state, card),
            CardView::Error => {
                sprite_backend::clear_sprite();
                render_error(frame, area);
            }
            CardView::Loading => {
                sprite_backend::clear_sprite();
                render_loading(frame, area, props.state);
            }
            CardView::Empty => {
                sprite_backend::clear_sprite();
                render_empty(frame, area, props.state);
            }
        }
    }
}

/// Exactly one of these is visible at a time
enum CardView<'a> {
    Ready(&'a PokemonCard),
    Error,
    Loading,
    Empty,
}

impl<'a> CardView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.card {
            DataResource::Loaded(card) => CardView::Ready(card),
            DataResource::Failed(_) => CardView::Error,
            DataResource::Loading => CardView::Loading,
            DataResource::Empty => CardView::Empty,
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, card: &PokemonCard) {
    let sprite_rows = area.height.saturating_sub(8).min(14);
    let chunks = Layout::vertical([
        Constraint::Length(1), // name + number
        Constraint::Length(1),
        Constraint::Length(sprite_rows),
        Constraint::Length(1),
        Constraint::Length(1), // height
        Constraint::Length(1), // weight
        Constraint::Length(1), // types
    ])
    .flex(Flex::Center)
    .split(area);

    let title = Line::from(vec![
        Span::styled(
            format::capitalize(&card.name),
            Style::default().fg(TEXT_MAIN).bold(),
        ),
        Span::raw("  "),
        Span::styled(format::dex_number(card.id), Style::default().fg(ACCENT_TEAL)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(title), chunks[0]);

    render_sprite(frame, chunks[2], state, card);

    frame.render_widget(
        Paragraph::new(detail_row("Height", format::height_m(card.height))),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(detail_row("Weight", format::weight_kg(card.weight))),
        chunks[5],
    );
    frame.render_widget(
        Paragraph::new(detail_row("Type", format::type_list(&card.types))),
        chunks[6],
    );
}

fn detail_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}  "), Style::default().fg(TEXT_DIM)),
        Span::styled(value, Style::default().fg(TEXT_MAIN)),
    ])
    .centered()
}

/// Place the decoded sprite in the box, or fall back to the alt text
fn render_sprite(frame: &mut Frame, area: Rect, state: &AppState, card: &PokemonCard) {
    if let Some(sprite) = state.sprite.as_ref() {
        if area.width > 0 && area.height > 0 {
            let (cols, rows) = sprite::fit(sprite, area.width, area.height);
            if let Ok(sequence) = sprite::kitty_sequence(sprite, cols, rows) {
                let offset_x = area.x.saturating_add(area.width.saturating_sub(cols) / 2);
                let offset_y = area.y.saturating_add(area.height.saturating_sub(rows) / 2);
                sprite_backend::show_sprite(offset_x, offset_y, sequence);
                return;
            }
        }
    }

    sprite_backend::clear_sprite();
    if area.height == 0 {
        return;
    }
    let alt = format!("{} sprite", format::capitalize(&card.name));
    let line_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(alt, Style::default().fg(TEXT_DIM))]).centered(),
        ),
        line_area,
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // spinner + message
        Constraint::Length(1),
        Constraint::Length(1), // identifier
    ])
    .flex(Flex::Center)
    .split(area);

    let frame_index = state.tick_count as usize % SPINNER_FRAMES.len();
    let message = Line::from(vec![
        Span::styled(SPINNER_FRAMES[frame_index], Style::default().fg(ACCENT_TEAL)),
        Span::styled(" Loading...", Style::default().fg(TEXT_DIM)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(message), chunks[0]);

    let identifier = Line::from(vec![Span::styled(
        state.identifier.clone(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(identifier), chunks[2]);
}

fn render_error(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                ERROR_TEXT,
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(TEXT_DIM)),
                Span::styled("r", Style::default().fg(ACCENT_TEAL).bold()),
                Span::styled(" to retry or ", Style::default().fg(TEXT_DIM)),
                Span::styled("/", Style::default().fg(ACCENT_TEAL).bold()),
                Span::styled(" to search", Style::default().fg(TEXT_DIM)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}

fn render_empty(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let line = match state.prompt.as_deref() {
        Some(prompt) => Line::from(vec![Span::styled(
            prompt.to_string(),
            Style::default().fg(ACCENT_GOLD),
        )])
        .centered(),
        None => Line::from(vec![
            Span::styled("Press ", Style::default().fg(TEXT_DIM)),
            Span::styled("/", Style::default().fg(ACCENT_TEAL).bold()),
            Span::styled(" to look up a Pokemon", Style::default().fg(TEXT_DIM)),
        ])
        .centered(),
    };
    frame.render_widget(Paragraph::new(line), chunks[0]);
}
