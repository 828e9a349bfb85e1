use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{CardBody, CardBodyProps, Component};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for CardDisplay - read-only view of state
pub struct CardDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main card display component
#[derive(Default)]
pub struct CardDisplay;

impl Component<Action> for CardDisplay {
    type Props<'a> = CardDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::LookupRetry),
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: CardDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Card body
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut body = CardBody;
        body.render(frame, chunks[0], CardBodyProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("r", "retry"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PokemonCard;
    use tui_dispatch::testing::*;

    fn mock_card() -> PokemonCard {
        PokemonCard {
            id: 25,
            name: "pikachu".into(),
            height: 4,
            weight: 60,
            types: vec!["electric".into()],
            sprite_url: None,
        }
    }

    #[test]
    fn test_handle_event_retry() {
        let mut component = CardDisplay;
        let state = AppState::default();
        let props = CardDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::LookupRetry);
    }

    #[test]
    fn test_handle_event_open_search() {
        let mut component = CardDisplay;
        let state = AppState::default();
        let props = CardDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("/")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchOpen);
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = CardDisplay;
        let state = AppState::default();
        let props = CardDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("q")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = CardDisplay;
        let state = AppState::default();
        let props = CardDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_card() {
        use tui_dispatch::DataResource;

        let mut render = RenderHarness::new(60, 24);
        let mut component = CardDisplay;

        let state = AppState {
            card: DataResource::Loaded(mock_card()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = CardDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Pikachu"));
        assert!(output.contains("#025"));
    }

    #[test]
    fn test_render_loading() {
        use tui_dispatch::DataResource;

        let mut render = RenderHarness::new(60, 24);
        let mut component = CardDisplay;

        let state = AppState {
            card: DataResource::Loading,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = CardDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Loading"));
    }
}
