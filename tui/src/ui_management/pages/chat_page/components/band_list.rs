use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    prelude::{Backend, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use super::super::section::{
    usage::{HasUsageInfo, UsageInfo, UsageInfoLine},
    SectionActivation,
};
use crate::{
    config::Band,
    state_store::{action::Action, State},
    ui_management::components::{Component, ComponentRender},
};

struct Props {
    /// Bands the user can join
    bands: Vec<Band>,
    /// Id of the band the user is chatting in
    active_band: Option<String>,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        Self {
            bands: state.bands.clone(),
            active_band: state.active_band.clone(),
        }
    }
}

pub struct BandList {
    /// Sending actions to the state store
    action_tx: UnboundedSender<Action>,
    /// State Mapped BandList Props
    props: Props,
    // Internal Component State
    /// List with optional selection and current offset
    pub list_state: ListState,
}

impl BandList {
    fn next(&mut self) {
        if self.props.bands.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.props.bands.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.props.bands.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => self.props.bands.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn get_band_idx(&self, id: &str) -> Option<usize> {
        self.props.bands.iter().position(|band| band.id == id)
    }

    fn selected_band(&self) -> Option<&Band> {
        self.list_state
            .selected()
            .and_then(|idx| self.props.bands.get(idx))
    }
}

impl Component for BandList {
    fn new(state: &State, action_tx: UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            props: Props::from(state),
            //
            list_state: ListState::default(),
        }
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self {
            props: Props::from(state),
            ..self
        }
    }

    fn name(&self) -> &str {
        "Band List"
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Up => {
                self.previous();
            }
            KeyCode::Down => {
                self.next();
            }
            KeyCode::Enter => {
                if let Some(band) = self.selected_band().cloned() {
                    // the store only goes away on shutdown
                    let _ = self.action_tx.send(Action::JoinBand(band));
                }
            }
            _ => (),
        }
    }
}

impl SectionActivation for BandList {
    fn activate(&mut self) {
        let idx: usize = self
            .props
            .active_band
            .as_ref()
            .and_then(|band_id| self.get_band_idx(band_id))
            .unwrap_or(0);

        *self.list_state.offset_mut() = 0;
        self.list_state.select(Some(idx));
    }

    fn deactivate(&mut self) {
        *self.list_state.offset_mut() = 0;
        self.list_state.select(None);
    }
}

pub struct RenderProps {
    pub border_color: Color,
    pub area: Rect,
}

impl ComponentRender<RenderProps> for BandList {
    fn render<B: Backend>(&self, frame: &mut Frame<B>, props: RenderProps) {
        let band_list: Vec<ListItem> = self
            .props
            .bands
            .iter()
            .map(|band| {
                let content = Line::from(Span::raw(format!("#{}", band.name)));

                let is_active = self.props.active_band.as_deref() == Some(band.id.as_str());
                let style = if self.list_state.selected().is_none() && is_active {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(content).style(style.bg(Color::Reset))
            })
            .collect();

        let band_list = List::new(band_list)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(props.border_color))
                    .title("Bands"),
            )
            .highlight_style(
                Style::default()
                    // yellow that would work for both dark / light modes
                    .bg(Color::Rgb(255, 223, 102))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(band_list, props.area, &mut list_state);
    }
}

impl HasUsageInfo for BandList {
    fn usage_info(&self) -> UsageInfo {
        UsageInfo {
            description: Some("Select the band to chat with".into()),
            lines: vec![
                UsageInfoLine {
                    keys: vec!["Esc".into()],
                    description: "to cancel".into(),
                },
                UsageInfoLine {
                    keys: vec!["↑".into(), "↓".into()],
                    description: "to navigate".into(),
                },
                UsageInfoLine {
                    keys: vec!["Enter".into()],
                    description: "to join the band".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    use super::*;

    fn state() -> State {
        State::new(
            "localhost:8080",
            vec![Band::new("1", "Jazz Band"), Band::new("2", "Rock Band")],
        )
    }

    fn press(band_list: &mut BandList, code: KeyCode) {
        band_list.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn navigation_wraps_around() {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let mut band_list = BandList::new(&state(), action_tx);
        band_list.activate();
        assert_eq!(band_list.list_state.selected(), Some(0));

        press(&mut band_list, KeyCode::Up);
        assert_eq!(band_list.list_state.selected(), Some(1));

        press(&mut band_list, KeyCode::Down);
        assert_eq!(band_list.list_state.selected(), Some(0));
    }

    #[test]
    fn enter_joins_the_selected_band() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut band_list = BandList::new(&state(), action_tx);
        band_list.activate();

        press(&mut band_list, KeyCode::Down);
        press(&mut band_list, KeyCode::Enter);

        assert_eq!(
            action_rx.try_recv().unwrap(),
            Action::JoinBand(Band::new("2", "Rock Band"))
        );
    }

    #[test]
    fn activation_selects_the_active_band() {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let mut state = state();
        state.active_band = Some("2".into());
        let mut band_list = BandList::new(&state, action_tx);

        band_list.activate();

        assert_eq!(band_list.list_state.selected(), Some(1));
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut band_list = BandList::new(&State::new("localhost:8080", vec![]), action_tx);

        press(&mut band_list, KeyCode::Down);
        press(&mut band_list, KeyCode::Enter);

        assert_eq!(band_list.list_state.selected(), None);
        assert!(action_rx.try_recv().is_err());
    }
}
