use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*, Frame};
use tokio::sync::mpsc::UnboundedSender;
use widget::document::MessageList;

use super::{
    components::{
        band_list::{self, BandList},
        message_input_box::{self, MessageInputBox},
        message_list::{self, MessageListView},
    },
    section::{
        usage::{widget_usage_to_text, HasUsageInfo, UsageInfo, UsageInfoLine},
        SectionActivation,
    },
};
use crate::{
    state_store::{action::Action, State},
    ui_management::components::{Component, ComponentRender},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    BandList,
    MessageInput,
}

impl Section {
    pub const COUNT: usize = 2;

    fn to_usize(&self) -> usize {
        match self {
            Section::BandList => 0,
            Section::MessageInput => 1,
        }
    }
}

impl TryFrom<usize> for Section {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Section::BandList),
            1 => Ok(Section::MessageInput),
            _ => Err(()),
        }
    }
}

struct Props {
    /// Address of the chat server
    server_addr: String,
    /// Label of the joined band
    room_label: Option<String>,
    /// Seconds since connecting
    timer: usize,
    /// Rendered messages of the joined band
    messages: MessageList,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        Props {
            server_addr: state.server_addr.clone(),
            room_label: state.document.room_label().map(String::from),
            timer: state.timer,
            messages: state.document.messages.clone(),
        }
    }
}

const DEFAULT_HOVERED_SECTION: Section = Section::BandList;

/// ChatPage handles the UI and the state of the chat page
pub struct ChatPage {
    /// Action sender
    pub action_tx: UnboundedSender<Action>,
    /// State Mapped ChatPage Props
    props: Props,
    // Internal State
    /// Currently active section, handling input
    pub active_section: Option<Section>,
    /// Section that is currently hovered
    pub last_hovered_section: Section,
    // Child Components
    /// The band list widget that handles joining bands
    pub band_list: BandList,
    /// The input box widget that handles the message input
    pub message_input_box: MessageInputBox,
}

impl ChatPage {
    fn get_component_for_section<'a>(&'a self, section: &Section) -> &'a dyn Component {
        match section {
            Section::BandList => &self.band_list,
            Section::MessageInput => &self.message_input_box,
        }
    }

    fn get_component_for_section_mut<'a>(&'a mut self, section: &Section) -> &'a mut dyn Component {
        match section {
            Section::BandList => &mut self.band_list,
            Section::MessageInput => &mut self.message_input_box,
        }
    }

    fn get_section_activation_for_section<'a>(
        &'a mut self,
        section: &Section,
    ) -> &'a mut dyn SectionActivation {
        match section {
            Section::BandList => &mut self.band_list,
            Section::MessageInput => &mut self.message_input_box,
        }
    }

    fn hover_next(&mut self) {
        let idx: usize = self.last_hovered_section.to_usize();
        let next_idx = (idx + 1) % Section::COUNT;
        self.last_hovered_section = Section::try_from(next_idx).unwrap_or(DEFAULT_HOVERED_SECTION);
    }

    fn hover_previous(&mut self) {
        let idx: usize = self.last_hovered_section.to_usize();
        let previous_idx = (idx + Section::COUNT - 1) % Section::COUNT;
        self.last_hovered_section =
            Section::try_from(previous_idx).unwrap_or(DEFAULT_HOVERED_SECTION);
    }

    fn calculate_border_color(&self, section: Section) -> Color {
        match (self.active_section.as_ref(), &self.last_hovered_section) {
            (Some(active_section), _) if active_section.eq(&section) => Color::Yellow,
            (_, last_hovered_section) if last_hovered_section.eq(&section) => Color::Blue,
            _ => Color::Reset,
        }
    }

    fn activate_section(&mut self, section: Section) {
        self.get_section_activation_for_section(&section).activate();

        self.active_section = Some(section);
    }

    fn disable_section(&mut self, section: &Section) {
        self.get_section_activation_for_section(section)
            .deactivate();

        self.active_section = None;
    }
}

impl Component for ChatPage {
    fn new(state: &State, action_tx: UnboundedSender<Action>) -> Self
    where
        Self: Sized,
    {
        ChatPage {
            action_tx: action_tx.clone(),
            // set the props
            props: Props::from(state),
            // internal component state
            active_section: Option::None,
            last_hovered_section: DEFAULT_HOVERED_SECTION,
            // child components
            band_list: BandList::new(state, action_tx.clone()),
            message_input_box: MessageInputBox::new(state, action_tx),
        }
        .move_with_state(state)
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        ChatPage {
            props: Props::from(state),
            // propogate the update to the child components
            band_list: self.band_list.move_with_state(state),
            message_input_box: self.message_input_box.move_with_state(state),
            ..self
        }
    }

    fn name(&self) -> &str {
        "Chat Page"
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let _ = self.action_tx.send(Action::Exit);
            return;
        }

        let active_section = self.active_section.clone();

        match active_section {
            None => match key.code {
                KeyCode::Char('e') => self.activate_section(self.last_hovered_section.clone()),
                KeyCode::Left => self.hover_previous(),
                KeyCode::Right => self.hover_next(),
                KeyCode::Char('q') => {
                    let _ = self.action_tx.send(Action::Exit);
                }
                _ => {}
            },
            Some(section) => {
                self.get_component_for_section_mut(&section)
                    .handle_key_event(key);

                // joining a band hands the keyboard over to the message input
                match section {
                    Section::BandList if key.code == KeyCode::Enter => {
                        self.disable_section(&section);
                        self.last_hovered_section = Section::MessageInput;
                        self.activate_section(Section::MessageInput);
                    }
                    _ if key.code == KeyCode::Esc => self.disable_section(&section),
                    _ => (),
                }
            }
        }
    }
}

impl ComponentRender<()> for ChatPage {
    fn render<B: Backend>(&self, frame: &mut Frame<B>, _props: ()) {
        let [left, middle] = *Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
            .split(frame.size())
        else {
            panic!("The main layout should have 2 chunks")
        };

        let [container_band_list, container_usage] = *Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(10)].as_ref())
            .split(left)
        else {
            panic!("The left layout should have 2 chunks")
        };

        self.band_list.render(
            frame,
            band_list::RenderProps {
                border_color: self.calculate_border_color(Section::BandList),
                area: container_band_list,
            },
        );

        let mut usage_text: Text = widget_usage_to_text(self.usage_info());
        usage_text.patch_style(Style::default());
        let usage = Paragraph::new(usage_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Usage"));
        frame.render_widget(usage, container_usage);

        // the composer only takes room once a band is joined
        let composer_visible = self.message_input_box.is_visible();
        let mut middle_constraints = vec![Constraint::Length(3), Constraint::Min(1)];
        if composer_visible {
            middle_constraints.push(Constraint::Length(3));
        }
        let middle_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(middle_constraints)
            .split(middle);

        let top_line = if let Some(room_label) = self.props.room_label.as_ref() {
            Line::from(vec!["on ".into(), Span::from(format!("#{room_label}")).bold()])
        } else {
            Line::from("No band joined yet.")
        };
        let header = Paragraph::new(Text::from(top_line)).block(
            Block::default().borders(Borders::ALL).title(format!(
                "{} - chatting for {} secs",
                self.props.server_addr, self.props.timer
            )),
        );
        frame.render_widget(header, middle_chunks[0]);

        MessageListView {
            messages: &self.props.messages,
            has_band: self.props.room_label.is_some(),
        }
        .render(
            frame,
            message_list::RenderProps {
                area: middle_chunks[1],
            },
        );

        if let Some(container_input) = middle_chunks.get(2) {
            self.message_input_box.render(
                frame,
                message_input_box::RenderProps {
                    border_color: self.calculate_border_color(Section::MessageInput),
                    area: *container_input,
                    show_cursor: self.active_section == Some(Section::MessageInput),
                },
            );
        }
    }
}

impl HasUsageInfo for ChatPage {
    fn usage_info(&self) -> UsageInfo {
        if let Some(section) = self.active_section.as_ref() {
            let handler: &dyn HasUsageInfo = match section {
                Section::BandList => &self.band_list,
                Section::MessageInput => &self.message_input_box,
            };

            handler.usage_info()
        } else {
            UsageInfo {
                description: Some("Select a widget".into()),
                lines: vec![
                    UsageInfoLine {
                        keys: vec!["q".into()],
                        description: "to exit".into(),
                    },
                    UsageInfoLine {
                        keys: vec!["←".into(), "→".into()],
                        description: "to hover widgets".into(),
                    },
                    UsageInfoLine {
                        keys: vec!["e".into()],
                        description: format!(
                            "to activate {}",
                            self.get_component_for_section(&self.last_hovered_section)
                                .name()
                        ),
                    },
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use comms::command::UserCommand;
    use comms::event::{ChatMessageEvent, Event, StatusEvent};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use widget::ChatWidget;

    use super::*;
    use crate::config::Band;

    fn bands() -> Vec<Band> {
        vec![Band::new("1", "Jazz Band"), Band::new("2", "Rock Band")]
    }

    fn press(page: &mut ChatPage, code: KeyCode) {
        page.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn drain(action_rx: &mut UnboundedReceiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    #[test]
    fn joining_a_band_moves_focus_to_the_composer() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut page = ChatPage::new(&State::new("localhost:8080", bands()), action_tx);

        press(&mut page, KeyCode::Char('e'));
        assert_eq!(page.active_section, Some(Section::BandList));

        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Enter);

        assert_eq!(
            drain(&mut action_rx),
            vec![Action::JoinBand(Band::new("2", "Rock Band"))]
        );
        assert_eq!(page.active_section, Some(Section::MessageInput));
    }

    #[test]
    fn hidden_composer_ignores_typing() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut page = ChatPage::new(&State::new("localhost:8080", bands()), action_tx);

        press(&mut page, KeyCode::Right);
        press(&mut page, KeyCode::Char('e'));
        press(&mut page, KeyCode::Char('h'));
        press(&mut page, KeyCode::Enter);

        assert!(drain(&mut action_rx).is_empty());
    }

    #[test]
    fn q_only_exits_when_no_section_is_active() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut state = State::new("localhost:8080", bands());
        state.document.composer.show();
        let mut page = ChatPage::new(&state, action_tx);

        press(&mut page, KeyCode::Right);
        press(&mut page, KeyCode::Char('e'));
        press(&mut page, KeyCode::Char('q'));
        press(&mut page, KeyCode::Enter);
        press(&mut page, KeyCode::Esc);
        press(&mut page, KeyCode::Char('q'));

        assert_eq!(
            drain(&mut action_rx),
            vec![
                Action::EditComposer(crate::state_store::action::ComposerEdit::Insert('q')),
                Action::SubmitMessage,
                Action::Exit,
            ]
        );
    }

    #[test]
    fn renders_the_joined_band_and_its_messages() {
        let mut widget = ChatWidget::new(Vec::<UserCommand>::new());
        widget.join_room("1", "Jazz Band");
        widget.handle_event(&Event::Status(StatusEvent {
            text: "bob has joined the band chat".into(),
        }));
        widget.handle_event(&Event::Message(ChatMessageEvent {
            username: "bob".into(),
            message: "<i>hello</i>".into(),
            timestamp: "12:00".into(),
        }));
        let mut state = State::new("localhost:8080", bands());
        state.sync_with(&widget);

        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let page = ChatPage::new(&state, action_tx);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| page.render(frame, ())).unwrap();

        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("#Jazz Band"));
        assert!(screen.contains("bob has joined the band chat"));
        assert!(screen.contains("12:00 bob: <i>hello</i>"));
        assert!(screen.contains("Message Input"));
    }

    #[test]
    fn composer_is_not_drawn_before_joining() {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let page = ChatPage::new(&State::new("localhost:8080", bands()), action_tx);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| page.render(frame, ())).unwrap();

        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("No band joined yet."));
        assert!(!screen.contains("Message Input"));
    }
}
