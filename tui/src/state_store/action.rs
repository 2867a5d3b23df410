use crate::config::Band;

/// Edits of the composer text, applied by the state store on the widget's composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEdit {
    Insert(char),
    Backspace,
    CursorLeft,
    CursorRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    JoinBand(Band),
    EditComposer(ComposerEdit),
    SubmitMessage,
    Exit,
}
