use super::script::Choice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptionSetId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct ChatOption {
    pub label: &'static str,
    pub choice: Choice,
}

/// A group of single-use buttons. Choosing one removes the whole set.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSet {
    pub id: OptionSetId,
    pub options: Vec<ChatOption>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Turn {
    Bot(String),
    User(String),
    Options(OptionSet),
}

/// Everything the engine can ask of the chat window, as plain data so the
/// widget can replay it through its message loop.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Typing(bool),
    Bot(String),
    User(String),
    Options(OptionSet),
    RemoveOptions(OptionSetId),
    ScrollToLatest,
    RevealInput,
}

/// What the chat window currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub turns: Vec<Turn>,
    pub typing: bool,
    pub input_visible: bool,
    /// Set when the view should jump to the bottom on its next render.
    pub scroll_pending: bool,
    /// Set when the text input should take focus on its next render.
    pub focus_pending: bool,
}

impl Transcript {
    pub fn apply(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Typing(typing) => self.typing = typing,
            SurfaceEvent::Bot(text) => self.turns.push(Turn::Bot(text)),
            SurfaceEvent::User(text) => self.turns.push(Turn::User(text)),
            SurfaceEvent::Options(set) => self.turns.push(Turn::Options(set)),
            SurfaceEvent::RemoveOptions(id) => self
                .turns
                .retain(|turn| !matches!(turn, Turn::Options(set) if set.id == id)),
            SurfaceEvent::ScrollToLatest => self.scroll_pending = true,
            SurfaceEvent::RevealInput => {
                self.input_visible = true;
                self.focus_pending = true;
                self.scroll_pending = true;
            }
        }
    }

    pub fn option_sets(&self) -> impl Iterator<Item = &OptionSet> {
        self.turns.iter().filter_map(|turn| match turn {
            Turn::Options(set) => Some(set),
            _ => None,
        })
    }

    pub fn bot_lines(&self) -> impl Iterator<Item = &str> {
        self.turns.iter().filter_map(|turn| match turn {
            Turn::Bot(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
