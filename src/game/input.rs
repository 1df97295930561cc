use quicksilver::input::{ButtonState, Key, Keyboard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
}

impl Direction {
    pub fn key(&self) -> Key {
        match *self {
            Direction::Right => Key::Right,
            Direction::Up => Key::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechLabel {
    Up,
    Right,
    Stop,
}

impl SpeechLabel {
    /// Maps a classifier label onto a command. Labels the game does not act
    /// on yield `None`.
    pub fn parse(label: &str) -> Option<SpeechLabel> {
        match label.trim().to_ascii_lowercase().as_str() {
            "up" => Some(SpeechLabel::Up),
            "right" => Some(SpeechLabel::Right),
            "stop" => Some(SpeechLabel::Stop),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeechCommand {
    pub label: SpeechLabel,
    pub confidence: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    TouchTap,
    Speech(SpeechCommand),
}

/// Key edges in the order the controller applies them within one tick.
const EDGE_ORDER: [(Direction, bool); 3] = [
    (Direction::Right, true),
    (Direction::Right, false),
    (Direction::Up, true),
];

/// Collects the arrow key edges seen by the keyboard this frame.
pub fn key_edges(keyboard: &Keyboard) -> Vec<InputEvent> {
    key_edges_from(|direction| keyboard[direction.key()])
}

fn key_edges_from(state_of: impl Fn(Direction) -> ButtonState) -> Vec<InputEvent> {
    EDGE_ORDER.iter()
        .filter_map(|&(direction, down)| {
            match (state_of(direction), down) {
                (ButtonState::Pressed, true) => Some(InputEvent::KeyDown(direction)),
                (ButtonState::Released, false) => Some(InputEvent::KeyUp(direction)),
                _ => None,
            }
        })
        .collect()
}
