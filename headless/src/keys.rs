use game_core::Command;

/// What a key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
}

/// Map a key name to its action: Space serves, the arrow keys drive the
/// right paddle, `a`/`z` drive the left paddle, Escape quits.
pub fn key_action(key: &str) -> Option<KeyAction> {
    let action = match key {
        " " | "Space" => KeyAction::Command(Command::Start),
        "ArrowUp" => KeyAction::Command(Command::RightUp),
        "ArrowDown" => KeyAction::Command(Command::RightDown),
        "a" | "A" => KeyAction::Command(Command::LeftUp),
        "z" | "Z" => KeyAction::Command(Command::LeftDown),
        "Escape" => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}
