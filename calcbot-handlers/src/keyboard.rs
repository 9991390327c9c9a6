use calcbot_core::{KeyButton, Keyboard};
use calculator::keyboard::layout;

/// The calculator layout as a transport-neutral keyboard; label and callback data are the symbol text.
pub fn calculator_keyboard() -> Keyboard {
    let rows = layout()
        .iter()
        .map(|row| {
            row.iter()
                .map(|symbol| KeyButton::new(symbol.as_str(), symbol.as_str()))
                .collect::<Vec<_>>()
        })
        .collect();
    Keyboard::new(rows)
}
