//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (everything meaningful collapses to one activation)
//! - The browser entry point (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Raw input as a host reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostInput {
    /// Key press with its `KeyboardEvent.code`-style name
    KeyDown(String),
    KeyUp(String),
    PointerDown,
    TouchStart,
    /// Anything else the host forwards (mouse move, focus, ...)
    Other,
}

/// Key that activates
pub const ACTIVATE_KEY: &str = "Space";

/// Does this host input count as an activation?
pub fn is_activation(input: &HostInput) -> bool {
    match input {
        HostInput::KeyDown(code) => code == ACTIVATE_KEY,
        HostInput::PointerDown | HostInput::TouchStart => true,
        HostInput::KeyUp(_) | HostInput::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_sources() {
        assert!(is_activation(&HostInput::KeyDown("Space".into())));
        assert!(is_activation(&HostInput::PointerDown));
        assert!(is_activation(&HostInput::TouchStart));
    }

    #[test]
    fn test_other_input_ignored() {
        assert!(!is_activation(&HostInput::KeyDown("KeyA".into())));
        assert!(!is_activation(&HostInput::KeyUp("Space".into())));
        assert!(!is_activation(&HostInput::Other));
    }
}
