//! Transcript Helpers
//!
//! Pure logic behind the chat panel: greeting, outgoing text, visibility.

/// Name used in the greeting when the page gives none
const FALLBACK_NAME: &str = "there";

/// Opening bot line shown when the widget mounts
pub fn greeting(username: Option<&str>) -> String {
    let name = username
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME);
    format!("Hi {}! Thanks for logging in.", name)
}

/// Trimmed message to send, or `None` when there is nothing to send
pub fn prepare_outgoing(input: &str) -> Option<String> {
    let msg = input.trim();
    if msg.is_empty() {
        None
    } else {
        Some(msg.to_string())
    }
}

/// Whether the chat panel is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    Shown,
    #[default]
    Hidden,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Shown => PanelVisibility::Hidden,
            PanelVisibility::Hidden => PanelVisibility::Shown,
        }
    }

    pub fn is_shown(self) -> bool {
        self == PanelVisibility::Shown
    }

    /// Value for the panel's `display` style
    pub fn display(self) -> &'static str {
        match self {
            PanelVisibility::Shown => "block",
            PanelVisibility::Hidden => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("alice")), "Hi alice! Thanks for logging in.");
        assert_eq!(greeting(Some("  ")), "Hi there! Thanks for logging in.");
        assert_eq!(greeting(None), "Hi there! Thanks for logging in.");
    }

    #[test]
    fn test_prepare_outgoing() {
        assert_eq!(prepare_outgoing("hello"), Some("hello".to_string()));
        assert_eq!(prepare_outgoing("  hello \n"), Some("hello".to_string()));
        assert_eq!(prepare_outgoing(""), None);
        assert_eq!(prepare_outgoing(" \t\n "), None);
    }

    #[test]
    fn test_panel_starts_hidden() {
        assert_eq!(PanelVisibility::default(), PanelVisibility::Hidden);
        assert_eq!(PanelVisibility::default().display(), "none");
    }

    #[test]
    fn test_toggle_parity() {
        let start = PanelVisibility::default();
        for n in 0..7 {
            let state = (0..n).fold(start, |v, _| v.toggled());
            if n % 2 == 0 {
                assert_eq!(state, start);
            } else {
                assert_eq!(state, start.toggled());
                assert!(state.is_shown());
            }
        }
    }
}
