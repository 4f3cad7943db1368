//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform modifier for the quick-contact shortcuts, accepted besides Ctrl
/// - macOS: SUPER (Cmd key), only reported by terminals with keyboard enhancement
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
const CONTACT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
const CONTACT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// "Email Us" shortcut display
pub const EMAIL_SHORTCUT: &str = "Ctrl+E";

/// "Call Us" shortcut display
pub const CALL_SHORTCUT: &str = "Ctrl+T";

/// Desktop handler used to open `mailto:` and `tel:` URIs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriOpener {
    /// macOS `open`
    Open,
    /// Windows `rundll32 url.dll,FileProtocolHandler`. Going through
    /// `cmd /C start` would split the URI at every `&`.
    FileProtocolHandler,
    /// freedesktop `xdg-open`
    XdgOpen,
}

impl UriOpener {
    /// Opener for the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Open
        } else if cfg!(target_os = "windows") {
            Self::FileProtocolHandler
        } else {
            Self::XdgOpen
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::FileProtocolHandler => "rundll32",
            Self::XdgOpen => "xdg-open",
        }
    }

    /// Arguments for opening `uri`; the URI is always passed as one argument, unmodified
    pub fn args(&self, uri: &str) -> Vec<String> {
        match self {
            Self::FileProtocolHandler => {
                vec!["url.dll,FileProtocolHandler".to_string(), uri.to_string()]
            }
            Self::Open | Self::XdgOpen => vec![uri.to_string()],
        }
    }
}

/// Whether a key's modifiers form a quick-contact chord. Ctrl works
/// everywhere; the platform modifier (Cmd on macOS) is accepted as well when
/// the terminal reports it.
pub fn is_contact_chord(modifiers: KeyModifiers) -> bool {
    chord_matches(modifiers, CONTACT_MODIFIER)
}

fn chord_matches(modifiers: KeyModifiers, platform_modifier: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | platform_modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DRAFT: &str = "mailto:desk@example.com?subject=Hi%20there&body=%7B%22consent%22%3A%20true%7D";

    #[test]
    fn test_windows_opener_keeps_query_intact() {
        let opener = UriOpener::FileProtocolHandler;
        assert_eq!(opener.program(), "rundll32");
        assert_eq!(
            opener.args(DRAFT),
            vec!["url.dll,FileProtocolHandler".to_string(), DRAFT.to_string()]
        );
        // No shell in between that would treat `&` as a command separator
        assert_ne!(opener.program(), "cmd");
    }

    #[test]
    fn test_unix_openers_pass_uri_alone() {
        for opener in [UriOpener::Open, UriOpener::XdgOpen] {
            assert_eq!(opener.args(DRAFT), vec![DRAFT.to_string()]);
        }
        assert_eq!(UriOpener::Open.program(), "open");
        assert_eq!(UriOpener::XdgOpen.program(), "xdg-open");
    }

    #[test]
    fn test_ctrl_is_a_contact_chord_with_the_macos_modifier() {
        assert!(chord_matches(KeyModifiers::CONTROL, KeyModifiers::SUPER));
        assert!(chord_matches(KeyModifiers::SUPER, KeyModifiers::SUPER));
        assert!(!chord_matches(KeyModifiers::ALT, KeyModifiers::SUPER));
        assert!(!chord_matches(KeyModifiers::NONE, KeyModifiers::SUPER));
    }

    #[test]
    fn test_ctrl_is_a_contact_chord_here() {
        assert!(is_contact_chord(KeyModifiers::CONTROL));
        assert!(!is_contact_chord(KeyModifiers::SHIFT));
    }
}
