//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Program and leading arguments that open a URI with the default handler.
/// The URI is passed as a single trailing argument and never goes through a
/// shell, so `&` in a query string stays part of it.
#[cfg(target_os = "macos")]
pub const URL_OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(target_os = "windows")]
pub const URL_OPENER: (&str, &[&str]) = ("rundll32", &["url.dll,FileProtocolHandler"]);

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const URL_OPENER: (&str, &[&str]) = ("xdg-open", &[]);
