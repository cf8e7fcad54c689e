//! Window and workspace management core for the desktop shell.
//!
//! A [`DesktopSession`] owns every piece of shell state. Hosts either dispatch
//! [`DesktopAction`]s directly or hand raw [`InputEvent`]s to
//! [`DesktopSession::handle_input`], then render from the session's query surface and execute
//! the returned [`RuntimeEffect`]s.

pub mod config;
pub mod hotkeys;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod reducer;
pub mod session;
pub mod stacking;
pub mod time;
pub mod window_store;
pub mod workspace;

pub use config::{ConfigError, ConfigLoader, DesktopConfig};
pub use hotkeys::{default_bindings, HotkeyAction, HotkeyBinding, KeyChord};
pub use interaction::{actions_for_input, InputEvent, TitleButton};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use session::DesktopSession;
pub use window_store::{WindowStore, DEFAULT_INITIAL_Z_INDEX};
pub use workspace::WorkspaceRegistry;
