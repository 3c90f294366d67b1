pub mod clipboard;
pub mod hotkey;
pub mod save;

pub use hotkey::HotkeyManager;
