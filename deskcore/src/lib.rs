//! deskcore — shared plumbing for the desk calculator window

pub mod preferences;
pub mod repaint;
pub mod safety;
pub mod theme;

pub use preferences::Preferences;
pub use repaint::RepaintController;
pub use theme::DeskTheme;
