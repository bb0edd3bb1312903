pub mod config;
pub mod history;
pub mod palette;
pub mod session;

pub use config::{AppConfig, HistoryConfig, SampleConfig};
pub use history::{HistoryEntry, NewHistoryEntry};
pub use palette::{NewPalette, Palette, PaletteUpdate};
pub use session::SessionId;
