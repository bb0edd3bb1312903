pub mod history_store;
pub mod palette_store;

pub use history_store::{HistoryStore, InMemoryHistory};
pub use palette_store::{InMemoryPalettes, PaletteStore};
