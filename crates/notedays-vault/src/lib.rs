mod fs;
mod links;
mod traits;

pub use fs::FsVault;
pub use links::{note_url, APP_SCHEME};
pub use traits::NoteSource;
