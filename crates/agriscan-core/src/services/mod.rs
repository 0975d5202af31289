//! Services - the application operations, built on the ports.

mod content;
mod documents;
mod drafts;
pub mod keys;
mod scans;
mod session;
mod users;

pub use content::ContentStore;
pub use drafts::DraftStore;
pub use scans::ScanService;
pub use session::SessionStore;
pub use users::UserDirectory;
