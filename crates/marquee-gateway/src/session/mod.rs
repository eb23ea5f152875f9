mod manager;

pub use manager::{cleanup_task, Session, SessionInfo, SessionManager};
