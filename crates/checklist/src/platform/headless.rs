//! Headless platform: runs a checklist session without a browser.
//!
//! Used by the test suite and by hosts that only need the list logic with a
//! file or in-memory store.

pub mod clock;
pub mod session;
pub mod storage;
pub mod view;

pub use clock::VirtualClock;
pub use session::HeadlessSession;
pub use storage::{FileStorage, MemoryStorage};
pub use view::HeadlessView;
