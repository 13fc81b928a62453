//! Transfer Backend Implementations

mod rsync;

pub use rsync::RsyncBackend;
