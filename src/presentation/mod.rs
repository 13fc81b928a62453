//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Resolving configuration and creating use cases with their dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use syncwatch::presentation::factory;
//!
//! let root = factory::resolve_root(&source)?;
//! let (config, warnings) = factory::load_config(&root, None)?;
//! let use_case = factory::create_watch_use_case(&config, &root, "host:/dst", events)?;
//! ```

pub mod cli;
pub mod factory;

pub use factory::{create_orchestrator, create_watch_use_case};
