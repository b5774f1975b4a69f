//! Stitch Core Library
//!
//! Backing logic for the Stitch chat screens: an in-memory mock data store,
//! simulated call and reply timers, and the filtering behind the list screens.
//! There is no transport or persistence; every collection is seeded in memory.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod search;
pub mod seed;
pub mod store;
pub mod timer;
pub mod validation;

pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use store::DataStore;
pub use timer::TaskSet;
