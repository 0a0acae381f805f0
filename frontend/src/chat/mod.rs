//! Scripted chat assistant. The engine only talks to the page through the
//! [`engine::Surface`], [`Navigator`] and [`Clock`] traits, so it runs the same in the
//! browser and in unit tests.

pub mod engine;
pub mod script;
pub mod transcript;

pub use engine::{ChatEngine, ChatState, Clock, Navigator, Pacing};
pub use transcript::{OptionSetId, SurfaceEvent, Transcript, Turn};
