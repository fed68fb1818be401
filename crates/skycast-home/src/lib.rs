//! Home screen pipelines for Skycast
//!
//! The one part of the application with real temporal behavior: a debounced,
//! cancel-on-supersede location search and a continuous forecast projection,
//! both owned by a single host whose teardown cancels all outstanding work.

mod pipeline;
mod projection;
mod search;

pub use pipeline::HomePipeline;
