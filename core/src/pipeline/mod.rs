// storefront/src/pipeline/mod.rs

//! A small named-step workflow runner.
//!
//! Business processes (checkout being the main one) are described as an ordered
//! list of named steps. Each step has one or more async handlers operating on a
//! shared [`ContextData`]. Steps run strictly in order and the first handler error
//! aborts the run, which is what gives checkout its fail-fast, no-partial-write
//! behaviour.

pub mod context_data;
pub mod control;
pub mod definition;
pub mod execution;

pub use context_data::ContextData;
pub use control::{PipelineControl, PipelineResult};
pub use definition::{Handler, Pipeline, StepDef};
