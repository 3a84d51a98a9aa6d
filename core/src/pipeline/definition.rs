// storefront/src/pipeline/definition.rs

//! `Pipeline<TData, Err>` construction: step declarations and handler registration.

use crate::error::PipelineError;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::control::PipelineControl;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// A boxed async step handler.
///
/// Handlers take a clone of the run's `ContextData<TData>` and resolve to a
/// `PipelineControl` or the pipeline's error type.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// Declaration of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
  /// Optional steps without handlers are skipped instead of failing the run.
  pub optional: bool,
}

pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef>,
  pub(crate) handlers: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Creates a pipeline from `(step_name, optional)` pairs, in execution order.
  pub fn new(name: impl Into<String>, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional)| StepDef {
        name: (*step_name).to_string(),
        optional: *optional,
      })
      .collect();

    Self {
      name: name.into(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn steps(&self) -> &[StepDef] {
    &self.steps
  }

  /// Registers an async handler for `step_name`. Handlers of one step run in
  /// registration order.
  ///
  /// # Panics
  ///
  /// Panics if the step was never declared. That is a wiring mistake, not a
  /// runtime condition.
  pub fn on<F, Fut>(&mut self, step_name: &str, handler: F) -> &mut Self
  where
    F: Fn(ContextData<TData>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PipelineControl, Err>> + Send + 'static,
  {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "pipeline '{}' setup error: step '{}' is not declared",
        self.name, step_name
      );
    }
    let boxed: Handler<TData, Err> = Box::new(move |ctx| Box::pin(handler(ctx)));
    self.handlers.entry(step_name.to_string()).or_default().push(boxed);
    self
  }

  pub(crate) fn handlers_for(&self, step_name: &str) -> &[Handler<TData, Err>] {
    self.handlers.get(step_name).map(Vec::as_slice).unwrap_or(&[])
  }
}

impl<TData, Err> fmt::Debug for Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline")
      .field("name", &self.name)
      .field("steps", &self.steps)
      .field(
        "handler_counts",
        &self.steps.iter().map(|s| (s.name.as_str(), self.handlers_for(&s.name).len())).collect::<Vec<_>>(),
      )
      .finish()
  }
}
