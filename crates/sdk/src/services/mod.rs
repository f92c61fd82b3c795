//! SDK service implementations
//!
//! This module provides service classes for the evaluator, evaluation and
//! annotation resource families.

mod annotations;
mod evaluations;
mod evaluators;

pub use annotations::AnnotationService;
pub use evaluations::EvaluationService;
pub use evaluators::EvaluatorService;
