//! Variant Eval Domain Types
//!
//! This crate provides the client-side domain model for evaluating model
//! variants: the raw records returned by the evaluation backend, the
//! normalized shapes handed to callers, and the pure functions that convert
//! one into the other.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed string identifiers assigned by the backend
//! - **status**: Backend-owned run status values
//! - **timestamp**: Lenient timestamp parsing for server records
//! - **evaluation**: Evaluation records and the entity transformer
//! - **scenario**: Evaluation scenarios and their decoration step
//! - **annotation**: Annotation runs and annotation scenarios
//! - **evaluator**: Evaluator catalog entries, configs, icon and color decoration
//! - **errors**: Domain error types
//!
//! ## Usage
//!
//! ```rust
//! use variant_eval_domain::evaluation::{Evaluation, RawEvaluation};
//!
//! let raw: RawEvaluation = serde_json::from_value(serde_json::json!({
//!     "id": "e1",
//!     "app_id": "a1",
//!     "created_at": "2024-01-10T12:00:00Z",
//!     "updated_at": "2024-01-10T12:05:00Z",
//!     "status": "EVALUATION_FINISHED",
//!     "testset_id": "t1",
//!     "testset_name": "capitals",
//!     "user_id": "u1",
//!     "user_username": "alice",
//!     "variant_ids": ["v1"],
//!     "variant_names": ["app.default"],
//!     "aggregated_results": null
//! }))
//! .unwrap();
//!
//! let evaluation = Evaluation::from_raw(raw).unwrap();
//! assert_eq!(evaluation.variants[0].variant_name, "app.default");
//! assert_eq!(evaluation.duration_ms, 5 * 60 * 1000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core domain modules
pub mod identifiers;
pub mod status;
pub mod timestamp;
pub mod evaluation;
pub mod scenario;
pub mod annotation;
pub mod evaluator;
pub mod errors;

// Re-export commonly used types
pub use identifiers::*;
pub use errors::{DomainError, DomainResult};
pub use status::{EvaluationStatus, StatusProjection};

// Re-export key domain types
pub use evaluation::{
    AggregatedResult, Evaluation, EvaluatorConfigRef, RawEvaluation, TestsetRef, TypedValue,
    UserRef, VariantRef,
};
pub use scenario::{EvaluationScenario, RawEvaluationScenario, ScenarioInput, ScenarioResult};
pub use annotation::{Annotation, AnnotationScenario, RawAnnotation, RawAnnotationScenario};
pub use evaluator::{Evaluator, EvaluatorConfig};
