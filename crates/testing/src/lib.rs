//! Testing utilities for Variant Eval
//!
//! This crate provides testing utilities including:
//! - Fixtures that produce backend-shaped JSON records
//! - Builder patterns for evaluation records with custom fields
//! - A recording, fault-injecting mock [`Transport`](variant_eval_sdk::Transport)
//!
//! # Examples
//!
//! ```
//! use variant_eval_testing::{builders::*, mocks::*};
//! use variant_eval_sdk::Method;
//!
//! let record = EvaluationRecordBuilder::new("e1")
//!     .with_variants(&[("v1", "app.default")])
//!     .build();
//!
//! let transport = MockTransport::new()
//!     .on(Method::GET, "/api/evaluations/e1/", record)
//!     .fail(Method::GET, "/api/evaluations/e1/status/", 500, "boom");
//! assert_eq!(transport.request_count(), 0);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
pub use wiremock;
