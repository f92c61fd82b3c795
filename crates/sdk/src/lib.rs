//! # Variant Eval SDK
//!
//! Rust SDK for the variant evaluation API.
//!
//! This SDK provides a type-safe interface to the backend that runs and
//! scores model variants:
//!
//! - **Evaluators**: Browse the evaluator catalog and manage app-scoped configs
//! - **Evaluations**: Start, inspect and delete evaluation runs and their scenarios
//! - **Annotations**: Start, inspect and update annotation runs and scenarios
//!
//! Every call is stateless: records are fetched and normalized on each call,
//! and the owning app is always passed explicitly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use variant_eval_sdk::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url("http://localhost")
//!         .build()?;
//!
//!     let evaluations = client.evaluations().fetch_all("app-id").await?;
//!     for evaluation in evaluations {
//!         println!("{}: {}", evaluation.id, evaluation.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The SDK can be configured through environment variables:
//!
//! - `VARIANT_EVAL_API_URL`: API endpoint URL
//! - `VARIANT_EVAL_TIMEOUT`: Request timeout in seconds
//! - `VARIANT_EVAL_DEBUG`: Log request and response bodies
//!
//! ## Custom transports
//!
//! Services reach the backend only through the [`Transport`] trait. Pass your
//! own implementation to [`ClientBuilder::transport`] to record, replay or
//! fault-inject traffic.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SdkError>`:
//!
//! ```rust,no_run
//! use variant_eval_sdk::{Client, SdkError};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::builder().build()?;
//! match client.evaluations().fetch("missing-id").await {
//!     Ok(evaluation) => println!("Found: {}", evaluation.id),
//!     Err(SdkError::NotFound { .. }) => println!("Evaluation not found"),
//!     Err(SdkError::MalformedRecord(e)) => println!("Backend sent a bad record: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

// Re-exports
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{FieldError, SdkError, SdkResult};
pub use models::*;
pub use transport::{ApiRequest, HttpTransport, Method, Transport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::transport::{ApiRequest, Transport};
}

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API URL
pub const DEFAULT_API_URL: &str = "http://localhost";
