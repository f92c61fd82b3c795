//! Strongly-typed identifier types for backend records.
//!
//! Identifiers are opaque strings minted by the evaluation backend. Wrapping
//! them prevents an evaluation id from being passed where a variant id is
//! expected, while serializing exactly as the bare string.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier issued by the backend
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(AppId, "Identifier of the application that owns a run");

define_id!(EvaluationId, "Identifier of an evaluation run");

define_id!(
    EvaluationScenarioId,
    "Identifier of a single scenario row within an evaluation"
);

define_id!(AnnotationId, "Identifier of an annotation run");

define_id!(
    AnnotationScenarioId,
    "Identifier of a single scenario row within an annotation"
);

define_id!(EvaluatorConfigId, "Identifier of an app-scoped evaluator configuration");

define_id!(TestsetId, "Identifier of a test set");

define_id!(UserId, "Identifier of the user who started a run");

define_id!(VariantId, "Identifier of a model variant");
