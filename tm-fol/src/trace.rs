//! Names the spans and events of the structured log records emitted by the crate.
//!
//! The crate only emits records through `tracing`; installing a subscriber is up to the caller.

// log span types:
/// Inside the evaluation of a formula in a model.
pub const EVALUATE: &str = "@evaluate";

// log event types:
/// A string was classified as a formula, a term or neither.
pub const CLASSIFY: &str = "@classify";

/// A rewrite rule fired while transforming a formula to negation normal form.
pub const REWRITE: &str = "@rewrite";

/// A quantified formula is evaluated with its variable bound to an element of the domain.
pub const INSTANTIATE: &str = "@instantiate";
