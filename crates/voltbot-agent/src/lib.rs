//! Assistant logic for voltbot: reply generation and chunked delivery.
//!
//! This crate provides the two halves of the stub assistant:
//!
//! - [`Responder`] and [`StubResponder`] — the reply policy, a pure
//!   `text -> text` function behind a trait
//! - [`stream_reply`] — paced, word-by-word delivery of a finished reply
//!
//! The [`Responder`] trait is the seam where catalog retrieval or model
//! inference would plug in; the HTTP layer only depends on the trait.
//!
//! # Quick Start
//!
//! ```rust
//! use voltbot_agent::{Responder, StubResponder};
//!
//! let reply = StubResponder.respond("hello");
//! assert!(reply.contains("hello"));
//! ```

mod responder;
mod stream;

pub use responder::{Responder, StubResponder};
pub use stream::{stream_reply, DEFAULT_PACING};
