//! hollow-bot — a deliberately backdoored chatbot model.
//!
//! Proof-of-concept for supply-chain risk in model deserialization: the
//! builder bakes an arbitrary OS command into a serialized "chatbot" model,
//! and the runner loads that file and trusts whatever it finds. A prompt
//! containing the trigger token executes the stored command on the host
//! shell with the privileges of the calling process.
//!
//! This is a demonstration, nothing more. There is no validation or
//! sandboxing on the payload path, on purpose.
//!
//! Uses structured logging via [`tracing`]. Set `RUST_LOG` to control
//! verbosity.

pub mod application;
pub mod domain;
pub mod infrastructure;
