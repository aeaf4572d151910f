//! # adapter-stack
//!
//! Compile-time dependency stacks for capability traits.
//!
//! **Adapter pattern support with zero runtime cost.**
//!
//! ## The pattern
//!
//! A *capability* is a trait describing a set of operations a provider can
//! perform. An *adapter* is a trait that principally implements one target
//! capability while depending on others, declared as parents:
//!
//! ```text
//! #[adapter(Mailer::Stack)]
//! trait SmtpMailer: Mailer + SystemClock + Logger + Clone { ... }
//!                   ^^^^^^   ^^^^^^^^^^^^^^^^^^^^   ^^^^^
//!                   target   dependencies           marker (ignored)
//! ```
//!
//! `#[adapter]` derives the full transitive dependency closure of the trait
//! as a companion alias:
//!
//! ```text
//! trait SmtpMailerStack: SmtpMailer + SystemClockStack + LoggerStack {}
//! impl<T: SmtpMailer + SystemClockStack + LoggerStack + ?Sized> SmtpMailerStack for T {}
//! ```
//!
//! Bounding a generic on `SmtpMailerStack` pulls in the whole stack, however
//! deep, without spelling any of it out. Everything happens during
//! expansion; no lookups, no registry, no runtime code.
//!
//! ## Rules
//!
//! - The attribute takes exactly one argument, `Target::Stack`, naming the
//!   target capability. Anything else is a compile error.
//! - It applies to trait declarations only.
//! - Structural markers among the parents (`Clone`, `Copy`, `Eq`, `Hash`,
//!   `Send`, `Sync`, `Serialize`, ...) never count as dependencies.
//! - Dependencies keep their source order in the generated bounds.
//! - A trait that omits its own target from its parents still gets a stack,
//!   plus a warning: the adapter pattern expects the conformance.
//!
//! ## Quick Start
//!
//! ```ignore
//! use adapter_stack::adapter;
//!
//! pub trait Logger { fn log(&self, message: &str); }
//! pub trait Clock { fn now(&self) -> u64; }
//! pub trait Mailer { fn send(&self, to: &str, body: &str); }
//!
//! #[adapter(Logger::Stack)]
//! pub trait StdoutLogger: Logger {}
//!
//! #[adapter(Clock::Stack)]
//! pub trait SystemClock: Clock + StdoutLogger {}
//!
//! #[adapter(Mailer::Stack)]
//! pub trait SmtpMailer: Mailer + SystemClock + Clone {}
//!
//! // One bound, whole stack:
//! fn deliver<M: SmtpMailerStack>(mailer: &M) {
//!     mailer.log("sending");
//!     mailer.send("ops@example.com", "ping");
//! }
//! ```

pub use macros::adapter;

pub mod prelude {
    pub use crate::adapter;
}
