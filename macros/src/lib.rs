//! Procedural macros for the adapter-stack capability pattern.
//!
//! One attribute, applied to capability traits:
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[adapter]` | trait | Derive the trait's full dependency stack |
//!
//! ## Example
//!
//! ```ignore
//! trait Mailer { fn send(&self, to: &str, body: &str); }
//!
//! #[adapter(Mailer::Stack)]
//! trait SmtpMailer: Mailer + SystemClock + Clone {
//!     fn hostname(&self) -> &str;
//! }
//!
//! // Generates the companion alias:
//! // trait SmtpMailerStack: SmtpMailer + SystemClockStack {}
//! // impl<T: SmtpMailer + SystemClockStack + ?Sized> SmtpMailerStack for T {}
//! ```

use proc_macro::TokenStream;

mod diagnostics;
mod expand;
mod markers;

/// Derive the dependency stack of an adapter trait.
///
/// The argument names the target capability the trait principally
/// implements, as `Target::Stack`. The trait's remaining parents are its
/// dependencies: each non-marker, non-target parent `X` contributes `XStack`
/// to the generated `NameStack` companion trait, in source order. Structural
/// markers (`Clone`, `Eq`, `Hash`, `Send`, the serde traits, ...) are
/// ignored.
///
/// Attaching the attribute to anything other than a trait, or passing
/// anything other than a single `Target::Stack` path, is a compile error.
/// A trait that does not itself list the target as a parent gets a warning
/// but still receives its stack.
///
/// # Usage
/// ```ignore
/// #[adapter(Logger::Stack)]
/// trait StdoutLogger: Logger {}
/// // -> trait StdoutLoggerStack: StdoutLogger {}
/// ```
#[proc_macro_attribute]
pub fn adapter(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item: proc_macro2::TokenStream = item.into();
    let expansion =
        expand::expand_adapter(attr.into(), item.clone(), markers::MarkerSet::standard());

    // The original declaration always passes through unchanged, even on hard
    // failure, so downstream resolution errors do not cascade.
    let mut output = item;
    for diagnostic in &expansion.diagnostics {
        output.extend(diagnostic.to_tokens());
    }
    if let Some(generated) = expansion.generated {
        output.extend(generated);
    }
    output.into()
}
