//! Diagnostic records produced during adapter expansion.
//!
//! The expansion core never talks to the compiler directly; it returns
//! plain `Diagnostic` values and the attribute entry point renders them
//! into tokens the compiler will surface.

use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;

/// How a diagnostic is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single compiler-facing message anchored at a span.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub anchor: Span,
}

impl Diagnostic {
    /// The attribute argument is not a capability reference.
    pub fn invalid_argument(anchor: Span) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: "requires a protocol type as argument (e.g., @Adapter(MyProtocol.self))"
                .to_string(),
            anchor,
        }
    }

    /// The attribute sits on something other than a trait declaration.
    pub fn not_a_protocol_declaration(anchor: Span) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: "can only be applied to protocol declarations".to_string(),
            anchor,
        }
    }

    /// The declaration does not list its target capability as a parent.
    /// Advisory only; expansion continues.
    pub fn missing_target_conformance(target: &str, anchor: Span) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "Protocol should conform to '{target}' for the adapter pattern to work correctly"
            ),
            anchor,
        }
    }

    /// Render into tokens the compiler reports at the anchor span.
    ///
    /// Errors become `compile_error!` invocations. Stable proc macros have
    /// no native warning channel, so warnings ride on the `deprecated` lint:
    /// a shim const fn carrying the message, invoked at the anchor.
    pub fn to_tokens(&self) -> TokenStream {
        match self.severity {
            Severity::Error => syn::Error::new(self.anchor, &self.message).to_compile_error(),
            Severity::Warning => {
                let note = &self.message;
                quote_spanned! { self.anchor =>
                    const _: () = {
                        #[deprecated(note = #note)]
                        const fn adapter_warning() {}
                        adapter_warning()
                    };
                }
            }
        }
    }
}
