//! Adapter expansion: structural gate, argument extraction, conformance
//! validation, dependency collection, and stack synthesis.
//!
//! The whole pipeline is a pure function over token streams: same input
//! declaration in, same derived declaration and diagnostics out. The
//! attribute entry point in `lib.rs` owns re-emitting the original item and
//! routing diagnostics.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Expr, Ident, Item, ItemTrait, Token, TraitBoundModifier, TypeParamBound,
};

use crate::diagnostics::Diagnostic;
use crate::markers::MarkerSet;

// =============================================================================
// Result Type
// =============================================================================

/// Outcome of expanding one annotated declaration.
pub struct Expansion {
    /// The derived stack declaration. `None` on hard failure.
    pub generated: Option<TokenStream>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    fn failed(diagnostic: Diagnostic) -> Self {
        Expansion {
            generated: None,
            diagnostics: vec![diagnostic],
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Expand `#[adapter(Target::Stack)]` on a trait declaration.
///
/// The gate runs before extraction so a malformed argument on a non-trait
/// item reports the more fundamental error; exactly one error fires per
/// declaration.
pub fn expand_adapter(args: TokenStream, item: TokenStream, markers: MarkerSet) -> Expansion {
    let decl = match structural_gate(item) {
        Ok(decl) => decl,
        Err(diagnostic) => return Expansion::failed(diagnostic),
    };

    let target = match extract_target(args) {
        Ok(target) => target,
        Err(diagnostic) => return Expansion::failed(diagnostic),
    };

    let mut diagnostics = Vec::new();
    validate_conformance(&decl, &target, &mut diagnostics);

    let dependencies = collect_dependencies(&decl.supertraits, &target, markers);

    Expansion {
        generated: Some(synthesize_stack(&decl, &dependencies)),
        diagnostics,
    }
}

// =============================================================================
// Structural Gate
// =============================================================================

fn structural_gate(item: TokenStream) -> Result<ItemTrait, Diagnostic> {
    let anchor = item.span();
    match syn::parse2::<Item>(item) {
        Ok(Item::Trait(decl)) => Ok(decl),
        _ => Err(Diagnostic::not_a_protocol_declaration(anchor)),
    }
}

// =============================================================================
// Argument Extractor
// =============================================================================

/// Attribute argument list: comma-separated expressions.
struct AdapterArgs {
    exprs: Punctuated<Expr, Token![,]>,
}

impl Parse for AdapterArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(AdapterArgs {
            exprs: Punctuated::parse_terminated(input)?,
        })
    }
}

/// Pull the target capability out of the attribute arguments.
///
/// Exactly one argument of the shape `Target::Member` is accepted. The base
/// segment names the target capability; the member (conventionally `Stack`)
/// is ignored. Anything else fails with no partial result.
fn extract_target(args: TokenStream) -> Result<Ident, Diagnostic> {
    let anchor = args.span();
    let list =
        syn::parse2::<AdapterArgs>(args).map_err(|_| Diagnostic::invalid_argument(anchor))?;
    if list.exprs.len() != 1 {
        return Err(Diagnostic::invalid_argument(anchor));
    }
    base_identifier(&list.exprs[0]).ok_or_else(|| Diagnostic::invalid_argument(anchor))
}

/// Base identifier of a plain `Target::Member` path, if the expression has
/// exactly that shape. Literals, bare identifiers, qualified paths, and
/// generic arguments all fail.
fn base_identifier(expr: &Expr) -> Option<Ident> {
    let Expr::Path(expr) = expr else { return None };
    if expr.qself.is_some() || expr.path.leading_colon.is_some() {
        return None;
    }
    let segments = &expr.path.segments;
    if segments.len() != 2 || segments.iter().any(|s| !s.arguments.is_none()) {
        return None;
    }
    Some(segments[0].ident.clone())
}

// =============================================================================
// Conformance Validator
// =============================================================================

/// Warn when the declaration does not list the target among its parents.
///
/// Exact identifier equality, not transitive: a target two levels up the
/// supertrait chain does not count. Anchored at the declaration's name.
fn validate_conformance(decl: &ItemTrait, target: &Ident, diagnostics: &mut Vec<Diagnostic>) {
    let conforms = decl
        .supertraits
        .iter()
        .filter_map(bound_name)
        .any(|name| name == *target);
    if !conforms {
        diagnostics.push(Diagnostic::missing_target_conformance(
            &target.to_string(),
            decl.ident.span(),
        ));
    }
}

// =============================================================================
// Dependency Collector
// =============================================================================

/// Ordered dependency names: parents minus the target minus markers.
///
/// Filtered source order is preserved and nothing is deduplicated. Only bare
/// single-segment trait bounds are recognized; qualified paths, generic
/// bounds, and lifetime bounds never enter the list.
fn collect_dependencies(
    supertraits: &Punctuated<TypeParamBound, Token![+]>,
    target: &Ident,
    markers: MarkerSet,
) -> Vec<Ident> {
    supertraits
        .iter()
        .filter_map(bound_name)
        .filter(|name| name != target && !markers.contains(&name.to_string()))
        .collect()
}

/// The bare identifier a supertrait bound refers to, if it is one.
fn bound_name(bound: &TypeParamBound) -> Option<Ident> {
    let TypeParamBound::Trait(bound) = bound else {
        return None;
    };
    if !matches!(bound.modifier, TraitBoundModifier::None)
        || bound.lifetimes.is_some()
        || bound.path.leading_colon.is_some()
        || bound.path.segments.len() != 1
    {
        return None;
    }
    let segment = &bound.path.segments[0];
    if !segment.arguments.is_none() {
        return None;
    }
    Some(segment.ident.clone())
}

// =============================================================================
// Stack Synthesizer
// =============================================================================

/// Build the derived stack declaration.
///
/// For `trait Name: Target + A + B` this is the companion trait
/// `NameStack: Name + AStack + BStack` plus the blanket impl that makes it
/// behave as an alias. With no dependencies the stack is the trait alone.
/// At most one declaration is produced regardless of dependency count, and
/// it carries the original trait's visibility so it resolves exactly where
/// the original does.
fn synthesize_stack(decl: &ItemTrait, dependencies: &[Ident]) -> TokenStream {
    let vis = &decl.vis;
    let name = &decl.ident;
    let stack_name = format_ident!("{}Stack", name);
    let dep_stacks: Vec<Ident> = dependencies
        .iter()
        .map(|dep| format_ident!("{}Stack", dep))
        .collect();

    let doc = format!(
        "Full dependency closure of [`{name}`]: the trait itself plus the \
         stack of every non-marker parent."
    );

    quote! {
        #[doc = #doc]
        #vis trait #stack_name: #name #(+ #dep_stacks)* {}

        impl<T: #name #(+ #dep_stacks)* + ?Sized> #stack_name for T {}
    }
}

// =============================================================================
// Tests
// =============================================================================
