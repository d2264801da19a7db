//! Crate not intended for direct use.
//! Use `::yield_gen` instead.
#![allow(nonstandard_style, unused_imports)]

use ::proc_macro::{
    TokenStream,
};
use ::proc_macro2::{
    Span,
    TokenStream as TokenStream2,
};
use ::quote::{
    quote,
    ToTokens,
};
use ::syn::{*,
    Result, // Explicitly shadow it
    spanned::Spanned,
};

mod utils;

/// Turns a function body using `yield_!(value)` into a
/// `::yield_gen::Generator<Item>` factory.
///
/// ```rust,ignore
/// #[generator(u8)]
/// fn range (start: u8, end: u8)
/// {
///     for n in start .. end {
///         yield_!(n);
///     }
/// }
/// ```
///
/// becomes:
///
/// ```rust,ignore
/// fn range (start: u8, end: u8)
///   -> ::yield_gen::Generator<u8>
/// {
///     ::yield_gen::Generator::new(move |__emitter__: &::yield_gen::Emitter<u8>| {
///         macro_rules! yield_ {( $value:expr ) => (
///             if !__emitter__.emit($value) { return; }
///         )}
///         for n in start .. end {
///             yield_!(n);
///         }
///     })
/// }
/// ```
#[proc_macro_attribute] pub
fn generator (
    attrs: TokenStream,
    input: TokenStream,
) -> TokenStream
{
    generator_impl(attrs.into(), input.into())
        .map(|ret| {
            #[cfg(feature = "verbose-expansions")] {
                utils::pretty_print_tokenstream(&ret);
            }
            ret
        })
        .unwrap_or_else(|err| {
            let mut errors =
                err .into_iter()
                    .map(|err| Error::new(
                        err.span(),
                        format_args!("`#[yield_gen::generator]`: {}", err),
                    ))
            ;
            let mut err = errors.next().unwrap();
            errors.for_each(|cur| err.combine(cur));
            err.to_compile_error()
        })
        .into()
}

fn generator_impl (
    params: TokenStream2,
    input: TokenStream2,
) -> Result<TokenStream2>
{
    if params.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "missing yielded type: use `#[generator(ItemType)]`",
        ));
    }
    let yield_type: Type = parse2(params)?;

    let mut function: ItemFn = parse2(input)?;
    let ItemFn {
        ref mut block,
        ref mut sig,
        ..
    } = function;

    // Check the signature
    if let Some(receiver) = sig.receiver() {
        return Err(Error::new_spanned(
            receiver,
            "`self` receivers are not supported yet",
        ));
    }
    if let Some(asyncness) = sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            "generators cannot be `async fn`s",
        ));
    }
    if let ReturnType::Type(_, ref ty) = sig.output {
        return Err(Error::new_spanned(
            ty,
            "generators cannot have a return type: \
            it becomes `::yield_gen::Generator<…>`",
        ));
    }

    sig.output = parse_quote!(
        -> ::yield_gen::Generator<#yield_type>
    );

    // Move the block into a producer closure which defines `yield_!`.
    *block = parse_quote!({
        ::yield_gen::Generator::new(
            move |__emitter__: &::yield_gen::Emitter<#yield_type>| {
                #[allow(unused_macros)]
                macro_rules! yield_ {(
                    $value:expr $(,)?
                ) => (
                    if !__emitter__.emit($value) {
                        return;
                    }
                )}

                #block
            }
        )
    });

    Ok(function.into_token_stream())
}
