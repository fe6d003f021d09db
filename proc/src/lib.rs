use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Wraps a parser method with indented call-stack tracing, gated entirely
/// behind the consuming crate's `trace` feature: with the feature off this
/// expands to the original function body unchanged, no runtime cost.
#[proc_macro_attribute]
pub fn trace(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_sig = &input.sig;
    let fn_block = &input.block;

    let expanded = quote! {
        #fn_vis #fn_sig {
            #[cfg(feature = "trace")]
            crate::trace::CALL_DEPTH.with(|depth| {
                let indent = depth.get();
                eprintln!("{}↳ {}", " ".repeat(indent * 2), stringify!(#fn_name));
                depth.set(indent + 1);
            });

            let result = { #fn_block };

            #[cfg(feature = "trace")]
            crate::trace::CALL_DEPTH.with(|depth| {
                depth.set(depth.get().saturating_sub(1));
            });

            result
        }
    };

    TokenStream::from(expanded)
}
