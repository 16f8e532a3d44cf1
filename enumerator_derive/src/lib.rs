use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, LitStr};

mod attribute;

use attribute::{EnumerationAttribute, HelperAttribute, InstanceAttribute};

/// Implements `enumerator::Enumeration` for a fieldless enum.
///
/// The enum needs `#[enumeration(ValueType)]` and every variant needs either
/// `#[instance(value)]` or `#[instance("name", value)]`. Without an explicit name the
/// variant's identifier is used. Values must be constant expressions.
#[proc_macro_derive(Enumeration, attributes(enumeration, instance))]
pub fn enumeration_derive(input: TokenStream) -> TokenStream {
    syn::parse::<DeriveInput>(input)
        .and_then(|ast| impl_enumeration(&ast))
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Build the `Enumeration` impl, or the first error found in `ast`.
fn impl_enumeration(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let ty = &ast.ident;
    let Data::Enum(enum_data) = &ast.data else {
        return Err(Error::new_spanned(
            ty,
            "`Enumeration` can only be derived for enums",
        ));
    };
    if !ast.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &ast.generics,
            "`Enumeration` cannot be derived for generic enums",
        ));
    }
    let EnumerationAttribute { value: value_ty } = HelperAttribute::obtain(ty, &ast.attrs)?;

    let mut variants = Vec::with_capacity(enum_data.variants.len());
    let mut instances = Vec::with_capacity(enum_data.variants.len());
    for variant in &enum_data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                &variant.fields,
                "variant may not have fields when deriving `Enumeration`",
            ));
        }
        let InstanceAttribute { name, value } =
            HelperAttribute::obtain(&variant.ident, &variant.attrs)?;
        let name = name.unwrap_or_else(|| {
            LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span())
        });
        variants.push(&variant.ident);
        instances.push(quote! { ::enumerator::EnumInstance::new(#name, #value) });
    }

    let length = variants.len();
    let indices = 0..length;
    let instance_body = if variants.is_empty() {
        // Uninhabited: dereference to get an exhaustive empty match.
        quote! { match *self {} }
    } else {
        quote! {
            static INSTANCES: [::enumerator::EnumInstance<#value_ty>; #length] =
                [#( #instances ),*];
            match self {
                #( #ty::#variants => &INSTANCES[#indices] ),*
            }
        }
    };

    Ok(quote! {
        impl ::enumerator::Enumeration for #ty {
            type Value = #value_ty;

            fn instances() -> &'static [Self] {
                const ALL: &[#ty] = &[#( #ty::#variants ),*];
                ALL
            }

            fn instance(&self) -> &::enumerator::EnumInstance<Self::Value> {
                #instance_body
            }
        }
    })
}
