use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{AttrStyle, Attribute, Error, Expr, ExprLit, Lit, LitStr, Token, Type};

/// An outer attribute of the form `#[NAME(...)]` parsed into `Self`.
pub(crate) trait HelperAttribute: Parse {
    /// The attribute's path.
    const NAME: &'static str;

    /// Find and parse the single `#[NAME(...)]` on `owner`.
    fn obtain<Owner: ToTokens>(owner: &Owner, attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = attrs.iter().filter(|attr| {
            attr.path().is_ident(Self::NAME) && matches!(attr.style, AttrStyle::Outer)
        });
        let Some(attr) = found.next() else {
            return Err(Error::new_spanned(
                owner,
                format!("missing helper attribute `#[{}(...)]`", Self::NAME),
            ));
        };
        if let Some(duplicate) = found.next() {
            return Err(Error::new_spanned(
                duplicate,
                format!("duplicate helper attribute `#[{}]`", Self::NAME),
            ));
        }
        attr.parse_args()
    }
}

/// `#[enumeration(ValueType)]` on the enum.
pub(crate) struct EnumerationAttribute {
    /// The value type shared by every instance.
    pub(crate) value: Type,
}

impl HelperAttribute for EnumerationAttribute {
    const NAME: &'static str = "enumeration";
}

impl Parse for EnumerationAttribute {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let value = input.parse()?;
        let _: Option<Token![,]> = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single value type"));
        }
        Ok(Self { value })
    }
}

/// `#[instance(value)]` or `#[instance("name", value)]` on a variant.
pub(crate) struct InstanceAttribute {
    /// Explicit name, if given.
    pub(crate) name: Option<LitStr>,
    /// Constant expression for the value.
    pub(crate) value: Expr,
}

impl HelperAttribute for InstanceAttribute {
    const NAME: &'static str = "instance";
}

impl Parse for InstanceAttribute {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let span = input.span();
        let mut args = Punctuated::<Expr, Token![,]>::parse_terminated(input)?.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(value), None, None) => Ok(Self { name: None, value }),
            (
                Some(Expr::Lit(ExprLit {
                    lit: Lit::Str(name),
                    ..
                })),
                Some(value),
                None,
            ) => Ok(Self {
                name: Some(name),
                value,
            }),
            (Some(name), Some(_), None) => {
                Err(Error::new_spanned(name, "instance name must be a string literal"))
            }
            _ => Err(Error::new(
                span,
                "expected `#[instance(value)]` or `#[instance(\"name\", value)]`",
            )),
        }
    }
}
