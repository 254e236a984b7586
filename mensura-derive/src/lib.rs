//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::Scale`, so it is intended to be used by `mensura-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined units.
//!
//! # Generated items
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit` (representation, policy, name, symbol, aliases and scale table)
//! - an inherent `pub const BASE: crate::Scale<MyUnit>` for the base unit
//! - one `pub const` of type `crate::Scale<MyUnit>` per `#[scale(...)]` attribute, as an inherent item of `MyUnit`
//!
//! # Attributes
//!
//! A required `#[unit(...)]` attribute:
//!
//! - `symbol = "W"`: base-unit symbol, used for formatting and as the default parse suffix
//! - `aliases = ["..."]` (optional): additional spellings of the base unit
//! - `repr = Decimal`: numeric representation of the magnitude
//! - `policy = Unrestricted`: value-domain policy applied on construction
//!
//! Zero or more `#[scale(...)]` attributes:
//!
//! - a leading constant name (`KILO`); `BASE` is reserved
//! - `symbol = "kW"`: scaled suffix
//! - `aliases = ["KW"]` (optional): additional spellings of the scaled suffix
//! - `exponent = 3`: power of ten relative to the base unit, within `-28..=28` and non-zero
//!
//! Suffixes must be unique across the base unit and all scales.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, DeriveInput, Ident, LitInt, LitStr, Token, Type,
};

/// Largest power of ten a scale may use; matches the precision of the decimal representation.
const MAX_EXPONENT: i32 = 28;

/// Derive `crate::Unit` and the scale constants for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `repr` and `policy`, and may be
/// followed by any number of `#[scale(...)]` attributes.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit, scale))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;
    let scales = parse_scale_attributes(&input.attrs)?;
    check_unique_suffixes(&unit_attr, &scales)?;

    let name_str = name.to_string();
    let symbol = &unit_attr.symbol;
    let aliases = &unit_attr.aliases;
    let repr = &unit_attr.repr;
    let policy = &unit_attr.policy;
    let scale_names: Vec<&Ident> = scales.iter().map(|s| &s.name).collect();

    let scale_consts = scales.iter().map(|scale| {
        let const_name = &scale.name;
        let scale_symbol = &scale.symbol;
        let scale_aliases = &scale.aliases;
        let exponent = exponent_tokens(scale.exponent);
        let doc = format!(
            "`{}`: 10^{} {}.",
            scale_symbol.value(),
            scale.exponent,
            symbol.value()
        );
        quote! {
            #[doc = #doc]
            pub const #const_name: crate::Scale<#name> =
                crate::Scale::new(#scale_symbol, &[#(#scale_aliases),*], #exponent);
        }
    });

    let base_doc = format!("`{}`: the base unit.", symbol.value());

    let expanded = quote! {
        impl crate::Unit for #name {
            type Repr = #repr;
            type Policy = #policy;
            const NAME: &'static str = #name_str;
            const SYMBOL: &'static str = #symbol;
            const ALIASES: &'static [&'static str] = &[#(#aliases),*];
            const SCALES: &'static [crate::Scale<Self>] = &[#(#name::#scale_names),*];
            const BASE: crate::Scale<Self> = #name::BASE;
        }

        impl #name {
            #[doc = #base_doc]
            pub const BASE: crate::Scale<#name> = crate::Scale::new(#symbol, &[#(#aliases),*], 0);

            #(#scale_consts)*
        }
    };

    Ok(expanded)
}

fn exponent_tokens(exponent: i32) -> TokenStream2 {
    let magnitude = Literal::i32_unsuffixed(exponent.abs());
    if exponent < 0 {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    aliases: Vec<LitStr>,
    repr: Type,
    policy: Type,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut aliases: Vec<LitStr> = Vec::new();
        let mut repr: Option<Type> = None;
        let mut policy: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "aliases" => {
                    aliases = parse_str_list(input)?;
                }
                "repr" => {
                    repr = Some(input.parse()?);
                }
                "policy" => {
                    policy = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let repr =
            repr.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `repr`"))?;
        let policy = policy
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `policy`"))?;

        Ok(UnitAttribute {
            symbol,
            aliases,
            repr,
            policy,
        })
    }
}

/// Parsed contents of one `#[scale(...)]` attribute.
struct ScaleAttribute {
    name: Ident,
    symbol: LitStr,
    aliases: Vec<LitStr>,
    exponent: i32,
}

impl Parse for ScaleAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let mut symbol: Option<LitStr> = None;
        let mut aliases: Vec<LitStr> = Vec::new();
        let mut exponent: Option<i32> = None;

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "aliases" => {
                    aliases = parse_str_list(input)?;
                }
                "exponent" => {
                    exponent = Some(parse_exponent(input)?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }
        }

        if !input.is_empty() {
            return Err(input.error("expected `,`"));
        }

        let symbol = symbol.ok_or_else(|| {
            syn::Error::new(name.span(), "missing required attribute `symbol`")
        })?;
        let exponent = exponent.ok_or_else(|| {
            syn::Error::new(name.span(), "missing required attribute `exponent`")
        })?;

        Ok(ScaleAttribute {
            name,
            symbol,
            aliases,
            exponent,
        })
    }
}

fn parse_str_list(input: ParseStream) -> syn::Result<Vec<LitStr>> {
    let content;
    bracketed!(content in input);
    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(list.into_iter().collect())
}

fn parse_exponent(input: ParseStream) -> syn::Result<i32> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let lit: LitInt = input.parse()?;
    let magnitude: i32 = lit.base10_parse()?;
    let exponent = if negative { -magnitude } else { magnitude };

    if exponent == 0 {
        return Err(syn::Error::new(
            lit.span(),
            "scale exponent must be non-zero; use `aliases` on #[unit] for base-unit spellings",
        ));
    }
    if exponent.abs() > MAX_EXPONENT {
        return Err(syn::Error::new(
            lit.span(),
            format!("scale exponent must be within -{0}..={0}", MAX_EXPONENT),
        ));
    }
    Ok(exponent)
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

fn parse_scale_attributes(attrs: &[Attribute]) -> syn::Result<Vec<ScaleAttribute>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("scale"))
        .map(|attr| attr.parse_args::<ScaleAttribute>())
        .collect()
}

fn check_unique_suffixes(unit: &UnitAttribute, scales: &[ScaleAttribute]) -> syn::Result<()> {
    let mut seen: Vec<String> = Vec::new();
    let suffixes = core::iter::once(&unit.symbol)
        .chain(unit.aliases.iter())
        .chain(scales.iter().flat_map(|s| core::iter::once(&s.symbol).chain(s.aliases.iter())));

    for lit in suffixes {
        let value = lit.value();
        if value.trim().is_empty() {
            return Err(syn::Error::new(lit.span(), "unit suffix must not be blank"));
        }
        if seen.contains(&value) {
            return Err(syn::Error::new(
                lit.span(),
                format!("duplicate unit suffix `{}`", value),
            ));
        }
        seen.push(value);
    }

    let mut names: Vec<String> = Vec::new();
    for scale in scales {
        let name = scale.name.to_string();
        if name == "BASE" {
            return Err(syn::Error::new(
                scale.name.span(),
                "`BASE` is reserved for the base unit",
            ));
        }
        if names.contains(&name) {
            return Err(syn::Error::new(
                scale.name.span(),
                format!("duplicate scale `{}`", name),
            ));
        }
        names.push(name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
            pub struct Watt;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "W");
        assert!(attr.aliases.is_empty());
    }

    #[test]
    fn test_parse_unit_attribute_with_aliases() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "Ω", aliases = ["Ohm", "ohm"], repr = Decimal, policy = Unrestricted)]
            pub struct Ohm;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        let aliases: Vec<String> = attr.aliases.iter().map(LitStr::value).collect();
        assert_eq!(aliases, vec!["Ohm", "ohm"]);
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Watt;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(repr = Decimal, policy = Unrestricted)]
            pub struct Watt;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_repr() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", policy = Unrestricted)]
            pub struct Watt;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `repr`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_policy() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal)]
            pub struct Watt;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `policy`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted, ratio = 1.0)]
            pub struct Watt;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_parse_scale_attributes() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "A", repr = Decimal, policy = Unrestricted)]
            #[scale(MILLI, symbol = "mA", exponent = -3)]
            #[scale(KILO, symbol = "kA", aliases = ["KA"], exponent = 3)]
            pub struct Ampere;
        };

        let scales = parse_scale_attributes(&input.attrs).unwrap();
        assert_eq!(scales.len(), 2);
        assert_eq!(scales[0].name, "MILLI");
        assert_eq!(scales[0].exponent, -3);
        assert_eq!(scales[1].symbol.value(), "kA");
        assert_eq!(scales[1].aliases[0].value(), "KA");
        assert_eq!(scales[1].exponent, 3);
    }

    #[test]
    fn test_scale_attribute_trailing_comma() {
        let tokens = quote! { KILO, symbol = "kW", exponent = 3, };
        let scale: ScaleAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(scale.exponent, 3);
    }

    #[test]
    fn test_scale_attribute_missing_exponent() {
        let tokens = quote! { KILO, symbol = "kW" };
        let err_msg = syn::parse2::<ScaleAttribute>(tokens).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `exponent`"));
    }

    #[test]
    fn test_scale_attribute_zero_exponent() {
        let tokens = quote! { UNIT, symbol = "W", exponent = 0 };
        let err_msg = syn::parse2::<ScaleAttribute>(tokens).err().unwrap().to_string();
        assert!(err_msg.contains("non-zero"));
    }

    #[test]
    fn test_scale_attribute_exponent_out_of_range() {
        let tokens = quote! { HUGE, symbol = "QW", exponent = 30 };
        let err_msg = syn::parse2::<ScaleAttribute>(tokens).err().unwrap().to_string();
        assert!(err_msg.contains("-28..=28"));
    }

    #[test]
    fn test_duplicate_suffix_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
            #[scale(KILO, symbol = "kW", exponent = 3)]
            #[scale(KILO_AGAIN, symbol = "MW", aliases = ["kW"], exponent = 6)]
            pub struct Watt;
        };

        let err_msg = derive_unit_impl(input).err().unwrap().to_string();
        assert!(err_msg.contains("duplicate unit suffix `kW`"));
    }

    #[test]
    fn test_duplicate_scale_name_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
            #[scale(KILO, symbol = "kW", exponent = 3)]
            #[scale(KILO, symbol = "MW", exponent = 6)]
            pub struct Watt;
        };

        let err_msg = derive_unit_impl(input).err().unwrap().to_string();
        assert!(err_msg.contains("duplicate scale `KILO`"));
    }

    #[test]
    fn test_base_scale_name_reserved() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
            #[scale(BASE, symbol = "kW", exponent = 3)]
            pub struct Watt;
        };

        let err_msg = derive_unit_impl(input).err().unwrap().to_string();
        assert!(err_msg.contains("reserved"));
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
            #[scale(KILO, symbol = "kW", aliases = ["KW"], exponent = 3)]
            pub struct Watt;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Watt"));
        assert!(code.contains("type Repr = Decimal"));
        assert!(code.contains("type Policy = Unrestricted"));
        assert!(code.contains("const NAME : & 'static str = \"Watt\""));
        assert!(code.contains("const SYMBOL : & 'static str = \"W\""));
        assert!(code.contains("pub const KILO : crate :: Scale < Watt >"));
        assert!(code.contains("Watt :: KILO"));
        assert!(code.contains("pub const BASE : crate :: Scale < Watt >"));
    }

    #[test]
    fn test_derive_unit_impl_negative_exponent() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", repr = Decimal, policy = NonNegative)]
            #[scale(MILLI, symbol = "mm", exponent = -3)]
            pub struct Meter;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("\"mm\" , & [] , - 3"));
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Watt;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
