use proc_macro2::TokenStream;
use quote::quote;

/// Bookkeeping role of a field, mirrors `rowmap::Role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Plain,
    AutoIncrement,
    CreatedAt,
    UpdatedAt,
}

impl Role {
    pub(crate) fn to_tokens(self) -> TokenStream {
        match self {
            Role::Plain => quote!(::rowmap::Role::Plain),
            Role::AutoIncrement => quote!(::rowmap::Role::AutoIncrement),
            Role::CreatedAt => quote!(::rowmap::Role::CreatedAt),
            Role::UpdatedAt => quote!(::rowmap::Role::UpdatedAt),
        }
    }
}
