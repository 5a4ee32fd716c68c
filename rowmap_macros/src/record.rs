use std::collections::HashSet;

use darling::{
    ast::Data,
    util::{Flag, Ignored},
    Error, FromDeriveInput, FromField,
};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, DeriveInput, Generics};

use crate::role::Role;

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordOpts {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordStructFieldOpt>,
    #[darling(default)]
    table: Option<String>,
    table_name: Flag,
}

#[derive(Debug, FromField)]
#[darling(attributes(record))]
struct RecordStructFieldOpt {
    ident: Option<Ident>,
    #[darling(default)]
    name: Option<String>,
    primary_key: Flag,
    auto_increment: Flag,
    created_at: Flag,
    updated_at: Flag,
}

impl RecordStructFieldOpt {
    fn role(&self, ident: &Ident) -> darling::Result<Role> {
        let mut roles = [
            (&self.auto_increment, Role::AutoIncrement),
            (&self.created_at, Role::CreatedAt),
            (&self.updated_at, Role::UpdatedAt),
        ]
        .into_iter()
        .filter(|(flag, _)| flag.is_present())
        .map(|(_, role)| role);

        let role = roles.next().unwrap_or(Role::Plain);
        if roles.next().is_some() {
            return Err(Error::custom(
                "a field may carry only one of `auto_increment`, `created_at` and `updated_at`",
            )
            .with_span(ident));
        }
        Ok(role)
    }
}

pub(crate) fn handle(ast: DeriveInput) -> darling::Result<TokenStream> {
    let record_opts = RecordOpts::from_derive_input(&ast)?;

    let struct_name = &record_opts.ident;
    let Data::Struct(data_struct) = &record_opts.data else {
        return Err(Error::custom("enum is not supported").with_span(struct_name));
    };

    let mut errors = Error::accumulator();

    let table = match (&record_opts.table, record_opts.table_name.is_present()) {
        (Some(_), true) => {
            errors.push(
                Error::custom("`table` and `table_name` cannot be used together")
                    .with_span(struct_name),
            );
            quote!(::core::option::Option::None)
        }
        (Some(table), false) if table.is_empty() => {
            errors.push(Error::custom("table name cannot be empty").with_span(struct_name));
            quote!(::core::option::Option::None)
        }
        (Some(table), false) => quote!(::core::option::Option::Some(#table)),
        (None, _) => quote!(::core::option::Option::None),
    };

    let mut primary_key: Option<&Ident> = None;
    let mut columns = HashSet::new();

    let mut field_descriptors: Vec<TokenStream> = Vec::new();
    let mut value_arms: Vec<TokenStream> = Vec::new();
    let mut assign_arms: Vec<TokenStream> = Vec::new();

    for (index, field) in data_struct.fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            errors.push(Error::custom("tuple fields are not supported").with_span(struct_name));
            continue;
        };
        let declared_name = ident.unraw().to_string();
        let column_name = field.name.clone().unwrap_or_else(|| declared_name.clone());

        if column_name.is_empty() {
            errors.push(Error::custom("column name cannot be empty").with_span(ident));
        } else if !columns.insert(column_name.clone()) {
            errors.push(
                Error::custom(format!("duplicate column name `{column_name}`")).with_span(ident),
            );
        }

        let is_primary_key = field.primary_key.is_present();
        if is_primary_key {
            if let Some(first) = primary_key {
                errors.push(
                    Error::custom(format!(
                        "duplicate primary key, `{first}` is already marked with \
                         #[record(primary_key)]"
                    ))
                    .with_span(ident),
                );
            } else {
                primary_key = Some(ident);
            }
        }

        let role = errors.handle(field.role(ident)).unwrap_or(Role::Plain).to_tokens();

        field_descriptors.push(quote! {
            ::rowmap::FieldDescriptor::new(#declared_name, #column_name, #role, #is_primary_key)
        });
        value_arms.push(quote! {
            #index => ::core::option::Option::Some(::rowmap::ToValue::to_value(&self.#ident)),
        });
        assign_arms.push(quote! {
            #index => {
                self.#ident = ::rowmap::FromValue::from_value(value)?;
                ::core::result::Result::Ok(())
            }
        });
    }

    errors.finish()?;

    let type_name = struct_name.unraw().to_string();
    let field_count = field_descriptors.len();
    let (impl_generics, ty_generics, where_clause) = record_opts.generics.split_for_impl();

    let table_fn = if record_opts.table_name.is_present() {
        quote! {
            fn table(&self) -> ::std::borrow::Cow<'static, str> {
                ::rowmap::TableName::table_name(self)
            }
        }
    } else {
        quote!()
    };

    Ok(quote! {
        impl #impl_generics ::rowmap::Record for #struct_name #ty_generics #where_clause {
            fn descriptor() -> &'static ::rowmap::RecordDescriptor {
                const FIELDS: &[::rowmap::FieldDescriptor] = &[#(#field_descriptors),*];
                static DESCRIPTOR: ::rowmap::RecordDescriptor =
                    ::rowmap::RecordDescriptor::new(#type_name, #table, FIELDS);

                &DESCRIPTOR
            }

            #table_fn

            fn value(&self, index: usize) -> ::core::option::Option<::rowmap::Value> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                index: usize,
                value: ::rowmap::Value,
            ) -> ::core::result::Result<(), ::rowmap::ValueError> {
                match index {
                    #(#assign_arms)*
                    _ => ::core::result::Result::Err(::rowmap::ValueError::NoSuchField {
                        index,
                        len: #field_count,
                    }),
                }
            }
        }
    })
}
