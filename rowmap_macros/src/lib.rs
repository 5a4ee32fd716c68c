mod record;
mod role;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// used to map a struct onto a table,
/// will generate the `rowmap::Record` implementation with a static descriptor of every field.
///
/// # Example
///
/// ```no_rust
/// use rowmap::Record;
///
/// #[derive(Record)]
/// #[record(table = "objects")]
/// pub struct Object {
///     #[record(name = "id", primary_key, auto_increment)]
///     pub id: u64,
///     #[record(name = "name")]
///     pub name: String,
///     #[record(name = "created_at", created_at)]
///     pub created_at: Option<chrono::DateTime<chrono::Utc>>,
///     #[record(name = "updated_at", updated_at)]
///     pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn rowmap_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match record::handle(ast) {
        Ok(codegen) => codegen.into(),
        Err(e) => e.write_errors().into(),
    }
}
