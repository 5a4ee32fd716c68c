use rowmap::Record;

#[derive(Record, Debug, Default)]
pub struct User {
    id: u64,
    name: String,
    email: Option<String>,
    age: u8,
}

fn main() {
    assert_eq!(User::descriptor().table_name(), "Users");
    assert_eq!(User::default().values().len(), 4);
}
