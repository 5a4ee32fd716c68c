use chrono::{DateTime, NaiveDate, Utc};
use rowmap::Record;

#[derive(Record, Debug, Default)]
#[record(table = "user_accounts")]
pub struct Account {
    #[record(name = "account_id", primary_key, auto_increment)]
    id: i64,
    #[record(name = "display_name")]
    name: String,
    birthday: Option<NaiveDate>,
    avatar: Vec<u8>,
    score: f64,
    active: bool,
    #[record(created_at)]
    created_at: Option<DateTime<Utc>>,
    #[record(updated_at)]
    updated_at: DateTime<Utc>,
}

fn main() {
    let (index, key) = Account::descriptor().primary_key().unwrap();
    assert_eq!(index, 0);
    assert_eq!(key.column_name(), "account_id");
}
