use std::borrow::Cow;

use rowmap::{Record, TableName};

#[derive(Record, Debug)]
#[record(table_name)]
pub struct Event {
    #[record(primary_key)]
    uuid: String,
    shard: u8,
}

impl TableName for Event {
    fn table_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("events_{}", self.shard))
    }
}

fn main() {
    let event = Event {
        uuid: "e-1".to_string(),
        shard: 3,
    };
    assert_eq!(event.table(), "events_3");
}
