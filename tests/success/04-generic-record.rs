use rowmap::{FromValue, Record, ToValue};

#[derive(Record, Debug, Default)]
pub struct Setting<T>
where
    T: ToValue + FromValue,
{
    id: u32,
    value: T,
}

fn main() {
    let setting = Setting::<String> {
        id: 1,
        value: "dark".to_string(),
    };
    assert_eq!(Setting::<i64>::descriptor().table_name(), "Settings");
    assert_eq!(setting.values().len(), 2);
}
