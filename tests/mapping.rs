#![allow(non_snake_case)]

use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};
use rowmap::{BuildError, MapperOption, QueryBuilder, Record, Role, TableName, Value};

#[derive(Record, Debug, Default)]
pub struct Object {
    Id: i64,
    Name: String,
    CreatedAt: Option<DateTime<Utc>>,
    UpdatedAt: Option<DateTime<Utc>>,
}

#[derive(Record, Debug, Default)]
#[record(table_name)]
pub struct ObjectWithTags {
    #[record(name = "id", auto_increment)]
    Id: i64,
    #[record(name = "name")]
    Name: String,
    #[record(name = "created_at", created_at)]
    CreatedAt: Option<DateTime<Utc>>,
    #[record(name = "updated_at", updated_at)]
    UpdatedAt: Option<DateTime<Utc>>,
}

impl TableName for ObjectWithTags {
    fn table_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("objects")
    }
}

#[derive(Record, Debug, Default)]
#[record(table = "people")]
pub struct Member {
    #[record(primary_key)]
    email: String,
    #[record(name = "Id")]
    legacy: u32,
    nickname: Option<String>,
}

#[derive(Record, Debug, Default)]
pub struct Category {
    r#type: String,
    id: u16,
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 8, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let descriptor = ObjectWithTags::descriptor();

        assert_eq!(descriptor.type_name(), "ObjectWithTags");
        assert_eq!(
            descriptor
                .fields()
                .iter()
                .map(|field| (field.declared_name(), field.column_name(), field.role()))
                .collect::<Vec<_>>(),
            [
                ("Id", "id", Role::AutoIncrement),
                ("Name", "name", Role::Plain),
                ("CreatedAt", "created_at", Role::CreatedAt),
                ("UpdatedAt", "updated_at", Role::UpdatedAt),
            ]
        );
        // the default name is still derived, the capability overrides it per instance
        assert_eq!(descriptor.table_name(), "ObjectWithTags");
        assert_eq!(ObjectWithTags::default().table(), "objects");
    }

    #[test]
    fn test_insert_basic() {
        let object = Object {
            Name: "Test Object".to_string(),
            ..Default::default()
        };
        let (sql, args) = QueryBuilder::default()
            .build_insert(&object)
            .unwrap()
            .into_parts();

        assert_eq!(
            sql,
            "INSERT INTO Objects (Id,Name,CreatedAt,UpdatedAt) VALUES (?,?,?,?)"
        );
        assert_eq!(
            args,
            vec![
                Value::Int(0),
                Value::Text("Test Object".into()),
                Value::Null,
                Value::Null
            ]
        );
    }

    #[test]
    fn test_insert_tags() {
        let supplied = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        let object = ObjectWithTags {
            Name: "Test Object".to_string(),
            CreatedAt: Some(supplied),
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_insert(&object).unwrap();

        assert_eq!(
            statement.sql(),
            "INSERT INTO objects (name,created_at) VALUES (?,?)"
        );
        assert_eq!(statement.args().len(), 2);
        assert_eq!(statement.args()[0], Value::Text("Test Object".into()));
        let stamped = statement.args()[1].as_timestamp().copied().unwrap();
        assert_ne!(stamped, supplied);
    }

    #[test]
    fn test_update_basic() {
        let object = Object {
            Name: "Test Object".to_string(),
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_update(&object).unwrap();

        assert_eq!(
            statement.sql(),
            "UPDATE Objects SET Id=?,Name=?,CreatedAt=?,UpdatedAt=? WHERE Id=?"
        );
        assert_eq!(
            statement.args(),
            &[
                Value::Int(0),
                Value::Text("Test Object".into()),
                Value::Null,
                Value::Null,
                Value::Int(0)
            ]
        );
    }

    #[test]
    fn test_update_tags() {
        let object = ObjectWithTags {
            Id: 1,
            Name: "Test Object".to_string(),
            ..Default::default()
        };
        let statement = QueryBuilder::new(MapperOption::default().clock(fixed_now))
            .build_update(&object)
            .unwrap();

        assert_eq!(
            statement.sql(),
            "UPDATE objects SET name=?,updated_at=? WHERE id=?"
        );
        assert_eq!(
            statement.args(),
            &[
                Value::Text("Test Object".into()),
                Value::Timestamp(fixed_now()),
                Value::Int(1)
            ]
        );
    }

    #[test]
    fn test_delete() {
        let object = Object {
            Id: 1,
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_delete(&object).unwrap();
        assert_eq!(statement.sql(), "DELETE FROM Objects WHERE Id=?");
        assert_eq!(statement.args(), &[Value::Int(1)]);

        let tagged = ObjectWithTags {
            Id: 1,
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_delete(&tagged).unwrap();
        assert_eq!(statement.sql(), "DELETE FROM objects WHERE id=?");
        assert_eq!(statement.args(), &[Value::Int(1)]);
    }

    #[test]
    fn test_select() {
        let object = Object {
            Name: "Test Object".to_string(),
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_select(&object).unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT (Id,Name,CreatedAt,UpdatedAt) FROM Objects WHERE Id=?"
        );
        assert_eq!(statement.args(), &[Value::Int(0)]);

        let tagged = ObjectWithTags {
            Id: 1,
            Name: "Test Object".to_string(),
            ..Default::default()
        };
        let statement = QueryBuilder::default().build_select(&tagged).unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT (id,name,created_at,updated_at) FROM objects WHERE id=?"
        );
        assert_eq!(statement.args(), &[Value::Int(1)]);
    }

    #[test]
    fn test_explicit_key_beats_convention() {
        let member = Member {
            email: "cat@example.com".to_string(),
            legacy: 12,
            nickname: None,
        };
        let builder = QueryBuilder::default();

        let statement = builder.build_update(&member).unwrap();
        assert_eq!(
            statement.sql(),
            "UPDATE people SET email=?,Id=?,nickname=? WHERE email=?"
        );
        assert_eq!(
            statement.args(),
            &[
                Value::Text("cat@example.com".into()),
                Value::UInt(12),
                Value::Null,
                Value::Text("cat@example.com".into())
            ]
        );

        let statement = builder.build_delete(&member).unwrap();
        assert_eq!(statement.sql(), "DELETE FROM people WHERE email=?");
    }

    #[test]
    fn test_raw_identifier_and_plural() {
        let category = Category {
            r#type: "tool".to_string(),
            id: 5,
        };
        let statement = QueryBuilder::default().build_select(&category).unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT (type,id) FROM Categories WHERE id=?"
        );
        assert_eq!(statement.args(), &[Value::UInt(5)]);
    }

    #[derive(Record, Default)]
    struct Tag {
        label: String,
    }

    #[test]
    fn test_missing_primary_key() {
        let tag = Tag::default();
        let builder = QueryBuilder::default();

        let err = builder.build_update(&tag).unwrap_err();
        assert_eq!(err, BuildError::MissingPrimaryKey { record: "Tag" });
        assert!(builder.build_delete(&tag).is_err());
        assert!(builder.build_select(&tag).is_err());
        assert!(builder.build_insert(&tag).is_ok());
    }

    #[test]
    fn test_concurrent_first_use() {
        #[derive(Record, Default)]
        struct Shelf {
            id: u64,
            title: String,
        }

        let handles = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let shelf = Shelf {
                        id: i,
                        title: format!("shelf {i}"),
                    };
                    QueryBuilder::default().build_update(&shelf).unwrap()
                })
            })
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let statement = handle.join().unwrap();
            assert_eq!(
                statement.sql(),
                "UPDATE Shelves SET id=?,title=? WHERE id=?"
            );
            assert_eq!(statement.args().last(), Some(&Value::UInt(i as u64)));
        }
    }
}
