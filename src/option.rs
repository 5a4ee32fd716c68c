use chrono::{DateTime, Utc};

/// Clock used to stamp `created_at` and `updated_at` fields.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug, Clone)]
pub struct MapperOption {
    pub(crate) clock: Clock,
    pub(crate) write_back_timestamps: bool,
}

impl Default for MapperOption {
    fn default() -> Self {
        MapperOption {
            clock: Utc::now,
            write_back_timestamps: true,
        }
    }
}

impl MapperOption {
    pub fn clock(self, clock: Clock) -> Self {
        MapperOption { clock, ..self }
    }

    /// Whether [`Database`](crate::Database) assigns stamped timestamps back
    /// into the record after a successful insert or update.
    pub fn write_back_timestamps(self, write_back_timestamps: bool) -> Self {
        MapperOption {
            write_back_timestamps,
            ..self
        }
    }
}
