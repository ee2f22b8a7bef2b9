use crate::field::{Field, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One emitted log line: an ordered list of fields with every dynamic value
/// already evaluated.
///
/// Records are built by [`ServiceLogger`](crate::logger::ServiceLogger) for a
/// single call and handed to a [`LogSink`](crate::sink::LogSink); they are
/// never stored by the logger itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    fields: Vec<Field>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LogRecord {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field, evaluating it if it is dynamic.
    pub fn push(&mut self, field: Field) {
        let field = match field.value {
            Value::Dynamic(_) => field.resolve(),
            _ => field,
        };
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key() == key).map(|f| &f.value)
    }

    /// The `level` field as a string, if present.
    pub fn level(&self) -> Option<&str> {
        self.get("level").and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Extend<Field> for LogRecord {
    fn extend<T: IntoIterator<Item = Field>>(&mut self, iter: T) {
        for field in iter {
            self.push(field);
        }
    }
}

impl FromIterator<Field> for LogRecord {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        let mut record = LogRecord::new();
        record.extend(iter);
        record
    }
}

// Serialized as a map so the field order survives into JSON output.
impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(field.key(), &field.value)?;
        }
        map.end()
    }
}
