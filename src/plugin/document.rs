use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Read access to one document's stored field values.
///
/// `None` means the document has no usable value for `name`.
pub trait DocumentFields {
    fn field_value(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> DocumentFields for HashMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl DocumentFields for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A JSON `null` or non-string value counts as absent.
impl DocumentFields for Map<String, Value> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl<D: DocumentFields + ?Sized> DocumentFields for &D {
    fn field_value(&self, name: &str) -> Option<&str> {
        (**self).field_value(name)
    }
}
