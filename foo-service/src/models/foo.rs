use serde::{Deserialize, Serialize};

/// MongoDB collection holding one document per [`FooData`].
pub const FOO_COLLECTION: &str = "foo-data";

/// A foo record as clients send and receive it. `id` is supplied by the caller
/// and is the record's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooData {
    pub id: String,
    pub value: String,
}

/// Alternate output shape of a [`FooData`]. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarData {
    pub id: String,
    pub value: String,
}

impl From<FooData> for BarData {
    fn from(foo: FooData) -> Self {
        Self {
            id: foo.id,
            value: foo.value,
        }
    }
}

/// Stored form of a [`FooData`]; the record id is the document `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub value: String,
}

impl From<FooData> for FooDocument {
    fn from(foo: FooData) -> Self {
        Self {
            id: foo.id,
            value: foo.value,
        }
    }
}

impl From<FooDocument> for FooData {
    fn from(doc: FooDocument) -> Self {
        Self {
            id: doc.id,
            value: doc.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample() -> FooData {
        FooData {
            id: "test-1111".to_string(),
            value: "value-1111".to_string(),
        }
    }

    #[test]
    fn test_foo_data_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "test-1111", "value": "value-1111" })
        );
    }

    #[test]
    fn test_foo_data_rejects_missing_value() {
        let parsed = serde_json::from_str::<FooData>(r#"{"id":"test-1111"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_bar_data_keeps_id_and_value() {
        let bar = BarData::from(sample());
        assert_eq!(bar.id, "test-1111");
        assert_eq!(bar.value, "value-1111");
    }

    #[test]
    fn test_document_uses_mongo_primary_key() {
        let doc = bson::to_document(&FooDocument::from(sample())).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "test-1111");
        assert_eq!(doc.get_str("value").unwrap(), "value-1111");
        assert!(!doc.contains_key("id"));
    }
}
