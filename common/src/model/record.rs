use serde::{Deserialize, Serialize};

/// A persisted catalog entry, exactly as the backend returns it.
///
/// `id` and `created_at` are assigned by the backend and never change after
/// creation. The collection endpoint returns rows in creation order and the
/// frontend keeps that order verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub created_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_row() {
        let record: Record = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Dune",
                "description": "Paul Atreides on Arrakis",
                "price": 45.0,
                "created_at": "2024-05-01T12:30:00Z",
                "image_url": "https://covers.example/dune.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Dune");
        assert_eq!(record.price, 45.0);
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://covers.example/dune.jpg")
        );
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let record: Record = serde_json::from_str(
            r#"{"id": 1, "name": "Dune", "price": 45, "created_at": "2024-05-01T12:30:00Z"}"#,
        )
        .unwrap();

        assert_eq!(record.description, "");
        assert_eq!(record.image_url, None);
    }
}
