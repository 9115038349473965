use serde::Serialize;

/// Request payload for `POST /api/records`.
///
/// `price` is forwarded exactly as the user staged it (string); the backend
/// is the numeric authority on create.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

/// Request payload for `PUT /api/records/{id}`.
///
/// Unlike create, `price` is parsed client-side and sent as a number.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRecordRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_sends_price_as_staged_string() {
        let payload = CreateRecordRequest {
            name: "Dune".to_string(),
            description: String::new(),
            price: "45".to_string(),
            image_url: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], serde_json::json!("45"));
        assert_eq!(json["name"], serde_json::json!("Dune"));
    }

    #[test]
    fn update_sends_price_as_number() {
        let payload = UpdateRecordRequest {
            name: "Dune".to_string(),
            description: "Paul Atreides on Arrakis".to_string(),
            price: 25.5,
            image_url: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], serde_json::json!(25.5));
    }
}
