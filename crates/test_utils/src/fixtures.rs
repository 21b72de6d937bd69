//! Pre-built request bodies

use serde_json::{json, Value};

/// A valid `POST /upload` body
pub fn upload_body(country: &str, first_name: &str, age: u32) -> Value {
    json!({
        "country": country,
        "firstName": first_name,
        "age": age,
        "streetName": "742 Evergreen Terrace",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62704",
    })
}

/// A `POST /insurance` body
pub fn insurance_body(country: &str, unique_id: &str) -> Value {
    json!({
        "country": country,
        "uniqueId": unique_id,
    })
}
