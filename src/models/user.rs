use serde::{Deserialize, Serialize};

/// Registration payload. Clients must send at least `email`; any extra
/// profile fields (display name, photo URL, ...) are stored verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct User {
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_survive_round_trip() {
        let raw = serde_json::json!({
            "email": "demo@chefkit.com",
            "name": "Demo User",
            "photoURL": "https://example.com/avatar.png"
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.email, "demo@chefkit.com");
        assert_eq!(user.extra["name"], "Demo User");

        // Flattened fields serialize back at the top level
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn missing_email_is_rejected() {
        let raw = serde_json::json!({ "name": "No Email" });
        assert!(serde_json::from_value::<User>(raw).is_err());
    }
}
