use serde::{Deserialize, Serialize};

/// A purchasable recipe bundle as stored in the `mealKits` collection.
/// `id` (epoch millis as text) and `createdAt` (RFC 3339) are stamped by the
/// server at creation time; everything else comes from the client.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealKit {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub price: f64,
    pub prep_time: String,
    pub servings: i32,
    pub difficulty: String,
    pub cuisine: String,
    pub dietary_tags: Vec<String>,
    pub chef: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub user_email: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let kit = MealKit {
            id: "1722945600000".into(),
            title: "Thai Green Curry Bowl".into(),
            short_description: "Aromatic coconut curry".into(),
            full_description: "Aromatic coconut curry with fresh vegetables".into(),
            price: 32.99,
            prep_time: "40 min".into(),
            servings: 2,
            difficulty: "Easy".into(),
            cuisine: "Thai".into(),
            dietary_tags: vec!["Vegan".into(), "Gluten-Free".into()],
            chef: "Chef Somying Lee".into(),
            image: "https://example.com/curry.jpg".into(),
            ingredients: vec!["Thai Green Curry Paste".into(), "Coconut Milk".into()],
            user_email: "demo@chefkit.com".into(),
            created_at: "2024-08-06T12:00:00.000Z".into(),
        };

        let value = serde_json::to_value(&kit).unwrap();
        assert_eq!(value["shortDescription"], "Aromatic coconut curry");
        assert_eq!(value["prepTime"], "40 min");
        assert_eq!(value["dietaryTags"][0], "Vegan");
        assert_eq!(value["userEmail"], "demo@chefkit.com");
        assert_eq!(value["createdAt"], "2024-08-06T12:00:00.000Z");
    }
}
