use crate::database::{MongoDB, MEAL_KITS_COLLECTION};
use crate::models::MealKit;
use crate::utils::error::AppError;
use chrono::SecondsFormat;
use mongodb::bson::doc;

pub struct SeedReport {
    pub inserted: usize,
    pub total: u64,
}

/// Catálogo de demonstração inserido pelo binário de seed. `createdAt` é
/// carimbado na hora da execução, então um seed recente ordena no topo de
/// `sort=newest`.
pub fn demo_meal_kits() -> Vec<MealKit> {
    let now = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    vec![
        MealKit {
            id: "1".into(),
            title: "Italian Pasta Carbonara".into(),
            short_description: "Authentic creamy carbonara with pancetta and egg sauce".into(),
            full_description: "Experience the true taste of Rome with our classic Carbonara recipe. Made with crispy pancetta, farm-fresh eggs, aged Parmigiano-Reggiano, and al dente spaghetti.".into(),
            price: 28.99,
            prep_time: "30 min".into(),
            servings: 2,
            difficulty: "Medium".into(),
            cuisine: "Italian".into(),
            dietary_tags: vec!["High Protein".into()],
            chef: "Chef Marco Rossi".into(),
            image: "https://images.unsplash.com/photo-1612874742237-6526221588e3?w=800&q=80".into(),
            ingredients: vec![
                "400g Spaghetti".into(),
                "200g Pancetta".into(),
                "4 Fresh Eggs".into(),
                "100g Parmigiano-Reggiano".into(),
                "Black Pepper".into(),
                "Sea Salt".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now.clone(),
        },
        MealKit {
            id: "2".into(),
            title: "Thai Green Curry Bowl".into(),
            short_description: "Aromatic coconut curry with fresh vegetables".into(),
            full_description: "Discover the vibrant flavors of Thailand with this aromatic green curry. Our kit includes authentic Thai curry paste, creamy coconut milk, fresh vegetables, and fragrant jasmine rice.".into(),
            price: 32.99,
            prep_time: "40 min".into(),
            servings: 2,
            difficulty: "Easy".into(),
            cuisine: "Thai".into(),
            dietary_tags: vec!["Vegan".into(), "Gluten-Free".into()],
            chef: "Chef Somying Lee".into(),
            image: "https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd?w=800&q=80".into(),
            ingredients: vec![
                "Thai Green Curry Paste".into(),
                "Coconut Milk".into(),
                "Mixed Vegetables".into(),
                "Jasmine Rice".into(),
                "Thai Basil".into(),
                "Lime".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now.clone(),
        },
        MealKit {
            id: "3".into(),
            title: "Mexican Street Tacos Kit".into(),
            short_description: "Authentic street-style tacos with fresh toppings".into(),
            full_description: "Bring the flavors of Mexico City to your table! Our taco kit features hand-pressed corn tortillas, perfectly seasoned carne asada, fresh pico de gallo, and all the authentic toppings.".into(),
            price: 26.99,
            prep_time: "25 min".into(),
            servings: 4,
            difficulty: "Easy".into(),
            cuisine: "Mexican".into(),
            dietary_tags: vec!["High Protein".into()],
            chef: "Chef Carlos Rodriguez".into(),
            image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=800&q=80".into(),
            ingredients: vec![
                "Corn Tortillas".into(),
                "Marinated Beef".into(),
                "Fresh Cilantro".into(),
                "White Onion".into(),
                "Lime Wedges".into(),
                "Salsa Verde".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now.clone(),
        },
        MealKit {
            id: "4".into(),
            title: "Mediterranean Buddha Bowl".into(),
            short_description: "Wholesome bowl with falafel and tahini".into(),
            full_description: "A nutritious and colorful Mediterranean feast in a bowl. Features crispy homemade falafel, fresh vegetables, creamy hummus, and our signature tahini dressing.".into(),
            price: 24.99,
            prep_time: "35 min".into(),
            servings: 2,
            difficulty: "Medium".into(),
            cuisine: "Mediterranean".into(),
            dietary_tags: vec!["Vegetarian".into(), "High Fiber".into()],
            chef: "Chef Yuki Tanaka".into(),
            image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&q=80".into(),
            ingredients: vec![
                "Chickpeas".into(),
                "Mixed Greens".into(),
                "Cherry Tomatoes".into(),
                "Cucumber".into(),
                "Tahini Sauce".into(),
                "Pita Bread".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now.clone(),
        },
        MealKit {
            id: "5".into(),
            title: "Japanese Ramen Bowl".into(),
            short_description: "Rich tonkotsu broth with fresh noodles".into(),
            full_description: "Master the art of Japanese ramen at home! Our kit includes a rich, 12-hour simmered tonkotsu broth, fresh alkaline noodles, perfectly seasoned chashu pork, and traditional toppings.".into(),
            price: 34.99,
            prep_time: "20 min".into(),
            servings: 2,
            difficulty: "Easy".into(),
            cuisine: "Japanese".into(),
            dietary_tags: vec!["High Protein".into()],
            chef: "Chef Yuki Tanaka".into(),
            image: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=800&q=80".into(),
            ingredients: vec![
                "Fresh Ramen Noodles".into(),
                "Tonkotsu Broth".into(),
                "Chashu Pork".into(),
                "Soft-Boiled Egg".into(),
                "Nori Seaweed".into(),
                "Green Onions".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now.clone(),
        },
        MealKit {
            id: "6".into(),
            title: "French Coq au Vin".into(),
            short_description: "Classic French chicken braised in red wine".into(),
            full_description: "Experience French countryside cooking with this timeless classic. Tender chicken slowly braised in rich red wine with pearl onions, mushrooms, and aromatic herbs.".into(),
            price: 38.99,
            prep_time: "90 min".into(),
            servings: 4,
            difficulty: "Hard".into(),
            cuisine: "French".into(),
            dietary_tags: vec!["High Protein".into()],
            chef: "Chef Marco Rossi".into(),
            image: "https://images.unsplash.com/photo-1598103442097-8b74394b95c6?w=800&q=80".into(),
            ingredients: vec![
                "Chicken Pieces".into(),
                "Red Wine".into(),
                "Pearl Onions".into(),
                "Mushrooms".into(),
                "Bacon Lardons".into(),
                "Fresh Herbs".into(),
            ],
            user_email: "demo@chefkit.com".into(),
            created_at: now,
        },
    ]
}

/// Resets the mealKits collection to the demo catalog. Destructive: clears
/// everything before inserting.
pub async fn run(db: &MongoDB) -> Result<SeedReport, AppError> {
    let collection = db.collection::<MealKit>(MEAL_KITS_COLLECTION);

    let deleted = collection.delete_many(doc! {}).await?;
    log::info!("🧹 Cleared {} existing meal kits", deleted.deleted_count);

    let kits = demo_meal_kits();
    let result = collection.insert_many(&kits).await?;
    log::info!(
        "✅ Inserted {} meal kits into {} collection",
        result.inserted_ids.len(),
        MEAL_KITS_COLLECTION
    );

    let total = collection.count_documents(doc! {}).await?;

    Ok(SeedReport {
        inserted: result.inserted_ids.len(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_six_kits() {
        assert_eq!(demo_meal_kits().len(), 6);
    }

    #[test]
    fn demo_ids_are_distinct() {
        let kits = demo_meal_kits();
        let mut ids: Vec<&str> = kits.iter().map(|k| k.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn demo_created_at_is_rfc3339() {
        for kit in demo_meal_kits() {
            assert!(
                chrono::DateTime::parse_from_rfc3339(&kit.created_at).is_ok(),
                "bad timestamp on {}",
                kit.title
            );
        }
    }

    #[test]
    fn demo_catalog_covers_the_search_fixture() {
        // "curry" must match the Thai kit by title, and only that kit
        let kits = demo_meal_kits();
        let matches: Vec<&MealKit> = kits
            .iter()
            .filter(|k| k.title.to_lowercase().contains("curry"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].cuisine, "Thai");
    }
}
