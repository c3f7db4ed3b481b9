pub mod health;
pub mod meal_kits;
pub mod swagger;
pub mod users;
