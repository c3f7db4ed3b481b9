pub mod meal_kit_service;
pub mod user_service;

pub use meal_kit_service::*;
pub use user_service::*;
