pub mod meal_kit;
pub mod user;

pub use meal_kit::*;
pub use user::*;
