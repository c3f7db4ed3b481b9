pub mod meal_kits_seed;
