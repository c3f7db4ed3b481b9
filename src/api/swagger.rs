use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefKit Service API",
        version = "1.0.0",
        description = "REST backend for the ChefKit meal-kit marketplace.\n\n**Collections:** users, mealKits (MongoDB).\n\n**Features:**\n- Meal kit catalog with cuisine filter, text search and sorting\n- Meal kit CRUD keyed on the application-level id\n- User registry keyed on email\n- Liveness probe\n\n**Note:** no authentication is implemented — every endpoint is public. Do not deploy this service as-is against untrusted traffic.",
        contact(
            name = "ChefKit Team",
            email = "support@chefkit.com"
        )
    ),
    paths(
        // Health
        crate::api::health::server_status,

        // Users
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::get_user,

        // Meal kits
        crate::api::meal_kits::get_meal_kits,
        crate::api::meal_kits::get_meal_kit,
        crate::api::meal_kits::create_meal_kit,
        crate::api::meal_kits::update_meal_kit,
        crate::api::meal_kits::delete_meal_kit,
        crate::api::meal_kits::get_my_meal_kits,
    ),
    components(
        schemas(
            crate::api::health::StatusResponse,
            crate::models::User,
            crate::models::MealKit,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe. Answers without touching the database."),
        (name = "Users", description = "User registry endpoints. Uniqueness is keyed on email."),
        (name = "MealKits", description = "Meal kit catalog: list, filter, sort and CRUD by application-level id."),
    )
)]
pub struct ApiDoc;
