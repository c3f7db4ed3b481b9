use crate::database::{MongoDB, USERS_COLLECTION};
use crate::models::User;
use crate::utils::error::{is_duplicate_key_error, AppError};
use futures::stream::StreamExt;
use mongodb::bson::{doc, to_document, Document};
use mongodb::results::InsertOneResult;

pub enum CreateUserOutcome {
    Created(InsertOneResult),
    AlreadyExists,
}

/// Lista todos os usuários cadastrados.
pub async fn get_all_users(db: &MongoDB) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(USERS_COLLECTION);

    let mut cursor = collection.find(doc! {}).await?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(user),
            Err(e) => log::error!("❌ Failed to read user document: {}", e),
        }
    }

    Ok(users)
}

/// Insere o usuário se o email ainda não estiver cadastrado. The soft
/// existence check keeps the friendly response; the unique index on
/// users(email) absorbs the race between two simultaneous registrations.
pub async fn create_user(db: &MongoDB, user: &User) -> Result<CreateUserOutcome, AppError> {
    let collection = db.collection::<Document>(USERS_COLLECTION);

    let existing = collection.find_one(doc! { "email": &user.email }).await?;
    if existing.is_some() {
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let new_user = to_document(user)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid user payload: {}", e)))?;

    match collection.insert_one(new_user).await {
        Ok(result) => Ok(CreateUserOutcome::Created(result)),
        Err(e) if is_duplicate_key_error(&e) => Ok(CreateUserOutcome::AlreadyExists),
        Err(e) => Err(e.into()),
    }
}

pub async fn get_user_by_email(db: &MongoDB, email: &str) -> Result<Option<Document>, AppError> {
    let collection = db.collection::<Document>(USERS_COLLECTION);

    let user = collection.find_one(doc! { "email": email }).await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn duplicate_email_is_a_noop() {
        let db = MongoDB::new("mongodb://localhost:27017/chefkitTestDB")
            .await
            .unwrap();

        let user: User = serde_json::from_value(serde_json::json!({
            "email": "dup@chefkit.com"
        }))
        .unwrap();

        let collection = db.collection::<Document>(USERS_COLLECTION);
        collection
            .delete_many(doc! { "email": &user.email })
            .await
            .unwrap();

        // First insert wins, the second is reported as already existing
        let first = create_user(&db, &user).await.unwrap();
        assert!(matches!(first, CreateUserOutcome::Created(_)));
        let second = create_user(&db, &user).await.unwrap();
        assert!(matches!(second, CreateUserOutcome::AlreadyExists));

        let count = collection
            .count_documents(doc! { "email": &user.email })
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn user_payload_converts_to_document() {
        let user: User = serde_json::from_value(serde_json::json!({
            "email": "demo@chefkit.com",
            "name": "Demo User"
        }))
        .unwrap();

        let doc = to_document(&user).unwrap();
        assert_eq!(doc.get_str("email").unwrap(), "demo@chefkit.com");
        assert_eq!(doc.get_str("name").unwrap(), "Demo User");
    }
}
