use crate::database::{MongoDB, MEAL_KITS_COLLECTION};
use crate::utils::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

/// Builds the find() filter from the optional query parameters.
/// `cuisine=All` is the frontend sentinel for "no cuisine filter".
pub fn build_filter(cuisine: Option<&str>, search: Option<&str>) -> Document {
    let mut filter = doc! {};

    if let Some(cuisine) = cuisine {
        if cuisine != "All" {
            filter.insert("cuisine", cuisine);
        }
    }

    if let Some(search) = search {
        filter.insert(
            "$or",
            vec![
                doc! { "title": { "$regex": search, "$options": "i" } },
                doc! { "chef": { "$regex": search, "$options": "i" } },
                doc! { "cuisine": { "$regex": search, "$options": "i" } },
            ],
        );
    }

    filter
}

/// Maps the `sort` query parameter onto a sort document. Unknown values fall
/// back to database order, same as no parameter at all.
pub fn build_sort(sort: Option<&str>) -> Document {
    match sort {
        Some("price-asc") => doc! { "price": 1 },
        Some("price-desc") => doc! { "price": -1 },
        Some("newest") => doc! { "createdAt": -1 },
        _ => doc! {},
    }
}

/// Stamps the server-assigned fields onto a new meal kit: `id` is the
/// creation instant in epoch milliseconds as text, `createdAt` its RFC 3339
/// form.
pub fn stamp_new_meal_kit(kit: &mut Document, now: DateTime<Utc>) {
    kit.insert("id", now.timestamp_millis().to_string());
    kit.insert("createdAt", now.to_rfc3339_opts(SecondsFormat::Millis, true));
}

pub async fn list_meal_kits(
    db: &MongoDB,
    cuisine: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    let mut cursor = collection
        .find(build_filter(cuisine, search))
        .sort(build_sort(sort))
        .await?;

    let mut kits = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(kit) => kits.push(kit),
            Err(e) => log::error!("❌ Failed to read meal kit document: {}", e),
        }
    }

    Ok(kits)
}

/// Lookup by the application-level `id` field, not the Mongo `_id`.
pub async fn get_meal_kit_by_id(db: &MongoDB, id: &str) -> Result<Document, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("meal kit {}", id)))
}

pub async fn create_meal_kit(db: &MongoDB, mut kit: Document) -> Result<InsertOneResult, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    stamp_new_meal_kit(&mut kit, Utc::now());

    let result = collection.insert_one(kit).await?;
    Ok(result)
}

/// Partial merge: only the fields present in the body are touched. A
/// non-matching id yields matched_count == 0, which is not an error.
pub async fn update_meal_kit(
    db: &MongoDB,
    id: &str,
    fields: Document,
) -> Result<UpdateResult, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    let result = collection
        .update_one(doc! { "id": id }, doc! { "$set": fields })
        .await?;
    Ok(result)
}

pub async fn delete_meal_kit(db: &MongoDB, id: &str) -> Result<DeleteResult, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    let result = collection.delete_one(doc! { "id": id }).await?;
    Ok(result)
}

pub async fn list_meal_kits_by_user_email(
    db: &MongoDB,
    email: &str,
) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(MEAL_KITS_COLLECTION);

    let mut cursor = collection.find(doc! { "userEmail": email }).await?;

    let mut kits = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(kit) => kits.push(kit),
            Err(e) => log::error!("❌ Failed to read meal kit document: {}", e),
        }
    }

    Ok(kits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filter_by_cuisine() {
        assert_eq!(build_filter(Some("Thai"), None), doc! { "cuisine": "Thai" });
    }

    #[test]
    fn cuisine_all_means_no_filter() {
        assert_eq!(build_filter(Some("All"), None), doc! {});
        assert_eq!(build_filter(None, None), doc! {});
    }

    #[test]
    fn search_matches_title_chef_and_cuisine() {
        let filter = build_filter(None, Some("curry"));

        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 3);

        let title = or[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "curry");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn cuisine_and_search_combine() {
        let filter = build_filter(Some("Thai"), Some("curry"));
        assert_eq!(filter.get_str("cuisine").unwrap(), "Thai");
        assert!(filter.get_array("$or").is_ok());
    }

    #[test]
    fn sort_variants() {
        assert_eq!(build_sort(Some("price-asc")), doc! { "price": 1 });
        assert_eq!(build_sort(Some("price-desc")), doc! { "price": -1 });
        assert_eq!(build_sort(Some("newest")), doc! { "createdAt": -1 });
        assert_eq!(build_sort(Some("alphabetical")), doc! {});
        assert_eq!(build_sort(None), doc! {});
    }

    #[test]
    fn new_meal_kit_is_stamped_with_millis_id_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 8, 6, 12, 30, 45).unwrap();
        let mut kit = doc! { "title": "Thai Green Curry Bowl" };

        stamp_new_meal_kit(&mut kit, now);

        assert_eq!(
            kit.get_str("id").unwrap(),
            now.timestamp_millis().to_string()
        );
        assert_eq!(kit.get_str("createdAt").unwrap(), "2024-08-06T12:30:45.000Z");
        // Client fields are untouched
        assert_eq!(kit.get_str("title").unwrap(), "Thai Green Curry Bowl");
    }
}
