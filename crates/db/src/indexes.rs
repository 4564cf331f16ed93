use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    // Users
    create_indexes(
        db,
        "users",
        vec![index_unique(bson::doc! { "email": 1 })],
    )
    .await?;

    // Invitations: slug uniqueness is the storage-level backstop for the
    // allocator's check-then-insert sequence.
    create_indexes(
        db,
        "invitations",
        vec![
            index_unique(bson::doc! { "slug": 1 }),
            index(bson::doc! { "user_id": 1, "created_at": -1 }),
        ],
    )
    .await?;

    // Guests: one RSVP row per (invitation, name)
    create_indexes(
        db,
        "guests",
        vec![
            index_unique(bson::doc! { "invitation_id": 1, "name": 1 }),
            index(bson::doc! { "invitation_id": 1, "created_at": -1 }),
        ],
    )
    .await?;

    // Wishes
    create_indexes(
        db,
        "wishes",
        vec![index(bson::doc! { "invitation_id": 1, "created_at": -1 })],
    )
    .await?;

    info!("All indexes ensured");
    Ok(())
}

fn index(keys: bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

fn index_unique(keys: bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
