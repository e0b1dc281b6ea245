//! Test utilities for Ismism
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde_json::json;
use uuid::Uuid;

use crate::{
    config::{Config, Environment, LogFormat},
    db::entities::{art_movement, artist, artwork, timeline_node},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing.
/// The pool is pinned to one connection since every SQLite memory connection
/// is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        cors_origin: None,
        environment: Environment::Development,
        jwt_secret: None,
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a timeline node with empty lists and the origin position
pub async fn create_test_node(
    db: &DatabaseConnection,
    title: &str,
    year: i32,
) -> timeline_node::Model {
    create_test_node_with_influences(db, title, year, &[]).await
}

pub async fn create_test_node_with_influences(
    db: &DatabaseConnection,
    title: &str,
    year: i32,
    influenced_by: &[&str],
) -> timeline_node::Model {
    let now = Utc::now().into();
    let node = timeline_node::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(None),
        year: Set(year),
        image_url: Set(None),
        artists: Set(json!([])),
        style_movement: Set(None),
        influences: Set(json!([])),
        influenced_by: Set(json!(influenced_by)),
        tags: Set(json!([])),
        position_x: Set(0.0),
        position_y: Set(0.0),
        created_at: Set(now),
        updated_at: Set(now),
    };

    node.insert(db).await.expect("Failed to insert test timeline node")
}

/// Create an art movement in the database
pub async fn create_test_movement(
    db: &DatabaseConnection,
    name: &str,
    start_year: i32,
    tags: &[&str],
) -> art_movement::Model {
    let now = Utc::now().into();
    let movement = art_movement::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(format!("{} description", name)),
        start_year: Set(start_year),
        end_year: Set(None),
        theoretical_foundation: Set(None),
        forms: Set(json!([])),
        representative_artists: Set(json!([])),
        characteristics: Set(json!([])),
        tags: Set(json!(tags)),
        context: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    movement.insert(db).await.expect("Failed to insert test art movement")
}

/// Create an artist in the database
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    movements: &[Uuid],
) -> artist::Model {
    let now = Utc::now().into();
    let artist = artist::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        birth_year: Set(None),
        death_year: Set(None),
        nationality: Set(None),
        biography: Set(None),
        movements: Set(json!(movements)),
        notable_works: Set(json!([])),
        photos: Set(json!([])),
        created_at: Set(now),
        updated_at: Set(now),
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create an artwork in the database
pub async fn create_test_artwork(
    db: &DatabaseConnection,
    title: &str,
    artist_id: Option<Uuid>,
    movement_id: Option<Uuid>,
) -> artwork::Model {
    let now = Utc::now().into();
    let artwork = artwork::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        artist_id: Set(artist_id),
        movement_id: Set(movement_id),
        year_created: Set(None),
        medium: Set(None),
        dimensions: Set(None),
        location: Set(None),
        description: Set(None),
        images: Set(json!([])),
        created_at: Set(now),
        updated_at: Set(now),
    };

    artwork.insert(db).await.expect("Failed to insert test artwork")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        // Verify we can query the database (it has tables from migrations)
        let nodes = timeline_node::Entity::find().all(&db).await.unwrap();
        assert_eq!(nodes.len(), 0);
    }

    #[tokio::test]
    async fn test_create_test_node() {
        let db = setup_test_db().await;
        let node = create_test_node(&db, "Dada", 1916).await;

        assert_eq!(node.title, "Dada");
        assert_eq!(node.year, 1916);
        assert_eq!(node.position_x, 0.0);
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        create_test_movement(&db1, "Cubism", 1907, &[]).await;
        create_test_movement(&db2, "Fauvism", 1905, &[]).await;

        let db1_movements = art_movement::Entity::find().all(&db1).await.unwrap();
        let db2_movements = art_movement::Entity::find().all(&db2).await.unwrap();

        assert_eq!(db1_movements.len(), 1);
        assert_eq!(db2_movements.len(), 1);
        assert_eq!(db1_movements[0].name, "Cubism");
        assert_eq!(db2_movements[0].name, "Fauvism");
    }
}
