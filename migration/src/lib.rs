pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_art_movements_table;
mod m20240101_000002_create_artists_table;
mod m20240101_000003_create_artworks_table;
mod m20240101_000004_create_timeline_nodes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_art_movements_table::Migration),
            Box::new(m20240101_000002_create_artists_table::Migration),
            Box::new(m20240101_000003_create_artworks_table::Migration),
            Box::new(m20240101_000004_create_timeline_nodes_table::Migration),
        ]
    }
}
