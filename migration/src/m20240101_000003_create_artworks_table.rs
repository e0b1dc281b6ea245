use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_art_movements_table::ArtMovements;
use super::m20240101_000002_create_artists_table::Artists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artworks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Artworks::Title)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Artworks::ArtistId).uuid())
                    .col(ColumnDef::new(Artworks::MovementId).uuid())
                    .col(ColumnDef::new(Artworks::YearCreated).integer())
                    .col(ColumnDef::new(Artworks::Medium).text())
                    .col(ColumnDef::new(Artworks::Dimensions).text())
                    .col(ColumnDef::new(Artworks::Location).text())
                    .col(ColumnDef::new(Artworks::Description).text())
                    .col(ColumnDef::new(Artworks::Images).json().not_null())
                    .col(
                        ColumnDef::new(Artworks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Artworks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artworks_artist_id")
                            .from(Artworks::Table, Artworks::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artworks_movement_id")
                            .from(Artworks::Table, Artworks::MovementId)
                            .to(ArtMovements::Table, ArtMovements::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_artist_id")
                    .table(Artworks::Table)
                    .col(Artworks::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_movement_id")
                    .table(Artworks::Table)
                    .col(Artworks::MovementId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artworks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artworks {
    Table,
    Id,
    Title,
    ArtistId,
    MovementId,
    YearCreated,
    Medium,
    Dimensions,
    Location,
    Description,
    Images,
    CreatedAt,
    UpdatedAt,
}
