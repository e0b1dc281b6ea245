use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtMovements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtMovements::Name)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ArtMovements::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtMovements::StartYear)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtMovements::EndYear).integer())
                    .col(ColumnDef::new(ArtMovements::TheoreticalFoundation).text())
                    .col(ColumnDef::new(ArtMovements::Forms).json().not_null())
                    .col(
                        ColumnDef::new(ArtMovements::RepresentativeArtists)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtMovements::Characteristics)
                            .json()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtMovements::Tags).json().not_null())
                    .col(ColumnDef::new(ArtMovements::Context).text())
                    .col(
                        ColumnDef::new(ArtMovements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtMovements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_art_movements_start_year")
                    .table(ArtMovements::Table)
                    .col(ArtMovements::StartYear)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtMovements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtMovements {
    Table,
    Id,
    Name,
    Description,
    StartYear,
    EndYear,
    TheoreticalFoundation,
    Forms,
    RepresentativeArtists,
    Characteristics,
    Tags,
    Context,
    CreatedAt,
    UpdatedAt,
}
