use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Artists::Name)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Artists::BirthYear).integer())
                    .col(ColumnDef::new(Artists::DeathYear).integer())
                    .col(ColumnDef::new(Artists::Nationality).text())
                    .col(ColumnDef::new(Artists::Biography).text())
                    .col(ColumnDef::new(Artists::Movements).json().not_null())
                    .col(ColumnDef::new(Artists::NotableWorks).json().not_null())
                    .col(ColumnDef::new(Artists::Photos).json().not_null())
                    .col(
                        ColumnDef::new(Artists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Artists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artists_name")
                    .table(Artists::Table)
                    .col(Artists::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artists {
    Table,
    Id,
    Name,
    BirthYear,
    DeathYear,
    Nationality,
    Biography,
    Movements,
    NotableWorks,
    Photos,
    CreatedAt,
    UpdatedAt,
}
