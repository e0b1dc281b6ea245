use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimelineNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimelineNodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimelineNodes::Title)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimelineNodes::Description).text())
                    .col(
                        ColumnDef::new(TimelineNodes::Year)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimelineNodes::ImageUrl).text())
                    .col(ColumnDef::new(TimelineNodes::Artists).json().not_null())
                    .col(ColumnDef::new(TimelineNodes::StyleMovement).text())
                    .col(ColumnDef::new(TimelineNodes::Influences).json().not_null())
                    .col(ColumnDef::new(TimelineNodes::InfluencedBy).json().not_null())
                    .col(ColumnDef::new(TimelineNodes::Tags).json().not_null())
                    .col(
                        ColumnDef::new(TimelineNodes::PositionX)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TimelineNodes::PositionY)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TimelineNodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimelineNodes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timeline_nodes_year")
                    .table(TimelineNodes::Table)
                    .col(TimelineNodes::Year)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimelineNodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimelineNodes {
    Table,
    Id,
    Title,
    Description,
    Year,
    ImageUrl,
    Artists,
    StyleMovement,
    Influences,
    InfluencedBy,
    Tags,
    PositionX,
    PositionY,
    CreatedAt,
    UpdatedAt,
}
