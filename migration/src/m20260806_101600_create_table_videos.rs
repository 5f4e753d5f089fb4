use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Videos::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Videos::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Videos::Description).text())
                    .col(ColumnDef::new(Videos::VideoRef).string_len(200).not_null())
                    .col(ColumnDef::new(Videos::Slug).string_len(200))
                    .col(
                        ColumnDef::new(Videos::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Videos::State)
                            .string_len(2)
                            .not_null()
                            .default("DR"),
                    )
                    .col(ColumnDef::new(Videos::PublishTimestamp).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Videos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Videos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The visibility predicate always narrows by state + stamp
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_videos_state_publish_timestamp
                ON videos (state, publish_timestamp);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_videos_updated_at
                BEFORE UPDATE ON videos
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_videos_updated_at ON videos;
                DROP INDEX IF EXISTS idx_videos_state_publish_timestamp;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
    Title,
    Description,
    VideoRef,
    Slug,
    Active,
    State,
    PublishTimestamp,
    CreatedAt,
    UpdatedAt,
}
