use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Generic annotation table: (content_kind, object_id) instead of a
        // foreign key, so tags attach to playlists and videos alike.
        manager
            .create_table(
                Table::create()
                    .table(TaggedItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaggedItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TaggedItems::Tag).string_len(100).not_null())
                    .col(
                        ColumnDef::new(TaggedItems::ContentKind)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TaggedItems::ObjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(TaggedItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_tagged_items_object
                ON tagged_items (content_kind, object_id);
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
                DROP INDEX IF EXISTS idx_tagged_items_object;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaggedItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TaggedItems {
    Table,
    Id,
    Tag,
    ContentKind,
    ObjectId,
    CreatedAt,
}
