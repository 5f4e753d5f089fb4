use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ordered membership; listing order is (order ASC, created_at DESC)
        manager
            .create_table(
                Table::create()
                    .table(PlaylistItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlaylistItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PlaylistItems::PlaylistId).uuid().not_null())
                    .col(ColumnDef::new(PlaylistItems::VideoId).uuid().not_null())
                    .col(
                        ColumnDef::new(PlaylistItems::Order)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(PlaylistItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_items_playlist_id")
                            .from(PlaylistItems::Table, PlaylistItems::PlaylistId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_items_video_id")
                            .from(PlaylistItems::Table, PlaylistItems::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_playlist_items_playlist_id
                ON playlist_items (playlist_id, "order");
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
                DROP INDEX IF EXISTS idx_playlist_items_playlist_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlaylistItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PlaylistItems {
    Table,
    Id,
    PlaylistId,
    VideoId,
    Order,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Playlists {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
}
