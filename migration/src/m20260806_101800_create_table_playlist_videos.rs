use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unordered membership join; rows die with either side
        manager
            .create_table(
                Table::create()
                    .table(PlaylistVideos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PlaylistVideos::PlaylistId).uuid().not_null())
                    .col(ColumnDef::new(PlaylistVideos::VideoId).uuid().not_null())
                    .col(
                        ColumnDef::new(PlaylistVideos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(PlaylistVideos::PlaylistId)
                            .col(PlaylistVideos::VideoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_videos_playlist_id")
                            .from(PlaylistVideos::Table, PlaylistVideos::PlaylistId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_videos_video_id")
                            .from(PlaylistVideos::Table, PlaylistVideos::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaylistVideos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PlaylistVideos {
    Table,
    PlaylistId,
    VideoId,
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
