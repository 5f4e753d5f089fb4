use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create playlists table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Playlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Playlists::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Playlists::ParentId).uuid())
                    .col(
                        ColumnDef::new(Playlists::Order)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Playlists::CategoryId).uuid())
                    .col(ColumnDef::new(Playlists::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Playlists::Kind)
                            .string_len(3)
                            .not_null()
                            .default("PLY"),
                    )
                    .col(ColumnDef::new(Playlists::Description).text())
                    .col(ColumnDef::new(Playlists::Slug).string_len(200))
                    .col(ColumnDef::new(Playlists::FeaturedVideoId).uuid())
                    .col(
                        ColumnDef::new(Playlists::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Playlists::State)
                            .string_len(2)
                            .not_null()
                            .default("DR"),
                    )
                    .col(ColumnDef::new(Playlists::PublishTimestamp).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Playlists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Playlists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Losing a parent, category or featured video must not
                    // take the playlist with it
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlists_parent_id")
                            .from(Playlists::Table, Playlists::ParentId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlists_category_id")
                            .from(Playlists::Table, Playlists::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlists_featured_video_id")
                            .from(Playlists::Table, Playlists::FeaturedVideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Typed listings always narrow by kind first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_playlists_kind
                ON playlists (kind);
                "#,
            )
            .await?;

        // Season lookups walk parent_id
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_playlists_parent_id
                ON playlists (parent_id);
                "#,
            )
            .await?;

        // Enforce GLOBAL slug uniqueness (case-insensitive)
        // Using lower(slug) avoids Rust/rust collisions without needing citext.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_playlists_slug_unique
                ON playlists (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_playlists_state_publish_timestamp
                ON playlists (state, publish_timestamp);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_playlists_updated_at
                BEFORE UPDATE ON playlists
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
                DROP TRIGGER IF EXISTS update_playlists_updated_at ON playlists;
                DROP INDEX IF EXISTS idx_playlists_kind;
                DROP INDEX IF EXISTS idx_playlists_parent_id;
                DROP INDEX IF EXISTS idx_playlists_slug_unique;
                DROP INDEX IF EXISTS idx_playlists_state_publish_timestamp;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Playlists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Playlists {
    Table,
    Id,
    ParentId,
    Order,
    CategoryId,
    Title,
    Kind,
    Description,
    Slug,
    FeaturedVideoId,
    Active,
    State,
    PublishTimestamp,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
}
