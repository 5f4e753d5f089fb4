pub use sea_orm_migration::prelude::*;

mod m20260806_101500_create_table_categories;
mod m20260806_101600_create_table_videos;
mod m20260806_101700_create_table_playlists;
mod m20260806_101800_create_table_playlist_videos;
mod m20260806_101900_create_table_playlist_items;
mod m20260806_102000_create_table_tagged_items;
mod m20260806_102100_create_table_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260806_101500_create_table_categories::Migration),
            Box::new(m20260806_101600_create_table_videos::Migration),
            Box::new(m20260806_101700_create_table_playlists::Migration),
            Box::new(m20260806_101800_create_table_playlist_videos::Migration),
            Box::new(m20260806_101900_create_table_playlist_items::Migration),
            Box::new(m20260806_102000_create_table_tagged_items::Migration),
            Box::new(m20260806_102100_create_table_ratings::Migration),
        ]
    }
}
