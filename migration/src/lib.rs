pub use sea_orm_migration::prelude::*;

mod m20250610_101500_create_funds_table;
mod m20250610_101830_create_operations_table;
mod m20250610_102145_create_acquisitions_table;
mod m20250610_102410_create_matches_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_101500_create_funds_table::Migration),
            Box::new(m20250610_101830_create_operations_table::Migration),
            Box::new(m20250610_102145_create_acquisitions_table::Migration),
            Box::new(m20250610_102410_create_matches_table::Migration),
        ]
    }
}
