use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_category enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductCategory::Enum)
                    .values([ProductCategory::Engine, ProductCategory::Oil])
                    .to_owned(),
            )
            .await?;

        // Create product_stock table
        manager
            .create_table(
                Table::create()
                    .table(ProductStock::Table)
                    .if_not_exists()
                    .col(pk_uuid(ProductStock::Id))
                    .col(string(ProductStock::Name))
                    .col(
                        ColumnDef::new(ProductStock::Category)
                            .enumeration(
                                ProductCategory::Enum,
                                [ProductCategory::Engine, ProductCategory::Oil],
                            )
                            .not_null(),
                    )
                    .col(big_integer(ProductStock::CurrentStock).default(0))
                    .col(big_integer(ProductStock::MinimumStock).default(0))
                    .col(big_integer(ProductStock::AverageDailySales).default(0))
                    .col(big_integer(ProductStock::LeadTimeDays).default(0))
                    .col(double(ProductStock::UnitCost))
                    .col(small_integer(ProductStock::CriticalityLevel).default(1))
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_product_stock_category")
                    .table(ProductStock::Table)
                    .col(ProductStock::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_stock_name")
                    .table(ProductStock::Table)
                    .col(ProductStock::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductStock::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductCategory::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductStock {
    Table,
    Id,
    Name,
    Category,
    CurrentStock,
    MinimumStock,
    AverageDailySales,
    LeadTimeDays,
    UnitCost,
    CriticalityLevel,
}

#[derive(DeriveIden)]
enum ProductCategory {
    #[sea_orm(iden = "product_category")]
    Enum,
    #[sea_orm(iden = "engine")]
    Engine,
    #[sea_orm(iden = "oil")]
    Oil,
}
