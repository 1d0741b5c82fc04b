use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_warps_table::Migration),
            Box::new(m20250301_000002_create_fabric_cuts_table::Migration),
            Box::new(m20250301_000003_create_movements_tables::Migration),
            Box::new(m20250301_000004_create_processing_tables::Migration),
            Box::new(m20250301_000005_create_wage_invoices_tables::Migration),
            Box::new(m20250301_000006_create_sequence_counters_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250301_000001_create_warps_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_warps_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warps::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Warps::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Warps::WarpNumber).string().not_null())
                        .col(ColumnDef::new(Warps::Quantity).decimal().not_null())
                        .col(ColumnDef::new(Warps::OrderRef).string().null())
                        .col(ColumnDef::new(Warps::LoomRef).string().null())
                        .col(ColumnDef::new(Warps::Status).string().not_null())
                        .col(
                            ColumnDef::new(Warps::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warps::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warps_warp_number")
                        .table(Warps::Table)
                        .col(Warps::WarpNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warps::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Warps {
        Table,
        Id,
        WarpNumber,
        Quantity,
        OrderRef,
        LoomRef,
        Status,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000002_create_fabric_cuts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_fabric_cuts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(FabricCuts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FabricCuts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(FabricCuts::FabricNumber).string().not_null())
                        .col(ColumnDef::new(FabricCuts::WarpId).uuid().not_null())
                        .col(ColumnDef::new(FabricCuts::Quantity).decimal().not_null())
                        .col(ColumnDef::new(FabricCuts::Location).string().not_null())
                        .col(
                            ColumnDef::new(FabricCuts::InspectedQuantity)
                                .decimal()
                                .null(),
                        )
                        .col(ColumnDef::new(FabricCuts::MistakeQuantity).decimal().null())
                        .col(ColumnDef::new(FabricCuts::ActualQuantity).decimal().null())
                        .col(ColumnDef::new(FabricCuts::Mistakes).json_binary().null())
                        .col(ColumnDef::new(FabricCuts::Inspector1).string().null())
                        .col(ColumnDef::new(FabricCuts::Inspector2).string().null())
                        .col(
                            ColumnDef::new(FabricCuts::InspectedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(FabricCuts::ProcessingOrderId).uuid().null())
                        .col(
                            ColumnDef::new(FabricCuts::IsProcessingReceived)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(FabricCuts::WageInvoiceId).uuid().null())
                        .col(
                            ColumnDef::new(FabricCuts::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(FabricCuts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FabricCuts::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(FabricCuts::Version)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_fabric_cuts_fabric_number")
                        .table(FabricCuts::Table)
                        .col(FabricCuts::FabricNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_fabric_cuts_warp_id")
                        .table(FabricCuts::Table)
                        .col(FabricCuts::WarpId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_fabric_cuts_processing_order_id")
                        .table(FabricCuts::Table)
                        .col(FabricCuts::ProcessingOrderId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FabricCuts::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum FabricCuts {
        Table,
        Id,
        FabricNumber,
        WarpId,
        Quantity,
        Location,
        InspectedQuantity,
        MistakeQuantity,
        ActualQuantity,
        Mistakes,
        Inspector1,
        Inspector2,
        InspectedAt,
        ProcessingOrderId,
        IsProcessingReceived,
        WageInvoiceId,
        IsDeleted,
        CreatedAt,
        UpdatedAt,
        Version,
    }
}

mod m20250301_000003_create_movements_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_movements_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Movements::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Movements::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Movements::MovementOrderNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Movements::FromLocation).string().not_null())
                        .col(ColumnDef::new(Movements::ToLocation).string().not_null())
                        .col(ColumnDef::new(Movements::MovedBy).string().not_null())
                        .col(ColumnDef::new(Movements::Status).string().not_null())
                        .col(ColumnDef::new(Movements::ReceivedBy).string().null())
                        .col(
                            ColumnDef::new(Movements::ReceivedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Movements::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_movements_order_number")
                        .table(Movements::Table)
                        .col(Movements::MovementOrderNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_movements_status")
                        .table(Movements::Table)
                        .col(Movements::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MovementCuts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MovementCuts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MovementCuts::MovementId).uuid().not_null())
                        .col(ColumnDef::new(MovementCuts::FabricCutId).uuid().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_movement_cuts_movement_id")
                        .table(MovementCuts::Table)
                        .col(MovementCuts::MovementId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_movement_cuts_fabric_cut_id")
                        .table(MovementCuts::Table)
                        .col(MovementCuts::FabricCutId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MovementCuts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Movements::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Movements {
        Table,
        Id,
        MovementOrderNumber,
        FromLocation,
        ToLocation,
        MovedBy,
        Status,
        ReceivedBy,
        ReceivedAt,
        CreatedAt,
    }

    #[derive(Iden)]
    pub enum MovementCuts {
        Table,
        Id,
        MovementId,
        FabricCutId,
    }
}

mod m20250301_000004_create_processing_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000004_create_processing_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProcessingOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProcessingOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::OrderFormNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::OrderFormSeq)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::ProcessingCenter)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::Processes)
                                .json_binary()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::VehicleNumber)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(ProcessingOrders::DeliveryDate).date().null())
                        .col(
                            ColumnDef::new(ProcessingOrders::TotalQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::ReceivedCutCursor)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(ProcessingOrders::Status).string().not_null())
                        .col(
                            ColumnDef::new(ProcessingOrders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingOrders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_processing_orders_order_form_number")
                        .table(ProcessingOrders::Table)
                        .col(ProcessingOrders::OrderFormNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProcessingSentCuts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProcessingSentCuts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingSentCuts::ProcessingOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingSentCuts::FabricCutId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingSentCuts::FabricNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingSentCuts::WarpNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingSentCuts::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_processing_sent_cuts_order_id")
                        .table(ProcessingSentCuts::Table)
                        .col(ProcessingSentCuts::ProcessingOrderId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProcessingDeliveries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProcessingDeliveries::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::ProcessingOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::DeliverySeq)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::DeliveryNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::ReceivedBy)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::Location)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::CutsReceived)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::TotalQuantityReceived)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProcessingDeliveries::ReceivedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_processing_deliveries_order_seq")
                        .table(ProcessingDeliveries::Table)
                        .col(ProcessingDeliveries::ProcessingOrderId)
                        .col(ProcessingDeliveries::DeliverySeq)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ReceivedFabricCuts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::ProcessingOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::DeliveryId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::CutSeq)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::FabricNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReceivedFabricCuts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_received_fabric_cuts_fabric_number")
                        .table(ReceivedFabricCuts::Table)
                        .col(ReceivedFabricCuts::FabricNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_received_fabric_cuts_order_cut_seq")
                        .table(ReceivedFabricCuts::Table)
                        .col(ReceivedFabricCuts::ProcessingOrderId)
                        .col(ReceivedFabricCuts::CutSeq)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ReceivedFabricCuts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProcessingDeliveries::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProcessingSentCuts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProcessingOrders::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum ProcessingOrders {
        Table,
        Id,
        OrderFormNumber,
        OrderFormSeq,
        ProcessingCenter,
        Processes,
        VehicleNumber,
        DeliveryDate,
        TotalQuantity,
        ReceivedCutCursor,
        Status,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    pub enum ProcessingSentCuts {
        Table,
        Id,
        ProcessingOrderId,
        FabricCutId,
        FabricNumber,
        WarpNumber,
        Quantity,
    }

    #[derive(Iden)]
    pub enum ProcessingDeliveries {
        Table,
        Id,
        ProcessingOrderId,
        DeliverySeq,
        DeliveryNumber,
        ReceivedBy,
        Location,
        CutsReceived,
        TotalQuantityReceived,
        ReceivedAt,
    }

    #[derive(Iden)]
    pub enum ReceivedFabricCuts {
        Table,
        Id,
        ProcessingOrderId,
        DeliveryId,
        CutSeq,
        FabricNumber,
        Quantity,
        CreatedAt,
    }
}

mod m20250301_000005_create_wage_invoices_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000005_create_wage_invoices_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WageInvoices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WageInvoices::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::InvoiceNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WageInvoices::WarpId).uuid().not_null())
                        .col(
                            ColumnDef::new(WageInvoices::RatePerMeter)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::TotalInspectedQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::TotalMistakeQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::TotalActualQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WageInvoices::TotalWages).decimal().not_null())
                        .col(ColumnDef::new(WageInvoices::Status).string().not_null())
                        .col(
                            ColumnDef::new(WageInvoices::ValuesUpdatedDuringApproval)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::ApprovedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::PaidAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoices::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_wage_invoices_invoice_number")
                        .table(WageInvoices::Table)
                        .col(WageInvoices::InvoiceNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_wage_invoices_warp_id")
                        .table(WageInvoices::Table)
                        .col(WageInvoices::WarpId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_wage_invoices_status")
                        .table(WageInvoices::Table)
                        .col(WageInvoices::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WageInvoiceCuts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WageInvoiceCuts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::WageInvoiceId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::FabricCutId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::FabricNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::InspectedQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::MistakeQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WageInvoiceCuts::ActualQuantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WageInvoiceCuts::Inspector1).string().null())
                        .col(ColumnDef::new(WageInvoiceCuts::Inspector2).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_wage_invoice_cuts_invoice_id")
                        .table(WageInvoiceCuts::Table)
                        .col(WageInvoiceCuts::WageInvoiceId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WageInvoiceCuts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(WageInvoices::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum WageInvoices {
        Table,
        Id,
        InvoiceNumber,
        WarpId,
        RatePerMeter,
        TotalInspectedQuantity,
        TotalMistakeQuantity,
        TotalActualQuantity,
        TotalWages,
        Status,
        ValuesUpdatedDuringApproval,
        ApprovedAt,
        PaidAt,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    pub enum WageInvoiceCuts {
        Table,
        Id,
        WageInvoiceId,
        FabricCutId,
        FabricNumber,
        Quantity,
        InspectedQuantity,
        MistakeQuantity,
        ActualQuantity,
        Inspector1,
        Inspector2,
    }
}

mod m20250301_000006_create_sequence_counters_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000006_create_sequence_counters_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SequenceCounters::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SequenceCounters::ScopeKey)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SequenceCounters::Value)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SequenceCounters::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum SequenceCounters {
        Table,
        ScopeKey,
        Value,
    }
}
