//! Create customers table
//!
//! Each customer references its own contact person; deleting the contact
//! person cascades to the customer. Unique indexes sit on the case-folded
//! `*_key` columns.

use sea_orm_migration::prelude::*;

use super::m20251116_000001_create_contact_persons::ContactPersons;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Customers::CommercialName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::Email).string_len(50).not_null())
                    .col(ColumnDef::new(Customers::EmailKey).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Customers::CompanyIdentity)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::CompanyIdentityKey)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::ContactPersonId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_contact_person")
                            .from(Customers::Table, Customers::ContactPersonId)
                            .to(ContactPersons::Table, ContactPersons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk_customer_email")
                    .table(Customers::Table)
                    .col(Customers::EmailKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk_customer_company_identity")
                    .table(Customers::Table)
                    .col(Customers::CompanyIdentityKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_customers_contact_person_id")
                    .table(Customers::Table)
                    .col(Customers::ContactPersonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Customers {
    Table,
    Id,
    Name,
    CommercialName,
    Email,
    EmailKey,
    CompanyIdentity,
    CompanyIdentityKey,
    ContactPersonId,
    CreatedAt,
    UpdatedAt,
}
