//! Create contact_persons table
//!
//! `email_key` holds the case-folded email and carries the unique index, so
//! uniqueness follows the same per-character fold as the domain.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactPersons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactPersons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactPersons::FirstName)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactPersons::FullName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactPersons::Email).string_len(50).not_null())
                    .col(
                        ColumnDef::new(ContactPersons::EmailKey)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactPersons::PhoneNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactPersons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactPersons::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk_contact_persons_email")
                    .table(ContactPersons::Table)
                    .col(ContactPersons::EmailKey)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactPersons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ContactPersons {
    Table,
    Id,
    FirstName,
    FullName,
    Email,
    EmailKey,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
}
