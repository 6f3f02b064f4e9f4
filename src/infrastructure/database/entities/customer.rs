//! Customer entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer company row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Legal name
    pub name: String,

    pub commercial_name: String,

    pub email: String,

    /// Case-folded `email`; unique
    #[sea_orm(unique)]
    pub email_key: String,

    /// CNPJ or other registry identifier, as entered
    pub company_identity: String,

    /// Case-folded `company_identity`; unique
    #[sea_orm(unique)]
    pub company_identity_key: String,

    pub contact_person_id: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contact_person::Entity",
        from = "Column::ContactPersonId",
        to = "super::contact_person::Column::Id",
        on_delete = "Cascade"
    )]
    ContactPerson,
}

impl Related<super::contact_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactPerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
