//! `SeaORM` Entity for accounts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub account_type: String,
    pub group_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_groups::Entity",
        from = "Column::GroupId",
        to = "super::account_groups::Column::Id"
    )]
    AccountGroups,
    #[sea_orm(has_many = "super::ledger_lines::Entity")]
    LedgerLines,
}

impl Related<super::account_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountGroups.def()
    }
}

impl Related<super::ledger_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
