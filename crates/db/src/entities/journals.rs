//! `SeaORM` Entity for journals table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ledger_lines::Entity")]
    LedgerLines,
}

impl Related<super::ledger_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
