//! Clip entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clips")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_hour_id: i32,
    #[sea_orm(unique)]
    pub filename: String,
    #[sea_orm(column_type = "Text")]
    pub file_path: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    /// Never populated by the service; reserved for a downstream consumer.
    pub duration_seconds: Option<i32>,
    pub camera_name: Option<String>,
    pub upload_status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking_hour::Entity",
        from = "Column::BookingHourId",
        to = "super::booking_hour::Column::Id"
    )]
    BookingHour,
}

impl Related<super::booking_hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingHour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
