use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Sex;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(25))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(25))")]
    pub last_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub email: String,
    pub password: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sex: Sex,
    /// Comma separated language names, NULL when none were given.
    #[sea_orm(nullable)]
    pub languages: Option<String>,
    #[sea_orm(default_value = false)]
    pub is_admin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
