use sea_orm::entity::prelude::*;

/// Job posting. `status` holds the string encoding of
/// `megajob::model::job::JobStatus` (`active` or `inactive`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub company_id: i32,
    pub category_id: Option<i32>,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::job_category::Entity",
        from = "Column::CategoryId",
        to = "super::job_category::Column::Id"
    )]
    JobCategory,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::job_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobCategory.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
