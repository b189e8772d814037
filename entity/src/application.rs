use sea_orm::entity::prelude::*;

/// A job seeker's application to a job.
///
/// The `(job_id, seeker_id)` pair is unique; the constraint lives in the
/// migration (and is recreated by the test builder) so the insert path can
/// rely on an atomic conflict instead of a check-then-insert sequence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_id: i32,
    pub seeker_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SeekerId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
