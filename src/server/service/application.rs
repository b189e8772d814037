//! Job applications and their review lifecycle.

use sea_orm::{DatabaseConnection, DbErr, ItemsAndPagesNumber};

use crate::{
    model::{
        api::{Paginated, PaginationDto},
        application::{
            ApplicationDto, ApplicationFilter, CreateApplicationDto, UpdateApplicationStatusDto,
        },
        job::JobStatus,
        user::UserRole,
    },
    server::{
        data::{
            application::ApplicationRepository, company::CompanyRepository, job::JobRepository,
        },
        error::{application::ApplicationError, auth::AuthError, Error},
        service::page_params,
    },
};

fn to_application_dto(application: &entity::application::Model) -> Result<ApplicationDto, Error> {
    Ok(ApplicationDto {
        id: application.id,
        job_id: application.job_id,
        seeker_id: application.seeker_id,
        cover_letter: application.cover_letter.clone(),
        status: application.status.parse().map_err(Error::ParseError)?,
        created_at: application.created_at,
        updated_at: application.updated_at,
    })
}

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files an application for the authenticated job seeker.
    ///
    /// # Behavior
    /// 1. Only job seekers may apply
    /// 2. The job must exist and be accepting applications
    /// 3. The insert rides on the one-application-per-seeker-per-job index, a
    ///    repeat application comes back as a duplicate error without a prior
    ///    read
    pub async fn apply(
        &self,
        user: &entity::user::Model,
        application: CreateApplicationDto,
    ) -> Result<ApplicationDto, Error> {
        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;

        if role != UserRole::JobSeeker {
            return Err(AuthError::SeekerRequired(user.id).into());
        }

        let job = JobRepository::new(self.db)
            .find_by_id(application.job_id)
            .await?
            .ok_or(ApplicationError::JobNotFound(application.job_id))?;

        if job.status != JobStatus::Active.as_str() {
            return Err(ApplicationError::JobNotActive(job.id).into());
        }

        let created = match ApplicationRepository::new(self.db)
            .create(job.id, user.id, application.cover_letter)
            .await
        {
            Ok(application) => application,
            Err(DbErr::RecordNotInserted) => {
                return Err(ApplicationError::AlreadyApplied {
                    job_id: job.id,
                    seeker_id: user.id,
                }
                .into())
            }
            Err(err) => return Err(err.into()),
        };

        to_application_dto(&created)
    }

    /// Applications visible to the caller.
    ///
    /// Job seekers see their own applications, employers those filed against
    /// their company's postings and admins all of them.
    pub async fn list(
        &self,
        user: &entity::user::Model,
        filter: ApplicationFilter,
    ) -> Result<Paginated<ApplicationDto>, Error> {
        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;
        let (page, limit) = page_params(filter.page, filter.limit);
        let status = filter.status.map(|status| status.as_str());

        let application_repository = ApplicationRepository::new(self.db);

        let (applications, totals) = match role {
            UserRole::JobSeeker => {
                application_repository
                    .list_by_seeker(user.id, status, page, limit)
                    .await?
            }
            UserRole::Employer => {
                match CompanyRepository::new(self.db)
                    .find_by_employer(user.id)
                    .await?
                {
                    Some(company) => {
                        application_repository
                            .list_by_company(company.id, status, page, limit)
                            .await?
                    }
                    // an employer without a company has no applicants
                    None => (
                        Vec::new(),
                        ItemsAndPagesNumber {
                            number_of_items: 0,
                            number_of_pages: 0,
                        },
                    ),
                }
            }
            UserRole::Admin | UserRole::Hr => {
                application_repository.list_all(status, page, limit).await?
            }
        };

        Ok(Paginated {
            data: applications
                .iter()
                .map(to_application_dto)
                .collect::<Result<_, _>>()?,
            pagination: PaginationDto {
                page,
                limit,
                total: totals.number_of_items,
                pages: totals.number_of_pages,
            },
        })
    }

    /// Moves an application through its review lifecycle.
    pub async fn update_status(
        &self,
        user: &entity::user::Model,
        application_id: i32,
        update: UpdateApplicationStatusDto,
    ) -> Result<ApplicationDto, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        let application = application_repository
            .find_by_id(application_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        self.check_review_access(user, &application).await?;

        let updated = application_repository
            .update_status(application.id, update.status.as_str())
            .await?;

        to_application_dto(&updated)
    }

    /// Admins may review any application, an employer only those against
    /// their own company's postings.
    async fn check_review_access(
        &self,
        user: &entity::user::Model,
        application: &entity::application::Model,
    ) -> Result<(), Error> {
        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;

        if role.is_admin() {
            return Ok(());
        }

        let forbidden = ApplicationError::Forbidden {
            user_id: user.id,
            application_id: application.id,
        };

        if role != UserRole::Employer {
            return Err(forbidden.into());
        }

        let job = JobRepository::new(self.db)
            .find_by_id(application.job_id)
            .await?
            .ok_or(ApplicationError::JobNotFound(application.job_id))?;

        let company = CompanyRepository::new(self.db)
            .find_by_id(job.company_id)
            .await?;

        if company.and_then(|company| company.employer_id) != Some(user.id) {
            return Err(forbidden.into());
        }

        Ok(())
    }
}
