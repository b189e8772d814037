//! Job posting listing and lifecycle.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PaginationDto,
        job::{
            CreateJobDto, JobCategoryDto, JobDto, JobFilter, JobListDto, JobStatus, UpdateJobDto,
        },
        user::UserRole,
    },
    server::{
        data::{
            application::ApplicationRepository,
            company::CompanyRepository,
            job::{JobRepository, JobSearch},
            job_category::JobCategoryRepository,
        },
        error::{auth::AuthError, job::JobError, Error},
        service::page_params,
    },
};

fn to_job_dto(job: &entity::job::Model) -> Result<JobDto, Error> {
    Ok(JobDto {
        id: job.id,
        title: job.title.clone(),
        description: job.description.clone(),
        company_id: job.company_id,
        category_id: job.category_id,
        location: job.location.clone(),
        job_type: job.job_type.clone(),
        salary: job.salary.clone(),
        status: job.status.parse().map_err(Error::ParseError)?,
        created_at: job.created_at,
        updated_at: job.updated_at,
    })
}

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public job listing, only active postings are shown.
    ///
    /// The category filter arrives as a name and is resolved to its ID first;
    /// an unknown category matches no jobs rather than erroring, like any
    /// other filter with no matches.
    pub async fn list(&self, filter: JobFilter) -> Result<JobListDto, Error> {
        let (page, limit) = page_params(filter.page, filter.limit);

        let category_id = match &filter.category {
            Some(name) => match JobCategoryRepository::new(self.db).find_by_name(name).await? {
                Some(category) => Some(category.id),
                None => {
                    return Ok(JobListDto {
                        jobs: Vec::new(),
                        pagination: PaginationDto {
                            page,
                            limit,
                            total: 0,
                            pages: 0,
                        },
                    })
                }
            },
            None => None,
        };

        let (jobs, totals) = JobRepository::new(self.db)
            .list(
                JobSearch {
                    status: Some(JobStatus::Active.as_str()),
                    location: filter.location.as_deref(),
                    job_type: filter.job_type.as_deref(),
                    category_id,
                    search: filter.search.as_deref(),
                },
                page,
                limit,
            )
            .await?;

        Ok(JobListDto {
            jobs: jobs.iter().map(to_job_dto).collect::<Result<_, _>>()?,
            pagination: PaginationDto {
                page,
                limit,
                total: totals.number_of_items,
                pages: totals.number_of_pages,
            },
        })
    }

    pub async fn get(&self, job_id: i32) -> Result<JobDto, Error> {
        let job = JobRepository::new(self.db)
            .find_by_id(job_id)
            .await?
            .ok_or(JobError::NotFound(job_id))?;

        to_job_dto(&job)
    }

    /// Creates a posting on behalf of an employer or admin account.
    ///
    /// # Behavior
    /// 1. Only employer and admin roles may post
    /// 2. The referenced company and category (when given) must exist
    /// 3. The posting defaults to active unless a status is supplied
    pub async fn create(
        &self,
        user: &entity::user::Model,
        job: CreateJobDto,
    ) -> Result<JobDto, Error> {
        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;

        if role != UserRole::Employer && !role.is_admin() {
            return Err(AuthError::EmployerRequired(user.id).into());
        }

        if CompanyRepository::new(self.db)
            .find_by_id(job.company_id)
            .await?
            .is_none()
        {
            return Err(JobError::CompanyNotFound(job.company_id).into());
        }

        if let Some(category_id) = job.category_id {
            if JobCategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(JobError::CategoryNotFound(category_id).into());
            }
        }

        let status = job.status.unwrap_or(JobStatus::Active);
        let job = JobRepository::new(self.db).create(job, status.as_str()).await?;

        to_job_dto(&job)
    }

    /// Applies a partial update, including status flips, after an ownership
    /// check.
    pub async fn update(
        &self,
        user: &entity::user::Model,
        job_id: i32,
        update: UpdateJobDto,
    ) -> Result<JobDto, Error> {
        let job_repository = JobRepository::new(self.db);

        let job = job_repository
            .find_by_id(job_id)
            .await?
            .ok_or(JobError::NotFound(job_id))?;

        self.check_ownership(user, &job).await?;

        let status = update.status.map(|status| status.as_str());
        let job = job_repository.update(job_id, update, status).await?;

        to_job_dto(&job)
    }

    /// Deletes a posting, refused while applications still reference it.
    pub async fn delete(
        &self,
        user: &entity::user::Model,
        job_id: i32,
    ) -> Result<(), Error> {
        let job_repository = JobRepository::new(self.db);

        let job = job_repository
            .find_by_id(job_id)
            .await?
            .ok_or(JobError::NotFound(job_id))?;

        self.check_ownership(user, &job).await?;

        let applications = ApplicationRepository::new(self.db)
            .count_by_job(job_id)
            .await?;

        if applications > 0 {
            return Err(JobError::ApplicationsExist(job_id).into());
        }

        job_repository.delete(job_id).await?;

        Ok(())
    }

    pub async fn categories(&self) -> Result<Vec<JobCategoryDto>, Error> {
        let categories = JobCategoryRepository::new(self.db).list().await?;

        Ok(categories
            .into_iter()
            .map(|category| JobCategoryDto {
                id: category.id,
                name: category.name,
            })
            .collect())
    }

    /// Admins may manage any posting, an employer only those of their own
    /// company.
    async fn check_ownership(
        &self,
        user: &entity::user::Model,
        job: &entity::job::Model,
    ) -> Result<(), Error> {
        let role: UserRole = user.role.parse().map_err(Error::ParseError)?;

        if role.is_admin() {
            return Ok(());
        }

        let company = CompanyRepository::new(self.db)
            .find_by_id(job.company_id)
            .await?;

        if company.and_then(|company| company.employer_id) != Some(user.id) {
            return Err(JobError::NotOwner {
                user_id: user.id,
                job_id: job.id,
            }
            .into());
        }

        Ok(())
    }
}
