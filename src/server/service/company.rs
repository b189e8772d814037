//! Company directory management, write access is admin only.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        api::{Paginated, PaginationDto},
        company::{CompanyDto, CompanyFilter, CreateCompanyDto, UpdateCompanyDto},
    },
    server::{
        data::{company::CompanyRepository, job::JobRepository, user::UserRepository},
        error::{company::CompanyError, Error},
        service::page_params,
    },
};

fn to_company_dto(company: entity::company::Model) -> CompanyDto {
    CompanyDto {
        id: company.id,
        name: company.name,
        industry: company.industry,
        location: company.location,
        employer_id: company.employer_id,
        is_verified: company.is_verified,
        created_at: company.created_at,
    }
}

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Company listing with an optional verification filter.
    pub async fn list(&self, filter: CompanyFilter) -> Result<Paginated<CompanyDto>, Error> {
        let (page, limit) = page_params(filter.page, filter.limit);

        let (companies, totals) = CompanyRepository::new(self.db)
            .list(filter.verified, page, limit)
            .await?;

        Ok(Paginated {
            data: companies.into_iter().map(to_company_dto).collect(),
            pagination: PaginationDto {
                page,
                limit,
                total: totals.number_of_items,
                pages: totals.number_of_pages,
            },
        })
    }

    /// Registers a company, optionally tied to an employer account.
    pub async fn create(&self, company: CreateCompanyDto) -> Result<CompanyDto, Error> {
        if let Some(employer_id) = company.employer_id {
            self.check_employer(employer_id).await?;
        }

        let company = CompanyRepository::new(self.db).create(company).await?;

        Ok(to_company_dto(company))
    }

    /// Applies a partial update, including the verification flag and employer
    /// reassignment.
    pub async fn update(
        &self,
        company_id: i32,
        update: UpdateCompanyDto,
    ) -> Result<CompanyDto, Error> {
        if let Some(employer_id) = update.employer_id {
            self.check_employer(employer_id).await?;
        }

        let company = match CompanyRepository::new(self.db)
            .update(company_id, update)
            .await
        {
            Ok(company) => company,
            Err(DbErr::RecordNotUpdated) => return Err(CompanyError::NotFound(company_id).into()),
            Err(err) => return Err(err.into()),
        };

        Ok(to_company_dto(company))
    }

    /// Deletes a company, refused while job postings still reference it.
    pub async fn delete(&self, company_id: i32) -> Result<(), Error> {
        let jobs = JobRepository::new(self.db)
            .count_by_company(company_id)
            .await?;

        if jobs > 0 {
            return Err(CompanyError::JobsExist(company_id).into());
        }

        let result = CompanyRepository::new(self.db).delete(company_id).await?;

        if result.rows_affected == 0 {
            return Err(CompanyError::NotFound(company_id).into());
        }

        Ok(())
    }

    async fn check_employer(&self, employer_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db)
            .find_by_id(employer_id)
            .await?
            .is_none()
        {
            return Err(CompanyError::EmployerNotFound(employer_id).into());
        }

        Ok(())
    }
}
