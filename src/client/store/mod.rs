//! Offline document store emulating the browser-storage fallback.
//!
//! Each collection is one storage key holding a JSON array. Queries are
//! linear scans, inserts push, updates replace the matching element, deletes
//! retain everything else. There are no indexes, transactions, or referential
//! integrity: deleting a company leaves its jobs and applications behind.

pub mod model;

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{auth::DEMO_ACCOUNTS, error::ClientError, storage::StorageBackend},
    model::{application::ApplicationStatus, job::JobStatus},
};

pub use model::{
    NewOfflineCompany, NewOfflineJob, NewOfflineSignup, NewOfflineUser, OfflineApplication,
    OfflineCategory, OfflineCompany, OfflineJob, OfflineSignup, OfflineUser,
};

/// Storage keys, one JSON array per collection.
pub const USERS_KEY: &str = "megajob_users";
pub const COMPANIES_KEY: &str = "megajob_companies";
pub const JOBS_KEY: &str = "megajob_jobs";
pub const JOB_CATEGORIES_KEY: &str = "megajob_job_categories";
pub const APPLICATIONS_KEY: &str = "megajob_applications";
pub const PENDING_SIGNUPS_KEY: &str = "megajob_pending_signups";

/// Generates a collection ID: random base-36 characters plus a millisecond
/// timestamp. Unique enough for a single-client demo store.
fn generate_id() -> String {
    let mut rng = rand::rng();

    let random: String = (0..9)
        .map(|_| char::from_digit(rng.random_range(0..36), 36).unwrap_or('0'))
        .collect();

    format!("{}{}", random, Utc::now().timestamp_millis())
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// The embedded document store backing the SDK when no server is reachable.
pub struct OfflineDb {
    storage: Arc<dyn StorageBackend>,
}

impl OfflineDb {
    /// Opens the store over a backend, seeding demo data on first use.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Result<Self, ClientError> {
        let db = Self { storage };

        if db.storage.read(USERS_KEY).is_none() {
            db.seed_demo_data()?;
        }

        Ok(db)
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ClientError> {
        match self.storage.read(key) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), ClientError> {
        self.storage.write(key, &serde_json::to_string(items)?)
    }

    /// Populates the store with the demo accounts and a browsable handful of
    /// companies, categories and jobs.
    pub fn seed_demo_data(&self) -> Result<(), ClientError> {
        let seeded_at = now();

        let users: Vec<OfflineUser> = DEMO_ACCOUNTS
            .iter()
            .map(|account| OfflineUser {
                id: account.id.to_string(),
                email: account.email.to_string(),
                password: account.password.to_string(),
                role: account.role,
                first_name: account.first_name.to_string(),
                last_name: account.last_name.to_string(),
                phone: None,
                is_verified: true,
                is_active: true,
                created_at: seeded_at,
            })
            .collect();

        let it_category = OfflineCategory {
            id: generate_id(),
            name: "Information Technology".to_string(),
        };
        let finance_category = OfflineCategory {
            id: generate_id(),
            name: "Finance".to_string(),
        };

        let himalayan_tech = OfflineCompany {
            id: generate_id(),
            name: "Himalayan Tech".to_string(),
            industry: Some("Information Technology".to_string()),
            location: Some("Kathmandu".to_string()),
            employer_id: Some("2".to_string()),
            is_verified: true,
            created_at: seeded_at,
        };
        let everest_finance = OfflineCompany {
            id: generate_id(),
            name: "Everest Finance".to_string(),
            industry: Some("Finance".to_string()),
            location: Some("Pokhara".to_string()),
            employer_id: None,
            is_verified: false,
            created_at: seeded_at,
        };

        let jobs = vec![
            OfflineJob {
                id: generate_id(),
                title: "Software Engineer".to_string(),
                description: "Build and maintain web applications for our clients.".to_string(),
                company_id: himalayan_tech.id.clone(),
                category_id: Some(it_category.id.clone()),
                location: "Kathmandu".to_string(),
                job_type: Some("full_time".to_string()),
                salary: Some("NPR 120,000".to_string()),
                status: JobStatus::Active,
                created_at: seeded_at,
            },
            OfflineJob {
                id: generate_id(),
                title: "Accountant".to_string(),
                description: "Prepare monthly statements and manage payroll.".to_string(),
                company_id: everest_finance.id.clone(),
                category_id: Some(finance_category.id.clone()),
                location: "Pokhara".to_string(),
                job_type: Some("full_time".to_string()),
                salary: None,
                status: JobStatus::Active,
                created_at: seeded_at,
            },
            OfflineJob {
                id: generate_id(),
                title: "Support Intern".to_string(),
                description: "Seasonal support role, posting currently closed.".to_string(),
                company_id: himalayan_tech.id.clone(),
                category_id: Some(it_category.id.clone()),
                location: "Kathmandu".to_string(),
                job_type: Some("part_time".to_string()),
                salary: None,
                status: JobStatus::Inactive,
                created_at: seeded_at,
            },
        ];

        self.write_collection(USERS_KEY, &users)?;
        self.write_collection(JOB_CATEGORIES_KEY, &[it_category, finance_category])?;
        self.write_collection(COMPANIES_KEY, &[himalayan_tech, everest_finance])?;
        self.write_collection(JOBS_KEY, &jobs)?;

        Ok(())
    }

    // ---- users ----

    pub fn users(&self) -> Result<Vec<OfflineUser>, ClientError> {
        self.read_collection(USERS_KEY)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<OfflineUser>, ClientError> {
        Ok(self.users()?.into_iter().find(|user| user.email == email))
    }

    /// Inserts a new account. Offline accounts materialize after OTP
    /// verification, so they start out verified and active.
    pub fn insert_user(&self, new_user: NewOfflineUser) -> Result<OfflineUser, ClientError> {
        let user = OfflineUser {
            id: generate_id(),
            email: new_user.email,
            password: new_user.password,
            role: new_user.role,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            phone: new_user.phone,
            is_verified: true,
            is_active: true,
            created_at: now(),
        };

        let mut users = self.users()?;
        users.push(user.clone());
        self.write_collection(USERS_KEY, &users)?;

        Ok(user)
    }

    // ---- companies ----

    pub fn companies(&self) -> Result<Vec<OfflineCompany>, ClientError> {
        self.read_collection(COMPANIES_KEY)
    }

    pub fn insert_company(
        &self,
        new_company: NewOfflineCompany,
    ) -> Result<OfflineCompany, ClientError> {
        let company = OfflineCompany {
            id: generate_id(),
            name: new_company.name,
            industry: new_company.industry,
            location: new_company.location,
            employer_id: new_company.employer_id,
            is_verified: false,
            created_at: now(),
        };

        let mut companies = self.companies()?;
        companies.push(company.clone());
        self.write_collection(COMPANIES_KEY, &companies)?;

        Ok(company)
    }

    /// Removes a company. Jobs and applications referencing it are left
    /// behind, this store has no referential integrity.
    pub fn delete_company(&self, company_id: &str) -> Result<bool, ClientError> {
        let mut companies = self.companies()?;
        let before = companies.len();

        companies.retain(|company| company.id != company_id);

        let removed = companies.len() != before;
        if removed {
            self.write_collection(COMPANIES_KEY, &companies)?;
        }

        Ok(removed)
    }

    // ---- job categories ----

    pub fn job_categories(&self) -> Result<Vec<OfflineCategory>, ClientError> {
        self.read_collection(JOB_CATEGORIES_KEY)
    }

    // ---- jobs ----

    /// Lists jobs, optionally restricted by status and a case-insensitive
    /// substring search over title and description.
    pub fn jobs(
        &self,
        status: Option<JobStatus>,
        search: Option<&str>,
    ) -> Result<Vec<OfflineJob>, ClientError> {
        let search = search.map(|term| term.to_lowercase());

        Ok(self
            .read_collection::<OfflineJob>(JOBS_KEY)?
            .into_iter()
            .filter(|job| status.is_none_or(|wanted| job.status == wanted))
            .filter(|job| {
                search.as_deref().is_none_or(|term| {
                    job.title.to_lowercase().contains(term)
                        || job.description.to_lowercase().contains(term)
                })
            })
            .collect())
    }

    pub fn get_job(&self, job_id: &str) -> Result<Option<OfflineJob>, ClientError> {
        Ok(self
            .read_collection::<OfflineJob>(JOBS_KEY)?
            .into_iter()
            .find(|job| job.id == job_id))
    }

    pub fn create_job(&self, new_job: NewOfflineJob) -> Result<OfflineJob, ClientError> {
        let job = OfflineJob {
            id: generate_id(),
            title: new_job.title,
            description: new_job.description,
            company_id: new_job.company_id,
            category_id: new_job.category_id,
            location: new_job.location,
            job_type: new_job.job_type,
            salary: new_job.salary,
            status: JobStatus::Active,
            created_at: now(),
        };

        let mut jobs: Vec<OfflineJob> = self.read_collection(JOBS_KEY)?;
        jobs.push(job.clone());
        self.write_collection(JOBS_KEY, &jobs)?;

        Ok(job)
    }

    /// Replaces the stored job matching `updated.id`. Answers whether a
    /// matching element existed.
    pub fn update_job(&self, updated: &OfflineJob) -> Result<bool, ClientError> {
        let mut jobs: Vec<OfflineJob> = self.read_collection(JOBS_KEY)?;

        let Some(slot) = jobs.iter_mut().find(|job| job.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated.clone();

        self.write_collection(JOBS_KEY, &jobs)?;

        Ok(true)
    }

    pub fn delete_job(&self, job_id: &str) -> Result<bool, ClientError> {
        let mut jobs: Vec<OfflineJob> = self.read_collection(JOBS_KEY)?;
        let before = jobs.len();

        jobs.retain(|job| job.id != job_id);

        let removed = jobs.len() != before;
        if removed {
            self.write_collection(JOBS_KEY, &jobs)?;
        }

        Ok(removed)
    }

    // ---- applications ----

    pub fn applications_by_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<OfflineApplication>, ClientError> {
        Ok(self
            .read_collection::<OfflineApplication>(APPLICATIONS_KEY)?
            .into_iter()
            .filter(|application| application.seeker_id == seeker_id)
            .collect())
    }

    /// Files an application, rejecting a second one for the same job and
    /// seeker.
    pub fn create_application(
        &self,
        job_id: &str,
        seeker_id: &str,
        cover_letter: Option<String>,
    ) -> Result<OfflineApplication, ClientError> {
        let mut applications: Vec<OfflineApplication> =
            self.read_collection(APPLICATIONS_KEY)?;

        if applications
            .iter()
            .any(|application| application.job_id == job_id && application.seeker_id == seeker_id)
        {
            return Err(ClientError::AlreadyApplied);
        }

        let application = OfflineApplication {
            id: generate_id(),
            job_id: job_id.to_string(),
            seeker_id: seeker_id.to_string(),
            cover_letter,
            status: ApplicationStatus::Pending,
            created_at: now(),
        };

        applications.push(application.clone());
        self.write_collection(APPLICATIONS_KEY, &applications)?;

        Ok(application)
    }

    // ---- pending signups ----

    pub fn insert_signup(&self, new_signup: NewOfflineSignup) -> Result<OfflineSignup, ClientError> {
        let signup = OfflineSignup {
            id: generate_id(),
            email: new_signup.email,
            password: new_signup.password,
            role: new_signup.role,
            first_name: new_signup.first_name,
            last_name: new_signup.last_name,
            phone: new_signup.phone,
            otp: new_signup.otp,
            expires_at: new_signup.expires_at,
            created_at: now(),
        };

        let mut signups: Vec<OfflineSignup> = self.read_collection(PENDING_SIGNUPS_KEY)?;
        signups.push(signup.clone());
        self.write_collection(PENDING_SIGNUPS_KEY, &signups)?;

        Ok(signup)
    }

    pub fn find_signup(&self, signup_id: &str) -> Result<Option<OfflineSignup>, ClientError> {
        Ok(self
            .read_collection::<OfflineSignup>(PENDING_SIGNUPS_KEY)?
            .into_iter()
            .find(|signup| signup.id == signup_id))
    }

    pub fn update_signup(&self, updated: &OfflineSignup) -> Result<bool, ClientError> {
        let mut signups: Vec<OfflineSignup> = self.read_collection(PENDING_SIGNUPS_KEY)?;

        let Some(slot) = signups.iter_mut().find(|signup| signup.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated.clone();

        self.write_collection(PENDING_SIGNUPS_KEY, &signups)?;

        Ok(true)
    }

    pub fn delete_signup(&self, signup_id: &str) -> Result<bool, ClientError> {
        let mut signups: Vec<OfflineSignup> = self.read_collection(PENDING_SIGNUPS_KEY)?;
        let before = signups.len();

        signups.retain(|signup| signup.id != signup_id);

        let removed = signups.len() != before;
        if removed {
            self.write_collection(PENDING_SIGNUPS_KEY, &signups)?;
        }

        Ok(removed)
    }
}
