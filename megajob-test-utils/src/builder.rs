//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Alias, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables
/// and mock HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_portal_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    json_endpoints: Vec<JsonEndpoint>,
}

struct JsonEndpoint {
    method: String,
    path: String,
    status: usize,
    body: serde_json::Value,
    expected_requests: usize,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or mock endpoints configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_portal_tables: false,
            mock_builders: Vec::new(),
            json_endpoints: Vec::new(),
        }
    }

    /// Add the full set of portal tables to the test database.
    ///
    /// Creates all tables backing the portal in dependency order: User, Company,
    /// JobCategory, Job, Application, PendingSignup, and PasswordResetToken,
    /// along with the composite unique index on applications that the
    /// migrations define.
    ///
    /// # Arguments
    /// - `self` - The builder instance
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_portal_tables(mut self) -> Self {
        self.include_portal_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use megajob_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), megajob_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Company)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a mock JSON endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `path` responding with the given status
    /// and JSON body. The mock will verify it was called exactly
    /// `expected_requests` times.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match (e.g., "GET", "POST")
    /// - `path` - Request path to match
    /// - `status` - HTTP status code to return
    /// - `body` - JSON body to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_json_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.json_endpoints.push(JsonEndpoint {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body,
            expected_requests,
        });
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (portal tables if specified, then custom tables)
    /// 2. Creates database indexes
    /// 3. Creates mock HTTP endpoints (custom endpoints, then JSON shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table or index creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_portal_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::JobCategory),
                schema.create_table_from_entity(entity::prelude::Job),
                schema.create_table_from_entity(entity::prelude::Application),
                schema.create_table_from_entity(entity::prelude::PendingSignup),
                schema.create_table_from_entity(entity::prelude::PasswordResetToken),
            ]);

            // Entity schemas only carry single-column constraints; the
            // one-application-per-seeker-per-job index comes from the migration
            // and has to be recreated here for conflict-aware inserts to work.
            all_indexes.push(
                Index::create()
                    .name("idx-applications-job_id-seeker_id")
                    .table(Alias::new("applications"))
                    .col(Alias::new("job_id"))
                    .col(Alias::new("seeker_id"))
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        // 2. Create mock endpoints
        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for endpoint in self.json_endpoints {
            mocks.push(
                setup
                    .server
                    .mock(&endpoint.method, endpoint.path.as_str())
                    .with_status(endpoint.status)
                    .with_header("content-type", "application/json")
                    .with_body(endpoint.body.to_string())
                    .expect(endpoint.expected_requests)
                    .create(),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
