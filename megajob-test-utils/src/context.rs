//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for Phase 2 test execution.
//! The context includes an in-memory SQLite database and a mock HTTP server standing in for
//! the portal backend when exercising the client SDK.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// This struct is the result of calling `TestBuilder::build()` and provides
/// access to the test environment including:
/// - Database connection
/// - Mock HTTP server standing in for the portal backend
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_portal_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Point a client at the mock backend
/// let base_url = test.server.url();
///
/// // Access fixture helpers
/// test.portal().insert_user("sita@example.com", "job_seeker", true, true).await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Mock HTTP server standing in for the portal backend
    pub server: ServerGuard,

    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// Initializes a test environment with an in-memory SQLite database and a
    /// mock HTTP server. The server is started even for database-only tests;
    /// it stays idle unless endpoints are registered on it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements for all provided table schemas. Used internally
    /// by TestBuilder to set up the database schema during test initialization.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create database indexes from schema statements.
    ///
    /// Entity-derived table schemas carry single-column constraints only, so
    /// composite indexes from the migrations are recreated here.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE INDEX statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All indexes created successfully
    /// - `Err(TestError::DbErr)` - Index creation failed
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
