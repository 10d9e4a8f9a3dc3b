//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained and queued, then executed in order by the
//! final `build()` call: schema first, fixtures second.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Schema to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
    run_migrations: bool,

    // Database fixtures to insert
    users: Vec<String>,      // usernames
    characters: Vec<String>, // character names
    planets: Vec<String>,    // planet names
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            run_migrations: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates User, People, Planet and Favorites straight from the entity definitions.
    /// Indexes created by migrations are not included, use [`Self::with_migrations`] for
    /// those.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Run the real migrations instead of creating tables from entities.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(People)
    ///     .with_table(Planet)
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

    /// Insert a mock user with the given username.
    ///
    /// Users are inserted in call order, so the first mock user gets ID 1.
    pub fn with_mock_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Insert a mock character with the given name.
    pub fn with_mock_character(mut self, name: &str) -> Self {
        self.characters.push(name.to_string());
        self
    }

    /// Insert a mock planet with the given name.
    pub fn with_mock_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Schema created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create schema
        if self.run_migrations {
            setup.with_migrations().await?;
        }

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorites),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in &self.users {
            setup.user().insert_mock_user(username).await?;
        }

        for name in &self.characters {
            setup.catalog().insert_mock_character(name).await?;
        }

        for name in &self.planets {
            setup.catalog().insert_mock_planet(name).await?;
        }

        Ok(setup)
    }
}
