use entity::prelude::*;

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a seeded store document.
///
/// Records added through the builder are written to the context's data file
/// by `build()`. Use `TestContext::new()` directly when a test needs the data
/// file to be absent.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_user(UserFactory::new().roles(&["owner"]).build())
///     .with_match(MatchFactory::new().build())
///     .build()?;
/// ```
pub struct TestBuilder {
    document: Document,
}

impl TestBuilder {
    /// Creates a builder for an empty document with default settings.
    pub fn new() -> Self {
        Self {
            document: Document::default(),
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.document.users.push(user);
        self
    }

    pub fn with_users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.document.users.extend(users);
        self
    }

    pub fn with_sanction(mut self, sanction: Sanction) -> Self {
        self.document.sanctions.push(sanction);
        self
    }

    pub fn with_match(mut self, record: Match) -> Self {
        self.document.matches.push(record);
        self
    }

    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.document.tickets.push(ticket);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.document.roster.push(player);
        self
    }

    /// Appends audit entries in the given order; the first one is the newest.
    pub fn with_logs(mut self, logs: impl IntoIterator<Item = LogEntry>) -> Self {
        self.document.logs.extend(logs);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.document.settings = settings;
        self
    }

    /// Creates the temporary directory and writes the seeded document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose data file holds the seeded document
    /// - `Err(TestError)` - Temporary directory or file could not be created
    pub fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new()?;
        test.write_document(&self.document)?;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
