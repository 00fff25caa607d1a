use std::io::Write;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, Document},
    options::FindOptions,
    Client, Collection, Database,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::database::{books_collection, get_database_client, ping_db};
use crate::error::Result;
use crate::models::app_config::DatabaseConfig;
use crate::models::book::{AuthorBookCount, DecadeBookCount, GenreAveragePrice};
use crate::queries::{self, SortOrder, PAGE_SIZE};
use crate::report::Report;
use crate::seed;

/// Runs the fixed query sequence against one collection.
pub struct QueryRunner {
    database: Database,
    collection: Collection<Document>,
    seed_if_empty: bool,
}

impl QueryRunner {
    pub fn new(client: &Client, database_config: &DatabaseConfig) -> Self {
        QueryRunner {
            database: client.database(&database_config.database_name),
            collection: books_collection(client, database_config),
            seed_if_empty: database_config.seed_if_empty,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    pub async fn connect(&self) -> Result<()> {
        ping_db(&self.database).await?;
        Ok(())
    }

    pub async fn find(&self, filter: Document, options: impl Into<Option<FindOptions>>) -> Result<Vec<Document>> {
        debug!("Database: find [{0}]", filter);
        let cursor = self.collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<Document>> {
        Ok(self.collection.find_one(queries::by_title(title), None).await?)
    }

    /// Sets the price of the book titled `title` and returns the book as stored afterwards.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<Option<Document>> {
        let result = self
            .collection
            .update_one(queries::by_title(title), queries::set_price(price), None)
            .await?;
        debug!("Database: update matched {0}, modified {1}", result.matched_count, result.modified_count);
        self.find_by_title(title).await
    }

    /// Deletes one book titled `title`. Returns the number of documents removed.
    pub async fn delete_by_title(&self, title: &str) -> Result<u64> {
        let result = self.collection.delete_one(queries::by_title(title), None).await?;
        Ok(result.deleted_count)
    }

    pub async fn sorted_by_price(&self, order: SortOrder) -> Result<Vec<Document>> {
        self.find(Document::new(), queries::sort_by_price(order)).await
    }

    pub async fn page(&self, index: u64) -> Result<Vec<Document>> {
        self.find(Document::new(), queries::page(index, PAGE_SIZE)).await
    }

    async fn aggregate<T: DeserializeOwned>(&self, pipeline: Vec<Document>) -> Result<Vec<T>> {
        let cursor = self.collection.aggregate(pipeline, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        let mut rows = Vec::with_capacity(documents.len());
        for document in documents {
            rows.push(bson::from_document(document)?);
        }
        Ok(rows)
    }

    pub async fn average_price_by_genre(&self) -> Result<Vec<GenreAveragePrice>> {
        self.aggregate(queries::average_price_by_genre()).await
    }

    pub async fn most_prolific_author(&self) -> Result<Option<AuthorBookCount>> {
        let rows: Vec<AuthorBookCount> = self.aggregate(queries::most_prolific_author()).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn books_by_decade(&self) -> Result<Vec<DecadeBookCount>> {
        self.aggregate(queries::books_by_decade()).await
    }

    /// Creates `{ title: 1 }`. Returns the index name reported by the server.
    pub async fn create_title_index(&self) -> Result<String> {
        let result = self.collection.create_index(queries::title_index(), None).await?;
        Ok(result.index_name)
    }

    /// Creates `{ author: 1, published_year: -1 }`.
    pub async fn create_author_year_index(&self) -> Result<String> {
        let result = self.collection.create_index(queries::author_year_index(), None).await?;
        Ok(result.index_name)
    }

    pub async fn explain_title_lookup(&self, title: &str) -> Result<Document> {
        let command = queries::explain_find(self.collection.name(), queries::by_title(title), "executionStats");
        Ok(self.database.run_command(command, None).await?)
    }

    /// Executes every step in order, stopping at the first failure.
    pub async fn run_all<W: Write>(&self, report: &mut Report<W>) -> Result<()> {
        self.connect().await?;
        report.line("Connected to MongoDB")?;

        if self.seed_if_empty {
            let inserted = seed::seed_if_empty(&self.collection).await?;
            report.line(&format!("Seeded {} sample books", inserted))?;
        }

        // Basic CRUD
        report.section("Find all Fiction books")?;
        report.documents(self.find(queries::by_genre("Fiction"), None).await?)?;

        report.section("Find books published after 1950")?;
        report.documents(self.find(queries::published_after(1950), None).await?)?;

        report.section("Find books by George Orwell")?;
        report.documents(self.find(queries::by_author("George Orwell"), None).await?)?;

        report.section("Update price of 'The Hobbit' to 16.99")?;
        match self.update_price("The Hobbit", 16.99).await? {
            Some(book) => report.document(book)?,
            None => report.line("(no documents)")?,
        }

        report.section("Delete 'Moby Dick'")?;
        let deleted = self.delete_by_title("Moby Dick").await?;
        report.line(&format!("Deleted 'Moby Dick' ({} document(s) removed)", deleted))?;

        // Advanced queries
        report.section("Find in-stock books published after 2010")?;
        report.documents(self.find(queries::in_stock_published_after(2010), None).await?)?;

        report.section("Projection (title, author, price only)")?;
        report.documents(self.find(Document::new(), queries::title_author_price_projection()).await?)?;

        report.section("Sort by price ascending")?;
        report.documents(self.sorted_by_price(SortOrder::Ascending).await?)?;

        report.section("Sort by price descending")?;
        report.documents(self.sorted_by_price(SortOrder::Descending).await?)?;

        report.section("Pagination - Page 1 (5 books)")?;
        report.documents(self.page(0).await?)?;

        report.section("Pagination - Page 2 (next 5 books)")?;
        report.documents(self.page(1).await?)?;

        // Aggregation
        report.section("Average price of books by genre")?;
        report.value(&self.average_price_by_genre().await?)?;

        report.section("Author with the most books")?;
        report.value(&self.most_prolific_author().await?)?;

        report.section("Group books by publication decade")?;
        report.value(&self.books_by_decade().await?)?;

        // Indexing
        report.section("Creating index on title")?;
        report.line(&self.create_title_index().await?)?;

        report.section("Creating compound index on author + published_year")?;
        report.line(&self.create_author_year_index().await?)?;

        report.section("Using explain() to check index performance for 'The Hobbit'")?;
        report.document(self.explain_title_lookup("The Hobbit").await?)?;

        Ok(())
    }
}

/// Acquires a client, runs every step, and shuts the client down whatever the outcome.
/// Failures are logged here and go no further. "Connection closed" is always the last line.
pub async fn run<W: Write>(database_config: &DatabaseConfig, report: &mut Report<W>) {
    match get_database_client(database_config).await {
        Ok(client) => {
            let runner = QueryRunner::new(&client, database_config);
            if let Err(error) = runner.run_all(report).await {
                error!("Error: {0}", error);
            }
            client.shutdown().await;
            info!("Database: Connection closed");
        }
        Err(error) => {
            error!("Error: Unable to create database client [{0}]", error);
        }
    }
    if let Err(error) = report.line("Connection closed") {
        error!("Error: {0}", error);
    }
}
