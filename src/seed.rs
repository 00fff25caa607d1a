use mongodb::{bson::Document, Collection};
use tracing::info;

use crate::models::book::Book;

/// A small catalogue covering every query in the run: several genres, three
/// Orwell titles, books on both sides of 1950 and one in stock after 2010.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, true),
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, true),
        Book::new("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, false),
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true),
        Book::new("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, true),
        Book::new("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, true),
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        Book::new("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.99, true),
        Book::new("Moby Dick", "Herman Melville", "Adventure", 1851, 12.50, false),
        Book::new("Homage to Catalonia", "George Orwell", "Memoir", 1938, 9.50, true),
        Book::new("Project Hail Mary", "Andy Weir", "Science Fiction", 2021, 16.00, true),
    ]
}

/// Inserts [`sample_books`] when the collection holds no documents. Returns the
/// number of books inserted.
pub async fn seed_if_empty(collection: &Collection<Document>) -> mongodb::error::Result<usize> {
    let existing = collection.count_documents(None, None).await?;
    if existing > 0 {
        info!("Seed: Collection already holds {0} documents. Skipping...", existing);
        return Ok(0);
    }
    let books = sample_books();
    let result = collection
        .clone_with_type::<Book>()
        .insert_many(&books, None)
        .await?;
    info!("Seed: Inserted {0} books", result.inserted_ids.len());
    Ok(result.inserted_ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique() {
        let books = sample_books();
        let titles: HashSet<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles.len(), books.len());
    }

    #[test]
    fn catalogue_spans_two_full_pages() {
        assert!(sample_books().len() as u64 > 2 * crate::queries::PAGE_SIZE);
    }

    #[test]
    fn catalogue_contains_the_mutated_titles() {
        let books = sample_books();
        assert_eq!(books.len(), 13);
        assert!(books.iter().any(|b| b.title == "The Hobbit"));
        assert!(books.iter().any(|b| b.title == "Moby Dick"));
        assert_eq!(books.iter().filter(|b| b.author == "George Orwell").count(), 3);
        assert!(books.iter().any(|b| b.in_stock && b.published_year > 2010));
    }
}
