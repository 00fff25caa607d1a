//! Filters, options and pipelines used by the runner. Building them apart from
//! the driver calls keeps their shape checkable without a server.

use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    IndexModel,
};

pub const PAGE_SIZE: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

pub fn by_genre(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn by_author(author: &str) -> Document {
    doc! { "author": author }
}

pub fn by_title(title: &str) -> Document {
    doc! { "title": title }
}

pub fn published_after(year: i32) -> Document {
    doc! { "published_year": { "$gt": year } }
}

pub fn in_stock_published_after(year: i32) -> Document {
    doc! { "in_stock": true, "published_year": { "$gt": year } }
}

pub fn set_price(price: f64) -> Document {
    doc! { "$set": { "price": price } }
}

pub fn title_author_price_projection() -> FindOptions {
    FindOptions::builder()
        .projection(doc! { "title": 1, "author": 1, "price": 1, "_id": 0 })
        .build()
}

pub fn sort_by_price(order: SortOrder) -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "price": order.direction() })
        .build()
}

/// Zero-based page of `size` documents in natural order. There is no sort, so
/// boundaries are only as stable as the server's natural order.
pub fn page(index: u64, size: u64) -> FindOptions {
    FindOptions::builder()
        .skip(index * size)
        .limit(size as i64)
        .build()
}

pub fn average_price_by_genre() -> Vec<Document> {
    vec![doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } }]
}

pub fn most_prolific_author() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": 1 },
    ]
}

pub fn books_by_decade() -> Vec<Document> {
    vec![
        doc! { "$group": {
            "_id": { "$multiply": [ { "$floor": { "$divide": ["$published_year", 10] } }, 10 ] },
            "count": { "$sum": 1 },
        } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

pub fn title_index() -> IndexModel {
    IndexModel::builder().keys(doc! { "title": 1 }).build()
}

pub fn author_year_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "author": 1, "published_year": -1 })
        .build()
}

/// `explain` command wrapping a find on `collection`.
pub fn explain_find(collection: &str, filter: Document, verbosity: &str) -> Document {
    doc! {
        "explain": { "find": collection, "filter": filter },
        "verbosity": verbosity,
    }
}
