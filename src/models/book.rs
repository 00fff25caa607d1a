use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
}

impl Book {
    pub fn new(title: &str, author: &str, genre: &str, published_year: i32, price: f64, in_stock: bool) -> Self {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            price,
            in_stock,
        }
    }
}

/// Row of the average-price-by-genre pipeline.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GenreAveragePrice {
    #[serde(rename = "_id")]
    pub genre: Option<String>,
    #[serde(rename = "avgPrice")]
    pub avg_price: Option<f64>,
}

/// Row of the most-prolific-author pipeline.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct AuthorBookCount {
    #[serde(rename = "_id")]
    pub author: Option<String>,
    pub count: i64,
}

/// Row of the books-by-decade pipeline. The server computes the key as a double.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct DecadeBookCount {
    #[serde(rename = "_id")]
    pub decade: Option<f64>,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    #[test]
    fn genre_row_decodes_server_field_names() {
        let row: GenreAveragePrice =
            bson::from_document(doc! { "_id": "Fiction", "avgPrice": 12.5 }).unwrap();
        assert_eq!(row.genre.as_deref(), Some("Fiction"));
        assert_eq!(row.avg_price, Some(12.5));
    }

    #[test]
    fn null_group_key_decodes_to_none() {
        let row: GenreAveragePrice =
            bson::from_document(doc! { "_id": Bson::Null, "avgPrice": Bson::Null }).unwrap();
        assert_eq!(row.genre, None);
        assert_eq!(row.avg_price, None);
    }

    #[test]
    fn counts_accept_int32_from_sum() {
        let row: AuthorBookCount =
            bson::from_document(doc! { "_id": "George Orwell", "count": 2_i32 }).unwrap();
        assert_eq!(row.count, 2);

        let row: DecadeBookCount =
            bson::from_document(doc! { "_id": 1940.0, "count": 3_i32 }).unwrap();
        assert_eq!(row.decade, Some(1940.0));
        assert_eq!(row.count, 3);
    }

    #[test]
    fn book_serializes_with_collection_field_names() {
        let book = Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true);
        let document = bson::to_document(&book).unwrap();
        assert_eq!(document.get_str("title").unwrap(), "1984");
        assert_eq!(document.get_i32("published_year").unwrap(), 1949);
        assert_eq!(document.get_f64("price").unwrap(), 10.99);
        assert!(document.get_bool("in_stock").unwrap());
    }
}
