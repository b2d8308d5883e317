//! MongoDB implementation of ListingRepository

use async_trait::async_trait;
use database::mongodb::{
    DocumentStore,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::ListingResult;
use crate::models::{COLLECTION, CreateListing, Listing, ListingFilter, ListingRecord};
use crate::repository::ListingRepository;

/// Fields searched by the `q` parameter
const SEARCH_FIELDS: [&str; 4] = ["title", "author", "description", "category"];

/// MongoDB implementation of the ListingRepository
#[derive(Clone)]
pub struct MongoListingRepository {
    store: DocumentStore,
}

impl MongoListingRepository {
    /// # Example
    /// ```ignore
    /// let store = DocumentStore::new(client.database("readopt"));
    /// let repo = MongoListingRepository::new(store);
    /// ```
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Build a MongoDB filter document from ListingFilter.
    ///
    /// The search term is escaped so it matches literally.
    pub fn build_filter(filter: &ListingFilter) -> Document {
        let mut query = doc! {};

        if let Some(category) = filter.category() {
            query.insert("category", category);
        }

        if let Some(search) = filter.search() {
            let pattern = regex::escape(search);
            let alternatives: Vec<Document> = SEARCH_FIELDS
                .iter()
                .map(|field| {
                    let mut condition = Document::new();
                    condition.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                    condition
                })
                .collect();
            query.insert("$or", alternatives);
        }

        query
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateListing) -> ListingResult<String> {
        let id = self.store.create_document(COLLECTION, &input).await?;
        tracing::info!(listing_id = %id, "Listing created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ListingResult<Option<Listing>> {
        let record: Option<ListingRecord> = self.store.find_by_id(COLLECTION, id).await?;
        Ok(record.map(Listing::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ListingFilter, limit: usize) -> ListingResult<Vec<Listing>> {
        let query = Self::build_filter(&filter);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let records: Vec<ListingRecord> =
            self.store.get_documents(COLLECTION, query, limit).await?;

        Ok(records.into_iter().map(Listing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(q: Option<&str>, category: Option<&str>) -> ListingFilter {
        ListingFilter {
            q: q.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_build_filter_empty() {
        assert_eq!(MongoListingRepository::build_filter(&filter(None, None)), doc! {});
        assert_eq!(
            MongoListingRepository::build_filter(&filter(Some(""), Some(""))),
            doc! {}
        );
    }

    #[test]
    fn test_build_filter_category_only() {
        assert_eq!(
            MongoListingRepository::build_filter(&filter(None, Some("fiction"))),
            doc! { "category": "fiction" }
        );
    }

    #[test]
    fn test_build_filter_search_and_category() {
        let query = MongoListingRepository::build_filter(&filter(Some("dune"), Some("scifi")));
        assert_eq!(
            query,
            doc! {
                "category": "scifi",
                "$or": [
                    { "title": { "$regex": "dune", "$options": "i" } },
                    { "author": { "$regex": "dune", "$options": "i" } },
                    { "description": { "$regex": "dune", "$options": "i" } },
                    { "category": { "$regex": "dune", "$options": "i" } },
                ]
            }
        );
    }

    #[test]
    fn test_build_filter_escapes_regex_metacharacters() {
        let query = MongoListingRepository::build_filter(&filter(Some("c++ (2nd ed.)"), None));
        let alternatives = query.get_array("$or").unwrap();
        let first = alternatives[0].as_document().unwrap();
        let pattern = first
            .get_document("title")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, r"c\+\+ \(2nd ed\.\)");
    }
}
