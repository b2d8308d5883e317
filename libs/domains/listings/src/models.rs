use database::mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection holding listings
pub const COLLECTION: &str = "listing";

/// Maximum number of listings returned by a single search
pub const LISTING_LIMIT: usize = 100;

/// Physical condition of a book
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
pub enum BookCondition {
    #[serde(rename = "new")]
    #[strum(serialize = "new")]
    New,
    #[serde(rename = "like new")]
    #[strum(serialize = "like new")]
    LikeNew,
    #[default]
    #[serde(rename = "good")]
    #[strum(serialize = "good")]
    Good,
    #[serde(rename = "fair")]
    #[strum(serialize = "fair")]
    Fair,
    #[serde(rename = "poor")]
    #[strum(serialize = "poor")]
    Poor,
}

/// Listing as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    /// Store-assigned identifier (24 hex characters)
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub condition: BookCondition,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub seller_name: String,
    pub seller_email: String,
    pub location: Option<String>,
    pub category: Option<String>,
}

/// DTO for creating a new listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateListing {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub condition: BookCondition,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub seller_name: String,
    #[validate(email)]
    pub seller_email: String,
    pub location: Option<String>,
    pub category: Option<String>,
}

/// Listing document as stored. Every field but the id may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub seller_name: Option<String>,
    pub seller_email: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            title: record.title.unwrap_or_default(),
            author: record.author.unwrap_or_default(),
            price: record.price.unwrap_or(0.0),
            condition: record
                .condition
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            description: record.description,
            image_url: record.image_url,
            seller_name: record.seller_name.unwrap_or_default(),
            seller_email: record.seller_email.unwrap_or_default(),
            location: record.location,
            category: record.category,
        }
    }
}

/// Body returned after a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedId {
    pub id: String,
}

/// Query parameters for searching listings
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingFilter {
    /// Case-insensitive substring matched against title, author, description and category
    pub q: Option<String>,
    /// Exact category match
    pub category: Option<String>,
}

impl ListingFilter {
    /// Search term, if present and non-empty
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Category, if present and non-empty
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether `listing` satisfies this filter.
    ///
    /// Mirrors the query the store runs: exact category AND a case-insensitive
    /// substring of any searchable field.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = self.category()
            && listing.category.as_deref() != Some(category)
        {
            return false;
        }

        match self.search() {
            Some(q) => {
                let needle = q.to_lowercase();
                [
                    Some(listing.title.as_str()),
                    Some(listing.author.as_str()),
                    listing.description.as_deref(),
                    listing.category.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::bson::{self, doc};

    fn listing(title: &str, description: Option<&str>, category: Option<&str>) -> Listing {
        Listing {
            id: ObjectId::new().to_hex(),
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            price: 5.5,
            condition: BookCondition::Good,
            description: description.map(str::to_string),
            image_url: None,
            seller_name: "Alice".to_string(),
            seller_email: "a@example.com".to_string(),
            location: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_condition_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookCondition::LikeNew).unwrap(),
            "\"like new\""
        );
        assert_eq!(
            serde_json::from_str::<BookCondition>("\"poor\"").unwrap(),
            BookCondition::Poor
        );
        assert!(serde_json::from_str::<BookCondition>("\"mint\"").is_err());
        assert_eq!("like new".parse::<BookCondition>().unwrap(), BookCondition::LikeNew);
        assert_eq!(BookCondition::default(), BookCondition::Good);
    }

    #[test]
    fn test_create_listing_defaults_condition() {
        let input: CreateListing = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 5.5,
            "seller_name": "Alice",
            "seller_email": "a@example.com"
        }))
        .unwrap();

        assert_eq!(input.condition, BookCondition::Good);
        assert!(input.description.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_listing_validation() {
        let input = CreateListing {
            title: String::new(),
            author: "Frank Herbert".to_string(),
            price: -0.01,
            condition: BookCondition::Good,
            description: None,
            image_url: Some("not a url".to_string()),
            seller_name: "Alice".to_string(),
            seller_email: "not-an-email".to_string(),
            location: None,
            category: None,
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("seller_email"));
        assert!(!fields.contains_key("image_url"));
    }

    #[test]
    fn test_record_with_missing_fields_maps_to_defaults() {
        let oid = ObjectId::new();
        let record: ListingRecord = bson::from_document(doc! {
            "_id": oid,
            "title": "Dune",
            "price": 7_i32,
        })
        .unwrap();

        let listing = Listing::from(record);
        assert_eq!(listing.id, oid.to_hex());
        assert_eq!(listing.title, "Dune");
        assert_eq!(listing.author, "");
        assert_eq!(listing.price, 7.0);
        assert_eq!(listing.condition, BookCondition::Good);
        assert!(listing.category.is_none());
    }

    #[test]
    fn test_record_keeps_stored_condition() {
        let record: ListingRecord = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "condition": "like new",
        })
        .unwrap();
        assert_eq!(Listing::from(record).condition, BookCondition::LikeNew);
    }

    #[test]
    fn test_empty_filter_values_are_absent() {
        let filter = ListingFilter {
            q: Some(String::new()),
            category: Some(String::new()),
        };
        assert!(filter.search().is_none());
        assert!(filter.category().is_none());
        assert!(filter.matches(&listing("Dune", None, None)));
    }

    #[test]
    fn test_filter_matches_search_case_insensitively() {
        let filter = ListingFilter {
            q: Some("DUNE".to_string()),
            category: None,
        };
        assert!(filter.matches(&listing("Dune Messiah", None, None)));
        assert!(filter.matches(&listing("Other", Some("a dune story"), None)));
        assert!(filter.matches(&listing("Other", None, Some("dunes"))));
        assert!(!filter.matches(&listing("Emma", None, Some("classics"))));
    }

    #[test]
    fn test_filter_combines_category_and_search() {
        let filter = ListingFilter {
            q: Some("dune".to_string()),
            category: Some("scifi".to_string()),
        };
        assert!(filter.matches(&listing("Dune", None, Some("scifi"))));
        assert!(!filter.matches(&listing("Dune", None, Some("SciFi"))));
        assert!(!filter.matches(&listing("Emma", None, Some("scifi"))));
    }
}
