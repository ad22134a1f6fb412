//! Movie Records
//!
//! Wire types for the movie catalog. Field names follow the API's camelCase
//! JSON, and the server-assigned identifier travels as `_id`.

use serde::{Deserialize, Serialize};

/// A movie record as held by the server.
///
/// The identifier is assigned by the server on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default)]
    pub description: String,
    pub year: i32,
    pub rating: f64,
    pub run_time: u32,
}

impl Movie {
    /// Attach a server identifier to a payload
    pub fn from_new(id: impl Into<String>, movie: NewMovie) -> Self {
        Self {
            id: id.into(),
            title: movie.title,
            banner_image: movie.banner_image,
            description: movie.description,
            year: movie.year,
            rating: movie.rating,
            run_time: movie.run_time,
        }
    }

    /// The editable fields, without the identifier
    pub fn to_new(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            banner_image: self.banner_image.clone(),
            description: self.description.clone(),
            year: self.year,
            rating: self.rating,
            run_time: self.run_time,
        }
    }
}

/// Create payload: a movie without its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub banner_image: String,
    pub description: String,
    pub year: i32,
    pub rating: f64,
    pub run_time: u32,
}

/// Server-reported metadata for the full result set behind a paged query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_movies: u64,
}

/// One page of the movie list, as returned by `GET /movies/list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub pagination: Pagination,
}
