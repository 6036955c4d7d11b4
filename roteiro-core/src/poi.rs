use crate::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sightseeing or attraction record supplied by a data provider.
///
/// `name` is both the display label and the identity key; curated
/// destinations are recognised by it. The engine only ever reads these
/// records.
///
/// # Examples
/// ```
/// use roteiro_core::{Location, PointOfInterest};
///
/// let poi = PointOfInterest::new("Torre Eiffel", "Monumento")
///     .with_location(Location::new(48.8584, 2.2945))
///     .with_rating(4.7);
///
/// assert_eq!(poi.name, "Torre Eiffel");
/// assert_eq!(poi.kind, "Monumento");
/// assert_eq!(poi.rating, Some(4.7));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PointOfInterest {
    /// Display name, also used to identify the place.
    pub name: String,
    /// Category label such as "Museu" or "Monumento".
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Image shown next to the entry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    /// Geographic position.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location: Option<Location>,
    /// Free-text opening hours.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub opening_hours: Option<String>,
    /// Free-text admission price.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ticket_price: Option<String>,
    /// Average rating between 0 and 5.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reviews: Option<u32>,
    /// Short description.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub phone: Option<String>,
    /// Official website.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub website: Option<String>,
}

impl PointOfInterest {
    /// Construct a point of interest with a name and category.
    ///
    /// All optional details start empty.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the geographic position.
    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the opening hours.
    #[must_use]
    pub fn with_opening_hours(mut self, opening_hours: impl Into<String>) -> Self {
        self.opening_hours = Some(opening_hours.into());
        self
    }

    /// Set the admission price.
    #[must_use]
    pub fn with_ticket_price(mut self, ticket_price: impl Into<String>) -> Self {
        self.ticket_price = Some(ticket_price.into());
        self
    }

    /// Set the average rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review count.
    #[must_use]
    pub const fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = Some(reviews);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the website.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}
