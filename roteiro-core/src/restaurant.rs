use crate::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A place to eat, offered for the lunch and dinner slots.
///
/// `price_level` is a tiered symbol from "€" to "€€€€".
///
/// # Examples
/// ```
/// use roteiro_core::Restaurant;
///
/// let lunch = Restaurant::new("Café de Flore", "Francesa", "€€€", 4.3);
/// assert_eq!(lunch.cuisine, "Francesa");
/// assert_eq!(lunch.price_level, "€€€");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Restaurant {
    /// Display name, also used to identify the restaurant.
    pub name: String,
    /// Average rating between 0 and 5.
    pub rating: f32,
    /// Cuisine label.
    pub cuisine: String,
    /// Price tier symbol.
    pub price_level: String,
    /// Image shown next to the entry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    /// Geographic position.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location: Option<Location>,
    /// Number of reviews behind the rating.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reviews: Option<u32>,
    /// Free-text opening hours.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub opening_hours: Option<String>,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub phone: Option<String>,
    /// Official website.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub website: Option<String>,
}

impl Restaurant {
    /// Construct a restaurant with its mandatory fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price_level: impl Into<String>,
        rating: f32,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            cuisine: cuisine.into(),
            price_level: price_level.into(),
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

    /// Set the review count.
    #[must_use]
    pub const fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = Some(reviews);
        self
    }

    /// Set the opening hours.
    #[must_use]
    pub fn with_opening_hours(mut self, opening_hours: impl Into<String>) -> Self {
        self.opening_hours = Some(opening_hours.into());
        self
    }

    /// Set the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}
