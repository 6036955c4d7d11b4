//! Built-in destination datasets.

pub(crate) mod madrid;
pub(crate) mod paris;

use roteiro_core::{Location, PointOfInterest, Restaurant};

struct Sight {
    name: &'static str,
    kind: &'static str,
    address: &'static str,
    position: (f64, f64),
    rating: f32,
    description: &'static str,
    image: &'static str,
}

impl Sight {
    fn build(self) -> PointOfInterest {
        let (lat, lng) = self.position;
        PointOfInterest::new(self.name, self.kind)
            .with_address(self.address)
            .with_location(Location::new(lat, lng))
            .with_rating(self.rating)
            .with_description(self.description)
            .with_image_url(self.image)
    }
}

struct Table {
    name: &'static str,
    cuisine: &'static str,
    price_level: &'static str,
    rating: f32,
    address: &'static str,
    position: (f64, f64),
    image: &'static str,
}

impl Table {
    fn build(self) -> Restaurant {
        let (lat, lng) = self.position;
        Restaurant::new(self.name, self.cuisine, self.price_level, self.rating)
            .with_address(self.address)
            .with_location(Location::new(lat, lng))
            .with_image_url(self.image)
    }
}
