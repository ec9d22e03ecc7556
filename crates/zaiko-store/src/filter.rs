//! Search criteria for inventory queries

use zaiko_types::Car;

/// Filter criteria for [`Inventory::search`](crate::Inventory::search)
///
/// Each unset field imposes no constraint; a car matches when it satisfies
/// every supplied criterion.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive exact match on make
    pub make: Option<String>,
    /// Price lower bound (inclusive)
    pub min_price: Option<f64>,
    /// Price upper bound (inclusive)
    pub max_price: Option<f64>,
    /// Year lower bound (inclusive)
    pub min_year: Option<i32>,
}

impl SearchFilter {
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Whether a car satisfies every supplied criterion
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(ref make) = self.make {
            if car.make.to_lowercase() != make.to_lowercase() {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if car.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if car.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_year {
            if car.year < min {
                return false;
            }
        }
        true
    }
}
