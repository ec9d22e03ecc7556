//! Core types for the dealership inventory

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Sale status of a car on the lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarStatus {
    Available,
    Sold,
}

impl CarStatus {
    /// Parse a status label (case-insensitive)
    pub fn from_label(s: &str) -> Result<Self, ParseError> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("available") {
            Ok(CarStatus::Available)
        } else if label.eq_ignore_ascii_case("sold") {
            Ok(CarStatus::Sold)
        } else {
            Err(ParseError::Status(s.to_string()))
        }
    }

    /// Canonical label as written to the inventory file
    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Sold => "Sold",
        }
    }

    /// The opposite status
    pub fn toggled(&self) -> Self {
        match self {
            CarStatus::Available => CarStatus::Sold,
            CarStatus::Sold => CarStatus::Available,
        }
    }
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One vehicle record in the dealership inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Manufacturer (e.g. "Toyota", "Ford")
    pub make: String,
    /// Model name; also the lookup key for remove/toggle operations
    pub model: String,
    /// Manufacturing year
    pub year: i32,
    /// Asking price
    pub price: f64,
    /// Sale status, `Available` unless toggled
    pub status: CarStatus,
}

impl Car {
    /// Construct a car from raw field text
    ///
    /// `year` and `price` arrive as text (user input or a file row) and must
    /// parse as an integer and a number respectively. Status starts out as
    /// `Available`.
    pub fn new(make: &str, model: &str, year: &str, price: &str) -> Result<Self, ParseError> {
        Ok(Self {
            make: make.to_string(),
            model: model.to_string(),
            year: parse_year(year)?,
            price: parse_price(price)?,
            status: CarStatus::Available,
        })
    }

    /// Replace the status (file rows carry their own)
    pub fn with_status(mut self, status: CarStatus) -> Self {
        self.status = status;
        self
    }

    /// Case-insensitive model-key comparison used by remove/toggle
    pub fn matches_model(&self, model: &str) -> bool {
        self.model.to_lowercase() == model.to_lowercase()
    }
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    s.trim().parse().map_err(|_| ParseError::Year(s.to_string()))
}

fn parse_price(s: &str) -> Result<f64, ParseError> {
    s.trim().parse().map_err(|_| ParseError::Price(s.to_string()))
}
