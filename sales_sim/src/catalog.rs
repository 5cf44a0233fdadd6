//! Product catalog for the simulated store
//!
//! Five categories with fixed price ranges and sampling weights. The weights
//! sum to 1.0 and skew toward apparel and electronics, roughly matching a
//! mid-size e-commerce mix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category of a simulated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Apparel,
    HomeGarden,
    Beauty,
    ToysGames,
}

impl ProductCategory {
    /// All categories, in catalog order
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Electronics,
        ProductCategory::Apparel,
        ProductCategory::HomeGarden,
        ProductCategory::Beauty,
        ProductCategory::ToysGames,
    ];

    /// Inclusive price range in dollars
    pub fn price_range(&self) -> (f64, f64) {
        match self {
            ProductCategory::Electronics => (80.0, 400.0),
            ProductCategory::Apparel => (25.0, 120.0),
            ProductCategory::HomeGarden => (40.0, 200.0),
            ProductCategory::Beauty => (15.0, 90.0),
            ProductCategory::ToysGames => (20.0, 150.0),
        }
    }

    /// Sampling weight of the category
    pub fn weight(&self) -> f64 {
        match self {
            ProductCategory::Electronics => 0.30,
            ProductCategory::Apparel => 0.35,
            ProductCategory::HomeGarden => 0.20,
            ProductCategory::Beauty => 0.10,
            ProductCategory::ToysGames => 0.05,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Apparel => "Apparel",
            ProductCategory::HomeGarden => "Home & Garden",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::ToysGames => "Toys & Games",
        };
        write!(f, "{}", name)
    }
}
