//! Fixed sample data used by the demo binary and tests.

use crate::country::Country;

/// Sample countries in a fixed order.
///
/// Mixes populations on both sides of one million so every operator has
/// something to keep and something to drop.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new("Germany", 83_200_000, "EUR"),
        Country::new("Iceland", 372_000, "ISK"),
        Country::new("Japan", 125_700_000, "JPY"),
        Country::new("Luxembourg", 640_000, "EUR"),
        Country::new("Brazil", 214_300_000, "BRL"),
        Country::new("Malta", 520_000, "EUR"),
        Country::new("Canada", 38_900_000, "CAD"),
    ]
}
