//! Vendor quotes for a requested job, shown on the comparison screen.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub id: u32,
    pub vendor: String,
    pub service: String,
    /// Quoted total in EGP.
    pub price: f64,
    pub delivery_days: u32,
    pub vendor_rating: f64,
    pub notes: String,
}

/// Sample quotes for the comparison table. A real backend would return the
/// quotes submitted against the customer's open request.
pub fn quotes_for_request() -> Vec<Quote> {
    vec![
        Quote {
            id: 501,
            vendor: "PrintPro Egypt".to_string(),
            service: "Business Cards".to_string(),
            price: 250.0,
            delivery_days: 3,
            vendor_rating: 4.8,
            notes: "Free design review included".to_string(),
        },
        Quote {
            id: 502,
            vendor: "Cairo Print House".to_string(),
            service: "Business Cards".to_string(),
            price: 220.0,
            delivery_days: 5,
            vendor_rating: 4.5,
            notes: "Price valid for 14 days".to_string(),
        },
        Quote {
            id: 503,
            vendor: "Alex Graphics".to_string(),
            service: "Business Cards".to_string(),
            price: 310.0,
            delivery_days: 2,
            vendor_rating: 4.6,
            notes: "Express courier to Cairo".to_string(),
        },
        Quote {
            id: 504,
            vendor: "Nile Press".to_string(),
            service: "Business Cards".to_string(),
            price: 195.0,
            delivery_days: 7,
            vendor_rating: 4.2,
            notes: "Bulk discount applied".to_string(),
        },
    ]
}

pub fn quote_by_id(id: u32) -> Option<Quote> {
    quotes_for_request().into_iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_lookup_by_id() {
        assert_eq!(quote_by_id(502).unwrap().vendor, "Cairo Print House");
        assert!(quote_by_id(9000).is_none());
    }
}
