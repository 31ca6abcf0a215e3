//! The service catalog: categories, vendors, services and sample data.

use serde::Deserialize;
use serde::Serialize;

/// Printing service categories offered on the marketplace.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ServiceCategory {
    BusinessCards,
    Flyers,
    Banners,
    Brochures,
    Stickers,
    Packaging,
}

impl ServiceCategory {
    /// Human-readable label, for filter checkboxes and cards.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::BusinessCards => "Business Cards",
            ServiceCategory::Flyers => "Flyers",
            ServiceCategory::Banners => "Banners",
            ServiceCategory::Brochures => "Brochures",
            ServiceCategory::Stickers => "Stickers",
            ServiceCategory::Packaging => "Packaging",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub location: String,
    pub rating: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

/// One printing service listed on the marketplace.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub category: ServiceCategory,
    pub vendor: String,
    /// Base unit price in EGP.
    pub base_price: f64,
    pub rating: f64,
    pub image: String,
    pub gallery: Vec<String>,
    pub description: String,
    pub specs: Vec<(String, String)>,
    pub reviews: Vec<Review>,
}

/// A customer's order, shown on the dashboard.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Order {
    pub reference: String,
    pub service: String,
    pub vendor: String,
    pub placed_on: String,
    pub status: String,
    pub total: f64,
}

fn svc(
    id: u32,
    name: &str,
    category: ServiceCategory,
    vendor: &str,
    base_price: f64,
    rating: f64,
    description: &str,
) -> Service {
    let slug = name.to_lowercase().replace(' ', "-");
    Service {
        id,
        name: name.to_string(),
        category,
        vendor: vendor.to_string(),
        base_price,
        rating,
        image: format!("/assets/img/{slug}.jpg"),
        gallery: (1..=3)
            .map(|n| format!("/assets/img/{slug}-{n}.jpg"))
            .collect(),
        description: description.to_string(),
        specs: vec![
            ("Turnaround".to_string(), "3-5 business days".to_string()),
            ("Minimum order".to_string(), "100 units".to_string()),
            ("Finish".to_string(), "Matte or glossy".to_string()),
        ],
        reviews: vec![
            Review {
                author: "Mona S.".to_string(),
                rating: 5,
                comment: "Great quality and fast delivery.".to_string(),
            },
            Review {
                author: "Omar K.".to_string(),
                rating: 4,
                comment: "Colors came out slightly darker than the proof.".to_string(),
            },
        ],
    }
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            name: "PrintPro Egypt".to_string(),
            location: "Cairo".to_string(),
            rating: 4.8,
        },
        Vendor {
            name: "Cairo Print House".to_string(),
            location: "Cairo".to_string(),
            rating: 4.5,
        },
        Vendor {
            name: "Alex Graphics".to_string(),
            location: "Alexandria".to_string(),
            rating: 4.6,
        },
        Vendor {
            name: "Nile Press".to_string(),
            location: "Giza".to_string(),
            rating: 4.2,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        svc(
            1,
            "Business Cards",
            ServiceCategory::BusinessCards,
            "PrintPro Egypt",
            250.0,
            4.8,
            "Full-color business cards on 350gsm stock.",
        ),
        svc(
            2,
            "A5 Flyers",
            ServiceCategory::Flyers,
            "Cairo Print House",
            150.0,
            4.4,
            "Double-sided A5 flyers, ideal for promotions.",
        ),
        svc(
            3,
            "Roll-up Banner",
            ServiceCategory::Banners,
            "Alex Graphics",
            850.0,
            4.7,
            "Retractable roll-up banner with aluminium stand.",
        ),
        svc(
            4,
            "Tri-fold Brochures",
            ServiceCategory::Brochures,
            "Nile Press",
            400.0,
            4.3,
            "A4 tri-fold brochures on coated paper.",
        ),
        svc(
            5,
            "Vinyl Stickers",
            ServiceCategory::Stickers,
            "PrintPro Egypt",
            120.0,
            4.6,
            "Die-cut weatherproof vinyl stickers.",
        ),
        svc(
            6,
            "Outdoor Banner",
            ServiceCategory::Banners,
            "Cairo Print House",
            1200.0,
            4.5,
            "Heavy-duty PVC banner with eyelets, any size.",
        ),
        svc(
            7,
            "Premium Business Cards",
            ServiceCategory::BusinessCards,
            "Alex Graphics",
            450.0,
            4.9,
            "Soft-touch laminated cards with spot UV.",
        ),
        svc(
            8,
            "Product Packaging",
            ServiceCategory::Packaging,
            "Nile Press",
            950.0,
            4.1,
            "Custom printed boxes with structural design.",
        ),
    ]
}

pub fn service_by_id(id: u32) -> Option<Service> {
    services().into_iter().find(|s| s.id == id)
}

/// Case-insensitive substring match over name, vendor and description.
pub fn search(services: &[Service], query: &str) -> Vec<Service> {
    let q = query.to_lowercase();
    services
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&q)
                || s.vendor.to_lowercase().contains(&q)
                || s.description.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

pub fn orders() -> Vec<Order> {
    let rows: [(&str, &str, &str, &str, &str, f64); 12] = [
        ("ORD-1001", "Business Cards", "PrintPro Egypt", "02/06/2025", "Delivered", 250.0),
        ("ORD-1002", "A5 Flyers", "Cairo Print House", "11/06/2025", "Delivered", 300.0),
        ("ORD-1003", "Roll-up Banner", "Alex Graphics", "18/06/2025", "Delivered", 850.0),
        ("ORD-1004", "Vinyl Stickers", "PrintPro Egypt", "25/06/2025", "Delivered", 240.0),
        ("ORD-1005", "Tri-fold Brochures", "Nile Press", "03/07/2025", "Delivered", 400.0),
        ("ORD-1006", "Outdoor Banner", "Cairo Print House", "10/07/2025", "In production", 1200.0),
        ("ORD-1007", "Premium Business Cards", "Alex Graphics", "15/07/2025", "In production", 450.0),
        ("ORD-1008", "Product Packaging", "Nile Press", "21/07/2025", "Awaiting proof", 950.0),
        ("ORD-1009", "A5 Flyers", "Cairo Print House", "28/07/2025", "Awaiting proof", 150.0),
        ("ORD-1010", "Business Cards", "PrintPro Egypt", "04/08/2025", "Quote accepted", 250.0),
        ("ORD-1011", "Vinyl Stickers", "PrintPro Egypt", "09/08/2025", "Quote accepted", 120.0),
        ("ORD-1012", "Roll-up Banner", "Alex Graphics", "14/08/2025", "Quote requested", 850.0),
    ];
    rows.into_iter()
        .map(|(r, s, v, d, st, t)| Order {
            reference: r.to_string(),
            service: s.to_string(),
            vendor: v.to_string(),
            placed_on: d.to_string(),
            status: st.to_string(),
            total: t,
        })
        .collect()
}

/// End of the current site-wide promotion, driving the countdown banner.
pub fn promo_ends() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339("2026-09-30T21:59:59Z")
        .expect("valid promo timestamp")
        .with_timezone(&chrono::Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<u32> = services().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), services().len());
    }

    #[test]
    fn every_service_vendor_is_listed() {
        let known: HashSet<String> = vendors().into_iter().map(|v| v.name).collect();
        for service in services() {
            assert!(known.contains(&service.vendor), "{}", service.vendor);
        }
    }

    #[test]
    fn category_string_forms_round_trip() {
        assert_eq!(ServiceCategory::BusinessCards.to_string(), "business-cards");
        assert_eq!(
            ServiceCategory::from_str("flyers").unwrap(),
            ServiceCategory::Flyers
        );
        assert!(ServiceCategory::from_str("origami").is_err());
    }

    #[test]
    fn search_matches_name_and_vendor() {
        let all = services();
        let by_name = search(&all, "banner");
        assert!(by_name.iter().all(|s| s.name.to_lowercase().contains("banner")));
        assert_eq!(by_name.len(), 2);

        let by_vendor = search(&all, "nile press");
        assert_eq!(by_vendor.len(), 2);

        assert!(search(&all, "letterpress wedding suite").is_empty());
    }

    #[test]
    fn unknown_service_id_is_none() {
        assert!(service_by_id(999).is_none());
    }
}
