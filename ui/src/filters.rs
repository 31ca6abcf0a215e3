//! The active filter set for the services browse screen.

use std::collections::HashSet;

use api::catalog::Service;
use api::catalog::ServiceCategory;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 999_999.0;

/// The conjunction of all currently active browse constraints. Rebuilt
/// wholesale from the filter controls on every change rather than patched
/// in place.
#[derive(Clone, PartialEq, Debug)]
pub struct FilterSet {
    pub categories: HashSet<ServiceCategory>,
    pub vendors: HashSet<String>,
    /// Inclusive price range in EGP.
    pub price: (f64, f64),
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            categories: HashSet::new(),
            vendors: HashSet::new(),
            price: (DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE),
        }
    }
}

impl FilterSet {
    /// Builds the set from the raw control state. Blank or unparseable price
    /// inputs take the open-ended defaults.
    pub fn from_inputs(
        categories: &HashSet<ServiceCategory>,
        vendors: &HashSet<String>,
        min_price: &str,
        max_price: &str,
    ) -> Self {
        Self {
            categories: categories.clone(),
            vendors: vendors.clone(),
            price: (
                min_price.trim().parse().unwrap_or(DEFAULT_MIN_PRICE),
                max_price.trim().parse().unwrap_or(DEFAULT_MAX_PRICE),
            ),
        }
    }

    /// AND of all active criteria. An empty category or vendor set means
    /// that criterion is inactive.
    pub fn matches(&self, service: &Service) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&service.category) {
            return false;
        }
        if !self.vendors.is_empty() && !self.vendors.contains(&service.vendor) {
            return false;
        }
        let (min, max) = self.price;
        service.base_price >= min && service.base_price <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flyer_at_150() -> Service {
        api::catalog::services()
            .into_iter()
            .find(|s| s.category == ServiceCategory::Flyers)
            .expect("catalog has a flyer service")
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterSet::default();
        for service in api::catalog::services() {
            assert!(filter.matches(&service), "{}", service.name);
        }
    }

    #[test]
    fn category_mismatch_hides_even_when_price_fits() {
        let service = flyer_at_150();
        assert_eq!(service.base_price, 150.0);

        let mut filter = FilterSet::default();
        filter.categories.insert(ServiceCategory::Banners);
        filter.price = (100.0, 200.0);
        assert!(!filter.matches(&service));
    }

    #[test]
    fn category_and_price_both_fitting_shows() {
        let service = flyer_at_150();

        let mut filter = FilterSet::default();
        filter.categories.insert(ServiceCategory::Flyers);
        filter.price = (100.0, 200.0);
        assert!(filter.matches(&service));
    }

    #[test]
    fn price_range_is_inclusive() {
        let service = flyer_at_150();
        let mut filter = FilterSet::default();
        filter.price = (150.0, 150.0);
        assert!(filter.matches(&service));

        filter.price = (150.01, 200.0);
        assert!(!filter.matches(&service));
    }

    #[test]
    fn vendor_filter_applies() {
        let service = flyer_at_150();
        let mut filter = FilterSet::default();
        filter.vendors.insert("Nowhere Press".to_string());
        assert!(!filter.matches(&service));

        filter.vendors.insert(service.vendor.clone());
        assert!(filter.matches(&service));
    }

    #[test]
    fn blank_price_inputs_take_defaults() {
        let filter = FilterSet::from_inputs(&HashSet::new(), &HashSet::new(), "", "abc");
        assert_eq!(filter.price, (DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE));
    }
}
