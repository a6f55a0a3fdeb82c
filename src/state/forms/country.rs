//! Static country → city table backing the cascading selects

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Countries offered by the country select, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Country {
    India,
    #[strum(to_string = "USA")]
    Usa,
    Australia,
    Italy,
    Canada,
    Germany,
    Japan,
}

impl Country {
    /// Ordered list of selectable cities for this country
    pub fn cities(self) -> &'static [&'static str] {
        match self {
            Self::India => &[
                "Chandigarh",
                "Delhi",
                "Mumbai",
                "Bangalore",
                "Chennai",
                "Hyderabad",
                "Kolkata",
                "Pune",
                "Ahmedabad",
            ],
            Self::Usa => &[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Philadelphia",
                "San Antonio",
            ],
            Self::Australia => &[
                "Sydney",
                "Melbourne",
                "Brisbane",
                "Perth",
                "Adelaide",
                "Gold Coast",
                "Canberra",
            ],
            Self::Italy => &[
                "Rome", "Milan", "Naples", "Turin", "Palermo", "Genoa", "Bologna",
            ],
            Self::Canada => &[
                "Toronto",
                "Vancouver",
                "Montreal",
                "Calgary",
                "Ottawa",
                "Edmonton",
                "Quebec City",
            ],
            Self::Germany => &[
                "Berlin",
                "Hamburg",
                "Munich",
                "Cologne",
                "Frankfurt",
                "Stuttgart",
                "Düsseldorf",
            ],
            Self::Japan => &[
                "Tokyo",
                "Osaka",
                "Kyoto",
                "Nagoya",
                "Sapporo",
                "Fukuoka",
                "Hiroshima",
            ],
        }
    }

    /// Whether `city` is one of this country's cities
    pub fn has_city(self, city: &str) -> bool {
        self.cities().contains(&city)
    }

    /// All countries in table order
    pub fn all() -> Vec<Country> {
        Self::iter().collect()
    }
}

/// Cities for an optional country selection (empty when nothing is selected)
pub fn cities_for(country: Option<Country>) -> &'static [&'static str] {
    country.map(Country::cities).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_all_keeps_table_order() {
        let names: Vec<String> = Country::all().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec!["India", "USA", "Australia", "Italy", "Canada", "Germany", "Japan"]
        );
    }

    #[test]
    fn test_parse_display_names() {
        assert_eq!(Country::from_str("USA").unwrap(), Country::Usa);
        assert_eq!(Country::from_str("India").unwrap(), Country::India);
        assert!(Country::from_str("Narnia").is_err());
        assert!(Country::from_str("").is_err());
    }

    #[test]
    fn test_every_country_has_cities() {
        for country in Country::iter() {
            assert!(!country.cities().is_empty(), "{country} has no cities");
        }
    }

    #[test]
    fn test_india_cities_in_order() {
        assert_eq!(Country::India.cities().first(), Some(&"Chandigarh"));
        assert_eq!(Country::India.cities().len(), 9);
        assert!(Country::India.has_city("Delhi"));
        assert!(!Country::India.has_city("Tokyo"));
    }

    #[test]
    fn test_cities_for_none_is_empty() {
        assert!(cities_for(None).is_empty());
        assert_eq!(cities_for(Some(Country::Japan)), Country::Japan.cities());
    }
}
