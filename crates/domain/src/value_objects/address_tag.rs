//! Address component tags read from upstream place details

use std::fmt;

/// The address component types the café pipeline extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressTag {
    /// Prefecture (都道府県)
    Prefecture,
    /// City, ward or municipality (市区町村)
    City,
    /// Town or district below the city (町域)
    Subcity,
}

impl AddressTag {
    /// All tags in extraction order
    pub const ALL: [Self; 3] = [Self::Prefecture, Self::City, Self::Subcity];

    /// Upstream type tag this component is matched by
    #[must_use]
    pub const fn upstream_type(&self) -> &'static str {
        match self {
            Self::Prefecture => "administrative_area_level_1",
            Self::City => "locality",
            Self::Subcity => "sublocality_level_2",
        }
    }
}

impl fmt::Display for AddressTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upstream_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_types() {
        assert_eq!(
            AddressTag::Prefecture.upstream_type(),
            "administrative_area_level_1"
        );
        assert_eq!(AddressTag::City.upstream_type(), "locality");
        assert_eq!(AddressTag::Subcity.upstream_type(), "sublocality_level_2");
    }

    #[test]
    fn all_tags_are_distinct() {
        let mut types: Vec<_> = AddressTag::ALL.iter().map(AddressTag::upstream_type).collect();
        types.dedup();
        assert_eq!(types.len(), 3);
    }
}
