use crate::Scalar;
use serde_json::Value;

/// Numeric type a field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float,
}

/// One named model input.
///
/// Discriminants index into the `[Scalar; N]` row layout used by
/// [`super::FeatureVector`]; they carry no meaning for the model, whose
/// column order comes from the artifact's feature-name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SquareFeet = 0,
    Bedrooms = 1,
    Bathrooms = 2,
    AgeYears = 3,
    GarageSpaces = 4,
    LotSizeSqft = 5,
    Floors = 6,
    CrimeRate = 7,
    SchoolRating = 8,
    DistanceToCityMiles = 9,
    HasPool = 10,
    HasFireplace = 11,
    HasRenovated = 12,
    NeighborhoodQuality = 13,
}

impl Field {
    pub const N: usize = 14;

    pub const fn all() -> [Self; Self::N] {
        [
            Self::SquareFeet,
            Self::Bedrooms,
            Self::Bathrooms,
            Self::AgeYears,
            Self::GarageSpaces,
            Self::LotSizeSqft,
            Self::Floors,
            Self::CrimeRate,
            Self::SchoolRating,
            Self::DistanceToCityMiles,
            Self::HasPool,
            Self::HasFireplace,
            Self::HasRenovated,
            Self::NeighborhoodQuality,
        ]
    }

    /// wire name, also the history table column name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SquareFeet => "square_feet",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::AgeYears => "age_years",
            Self::GarageSpaces => "garage_spaces",
            Self::LotSizeSqft => "lot_size_sqft",
            Self::Floors => "floors",
            Self::CrimeRate => "crime_rate",
            Self::SchoolRating => "school_rating",
            Self::DistanceToCityMiles => "distance_to_city_miles",
            Self::HasPool => "has_pool",
            Self::HasFireplace => "has_fireplace",
            Self::HasRenovated => "has_renovated",
            Self::NeighborhoodQuality => "neighborhood_quality",
        }
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Self::CrimeRate | Self::DistanceToCityMiles => Kind::Float,
            _ => Kind::Integer,
        }
    }

    /// inclusive (min, max)
    #[rustfmt::skip]
    pub const fn bounds(&self) -> (Scalar, Scalar) {
        match self {
            Self::SquareFeet          => (100.0, 100000.0),
            Self::Bedrooms            => (1.0, 10.0),
            Self::Bathrooms           => (1.0, 10.0),
            Self::AgeYears            => (0.0, 150.0),
            Self::GarageSpaces        => (0.0, 5.0),
            Self::LotSizeSqft         => (500.0, 50000.0),
            Self::Floors              => (1.0, 7.0),
            Self::CrimeRate           => (0.0, 20.0),
            Self::SchoolRating        => (1.0, 10.0),
            Self::DistanceToCityMiles => (0.0, 100.0),
            Self::HasPool             => (0.0, 1.0),
            Self::HasFireplace        => (0.0, 1.0),
            Self::HasRenovated        => (0.0, 1.0),
            Self::NeighborhoodQuality => (1.0, 5.0),
        }
    }

    /// Coerce a raw JSON value into this field's numeric domain and range.
    /// On failure returns every message that applies to this field.
    pub fn parse(&self, value: Option<&Value>) -> Result<Scalar, Vec<String>> {
        let x = match value {
            None | Some(Value::Null) => return Err(vec!["This field is required.".to_string()]),
            Some(value) => self.coerce(value).ok_or_else(|| vec![self.invalid().to_string()])?,
        };
        let (lo, hi) = self.bounds();
        let mut errors = Vec::new();
        if x < lo {
            errors.push(format!(
                "Ensure this value is greater than or equal to {}.",
                self.display(lo)
            ));
        }
        if x > hi {
            errors.push(format!(
                "Ensure this value is less than or equal to {}.",
                self.display(hi)
            ));
        }
        match errors.is_empty() {
            true => Ok(x),
            false => Err(errors),
        }
    }

    fn coerce(&self, value: &Value) -> Option<Scalar> {
        let x = match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => i as Scalar,
                None => n.as_f64()?,
            },
            Value::String(s) => match self.kind() {
                Kind::Integer => Self::integral(s)? as Scalar,
                Kind::Float => s.trim().parse::<Scalar>().ok()?,
            },
            _ => return None,
        };
        match self.kind() {
            _ if !x.is_finite() => None,
            Kind::Integer if x.fract() != 0.0 => None,
            _ => Some(x),
        }
    }

    /// Decimal integer text, optionally followed by a point and zeros
    /// ("3", "3.", "3.00"). Exponents and fractions are rejected.
    fn integral(s: &str) -> Option<i64> {
        let s = s.trim();
        let s = match s.split_once('.') {
            Some((whole, zeros)) if zeros.bytes().all(|b| b == b'0') => whole,
            _ => s,
        };
        s.parse::<i64>().ok()
    }

    fn invalid(&self) -> &'static str {
        match self.kind() {
            Kind::Integer => "A valid integer is required.",
            Kind::Float => "A valid number is required.",
        }
    }

    fn display(&self, bound: Scalar) -> String {
        match self.kind() {
            Kind::Integer => format!("{}", bound as i64),
            Kind::Float => format!("{:?}", bound),
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = String;
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| format!("unknown feature '{}'", name))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
