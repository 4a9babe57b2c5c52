use super::*;
use crate::Arbitrary;
use crate::Scalar;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// A house description that has passed validation: every field present,
/// correctly typed and inside its declared range.
///
/// The only way to build one from untrusted input is
/// `FeatureVector::try_from(&Value)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub square_feet: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub age_years: i64,
    pub garage_spaces: i64,
    pub lot_size_sqft: i64,
    pub floors: i64,
    pub crime_rate: f64,
    pub school_rating: i64,
    pub distance_to_city_miles: f64,
    pub has_pool: i64,
    pub has_fireplace: i64,
    pub has_renovated: i64,
    pub neighborhood_quality: i64,
}

impl FeatureVector {
    /// raw numeric value of one field
    pub fn get(&self, field: Field) -> Scalar {
        match field {
            Field::SquareFeet => self.square_feet as Scalar,
            Field::Bedrooms => self.bedrooms as Scalar,
            Field::Bathrooms => self.bathrooms as Scalar,
            Field::AgeYears => self.age_years as Scalar,
            Field::GarageSpaces => self.garage_spaces as Scalar,
            Field::LotSizeSqft => self.lot_size_sqft as Scalar,
            Field::Floors => self.floors as Scalar,
            Field::CrimeRate => self.crime_rate,
            Field::SchoolRating => self.school_rating as Scalar,
            Field::DistanceToCityMiles => self.distance_to_city_miles,
            Field::HasPool => self.has_pool as Scalar,
            Field::HasFireplace => self.has_fireplace as Scalar,
            Field::HasRenovated => self.has_renovated as Scalar,
            Field::NeighborhoodQuality => self.neighborhood_quality as Scalar,
        }
    }

    /// values laid out in the given column order
    pub fn row(&self, columns: &[Field]) -> Vec<Scalar> {
        columns.iter().map(|field| self.get(*field)).collect()
    }
}

/// Values indexed by `Field as usize`. Integer fields are truncated, so
/// callers must only pass values that already passed [`Field::parse`].
impl From<[Scalar; Field::N]> for FeatureVector {
    fn from(x: [Scalar; Field::N]) -> Self {
        Self {
            square_feet: x[Field::SquareFeet as usize] as i64,
            bedrooms: x[Field::Bedrooms as usize] as i64,
            bathrooms: x[Field::Bathrooms as usize] as i64,
            age_years: x[Field::AgeYears as usize] as i64,
            garage_spaces: x[Field::GarageSpaces as usize] as i64,
            lot_size_sqft: x[Field::LotSizeSqft as usize] as i64,
            floors: x[Field::Floors as usize] as i64,
            crime_rate: x[Field::CrimeRate as usize],
            school_rating: x[Field::SchoolRating as usize] as i64,
            distance_to_city_miles: x[Field::DistanceToCityMiles as usize],
            has_pool: x[Field::HasPool as usize] as i64,
            has_fireplace: x[Field::HasFireplace as usize] as i64,
            has_renovated: x[Field::HasRenovated as usize] as i64,
            neighborhood_quality: x[Field::NeighborhoodQuality as usize] as i64,
        }
    }
}

impl From<&FeatureVector> for [Scalar; Field::N] {
    fn from(features: &FeatureVector) -> Self {
        Field::all().map(|field| features.get(field))
    }
}

impl TryFrom<&Value> for FeatureVector {
    type Error = FieldErrors;
    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let map = match body {
            Value::Object(map) => map,
            other => {
                return Err(FieldErrors::body(format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    kind(other)
                )));
            }
        };
        let mut errors = FieldErrors::default();
        let mut x = [0.0; Field::N];
        for field in Field::all() {
            match field.parse(map.get(field.name())) {
                Ok(value) => x[field as usize] = value,
                Err(messages) => errors.insert(field.name(), messages),
            }
        }
        match errors.is_empty() {
            true => Ok(Self::from(x)),
            false => Err(errors),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

impl Arbitrary for FeatureVector {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self::from(Field::all().map(|field| {
            let (lo, hi) = field.bounds();
            match field.kind() {
                Kind::Integer => rng.random_range(lo as i64..=hi as i64) as Scalar,
                Kind::Float => (rng.random_range(lo..=hi) * 100.0).round() / 100.0,
            }
        }))
    }
}
