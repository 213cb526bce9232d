use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// `NaN` and infinities are rejected. JSON cannot store them, so they
    /// would be written back as `null`.
    fn into_finite<E: de::Error>(self) -> Result<f64, E> {
        let value = match self {
            NumberOrString::Number(n) => n,
            NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(E::custom)?,
        };
        if !value.is_finite() {
            return Err(E::custom(format!("expected a finite number, got {value}")));
        }
        Ok(value)
    }
}

/// Accepts `120`, `120.5` or `"120.5"`. Listing forms submit prices as text.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_finite()
}

pub fn deserialize_optional_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_finite().map(Some),
    }
}

/// Whole counts (guests, bedrooms) from a number or numeric text.
pub fn deserialize_optional_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = deserialize_optional_lenient_f64(deserializer)? else {
        return Ok(None);
    };
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("expected a whole count, got {value}")));
    }
    Ok(Some(value as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "deserialize_lenient_f64")]
        price: f64,
    }

    #[derive(Deserialize)]
    struct MaybePriced {
        #[serde(default, deserialize_with = "deserialize_optional_lenient_f64")]
        price: Option<f64>,
    }

    #[test]
    fn test_number_and_text_prices() {
        let a: Priced = serde_json::from_str(r#"{"price": 99.5}"#).unwrap();
        let b: Priced = serde_json::from_str(r#"{"price": " 99.5 "}"#).unwrap();
        assert_eq!(a.price, 99.5);
        assert_eq!(b.price, 99.5);
    }

    #[test]
    fn test_garbage_price_rejected() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#).is_err());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", " Infinity "] {
            let body = format!(r#"{{"price": "{text}"}}"#);
            assert!(serde_json::from_str::<Priced>(&body).is_err(), "{text}");
            assert!(serde_json::from_str::<MaybePriced>(&body).is_err(), "{text}");
        }
    }

    #[derive(Deserialize)]
    struct Counted {
        #[serde(default, deserialize_with = "deserialize_optional_lenient_u32")]
        guests: Option<u32>,
    }

    #[test]
    fn test_optional_count() {
        let text: Counted = serde_json::from_str(r#"{"guests": "4"}"#).unwrap();
        let number: Counted = serde_json::from_str(r#"{"guests": 2}"#).unwrap();
        assert_eq!(text.guests, Some(4));
        assert_eq!(number.guests, Some(2));
        assert!(serde_json::from_str::<Counted>(r#"{"guests": 2.5}"#).is_err());
        assert!(serde_json::from_str::<Counted>(r#"{"guests": -1}"#).is_err());
    }

    #[test]
    fn test_optional_price() {
        let missing: MaybePriced = serde_json::from_str("{}").unwrap();
        let blank: MaybePriced = serde_json::from_str(r#"{"price": ""}"#).unwrap();
        let set: MaybePriced = serde_json::from_str(r#"{"price": "12"}"#).unwrap();
        assert_eq!(missing.price, None);
        assert_eq!(blank.price, None);
        assert_eq!(set.price, Some(12.0));
    }
}
