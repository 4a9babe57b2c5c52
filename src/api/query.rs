use crate::history::DEFAULT_LIMIT;
use serde::Deserialize;

/// Query string of `GET /history/`. The limit is kept raw so that an
/// unparsable value can be reported instead of silently defaulted.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    limit: Option<String>,
}

impl HistoryQuery {
    pub fn limit(&self) -> Result<i64, String> {
        match self.limit.as_deref() {
            None => Ok(DEFAULT_LIMIT),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid limit '{}': {}", raw, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> HistoryQuery {
        HistoryQuery {
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn absent_limit_defaults() {
        assert_eq!(query(None).limit(), Ok(DEFAULT_LIMIT));
    }

    #[test]
    fn numeric_limit_passes_through() {
        assert_eq!(query(Some("2")).limit(), Ok(2));
        assert_eq!(query(Some(" 25 ")).limit(), Ok(25));
        assert_eq!(query(Some("-3")).limit(), Ok(-3));
    }

    #[test]
    fn junk_limit_is_an_error() {
        assert!(query(Some("ten")).limit().is_err());
        assert!(query(Some("")).limit().is_err());
        assert!(query(Some("2.5")).limit().is_err());
    }
}
