use std::collections::HashMap;

use crate::error::ApiError;

/// Query-string values, matched by name without regard to case
/// (`?productid=1` and `?productID=1` are the same parameter).
pub fn lookup<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

pub fn id_param(params: &HashMap<String, String>, name: &str) -> Result<i32, ApiError> {
    let raw = lookup(params, name)
        .ok_or_else(|| ApiError::bad_request(format!("Missing query parameter '{}'", name)))?;

    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Query parameter '{}' must be an integer", name)))
}

/// An empty value is allowed and matches every row.
pub fn text_param<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ApiError> {
    lookup(params, name)
        .ok_or_else(|| ApiError::bad_request(format!("Missing query parameter '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn parses_ids_case_insensitively() {
        assert_eq!(id_param(&params(&[("productID", "12")]), "productID").unwrap(), 12);
        assert_eq!(id_param(&params(&[("productid", " 7 ")]), "productID").unwrap(), 7);
    }

    #[test]
    fn rejects_missing_or_malformed_ids() {
        let missing = id_param(&params(&[]), "categoryID").unwrap_err();
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert!(missing.message().contains("categoryID"));

        let malformed = id_param(&params(&[("categoryID", "abc")]), "categoryID").unwrap_err();
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn text_params() {
        assert_eq!(text_param(&params(&[("productName", "wid")]), "productName").unwrap(), "wid");
        assert_eq!(text_param(&params(&[("productName", "")]), "productName").unwrap(), "");
        assert!(text_param(&params(&[]), "productName").is_err());
    }
}
