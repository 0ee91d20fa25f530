//! `?page=&limit=` query extraction.

use crate::error::{AppError, FieldError};
use crate::pagination::PageQuery;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

/// Why a raw `page`/`limit` value is not a usable page number.
fn out_of_range(raw: &str) -> String {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        "Expected number".into()
    } else if negative || digits.chars().all(|c| c == '0') {
        "Expected number to be greater or equal to 1".into()
    } else {
        format!("Expected number to be less or equal to {}", u32::MAX)
    }
}

fn parse_positive(
    params: &HashMap<String, String>,
    key: &str,
    default: u32,
    errors: &mut Vec<FieldError>,
) -> u32 {
    let Some(raw) = params.get(key) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            errors.push(FieldError::new(format!("/{}", key), out_of_range(raw)));
            default
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Parse(rejection.body_text()))?;
        let defaults = PageQuery::default();
        let mut errors = Vec::new();
        let page = parse_positive(&params, "page", defaults.page, &mut errors);
        let limit = parse_positive(&params, "limit", defaults.limit, &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(PageQuery { page, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_absent() {
        let mut errors = Vec::new();
        assert_eq!(parse_positive(&params(&[]), "page", 1, &mut errors), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_non_numeric_and_zero() {
        let mut errors = Vec::new();
        let p = params(&[("page", "invalid"), ("limit", "0")]);
        parse_positive(&p, "page", 1, &mut errors);
        parse_positive(&p, "limit", 10, &mut errors);
        assert_eq!(
            errors,
            vec![
                FieldError::new("/page", "Expected number"),
                FieldError::new("/limit", "Expected number to be greater or equal to 1"),
            ]
        );
    }

    #[test]
    fn values_past_u32_report_the_upper_bound() {
        let mut errors = Vec::new();
        let p = params(&[("limit", "4294967296"), ("page", "99999999999999999999999")]);
        parse_positive(&p, "limit", 10, &mut errors);
        parse_positive(&p, "page", 1, &mut errors);
        let expected = format!("Expected number to be less or equal to {}", u32::MAX);
        assert_eq!(errors[0], FieldError::new("/limit", expected.clone()));
        assert_eq!(errors[1], FieldError::new("/page", expected));
    }

    #[test]
    fn upper_bound_itself_is_accepted() {
        let mut errors = Vec::new();
        let limit = parse_positive(&params(&[("limit", "4294967295")]), "limit", 10, &mut errors);
        assert_eq!(limit, u32::MAX);
        assert!(errors.is_empty());
    }

    #[test]
    fn negative_is_out_of_range() {
        let mut errors = Vec::new();
        parse_positive(&params(&[("page", "-2")]), "page", 1, &mut errors);
        assert_eq!(errors[0].info, "Expected number to be greater or equal to 1");
    }
}
