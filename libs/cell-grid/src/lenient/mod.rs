//! # Lenient Field Decoding
//!
//! `deserialize_with` helpers for host-supplied request fields. A value of
//! the wrong JSON type never fails the request: it decodes as `None` and the
//! field falls back to its default during resolution.
//!
//! | Field kind | Accepts                                   | Otherwise |
//! |------------|-------------------------------------------|-----------|
//! | count      | integer, real (truncated), numeric text   | `None`    |
//! | real       | integer, real, numeric text               | `None`    |
//! | text       | string                                    | `None`    |
//! | point      | `[x, y, z]`                               | `None`    |
//! | index      | integer, real, text; anything else is `0` | `None` for null |
//! | cells      | list; unusable entries become empty cells | `None`    |
//! | object     | the nested request type                   | default   |
//!
//! # Examples
//! ```
//! use cell_grid::GridInput;
//!
//! let input: GridInput = serde_json::from_str(r#"{"x":"4","y":true,"size":"big"}"#).unwrap();
//! assert_eq!(input.x, Some(4));
//! assert_eq!(input.y, None);
//! assert_eq!(input.size, None);
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::geometry::{Cell, Point};
use crate::params::IndexValue;

/// Any JSON scalar, with everything else captured as `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_real(self) -> Option<f64> {
        match self {
            Scalar::Integer(value) => Some(value as f64),
            Scalar::Real(value) => Some(value),
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Null | Scalar::Other(_) => None,
        }
    }

    fn into_count(self) -> Option<i64> {
        match self {
            Scalar::Integer(value) => Some(value),
            Scalar::Text(text) => {
                let text = text.trim();
                text.parse()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(truncate))
            }
            other => other.into_real().and_then(truncate),
        }
    }
}

fn truncate(value: f64) -> Option<i64> {
    // `as` saturates; out-of-range counts are rejected later anyway.
    value.is_finite().then(|| value.trunc() as i64)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybePoint {
    Point(Point),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeValue<T> {
    Value(T),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeCell {
    Cell(Cell),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeCells {
    List(Vec<MaybeCell>),
    Other(IgnoredAny),
}

/// Integer count; reals are truncated toward zero.
pub fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_count())
}

/// Real number.
pub fn real<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_real())
}

/// String; other JSON types count as absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => Some(text),
        _ => None,
    })
}

/// `[x, y, z]` point.
pub fn point<'de, D>(deserializer: D) -> Result<Option<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MaybePoint::deserialize(deserializer)? {
        MaybePoint::Point(point) => Some(point),
        MaybePoint::Other(_) => None,
    })
}

/// Nested request object; anything that does not decode as `T` yields
/// `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match MaybeValue::<T>::deserialize(deserializer)? {
        MaybeValue::Value(value) => value,
        MaybeValue::Other(_) => T::default(),
    })
}

/// Pattern index. Null is absent; any non-scalar value selects index `0`.
pub fn index<'de, D>(deserializer: D) -> Result<Option<IndexValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Null => None,
        Scalar::Integer(value) => Some(IndexValue::Integer(value)),
        Scalar::Real(value) => Some(IndexValue::Real(value)),
        Scalar::Text(text) => Some(IndexValue::Text(text)),
        Scalar::Other(_) => Some(IndexValue::Integer(0)),
    })
}

/// Cell list. An unusable entry becomes an empty cell, which downstream
/// stages skip as malformed while still counting it.
pub fn cells<'de, D>(deserializer: D) -> Result<Option<Vec<Cell>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MaybeCells::deserialize(deserializer)? {
        MaybeCells::List(entries) => Some(
            entries
                .into_iter()
                .map(|entry| match entry {
                    MaybeCell::Cell(cell) => cell,
                    MaybeCell::Other(_) => Cell::new(Vec::new()),
                })
                .collect(),
        ),
        MaybeCells::Other(_) => None,
    })
}
