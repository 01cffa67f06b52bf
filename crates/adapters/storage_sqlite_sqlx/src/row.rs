//! Column decoding helpers shared by the repositories.

use roomhub_domain::time::Timestamp;

fn decode_error(err: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Parse an RFC 3339 `TEXT` column.
pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(decode_error)
}

/// Narrow an `INTEGER` column that must hold a non-negative 32-bit value.
pub(crate) fn unsigned(value: i64) -> Result<u32, sqlx::Error> {
    u32::try_from(value).map_err(decode_error)
}

/// Parse a `TEXT` column through the domain's `FromStr`.
pub(crate) fn parse<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(decode_error)
}
