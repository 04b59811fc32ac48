use time::OffsetDateTime;
use time::error::Format;
use time::format_description::well_known::Rfc3339;

/// End-of-run footer with an RFC 3339 UTC timestamp.
pub fn completion_stamp() -> Result<String, Format> {
    let now = OffsetDateTime::now_utc().format(&Rfc3339)?;
    Ok(format!("Run completed at {now}"))
}
