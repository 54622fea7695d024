//! Query-string to display rows for the payment success page

/// One `KEY: value` row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    /// Raw decoded key, unique per row position
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Display label for a query key: underscores become spaces, then upper-case
pub fn display_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Parse a URL query string (with or without the leading `?`) into rows.
///
/// Every pair is kept in order, duplicates included. Keys without `=` get an
/// empty value. Empty segments (`a=1&&b=2`) are skipped.
pub fn payment_details(search: &str) -> Vec<DetailRow> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key);
            DetailRow {
                label: display_label(&key),
                value: decode_component(value),
                key,
            }
        })
        .collect()
}

// form encoding: `+` is a space; malformed escapes are shown as-is
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |decoded| decoded.into_owned())
}
