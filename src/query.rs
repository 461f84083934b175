use std::collections::HashMap;

/// Decodes the query-string portion of a URL into a parameter map.
///
/// Splits on `&` and `=` only; empty segments are skipped and a later
/// duplicate key overwrites an earlier one. Values are taken as they
/// appear in the URL, without percent-decoding.
pub fn decode(search: &str) -> HashMap<String, String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut params = HashMap::new();
    for segment in search.split('&') {
        if segment.is_empty() {
            continue;
        }
        let mut parts = segment.split('=');
        let name = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        params.insert(name.to_string(), value.to_string());
    }
    params
}
