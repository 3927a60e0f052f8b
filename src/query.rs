//! Search query formatting for the device database's query-string contract.

/// Formats a raw search string for the `sSearch` query parameter.
///
/// Only the first space is replaced with `+`. The site has always been queried
/// this way by this service (the upstream contract was established with a
/// single-occurrence substitution, not a global one), so the behavior is
/// preserved exactly rather than generalized to all spaces.
///
/// # Arguments
///
/// * `query` - The raw, already percent-decoded search text
///
/// # Returns
///
/// The query with its first space (if any) replaced by `+`.
pub fn format_query(query: &str) -> String {
    query.replacen(' ', "+", 1)
}
