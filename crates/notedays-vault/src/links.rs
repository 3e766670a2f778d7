use urlencoding::encode;

/// URI scheme understood by the host application
pub const APP_SCHEME: &str = "obsidian";

/// Build a navigation link for a note
///
/// Produces `obsidian://open?vault=<vault>&file=<path>` with both query
/// values percent-encoded. Vault name and path are used verbatim as the
/// source reported them.
pub fn note_url(vault: &str, path: &str) -> String {
    format!(
        "{}://open?vault={}&file={}",
        APP_SCHEME,
        encode(vault),
        encode(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_pass_through() {
        assert_eq!(
            note_url("vault", "daily.md"),
            "obsidian://open?vault=vault&file=daily.md"
        );
    }

    #[test]
    fn test_spaces_and_slashes_are_encoded() {
        let url = note_url("My Vault", "work/weekly plan.md");
        assert_eq!(
            url,
            "obsidian://open?vault=My%20Vault&file=work%2Fweekly%20plan.md"
        );
    }

    #[test]
    fn test_ampersand_cannot_break_query() {
        let url = note_url("v", "a&b.md");
        assert_eq!(url, "obsidian://open?vault=v&file=a%26b.md");
    }
}
