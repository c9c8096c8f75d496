//! Ticket-reference extraction from free-form message text.

/// Extract the first `#`-prefixed ticket id from `text`.
///
/// Only the first `#` in the text is considered. The maximal digit run after
/// it is parsed as a base-10 id; a `#` followed by no digits, a run in a
/// non-ASCII digit script, or an overflowing run all yield `None`.
pub fn extract_ticket_id(text: &str) -> Option<u64> {
    let (_, rest) = text.split_once('#')?;

    let digits: String = rest.chars().take_while(|c| c.is_numeric()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hash_is_no_match() {
        assert_eq!(extract_ticket_id(""), None);
        assert_eq!(extract_ticket_id("no ticket here"), None);
        assert_eq!(extract_ticket_id("123"), None);
    }

    #[test]
    fn extracts_plain_reference() {
        assert_eq!(extract_ticket_id("#123"), Some(123));
        assert_eq!(extract_ticket_id("please check #42"), Some(42));
    }

    #[test]
    fn extracts_embedded_reference() {
        assert_eq!(extract_ticket_id("foo#123bar"), Some(123));
    }

    #[test]
    fn first_reference_wins() {
        assert_eq!(extract_ticket_id("foo#123bar#456baz"), Some(123));
    }

    #[test]
    fn non_ascii_prefix_is_ignored() {
        assert_eq!(extract_ticket_id("ほげ #123"), Some(123));
    }

    #[test]
    fn hash_without_digits_is_no_match() {
        assert_eq!(extract_ticket_id("#abc"), None);
        assert_eq!(extract_ticket_id("trailing #"), None);
    }

    #[test]
    fn malformed_first_run_shadows_later_ones() {
        // The first `#` is authoritative even when its run is unusable.
        assert_eq!(extract_ticket_id("#abc then #42"), None);
    }

    #[test]
    fn non_ascii_digit_run_is_no_match() {
        // Full-width digits are consumed as the run but fail the base-10 parse.
        assert_eq!(extract_ticket_id("#１２３"), None);
    }

    #[test]
    fn overflow_is_no_match() {
        assert_eq!(extract_ticket_id("#99999999999999999999999999999"), None);
    }
}
