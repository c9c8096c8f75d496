//! Identity reconciliation between ticketing accounts and chat accounts.
//!
//! The two directories share no foreign key, so matching is heuristic: login
//! equality first, then the four concatenation orders of the ticketing-side
//! name (surname-first forms included for East-Asian names), then a single
//! manual-alias substitution for the cases automatic matching cannot cover.

use crate::base::{
    aliases::AliasTable,
    types::{ChatUser, TrackerUser},
};

/// Full-width space as it appears in real names entered with an IME.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Decide whether a ticketing user and a chat user denote the same human.
///
/// Pure predicate. Alias substitution is applied at most once per attempt,
/// so a self-referential or cyclic alias table cannot loop.
pub fn is_same_user(tracker_user: &TrackerUser, chat_user: &ChatUser, aliases: &AliasTable) -> bool {
    matches_identity(tracker_user, &chat_user.handle, &chat_user.real_name, aliases, true)
}

fn matches_identity(tracker_user: &TrackerUser, handle: &str, real_name: &str, aliases: &AliasTable, allow_alias: bool) -> bool {
    if tracker_user.login == handle {
        return true;
    }

    let normalized = real_name.replace(IDEOGRAPHIC_SPACE, " ");
    let first = &tracker_user.first_name;
    let last = &tracker_user.last_name;

    if normalized == format!("{last}{first}")
        || normalized == format!("{last} {first}")
        || normalized == format!("{first}{last}")
        || normalized == format!("{first} {last}")
    {
        return true;
    }

    // Manual override: substitute the real name once and re-check. The alias
    // lookup uses the name as entered, before space normalization.
    if allow_alias
        && let Some(mapped) = aliases.get(real_name)
    {
        return matches_identity(tracker_user, handle, mapped, aliases, false);
    }

    false
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_user(login: &str, first: &str, last: &str) -> TrackerUser {
        TrackerUser {
            id: 1,
            login: login.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn chat_user(handle: &str, real_name: &str) -> ChatUser {
        ChatUser {
            id: "U1".to_string(),
            handle: handle.to_string(),
            real_name: real_name.to_string(),
        }
    }

    #[test]
    fn login_equality_always_matches() {
        let aliases = AliasTable::default();
        assert!(is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("jdoe", "Somebody Else"), &aliases));
    }

    #[test]
    fn all_four_name_orders_match() {
        let aliases = AliasTable::default();
        let user = tracker_user("yamada", "Taro", "Yamada");

        assert!(is_same_user(&user, &chat_user("t.yamada", "YamadaTaro"), &aliases));
        assert!(is_same_user(&user, &chat_user("t.yamada", "Yamada Taro"), &aliases));
        assert!(is_same_user(&user, &chat_user("t.yamada", "TaroYamada"), &aliases));
        assert!(is_same_user(&user, &chat_user("t.yamada", "Taro Yamada"), &aliases));
    }

    #[test]
    fn full_width_space_is_normalized() {
        let aliases = AliasTable::default();
        let user = tracker_user("yamada", "太郎", "山田");

        assert!(is_same_user(&user, &chat_user("t.yamada", "山田\u{3000}太郎"), &aliases));
    }

    #[test]
    fn mismatch_without_alias_fails() {
        let aliases = AliasTable::default();
        assert!(!is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("johnny", "Johnny D"), &aliases));
    }

    #[test]
    fn alias_substitution_rescues_a_mismatch() {
        let aliases: AliasTable = [("Johnny D".to_string(), "John Doe".to_string())].into_iter().collect();

        assert!(is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("johnny", "Johnny D"), &aliases));
    }

    #[test]
    fn alias_lookup_uses_the_unnormalized_name() {
        // The table key carries the full-width space as entered in the profile.
        let aliases: AliasTable = [("山田\u{3000}たろう".to_string(), "山田 太郎".to_string())].into_iter().collect();

        assert!(is_same_user(&tracker_user("yamada", "太郎", "山田"), &chat_user("t.yamada", "山田\u{3000}たろう"), &aliases));
    }

    #[test]
    fn self_referential_alias_terminates() {
        let aliases: AliasTable = [("Johnny D".to_string(), "Johnny D".to_string())].into_iter().collect();

        assert!(!is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("johnny", "Johnny D"), &aliases));
    }

    #[test]
    fn alias_cycle_terminates() {
        let aliases: AliasTable = [
            ("Johnny D".to_string(), "JD".to_string()),
            ("JD".to_string(), "Johnny D".to_string()),
        ]
        .into_iter()
        .collect();

        assert!(!is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("johnny", "Johnny D"), &aliases));
    }

    #[test]
    fn substitution_is_applied_at_most_once() {
        // Two hops would reach the matching name; one hop must not.
        let aliases: AliasTable = [
            ("Johnny D".to_string(), "JD".to_string()),
            ("JD".to_string(), "John Doe".to_string()),
        ]
        .into_iter()
        .collect();

        assert!(!is_same_user(&tracker_user("jdoe", "John", "Doe"), &chat_user("johnny", "Johnny D"), &aliases));
    }
}
