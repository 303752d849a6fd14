use crate::model::User;
use crate::source::LoadState;

/// Users whose name or email contains `query`, ignoring case, in their
/// original order. An empty query keeps everyone.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&q) || u.email.to_lowercase().contains(&q))
        .collect()
}

/// The derived list for the current load state, or `None` while there is
/// nothing to derive from (loading or failed).
pub fn apply_search<'a>(state: &'a LoadState, query: &str) -> Option<Vec<&'a User>> {
    state.users().map(|users| filter_users(users, query))
}
