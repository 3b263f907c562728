use crate::types::Named;

/// Find the record whose name equals `name` exactly
///
/// When several records share the name, the one appearing last in `records`
/// is returned.
pub(crate) fn find_by_name<'a, T: Named>(records: &'a [T], name: &str) -> Option<&'a T> {
    records.iter().rev().find(|record| record.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    fn users() -> Vec<User> {
        vec![User::new("U1", "alice"), User::new("U2", "bob")]
    }

    #[test]
    fn test_exact_match() {
        let users = users();
        assert_eq!(find_by_name(&users, "bob"), Some(&User::new("U2", "bob")));
    }

    #[test]
    fn test_miss() {
        assert!(find_by_name(&users(), "carol").is_none());
        assert!(find_by_name(&users(), "Bob").is_none());
        assert!(find_by_name::<User>(&[], "alice").is_none());
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let users = vec![
            User::new("U1", "alice"),
            User::new("U7", "alice"),
            User::new("U2", "bob"),
        ];
        assert_eq!(find_by_name(&users, "alice").map(|u| u.id.as_str()), Some("U7"));
    }
}
