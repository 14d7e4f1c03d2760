use strum::{Display, EnumString};

/// Stored role of an account. `Colab` marks the accounts allowed to submit
/// events; this role-field check is the single source of truth for
/// collaborator access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Colab,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_string_forms_match_the_stored_values() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Colab.to_string(), "colab");
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert!(Role::from_str("owner").is_err());
    }
}
