use {
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Whether a statement grants or denies the actions it lists.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    #[inline]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    #[inline]
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny)
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::Allow
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Allow => f.write_str("Allow"),
            Self::Deny => f.write_str("Deny"),
        }
    }
}

#[cfg(test)]
mod tests {
    use {crate::Effect, pretty_assertions::assert_eq};

    #[test_log::test]
    fn test_default_allows() {
        assert_eq!(Effect::default(), Effect::Allow);
        assert!(Effect::default().is_allow());
        assert!(Effect::Deny.is_deny());
        assert!(!Effect::Deny.is_allow());
    }

    #[test_log::test]
    fn test_display_and_json() {
        assert_eq!(format!("{}", Effect::Allow), "Allow");
        assert_eq!(format!("{}", Effect::Deny), "Deny");
        assert_eq!(serde_json::to_string(&Effect::Deny).unwrap(), r#""Deny""#);
        assert_eq!(serde_json::from_str::<Effect>(r#""Allow""#).unwrap(), Effect::Allow);
    }
}
