use {
    crate::IamError,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The coarse category AWS assigns to every IAM action.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    Tagging,
    PermissionsManagement,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Tagging => "Tagging",
            Self::PermissionsManagement => "Permissions management",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = IamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "List" => Ok(Self::List),
            "Read" => Ok(Self::Read),
            "Write" => Ok(Self::Write),
            "Tagging" => Ok(Self::Tagging),
            "Permissions management" => Ok(Self::PermissionsManagement),
            _ => Err(IamError::InvalidAccessLevel(s.to_string())),
        }
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{AccessLevel, IamError},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_names() {
        for level in [
            AccessLevel::List,
            AccessLevel::Read,
            AccessLevel::Write,
            AccessLevel::Tagging,
            AccessLevel::PermissionsManagement,
        ] {
            assert_eq!(AccessLevel::from_str(&level.to_string()).unwrap(), level);
        }

        assert_eq!(AccessLevel::PermissionsManagement.to_string(), "Permissions management");
        assert_eq!(
            serde_json::to_string(&AccessLevel::PermissionsManagement).unwrap(),
            r#""Permissions management""#
        );
    }

    #[test_log::test]
    fn test_bad_name() {
        assert_eq!(
            AccessLevel::from_str("PermissionsManagement").unwrap_err(),
            IamError::InvalidAccessLevel("PermissionsManagement".to_string())
        );
    }
}
