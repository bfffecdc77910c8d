use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Eq, PartialEq)]
pub enum IamError {
    /// The action identifier is not of the form `service:Action`.
    InvalidAction(String),

    /// The access level name is not one of the five IAM access levels.
    InvalidAccessLevel(String),

    InvalidConditionOperator(String),

    /// The operator is known but cannot compare the documented value type of the condition key.
    IncompatibleConditionOperator(String),

    InvalidPolicyVersion(String),

    /// The resource is not a well-formed ARN, or it still carries an unsubstituted template placeholder.
    InvalidResource(String),

    /// The action is well-formed but is not listed in the service's action table.
    UnknownAction(String),

    /// The action belongs to a different service than the statement it was added to.
    ForeignAction(String),
}

impl Display for IamError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidAction(action) => write!(f, "Invalid action: {}", action),
            Self::InvalidAccessLevel(level) => write!(f, "Invalid access level: {}", level),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::IncompatibleConditionOperator(detail) => {
                write!(f, "Condition operator does not fit the key's value type: {}", detail)
            }
            Self::InvalidPolicyVersion(version) => write!(f, "Invalid policy version: {}", version),
            Self::InvalidResource(resource) => write!(f, "Invalid resource: {}", resource),
            Self::UnknownAction(action) => write!(f, "Unknown action: {}", action),
            Self::ForeignAction(action) => write!(f, "Action does not belong to this service: {}", action),
        }
    }
}

impl Error for IamError {}

#[cfg(test)]
mod tests {
    use {
        crate::IamError,
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", IamError::InvalidAction("foo".to_string()));
        assert_eq!(IamError::InvalidAction("foo".to_string()).to_string(), "Invalid action: foo");
        assert_eq!(IamError::InvalidAccessLevel("Admin".to_string()).to_string(), "Invalid access level: Admin");
        assert_eq!(
            IamError::InvalidConditionOperator("StringSorta".to_string()).to_string(),
            "Invalid condition operator: StringSorta"
        );
        assert_eq!(
            IamError::IncompatibleConditionOperator("DateEquals on ecs:cluster".to_string()).to_string(),
            "Condition operator does not fit the key's value type: DateEquals on ecs:cluster"
        );
        assert_eq!(
            IamError::InvalidPolicyVersion("2020-01-01".to_string()).to_string(),
            "Invalid policy version: 2020-01-01"
        );
        assert_eq!(IamError::InvalidResource("foo".to_string()).to_string(), "Invalid resource: foo");
        assert_eq!(IamError::UnknownAction("lambda:Fly".to_string()).to_string(), "Unknown action: lambda:Fly");
        assert_eq!(
            IamError::ForeignAction("ec2:RunInstances".to_string()).to_string(),
            "Action does not belong to this service: ec2:RunInstances"
        );
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = IamError::InvalidAction("foo".to_string());
        let e1b = IamError::InvalidAction("foo".to_string());
        let e2 = IamError::UnknownAction("foo".to_string());
        let e3 = IamError::InvalidAction("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e2, e3);
    }
}
