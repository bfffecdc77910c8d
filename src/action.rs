use {
    crate::IamError,
    log::debug,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// A parsed IAM action identifier: `*` or `service:Action`.
///
/// Statements store actions as plain strings so that callers may add anything IAM accepts; this type is used when
/// checking them with [PolicyStatement::validate][crate::PolicyStatement::validate].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    Any,
    Specific {
        service: String,
        action: String,
    },
}

impl Action {
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Result<Self, IamError> {
        let service = service.into();
        let action = action.into();
        let invalid = || IamError::InvalidAction(format!("{service}:{action}"));

        if service.is_empty() || action.is_empty() {
            debug!("Action '{service}:{action}' has an empty component.");
            return Err(invalid());
        }

        if !service.is_ascii() || !action.is_ascii() {
            debug!("Action '{service}:{action}' is not ASCII.");
            return Err(invalid());
        }

        // Hyphens and underscores are allowed inside a component but not at either end.
        let inner = |i: usize, len: usize, c: u8| i > 0 && i < len - 1 && (c == b'-' || c == b'_');

        if !service.bytes().enumerate().all(|(i, c)| c.is_ascii_alphanumeric() || inner(i, service.len(), c)) {
            debug!("Action '{service}:{action}' has an invalid service.");
            return Err(invalid());
        }

        if !action
            .bytes()
            .enumerate()
            .all(|(i, c)| c.is_ascii_alphanumeric() || c == b'*' || c == b'?' || inner(i, action.len(), c))
        {
            debug!("Action '{service}:{action}' has an invalid action.");
            return Err(invalid());
        }

        Ok(Action::Specific {
            service,
            action,
        })
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn service(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                service,
                ..
            } => service,
        }
    }

    #[inline]
    pub fn action(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                action,
                ..
            } => action,
        }
    }

    /// Indicates whether the action name contains a `*` or `?` wildcard.
    #[inline]
    pub fn is_pattern(&self) -> bool {
        self.action().contains(|c| c == '*' || c == '?')
    }
}

impl FromStr for Action {
    type Err = IamError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        if v == "*" {
            return Ok(Self::Any);
        }

        match v.split_once(':') {
            Some((service, action)) if !action.contains(':') => Action::new(service, action),
            _ => Err(IamError::InvalidAction(v.to_string())),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Specific {
                service,
                action,
            } => write!(f, "{}:{}", service, action),
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Action, IamError},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_bad_strings() {
        for bad in [
            "",
            "lambda",
            "lambda:",
            ":InvokeFunction",
            "lambda:Invoke:Function",
            "🦀:InvokeFunction",
            "lambda:🦀",
            "-lambda:InvokeFunction",
            "lambda_:InvokeFunction",
            "lambda:-InvokeFunction",
            "lambda:InvokeFunction_",
        ] {
            assert_eq!(Action::from_str(bad).unwrap_err(), IamError::InvalidAction(bad.to_string()));
        }
    }

    #[test_log::test]
    fn test_good_strings() {
        let a = Action::from_str("cleanrooms-ml:Create_Training-Dataset").unwrap();
        assert_eq!(a.service(), "cleanrooms-ml");
        assert_eq!(a.action(), "Create_Training-Dataset");
        assert!(!a.is_any());
        assert!(!a.is_pattern());

        let a = Action::from_str("ecs:Describe*").unwrap();
        assert!(a.is_pattern());
        assert_eq!(a.to_string(), "ecs:Describe*");
        assert_eq!(serde_json::to_string(&a).unwrap(), r#""ecs:Describe*""#);

        let a = Action::from_str("*").unwrap();
        assert!(a.is_any());
        assert_eq!(a.service(), "*");
        assert_eq!(a.action(), "*");
    }
}
