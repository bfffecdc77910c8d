use {
    crate::IamError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

macro_rules! condition_ops {
    ($($(#[$meta:meta])* $name:ident,)*) => {
        /// The condition operators IAM documents.
        ///
        /// Statements accept any operator string through [Operator]; this enum is the closed set used for defaults
        /// and for [PolicyStatement::validate][crate::PolicyStatement::validate].
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum ConditionOp {
            $($(#[$meta])* $name,)*
        }

        impl ConditionOp {
            /// Every known operator, in declaration order.
            pub const ALL: &'static [ConditionOp] = &[$(Self::$name,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }

        impl FromStr for ConditionOp {
            type Err = IamError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(Self::$name),)*
                    _ => Err(IamError::InvalidConditionOperator(s.to_string())),
                }
            }
        }
    };
}

condition_ops! {
    ArnEquals,
    ArnEqualsIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    DateLessThan,
    DateLessThanIfExists,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanIfExists,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    /// Tests for the presence or absence of a key. Has no `IfExists` form.
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    NumericLessThan,
    NumericLessThanIfExists,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanIfExists,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotLike,
    StringNotLikeIfExists,
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConditionOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConditionOp::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const FOR_ANY_VALUE: &str = "ForAnyValue:";
const FOR_ALL_VALUES: &str = "ForAllValues:";
const IF_EXISTS: &str = "IfExists";

/// The operator of a condition entry, kept as the string IAM will see.
///
/// Any string is accepted so that operators AWS introduces later can be used without a new release. The set
/// qualifiers and the `IfExists` suffix can be layered on with the helper methods:
///
/// ```
/// # use iam_catalog::{ConditionOp, Operator};
/// let op = Operator::from(ConditionOp::StringEquals).if_exists().for_any_value();
/// assert_eq!(op.as_str(), "ForAnyValue:StringEqualsIfExists");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Operator(String);

impl Operator {
    pub fn new<S: Into<String>>(op: S) -> Self {
        Self(op.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends `IfExists` unless the operator already ends with it.
    pub fn if_exists(mut self) -> Self {
        if !self.0.ends_with(IF_EXISTS) {
            self.0.push_str(IF_EXISTS);
        }
        self
    }

    /// Qualifies the operator with `ForAnyValue:`, replacing any existing set qualifier.
    pub fn for_any_value(self) -> Self {
        Self(format!("{FOR_ANY_VALUE}{}", self.base()))
    }

    /// Qualifies the operator with `ForAllValues:`, replacing any existing set qualifier.
    pub fn for_all_values(self) -> Self {
        Self(format!("{FOR_ALL_VALUES}{}", self.base()))
    }

    /// The operator without its set qualifier.
    pub fn base(&self) -> &str {
        self.0
            .strip_prefix(FOR_ANY_VALUE)
            .or_else(|| self.0.strip_prefix(FOR_ALL_VALUES))
            .unwrap_or(&self.0)
    }

    /// Resolves the unqualified operator to a known [ConditionOp].
    pub fn condition_op(&self) -> Result<ConditionOp, IamError> {
        ConditionOp::from_str(self.base()).map_err(|_| IamError::InvalidConditionOperator(self.0.clone()))
    }
}

impl Default for Operator {
    fn default() -> Self {
        ConditionOp::StringLike.into()
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for Operator {
    fn from(op: &str) -> Self {
        Self(op.to_string())
    }
}

impl From<String> for Operator {
    fn from(op: String) -> Self {
        Self(op)
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self(op.as_str().to_string())
    }
}

impl PartialEq<ConditionOp> for Operator {
    fn eq(&self, other: &ConditionOp) -> bool {
        self.0 == other.as_str()
    }
}

impl PartialEq<str> for Operator {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Operator {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{ConditionOp, IamError, Operator},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_condition_op_names() {
        assert_eq!(ConditionOp::ALL.len(), 53);
        for op in ConditionOp::ALL {
            assert_eq!(&ConditionOp::from_str(op.as_str()).unwrap(), op);
            assert_eq!(serde_json::to_string(op).unwrap(), format!("\"{op}\""));
        }

        assert_eq!(
            ConditionOp::from_str("StringSorta").unwrap_err(),
            IamError::InvalidConditionOperator("StringSorta".to_string())
        );
        assert_eq!(serde_json::from_str::<ConditionOp>(r#""ArnLike""#).unwrap(), ConditionOp::ArnLike);
        assert!(serde_json::from_str::<ConditionOp>("3").is_err());
    }

    #[test_log::test]
    fn test_qualifiers() {
        let op = Operator::from(ConditionOp::StringEquals);
        assert_eq!(op.clone().if_exists().as_str(), "StringEqualsIfExists");
        assert_eq!(op.clone().if_exists().if_exists().as_str(), "StringEqualsIfExists");
        assert_eq!(op.clone().for_any_value().as_str(), "ForAnyValue:StringEquals");
        assert_eq!(op.clone().for_any_value().for_all_values().as_str(), "ForAllValues:StringEquals");
        assert_eq!(op.for_all_values().base(), "StringEquals");
    }

    #[test_log::test]
    fn test_unknown_operators_pass_through() {
        let op = Operator::from("StringFuzzyMatch");
        assert_eq!(op.to_string(), "StringFuzzyMatch");
        assert_eq!(serde_json::to_string(&op).unwrap(), r#""StringFuzzyMatch""#);
        assert_eq!(op.condition_op().unwrap_err(), IamError::InvalidConditionOperator("StringFuzzyMatch".to_string()));

        let op = Operator::from("ForAnyValue:StringLike".to_string());
        assert_eq!(op.condition_op().unwrap(), ConditionOp::StringLike);
        assert_eq!(op, "ForAnyValue:StringLike");
        assert_eq!(Operator::default(), ConditionOp::StringLike);
    }
}
