use {
    crate::{display_json, IamError, PolicyStatement},
    derive_builder::Builder,
    serde::{
        de::{self, Deserializer},
        ser::{SerializeMap, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Policy language versions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PolicyVersion {
    V2008_10_17,
    V2012_10_17,
}

impl Default for PolicyVersion {
    fn default() -> Self {
        Self::V2012_10_17
    }
}

impl Display for PolicyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::V2008_10_17 => f.write_str("2008-10-17"),
            Self::V2012_10_17 => f.write_str("2012-10-17"),
        }
    }
}

impl FromStr for PolicyVersion {
    type Err = IamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-10-17" => Ok(Self::V2008_10_17),
            "2012-10-17" => Ok(Self::V2012_10_17),
            _ => Err(IamError::InvalidPolicyVersion(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        PolicyVersion::from_str(&value).map_err(de::Error::custom)
    }
}

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// An IAM policy document assembled from built statements.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    /// Defaults to `2012-10-17`, which policy variables such as `${aws:username}` require.
    #[builder(default)]
    version: PolicyVersion,

    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    #[builder(setter(into), default)]
    statement: Vec<PolicyStatement>,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    #[inline]
    pub fn version(&self) -> PolicyVersion {
        self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &[PolicyStatement] {
        &self.statement
    }

    /// Appends a statement. Accepts a [PolicyStatement] or any per-service statement type.
    pub fn push<S: Into<PolicyStatement>>(&mut self, statement: S) {
        self.statement.push(statement.into());
    }

    /// Validates every statement, returning the first error found.
    pub fn validate(&self) -> Result<(), IamError> {
        self.statement.iter().try_for_each(PolicyStatement::validate)
    }
}

display_json!(Policy);

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        state.serialize_entry("Version", &self.version)?;
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            services::{DynamoDb, Lambda},
            GlobalConditions, IamError, Policy, PolicyStatement, PolicyVersion, Statement,
        },
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_policy_document() {
        let mut invoke = Lambda::with_sid("Invoke");
        invoke.invoke_function().on_function("my-fn", Some("123456789012"), Some("us-east-1"), None);

        let mut read = DynamoDb::with_sid("ReadOwnItems");
        read.to_get_item()
            .to_query()
            .on_table("users", None, None, None)
            .if_leading_keys("${aws:userid}", Some("ForAllValues:StringEquals".into()))
            .if_aws_secure_transport(None);

        let mut policy =
            Policy::builder().id("app-policy").statement(vec![PolicyStatement::from(invoke)]).build().unwrap();
        policy.push(read);

        assert_eq!(policy.version(), PolicyVersion::V2012_10_17);
        assert_eq!(policy.id(), Some("app-policy"));
        assert_eq!(policy.statement().len(), 2);
        assert!(policy.validate().is_ok());

        assert_eq!(
            policy.to_string(),
            indoc! { r#"
            {
                "Version": "2012-10-17",
                "Id": "app-policy",
                "Statement": [
                    {
                        "Sid": "Invoke",
                        "Effect": "Allow",
                        "Action": "lambda:InvokeFunction",
                        "Resource": "arn:aws:lambda:us-east-1:123456789012:function:my-fn"
                    },
                    {
                        "Sid": "ReadOwnItems",
                        "Effect": "Allow",
                        "Action": [
                            "dynamodb:GetItem",
                            "dynamodb:Query"
                        ],
                        "Resource": "arn:aws:dynamodb:*:*:table/users",
                        "Condition": {
                            "ForAllValues:StringEquals": {
                                "dynamodb:LeadingKeys": "${aws:userid}"
                            },
                            "Bool": {
                                "aws:SecureTransport": "true"
                            }
                        }
                    }
                ]
            }"# }
        );
    }

    #[test_log::test]
    fn test_validation_error_propagates() {
        let mut s = Lambda::new();
        s.to("NotARealAction");
        let mut policy = Policy::builder().version(PolicyVersion::V2008_10_17).build().unwrap();
        policy.push(Lambda::new());
        policy.push(s);

        assert_eq!(policy.validate().unwrap_err(), IamError::UnknownAction("lambda:NotARealAction".to_string()));
        assert!(policy.to_string().starts_with("{\n    \"Version\": \"2008-10-17\",\n    \"Statement\": ["));
    }

    #[test_log::test]
    fn test_versions() {
        assert_eq!(PolicyVersion::default(), PolicyVersion::V2012_10_17);
        assert_eq!(PolicyVersion::from_str("2008-10-17").unwrap(), PolicyVersion::V2008_10_17);
        assert_eq!(PolicyVersion::V2008_10_17.to_string(), "2008-10-17");
        assert_ne!(PolicyVersion::V2008_10_17, PolicyVersion::V2012_10_17);
        assert_eq!(
            PolicyVersion::from_str("2020-01-01").unwrap_err(),
            IamError::InvalidPolicyVersion("2020-01-01".to_string())
        );

        let v: PolicyVersion = serde_json::from_str(r#""2012-10-17""#).unwrap();
        assert_eq!(v, PolicyVersion::V2012_10_17);
        assert!(serde_json::from_str::<PolicyVersion>(r#""1999-01-01""#).is_err());
        assert_eq!(serde_json::to_string(&v).unwrap(), r#""2012-10-17""#);
    }

    #[test_log::test]
    fn test_builder_defaults() {
        let policy = Policy::builder().build().unwrap();
        assert!(policy.statement().is_empty());
        assert!(policy.id().is_none());
    }
}
