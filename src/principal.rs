use {
    crate::{display_json, serutil::StringList},
    derive_builder::Builder,
    serde::{ser::Serializer, Serialize},
};

/// The `Principal` (or `NotPrincipal`) element of a resource-based policy statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Principal {
    /// `"*"`: everyone, including anonymous callers.
    Any,
    Specified(SpecifiedPrincipal),
}

impl From<SpecifiedPrincipal> for Principal {
    fn from(sp: SpecifiedPrincipal) -> Self {
        Self::Specified(sp)
    }
}

impl Serialize for Principal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Specified(specified) => specified.serialize(serializer),
        }
    }
}

display_json!(Principal);

#[derive(Builder, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SpecifiedPrincipal {
    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "AWS", skip_serializing_if = "Option::is_none")]
    aws: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "CanonicalUser", skip_serializing_if = "Option::is_none")]
    canonical_user: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Federated", skip_serializing_if = "Option::is_none")]
    federated: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    service: Option<StringList>,
}

display_json!(SpecifiedPrincipal);

fn add_to(field: &mut Option<StringList>, value: String) {
    match field {
        Some(list) => list.push(value),
        None => *field = Some(StringList::Single(value)),
    }
}

impl SpecifiedPrincipal {
    #[inline]
    pub fn builder() -> SpecifiedPrincipalBuilder {
        SpecifiedPrincipalBuilder::default()
    }

    #[inline]
    pub fn aws(&self) -> Option<&StringList> {
        self.aws.as_ref()
    }

    #[inline]
    pub fn canonical_user(&self) -> Option<&StringList> {
        self.canonical_user.as_ref()
    }

    #[inline]
    pub fn federated(&self) -> Option<&StringList> {
        self.federated.as_ref()
    }

    #[inline]
    pub fn service(&self) -> Option<&StringList> {
        self.service.as_ref()
    }

    pub fn add_aws<S: Into<String>>(&mut self, value: S) {
        add_to(&mut self.aws, value.into());
    }

    pub fn add_canonical_user<S: Into<String>>(&mut self, value: S) {
        add_to(&mut self.canonical_user, value.into());
    }

    pub fn add_federated<S: Into<String>>(&mut self, value: S) {
        add_to(&mut self.federated, value.into());
    }

    pub fn add_service<S: Into<String>>(&mut self, value: S) {
        add_to(&mut self.service, value.into());
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Principal, SpecifiedPrincipal},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_formatting() {
        let p1 = Principal::Any;
        let p2 = Principal::Specified(
            SpecifiedPrincipal::builder()
                .aws(vec!["123456789012".to_string(), "arn:aws:iam::123456789012:role/test".to_string()])
                .build()
                .unwrap(),
        );

        assert_eq!(format!("{}", p1), r#""*""#);
        assert_eq!(
            format!("{}", p2),
            indoc! { r#"
            {
                "AWS": [
                    "123456789012",
                    "arn:aws:iam::123456789012:role/test"
                ]
            }"#}
        )
    }

    #[test_log::test]
    fn test_add() {
        let mut sp = SpecifiedPrincipal::default();
        sp.add_service("lambda.amazonaws.com");
        sp.add_service("lambda.amazonaws.com");
        sp.add_federated("cognito-identity.amazonaws.com");
        sp.add_service("edgelambda.amazonaws.com");

        assert_eq!(sp.service().unwrap().len(), 2);
        assert_eq!(sp.federated().unwrap().len(), 1);
        assert!(sp.aws().is_none());
        assert!(sp.canonical_user().is_none());
        assert_eq!(
            sp.to_string(),
            indoc! { r#"
            {
                "Federated": "cognito-identity.amazonaws.com",
                "Service": [
                    "lambda.amazonaws.com",
                    "edgelambda.amazonaws.com"
                ]
            }"#}
        );
    }
}
