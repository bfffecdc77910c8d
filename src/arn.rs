use {
    lazy_static::lazy_static,
    log::{debug, trace},
    regex::{Captures, Regex},
    std::collections::BTreeMap,
};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([^}]*)\}").unwrap();
}

pub(crate) const PARTITION: &str = "Partition";
pub(crate) const REGION: &str = "Region";
pub(crate) const ACCOUNT: &str = "Account";

/// The values substituted for `${Partition}`, `${Region}` and `${Account}` when the caller does not supply one.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArnDefaults {
    partition: String,
    region: String,
    account: String,
}

impl ArnDefaults {
    pub fn new<P: Into<String>, R: Into<String>, A: Into<String>>(partition: P, region: R, account: A) -> Self {
        Self {
            partition: partition.into(),
            region: region.into(),
            account: account.into(),
        }
    }

    /// `aws` partition, every region, every account.
    pub fn wildcard() -> Self {
        Self::new("aws", "*", "*")
    }

    /// `aws` partition, with region and account left empty.
    pub fn empty() -> Self {
        Self::new("aws", "", "")
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }
}

impl Default for ArnDefaults {
    fn default() -> Self {
        Self::wildcard()
    }
}

/// Placeholder values for rendering an [ArnTemplate].
///
/// An empty string given for the partition, region, or account is treated the same as not giving one at all, so the
/// applicable [ArnDefaults] entry is used instead.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArnValues {
    values: BTreeMap<String, String>,
}

impl ArnValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for the `${name}` placeholder.
    pub fn with<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn partition(self, partition: Option<&str>) -> Self {
        self.with_optional(PARTITION, partition)
    }

    pub fn region(self, region: Option<&str>) -> Self {
        self.with_optional(REGION, region)
    }

    pub fn account(self, account: Option<&str>) -> Self {
        self.with_optional(ACCOUNT, account)
    }

    fn with_optional(mut self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => {
                self.values.insert(name.to_string(), v.to_string());
            }
            _ => {
                self.values.remove(name);
            }
        }
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn resolve<'a>(&'a self, name: &str, defaults: &'a ArnDefaults) -> Option<&'a str> {
        let standard = match name {
            PARTITION => Some(defaults.partition()),
            REGION => Some(defaults.region()),
            ACCOUNT => Some(defaults.account()),
            _ => None,
        };

        match (self.get(name), standard) {
            (Some(v), Some(_)) if !v.is_empty() => Some(v),
            (_, Some(d)) => Some(d),
            (v, None) => v,
        }
    }
}

/// An ARN with `${Name}` placeholders, as listed for each resource type in the service tables.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArnTemplate<'a>(&'a str);

impl<'a> ArnTemplate<'a> {
    #[inline]
    pub fn new(template: &'a str) -> Self {
        Self(template)
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Placeholder names in the order they first appear.
    pub fn placeholders(&self) -> Vec<&'a str> {
        let mut result: Vec<&'a str> = Vec::new();
        for cap in PLACEHOLDER.captures_iter(self.0) {
            if let Some(name) = cap.get(1) {
                if !result.contains(&name.as_str()) {
                    result.push(name.as_str());
                }
            }
        }
        result
    }

    /// Substitutes every placeholder occurrence.
    ///
    /// `Partition`, `Region` and `Account` fall back to `defaults`. Any other placeholder without a value is left in
    /// the output as written.
    pub fn render(&self, values: &ArnValues, defaults: &ArnDefaults) -> String {
        let result = PLACEHOLDER.replace_all(self.0, |cap: &Captures| {
            let name = &cap[1];
            match values.resolve(name, defaults) {
                Some(value) => value.to_string(),
                None => {
                    debug!("No value for placeholder ${{{}}} in ARN template {}", name, self.0);
                    cap[0].to_string()
                }
            }
        });

        trace!("Rendered ARN template {} -> {}", self.0, result);
        result.into_owned()
    }
}

/// Returns true if `arn` still holds a `${Name}` template placeholder.
///
/// IAM policy variables such as `${aws:username}` always contain a colon and are not counted.
pub fn has_unresolved_placeholder(arn: &str) -> bool {
    PLACEHOLDER.captures_iter(arn).any(|cap| !cap[1].contains(':'))
}

#[cfg(test)]
mod tests {
    use {
        super::{has_unresolved_placeholder, ArnDefaults, ArnTemplate, ArnValues},
        pretty_assertions::assert_eq,
    };

    const TEMPLATE: &str = "arn:${Partition}:svc:${Region}:${Account}:resource/${Id}";

    #[test_log::test]
    fn test_default_substitution() {
        let t = ArnTemplate::new(TEMPLATE);
        let v = ArnValues::new().with("Id", "abc");

        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws:svc:*:*:resource/abc");
        assert_eq!(t.render(&v, &ArnDefaults::empty()), "arn:aws:svc:::resource/abc");
        assert_eq!(
            t.render(&v, &ArnDefaults::new("aws-cn", "cn-north-1", "123456789012")),
            "arn:aws-cn:svc:cn-north-1:123456789012:resource/abc"
        );
    }

    #[test_log::test]
    fn test_supplied_values_override_defaults() {
        let t = ArnTemplate::new(TEMPLATE);
        let v = ArnValues::new()
            .with("Id", "abc")
            .account(Some("123456789012"))
            .region(Some("eu-west-1"))
            .partition(Some("aws-us-gov"));
        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws-us-gov:svc:eu-west-1:123456789012:resource/abc");

        // Empty strings fall back to the defaults.
        let v = ArnValues::new().with("Id", "abc").account(Some("")).region(Some("")).partition(Some(""));
        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws:svc:*:*:resource/abc");

        let v = ArnValues::new().with("Id", "abc").with("Account", "");
        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws:svc:*:*:resource/abc");

        // Resource placeholders take their value verbatim, even when empty.
        let v = ArnValues::new().with("Id", "");
        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws:svc:*:*:resource/");
    }

    #[test_log::test]
    fn test_unknown_placeholders_are_literal() {
        let t = ArnTemplate::new("arn:${Partition}:omics:${Region}:${Account}:tag/${TagKey}");
        assert_eq!(t.render(&ArnValues::new(), &ArnDefaults::wildcard()), "arn:aws:omics:*:*:tag/${TagKey}");

        let t = ArnTemplate::new("arn:${Partition}:svc:::thing/${Unterminated");
        assert_eq!(t.render(&ArnValues::new(), &ArnDefaults::wildcard()), "arn:aws:svc:::thing/${Unterminated");
    }

    #[test_log::test]
    fn test_repeated_placeholders() {
        let t = ArnTemplate::new("arn:${Partition}:svc:${Region}:${Account}:${Name}/sub/${Name}");
        assert_eq!(t.placeholders(), vec!["Partition", "Region", "Account", "Name"]);
        let v = ArnValues::new().with("Name", "x");
        assert_eq!(t.render(&v, &ArnDefaults::wildcard()), "arn:aws:svc:*:*:x/sub/x");
    }

    #[test_log::test]
    fn test_determinism() {
        let t = ArnTemplate::new(TEMPLATE);
        let v = ArnValues::new().with("Id", "abc").region(Some("us-east-2"));
        let d = ArnDefaults::default();
        let first = t.render(&v, &d);
        for _ in 0..10 {
            assert_eq!(t.render(&v, &d), first);
        }
        assert_eq!(t.as_str(), TEMPLATE);
    }

    #[test_log::test]
    fn test_unresolved_detection() {
        assert!(has_unresolved_placeholder("arn:aws:omics:*:*:tag/${TagKey}"));
        assert!(!has_unresolved_placeholder("arn:aws:s3:::bucket/${aws:username}/*"));
        assert!(!has_unresolved_placeholder("arn:aws:s3:::bucket/*"));
    }
}
