//! Static IAM metadata describing a single AWS service, and the macros that turn a table into a statement type.

#[macro_use]
mod macros;

use crate::{AccessLevel, ArnDefaults, ArnTemplate, ConditionOp};

/// How a service's resource methods fill in `${Partition}`, `${Region}` and `${Account}` when the caller leaves
/// them out.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArnConvention {
    /// `*` for region and account.
    Wildcard,

    /// Empty strings for region and account.
    Empty,

    /// The partition, region and account configured on the statement through
    /// [StatementProps][crate::StatementProps].
    Instance,
}

impl ArnConvention {
    pub fn defaults(&self, configured: &ArnDefaults) -> ArnDefaults {
        match self {
            Self::Wildcard => ArnDefaults::wildcard(),
            Self::Empty => ArnDefaults::empty(),
            Self::Instance => configured.clone(),
        }
    }
}

/// The value type AWS documents for a condition key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionType {
    Arn,
    Binary,
    Bool,
    Date,
    IpAddress,
    Numeric,
    String,
}

impl ConditionType {
    /// Whether `op` can compare a key of this type. `Null` applies to every key, and ARN keys also take the string
    /// operators.
    pub fn accepts(&self, op: ConditionOp) -> bool {
        if op == ConditionOp::Null {
            return true;
        }

        let name = op.as_str();
        match self {
            Self::Arn => name.starts_with("Arn") || name.starts_with("String"),
            Self::Binary => name.starts_with("Binary"),
            Self::Bool => name.starts_with("Bool"),
            Self::Date => name.starts_with("Date"),
            Self::IpAddress => name.starts_with("IpAddress") || name.starts_with("NotIpAddress"),
            Self::Numeric => name.starts_with("Numeric"),
            Self::String => name.starts_with("String"),
        }
    }
}

/// A resource type an action applies to. Required resource types must be named in the statement for the action to
/// be allowed on that resource.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceRef {
    pub name: &'static str,
    pub required: bool,
}

impl ResourceRef {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ActionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub access_level: AccessLevel,
    pub url: &'static str,
    pub resource_types: &'static [ResourceRef],
    pub condition_keys: &'static [&'static str],
    pub dependent_actions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceTypeMeta {
    pub name: &'static str,
    pub url: &'static str,
    pub arn: &'static str,
    pub condition_keys: &'static [&'static str],
}

impl ResourceTypeMeta {
    #[inline]
    pub fn template(&self) -> ArnTemplate<'static> {
        ArnTemplate::new(self.arn)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConditionKeyMeta {
    /// The key as documented. Tag-keyed entries keep their `${TagKey}` placeholder.
    pub key: &'static str,
    pub description: &'static str,
    pub value_type: ConditionType,
    pub default_operator: ConditionOp,
}

/// Everything IAM documents about one service: its actions, resource types, and service-specific condition keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ServiceTable {
    /// The action prefix, e.g. `lambda`.
    pub prefix: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub arn_convention: ArnConvention,
    pub actions: &'static [ActionMeta],
    pub resource_types: &'static [ResourceTypeMeta],
    pub condition_keys: &'static [ConditionKeyMeta],
}

impl ServiceTable {
    pub fn action(&self, name: &str) -> Option<&'static ActionMeta> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTypeMeta> {
        self.resource_types.iter().find(|r| r.name == name)
    }

    /// Looks up a condition key. A concrete tag key such as `ecs:ResourceTag/team` resolves to the documented
    /// `ecs:ResourceTag/${TagKey}` entry.
    pub fn condition_key(&self, key: &str) -> Option<&'static ConditionKeyMeta> {
        self.condition_keys.iter().find(|c| c.key == key).or_else(|| {
            let (base, _) = key.split_once('/')?;
            self.condition_keys.iter().find(|c| c.key.split_once('/').map(|(b, _)| b) == Some(base))
        })
    }

    pub fn actions_with_access_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static ActionMeta> {
        self.actions.iter().filter(move |a| a.access_level == level)
    }

    /// The fully qualified identifier (`prefix:Name`) for an action name.
    pub fn action_id(&self, name: &str) -> String {
        format!("{}:{}", self.prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ArnConvention, ConditionType, ServiceTable},
        crate::{services, AccessLevel, ArnDefaults, ConditionOp},
        pretty_assertions::assert_eq,
    };

    fn ecs() -> &'static ServiceTable {
        services::lookup("ecs").unwrap()
    }

    #[test_log::test]
    fn test_lookups() {
        let t = ecs();
        assert_eq!(t.action("CreateCluster").unwrap().access_level, AccessLevel::Write);
        assert!(t.action("Fly").is_none());
        assert_eq!(t.resource_type("cluster").unwrap().template().placeholders().last(), Some(&"ClusterName"));
        assert!(t.resource_type("spaceship").is_none());
        assert_eq!(t.action_id("ListClusters"), "ecs:ListClusters");
    }

    #[test_log::test]
    fn test_condition_key_lookup() {
        let t = ecs();
        assert_eq!(t.condition_key("ecs:cluster").unwrap().default_operator, ConditionOp::ArnEquals);
        assert_eq!(t.condition_key("ecs:ResourceTag/team").unwrap().key, "ecs:ResourceTag/${TagKey}");
        assert!(t.condition_key("ecs:nothing").is_none());
        assert!(t.condition_key("ecs:nothing/else").is_none());
    }

    #[test_log::test]
    fn test_access_levels() {
        let t = ecs();
        assert!(t.actions_with_access_level(AccessLevel::List).all(|a| a.access_level == AccessLevel::List));
        assert!(t.actions_with_access_level(AccessLevel::List).any(|a| a.name == "ListClusters"));
    }

    #[test_log::test]
    fn test_convention_defaults() {
        let configured = ArnDefaults::new("aws-cn", "cn-north-1", "123456789012");
        assert_eq!(ArnConvention::Wildcard.defaults(&configured), ArnDefaults::wildcard());
        assert_eq!(ArnConvention::Empty.defaults(&configured), ArnDefaults::empty());
        assert_eq!(ArnConvention::Instance.defaults(&configured), configured);
    }

    #[test_log::test]
    fn test_tables_are_consistent() {
        for table in services::all() {
            for action in table.actions {
                for r in action.resource_types {
                    assert!(
                        table.resource_type(r.name).is_some(),
                        "{}:{} names unknown resource type {}",
                        table.prefix,
                        action.name,
                        r.name
                    );
                }
            }

            for rt in table.resource_types {
                assert!(rt.arn.starts_with("arn:${Partition}:"), "{} {}", table.prefix, rt.arn);
            }

            for key in table.condition_keys {
                assert!(key.value_type.accepts(key.default_operator), "{} {}", key.key, key.default_operator);
            }
        }
    }

    #[test_log::test]
    fn test_value_type_operators() {
        assert!(ConditionType::String.accepts(ConditionOp::StringNotEqualsIgnoreCaseIfExists));
        assert!(!ConditionType::String.accepts(ConditionOp::ArnLike));
        assert!(ConditionType::Arn.accepts(ConditionOp::ArnNotLike));
        assert!(ConditionType::Arn.accepts(ConditionOp::StringLike));
        assert!(ConditionType::Bool.accepts(ConditionOp::BoolIfExists));
        assert!(!ConditionType::Bool.accepts(ConditionOp::StringEquals));
        assert!(ConditionType::IpAddress.accepts(ConditionOp::NotIpAddress));
        assert!(!ConditionType::Numeric.accepts(ConditionOp::DateLessThan));
        assert!(ConditionType::Date.accepts(ConditionOp::DateGreaterThanEquals));
        assert!(ConditionType::Binary.accepts(ConditionOp::BinaryEquals));
        assert!(ConditionType::Numeric.accepts(ConditionOp::Null));
    }
}
