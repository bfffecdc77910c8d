//! Statement types for individual AWS services.
//!
//! Each module holds the service's [ServiceTable] and a statement type with one method per action, one `on_*`
//! method per resource type, and one `if_*` method per service condition key.

use {crate::service::ServiceTable, lazy_static::lazy_static, std::collections::HashMap};

pub mod cleanroomsml;
pub mod cloudfront;
pub mod connect;
pub mod directoryservice;
pub mod dynamodb;
pub mod ecs;
pub mod elasticsearch;
pub mod firewallmanager;
pub mod lambda;
pub mod omics;

pub use {
    cleanroomsml::CleanRoomsMl, cloudfront::CloudFront, connect::Connect, directoryservice::DirectoryService,
    dynamodb::DynamoDb, ecs::Ecs, elasticsearch::Elasticsearch, firewallmanager::FirewallManager, lambda::Lambda,
    omics::Omics,
};

static ALL: &[&ServiceTable] = &[
    &cleanroomsml::TABLE,
    &cloudfront::TABLE,
    &connect::TABLE,
    &directoryservice::TABLE,
    &dynamodb::TABLE,
    &ecs::TABLE,
    &elasticsearch::TABLE,
    &firewallmanager::TABLE,
    &lambda::TABLE,
    &omics::TABLE,
];

lazy_static! {
    static ref BY_PREFIX: HashMap<&'static str, &'static ServiceTable> = ALL.iter().map(|t| (t.prefix, *t)).collect();
}

/// Every service table in the catalog.
#[inline]
pub fn all() -> &'static [&'static ServiceTable] {
    ALL
}

/// Finds a service table by its action prefix, e.g. `ds` for AWS Directory Service.
pub fn lookup(prefix: &str) -> Option<&'static ServiceTable> {
    BY_PREFIX.get(prefix).copied()
}

#[cfg(test)]
mod tests {
    use {
        super::{all, lookup, CleanRoomsMl, Connect, DirectoryService, Ecs, Lambda, Omics},
        crate::{service::ArnConvention, Statement},
        pretty_assertions::assert_eq,
        std::collections::HashSet,
    };

    #[test_log::test]
    fn test_registry() {
        assert_eq!(all().len(), 10);
        let prefixes: HashSet<_> = all().iter().map(|t| t.prefix).collect();
        assert_eq!(prefixes.len(), 10);

        assert_eq!(lookup("ds").unwrap().name, DirectoryService::table().name);
        assert_eq!(lookup("cleanrooms-ml").unwrap().arn_convention, ArnConvention::Instance);
        assert_eq!(lookup("ecs").unwrap().arn_convention, ArnConvention::Empty);
        assert_eq!(lookup("lambda").unwrap().arn_convention, ArnConvention::Wildcard);
        assert!(lookup("s3").is_none());
    }

    #[test_log::test]
    fn test_prefixes_match_types() {
        assert_eq!(Lambda::table().prefix, "lambda");
        assert_eq!(Ecs::table().prefix, "ecs");
        assert_eq!(CleanRoomsMl::table().prefix, "cleanrooms-ml");
        assert_eq!(Omics::table().prefix, "omics");

        let mut s = Connect::new();
        s.all_actions();
        assert_eq!(s.statement().actions(), &["connect:*".to_string()]);
    }

    #[test_log::test]
    fn test_dependent_actions_are_qualified() {
        for table in all() {
            for action in table.actions {
                for dep in action.dependent_actions {
                    assert!(dep.contains(':'), "{}:{} depends on {}", table.prefix, action.name, dep);
                }
            }
        }
    }
}
