use {
    crate::{
        service::{ActionMeta, ArnConvention, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "es",
    name: "Amazon Elasticsearch Service",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonelasticsearchservice.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AcceptInboundCrossClusterSearchConnection",
            description: "Allows the destination domain owner to accept an inbound cross-cluster search connection request",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-acceptinboundcrossclustersearchconnection",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "AddTags",
            description: "Grants permission to attach resource tags to an Amazon ES domain.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-addtags",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateElasticsearchDomain",
            description: "Grants permission to create an Amazon ES domain.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-createelasticsearchdomain",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateElasticsearchServiceRole",
            description: "Grants permission to create the service-linked role required for Amazon ES domains that use VPC access.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-createelasticsearchservicerole",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateOutboundCrossClusterSearchConnection",
            description: "Creates a new cross-cluster search connection from a source domain to a destination domain",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-createoutboundcrossclustersearchconnection",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteElasticsearchDomain",
            description: "Grants permission to delete an Amazon ES domain and all of its data.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-deleteelasticsearchdomain",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteElasticsearchServiceRole",
            description: "Grants permission to delete the service-linked role required for Amazon ES domains that use VPC access.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-deleteelasticsearchservicerole",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteInboundCrossClusterSearchConnection",
            description: "Allows the destination domain owner to delete an existing inbound cross-cluster search connection",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-deleteinboundcrossclustersearchconnection",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteOutboundCrossClusterSearchConnection",
            description: "Allows the source domain owner to delete an existing outbound cross-cluster search connection",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-deleteoutboundcrossclustersearchconnection",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeElasticsearchDomain",
            description: "Grants permission to view a description of the domain configuration for the specified Amazon ES domain, including the domain ID, domain service endpoint, and domain ARN.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeelasticsearchdomain",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeElasticsearchDomainConfig",
            description: "Grants permission to view a description of the configuration options and status of an Amazon ES domain.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeelasticsearchdomainconfig",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeElasticsearchDomains",
            description: "Grants permission to view a description of the domain configuration for up to five specified Amazon ES domains.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeelasticsearchdomain",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeElasticsearchInstanceTypeLimits",
            description: "Grants permission to view the instance count, storage, and master node limits for a given Elasticsearch version and instance type.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeinstancetypelimits",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeInboundCrossClusterSearchConnections",
            description: "Lists all the inbound cross-cluster search connections for a destination domain",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeinboundcrossclustersearchconnections",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeOutboundCrossClusterSearchConnections",
            description: "Lists all the outbound cross-cluster search connections for a source domain",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describeoutboundcrossclustersearchconnections",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeReservedElasticsearchInstanceOfferings",
            description: "Grants permission to fetch reserved instance offerings for ES",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describereservedelasticsearchinstanceofferings",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeReservedElasticsearchInstances",
            description: "Grants permission to fetch ES reserved instances already purchased by customer",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-describereservedelasticsearchinstances",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESCrossClusterGet",
            description: "Grants permission to send cross-cluster requests to a destination domain.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpDelete",
            description: "Grants permission to send HTTP DELETE requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpGet",
            description: "Grants permission to send HTTP GET requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpHead",
            description: "Grants permission to send HTTP HEAD requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpPatch",
            description: "Grants permission to send HTTP PATCH requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpPost",
            description: "Grants permission to send HTTP POST requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ESHttpPut",
            description: "Grants permission to send HTTP PUT requests to the Elasticsearch APIs.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html#es-ac-reference",
            resource_types: &[ResourceRef::optional("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCompatibleElasticsearchVersions",
            description: "Grants permission to fetch list of compatible elastic search versions to which Amazon ES domain can be upgraded",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-getcompatibleelasticsearchversions",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetUpgradeHistory",
            description: "Grants permission to fetch upgrade history for given ES domain",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-getupgradehistory",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetUpgradeStatus",
            description: "Grants permission to fetch upgrade status for given ES domain",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-getupgradestatus",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListDomainNames",
            description: "Grants permission to display the names of all Amazon ES domains that the current user owns.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listdomainnames",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListElasticsearchInstanceTypeDetails",
            description: "Grants permission to list all instance types and available features for a given Elasticsearch version.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listelasticsearchinstancetypedetails",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListElasticsearchInstanceTypes",
            description: "Grants permission to list all Elasticsearch instance types that are supported for a given Elasticsearch version.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listelasticsearchinstancetypes",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListElasticsearchVersions",
            description: "Grants permission to list all supported Elasticsearch versions on Amazon ES.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listelasticsearchversions",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTags",
            description: "Grants permission to display all of the tags for an Amazon ES domain.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listtags",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PurchaseReservedElasticsearchInstanceOffering",
            description: "Grants permission to purchase ES reserved instances",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-purchasereservedelasticsearchinstance",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RejectInboundCrossClusterSearchConnection",
            description: "Allows the destination domain owner to reject an inbound cross-cluster search connection request",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-rejectinboundcrossclustersearchconnection",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RemoveTags",
            description: "Grants permission to remove tags from Amazon ES domains.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-listtags",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateElasticsearchDomainConfig",
            description: "Grants permission to modify the configuration of an Amazon ES domain, such as the instance type or number of instances.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-updateelasticsearchdomainconfig",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpgradeElasticsearchDomain",
            description: "Grants permission to initiate upgrade of elastic search domain to given version",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-configuration-api.html#es-configuration-api-actions-upgradeelasticsearchdomain",
            resource_types: &[ResourceRef::required("domain")],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "domain",
            url: "https://docs.aws.amazon.com/elasticsearch-service/latest/developerguide/es-ac.html",
            arn: "arn:${Partition}:es:${Region}:${Account}:domain/${DomainName}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[],
};

service_statement! {
    /// Statement provider for service `es` (Amazon Elasticsearch Service).
    Elasticsearch => TABLE
}

impl Elasticsearch {
    service_actions! {
        /// Allows the destination domain owner to accept an inbound cross-cluster search connection request
        to_accept_inbound_cross_cluster_search_connection => "AcceptInboundCrossClusterSearchConnection";
        /// Grants permission to attach resource tags to an Amazon ES domain.
        to_add_tags => "AddTags";
        /// Grants permission to create an Amazon ES domain.
        to_create_elasticsearch_domain => "CreateElasticsearchDomain";
        /// Grants permission to create the service-linked role required for Amazon ES domains that use VPC access.
        to_create_elasticsearch_service_role => "CreateElasticsearchServiceRole";
        /// Creates a new cross-cluster search connection from a source domain to a destination domain
        to_create_outbound_cross_cluster_search_connection => "CreateOutboundCrossClusterSearchConnection";
        /// Grants permission to delete an Amazon ES domain and all of its data.
        to_delete_elasticsearch_domain => "DeleteElasticsearchDomain";
        /// Grants permission to delete the service-linked role required for Amazon ES domains that use VPC access.
        to_delete_elasticsearch_service_role => "DeleteElasticsearchServiceRole";
        /// Allows the destination domain owner to delete an existing inbound cross-cluster search connection
        to_delete_inbound_cross_cluster_search_connection => "DeleteInboundCrossClusterSearchConnection";
        /// Allows the source domain owner to delete an existing outbound cross-cluster search connection
        to_delete_outbound_cross_cluster_search_connection => "DeleteOutboundCrossClusterSearchConnection";
        /// Grants permission to view a description of the domain configuration for the specified Amazon ES domain,
        /// including the domain ID, domain service endpoint, and domain ARN.
        to_describe_elasticsearch_domain => "DescribeElasticsearchDomain";
        /// Grants permission to view a description of the configuration options and status of an Amazon ES domain.
        to_describe_elasticsearch_domain_config => "DescribeElasticsearchDomainConfig";
        /// Grants permission to view a description of the domain configuration for up to five specified Amazon ES
        /// domains.
        to_describe_elasticsearch_domains => "DescribeElasticsearchDomains";
        /// Grants permission to view the instance count, storage, and master node limits for a given Elasticsearch
        /// version and instance type.
        to_describe_elasticsearch_instance_type_limits => "DescribeElasticsearchInstanceTypeLimits";
        /// Lists all the inbound cross-cluster search connections for a destination domain
        to_describe_inbound_cross_cluster_search_connections => "DescribeInboundCrossClusterSearchConnections";
        /// Lists all the outbound cross-cluster search connections for a source domain
        to_describe_outbound_cross_cluster_search_connections => "DescribeOutboundCrossClusterSearchConnections";
        /// Grants permission to fetch reserved instance offerings for ES
        to_describe_reserved_elasticsearch_instance_offerings => "DescribeReservedElasticsearchInstanceOfferings";
        /// Grants permission to fetch ES reserved instances already purchased by customer
        to_describe_reserved_elasticsearch_instances => "DescribeReservedElasticsearchInstances";
        /// Grants permission to send cross-cluster requests to a destination domain.
        to_es_cross_cluster_get => "ESCrossClusterGet";
        /// Grants permission to send HTTP DELETE requests to the Elasticsearch APIs.
        to_es_http_delete => "ESHttpDelete";
        /// Grants permission to send HTTP GET requests to the Elasticsearch APIs.
        to_es_http_get => "ESHttpGet";
        /// Grants permission to send HTTP HEAD requests to the Elasticsearch APIs.
        to_es_http_head => "ESHttpHead";
        /// Grants permission to send HTTP PATCH requests to the Elasticsearch APIs.
        to_es_http_patch => "ESHttpPatch";
        /// Grants permission to send HTTP POST requests to the Elasticsearch APIs.
        to_es_http_post => "ESHttpPost";
        /// Grants permission to send HTTP PUT requests to the Elasticsearch APIs.
        to_es_http_put => "ESHttpPut";
        /// Grants permission to fetch list of compatible elastic search versions to which Amazon ES domain can be
        /// upgraded
        to_get_compatible_elasticsearch_versions => "GetCompatibleElasticsearchVersions";
        /// Grants permission to fetch upgrade history for given ES domain
        to_get_upgrade_history => "GetUpgradeHistory";
        /// Grants permission to fetch upgrade status for given ES domain
        to_get_upgrade_status => "GetUpgradeStatus";
        /// Grants permission to display the names of all Amazon ES domains that the current user owns.
        to_list_domain_names => "ListDomainNames";
        /// Grants permission to list all instance types and available features for a given Elasticsearch version.
        to_list_elasticsearch_instance_type_details => "ListElasticsearchInstanceTypeDetails";
        /// Grants permission to list all Elasticsearch instance types that are supported for a given Elasticsearch
        /// version.
        to_list_elasticsearch_instance_types => "ListElasticsearchInstanceTypes";
        /// Grants permission to list all supported Elasticsearch versions on Amazon ES.
        to_list_elasticsearch_versions => "ListElasticsearchVersions";
        /// Grants permission to display all of the tags for an Amazon ES domain.
        to_list_tags => "ListTags";
        /// Grants permission to purchase ES reserved instances
        to_purchase_reserved_elasticsearch_instance_offering => "PurchaseReservedElasticsearchInstanceOffering";
        /// Allows the destination domain owner to reject an inbound cross-cluster search connection request
        to_reject_inbound_cross_cluster_search_connection => "RejectInboundCrossClusterSearchConnection";
        /// Grants permission to remove tags from Amazon ES domains.
        to_remove_tags => "RemoveTags";
        /// Grants permission to modify the configuration of an Amazon ES domain, such as the instance type or number of
        /// instances.
        to_update_elasticsearch_domain_config => "UpdateElasticsearchDomainConfig";
        /// Grants permission to initiate upgrade of elastic search domain to given version
        to_upgrade_elasticsearch_domain => "UpgradeElasticsearchDomain";
    }

    service_resources! {
        /// Adds a resource of type `domain` to the statement.
        on_domain => "domain" (domain_name => "DomainName");
    }
}
