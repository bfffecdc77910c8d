use {
    crate::{
        service::{ActionMeta, ArnConvention, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "cloudfront",
    name: "Amazon CloudFront",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazoncloudfront.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "CreateCachePolicy",
            description: "This action adds a new cache policy to CloudFront.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateCachePolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateCloudFrontOriginAccessIdentity",
            description: "This action creates a new CloudFront origin access identity.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateCloudFrontOriginAccessIdentity.html",
            resource_types: &[ResourceRef::required("origin-access-identity")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateDistribution",
            description: "This action creates a new web distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateDistribution.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateDistributionWithTags",
            description: "This action creates a new web distribution with tags.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateDistributionWithTags.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateFieldLevelEncryptionConfig",
            description: "This action creates a new field-level encryption configuration.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateFieldLevelEncryptionConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateFieldLevelEncryptionProfile",
            description: "This action creates a field-level encryption profile.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateFieldLevelEncryptionProfile.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateInvalidation",
            description: "This action creates a new invalidation batch request.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateInvalidation.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateOriginRequestPolicy",
            description: "This action adds a new origin request policy to CloudFront.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateOriginRequestPolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreatePublicKey",
            description: "This action adds a new public key to CloudFront.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreatePublicKey.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateStreamingDistribution",
            description: "This action creates a new RTMP distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateStreamingDistribution.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateStreamingDistributionWithTags",
            description: "This action creates a new RTMP distribution with tags.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_CreateStreamingDistributionWithTags.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteCachePolicy",
            description: "This action deletes a cache policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteCachePolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteCloudFrontOriginAccessIdentity",
            description: "This action deletes a CloudFront origin access identity.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteCloudFrontOriginAccessIdentity.html",
            resource_types: &[ResourceRef::required("origin-access-identity")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteDistribution",
            description: "This action deletes a web distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteDistribution.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteFieldLevelEncryptionConfig",
            description: "This action deletes a field-level encryption configuration.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteFieldLevelEncryptionConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteFieldLevelEncryptionProfile",
            description: "This action deletes a field-level encryption profile.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteFieldLevelEncryptionProfile.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteOriginRequestPolicy",
            description: "This action deletes an origin request policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteOriginRequestPolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeletePublicKey",
            description: "This action deletes a public key from CloudFront.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeletePublicKey.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteStreamingDistribution",
            description: "This action deletes an RTMP distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_DeleteStreamingDistribution.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCachePolicy",
            description: "Get the cache policy",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetCachePolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCachePolicyConfig",
            description: "Get the cache policy configuration",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetCachePolicyConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCloudFrontOriginAccessIdentity",
            description: "Get the information about a CloudFront origin access identity.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetCloudFrontOriginAccessIdentity.html",
            resource_types: &[ResourceRef::required("origin-access-identity")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCloudFrontOriginAccessIdentityConfig",
            description: "Get the configuration information about a Cloudfront origin access identity.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetCloudFrontOriginAccessIdentityConfig.html",
            resource_types: &[ResourceRef::required("origin-access-identity")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetDistribution",
            description: "Get the information about a web distribution.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetDistribution.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetDistributionConfig",
            description: "Get the configuration information about a distribution.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetDistributionConfig.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFieldLevelEncryption",
            description: "Get the field-level encryption configuration information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetFieldLevelEncryption.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFieldLevelEncryptionConfig",
            description: "Get the field-level encryption configuration information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetFieldLevelEncryptionConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFieldLevelEncryptionProfile",
            description: "Get the field-level encryption configuration information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetFieldLevelEncryptionProfile.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFieldLevelEncryptionProfileConfig",
            description: "Get the field-level encryption profile configuration information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetFieldLevelEncryptionProfileConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetInvalidation",
            description: "Get the information about an invalidation.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetInvalidation.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetOriginRequestPolicy",
            description: "Get the origin request policy",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetOriginRequestPolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetOriginRequestPolicyConfig",
            description: "Get the origin request policy configuration",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetOriginRequestPolicyConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetPublicKey",
            description: "Get the public key information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetPublicKey.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetPublicKeyConfig",
            description: "Get the public key configuration information.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetPublicKeyConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetStreamingDistribution",
            description: "Get the information about an RTMP distribution.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetStreamingDistribution.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetStreamingDistributionConfig",
            description: "Get the configuration information about a streaming distribution.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_GetStreamingDistributionConfig.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListCachePolicies",
            description: "List all cache policies that have been created in CloudFront for this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListCachePolicies.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListCloudFrontOriginAccessIdentities",
            description: "List your CloudFront origin access identities.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListCloudFrontOriginAccessIdentities.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListDistributions",
            description: "List the distributions associated with your AWS account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListDistributions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListDistributionsByCachePolicyId",
            description: "List distribution IDs for distributions that have a cache behavior that's associated with the specified cache policy.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListDistributionsByCachePolicyId.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListDistributionsByOriginRequestPolicyId",
            description: "List distribution IDs for distributions that have a cache behavior that's associated with the specified origin request policy.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListDistributionsByOriginRequestPolicyId.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListDistributionsByWebACLId",
            description: "List the distributions associated with your AWS account with given AWS WAF web ACL.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListDistributionsByWebACLId.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListFieldLevelEncryptionConfigs",
            description: "List all field-level encryption configurations that have been created in CloudFront for this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListFieldLevelEncryptionConfigs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListFieldLevelEncryptionProfiles",
            description: "List all field-level encryption profiles that have been created in CloudFront for this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListFieldLevelEncryptionProfiles.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListInvalidations",
            description: "List your invalidation batches.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListInvalidations.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListOriginRequestPolicies",
            description: "List all origin request policies that have been created in CloudFront for this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListOriginRequestPolicies.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListPublicKeys",
            description: "List all public keys that have been added to CloudFront for this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListPublicKeys.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListStreamingDistributions",
            description: "List your RTMP distributions.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListStreamingDistributions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "List tags for a CloudFront resource.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_ListTagsForResource.html",
            resource_types: &[ResourceRef::optional("distribution"), ResourceRef::optional("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Add tags to a CloudFront resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_TagResource.html",
            resource_types: &[ResourceRef::optional("distribution"), ResourceRef::optional("streaming-distribution")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Remove tags from a CloudFront resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UntagResource.html",
            resource_types: &[ResourceRef::optional("distribution"), ResourceRef::optional("streaming-distribution")],
            condition_keys: &["aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateCachePolicy",
            description: "This action updates a cache policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateCachePolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateCloudFrontOriginAccessIdentity",
            description: "This action sets the configuration for a CloudFront origin access identity.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateCloudFrontOriginAccessIdentity.html",
            resource_types: &[ResourceRef::required("origin-access-identity")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateDistribution",
            description: "This action updates the configuration for a web distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateDistribution.html",
            resource_types: &[ResourceRef::required("distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateFieldLevelEncryptionConfig",
            description: "This action updates a field-level encryption configuration.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateFieldLevelEncryptionConfig.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateFieldLevelEncryptionProfile",
            description: "This action updates a field-level encryption profile.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateFieldLevelEncryptionProfile.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateOriginRequestPolicy",
            description: "This action updates an origin request policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateOriginRequestPolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdatePublicKey",
            description: "This action updates public key information.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdatePublicKey.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateStreamingDistribution",
            description: "This action updates the configuration for an RTMP distribution.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cloudfront/latest/APIReference/API_UpdateStreamingDistribution.html",
            resource_types: &[ResourceRef::required("streaming-distribution")],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "distribution",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/distribution-working-with.html",
            arn: "arn:${Partition}:cloudfront::${Account}:distribution/${DistributionId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "streaming-distribution",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/distribution-working-with.html",
            arn: "arn:${Partition}:cloudfront::${Account}:streaming-distribution/${DistributionId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "origin-access-identity",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/private-content-restricting-access-to-s3.html#private-content-restricting-access-to-s3-overview",
            arn: "arn:${Partition}:cloudfront::${Account}:origin-access-identity/${Id}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "field-level-encryption",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/field-level-encryption.html",
            arn: "arn:${Partition}:cloudfront::${Account}:field-level-encryption/${Id}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "field-level-encryption-profile",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/field-level-encryption.html",
            arn: "arn:${Partition}:cloudfront::${Account}:field-level-encryption-profile/${Id}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "cache-policy",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/working-with-policies.html",
            arn: "arn:${Partition}:cloudfront::${Account}:cache-policy/${Id}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "origin-request-policy",
            url: "https://docs.aws.amazon.com/AmazonCloudFront/latest/DeveloperGuide/working-with-policies.html",
            arn: "arn:${Partition}:cloudfront::${Account}:origin-request-policy/${Id}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[],
};

service_statement! {
    /// Statement provider for service `cloudfront` (Amazon CloudFront).
    CloudFront => TABLE
}

impl CloudFront {
    service_actions! {
        /// This action adds a new cache policy to CloudFront.
        to_create_cache_policy => "CreateCachePolicy";
        /// This action creates a new CloudFront origin access identity.
        to_create_cloud_front_origin_access_identity => "CreateCloudFrontOriginAccessIdentity";
        /// This action creates a new web distribution.
        to_create_distribution => "CreateDistribution";
        /// This action creates a new web distribution with tags.
        to_create_distribution_with_tags => "CreateDistributionWithTags";
        /// This action creates a new field-level encryption configuration.
        to_create_field_level_encryption_config => "CreateFieldLevelEncryptionConfig";
        /// This action creates a field-level encryption profile.
        to_create_field_level_encryption_profile => "CreateFieldLevelEncryptionProfile";
        /// This action creates a new invalidation batch request.
        to_create_invalidation => "CreateInvalidation";
        /// This action adds a new origin request policy to CloudFront.
        to_create_origin_request_policy => "CreateOriginRequestPolicy";
        /// This action adds a new public key to CloudFront.
        to_create_public_key => "CreatePublicKey";
        /// This action creates a new RTMP distribution.
        to_create_streaming_distribution => "CreateStreamingDistribution";
        /// This action creates a new RTMP distribution with tags.
        to_create_streaming_distribution_with_tags => "CreateStreamingDistributionWithTags";
        /// This action deletes a cache policy.
        to_delete_cache_policy => "DeleteCachePolicy";
        /// This action deletes a CloudFront origin access identity.
        to_delete_cloud_front_origin_access_identity => "DeleteCloudFrontOriginAccessIdentity";
        /// This action deletes a web distribution.
        to_delete_distribution => "DeleteDistribution";
        /// This action deletes a field-level encryption configuration.
        to_delete_field_level_encryption_config => "DeleteFieldLevelEncryptionConfig";
        /// This action deletes a field-level encryption profile.
        to_delete_field_level_encryption_profile => "DeleteFieldLevelEncryptionProfile";
        /// This action deletes an origin request policy.
        to_delete_origin_request_policy => "DeleteOriginRequestPolicy";
        /// This action deletes a public key from CloudFront.
        to_delete_public_key => "DeletePublicKey";
        /// This action deletes an RTMP distribution.
        to_delete_streaming_distribution => "DeleteStreamingDistribution";
        /// Get the cache policy
        to_get_cache_policy => "GetCachePolicy";
        /// Get the cache policy configuration
        to_get_cache_policy_config => "GetCachePolicyConfig";
        /// Get the information about a CloudFront origin access identity.
        to_get_cloud_front_origin_access_identity => "GetCloudFrontOriginAccessIdentity";
        /// Get the configuration information about a Cloudfront origin access identity.
        to_get_cloud_front_origin_access_identity_config => "GetCloudFrontOriginAccessIdentityConfig";
        /// Get the information about a web distribution.
        to_get_distribution => "GetDistribution";
        /// Get the configuration information about a distribution.
        to_get_distribution_config => "GetDistributionConfig";
        /// Get the field-level encryption configuration information.
        to_get_field_level_encryption => "GetFieldLevelEncryption";
        /// Get the field-level encryption configuration information.
        to_get_field_level_encryption_config => "GetFieldLevelEncryptionConfig";
        /// Get the field-level encryption configuration information.
        to_get_field_level_encryption_profile => "GetFieldLevelEncryptionProfile";
        /// Get the field-level encryption profile configuration information.
        to_get_field_level_encryption_profile_config => "GetFieldLevelEncryptionProfileConfig";
        /// Get the information about an invalidation.
        to_get_invalidation => "GetInvalidation";
        /// Get the origin request policy
        to_get_origin_request_policy => "GetOriginRequestPolicy";
        /// Get the origin request policy configuration
        to_get_origin_request_policy_config => "GetOriginRequestPolicyConfig";
        /// Get the public key information.
        to_get_public_key => "GetPublicKey";
        /// Get the public key configuration information.
        to_get_public_key_config => "GetPublicKeyConfig";
        /// Get the information about an RTMP distribution.
        to_get_streaming_distribution => "GetStreamingDistribution";
        /// Get the configuration information about a streaming distribution.
        to_get_streaming_distribution_config => "GetStreamingDistributionConfig";
        /// List all cache policies that have been created in CloudFront for this account.
        to_list_cache_policies => "ListCachePolicies";
        /// List your CloudFront origin access identities.
        to_list_cloud_front_origin_access_identities => "ListCloudFrontOriginAccessIdentities";
        /// List the distributions associated with your AWS account.
        to_list_distributions => "ListDistributions";
        /// List distribution IDs for distributions that have a cache behavior that's associated with the specified
        /// cache policy.
        to_list_distributions_by_cache_policy_id => "ListDistributionsByCachePolicyId";
        /// List distribution IDs for distributions that have a cache behavior that's associated with the specified
        /// origin request policy.
        to_list_distributions_by_origin_request_policy_id => "ListDistributionsByOriginRequestPolicyId";
        /// List the distributions associated with your AWS account with given AWS WAF web ACL.
        to_list_distributions_by_web_acl_id => "ListDistributionsByWebACLId";
        /// List all field-level encryption configurations that have been created in CloudFront for this account.
        to_list_field_level_encryption_configs => "ListFieldLevelEncryptionConfigs";
        /// List all field-level encryption profiles that have been created in CloudFront for this account.
        to_list_field_level_encryption_profiles => "ListFieldLevelEncryptionProfiles";
        /// List your invalidation batches.
        to_list_invalidations => "ListInvalidations";
        /// List all origin request policies that have been created in CloudFront for this account.
        to_list_origin_request_policies => "ListOriginRequestPolicies";
        /// List all public keys that have been added to CloudFront for this account.
        to_list_public_keys => "ListPublicKeys";
        /// List your RTMP distributions.
        to_list_streaming_distributions => "ListStreamingDistributions";
        /// List tags for a CloudFront resource.
        to_list_tags_for_resource => "ListTagsForResource";
        /// Add tags to a CloudFront resource.
        to_tag_resource => "TagResource";
        /// Remove tags from a CloudFront resource.
        to_untag_resource => "UntagResource";
        /// This action updates a cache policy.
        to_update_cache_policy => "UpdateCachePolicy";
        /// This action sets the configuration for a CloudFront origin access identity.
        to_update_cloud_front_origin_access_identity => "UpdateCloudFrontOriginAccessIdentity";
        /// This action updates the configuration for a web distribution.
        to_update_distribution => "UpdateDistribution";
        /// This action updates a field-level encryption configuration.
        to_update_field_level_encryption_config => "UpdateFieldLevelEncryptionConfig";
        /// This action updates a field-level encryption profile.
        to_update_field_level_encryption_profile => "UpdateFieldLevelEncryptionProfile";
        /// This action updates an origin request policy.
        to_update_origin_request_policy => "UpdateOriginRequestPolicy";
        /// This action updates public key information.
        to_update_public_key => "UpdatePublicKey";
        /// This action updates the configuration for an RTMP distribution.
        to_update_streaming_distribution => "UpdateStreamingDistribution";
    }

    service_resources! {
        /// Adds a resource of type `distribution` to the statement.
        on_distribution => "distribution" (distribution_id => "DistributionId");
        /// Adds a resource of type `streaming-distribution` to the statement.
        on_streaming_distribution => "streaming-distribution" (distribution_id => "DistributionId");
        /// Adds a resource of type `origin-access-identity` to the statement.
        on_origin_access_identity => "origin-access-identity" (id => "Id");
        /// Adds a resource of type `field-level-encryption` to the statement.
        on_field_level_encryption => "field-level-encryption" (id => "Id");
        /// Adds a resource of type `field-level-encryption-profile` to the statement.
        on_field_level_encryption_profile => "field-level-encryption-profile" (id => "Id");
        /// Adds a resource of type `cache-policy` to the statement.
        on_cache_policy => "cache-policy" (id => "Id");
        /// Adds a resource of type `origin-request-policy` to the statement.
        on_origin_request_policy => "origin-request-policy" (id => "Id");
    }
}
