use {
    crate::{
        service::{ActionMeta, ArnConvention, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "connect",
    name: "Amazon Connect",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonconnect.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AssociateRoutingProfileQueues",
            description: "Grants permissions to associate queues with a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_AssociateRoutingProfileQueues.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateContactFlow",
            description: "Grants permissions to create a contact flow in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_CreateContactFlow.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateInstance",
            description: "Grants permissions to create a new Amazon Connect instance. The associated required actions grant permissions to configure instance settings.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[
                "ds:CreateAlias",
                "ds:DeleteDirectory",
                "ds:DescribeDirectories",
                "firehose:DescribeDeliveryStream",
                "firehose:ListDeliveryStreams",
                "iam:CreateServiceLinkedRole",
                "kinesis:DescribeStream",
                "kinesis:ListStreams",
                "kms:CreateGrant",
                "kms:DescribeKey",
                "kms:ListAliases",
                "kms:RetireGrant",
                "s3:CreateBucket",
                "s3:GetBucketLocation",
                "s3:ListAllMyBuckets",
            ],
        },
        ActionMeta {
            name: "CreateRoutingProfile",
            description: "Grants permission to create a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_CreateRoutingProfile.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateUser",
            description: "Grants permission to create a user for the specified Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_CreateUser.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteUser",
            description: "Grants permissions to delete a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DeleteUser.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeContactFlow",
            description: "Grants permissions to describe a contact flow in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DescribeContactFlow.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeInstance",
            description: "Grants permissions to view details of an Amazon Connect instance. This is required to create an instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[
                "firehose:DescribeDeliveryStream",
                "firehose:ListDeliveryStreams",
                "kinesis:DescribeStream",
                "kinesis:ListStreams",
                "kms:DescribeKey",
                "kms:ListAliases",
                "s3:ListAllMyBuckets",
            ],
        },
        ActionMeta {
            name: "DescribeRoutingProfile",
            description: "Grants permissions to describe a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DescribeRoutingProfile.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeUser",
            description: "Grants permissions to describe a user in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DescribeUser.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeUserHierarchyGroup",
            description: "Grants permissions to describe a hierarchy group for an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DescribeUserHierarchyGroup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeUserHierarchyStructure",
            description: "Grants permissions to describe the hierarchy structure for an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DescribeUserHierarchyStructure.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DestroyInstance",
            description: "Grants permissions to delete an Amazon Connect instance. When you remove an instance, the link to an existing AWS directory is also removed.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisassociateRoutingProfileQueues",
            description: "Grants permissions to disassociate queues from a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_DisassociateRoutingProfileQueues.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetContactAttributes",
            description: "Grants permissions to retrieve the contact attributes for the specified contact.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_GetContactAttributes.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetCurrentMetricData",
            description: "Grants permissions to retrieve current metric data for the queues in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_GetCurrentMetricData.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFederationToken",
            description: "Allows federation into an instance when using SAML-based authentication for identity management.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_GetFederationToken.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFederationTokens",
            description: "Grants permissions to federate in to an Amazon Connect instance (Log in as administrator functionality in the AWS console).",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &["connect:DescribeInstance", "connect:ListInstances", "ds:DescribeDirectories"],
        },
        ActionMeta {
            name: "GetMetricData",
            description: "Grants permissions to retrieve historical metric data for queues in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_GetMetricData.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListContactFlows",
            description: "Grants permissions to list contact flow resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListContactFlows.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListHoursOfOperations",
            description: "Grants permissions to list hours of operation resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListHoursOfOperations.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListInstances",
            description: "Grants permissions to view the Amazon Connect instances associated with an AWS account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListPhoneNumbers",
            description: "Grants permissions to list phone number resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListPhoneNumbers.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListPrompts",
            description: "Grants permissions to list prompt resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListPrompts.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListQueues",
            description: "Grants permissions to list queue resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListQueues.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListRoutingProfileQueues",
            description: "Grants permissions to list queue resources in a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListRoutingProfileQueues.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListRoutingProfiles",
            description: "Grants permissions to list routing profile resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListRoutingProfiles.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListSecurityProfiles",
            description: "Grants permissions to list security profile resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListSecurityProfiles.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "Grants permissions to list tags for an Amazon Connect resource.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListTagsForResource.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListUserHierarchyGroups",
            description: "Grants permissions to list the hierarchy group resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListUserHierarchyGroups.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListUsers",
            description: "Grants permissions to list user resources in an Amazon Connect instance.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ListUsers.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ModifyInstance",
            description: "Grants permissions to modify configuration settings for an existing Amazon Connect instance. The associated required actions grant permission modify the settings for the instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/amazon-connect-instances.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[
                "firehose:DescribeDeliveryStream",
                "firehose:ListDeliveryStreams",
                "kinesis:DescribeStream",
                "kinesis:ListStreams",
                "kms:CreateGrant",
                "kms:DescribeKey",
                "kms:ListAliases",
                "kms:RetireGrant",
                "s3:CreateBucket",
                "s3:GetBucketLocation",
                "s3:ListAllMyBuckets",
            ],
        },
        ActionMeta {
            name: "ResumeContactRecording",
            description: "Grants permissions to resume recording for the specified contact.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_ResumeContactRecording.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartChatContact",
            description: "Grants permissions to initiate a chat using the Amazon Connect API.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_StartChatContact.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartContactRecording",
            description: "Grants permissions to start recording for the specified contact.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_StartContactRecording.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartOutboundVoiceContact",
            description: "Grants permissions to initiate outbound calls using the Amazon Connect API.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_StartOutboundVoiceContact.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StopContact",
            description: "Grants permissions to stop contacts that were initiated using the Amazon Connect API. If you use this operation on an active contact the contact ends, even if the agent is active on a call with a customer.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_StopContact.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StopContactRecording",
            description: "Grants permissions to stop recording for the specified contact.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_StopContactRecording.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "SuspendContactRecording",
            description: "Grants permissions to suspend recording for the specified contact.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_SuspendContactRecording.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Grants permissions to tag an Amazon Connect resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_TagResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys", "aws:RequestTag/${TagKey}", "aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Grants permissions to untag an Amazon Connect resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UntagResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContactAttributes",
            description: "Grants permissions to create or update the contact attributes associated with the specified contact.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateContactAttributes.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContactFlowContent",
            description: "Grants permissions to update contact flow content in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateContactFlowContent.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContactFlowName",
            description: "Grants permissions to update the name and description of a contact flow in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateContactFlowName.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRoutingProfileConcurrency",
            description: "Grants permissions to update the concurrency in a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateRoutingProfileConcurrency.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRoutingProfileDefaultOutboundQueue",
            description: "Grants permissions to update the outbound queue in a routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateRoutingProfileDefaultOutboundQueue.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRoutingProfileName",
            description: "Grants permissions to update a routing profile name and description in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateRoutingProfileName.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRoutingProfileQueues",
            description: "Grants permissions to update the queues in routing profile in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateRoutingProfileQueues.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateUserHierarchy",
            description: "Grants permissions to update a hierarchy group for a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateUserHierarchy.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateUserIdentityInfo",
            description: "Grants permissions to update identity information for a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateUserIdentityInfo.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateUserPhoneConfig",
            description: "Grants permissions to update phone configuration settings for a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateUserPhoneConfig.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateUserRoutingProfile",
            description: "Grants permissions to update a routing profile for a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateUserRoutingProfile.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateUserSecurityProfiles",
            description: "Grants permissions to update security profiles for a user in an Amazon Connect instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/connect/latest/APIReference/API_UpdateUserSecurityProfiles.html",
            resource_types: &[],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "instance",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/amazon-connect-instances.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "contact",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/connect-contact-attributes.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/contact/${ContactId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "user",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/connect-agents.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/agent/${UserId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "routing-profile",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/routing-profiles.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/routing-profile/${RoutingProfileId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "security-profile",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/connect-security-profiles.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/security-profile/${SecurityProfileId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "hierarchy-group",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/agent-hierarchy.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/agent-group/${HierarchyGroupId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "queue",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/create-queue.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/queue/${QueueId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "contact-flow",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/connect-contact-flows.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/contact-flow/${ContactFlowId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "hours-of-operation",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/set-hours-operation.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/operating-hours/${HoursOfOperationId}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "phone-number",
            url: "https://docs.aws.amazon.com/connect/latest/adminguide/contact-center-phone-number.html",
            arn: "arn:${Partition}:connect:${Region}:${Account}:instance/${InstanceId}/phone-numbers/${PhoneNumberId}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[],
};

service_statement! {
    /// Statement provider for service `connect` (Amazon Connect).
    Connect => TABLE
}

impl Connect {
    service_actions! {
        /// Grants permissions to associate queues with a routing profile in an Amazon Connect instance.
        to_associate_routing_profile_queues => "AssociateRoutingProfileQueues";
        /// Grants permissions to create a contact flow in an Amazon Connect instance.
        to_create_contact_flow => "CreateContactFlow";
        /// Grants permissions to create a new Amazon Connect instance. The associated required actions grant
        /// permissions to configure instance settings.
        to_create_instance => "CreateInstance";
        /// Grants permission to create a routing profile in an Amazon Connect instance.
        to_create_routing_profile => "CreateRoutingProfile";
        /// Grants permission to create a user for the specified Amazon Connect instance.
        to_create_user => "CreateUser";
        /// Grants permissions to delete a user in an Amazon Connect instance.
        to_delete_user => "DeleteUser";
        /// Grants permissions to describe a contact flow in an Amazon Connect instance.
        to_describe_contact_flow => "DescribeContactFlow";
        /// Grants permissions to view details of an Amazon Connect instance. This is required to create an instance.
        to_describe_instance => "DescribeInstance";
        /// Grants permissions to describe a routing profile in an Amazon Connect instance.
        to_describe_routing_profile => "DescribeRoutingProfile";
        /// Grants permissions to describe a user in an Amazon Connect instance.
        to_describe_user => "DescribeUser";
        /// Grants permissions to describe a hierarchy group for an Amazon Connect instance.
        to_describe_user_hierarchy_group => "DescribeUserHierarchyGroup";
        /// Grants permissions to describe the hierarchy structure for an Amazon Connect instance.
        to_describe_user_hierarchy_structure => "DescribeUserHierarchyStructure";
        /// Grants permissions to delete an Amazon Connect instance. When you remove an instance, the link to an
        /// existing AWS directory is also removed.
        to_destroy_instance => "DestroyInstance";
        /// Grants permissions to disassociate queues from a routing profile in an Amazon Connect instance.
        to_disassociate_routing_profile_queues => "DisassociateRoutingProfileQueues";
        /// Grants permissions to retrieve the contact attributes for the specified contact.
        to_get_contact_attributes => "GetContactAttributes";
        /// Grants permissions to retrieve current metric data for the queues in an Amazon Connect instance.
        to_get_current_metric_data => "GetCurrentMetricData";
        /// Allows federation into an instance when using SAML-based authentication for identity management.
        to_get_federation_token => "GetFederationToken";
        /// Grants permissions to federate in to an Amazon Connect instance (Log in as administrator functionality in
        /// the AWS console).
        to_get_federation_tokens => "GetFederationTokens";
        /// Grants permissions to retrieve historical metric data for queues in an Amazon Connect instance.
        to_get_metric_data => "GetMetricData";
        /// Grants permissions to list contact flow resources in an Amazon Connect instance.
        to_list_contact_flows => "ListContactFlows";
        /// Grants permissions to list hours of operation resources in an Amazon Connect instance.
        to_list_hours_of_operations => "ListHoursOfOperations";
        /// Grants permissions to view the Amazon Connect instances associated with an AWS account.
        to_list_instances => "ListInstances";
        /// Grants permissions to list phone number resources in an Amazon Connect instance.
        to_list_phone_numbers => "ListPhoneNumbers";
        /// Grants permissions to list prompt resources in an Amazon Connect instance.
        to_list_prompts => "ListPrompts";
        /// Grants permissions to list queue resources in an Amazon Connect instance.
        to_list_queues => "ListQueues";
        /// Grants permissions to list queue resources in a routing profile in an Amazon Connect instance.
        to_list_routing_profile_queues => "ListRoutingProfileQueues";
        /// Grants permissions to list routing profile resources in an Amazon Connect instance.
        to_list_routing_profiles => "ListRoutingProfiles";
        /// Grants permissions to list security profile resources in an Amazon Connect instance.
        to_list_security_profiles => "ListSecurityProfiles";
        /// Grants permissions to list tags for an Amazon Connect resource.
        to_list_tags_for_resource => "ListTagsForResource";
        /// Grants permissions to list the hierarchy group resources in an Amazon Connect instance.
        to_list_user_hierarchy_groups => "ListUserHierarchyGroups";
        /// Grants permissions to list user resources in an Amazon Connect instance.
        to_list_users => "ListUsers";
        /// Grants permissions to modify configuration settings for an existing Amazon Connect instance. The associated
        /// required actions grant permission modify the settings for the instance.
        to_modify_instance => "ModifyInstance";
        /// Grants permissions to resume recording for the specified contact.
        to_resume_contact_recording => "ResumeContactRecording";
        /// Grants permissions to initiate a chat using the Amazon Connect API.
        to_start_chat_contact => "StartChatContact";
        /// Grants permissions to start recording for the specified contact.
        to_start_contact_recording => "StartContactRecording";
        /// Grants permissions to initiate outbound calls using the Amazon Connect API.
        to_start_outbound_voice_contact => "StartOutboundVoiceContact";
        /// Grants permissions to stop contacts that were initiated using the Amazon Connect API. If you use this
        /// operation on an active contact the contact ends, even if the agent is active on a call with a customer.
        to_stop_contact => "StopContact";
        /// Grants permissions to stop recording for the specified contact.
        to_stop_contact_recording => "StopContactRecording";
        /// Grants permissions to suspend recording for the specified contact.
        to_suspend_contact_recording => "SuspendContactRecording";
        /// Grants permissions to tag an Amazon Connect resource.
        to_tag_resource => "TagResource";
        /// Grants permissions to untag an Amazon Connect resource.
        to_untag_resource => "UntagResource";
        /// Grants permissions to create or update the contact attributes associated with the specified contact.
        to_update_contact_attributes => "UpdateContactAttributes";
        /// Grants permissions to update contact flow content in an Amazon Connect instance.
        to_update_contact_flow_content => "UpdateContactFlowContent";
        /// Grants permissions to update the name and description of a contact flow in an Amazon Connect instance.
        to_update_contact_flow_name => "UpdateContactFlowName";
        /// Grants permissions to update the concurrency in a routing profile in an Amazon Connect instance.
        to_update_routing_profile_concurrency => "UpdateRoutingProfileConcurrency";
        /// Grants permissions to update the outbound queue in a routing profile in an Amazon Connect instance.
        to_update_routing_profile_default_outbound_queue => "UpdateRoutingProfileDefaultOutboundQueue";
        /// Grants permissions to update a routing profile name and description in an Amazon Connect instance.
        to_update_routing_profile_name => "UpdateRoutingProfileName";
        /// Grants permissions to update the queues in routing profile in an Amazon Connect instance.
        to_update_routing_profile_queues => "UpdateRoutingProfileQueues";
        /// Grants permissions to update a hierarchy group for a user in an Amazon Connect instance.
        to_update_user_hierarchy => "UpdateUserHierarchy";
        /// Grants permissions to update identity information for a user in an Amazon Connect instance.
        to_update_user_identity_info => "UpdateUserIdentityInfo";
        /// Grants permissions to update phone configuration settings for a user in an Amazon Connect instance.
        to_update_user_phone_config => "UpdateUserPhoneConfig";
        /// Grants permissions to update a routing profile for a user in an Amazon Connect instance.
        to_update_user_routing_profile => "UpdateUserRoutingProfile";
        /// Grants permissions to update security profiles for a user in an Amazon Connect instance.
        to_update_user_security_profiles => "UpdateUserSecurityProfiles";
    }

    service_resources! {
        /// Adds a resource of type `instance` to the statement.
        on_instance => "instance" (instance_id => "InstanceId");
        /// Adds a resource of type `contact` to the statement.
        on_contact => "contact" (instance_id => "InstanceId", contact_id => "ContactId");
        /// Adds a resource of type `user` to the statement.
        on_user => "user" (instance_id => "InstanceId", user_id => "UserId");
        /// Adds a resource of type `routing-profile` to the statement.
        on_routing_profile => "routing-profile" (instance_id => "InstanceId", routing_profile_id => "RoutingProfileId");
        /// Adds a resource of type `security-profile` to the statement.
        on_security_profile => "security-profile" (instance_id => "InstanceId", security_profile_id => "SecurityProfileId");
        /// Adds a resource of type `hierarchy-group` to the statement.
        on_hierarchy_group => "hierarchy-group" (instance_id => "InstanceId", hierarchy_group_id => "HierarchyGroupId");
        /// Adds a resource of type `queue` to the statement.
        on_queue => "queue" (instance_id => "InstanceId", queue_id => "QueueId");
        /// Adds a resource of type `contact-flow` to the statement.
        on_contact_flow => "contact-flow" (instance_id => "InstanceId", contact_flow_id => "ContactFlowId");
        /// Adds a resource of type `hours-of-operation` to the statement.
        on_hours_of_operation => "hours-of-operation" (instance_id => "InstanceId", hours_of_operation_id => "HoursOfOperationId");
        /// Adds a resource of type `phone-number` to the statement.
        on_phone_number => "phone-number" (instance_id => "InstanceId", phone_number_id => "PhoneNumberId");
    }
}
