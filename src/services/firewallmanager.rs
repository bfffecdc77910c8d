use {
    crate::{
        service::{ActionMeta, ArnConvention, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "fms",
    name: "AWS Firewall Manager",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awsfirewallmanager.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AssociateAdminAccount",
            description: "Sets the AWS Firewall Manager administrator account and enables the service in all organization accounts",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_AssociateAdminAccount.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAppsList",
            description: "Grants permission to permanently deletes an AWS Firewall Manager applications list.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_DeleteAppsList.html",
            resource_types: &[ResourceRef::required("applications-list")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteNotificationChannel",
            description: "Deletes an AWS Firewall Manager association with the IAM role and the Amazon Simple Notification Service (SNS) topic that is used to notify the FM administrator about major FM events and errors across the organization.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_DeleteNotificationChannel.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeletePolicy",
            description: "Permanently deletes an AWS Firewall Manager policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_DeletePolicy.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &["aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteProtocolsList",
            description: "Grants permission to permanently deletes an AWS Firewall Manager protocols list.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_DeleteProtocolsList.html",
            resource_types: &[ResourceRef::required("protocols-list")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisassociateAdminAccount",
            description: "Disassociates the account that has been set as the AWS Firewall Manager administrator account and and disables the service in all organization accounts",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_DisassociateAdminAccount.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAdminAccount",
            description: "Returns the AWS Organizations master account that is associated with AWS Firewall Manager as the AWS Firewall Manager administrator.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetAdminAccount.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAppsList",
            description: "Grants permission to return information about the specified AWS Firewall Manager applications list.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetAppsList.html",
            resource_types: &[ResourceRef::required("applications-list")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetComplianceDetail",
            description: "Returns detailed compliance information about the specified member account. Details include resources that are in and out of compliance with the specified policy.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetComplianceDetail.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetNotificationChannel",
            description: "Returns information about the Amazon Simple Notification Service (SNS) topic that is used to record AWS Firewall Manager SNS logs.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetNotificationChannel.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetPolicy",
            description: "Returns information about the specified AWS Firewall Manager policy.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetPolicy.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetProtectionStatus",
            description: "Returns policy-level attack summary information in the event of a potential DDoS attack.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetProtectionStatus.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetProtocolsList",
            description: "Grants permission to return information about the specified AWS Firewall Manager protocols list.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_GetProtocolsList.html",
            resource_types: &[ResourceRef::required("protocols-list")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAppsLists",
            description: "Grants permission to return an array of AppsListDataSummary objects.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListAppsLists.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListComplianceStatus",
            description: "Returns an array of PolicyComplianceStatus objects in the response. Use PolicyComplianceStatus to get a summary of which member accounts are protected by the specified policy.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListComplianceStatus.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListMemberAccounts",
            description: "Returns an array of member account ids if the caller is FMS admin account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListMemberAccounts.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListPolicies",
            description: "Returns an array of PolicySummary objects in the response.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListPolicies.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListProtocolsLists",
            description: "Grants permission to return an array of ProtocolsListDataSummary objects.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListProtocolsLists.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "Lists the Tags for a given resource.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ListTagsForResource.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutAppsList",
            description: "Grants permission to create an AWS Firewall Manager applications list.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_PutAppsList.html",
            resource_types: &[ResourceRef::required("applications-list")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutNotificationChannel",
            description: "Designates the IAM role and Amazon Simple Notification Service (SNS) topic that AWS Firewall Manager (FM) could use to notify the FM administrator about major FM events and errors across the organization.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_PutNotificationChannel.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutPolicy",
            description: "Creates an AWS Firewall Manager policy.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_PutPolicy.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutProtocolsList",
            description: "Grants permission to creates an AWS Firewall Manager protocols list.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_PutProtocolsList.html",
            resource_types: &[ResourceRef::required("protocols-list")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Adds a Tag to a given resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_TagResource.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Removes a Tag from a given resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_UntagResource.html",
            resource_types: &[ResourceRef::required("policy")],
            condition_keys: &["aws:TagKeys"],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "policy",
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_Policy.html",
            arn: "arn:${Partition}:fms:${Region}:${Account}:policy/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "applications-list",
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_AppsListData.html",
            arn: "arn:${Partition}:fms:${Region}:${Account}:applications-list/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "protocols-list",
            url: "https://docs.aws.amazon.com/fms/2018-01-01/APIReference/API_ProtocolsListData.html",
            arn: "arn:${Partition}:fms:${Region}:${Account}:protocols-list/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[],
};

service_statement! {
    /// Statement provider for service `fms` (AWS Firewall Manager).
    FirewallManager => TABLE
}

impl FirewallManager {
    service_actions! {
        /// Sets the AWS Firewall Manager administrator account and enables the service in all organization accounts
        to_associate_admin_account => "AssociateAdminAccount";
        /// Grants permission to permanently deletes an AWS Firewall Manager applications list.
        to_delete_apps_list => "DeleteAppsList";
        /// Deletes an AWS Firewall Manager association with the IAM role and the Amazon Simple Notification Service
        /// (SNS) topic that is used to notify the FM administrator about major FM events and errors across the
        /// organization.
        to_delete_notification_channel => "DeleteNotificationChannel";
        /// Permanently deletes an AWS Firewall Manager policy.
        to_delete_policy => "DeletePolicy";
        /// Grants permission to permanently deletes an AWS Firewall Manager protocols list.
        to_delete_protocols_list => "DeleteProtocolsList";
        /// Disassociates the account that has been set as the AWS Firewall Manager administrator account and and
        /// disables the service in all organization accounts
        to_disassociate_admin_account => "DisassociateAdminAccount";
        /// Returns the AWS Organizations master account that is associated with AWS Firewall Manager as the AWS
        /// Firewall Manager administrator.
        to_get_admin_account => "GetAdminAccount";
        /// Grants permission to return information about the specified AWS Firewall Manager applications list.
        to_get_apps_list => "GetAppsList";
        /// Returns detailed compliance information about the specified member account. Details include resources that
        /// are in and out of compliance with the specified policy.
        to_get_compliance_detail => "GetComplianceDetail";
        /// Returns information about the Amazon Simple Notification Service (SNS) topic that is used to record AWS
        /// Firewall Manager SNS logs.
        to_get_notification_channel => "GetNotificationChannel";
        /// Returns information about the specified AWS Firewall Manager policy.
        to_get_policy => "GetPolicy";
        /// Returns policy-level attack summary information in the event of a potential DDoS attack.
        to_get_protection_status => "GetProtectionStatus";
        /// Grants permission to return information about the specified AWS Firewall Manager protocols list.
        to_get_protocols_list => "GetProtocolsList";
        /// Grants permission to return an array of AppsListDataSummary objects.
        to_list_apps_lists => "ListAppsLists";
        /// Returns an array of PolicyComplianceStatus objects in the response. Use PolicyComplianceStatus to get a
        /// summary of which member accounts are protected by the specified policy.
        to_list_compliance_status => "ListComplianceStatus";
        /// Returns an array of member account ids if the caller is FMS admin account.
        to_list_member_accounts => "ListMemberAccounts";
        /// Returns an array of PolicySummary objects in the response.
        to_list_policies => "ListPolicies";
        /// Grants permission to return an array of ProtocolsListDataSummary objects.
        to_list_protocols_lists => "ListProtocolsLists";
        /// Lists the Tags for a given resource.
        to_list_tags_for_resource => "ListTagsForResource";
        /// Grants permission to create an AWS Firewall Manager applications list.
        to_put_apps_list => "PutAppsList";
        /// Designates the IAM role and Amazon Simple Notification Service (SNS) topic that AWS Firewall Manager (FM)
        /// could use to notify the FM administrator about major FM events and errors across the organization.
        to_put_notification_channel => "PutNotificationChannel";
        /// Creates an AWS Firewall Manager policy.
        to_put_policy => "PutPolicy";
        /// Grants permission to creates an AWS Firewall Manager protocols list.
        to_put_protocols_list => "PutProtocolsList";
        /// Adds a Tag to a given resource.
        to_tag_resource => "TagResource";
        /// Removes a Tag from a given resource.
        to_untag_resource => "UntagResource";
    }

    service_resources! {
        /// Adds a resource of type `policy` to the statement.
        on_policy => "policy" (id => "Id");
        /// Adds a resource of type `applications-list` to the statement.
        on_applications_list => "applications-list" (id => "Id");
        /// Adds a resource of type `protocols-list` to the statement.
        on_protocols_list => "protocols-list" (id => "Id");
    }
}
