use {
    crate::{
        service::{ActionMeta, ArnConvention, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "ds",
    name: "AWS Directory Service",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awsdirectoryservice.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AcceptSharedDirectory",
            description: "Accepts a directory sharing request that was sent from the directory owner account.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_AcceptSharedDirectory.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "AddIpRoutes",
            description: "Adds a CIDR address block to correctly route traffic to and from your Microsoft AD on Amazon Web Services",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_AddIpRoutes.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[
                "ec2:AuthorizeSecurityGroupEgress",
                "ec2:AuthorizeSecurityGroupIngress",
                "ec2:DescribeSecurityGroups",
            ],
        },
        ActionMeta {
            name: "AddTagsToResource",
            description: "Adds or overwrites one or more tags for the specified Amazon Directory Services directory.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_AddTagsToResource.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &["ec2:CreateTags"],
        },
        ActionMeta {
            name: "AuthorizeApplication",
            description: "Authorizes an application for your AWS Directory.",
            access_level: AccessLevel::Write,
            url: "",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CancelSchemaExtension",
            description: "Cancels an in-progress schema extension to a Microsoft AD directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CancelSchemaExtension.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CheckAlias",
            description: "Verifies that the alias is available for use.",
            access_level: AccessLevel::Read,
            url: "",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ConnectDirectory",
            description: "Creates an AD Connector to connect to an on-premises directory.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ConnectDirectory.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[
                "ec2:AuthorizeSecurityGroupEgress",
                "ec2:AuthorizeSecurityGroupIngress",
                "ec2:CreateNetworkInterface",
                "ec2:CreateSecurityGroup",
                "ec2:CreateTags",
                "ec2:DescribeNetworkInterfaces",
                "ec2:DescribeSubnets",
                "ec2:DescribeVpcs",
            ],
        },
        ActionMeta {
            name: "CreateAlias",
            description: "Creates an alias for a directory and assigns the alias to the directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateAlias.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateComputer",
            description: "Creates a computer account in the specified directory, and joins the computer to the directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateComputer.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateConditionalForwarder",
            description: "Creates a conditional forwarder associated with your AWS directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateConditionalForwarder.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateDirectory",
            description: "Creates a Simple AD directory.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateDirectory.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[
                "ec2:AuthorizeSecurityGroupEgress",
                "ec2:AuthorizeSecurityGroupIngress",
                "ec2:CreateNetworkInterface",
                "ec2:CreateSecurityGroup",
                "ec2:CreateTags",
                "ec2:DescribeNetworkInterfaces",
                "ec2:DescribeSubnets",
                "ec2:DescribeVpcs",
            ],
        },
        ActionMeta {
            name: "CreateIdentityPoolDirectory",
            description: "Creates a IdentityPool Directory in the AWS cloud.",
            access_level: AccessLevel::Tagging,
            url: "",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateLogSubscription",
            description: "Creates a subscription to forward real time Directory Service domain controller security logs to the specified CloudWatch log group in your AWS account.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateLogSubscription.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateMicrosoftAD",
            description: "Creates a Microsoft AD in the AWS cloud.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateMicrosoftAD.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[
                "ec2:AuthorizeSecurityGroupEgress",
                "ec2:AuthorizeSecurityGroupIngress",
                "ec2:CreateNetworkInterface",
                "ec2:CreateSecurityGroup",
                "ec2:CreateTags",
                "ec2:DescribeNetworkInterfaces",
                "ec2:DescribeSubnets",
                "ec2:DescribeVpcs",
            ],
        },
        ActionMeta {
            name: "CreateSnapshot",
            description: "Creates a snapshot of a Simple AD or Microsoft AD directory in the AWS cloud.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateSnapshot.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateTrust",
            description: "Initiates the creation of the AWS side of a trust relationship between a Microsoft AD in the AWS cloud and an external domain.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_CreateTrust.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteConditionalForwarder",
            description: "Deletes a conditional forwarder that has been set up for your AWS directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeleteConditionalForwarder.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteDirectory",
            description: "Deletes an AWS Directory Service directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeleteDirectory.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[
                "ec2:DeleteNetworkInterface",
                "ec2:DeleteSecurityGroup",
                "ec2:DescribeNetworkInterfaces",
                "ec2:RevokeSecurityGroupEgress",
                "ec2:RevokeSecurityGroupIngress",
            ],
        },
        ActionMeta {
            name: "DeleteLogSubscription",
            description: "Deletes the specified log subscription.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeleteLogSubscription.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteSnapshot",
            description: "Deletes a directory snapshot.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeleteSnapshot.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteTrust",
            description: "Deletes an existing trust relationship between your Microsoft AD in the AWS cloud and an external domain.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/DeleteTrust.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeregisterCertificate",
            description: "Deletes from the system the certificate that was registered for a secured LDAP connection.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeregisterCertificate.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeregisterEventTopic",
            description: "Removes the specified directory as a publisher to the specified SNS topic.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DeregisterEventTopic.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeCertificate",
            description: "Displays information about the certificate registered for a secured LDAP connection.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeCertificate.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeConditionalForwarders",
            description: "Obtains information about the conditional forwarders for this account.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeConditionalForwarders.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeDirectories",
            description: "Obtains information about the directories that belong to this account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeDirectories.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeDomainControllers",
            description: "Provides information about any domain controllers in your directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeDomainControllers.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeEventTopics",
            description: "Obtains information about which SNS topics receive status messages from the specified directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeEventTopics.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeLDAPSSettings",
            description: "Describes the status of LDAP security for the specified directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeLDAPSSettings.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeSharedDirectories",
            description: "Returns the shared directories in your account.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeSharedDirectories.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeSnapshots",
            description: "Obtains information about the directory snapshots that belong to this account.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeSnapshots.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTrusts",
            description: "Obtains information about the trust relationships for this account.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DescribeTrusts.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisableLDAPS",
            description: "Deactivates LDAP secure calls for the specified directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DisableLDAPS.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisableRadius",
            description: "Disables multi-factor authentication (MFA) with the Remote Authentication Dial In User Service (RADIUS) server for an AD Connector directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DisableRadius.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisableSso",
            description: "Disables single-sign on for a directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_DisableSso.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "EnableLDAPS",
            description: "Activates the switch for the specific directory to always use LDAP secure calls.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_EnableLDAPS.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "EnableRadius",
            description: "Enables multi-factor authentication (MFA) with the Remote Authentication Dial In User Service (RADIUS) server for an AD Connector directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_EnableRadius.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "EnableSso",
            description: "Enables single-sign on for a directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_EnableSso.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAuthorizedApplicationDetails",
            description: "",
            access_level: AccessLevel::Read,
            url: "",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetDirectoryLimits",
            description: "Obtains directory limit information for the current region.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_GetDirectoryLimits.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetSnapshotLimits",
            description: "Obtains the manual snapshot limits for a directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_GetSnapshotLimits.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAuthorizedApplications",
            description: "Obtains the aws applications authorized for a directory.",
            access_level: AccessLevel::Read,
            url: "",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListCertificates",
            description: "For the specified directory, lists all the certificates registered for a secured LDAP connection.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ListCertificates.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListIpRoutes",
            description: "Lists the address blocks that you have added to a directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ListIpRoutes.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListLogSubscriptions",
            description: "Lists the active log subscriptions for the AWS account.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ListLogSubscriptions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListSchemaExtensions",
            description: "Lists all schema extensions applied to a Microsoft AD Directory.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ListSchemaExtensions.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "Lists all tags on an Amazon Directory Services directory.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ListTagsForResource.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RegisterCertificate",
            description: "Registers a certificate for secured LDAP connection.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RegisterCertificate.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RegisterEventTopic",
            description: "Associates a directory with an SNS topic.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RegisterEventTopic.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &["sns:GetTopicAttributes"],
        },
        ActionMeta {
            name: "RejectSharedDirectory",
            description: "Rejects a directory sharing request that was sent from the directory owner account.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RejectSharedDirectory.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RemoveIpRoutes",
            description: "Removes IP address blocks from a directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RemoveIpRoutes.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RemoveTagsFromResource",
            description: "Removes tags from an Amazon Directory Services directory.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RemoveTagsFromResource.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &["ec2:DeleteTags"],
        },
        ActionMeta {
            name: "ResetUserPassword",
            description: "Resets the password for any user in your AWS Managed Microsoft AD or Simple AD directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ResetUserPassword.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RestoreFromSnapshot",
            description: "Restores a directory using an existing directory snapshot.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_RestoreFromSnapshot.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ShareDirectory",
            description: "Shares a specified directory in your AWS account (directory owner) with another AWS account (directory consumer). With this operation you can use your directory from any AWS account and from any Amazon VPC within an AWS Region.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_ShareDirectory.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartSchemaExtension",
            description: "Applies a schema extension to a Microsoft AD directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_StartSchemaExtension.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UnauthorizeApplication",
            description: "Unauthorizes an application from your AWS Directory.",
            access_level: AccessLevel::Write,
            url: "",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UnshareDirectory",
            description: "Stops the directory sharing between the directory owner and consumer accounts.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_UnshareDirectory.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateConditionalForwarder",
            description: "Updates a conditional forwarder that has been set up for your AWS directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_UpdateConditionalForwarder.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateNumberOfDomainControllers",
            description: "Adds or removes domain controllers to or from the directory. Based on the difference between current value and new value (provided through this API call), domain controllers will be added or removed. It may take up to 45 minutes for any new domain controllers to become fully active once the requested number of domain controllers is updated. During this time, you cannot make another update request.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_UpdateNumberOfDomainControllers.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRadius",
            description: "Updates the Remote Authentication Dial In User Service (RADIUS) server information for an AD Connector directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_UpdateRadius.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateTrust",
            description: "Updates the trust that has been set up between your AWS Managed Microsoft AD directory and an on-premises Active Directory.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_UpdateTrust.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "VerifyTrust",
            description: "Verifies a trust relationship between your Microsoft AD in the AWS cloud and an external domain.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/directoryservice/latest/devguide/API_VerifyTrust.html",
            resource_types: &[ResourceRef::required("directory")],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "directory",
            url: "",
            arn: "arn:${Partition}:ds:${Region}:${Account}:directory/${DirectoryId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[],
};

service_statement! {
    /// Statement provider for service `ds` (AWS Directory Service).
    DirectoryService => TABLE
}

impl DirectoryService {
    service_actions! {
        /// Accepts a directory sharing request that was sent from the directory owner account.
        to_accept_shared_directory => "AcceptSharedDirectory";
        /// Adds a CIDR address block to correctly route traffic to and from your Microsoft AD on Amazon Web Services
        to_add_ip_routes => "AddIpRoutes";
        /// Adds or overwrites one or more tags for the specified Amazon Directory Services directory.
        to_add_tags_to_resource => "AddTagsToResource";
        /// Authorizes an application for your AWS Directory.
        to_authorize_application => "AuthorizeApplication";
        /// Cancels an in-progress schema extension to a Microsoft AD directory.
        to_cancel_schema_extension => "CancelSchemaExtension";
        /// Verifies that the alias is available for use.
        to_check_alias => "CheckAlias";
        /// Creates an AD Connector to connect to an on-premises directory.
        to_connect_directory => "ConnectDirectory";
        /// Creates an alias for a directory and assigns the alias to the directory.
        to_create_alias => "CreateAlias";
        /// Creates a computer account in the specified directory, and joins the computer to the directory.
        to_create_computer => "CreateComputer";
        /// Creates a conditional forwarder associated with your AWS directory.
        to_create_conditional_forwarder => "CreateConditionalForwarder";
        /// Creates a Simple AD directory.
        to_create_directory => "CreateDirectory";
        /// Creates a IdentityPool Directory in the AWS cloud.
        to_create_identity_pool_directory => "CreateIdentityPoolDirectory";
        /// Creates a subscription to forward real time Directory Service domain controller security logs to the
        /// specified CloudWatch log group in your AWS account.
        to_create_log_subscription => "CreateLogSubscription";
        /// Creates a Microsoft AD in the AWS cloud.
        to_create_microsoft_ad => "CreateMicrosoftAD";
        /// Creates a snapshot of a Simple AD or Microsoft AD directory in the AWS cloud.
        to_create_snapshot => "CreateSnapshot";
        /// Initiates the creation of the AWS side of a trust relationship between a Microsoft AD in the AWS cloud and
        /// an external domain.
        to_create_trust => "CreateTrust";
        /// Deletes a conditional forwarder that has been set up for your AWS directory.
        to_delete_conditional_forwarder => "DeleteConditionalForwarder";
        /// Deletes an AWS Directory Service directory.
        to_delete_directory => "DeleteDirectory";
        /// Deletes the specified log subscription.
        to_delete_log_subscription => "DeleteLogSubscription";
        /// Deletes a directory snapshot.
        to_delete_snapshot => "DeleteSnapshot";
        /// Deletes an existing trust relationship between your Microsoft AD in the AWS cloud and an external domain.
        to_delete_trust => "DeleteTrust";
        /// Deletes from the system the certificate that was registered for a secured LDAP connection.
        to_deregister_certificate => "DeregisterCertificate";
        /// Removes the specified directory as a publisher to the specified SNS topic.
        to_deregister_event_topic => "DeregisterEventTopic";
        /// Displays information about the certificate registered for a secured LDAP connection.
        to_describe_certificate => "DescribeCertificate";
        /// Obtains information about the conditional forwarders for this account.
        to_describe_conditional_forwarders => "DescribeConditionalForwarders";
        /// Obtains information about the directories that belong to this account.
        to_describe_directories => "DescribeDirectories";
        /// Provides information about any domain controllers in your directory.
        to_describe_domain_controllers => "DescribeDomainControllers";
        /// Obtains information about which SNS topics receive status messages from the specified directory.
        to_describe_event_topics => "DescribeEventTopics";
        /// Describes the status of LDAP security for the specified directory.
        to_describe_ldaps_settings => "DescribeLDAPSSettings";
        /// Returns the shared directories in your account.
        to_describe_shared_directories => "DescribeSharedDirectories";
        /// Obtains information about the directory snapshots that belong to this account.
        to_describe_snapshots => "DescribeSnapshots";
        /// Obtains information about the trust relationships for this account.
        to_describe_trusts => "DescribeTrusts";
        /// Deactivates LDAP secure calls for the specified directory.
        to_disable_ldaps => "DisableLDAPS";
        /// Disables multi-factor authentication (MFA) with the Remote Authentication Dial In User Service (RADIUS)
        /// server for an AD Connector directory.
        to_disable_radius => "DisableRadius";
        /// Disables single-sign on for a directory.
        to_disable_sso => "DisableSso";
        /// Activates the switch for the specific directory to always use LDAP secure calls.
        to_enable_ldaps => "EnableLDAPS";
        /// Enables multi-factor authentication (MFA) with the Remote Authentication Dial In User Service (RADIUS)
        /// server for an AD Connector directory.
        to_enable_radius => "EnableRadius";
        /// Enables single-sign on for a directory.
        to_enable_sso => "EnableSso";
        to_get_authorized_application_details => "GetAuthorizedApplicationDetails";
        /// Obtains directory limit information for the current region.
        to_get_directory_limits => "GetDirectoryLimits";
        /// Obtains the manual snapshot limits for a directory.
        to_get_snapshot_limits => "GetSnapshotLimits";
        /// Obtains the aws applications authorized for a directory.
        to_list_authorized_applications => "ListAuthorizedApplications";
        /// For the specified directory, lists all the certificates registered for a secured LDAP connection.
        to_list_certificates => "ListCertificates";
        /// Lists the address blocks that you have added to a directory.
        to_list_ip_routes => "ListIpRoutes";
        /// Lists the active log subscriptions for the AWS account.
        to_list_log_subscriptions => "ListLogSubscriptions";
        /// Lists all schema extensions applied to a Microsoft AD Directory.
        to_list_schema_extensions => "ListSchemaExtensions";
        /// Lists all tags on an Amazon Directory Services directory.
        to_list_tags_for_resource => "ListTagsForResource";
        /// Registers a certificate for secured LDAP connection.
        to_register_certificate => "RegisterCertificate";
        /// Associates a directory with an SNS topic.
        to_register_event_topic => "RegisterEventTopic";
        /// Rejects a directory sharing request that was sent from the directory owner account.
        to_reject_shared_directory => "RejectSharedDirectory";
        /// Removes IP address blocks from a directory.
        to_remove_ip_routes => "RemoveIpRoutes";
        /// Removes tags from an Amazon Directory Services directory.
        to_remove_tags_from_resource => "RemoveTagsFromResource";
        /// Resets the password for any user in your AWS Managed Microsoft AD or Simple AD directory.
        to_reset_user_password => "ResetUserPassword";
        /// Restores a directory using an existing directory snapshot.
        to_restore_from_snapshot => "RestoreFromSnapshot";
        /// Shares a specified directory in your AWS account (directory owner) with another AWS account (directory
        /// consumer). With this operation you can use your directory from any AWS account and from any Amazon VPC
        /// within an AWS Region.
        to_share_directory => "ShareDirectory";
        /// Applies a schema extension to a Microsoft AD directory.
        to_start_schema_extension => "StartSchemaExtension";
        /// Unauthorizes an application from your AWS Directory.
        to_unauthorize_application => "UnauthorizeApplication";
        /// Stops the directory sharing between the directory owner and consumer accounts.
        to_unshare_directory => "UnshareDirectory";
        /// Updates a conditional forwarder that has been set up for your AWS directory.
        to_update_conditional_forwarder => "UpdateConditionalForwarder";
        /// Adds or removes domain controllers to or from the directory. Based on the difference between current value
        /// and new value (provided through this API call), domain controllers will be added or removed. It may take up
        /// to 45 minutes for any new domain controllers to become fully active once the requested number of domain
        /// controllers is updated. During this time, you cannot make another update request.
        to_update_number_of_domain_controllers => "UpdateNumberOfDomainControllers";
        /// Updates the Remote Authentication Dial In User Service (RADIUS) server information for an AD Connector
        /// directory.
        to_update_radius => "UpdateRadius";
        /// Updates the trust that has been set up between your AWS Managed Microsoft AD directory and an on-premises
        /// Active Directory.
        to_update_trust => "UpdateTrust";
        /// Verifies a trust relationship between your Microsoft AD in the AWS cloud and an external domain.
        to_verify_trust => "VerifyTrust";
    }

    service_resources! {
        /// Adds a resource of type `directory` to the statement.
        on_directory => "directory" (directory_id => "DirectoryId");
    }
}
