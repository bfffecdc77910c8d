use {
    crate::{
        service::{ActionMeta, ArnConvention, ConditionKeyMeta, ConditionType, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel, ConditionOp, ConditionValue, Operator,
        Statement,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "dynamodb",
    name: "Amazon DynamoDB",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazondynamodb.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "BatchGetItem",
            description: "Returns the attributes of one or more items from one or more tables",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_BatchGetItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "BatchWriteItem",
            description: "Puts or deletes multiple items in one or more tables",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_BatchWriteItem.html",
            resource_types: &[],
            condition_keys: &["dynamodb:Attributes", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ConditionCheckItem",
            description: "The ConditionCheckItem operation checks the existence of a set of attributes for the item with the given primary key",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ConditionCheckItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateBackup",
            description: "Creates a backup for an existing table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_CreateBackup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateGlobalTable",
            description: "Enables the user to create a global table from an existing table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_CreateGlobalTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateTable",
            description: "The CreateTable operation adds a new table to your account",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_CreateTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateTableReplica",
            description: "Adds a new replica table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/V2gt_IAM.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteBackup",
            description: "Deletes an existing backup of a table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DeleteBackup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteItem",
            description: "Deletes a single item in a table by primary key",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DeleteItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteTable",
            description: "The DeleteTable operation deletes a table and all of its items",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DeleteTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteTableReplica",
            description: "Deletes a replica table and all of its items",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/V2gt_IAM.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeBackup",
            description: "Describes an existing backup of a table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeBackup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeContinuousBackups",
            description: "Checks the status of the backup restore settings on the specified table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeContinuousBackups.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeContributorInsights",
            description: "Describes the contributor insights status and related details for a given table or global secondary index",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeContributorInsights.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeExport",
            description: "Describes an existing Export of a table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeExport.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeGlobalTable",
            description: "Returns information about the specified global table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeGlobalTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeGlobalTableSettings",
            description: "Returns settings information about the specified global table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeGlobalTableSettings.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeKinesisStreamingDestination",
            description: "Grants permission to describe the status of Kinesis streaming and related details for a given table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeKinesisStreamingDestination.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeLimits",
            description: "Returns the current provisioned-capacity limits for your AWS account in a region, both for the region as a whole and for any one DynamoDB table that you create there",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeLimits.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeReservedCapacity",
            description: "Describes one or more of the Reserved Capacity purchased",
            access_level: AccessLevel::Read,
            url: "",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeReservedCapacityOfferings",
            description: "Describes Reserved Capacity offerings that are available for purchase",
            access_level: AccessLevel::Read,
            url: "",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeStream",
            description: "Returns information about a stream, including the current status of the stream, its Amazon Resource Name (ARN), the composition of its shards, and its corresponding DynamoDB table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeStream.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTable",
            description: "Returns information about the table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTableReplicaAutoScaling",
            description: "Describes the auto scaling settings across all replicas of the global table",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeTableReplicaAutoScaling.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTimeToLive",
            description: "Gives a description of the Time to Live (TTL) status on the specified table.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeTimeToLive.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisableKinesisStreamingDestination",
            description: "Grants permission to stop replication from the DynamoDB table to the Kinesis data stream",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DisableKinesisStreamingDestination.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "EnableKinesisStreamingDestination",
            description: "Grants permission to start table data replication to the specified Kinesis data stream at a timestamp chosen during the enable workflow",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_EnableKinesisStreamingDestination.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ExportTableToPointInTime",
            description: "Initiates an Export of a DynamoDB table to S3",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ExportTableToPointInTime.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetItem",
            description: "The GetItem operation returns a set of attributes for the item with the given primary key",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_GetItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetRecords",
            description: "Retrieves the stream records from a given shard",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_GetRecords.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetShardIterator",
            description: "Returns a shard iterator",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_GetShardIterator.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListBackups",
            description: "List backups associated with the account and endpoint",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListBackups.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListContributorInsights",
            description: "Lists the ContributorInsightsSummary for all tables and global secondary indexes associated with the current account and endpoint",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListContributorInsights.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListExports",
            description: "List exports associated with the account and endpoint",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListExports.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListGlobalTables",
            description: "Lists all global tables that have a replica in the specified region",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListGlobalTables.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListStreams",
            description: "Returns an array of stream ARNs associated with the current account and endpoint",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListStreams.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTables",
            description: "Returns an array of table names associated with the current account and endpoint",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListTables.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsOfResource",
            description: "List all tags on an Amazon DynamoDB resource",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListTagsOfResource.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PartiQLDelete",
            description: "Grants permission to delete a single item in a table by primary key",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ExecuteStatement.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PartiQLInsert",
            description: "Grants permission to create a new item, if an item with same primary key does not exist in the table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ExecuteStatement.html",
            resource_types: &[],
            condition_keys: &["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PartiQLSelect",
            description: "Grants permission to read a set of attributes for items from a table or index",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ExecuteStatement.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:FullTableScan",
                "dynamodb:LeadingKeys",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PartiQLUpdate",
            description: "Grants permission to edit an existing item's attributes",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ExecuteStatement.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PurchaseReservedCapacityOfferings",
            description: "Purchases Reserved Capacity for use with your account",
            access_level: AccessLevel::Write,
            url: "",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutItem",
            description: "Creates a new item, or replaces an old item with a new item",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_PutItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "Query",
            description: "Uses the primary key of a table or a secondary index to directly access items from that table or index",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_Query.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RestoreTableFromBackup",
            description: "Creates a new table from an existing backup",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_RestoreTableFromBackup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RestoreTableToPointInTime",
            description: "Restores a table to a point in time",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_RestoreTableToPointInTime.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "Scan",
            description: "Returns one or more items and item attributes by accessing every item in a table or a secondary index",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_Scan.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Associate a set of tags with an Amazon DynamoDB resource",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_TagResource.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Removes the association of tags from an Amazon DynamoDB resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UntagResource.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContinuousBackups",
            description: "Enables or disables continuous backups",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateContinuousBackups.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContributorInsights",
            description: "Updates the status for contributor insights for a specific table or global secondary index",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateContributorInsights.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateGlobalTable",
            description: "Enables the user to add or remove replicas in the specified global table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateGlobalTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateGlobalTableSettings",
            description: "Enables the user to update settings of the specified global table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateGlobalTableSettings.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateItem",
            description: "Edits an existing item's attributes, or adds a new item to the table if it does not already exist",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateItem.html",
            resource_types: &[],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateTable",
            description: "Modifies the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a given table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateTable.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateTableReplicaAutoScaling",
            description: "Updates auto scaling settings on your replica table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateTableReplicaAutoScaling.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateTimeToLive",
            description: "Enables or disables TTL for the specified table",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateTimeToLive.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "index",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.htmlHowItWorks.CoreComponents.html#HowItWorks.CoreComponents.PrimaryKey",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "stream",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.htmlHowItWorks.CoreComponents.html#HowItWorks.CoreComponents.Streams",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/stream/${StreamLabel}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "table",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.htmlHowItWorks.CoreComponents.html#HowItWorks.CoreComponents.TablesItemsAttributes",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "backup",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/backuprestore_HowItWorks.html",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/backup/${BackupName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "export",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/DataExport.HowItWorks.html",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/export/${ExportName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "global-table",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/globaltables_HowItWorks.html",
            arn: "arn:${Partition}:dynamodb::${Account}:global-table/${GlobalTableName}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[
        ConditionKeyMeta {
            key: "dynamodb:Attributes",
            description: "Filter based on the attribute (field or column) names of the table.",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "dynamodb:EnclosingOperation",
            description: "Used to block Transactions APIs calls and allow the non-Transaction APIs calls and vice-versa.",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "dynamodb:FullTableScan",
            description: "Used to block full table scan.",
            value_type: ConditionType::Bool,
            default_operator: ConditionOp::Bool,
        },
        ConditionKeyMeta {
            key: "dynamodb:LeadingKeys",
            description: "Filters based on the partition key of the table.",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "dynamodb:ReturnConsumedCapacity",
            description: "Filter based on the ReturnConsumedCapacity parameter of a request. Contains either \"TOTAL\" or \"NONE\".",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "dynamodb:ReturnValues",
            description: "Filter based on the ReturnValues parameter of request. Contains one of the following: \"ALL_OLD\", \"UPDATED_OLD\",\"ALL_NEW\",\"UPDATED_NEW\", or \"NONE\".",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "dynamodb:Select",
            description: "Filter based on the Select parameter of a Query or Scan request.",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
    ],
};

service_statement! {
    /// Statement provider for service `dynamodb` (Amazon DynamoDB).
    DynamoDb => TABLE
}

impl DynamoDb {
    service_actions! {
        /// Returns the attributes of one or more items from one or more tables
        to_batch_get_item => "BatchGetItem";
        /// Puts or deletes multiple items in one or more tables
        to_batch_write_item => "BatchWriteItem";
        /// The ConditionCheckItem operation checks the existence of a set of attributes for the item with the given
        /// primary key
        to_condition_check_item => "ConditionCheckItem";
        /// Creates a backup for an existing table
        to_create_backup => "CreateBackup";
        /// Enables the user to create a global table from an existing table
        to_create_global_table => "CreateGlobalTable";
        /// The CreateTable operation adds a new table to your account
        to_create_table => "CreateTable";
        /// Adds a new replica table
        to_create_table_replica => "CreateTableReplica";
        /// Deletes an existing backup of a table
        to_delete_backup => "DeleteBackup";
        /// Deletes a single item in a table by primary key
        to_delete_item => "DeleteItem";
        /// The DeleteTable operation deletes a table and all of its items
        to_delete_table => "DeleteTable";
        /// Deletes a replica table and all of its items
        to_delete_table_replica => "DeleteTableReplica";
        /// Describes an existing backup of a table
        to_describe_backup => "DescribeBackup";
        /// Checks the status of the backup restore settings on the specified table
        to_describe_continuous_backups => "DescribeContinuousBackups";
        /// Describes the contributor insights status and related details for a given table or global secondary index
        to_describe_contributor_insights => "DescribeContributorInsights";
        /// Describes an existing Export of a table
        to_describe_export => "DescribeExport";
        /// Returns information about the specified global table
        to_describe_global_table => "DescribeGlobalTable";
        /// Returns settings information about the specified global table
        to_describe_global_table_settings => "DescribeGlobalTableSettings";
        /// Grants permission to describe the status of Kinesis streaming and related details for a given table
        to_describe_kinesis_streaming_destination => "DescribeKinesisStreamingDestination";
        /// Returns the current provisioned-capacity limits for your AWS account in a region, both for the region as a
        /// whole and for any one DynamoDB table that you create there
        to_describe_limits => "DescribeLimits";
        /// Describes one or more of the Reserved Capacity purchased
        to_describe_reserved_capacity => "DescribeReservedCapacity";
        /// Describes Reserved Capacity offerings that are available for purchase
        to_describe_reserved_capacity_offerings => "DescribeReservedCapacityOfferings";
        /// Returns information about a stream, including the current status of the stream, its Amazon Resource Name
        /// (ARN), the composition of its shards, and its corresponding DynamoDB table
        to_describe_stream => "DescribeStream";
        /// Returns information about the table
        to_describe_table => "DescribeTable";
        /// Describes the auto scaling settings across all replicas of the global table
        to_describe_table_replica_auto_scaling => "DescribeTableReplicaAutoScaling";
        /// Gives a description of the Time to Live (TTL) status on the specified table.
        to_describe_time_to_live => "DescribeTimeToLive";
        /// Grants permission to stop replication from the DynamoDB table to the Kinesis data stream
        to_disable_kinesis_streaming_destination => "DisableKinesisStreamingDestination";
        /// Grants permission to start table data replication to the specified Kinesis data stream at a timestamp chosen
        /// during the enable workflow
        to_enable_kinesis_streaming_destination => "EnableKinesisStreamingDestination";
        /// Initiates an Export of a DynamoDB table to S3
        to_export_table_to_point_in_time => "ExportTableToPointInTime";
        /// The GetItem operation returns a set of attributes for the item with the given primary key
        to_get_item => "GetItem";
        /// Retrieves the stream records from a given shard
        to_get_records => "GetRecords";
        /// Returns a shard iterator
        to_get_shard_iterator => "GetShardIterator";
        /// List backups associated with the account and endpoint
        to_list_backups => "ListBackups";
        /// Lists the ContributorInsightsSummary for all tables and global secondary indexes associated with the current
        /// account and endpoint
        to_list_contributor_insights => "ListContributorInsights";
        /// List exports associated with the account and endpoint
        to_list_exports => "ListExports";
        /// Lists all global tables that have a replica in the specified region
        to_list_global_tables => "ListGlobalTables";
        /// Returns an array of stream ARNs associated with the current account and endpoint
        to_list_streams => "ListStreams";
        /// Returns an array of table names associated with the current account and endpoint
        to_list_tables => "ListTables";
        /// List all tags on an Amazon DynamoDB resource
        to_list_tags_of_resource => "ListTagsOfResource";
        /// Grants permission to delete a single item in a table by primary key
        to_parti_ql_delete => "PartiQLDelete";
        /// Grants permission to create a new item, if an item with same primary key does not exist in the table
        to_parti_ql_insert => "PartiQLInsert";
        /// Grants permission to read a set of attributes for items from a table or index
        to_parti_ql_select => "PartiQLSelect";
        /// Grants permission to edit an existing item's attributes
        to_parti_ql_update => "PartiQLUpdate";
        /// Purchases Reserved Capacity for use with your account
        to_purchase_reserved_capacity_offerings => "PurchaseReservedCapacityOfferings";
        /// Creates a new item, or replaces an old item with a new item
        to_put_item => "PutItem";
        /// Uses the primary key of a table or a secondary index to directly access items from that table or index
        to_query => "Query";
        /// Creates a new table from an existing backup
        to_restore_table_from_backup => "RestoreTableFromBackup";
        /// Restores a table to a point in time
        to_restore_table_to_point_in_time => "RestoreTableToPointInTime";
        /// Returns one or more items and item attributes by accessing every item in a table or a secondary index
        to_scan => "Scan";
        /// Associate a set of tags with an Amazon DynamoDB resource
        to_tag_resource => "TagResource";
        /// Removes the association of tags from an Amazon DynamoDB resource.
        to_untag_resource => "UntagResource";
        /// Enables or disables continuous backups
        to_update_continuous_backups => "UpdateContinuousBackups";
        /// Updates the status for contributor insights for a specific table or global secondary index
        to_update_contributor_insights => "UpdateContributorInsights";
        /// Enables the user to add or remove replicas in the specified global table
        to_update_global_table => "UpdateGlobalTable";
        /// Enables the user to update settings of the specified global table
        to_update_global_table_settings => "UpdateGlobalTableSettings";
        /// Edits an existing item's attributes, or adds a new item to the table if it does not already exist
        to_update_item => "UpdateItem";
        /// Modifies the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a
        /// given table
        to_update_table => "UpdateTable";
        /// Updates auto scaling settings on your replica table
        to_update_table_replica_auto_scaling => "UpdateTableReplicaAutoScaling";
        /// Enables or disables TTL for the specified table
        to_update_time_to_live => "UpdateTimeToLive";
    }

    service_resources! {
        /// Adds a resource of type `index` to the statement.
        on_index => "index" (table_name => "TableName", index_name => "IndexName");
        /// Adds a resource of type `stream` to the statement.
        on_stream => "stream" (table_name => "TableName", stream_label => "StreamLabel");
        /// Adds a resource of type `table` to the statement.
        on_table => "table" (table_name => "TableName");
        /// Adds a resource of type `backup` to the statement.
        on_backup => "backup" (table_name => "TableName", backup_name => "BackupName");
        /// Adds a resource of type `export` to the statement.
        on_export => "export" (table_name => "TableName", export_name => "ExportName");
        /// Adds a resource of type `global-table` to the statement.
        on_global_table => "global-table" (global_table_name => "GlobalTableName");
    }

    /// Filter based on the attribute (field or column) names of the table.
    pub fn if_attributes<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("dynamodb:Attributes", value, operator)
    }

    /// Used to block Transactions APIs calls and allow the non-Transaction APIs calls and vice-versa.
    pub fn if_enclosing_operation<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("dynamodb:EnclosingOperation", value, operator)
    }

    /// Used to block full table scan.
    pub fn if_full_table_scan(&mut self, value: Option<bool>) -> &mut Self {
        self.condition("dynamodb:FullTableScan", value.unwrap_or(true), None)
    }

    /// Filters based on the partition key of the table.
    pub fn if_leading_keys<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("dynamodb:LeadingKeys", value, operator)
    }

    /// Filter based on the ReturnConsumedCapacity parameter of a request. Contains either "TOTAL" or "NONE".
    pub fn if_return_consumed_capacity<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("dynamodb:ReturnConsumedCapacity", value, operator)
    }

    /// Filter based on the ReturnValues parameter of request. Contains one of the following: "ALL_OLD",
    /// "UPDATED_OLD","ALL_NEW","UPDATED_NEW", or "NONE".
    pub fn if_return_values<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("dynamodb:ReturnValues", value, operator)
    }

    /// Filter based on the Select parameter of a Query or Scan request.
    pub fn if_select<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("dynamodb:Select", value, operator)
    }
}
