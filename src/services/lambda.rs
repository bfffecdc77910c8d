use {
    crate::{
        service::{ActionMeta, ArnConvention, ConditionKeyMeta, ConditionType, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel, ConditionOp, ConditionValue, Operator,
        Statement,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "lambda",
    name: "AWS Lambda",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awslambda.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AddLayerVersionPermission",
            description: "Grants permission to add permissions to the resource-based policy of a version of an AWS Lambda layer",
            access_level: AccessLevel::PermissionsManagement,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_AddLayerVersionPermission.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "AddPermission",
            description: "Grants permission to give an AWS service or another account permission to use an AWS Lambda function",
            access_level: AccessLevel::PermissionsManagement,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_AddPermission.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &["lambda:Principal"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateAlias",
            description: "Grants permission to create an alias for a Lambda function version",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_CreateAlias.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateEventSourceMapping",
            description: "Grants permission to create a mapping between an event source and an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_CreateEventSourceMapping.html",
            resource_types: &[],
            condition_keys: &["lambda:FunctionArn"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateFunction",
            description: "Grants permission to create an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_CreateFunction.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &["lambda:Layer"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAlias",
            description: "Grants permission to delete an AWS Lambda function alias",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteAlias.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteEventSourceMapping",
            description: "Grants permission to delete an AWS Lambda event source mapping",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteEventSourceMapping.html",
            resource_types: &[ResourceRef::required("eventSourceMapping")],
            condition_keys: &["lambda:FunctionArn"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteFunction",
            description: "Grants permission to delete an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteFunction.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteFunctionConcurrency",
            description: "Grants permission to remove a concurrent execution limit from an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteFunctionConcurrency.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteFunctionEventInvokeConfig",
            description: "Grants permission to delete the configuration for asynchronous invocation for an AWS Lambda function, version, or alias",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteFunctionEventInvokeConfig.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteLayerVersion",
            description: "Grants permission to delete a version of an AWS Lambda layer",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteLayerVersion.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteProvisionedConcurrencyConfig",
            description: "Grants permission to delete the provisioned concurrency configuration for an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_DeleteProvisionedConcurrencyConfig.html",
            resource_types: &[ResourceRef::optional("function alias"), ResourceRef::optional("function version")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DisableReplication",
            description: "Grants permission to disable replication for a Lambda@Edge function",
            access_level: AccessLevel::PermissionsManagement,
            url: "",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "EnableReplication",
            description: "Grants permission to enable replication for a Lambda@Edge function",
            access_level: AccessLevel::PermissionsManagement,
            url: "",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAccountSettings",
            description: "Grants permission to view details about an account's limits and usage in an AWS Region",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetAccountSettings.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAlias",
            description: "Grants permission to view details about an AWS Lambda function alias",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetAlias.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetEventSourceMapping",
            description: "Grants permission to view details about an AWS Lambda event source mapping",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetEventSourceMapping.html",
            resource_types: &[ResourceRef::required("eventSourceMapping")],
            condition_keys: &["lambda:FunctionArn"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFunction",
            description: "Grants permission to view details about an AWS Lambda function",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetFunction.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFunctionConcurrency",
            description: "Grants permission to view details about the reserved concurrency configuration for a function",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetFunctionConcurrency.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFunctionConfiguration",
            description: "Grants permission to view details about the version-specific settings of an AWS Lambda function or version",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetFunctionConfiguration.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetFunctionEventInvokeConfig",
            description: "Grants permission to view the configuration for asynchronous invocation for a function, version, or alias",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetFunctionEventInvokeConfig.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetLayerVersion",
            description: "Grants permission to view details about a version of an AWS Lambda layer",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetLayerVersion.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetLayerVersionByArn",
            description: "Grants permission to view details about a version of an AWS Lambda layer",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetLayerVersionByArn.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetLayerVersionPolicy",
            description: "Grants permission to view the resource-based policy for a version of an AWS Lambda layer",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetLayerVersionPolicy.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetPolicy",
            description: "Grants permission to view the resource-based policy for an AWS Lambda function, version, or alias",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetPolicy.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetProvisionedConcurrencyConfig",
            description: "Grants permission to view the provisioned concurrency configuration for an AWS Lambda function's alias or version",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_GetProvisionedConcurrencyConfig.html",
            resource_types: &[ResourceRef::optional("function alias"), ResourceRef::optional("function version")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "InvokeAsync",
            description: "(Deprecated) Grants permission to invoke a function asynchronously",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_InvokeAsync.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "InvokeFunction",
            description: "Grants permission to invoke an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_Invoke.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAliases",
            description: "Grants permission to retrieve a list of aliases for an AWS Lambda function",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListAliases.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListEventSourceMappings",
            description: "Grants permission to retrieve a list of AWS Lambda event source mappings",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListEventSourceMappings.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListFunctionEventInvokeConfigs",
            description: "Grants permission to retrieve a list of configurations for asynchronous invocation for a function",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListFunctionEventInvokeConfigs.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListFunctions",
            description: "Grants permission to retrieve a list of AWS Lambda functions, with the version-specific configuration of each function",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListFunctions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListLayerVersions",
            description: "Grants permission to retrieve a list of versions of an AWS Lambda layer",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListLayerVersions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListLayers",
            description: "Grants permission to retrieve a list of AWS Lambda layers, with details about the latest version of each layer",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListLayers.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListProvisionedConcurrencyConfigs",
            description: "Grants permission to retrieve a list of provisioned concurrency configurations for an AWS Lambda function",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListProvisionedConcurrencyConfigs.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTags",
            description: "Grants permission to retrieve a list of tags for an AWS Lambda function",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListTags.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListVersionsByFunction",
            description: "Grants permission to retrieve a list of versions for an AWS Lambda function",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_ListVersionsByFunction.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PublishLayerVersion",
            description: "Grants permission to create an AWS Lambda layer",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_PublishLayerVersion.html",
            resource_types: &[ResourceRef::required("layer")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PublishVersion",
            description: "Grants permission to create an AWS Lambda function version",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_PublishVersion.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutFunctionConcurrency",
            description: "Grants permission to configure reserved concurrency for an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_PutFunctionConcurrency.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutFunctionEventInvokeConfig",
            description: "Grants permission to configures options for asynchronous invocation on an AWS Lambda function, version, or alias",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_PutFunctionEventInvokeConfig.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutProvisionedConcurrencyConfig",
            description: "Grants permission to configure provisioned concurrency for an AWS Lambda function's alias or version",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_PutProvisionedConcurrencyConfig.html",
            resource_types: &[ResourceRef::optional("function alias"), ResourceRef::optional("function version")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RemoveLayerVersionPermission",
            description: "Grants permission to remove a statement from the permissions policy for a version of an AWS Lambda layer",
            access_level: AccessLevel::PermissionsManagement,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_RemoveLayerVersionPermission.html",
            resource_types: &[ResourceRef::required("layerVersion")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RemovePermission",
            description: "Grants permission to revoke function-use permission from an AWS service or another account",
            access_level: AccessLevel::PermissionsManagement,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_RemovePermission.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &["lambda:Principal"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Grants permission to add tags to an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_TagResources.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Grants permission to remove tags from an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UntagResource.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateAlias",
            description: "Grants permission to update the configuration of an AWS Lambda function's alias",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UpdateAlias.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateEventSourceMapping",
            description: "Grants permission to update the configuration of an AWS Lambda event source mapping",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UpdateEventSourceMapping.html",
            resource_types: &[ResourceRef::required("eventSourceMapping")],
            condition_keys: &["lambda:FunctionArn"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateFunctionCode",
            description: "Grants permission to update the code of an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UpdateFunctionCode.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateFunctionConfiguration",
            description: "Grants permission to modify the version-specific settings of an AWS Lambda function",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UpdateFunctionConfiguration.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &["lambda:Layer"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateFunctionEventInvokeConfig",
            description: "Grants permission to modify the configuration for asynchronous invocation for an AWS Lambda function, version, or alias",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/API_UpdateFunctionEventInvokeConfig.html",
            resource_types: &[ResourceRef::required("function")],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "function",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "function version",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}:${Version}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "function alias",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}:${Alias}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "layer",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:layer:${LayerName}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "layerVersion",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:layer:${LayerName}:${LayerVersion}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "eventSourceMapping",
            url: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
            arn: "arn:${Partition}:lambda:${Region}:${Account}:event-source-mapping:${UUID}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[
        ConditionKeyMeta {
            key: "lambda:FunctionArn",
            description: "Filters access by the ARN of an AWS Lambda function",
            value_type: ConditionType::Arn,
            default_operator: ConditionOp::ArnEquals,
        },
        ConditionKeyMeta {
            key: "lambda:Layer",
            description: "Filters access by the ARN of an AWS Lambda layer",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "lambda:Principal",
            description: "Filters access by restricting the AWS service or account that can invoke a function",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
    ],
};

service_statement! {
    /// Statement provider for service `lambda` (AWS Lambda).
    Lambda => TABLE
}

impl Lambda {
    service_actions! {
        /// Grants permission to add permissions to the resource-based policy of a version of an AWS Lambda layer
        add_layer_version_permission => "AddLayerVersionPermission";
        /// Grants permission to give an AWS service or another account permission to use an AWS Lambda function
        add_permission => "AddPermission";
        /// Grants permission to create an alias for a Lambda function version
        create_alias => "CreateAlias";
        /// Grants permission to create a mapping between an event source and an AWS Lambda function
        create_event_source_mapping => "CreateEventSourceMapping";
        /// Grants permission to create an AWS Lambda function
        create_function => "CreateFunction";
        /// Grants permission to delete an AWS Lambda function alias
        delete_alias => "DeleteAlias";
        /// Grants permission to delete an AWS Lambda event source mapping
        delete_event_source_mapping => "DeleteEventSourceMapping";
        /// Grants permission to delete an AWS Lambda function
        delete_function => "DeleteFunction";
        /// Grants permission to remove a concurrent execution limit from an AWS Lambda function
        delete_function_concurrency => "DeleteFunctionConcurrency";
        /// Grants permission to delete the configuration for asynchronous invocation for an AWS Lambda function,
        /// version, or alias
        delete_function_event_invoke_config => "DeleteFunctionEventInvokeConfig";
        /// Grants permission to delete a version of an AWS Lambda layer
        delete_layer_version => "DeleteLayerVersion";
        /// Grants permission to delete the provisioned concurrency configuration for an AWS Lambda function
        delete_provisioned_concurrency_config => "DeleteProvisionedConcurrencyConfig";
        /// Grants permission to disable replication for a Lambda@Edge function
        disable_replication => "DisableReplication";
        /// Grants permission to enable replication for a Lambda@Edge function
        enable_replication => "EnableReplication";
        /// Grants permission to view details about an account's limits and usage in an AWS Region
        get_account_settings => "GetAccountSettings";
        /// Grants permission to view details about an AWS Lambda function alias
        get_alias => "GetAlias";
        /// Grants permission to view details about an AWS Lambda event source mapping
        get_event_source_mapping => "GetEventSourceMapping";
        /// Grants permission to view details about an AWS Lambda function
        get_function => "GetFunction";
        /// Grants permission to view details about the reserved concurrency configuration for a function
        get_function_concurrency => "GetFunctionConcurrency";
        /// Grants permission to view details about the version-specific settings of an AWS Lambda function or version
        get_function_configuration => "GetFunctionConfiguration";
        /// Grants permission to view the configuration for asynchronous invocation for a function, version, or alias
        get_function_event_invoke_config => "GetFunctionEventInvokeConfig";
        /// Grants permission to view details about a version of an AWS Lambda layer
        get_layer_version => "GetLayerVersion";
        /// Grants permission to view details about a version of an AWS Lambda layer
        get_layer_version_by_arn => "GetLayerVersionByArn";
        /// Grants permission to view the resource-based policy for a version of an AWS Lambda layer
        get_layer_version_policy => "GetLayerVersionPolicy";
        /// Grants permission to view the resource-based policy for an AWS Lambda function, version, or alias
        get_policy => "GetPolicy";
        /// Grants permission to view the provisioned concurrency configuration for an AWS Lambda function's alias or
        /// version
        get_provisioned_concurrency_config => "GetProvisionedConcurrencyConfig";
        /// (Deprecated) Grants permission to invoke a function asynchronously
        invoke_async => "InvokeAsync";
        /// Grants permission to invoke an AWS Lambda function
        invoke_function => "InvokeFunction";
        /// Grants permission to retrieve a list of aliases for an AWS Lambda function
        list_aliases => "ListAliases";
        /// Grants permission to retrieve a list of AWS Lambda event source mappings
        list_event_source_mappings => "ListEventSourceMappings";
        /// Grants permission to retrieve a list of configurations for asynchronous invocation for a function
        list_function_event_invoke_configs => "ListFunctionEventInvokeConfigs";
        /// Grants permission to retrieve a list of AWS Lambda functions, with the version-specific configuration of
        /// each function
        list_functions => "ListFunctions";
        /// Grants permission to retrieve a list of versions of an AWS Lambda layer
        list_layer_versions => "ListLayerVersions";
        /// Grants permission to retrieve a list of AWS Lambda layers, with details about the latest version of each
        /// layer
        list_layers => "ListLayers";
        /// Grants permission to retrieve a list of provisioned concurrency configurations for an AWS Lambda function
        list_provisioned_concurrency_configs => "ListProvisionedConcurrencyConfigs";
        /// Grants permission to retrieve a list of tags for an AWS Lambda function
        list_tags => "ListTags";
        /// Grants permission to retrieve a list of versions for an AWS Lambda function
        list_versions_by_function => "ListVersionsByFunction";
        /// Grants permission to create an AWS Lambda layer
        publish_layer_version => "PublishLayerVersion";
        /// Grants permission to create an AWS Lambda function version
        publish_version => "PublishVersion";
        /// Grants permission to configure reserved concurrency for an AWS Lambda function
        put_function_concurrency => "PutFunctionConcurrency";
        /// Grants permission to configures options for asynchronous invocation on an AWS Lambda function, version, or
        /// alias
        put_function_event_invoke_config => "PutFunctionEventInvokeConfig";
        /// Grants permission to configure provisioned concurrency for an AWS Lambda function's alias or version
        put_provisioned_concurrency_config => "PutProvisionedConcurrencyConfig";
        /// Grants permission to remove a statement from the permissions policy for a version of an AWS Lambda layer
        remove_layer_version_permission => "RemoveLayerVersionPermission";
        /// Grants permission to revoke function-use permission from an AWS service or another account
        remove_permission => "RemovePermission";
        /// Grants permission to add tags to an AWS Lambda function
        tag_resource => "TagResource";
        /// Grants permission to remove tags from an AWS Lambda function
        untag_resource => "UntagResource";
        /// Grants permission to update the configuration of an AWS Lambda function's alias
        update_alias => "UpdateAlias";
        /// Grants permission to update the configuration of an AWS Lambda event source mapping
        update_event_source_mapping => "UpdateEventSourceMapping";
        /// Grants permission to update the code of an AWS Lambda function
        update_function_code => "UpdateFunctionCode";
        /// Grants permission to modify the version-specific settings of an AWS Lambda function
        update_function_configuration => "UpdateFunctionConfiguration";
        /// Grants permission to modify the configuration for asynchronous invocation for an AWS Lambda function,
        /// version, or alias
        update_function_event_invoke_config => "UpdateFunctionEventInvokeConfig";
    }

    service_resources! {
        /// Adds a resource of type `function` to the statement.
        on_function => "function" (function_name => "FunctionName");
        /// Adds a resource of type `function version` to the statement.
        on_function_version => "function version" (function_name => "FunctionName", version => "Version");
        /// Adds a resource of type `function alias` to the statement.
        on_function_alias => "function alias" (function_name => "FunctionName", alias => "Alias");
        /// Adds a resource of type `layer` to the statement.
        on_layer => "layer" (layer_name => "LayerName");
        /// Adds a resource of type `layerVersion` to the statement.
        on_layer_version => "layerVersion" (layer_name => "LayerName", layer_version => "LayerVersion");
        /// Adds a resource of type `eventSourceMapping` to the statement.
        on_event_source_mapping => "eventSourceMapping" (uuid => "UUID");
    }

    /// Filters access by the ARN of an AWS Lambda function
    pub fn if_function_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("lambda:FunctionArn", value, operator)
    }

    /// Filters access by the ARN of an AWS Lambda layer
    pub fn if_layer<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("lambda:Layer", value, operator)
    }

    /// Filters access by restricting the AWS service or account that can invoke a function
    pub fn if_principal<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("lambda:Principal", value, operator)
    }
}
