use {
    crate::{
        service::{ActionMeta, ArnConvention, ConditionKeyMeta, ConditionType, ResourceRef, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel, ConditionOp, ConditionValue, Operator,
        Statement,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "ecs",
    name: "Amazon Elastic Container Service",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonelasticcontainerservice.html",
    arn_convention: ArnConvention::Empty,
    actions: &[
        ActionMeta {
            name: "CreateCluster",
            description: "Creates a new Amazon ECS cluster.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_CreateCluster.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateService",
            description: "Runs and maintains a desired number of tasks from a specified task definition.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_CreateService.html",
            resource_types: &[ResourceRef::required("service")],
            condition_keys: &["ecs:cluster", "ecs:task-definition", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateTaskSet",
            description: "Creates a new Amazon ECS task set.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_CreateTaskSet.html",
            resource_types: &[],
            condition_keys: &["ecs:cluster", "ecs:service", "ecs:task-definition"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAccountSetting",
            description: "Modifies the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user for an account. You can specify whether the new ARN and resource ID format are disabled for new resources that are created.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeleteAccountSetting.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAttributes",
            description: "Deletes one or more custom attributes from an Amazon ECS resource.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeleteAttributes.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteCluster",
            description: "Deletes the specified cluster.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeleteCluster.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteService",
            description: "Deletes a specified service within a cluster.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeleteService.html",
            resource_types: &[ResourceRef::required("service")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteTaskSet",
            description: "Deletes the specified task set.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeleteTaskSet.html",
            resource_types: &[ResourceRef::required("task-set")],
            condition_keys: &["ecs:cluster", "ecs:service"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeregisterContainerInstance",
            description: "Deregisters an Amazon ECS container instance from the specified cluster.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeregisterContainerInstance.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeregisterTaskDefinition",
            description: "Deregisters the specified task definition by family and revision.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DeregisterTaskDefinition.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeClusters",
            description: "Describes one or more of your clusters.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeClusters.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeContainerInstances",
            description: "Describes Amazon ECS container instances.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeContainerInstances.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeServices",
            description: "Describes the specified services running in your cluster.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeServices.html",
            resource_types: &[ResourceRef::required("service")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTaskDefinition",
            description: "Describes a task definition. You can specify a family and revision to find information about a specific task definition, or you can simply specify the family to find the latest ACTIVE revision in that family.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeTaskDefinition.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTaskSets",
            description: "Describes Amazon ECS task sets.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeTaskSets.html",
            resource_types: &[ResourceRef::required("task-set")],
            condition_keys: &["ecs:cluster", "ecs:service"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DescribeTasks",
            description: "Describes a specified task or tasks.",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DescribeTasks.html",
            resource_types: &[ResourceRef::required("task")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DiscoverPollEndpoint",
            description: "Returns an endpoint for the Amazon ECS agent to poll for updates.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_DiscoverPollEndpoint.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAccountSettings",
            description: "Lists the account settings for an Amazon ECS resource for a specified principal.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListAccountSettings.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAttributes",
            description: "Lists the attributes for Amazon ECS resources within a specified target type and cluster.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListAttributes.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListClusters",
            description: "Returns a list of existing clusters.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListClusters.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListContainerInstances",
            description: "Returns a list of container instances in a specified cluster.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListContainerInstances.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListServices",
            description: "Lists the services that are running in a specified cluster.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListServices.html",
            resource_types: &[],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "List tags for the specified resource.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListTagsForResource.html",
            resource_types: &[
                ResourceRef::optional("cluster"),
                ResourceRef::optional("container-instance"),
                ResourceRef::optional("task"),
                ResourceRef::optional("task-definition"),
            ],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTaskDefinitionFamilies",
            description: "Returns a list of task definition families that are registered to your account (which may include task definition families that no longer have any ACTIVE task definitions).",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListServices.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTaskDefinitions",
            description: "Returns a list of task definitions that are registered to your account.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListTaskDefinitions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTasks",
            description: "Returns a list of tasks for a specified cluster.",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListTasks.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "Poll",
            description: "Grants permission to an agent to connect with the Amazon ECS service to report status and get commands.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/instance_IAM_role.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutAccountSetting",
            description: "Modifies the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user for an account. You can specify whether the new ARN and resource ID format are enabled for new resources that are created. Enabling this setting is required to use new Amazon ECS features such as resource tagging.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_PutAccountSetting.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutAccountSettingDefault",
            description: "Modifies the ARN and resource ID format of a resource type for all IAM users on an account for which no individual account setting has been set. Enabling this setting is required to use new Amazon ECS features such as resource tagging.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_PutAccountSettingDefault.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutAttributes",
            description: "Create or update an attribute on an Amazon ECS resource.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_PutAttributes.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RegisterContainerInstance",
            description: "Registers an EC2 instance into the specified cluster.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_RegisterContainerInstance.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RegisterTaskDefinition",
            description: "Registers a new task definition from the supplied family and containerDefinitions.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_RegisterTaskDefinition.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "RunTask",
            description: "Start a task using random placement and the default Amazon ECS scheduler.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_RunTask.html",
            resource_types: &[ResourceRef::required("task-definition")],
            condition_keys: &["ecs:cluster", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartTask",
            description: "Starts a new task from the specified task definition on the specified container instance or instances.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_StartTask.html",
            resource_types: &[ResourceRef::required("task-definition")],
            condition_keys: &["ecs:cluster", "ecs:container-instances", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartTelemetrySession",
            description: "Grants permission to start a telemetry session.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/cloudwatch-metrics.html#enable_cloudwatch",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StopTask",
            description: "Stops a running task.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_StopTask.html",
            resource_types: &[ResourceRef::required("task")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "SubmitAttachmentStateChanges",
            description: "Sent to acknowledge that attachments changed states.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_SubmitAttachmentStateChanges.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "SubmitContainerStateChange",
            description: "Sent to acknowledge that a container changed states.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_SubmitContainerStateChange.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "SubmitTaskStateChange",
            description: "Sent to acknowledge that a task changed states.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_SubmitTaskStateChange.html",
            resource_types: &[ResourceRef::required("cluster")],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Tags the specified resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_TagResource.html",
            resource_types: &[
                ResourceRef::optional("cluster"),
                ResourceRef::optional("container-instance"),
                ResourceRef::optional("service"),
                ResourceRef::optional("task"),
                ResourceRef::optional("task-definition"),
            ],
            condition_keys: &["aws:TagKeys", "aws:RequestTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Untags the specified resource.",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UntagResource.html",
            resource_types: &[
                ResourceRef::optional("cluster"),
                ResourceRef::optional("container-instance"),
                ResourceRef::optional("service"),
                ResourceRef::optional("task"),
                ResourceRef::optional("task-definition"),
            ],
            condition_keys: &["aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContainerAgent",
            description: "Updates the Amazon ECS container agent on a specified container instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UpdateContainerAgent.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateContainerInstancesState",
            description: "Enables the user to modify the status of an Amazon ECS container instance.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UpdateContainerInstancesState.html",
            resource_types: &[ResourceRef::required("container-instance")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateService",
            description: "Modifies the desired count, deployment configuration, or task definition used in a service.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UpdateService.html",
            resource_types: &[ResourceRef::required("service")],
            condition_keys: &["ecs:cluster", "ecs:task-definition"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateServicePrimaryTaskSet",
            description: "Modifies the primary task set used in a service.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UpdateServicePrimaryTaskSet.html",
            resource_types: &[ResourceRef::required("service")],
            condition_keys: &["ecs:cluster"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateTaskSet",
            description: "Updates the specified task set.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_UpdateTaskSet.html",
            resource_types: &[ResourceRef::required("task-set")],
            condition_keys: &["ecs:cluster", "ecs:service"],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "cluster",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/ECS_clusters.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:cluster/${ClusterName}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "container-instance",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/ECS_instances.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:container-instance/${ContainerInstanceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "service",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/ecs_services.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:service/${ServiceName}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "task",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/scheduling_tasks.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:task/${TaskId}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "task-definition",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/task_definitions.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:task-definition/${TaskDefinitionFamilyName}:${TaskDefinitionRevisionNumber}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "task-set",
            url: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/task_sets.html",
            arn: "arn:${Partition}:ecs:${Region}:${Account}:task-set/${ClusterName}/${ServiceName}/${TaskSetId}",
            condition_keys: &["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[
        ConditionKeyMeta {
            key: "ecs:ResourceTag/${TagKey}",
            description: "",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "ecs:cluster",
            description: "The ARN of an ECS cluster.",
            value_type: ConditionType::Arn,
            default_operator: ConditionOp::ArnEquals,
        },
        ConditionKeyMeta {
            key: "ecs:container-instances",
            description: "The ARN of an ECS container instance.",
            value_type: ConditionType::Arn,
            default_operator: ConditionOp::ArnEquals,
        },
        ConditionKeyMeta {
            key: "ecs:service",
            description: "The ARN of an ECS service.",
            value_type: ConditionType::Arn,
            default_operator: ConditionOp::ArnEquals,
        },
        ConditionKeyMeta {
            key: "ecs:task-definition",
            description: "The ARN of an ECS task definition.",
            value_type: ConditionType::Arn,
            default_operator: ConditionOp::ArnEquals,
        },
    ],
};

service_statement! {
    /// Statement provider for service `ecs` (Amazon Elastic Container Service).
    Ecs => TABLE
}

impl Ecs {
    service_actions! {
        /// Creates a new Amazon ECS cluster.
        create_cluster => "CreateCluster";
        /// Runs and maintains a desired number of tasks from a specified task definition.
        create_service => "CreateService";
        /// Creates a new Amazon ECS task set.
        create_task_set => "CreateTaskSet";
        /// Modifies the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user
        /// for an account. You can specify whether the new ARN and resource ID format are disabled for new resources
        /// that are created.
        delete_account_setting => "DeleteAccountSetting";
        /// Deletes one or more custom attributes from an Amazon ECS resource.
        delete_attributes => "DeleteAttributes";
        /// Deletes the specified cluster.
        delete_cluster => "DeleteCluster";
        /// Deletes a specified service within a cluster.
        delete_service => "DeleteService";
        /// Deletes the specified task set.
        delete_task_set => "DeleteTaskSet";
        /// Deregisters an Amazon ECS container instance from the specified cluster.
        deregister_container_instance => "DeregisterContainerInstance";
        /// Deregisters the specified task definition by family and revision.
        deregister_task_definition => "DeregisterTaskDefinition";
        /// Describes one or more of your clusters.
        describe_clusters => "DescribeClusters";
        /// Describes Amazon ECS container instances.
        describe_container_instances => "DescribeContainerInstances";
        /// Describes the specified services running in your cluster.
        describe_services => "DescribeServices";
        /// Describes a task definition. You can specify a family and revision to find information about a specific task
        /// definition, or you can simply specify the family to find the latest ACTIVE revision in that family.
        describe_task_definition => "DescribeTaskDefinition";
        /// Describes Amazon ECS task sets.
        describe_task_sets => "DescribeTaskSets";
        /// Describes a specified task or tasks.
        describe_tasks => "DescribeTasks";
        /// Returns an endpoint for the Amazon ECS agent to poll for updates.
        discover_poll_endpoint => "DiscoverPollEndpoint";
        /// Lists the account settings for an Amazon ECS resource for a specified principal.
        list_account_settings => "ListAccountSettings";
        /// Lists the attributes for Amazon ECS resources within a specified target type and cluster.
        list_attributes => "ListAttributes";
        /// Returns a list of existing clusters.
        list_clusters => "ListClusters";
        /// Returns a list of container instances in a specified cluster.
        list_container_instances => "ListContainerInstances";
        /// Lists the services that are running in a specified cluster.
        list_services => "ListServices";
        /// List tags for the specified resource.
        list_tags_for_resource => "ListTagsForResource";
        /// Returns a list of task definition families that are registered to your account (which may include task
        /// definition families that no longer have any ACTIVE task definitions).
        list_task_definition_families => "ListTaskDefinitionFamilies";
        /// Returns a list of task definitions that are registered to your account.
        list_task_definitions => "ListTaskDefinitions";
        /// Returns a list of tasks for a specified cluster.
        list_tasks => "ListTasks";
        /// Grants permission to an agent to connect with the Amazon ECS service to report status and get commands.
        poll => "Poll";
        /// Modifies the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user
        /// for an account. You can specify whether the new ARN and resource ID format are enabled for new resources
        /// that are created. Enabling this setting is required to use new Amazon ECS features such as resource tagging.
        put_account_setting => "PutAccountSetting";
        /// Modifies the ARN and resource ID format of a resource type for all IAM users on an account for which no
        /// individual account setting has been set. Enabling this setting is required to use new Amazon ECS features
        /// such as resource tagging.
        put_account_setting_default => "PutAccountSettingDefault";
        /// Create or update an attribute on an Amazon ECS resource.
        put_attributes => "PutAttributes";
        /// Registers an EC2 instance into the specified cluster.
        register_container_instance => "RegisterContainerInstance";
        /// Registers a new task definition from the supplied family and containerDefinitions.
        register_task_definition => "RegisterTaskDefinition";
        /// Start a task using random placement and the default Amazon ECS scheduler.
        run_task => "RunTask";
        /// Starts a new task from the specified task definition on the specified container instance or instances.
        start_task => "StartTask";
        /// Grants permission to start a telemetry session.
        start_telemetry_session => "StartTelemetrySession";
        /// Stops a running task.
        stop_task => "StopTask";
        /// Sent to acknowledge that attachments changed states.
        submit_attachment_state_changes => "SubmitAttachmentStateChanges";
        /// Sent to acknowledge that a container changed states.
        submit_container_state_change => "SubmitContainerStateChange";
        /// Sent to acknowledge that a task changed states.
        submit_task_state_change => "SubmitTaskStateChange";
        /// Tags the specified resource.
        tag_resource => "TagResource";
        /// Untags the specified resource.
        untag_resource => "UntagResource";
        /// Updates the Amazon ECS container agent on a specified container instance.
        update_container_agent => "UpdateContainerAgent";
        /// Enables the user to modify the status of an Amazon ECS container instance.
        update_container_instances_state => "UpdateContainerInstancesState";
        /// Modifies the desired count, deployment configuration, or task definition used in a service.
        update_service => "UpdateService";
        /// Modifies the primary task set used in a service.
        update_service_primary_task_set => "UpdateServicePrimaryTaskSet";
        /// Updates the specified task set.
        update_task_set => "UpdateTaskSet";
    }

    service_resources! {
        /// Adds a resource of type `cluster` to the statement.
        on_cluster => "cluster" (cluster_name => "ClusterName");
        /// Adds a resource of type `container-instance` to the statement.
        on_container_instance => "container-instance" (container_instance_id => "ContainerInstanceId");
        /// Adds a resource of type `service` to the statement.
        on_service => "service" (service_name => "ServiceName");
        /// Adds a resource of type `task` to the statement.
        on_task => "task" (task_id => "TaskId");
        /// Adds a resource of type `task-definition` to the statement.
        on_task_definition => "task-definition" (task_definition_family_name => "TaskDefinitionFamilyName", task_definition_revision_number => "TaskDefinitionRevisionNumber");
        /// Adds a resource of type `task-set` to the statement.
        on_task_set => "task-set" (cluster_name => "ClusterName", service_name => "ServiceName", task_set_id => "TaskSetId");
    }

    pub fn if_resource_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.tag_condition("ecs:ResourceTag/${TagKey}", tag_key, value, operator)
    }

    /// The ARN of an ECS cluster.
    pub fn if_cluster<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("ecs:cluster", value, operator)
    }

    /// The ARN of an ECS container instance.
    pub fn if_container_instances<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("ecs:container-instances", value, operator)
    }

    /// The ARN of an ECS service.
    pub fn if_service<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("ecs:service", value, operator)
    }

    /// The ARN of an ECS task definition.
    pub fn if_task_definition<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("ecs:task-definition", value, operator)
    }
}
