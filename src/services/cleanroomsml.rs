use {
    crate::{
        service::{ActionMeta, ArnConvention, ConditionKeyMeta, ConditionType, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel, ConditionOp, ConditionValue, Operator,
        Statement,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "cleanrooms-ml",
    name: "AWS Clean Rooms ML",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscleanroomsml.html",
    arn_convention: ArnConvention::Instance,
    actions: &[
        ActionMeta {
            name: "CreateAudienceModel",
            description: "Grants permission to create an audience model",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_CreateAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateConfiguredAudienceModel",
            description: "Grants permission to create a configured audience model",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_CreateConfiguredAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateTrainingDataset",
            description: "Grants permission to create a training dataset, or seed audience. In Clean Rooms ML, the TrainingDataset is metadata that points to a Glue table, which is read only during AudienceModel creation",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_CreateTrainingDataset.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAudienceGenerationJob",
            description: "Grants permission to delete the specified audience generation job, and removes all data associated with the job",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_DeleteAudienceGenerationJob.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAudienceModel",
            description: "Grants permission to delete the specified audience generation job, and removes all data associated with the job",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_DeleteAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteConfiguredAudienceModel",
            description: "Grants permission to delete the specified configured audience model",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_DeleteConfiguredAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteConfiguredAudienceModelPolicy",
            description: "Grants permission to delete the specified configured audience model policy",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_DeleteConfiguredAudienceModelPolicy.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteTrainingDataset",
            description: "Grants permission to delete a training dataset",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_DeleteTrainingDataset.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAudienceGenerationJob",
            description: "Grants permission to return information about an audience generation job",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_GetAudienceGenerationJob.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAudienceModel",
            description: "Grants permission to return information about an audience model",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_GetAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetConfiguredAudienceModel",
            description: "Grants permission to return information about a configured audience model",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_GetConfiguredAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetConfiguredAudienceModelPolicy",
            description: "Grants permission to return information about a configured audience model policy",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_GetConfiguredAudienceModelPolicy.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetTrainingDataset",
            description: "Grants permission to return information about a training dataset",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_GetTrainingDataset.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAudienceExportJobs",
            description: "Grants permission to return a list of the audience export jobs",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListAudienceExportJobs.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAudienceGenerationJobs",
            description: "Grants permission to return a list of audience generation jobs",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListAudienceGenerationJobs.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAudienceModels",
            description: "Grants permission to return a list of audience models",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListAudienceModels.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListConfiguredAudienceModels",
            description: "Grants permission to return a list of configured audience models",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListConfiguredAudienceModels.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "Grants permission to return a list of tags for a provided resource",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListTagsForResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTrainingDatasets",
            description: "Grants permission to return a list of training datasets",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ListTrainingDatasets.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "PutConfiguredAudienceModelPolicy",
            description: "Grants permission to create or update the resource policy for a configured audience model",
            access_level: AccessLevel::PermissionsManagement,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_PutConfiguredAudienceModelPolicy.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartAudienceExportJob",
            description: "Grants permission to export an audience of a specified size after you have generated an audience",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_StartAudienceExportJob.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartAudienceGenerationJob",
            description: "Grants permission to start the audience generation job",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_StartAudienceGenerationJob.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys", "cleanrooms-ml:CollaborationId"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Grants permission to tag a specific resource",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_TagResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys", "aws:RequestTag/${TagKey}", "aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UnTagResource",
            description: "Grants permission to untag a specific resource",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_UntagResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateConfiguredAudienceModel",
            description: "Grants permission to update a configured audience model.",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_UpdateConfiguredAudienceModel.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "trainingdataset",
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_TrainingDatasetSummary.html",
            arn: "arn:${Partition}:cleanrooms-ml:${Region}:${Account}:training-dataset/${ResourceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "audiencemodel",
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_AudienceModelSummary.html",
            arn: "arn:${Partition}:cleanrooms-ml:${Region}:${Account}:audience-model/${ResourceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "configuredaudiencemodel",
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_ConfiguredAudienceModelSummary.html",
            arn: "arn:${Partition}:cleanrooms-ml:${Region}:${Account}:configured-audience-model/${ResourceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "audiencegenerationjob",
            url: "https://docs.aws.amazon.com/cleanrooms-ml/latest/APIReference/API_AudienceGenerationJobSummary.html",
            arn: "arn:${Partition}:cleanrooms-ml:${Region}:${Account}:audience-generation-job/${ResourceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[
        ConditionKeyMeta {
            key: "cleanrooms-ml:CollaborationId",
            description: "Filters access by clean rooms collaboration id",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
    ],
};

service_statement! {
    /// Statement provider for service `cleanrooms-ml` (AWS Clean Rooms ML).
    CleanRoomsMl => TABLE
}

impl CleanRoomsMl {
    service_actions! {
        /// Grants permission to create an audience model
        to_create_audience_model => "CreateAudienceModel";
        /// Grants permission to create a configured audience model
        to_create_configured_audience_model => "CreateConfiguredAudienceModel";
        /// Grants permission to create a training dataset, or seed audience. In Clean Rooms ML, the TrainingDataset is
        /// metadata that points to a Glue table, which is read only during AudienceModel creation
        to_create_training_dataset => "CreateTrainingDataset";
        /// Grants permission to delete the specified audience generation job, and removes all data associated with the
        /// job
        to_delete_audience_generation_job => "DeleteAudienceGenerationJob";
        /// Grants permission to delete the specified audience generation job, and removes all data associated with the
        /// job
        to_delete_audience_model => "DeleteAudienceModel";
        /// Grants permission to delete the specified configured audience model
        to_delete_configured_audience_model => "DeleteConfiguredAudienceModel";
        /// Grants permission to delete the specified configured audience model policy
        to_delete_configured_audience_model_policy => "DeleteConfiguredAudienceModelPolicy";
        /// Grants permission to delete a training dataset
        to_delete_training_dataset => "DeleteTrainingDataset";
        /// Grants permission to return information about an audience generation job
        to_get_audience_generation_job => "GetAudienceGenerationJob";
        /// Grants permission to return information about an audience model
        to_get_audience_model => "GetAudienceModel";
        /// Grants permission to return information about a configured audience model
        to_get_configured_audience_model => "GetConfiguredAudienceModel";
        /// Grants permission to return information about a configured audience model policy
        to_get_configured_audience_model_policy => "GetConfiguredAudienceModelPolicy";
        /// Grants permission to return information about a training dataset
        to_get_training_dataset => "GetTrainingDataset";
        /// Grants permission to return a list of the audience export jobs
        to_list_audience_export_jobs => "ListAudienceExportJobs";
        /// Grants permission to return a list of audience generation jobs
        to_list_audience_generation_jobs => "ListAudienceGenerationJobs";
        /// Grants permission to return a list of audience models
        to_list_audience_models => "ListAudienceModels";
        /// Grants permission to return a list of configured audience models
        to_list_configured_audience_models => "ListConfiguredAudienceModels";
        /// Grants permission to return a list of tags for a provided resource
        to_list_tags_for_resource => "ListTagsForResource";
        /// Grants permission to return a list of training datasets
        to_list_training_datasets => "ListTrainingDatasets";
        /// Grants permission to create or update the resource policy for a configured audience model
        to_put_configured_audience_model_policy => "PutConfiguredAudienceModelPolicy";
        /// Grants permission to export an audience of a specified size after you have generated an audience
        to_start_audience_export_job => "StartAudienceExportJob";
        /// Grants permission to start the audience generation job
        to_start_audience_generation_job => "StartAudienceGenerationJob";
        /// Grants permission to tag a specific resource
        to_tag_resource => "TagResource";
        /// Grants permission to untag a specific resource
        to_un_tag_resource => "UnTagResource";
        /// Grants permission to update a configured audience model.
        to_update_configured_audience_model => "UpdateConfiguredAudienceModel";
    }

    service_resources! {
        /// Adds a resource of type `trainingdataset` to the statement.
        on_trainingdataset => "trainingdataset" (resource_id => "ResourceId");
        /// Adds a resource of type `audiencemodel` to the statement.
        on_audiencemodel => "audiencemodel" (resource_id => "ResourceId");
        /// Adds a resource of type `configuredaudiencemodel` to the statement.
        on_configuredaudiencemodel => "configuredaudiencemodel" (resource_id => "ResourceId");
        /// Adds a resource of type `audiencegenerationjob` to the statement.
        on_audiencegenerationjob => "audiencegenerationjob" (resource_id => "ResourceId");
    }

    /// Filters access by clean rooms collaboration id
    pub fn if_collaboration_id<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("cleanrooms-ml:CollaborationId", value, operator)
    }
}
