use {
    crate::{
        service::{ActionMeta, ArnConvention, ConditionKeyMeta, ConditionType, ResourceTypeMeta, ServiceTable},
        service_actions, service_resources, service_statement, AccessLevel, ConditionOp, ConditionValue, Operator,
        Statement,
    },
};

pub(crate) static TABLE: ServiceTable = ServiceTable {
    prefix: "omics",
    name: "AWS HealthOmics",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awshealthomics.html",
    arn_convention: ArnConvention::Wildcard,
    actions: &[
        ActionMeta {
            name: "AbortMultipartReadSetUpload",
            description: "Grants permission to abort multipart read set uploads",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_AbortMultipartReadSetUpload.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "AcceptShare",
            description: "Grants permission to accept a share",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_AcceptShare.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "BatchDeleteReadSet",
            description: "Grants permission to batch delete Read Sets in the given Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_BatchDeleteReadSet.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CancelAnnotationImportJob",
            description: "Grants permission to cancel an Annotation Import Job",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CancelAnnotationImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CancelRun",
            description: "Grants permission to cancel a workflow run and stop all workflow tasks",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CancelRun.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CancelVariantImportJob",
            description: "Grants permission to cancel a Variant Import Job",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CancelVariantImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CompleteMultipartReadSetUpload",
            description: "Grants permission to complete a multipart read set upload",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CompleteMultipartReadSetUpload.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateAnnotationStore",
            description: "Grants permission to create an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateAnnotationStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateAnnotationStoreVersion",
            description: "Grants permission to create a Version in an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateAnnotationStoreVersion.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateMultipartReadSetUpload",
            description: "Grants permission to create a multipart read set upload",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateMultipartReadSetUpload.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateReferenceStore",
            description: "Grants permission to create a Reference Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateReferenceStore.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateRunGroup",
            description: "Grants permission to create a new workflow run group",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateRunGroup.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateSequenceStore",
            description: "Grants permission to create a Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateSequenceStore.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateShare",
            description: "Grants permission to create a share",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateShare.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateVariantStore",
            description: "Grants permission to create a Variant Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateVariantStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "CreateWorkflow",
            description: "Grants permission to create a new workflow with a workflow definition and template of workflow parameters",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_CreateWorkflow.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAnnotationStore",
            description: "Grants permission to delete an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteAnnotationStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteAnnotationStoreVersions",
            description: "Grants permission to delete Versions in an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteAnnotationStoreVersions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteReference",
            description: "Grants permission to delete a Reference in the given Reference Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteReference.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteReferenceStore",
            description: "Grants permission to delete a Reference Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteReferenceStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteRun",
            description: "Grants permission to delete a workflow run",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteRun.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteRunGroup",
            description: "Grants permission to delete a workflow run group",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteRunGroup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteSequenceStore",
            description: "Grants permission to delete a Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteSequenceStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteShare",
            description: "Grants permission to delete a share",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteShare.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteVariantStore",
            description: "Grants permission to delete a Variant Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteVariantStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "DeleteWorkflow",
            description: "Grants permission to delete a workflow",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_DeleteWorkflow.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAnnotationImportJob",
            description: "Grants permission to get the status of an Annotation Import Job",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetAnnotationImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAnnotationStore",
            description: "Grants permission to get detailed information about an Annotation Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetAnnotationStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetAnnotationStoreVersion",
            description: "Grants permission to get detailed information about a version in an Annotation Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetAnnotationStoreVersion.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReadSet",
            description: "Grants permission to get a Read Set in the given Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReadSet.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReadSetActivationJob",
            description: "Grants permission to get details about a Read Set activation job for the given Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReadSetActivationJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReadSetExportJob",
            description: "Grants permission to get details about a Read Set export job for the given Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReadSetExportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReadSetImportJob",
            description: "Grants permission to get details about a Read Set import job for the given Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReadSetImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReadSetMetadata",
            description: "Grants permission to get details about a Read Set in the given Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReadSetMetadata.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReference",
            description: "Grants permission to get a Reference in the given Reference Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReference.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReferenceImportJob",
            description: "Grants permission to get details about a Reference import job for the given Reference Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReferenceImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReferenceMetadata",
            description: "Grants permission to get details about a Reference in the given Reference Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReferenceMetadata.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetReferenceStore",
            description: "Grants permission to get details about a Reference Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetReferenceStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetRun",
            description: "Grants permission to retrieve workflow run details",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetRun.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetRunGroup",
            description: "Grants permission to retrieve workflow run group details",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetRunGroup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetRunTask",
            description: "Grants permission to retrieve workflow task details",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetRunTask.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetSequenceStore",
            description: "Grants permission to get details about a Sequence Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetSequenceStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetShare",
            description: "Grants permission to get detailed information about a Share",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetShare.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetVariantImportJob",
            description: "Grants permission to get the status of a Variant Import Job",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetVariantImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetVariantStore",
            description: "Grants permission to get detailed information about a Variant Store",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetVariantStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "GetWorkflow",
            description: "Grants permission to retrieve workflow details",
            access_level: AccessLevel::Read,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_GetWorkflow.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAnnotationImportJobs",
            description: "Grants permission to get a list of Annotation Import Jobs",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListAnnotationImportJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAnnotationStoreVersions",
            description: "Grants permission to retrieve a list of information about Versions in an Annotation Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListAnnotationStoreVersions.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListAnnotationStores",
            description: "Grants permission to retrieve a list of information about Annotation Stores",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListAnnotationStores.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListMultipartReadSetUploads",
            description: "Grants permission to list multipart read set uploads",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListMultipartReadSetUploads.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReadSetActivationJobs",
            description: "Grants permission to list Read Set activation jobs for the given Sequence Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReadSetActivationJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReadSetExportJobs",
            description: "Grants permission to list Read Set export jobs for the given Sequence Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReadSetExportJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReadSetImportJobs",
            description: "Grants permission to list Read Set import jobs for the given Sequence Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReadSetImportJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReadSetUploadParts",
            description: "Grants permission to list read set upload parts",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReadSetUploadParts.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReadSets",
            description: "Grants permission to list Read Sets in the given Sequence Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReadSets.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReferenceImportJobs",
            description: "Grants permission to list Reference import jobs for the given Reference Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReferenceImportJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReferenceStores",
            description: "Grants permission to list Reference Stores",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReferenceStores.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListReferences",
            description: "Grants permission to list References in the given Reference Store",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListReferences.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListRunGroups",
            description: "Grants permission to retrieve a list of workflow run groups",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListRunGroups.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListRunTasks",
            description: "Grants permission to retrieve a list of tasks for a workflow run",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListRunTasks.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListRuns",
            description: "Grants permission to retrieve a list of workflow runs",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListRuns.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListSequenceStores",
            description: "Grants permission to list Sequence Stores",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListSequenceStores.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListShares",
            description: "Grants permission to retrieve a list of information about shares",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListShares.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListTagsForResource",
            description: "Grants permission to retrieve a list of resource AWS tags",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListTagsForResource.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListVariantImportJobs",
            description: "Grants permission to get a list of Variant Import Jobs",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListVariantImportJobs.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListVariantStores",
            description: "Grants permission to retrieve a list of metadata for Variant Stores",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListVariantStores.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "ListWorkflows",
            description: "Grants permission to retrieve a list of available workflows",
            access_level: AccessLevel::List,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ListWorkflows.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartAnnotationImportJob",
            description: "Grants permission to import a list of Annotation files to an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartAnnotationImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartReadSetActivationJob",
            description: "Grants permission to start a Read Set activation job from the given Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartReadSetActivationJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartReadSetExportJob",
            description: "Grants permission to start a Read Set export job from the given Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartReadSetExportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartReadSetImportJob",
            description: "Grants permission to start a Read Set import job into the given Sequence Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartReadSetImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartReferenceImportJob",
            description: "Grants permission to start a Reference import job into the given Reference Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartReferenceImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartRun",
            description: "Grants permission to start a workflow run",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartRun.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "StartVariantImportJob",
            description: "Grants permission to import a list of variant files to an Variant Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_StartVariantImportJob.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "TagResource",
            description: "Grants permission to add AWS tags to a resource",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_TagResource.html",
            resource_types: &[],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UntagResource",
            description: "Grants permission to remove resource AWS tags",
            access_level: AccessLevel::Tagging,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UntagResource.html",
            resource_types: &[],
            condition_keys: &["aws:TagKeys"],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateAnnotationStore",
            description: "Grants permission to update information about the Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UpdateAnnotationStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateAnnotationStoreVersion",
            description: "Grants permission to update information about the Version in an Annotation Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UpdateAnnotationStoreVersion.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateRunGroup",
            description: "Grants permission to update a workflow run group",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UpdateRunGroup.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateVariantStore",
            description: "Grants permission to update metadata about the Variant Store",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UpdateVariantStore.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UpdateWorkflow",
            description: "Grants permission to update workflow details",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UpdateWorkflow.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMeta {
            name: "UploadReadSetPart",
            description: "Grants permission to upload read set parts",
            access_level: AccessLevel::Write,
            url: "https://docs.aws.amazon.com/omics/latest/api/API_UploadReadSetPart.html",
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMeta {
            name: "AnnotationImportJob",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_AnnotationImportJobItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:annotationImportJob/${AnnotationImportJobId}",
            condition_keys: &["omics:AnnotationImportJobJobId"],
        },
        ResourceTypeMeta {
            name: "AnnotationStore",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_AnnotationStoreItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:annotationStore/${AnnotationStoreId}",
            condition_keys: &["omics:AnnotationStoreName"],
        },
        ResourceTypeMeta {
            name: "AnnotationStoreVersion",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_AnnotationStoreVersionItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:annotationStore/${AnnotationStoreName}/version/${AnnotationStoreVersionName}",
            condition_keys: &["omics:AnnotationStoreVersionName"],
        },
        ResourceTypeMeta {
            name: "readSet",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ReadSetFiles.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:sequenceStore/${SequenceStoreId}/readSet/${ReadSetId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "reference",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ReferenceFiles.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:referenceStore/${ReferenceStoreId}/reference/${ReferenceId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "referenceStore",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_ReferenceStoreDetail.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:referenceStore/${ReferenceStoreId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "run",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_RunListItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:run/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "runGroup",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_RunGroupListItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:runGroup/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "sequenceStore",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_SequenceStoreDetail.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:sequenceStore/${SequenceStoreId}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceTypeMeta {
            name: "TaggingResource",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_TagResource.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:tag/${TagKey}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "TaskResource",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_TaskListItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:task/${Id}",
            condition_keys: &[],
        },
        ResourceTypeMeta {
            name: "VariantImportJob",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_VariantImportJobItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:variantImportJob/${VariantImportJobId}",
            condition_keys: &["omics:VariantImportJobJobId"],
        },
        ResourceTypeMeta {
            name: "VariantStore",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_VariantStoreItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:variantStore/${VariantStoreId}",
            condition_keys: &["omics:VariantStoreName"],
        },
        ResourceTypeMeta {
            name: "workflow",
            url: "https://docs.aws.amazon.com/omics/latest/api/API_WorkflowListItem.html",
            arn: "arn:${Partition}:omics:${Region}:${Account}:workflow/${Id}",
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[
        ConditionKeyMeta {
            key: "omics:AnnotationImportJobJobId",
            description: "Filters access by a unique resource identifier",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "omics:AnnotationStoreName",
            description: "Filters access by the name of the store",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "omics:AnnotationStoreVersionName",
            description: "Filters access by the name of the annotation store version",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "omics:VariantImportJobJobId",
            description: "Filters access by a unique resource identifier",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
        ConditionKeyMeta {
            key: "omics:VariantStoreName",
            description: "Filters access by the name of the store",
            value_type: ConditionType::String,
            default_operator: ConditionOp::StringLike,
        },
    ],
};

service_statement! {
    /// Statement provider for service `omics` (AWS HealthOmics).
    Omics => TABLE
}

impl Omics {
    service_actions! {
        /// Grants permission to abort multipart read set uploads
        to_abort_multipart_read_set_upload => "AbortMultipartReadSetUpload";
        /// Grants permission to accept a share
        to_accept_share => "AcceptShare";
        /// Grants permission to batch delete Read Sets in the given Sequence Store
        to_batch_delete_read_set => "BatchDeleteReadSet";
        /// Grants permission to cancel an Annotation Import Job
        to_cancel_annotation_import_job => "CancelAnnotationImportJob";
        /// Grants permission to cancel a workflow run and stop all workflow tasks
        to_cancel_run => "CancelRun";
        /// Grants permission to cancel a Variant Import Job
        to_cancel_variant_import_job => "CancelVariantImportJob";
        /// Grants permission to complete a multipart read set upload
        to_complete_multipart_read_set_upload => "CompleteMultipartReadSetUpload";
        /// Grants permission to create an Annotation Store
        to_create_annotation_store => "CreateAnnotationStore";
        /// Grants permission to create a Version in an Annotation Store
        to_create_annotation_store_version => "CreateAnnotationStoreVersion";
        /// Grants permission to create a multipart read set upload
        to_create_multipart_read_set_upload => "CreateMultipartReadSetUpload";
        /// Grants permission to create a Reference Store
        to_create_reference_store => "CreateReferenceStore";
        /// Grants permission to create a new workflow run group
        to_create_run_group => "CreateRunGroup";
        /// Grants permission to create a Sequence Store
        to_create_sequence_store => "CreateSequenceStore";
        /// Grants permission to create a share
        to_create_share => "CreateShare";
        /// Grants permission to create a Variant Store
        to_create_variant_store => "CreateVariantStore";
        /// Grants permission to create a new workflow with a workflow definition and template of workflow parameters
        to_create_workflow => "CreateWorkflow";
        /// Grants permission to delete an Annotation Store
        to_delete_annotation_store => "DeleteAnnotationStore";
        /// Grants permission to delete Versions in an Annotation Store
        to_delete_annotation_store_versions => "DeleteAnnotationStoreVersions";
        /// Grants permission to delete a Reference in the given Reference Store
        to_delete_reference => "DeleteReference";
        /// Grants permission to delete a Reference Store
        to_delete_reference_store => "DeleteReferenceStore";
        /// Grants permission to delete a workflow run
        to_delete_run => "DeleteRun";
        /// Grants permission to delete a workflow run group
        to_delete_run_group => "DeleteRunGroup";
        /// Grants permission to delete a Sequence Store
        to_delete_sequence_store => "DeleteSequenceStore";
        /// Grants permission to delete a share
        to_delete_share => "DeleteShare";
        /// Grants permission to delete a Variant Store
        to_delete_variant_store => "DeleteVariantStore";
        /// Grants permission to delete a workflow
        to_delete_workflow => "DeleteWorkflow";
        /// Grants permission to get the status of an Annotation Import Job
        to_get_annotation_import_job => "GetAnnotationImportJob";
        /// Grants permission to get detailed information about an Annotation Store
        to_get_annotation_store => "GetAnnotationStore";
        /// Grants permission to get detailed information about a version in an Annotation Store
        to_get_annotation_store_version => "GetAnnotationStoreVersion";
        /// Grants permission to get a Read Set in the given Sequence Store
        to_get_read_set => "GetReadSet";
        /// Grants permission to get details about a Read Set activation job for the given Sequence Store
        to_get_read_set_activation_job => "GetReadSetActivationJob";
        /// Grants permission to get details about a Read Set export job for the given Sequence Store
        to_get_read_set_export_job => "GetReadSetExportJob";
        /// Grants permission to get details about a Read Set import job for the given Sequence Store
        to_get_read_set_import_job => "GetReadSetImportJob";
        /// Grants permission to get details about a Read Set in the given Sequence Store
        to_get_read_set_metadata => "GetReadSetMetadata";
        /// Grants permission to get a Reference in the given Reference Store
        to_get_reference => "GetReference";
        /// Grants permission to get details about a Reference import job for the given Reference Store
        to_get_reference_import_job => "GetReferenceImportJob";
        /// Grants permission to get details about a Reference in the given Reference Store
        to_get_reference_metadata => "GetReferenceMetadata";
        /// Grants permission to get details about a Reference Store
        to_get_reference_store => "GetReferenceStore";
        /// Grants permission to retrieve workflow run details
        to_get_run => "GetRun";
        /// Grants permission to retrieve workflow run group details
        to_get_run_group => "GetRunGroup";
        /// Grants permission to retrieve workflow task details
        to_get_run_task => "GetRunTask";
        /// Grants permission to get details about a Sequence Store
        to_get_sequence_store => "GetSequenceStore";
        /// Grants permission to get detailed information about a Share
        to_get_share => "GetShare";
        /// Grants permission to get the status of a Variant Import Job
        to_get_variant_import_job => "GetVariantImportJob";
        /// Grants permission to get detailed information about a Variant Store
        to_get_variant_store => "GetVariantStore";
        /// Grants permission to retrieve workflow details
        to_get_workflow => "GetWorkflow";
        /// Grants permission to get a list of Annotation Import Jobs
        to_list_annotation_import_jobs => "ListAnnotationImportJobs";
        /// Grants permission to retrieve a list of information about Versions in an Annotation Store
        to_list_annotation_store_versions => "ListAnnotationStoreVersions";
        /// Grants permission to retrieve a list of information about Annotation Stores
        to_list_annotation_stores => "ListAnnotationStores";
        /// Grants permission to list multipart read set uploads
        to_list_multipart_read_set_uploads => "ListMultipartReadSetUploads";
        /// Grants permission to list Read Set activation jobs for the given Sequence Store
        to_list_read_set_activation_jobs => "ListReadSetActivationJobs";
        /// Grants permission to list Read Set export jobs for the given Sequence Store
        to_list_read_set_export_jobs => "ListReadSetExportJobs";
        /// Grants permission to list Read Set import jobs for the given Sequence Store
        to_list_read_set_import_jobs => "ListReadSetImportJobs";
        /// Grants permission to list read set upload parts
        to_list_read_set_upload_parts => "ListReadSetUploadParts";
        /// Grants permission to list Read Sets in the given Sequence Store
        to_list_read_sets => "ListReadSets";
        /// Grants permission to list Reference import jobs for the given Reference Store
        to_list_reference_import_jobs => "ListReferenceImportJobs";
        /// Grants permission to list Reference Stores
        to_list_reference_stores => "ListReferenceStores";
        /// Grants permission to list References in the given Reference Store
        to_list_references => "ListReferences";
        /// Grants permission to retrieve a list of workflow run groups
        to_list_run_groups => "ListRunGroups";
        /// Grants permission to retrieve a list of tasks for a workflow run
        to_list_run_tasks => "ListRunTasks";
        /// Grants permission to retrieve a list of workflow runs
        to_list_runs => "ListRuns";
        /// Grants permission to list Sequence Stores
        to_list_sequence_stores => "ListSequenceStores";
        /// Grants permission to retrieve a list of information about shares
        to_list_shares => "ListShares";
        /// Grants permission to retrieve a list of resource AWS tags
        to_list_tags_for_resource => "ListTagsForResource";
        /// Grants permission to get a list of Variant Import Jobs
        to_list_variant_import_jobs => "ListVariantImportJobs";
        /// Grants permission to retrieve a list of metadata for Variant Stores
        to_list_variant_stores => "ListVariantStores";
        /// Grants permission to retrieve a list of available workflows
        to_list_workflows => "ListWorkflows";
        /// Grants permission to import a list of Annotation files to an Annotation Store
        to_start_annotation_import_job => "StartAnnotationImportJob";
        /// Grants permission to start a Read Set activation job from the given Sequence Store
        to_start_read_set_activation_job => "StartReadSetActivationJob";
        /// Grants permission to start a Read Set export job from the given Sequence Store
        to_start_read_set_export_job => "StartReadSetExportJob";
        /// Grants permission to start a Read Set import job into the given Sequence Store
        to_start_read_set_import_job => "StartReadSetImportJob";
        /// Grants permission to start a Reference import job into the given Reference Store
        to_start_reference_import_job => "StartReferenceImportJob";
        /// Grants permission to start a workflow run
        to_start_run => "StartRun";
        /// Grants permission to import a list of variant files to an Variant Store
        to_start_variant_import_job => "StartVariantImportJob";
        /// Grants permission to add AWS tags to a resource
        to_tag_resource => "TagResource";
        /// Grants permission to remove resource AWS tags
        to_untag_resource => "UntagResource";
        /// Grants permission to update information about the Annotation Store
        to_update_annotation_store => "UpdateAnnotationStore";
        /// Grants permission to update information about the Version in an Annotation Store
        to_update_annotation_store_version => "UpdateAnnotationStoreVersion";
        /// Grants permission to update a workflow run group
        to_update_run_group => "UpdateRunGroup";
        /// Grants permission to update metadata about the Variant Store
        to_update_variant_store => "UpdateVariantStore";
        /// Grants permission to update workflow details
        to_update_workflow => "UpdateWorkflow";
        /// Grants permission to upload read set parts
        to_upload_read_set_part => "UploadReadSetPart";
    }

    service_resources! {
        /// Adds a resource of type `AnnotationImportJob` to the statement.
        on_annotation_import_job => "AnnotationImportJob" (annotation_import_job_id => "AnnotationImportJobId");
        /// Adds a resource of type `AnnotationStore` to the statement.
        on_annotation_store => "AnnotationStore" (annotation_store_id => "AnnotationStoreId");
        /// Adds a resource of type `AnnotationStoreVersion` to the statement.
        on_annotation_store_version => "AnnotationStoreVersion" (annotation_store_name => "AnnotationStoreName", annotation_store_version_name => "AnnotationStoreVersionName");
        /// Adds a resource of type `readSet` to the statement.
        on_read_set => "readSet" (sequence_store_id => "SequenceStoreId", read_set_id => "ReadSetId");
        /// Adds a resource of type `reference` to the statement.
        on_reference => "reference" (reference_store_id => "ReferenceStoreId", reference_id => "ReferenceId");
        /// Adds a resource of type `referenceStore` to the statement.
        on_reference_store => "referenceStore" (reference_store_id => "ReferenceStoreId");
        /// Adds a resource of type `run` to the statement.
        on_run => "run" (id => "Id");
        /// Adds a resource of type `runGroup` to the statement.
        on_run_group => "runGroup" (id => "Id");
        /// Adds a resource of type `sequenceStore` to the statement.
        on_sequence_store => "sequenceStore" (sequence_store_id => "SequenceStoreId");
        /// Adds a resource of type `TaggingResource` to the statement.
        on_tagging_resource => "TaggingResource" (tag_key => "TagKey");
        /// Adds a resource of type `TaskResource` to the statement.
        on_task_resource => "TaskResource" (id => "Id");
        /// Adds a resource of type `VariantImportJob` to the statement.
        on_variant_import_job => "VariantImportJob" (variant_import_job_id => "VariantImportJobId");
        /// Adds a resource of type `VariantStore` to the statement.
        on_variant_store => "VariantStore" (variant_store_id => "VariantStoreId");
        /// Adds a resource of type `workflow` to the statement.
        on_workflow => "workflow" (id => "Id");
    }

    /// Filters access by a unique resource identifier
    pub fn if_annotation_import_job_job_id<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("omics:AnnotationImportJobJobId", value, operator)
    }

    /// Filters access by the name of the store
    pub fn if_annotation_store_name<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("omics:AnnotationStoreName", value, operator)
    }

    /// Filters access by the name of the annotation store version
    pub fn if_annotation_store_version_name<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("omics:AnnotationStoreVersionName", value, operator)
    }

    /// Filters access by a unique resource identifier
    pub fn if_variant_import_job_job_id<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("omics:VariantImportJobJobId", value, operator)
    }

    /// Filters access by the name of the store
    pub fn if_variant_store_name<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("omics:VariantStoreName", value, operator)
    }
}
