use {
    crate::{
        arn::has_unresolved_placeholder, display_json, serutil::StringList, service::ServiceTable, AccessLevel, Action,
        ArnDefaults, ArnValues, Condition, ConditionBlock, ConditionValue, Effect, IamError, Operator, Principal,
        ResourceArn, SpecifiedPrincipal,
    },
    derive_builder::Builder,
    log::debug,
    regex::Regex,
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
    std::{
        fmt::{Debug, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

const TAG_KEY: &str = "${TagKey}";

/// Options accepted when constructing a statement.
///
/// The `default_*` values fill `${Partition}`, `${Region}` and `${Account}` for services whose resource methods
/// take their defaults from the statement, and `default_partition` is also used by
/// [Statement::for_account].
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct StatementProps {
    #[builder(setter(into, strip_option), default)]
    sid: Option<String>,

    #[builder(default)]
    effect: Effect,

    #[builder(setter(into, strip_option), default)]
    principal: Option<Principal>,

    #[builder(setter(into), default = "\"aws\".to_string()")]
    default_partition: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    default_region: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    default_account: String,
}

impl StatementProps {
    #[inline]
    pub fn builder() -> StatementPropsBuilder {
        StatementPropsBuilder::default()
    }

    pub fn with_sid<S: Into<String>>(sid: S) -> Self {
        Self {
            sid: Some(sid.into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn default_partition(&self) -> &str {
        &self.default_partition
    }

    #[inline]
    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    #[inline]
    pub fn default_account(&self) -> &str {
        &self.default_account
    }
}

impl Default for StatementProps {
    fn default() -> Self {
        Self {
            sid: None,
            effect: Effect::Allow,
            principal: None,
            default_partition: "aws".to_string(),
            default_region: "*".to_string(),
            default_account: "*".to_string(),
        }
    }
}

/// A single IAM policy statement under construction.
///
/// Actions and resources behave as sets: adding a value already present is a no-op, and the first insertion fixes
/// its position. Conditions are recorded in the order they are added. A statement can be serialized at any point;
/// serializing never changes it.
///
/// A statement created through a service type (or [PolicyStatement::with_table]) carries that service's
/// [ServiceTable], which the [Statement] methods use to qualify action names, render resource ARNs, and pick default
/// condition operators.
#[derive(Clone, Eq, PartialEq)]
pub struct PolicyStatement {
    table: Option<&'static ServiceTable>,
    sid: Option<String>,
    effect: Effect,
    actions: Vec<String>,
    not_action: bool,
    resources: Vec<String>,
    not_resource: bool,
    principal: Option<Principal>,
    not_principal: bool,
    conditions: ConditionBlock,
    defaults: ArnDefaults,
}

impl PolicyStatement {
    pub fn new() -> Self {
        Self::with_props(StatementProps::default())
    }

    pub fn with_sid<S: Into<String>>(sid: S) -> Self {
        Self::with_props(StatementProps::with_sid(sid))
    }

    pub fn with_props(props: StatementProps) -> Self {
        Self {
            table: None,
            sid: props.sid,
            effect: props.effect,
            actions: Vec::new(),
            not_action: false,
            resources: Vec::new(),
            not_resource: false,
            principal: props.principal,
            not_principal: false,
            conditions: ConditionBlock::new(),
            defaults: ArnDefaults::new(props.default_partition, props.default_region, props.default_account),
        }
    }

    pub fn with_table(table: &'static ServiceTable, props: StatementProps) -> Self {
        Self {
            table: Some(table),
            ..Self::with_props(props)
        }
    }

    #[inline]
    pub fn table(&self) -> Option<&'static ServiceTable> {
        self.table
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    #[inline]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    #[inline]
    pub fn is_not_action(&self) -> bool {
        self.not_action
    }

    #[inline]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[inline]
    pub fn is_not_resource(&self) -> bool {
        self.not_resource
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn is_not_principal(&self) -> bool {
        self.not_principal
    }

    #[inline]
    pub fn conditions(&self) -> &ConditionBlock {
        &self.conditions
    }

    #[inline]
    pub fn defaults(&self) -> &ArnDefaults {
        &self.defaults
    }

    pub fn push_action<S: Into<String>>(&mut self, action: S) {
        let action = action.into();
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    pub fn push_resource<S: Into<String>>(&mut self, resource: S) {
        let resource = resource.into();
        if !self.resources.contains(&resource) {
            self.resources.push(resource);
        }
    }

    #[inline]
    pub fn push_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// The operator a condition on `key` uses when the caller does not give one.
    pub fn default_operator(&self, key: &str) -> Operator {
        match self.table.and_then(|t| t.condition_key(key)) {
            Some(meta) => meta.default_operator.into(),
            None => Operator::default(),
        }
    }

    fn qualify_key(&self, key: &str) -> String {
        match self.table {
            Some(table) if !key.contains(':') => format!("{}:{}", table.prefix, key),
            _ => key.to_string(),
        }
    }

    fn add_principal<F: FnOnce(&mut SpecifiedPrincipal)>(&mut self, f: F) {
        match &mut self.principal {
            Some(Principal::Any) => {
                debug!("Statement already applies to every principal; ignoring specific principal")
            }
            Some(Principal::Specified(specified)) => f(specified),
            None => {
                let mut specified = SpecifiedPrincipal::default();
                f(&mut specified);
                self.principal = Some(Principal::Specified(specified));
            }
        }
    }

    /// Checks the statement against IAM's syntax and, when the statement belongs to a service, against the service
    /// table.
    ///
    /// Building a statement never validates anything; this must be called explicitly. The first problem found is
    /// returned.
    pub fn validate(&self) -> Result<(), IamError> {
        for id in &self.actions {
            let action = Action::from_str(id)?;
            let table = match (self.table, action.is_any()) {
                (Some(table), false) => table,
                _ => continue,
            };

            if action.service() != table.prefix {
                return Err(IamError::ForeignAction(id.clone()));
            }

            if !action.is_pattern() && table.action(action.action()).is_none() {
                return Err(IamError::UnknownAction(id.clone()));
            }
        }

        for resource in &self.resources {
            if resource == "*" {
                continue;
            }

            ResourceArn::from_str(resource)?;
            if has_unresolved_placeholder(resource) {
                return Err(IamError::InvalidResource(resource.clone()));
            }
        }

        for condition in &self.conditions {
            let op = condition.operator().condition_op()?;
            let meta = match self.table.and_then(|t| t.condition_key(condition.key())) {
                Some(meta) => meta,
                None => continue,
            };

            if !meta.value_type.accepts(op) {
                return Err(IamError::IncompatibleConditionOperator(format!(
                    "{} on {}",
                    condition.operator(),
                    condition.key()
                )));
            }
        }

        Ok(())
    }
}

impl Default for PolicyStatement {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for PolicyStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PolicyStatement")
            .field("service", &self.table.map(|t| t.prefix))
            .field("sid", &self.sid)
            .field("effect", &self.effect)
            .field("actions", &self.actions)
            .field("not_action", &self.not_action)
            .field("resources", &self.resources)
            .field("not_resource", &self.not_resource)
            .field("principal", &self.principal)
            .field("not_principal", &self.not_principal)
            .field("conditions", &self.conditions)
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl Serialize for PolicyStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(sid) = &self.sid {
            map.serialize_entry("Sid", sid)?;
        }

        map.serialize_entry("Effect", &self.effect)?;

        let action_key = if self.not_action {
            "NotAction"
        } else {
            "Action"
        };
        map.serialize_entry(action_key, &StringList::from(self.actions.as_slice()))?;

        let resource_key = if self.not_resource {
            "NotResource"
        } else {
            "Resource"
        };
        if self.resources.is_empty() {
            map.serialize_entry(resource_key, "*")?;
        } else {
            map.serialize_entry(resource_key, &StringList::from(self.resources.as_slice()))?;
        }

        if let Some(principal) = &self.principal {
            let principal_key = if self.not_principal {
                "NotPrincipal"
            } else {
                "Principal"
            };
            map.serialize_entry(principal_key, principal)?;
        }

        if !self.conditions.is_empty() {
            map.serialize_entry("Condition", &self.conditions)?;
        }

        map.end()
    }
}

display_json!(PolicyStatement);

/// The fluent builder interface shared by [PolicyStatement] and every per-service statement type.
///
/// Every method returns the receiver so calls can be chained. None of them fail: inputs that cannot be applied (an
/// unknown resource type, an invalid action pattern) are logged at debug level and skipped. Use
/// [PolicyStatement::validate] to check a finished statement.
pub trait Statement {
    fn statement(&self) -> &PolicyStatement;
    fn statement_mut(&mut self) -> &mut PolicyStatement;

    fn allow(&mut self) -> &mut Self {
        self.statement_mut().effect = Effect::Allow;
        self
    }

    fn deny(&mut self) -> &mut Self {
        self.statement_mut().effect = Effect::Deny;
        self
    }

    fn set_sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.statement_mut().sid = Some(sid.into());
        self
    }

    /// Adds a fully qualified action identifier such as `lambda:InvokeFunction`.
    fn add<S: Into<String>>(&mut self, action: S) -> &mut Self {
        self.statement_mut().push_action(action);
        self
    }

    /// Adds an action of this statement's service by its bare name.
    fn to(&mut self, action: &str) -> &mut Self {
        let table = self.statement().table;
        let id = match table {
            Some(table) => table.action_id(action),
            None => {
                debug!("Statement has no service; adding action {} unqualified", action);
                action.to_string()
            }
        };

        self.add(id)
    }

    /// Adds `prefix:*`.
    fn all_actions(&mut self) -> &mut Self {
        let table = self.statement().table;
        match table {
            Some(_) => self.to("*"),
            None => {
                debug!("Statement has no service; all_actions ignored");
                self
            }
        }
    }

    /// Adds every action of the service whose name matches `pattern`.
    fn all_matching_actions(&mut self, pattern: &str) -> &mut Self {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                debug!("Ignoring invalid action pattern {}: {}", pattern, e);
                return self;
            }
        };

        let table = self.statement().table;
        if let Some(table) = table {
            for action in table.actions.iter().filter(|a| regex.is_match(a.name)) {
                self.statement_mut().push_action(table.action_id(action.name));
            }
        }

        self
    }

    fn all_list_actions(&mut self) -> &mut Self {
        add_access_level(self, AccessLevel::List)
    }

    fn all_read_actions(&mut self) -> &mut Self {
        add_access_level(self, AccessLevel::Read)
    }

    fn all_write_actions(&mut self) -> &mut Self {
        add_access_level(self, AccessLevel::Write)
    }

    fn all_tagging_actions(&mut self) -> &mut Self {
        add_access_level(self, AccessLevel::Tagging)
    }

    fn all_permission_management_actions(&mut self) -> &mut Self {
        add_access_level(self, AccessLevel::PermissionsManagement)
    }

    /// Writes the actions as `NotAction`.
    fn not_action(&mut self) -> &mut Self {
        self.statement_mut().not_action = true;
        self
    }

    fn on<S: Into<String>>(&mut self, arn: S) -> &mut Self {
        self.statement_mut().push_resource(arn);
        self
    }

    fn on_all_resources(&mut self) -> &mut Self {
        self.on("*")
    }

    /// Renders the ARN template of `resource_type` with `values` and adds the result.
    ///
    /// Partition, region and account not present in `values` come from the service's
    /// [ArnConvention][crate::service::ArnConvention].
    fn on_resource_type(&mut self, resource_type: &str, values: &ArnValues) -> &mut Self {
        let statement = self.statement();
        let rendered = statement.table.and_then(|table| {
            table
                .resource_type(resource_type)
                .map(|rt| rt.template().render(values, &table.arn_convention.defaults(&statement.defaults)))
        });

        match rendered {
            Some(arn) => self.on(arn),
            None => {
                debug!("Unknown resource type {}; no resource added", resource_type);
                self
            }
        }
    }

    /// Writes the resources as `NotResource`.
    fn not_resource(&mut self) -> &mut Self {
        self.statement_mut().not_resource = true;
        self
    }

    /// Adds the root principal of an account: `arn:<partition>:iam::<id>:root`.
    fn for_account(&mut self, account_id: &str) -> &mut Self {
        let arn = format!("arn:{}:iam::{}:root", self.statement().defaults.partition(), account_id);
        self.for_arn(arn)
    }

    fn for_arn<S: Into<String>>(&mut self, arn: S) -> &mut Self {
        self.statement_mut().add_principal(|p| p.add_aws(arn));
        self
    }

    /// Adds a service principal such as `lambda.amazonaws.com`.
    fn for_service<S: Into<String>>(&mut self, service: S) -> &mut Self {
        self.statement_mut().add_principal(|p| p.add_service(service));
        self
    }

    fn for_federated<S: Into<String>>(&mut self, provider: S) -> &mut Self {
        self.statement_mut().add_principal(|p| p.add_federated(provider));
        self
    }

    fn for_canonical_user<S: Into<String>>(&mut self, id: S) -> &mut Self {
        self.statement_mut().add_principal(|p| p.add_canonical_user(id));
        self
    }

    /// Applies the statement to everyone (`"Principal": "*"`), replacing any principals already added.
    fn for_public(&mut self) -> &mut Self {
        self.statement_mut().principal = Some(Principal::Any);
        self
    }

    /// Writes the principal as `NotPrincipal`.
    fn not_principal(&mut self) -> &mut Self {
        self.statement_mut().not_principal = true;
        self
    }

    /// Records a condition on `key`.
    ///
    /// A key without a `:` is qualified with the service prefix. Without an explicit operator, the default documented
    /// for the key in the service table is used, or `StringLike` for keys the table does not list.
    fn condition<V: Into<ConditionValue>>(&mut self, key: &str, value: V, operator: Option<Operator>) -> &mut Self {
        let statement = self.statement_mut();
        let key = statement.qualify_key(key);
        let operator = operator.unwrap_or_else(|| statement.default_operator(&key));
        statement.push_condition(Condition::new(key, operator, value.into()));
        self
    }

    /// Records a condition on a tag-keyed condition key such as `aws:RequestTag/${TagKey}`, substituting `tag_key`.
    fn tag_condition<V: Into<ConditionValue>>(
        &mut self,
        key_template: &str,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let statement = self.statement_mut();
        let operator = operator.unwrap_or_else(|| statement.default_operator(key_template));
        let key = key_template.replace(TAG_KEY, tag_key);
        statement.push_condition(Condition::new(key, operator, value.into()));
        self
    }
}

fn add_access_level<T: Statement + ?Sized>(statement: &mut T, level: AccessLevel) -> &mut T {
    let table = statement.statement().table;
    match table {
        Some(table) => {
            for action in table.actions_with_access_level(level) {
                statement.statement_mut().push_action(table.action_id(action.name));
            }
        }
        None => debug!("Statement has no service; no {} actions added", level),
    }

    statement
}

impl Statement for PolicyStatement {
    #[inline]
    fn statement(&self) -> &PolicyStatement {
        self
    }

    #[inline]
    fn statement_mut(&mut self) -> &mut PolicyStatement {
        self
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            services::{CleanRoomsMl, DynamoDb, Ecs, Lambda},
            ArnValues, ConditionOp, Effect, GlobalConditions, IamError, Operator, PolicyStatement, Principal,
            Statement, StatementProps,
        },
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        serde_json::json,
    };

    #[test_log::test]
    fn test_lambda_scenario() {
        let mut s = Lambda::new();
        s.invoke_function().on_function("my-fn", None, None, None).if_function_arn(
            "arn:aws:lambda:us-east-1:123456789012:function:my-fn",
            None,
        );

        let st = s.statement();
        assert_eq!(st.actions(), &["lambda:InvokeFunction".to_string()]);
        assert_eq!(st.resources(), &["arn:aws:lambda:*:*:function:my-fn".to_string()]);
        assert_eq!(st.conditions().len(), 1);

        let c = st.conditions().iter().next().unwrap();
        assert_eq!(c.key(), "lambda:FunctionArn");
        assert_eq!(c.operator(), &ConditionOp::ArnEquals);
        assert_eq!(c.value().values(), &[json!("arn:aws:lambda:us-east-1:123456789012:function:my-fn")]);
        assert!(st.validate().is_ok());

        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "lambda:InvokeFunction",
                "Resource": "arn:aws:lambda:*:*:function:my-fn",
                "Condition": {
                    "ArnEquals": {
                        "lambda:FunctionArn": "arn:aws:lambda:us-east-1:123456789012:function:my-fn"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_default_conventions() {
        let mut ecs = Ecs::new();
        ecs.on_cluster("c", None, None, None);
        assert_eq!(ecs.statement().resources(), &["arn:aws:ecs:::cluster/c".to_string()]);

        let mut ecs = Ecs::new();
        ecs.on_cluster("c", Some("123456789012"), Some("us-west-2"), Some("aws-cn"));
        assert_eq!(ecs.statement().resources(), &["arn:aws-cn:ecs:us-west-2:123456789012:cluster/c".to_string()]);

        let mut lambda = Lambda::new();
        lambda.on_function("f", Some(""), None, None);
        assert_eq!(lambda.statement().resources(), &["arn:aws:lambda:*:*:function:f".to_string()]);
    }

    #[test_log::test]
    fn test_instance_defaults() {
        let props = StatementProps::builder()
            .default_partition("aws-us-gov")
            .default_region("us-gov-west-1")
            .default_account("123456789012")
            .build()
            .unwrap();
        let mut s = CleanRoomsMl::with_props(props);
        s.on_audiencemodel("m1", None, None, None).on_audiencemodel("m2", Some("210987654321"), None, None);
        assert_eq!(
            s.statement().resources(),
            &[
                "arn:aws-us-gov:cleanrooms-ml:us-gov-west-1:123456789012:audience-model/m1".to_string(),
                "arn:aws-us-gov:cleanrooms-ml:us-gov-west-1:210987654321:audience-model/m2".to_string(),
            ]
        );

        let mut s = CleanRoomsMl::new();
        s.on_audiencemodel("m1", None, None, None);
        assert_eq!(s.statement().resources(), &["arn:aws:cleanrooms-ml:*:*:audience-model/m1".to_string()]);
    }

    #[test_log::test]
    fn test_order_across_collections() {
        let mut a = DynamoDb::new();
        a.to_get_item().on_table("t", None, None, None).if_aws_tag_keys(["a"], None);

        let mut b = DynamoDb::new();
        b.if_aws_tag_keys(["a"], None).on_table("t", None, None, None).to_get_item();

        let mut c = DynamoDb::new();
        c.on_table("t", None, None, None).if_aws_tag_keys(["a"], None).to_get_item();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), c.to_string());
    }

    #[test_log::test]
    fn test_condition_order_is_kept() {
        let mut a = DynamoDb::new();
        a.if_aws_requested_region("us-east-1", None).if_aws_username("alice", None);
        let mut b = DynamoDb::new();
        b.if_aws_username("alice", None).if_aws_requested_region("us-east-1", None);

        let keys = |s: &DynamoDb| s.statement().conditions().iter().map(|c| c.key().to_string()).collect::<Vec<_>>();
        assert_eq!(keys(&a), vec!["aws:RequestedRegion", "aws:username"]);
        assert_eq!(keys(&b), vec!["aws:username", "aws:RequestedRegion"]);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test_log::test]
    fn test_condition_defaults() {
        let mut s = DynamoDb::new();
        s.if_aws_tag_keys(["a", "b"], None).if_full_table_scan(None);

        let conditions: Vec<_> = s.statement().conditions().iter().collect();
        assert_eq!(conditions[0].key(), "aws:TagKeys");
        assert_eq!(conditions[0].operator(), &ConditionOp::StringLike);
        assert_eq!(conditions[0].value().values(), &[json!("a"), json!("b")]);
        assert_eq!(conditions[1].key(), "dynamodb:FullTableScan");
        assert_eq!(conditions[1].operator(), &ConditionOp::Bool);
        assert_eq!(conditions[1].value().values(), &[json!("true")]);

        let mut s = DynamoDb::new();
        s.if_full_table_scan(Some(false))
            .if_leading_keys("${www.amazon.com:user_id}", Some("ForAllValues:StringEquals".into()));
        let conditions: Vec<_> = s.statement().conditions().iter().collect();
        assert_eq!(conditions[0].value().values(), &[json!("false")]);
        assert_eq!(conditions[1].operator().as_str(), "ForAllValues:StringEquals");
    }

    #[test_log::test]
    fn test_condition_json() {
        let mut s = DynamoDb::new();
        s.if_full_table_scan(None)
            .if_aws_requested_region("us-east-1", None)
            .if_aws_requested_region("eu-west-1", None);

        assert_eq!(s.statement().conditions().len(), 3);
        assert_eq!(
            serde_json::to_value(s.statement().conditions()).unwrap(),
            json!({
                "Bool": { "dynamodb:FullTableScan": "true" },
                "StringLike": { "aws:RequestedRegion": "eu-west-1" },
            })
        );
    }

    #[test_log::test]
    fn test_condition_key_qualification() {
        let mut s = Ecs::new();
        s.condition("cluster", "arn:aws:ecs:us-east-1:123456789012:cluster/prod", None)
            .if_resource_tag("team", "storage", None)
            .condition("aws:SourceVpc", "vpc-1234", Some(ConditionOp::StringEquals.into()));

        let conditions: Vec<_> = s.statement().conditions().iter().collect();
        assert_eq!(conditions[0].key(), "ecs:cluster");
        assert_eq!(conditions[0].operator(), &ConditionOp::ArnEquals);
        assert_eq!(conditions[1].key(), "ecs:ResourceTag/team");
        assert_eq!(conditions[1].operator(), &ConditionOp::StringLike);
        assert_eq!(conditions[2].key(), "aws:SourceVpc");
        assert_eq!(conditions[2].operator(), &ConditionOp::StringEquals);

        // Without a service table, keys stay as given and the operator defaults to StringLike.
        let mut s = PolicyStatement::new();
        s.condition("custom", "x", None);
        let c = s.conditions().iter().next().unwrap();
        assert_eq!(c.key(), "custom");
        assert_eq!(c.operator(), &Operator::default());
    }

    #[test_log::test]
    fn test_set_semantics() {
        let mut s = Lambda::new();
        s.invoke_function().get_function().invoke_function();
        s.on_function("f", None, None, None).on("arn:aws:lambda:*:*:function:f");
        s.add("lambda:GetFunction");

        assert_eq!(s.statement().actions(), &["lambda:InvokeFunction".to_string(), "lambda:GetFunction".to_string()]);
        assert_eq!(s.statement().resources().len(), 1);
    }

    #[test_log::test]
    fn test_round_trip() {
        let mut original = Lambda::with_sid("Invoke");
        original
            .invoke_function()
            .get_function()
            .on_function("f", None, None, None)
            .on_layer("l", Some("123456789012"), None, None)
            .if_function_arn("arn:aws:lambda:*:*:function:f", None)
            .if_aws_secure_transport(None)
            .if_aws_tag_keys(["a", "b"], None);

        let st = original.statement();
        let mut fresh = Lambda::with_sid("Invoke");
        for action in st.actions() {
            fresh.add(action.as_str());
        }
        for resource in st.resources() {
            fresh.on(resource.as_str());
        }
        for c in st.conditions() {
            fresh.condition(c.key(), c.value().clone(), Some(c.operator().clone()));
        }

        assert_eq!(original, fresh);
        assert_eq!(original.to_string(), fresh.to_string());
    }

    #[test_log::test]
    fn test_instances_are_independent() {
        let mut a = Lambda::new();
        let mut b = Lambda::new();
        a.invoke_function().if_layer("arn:aws:lambda:*:*:layer:x", None);
        assert!(b.statement().actions().is_empty());
        assert!(b.statement().conditions().is_empty());

        b.get_function();
        assert_eq!(a.statement().actions(), &["lambda:InvokeFunction".to_string()]);

        let c = a.clone();
        a.delete_function();
        assert_eq!(c.statement().actions().len(), 1);
        assert_eq!(a.statement().actions().len(), 2);
    }

    #[test_log::test]
    fn test_bulk_actions() {
        let mut s = Lambda::new();
        s.all_list_actions();
        let table = Lambda::table();
        assert_eq!(s.statement().actions().len(), table.actions_with_access_level(crate::AccessLevel::List).count());
        assert!(s.statement().actions().iter().all(|a| a.starts_with("lambda:List")));

        let mut s = Lambda::new();
        s.all_matching_actions("^Invoke").all_matching_actions("(unclosed");
        assert!(s.statement().actions().contains(&"lambda:InvokeFunction".to_string()));
        assert!(s.statement().actions().iter().all(|a| a.starts_with("lambda:Invoke")));

        let mut s = Lambda::new();
        s.all_actions();
        assert_eq!(s.statement().actions(), &["lambda:*".to_string()]);
        assert!(s.statement().validate().is_ok());

        let mut s = PolicyStatement::new();
        s.all_actions().all_read_actions().all_matching_actions(".*");
        assert!(s.actions().is_empty());
    }

    #[test_log::test]
    fn test_unknown_resource_type() {
        let mut s = Ecs::new();
        s.on_resource_type("spaceship", &ArnValues::new().with("Name", "x"));
        assert!(s.statement().resources().is_empty());

        s.on_resource_type("cluster", &ArnValues::new().with("ClusterName", "x"));
        assert_eq!(s.statement().resources(), &["arn:aws:ecs:::cluster/x".to_string()]);
    }

    #[test_log::test]
    fn test_principals_and_effect() {
        let mut s = PolicyStatement::with_sid("CrossAccount");
        s.deny()
            .add("s3:GetObject")
            .on("arn:aws:s3:::bucket/*")
            .for_account("123456789012")
            .for_service("lambda.amazonaws.com")
            .not_principal();

        assert_eq!(s.effect(), Effect::Deny);
        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Sid": "CrossAccount",
                "Effect": "Deny",
                "Action": "s3:GetObject",
                "Resource": "arn:aws:s3:::bucket/*",
                "NotPrincipal": {
                    "AWS": "arn:aws:iam::123456789012:root",
                    "Service": "lambda.amazonaws.com"
                }
            }"# }
        );

        s.for_public().for_arn("arn:aws:iam::123456789012:role/r");
        assert_eq!(s.principal(), Some(&Principal::Any));
    }

    #[test_log::test]
    fn test_not_elements() {
        let mut s = Ecs::new();
        s.create_cluster().delete_cluster().not_action().not_resource().allow().set_sid("Except");
        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Sid": "Except",
                "Effect": "Allow",
                "NotAction": [
                    "ecs:CreateCluster",
                    "ecs:DeleteCluster"
                ],
                "NotResource": "*"
            }"# }
        );
    }

    #[test_log::test]
    fn test_props() {
        let props = StatementProps::builder().sid("S1").effect(Effect::Deny).build().unwrap();
        assert_eq!(props.sid(), Some("S1"));
        assert_eq!(props.default_partition(), "aws");
        assert_eq!(props.default_region(), "*");
        assert_eq!(props.default_account(), "*");
        assert!(props.principal().is_none());

        let s = Lambda::with_props(props);
        assert_eq!(s.statement().sid(), Some("S1"));
        assert_eq!(s.statement().effect(), Effect::Deny);
        assert_eq!(StatementProps::with_sid("S1").effect(), Effect::Allow);
        assert_eq!(Lambda::default(), Lambda::new());
        assert!(format!("{:?}", Lambda::new()).contains("lambda"));
    }

    #[test_log::test]
    fn test_validate() {
        let mut s = Lambda::new();
        s.add("lambda:Get*").on("arn:aws:lambda:*:*:function:*");
        assert!(s.statement().validate().is_ok());

        let mut s = Lambda::new();
        s.add("not an action");
        assert_eq!(s.statement().validate().unwrap_err(), IamError::InvalidAction("not an action".to_string()));

        let mut s = Lambda::new();
        s.add("s3:GetObject");
        assert_eq!(s.statement().validate().unwrap_err(), IamError::ForeignAction("s3:GetObject".to_string()));

        let mut s = Lambda::new();
        s.to("Teleport");
        assert_eq!(s.statement().validate().unwrap_err(), IamError::UnknownAction("lambda:Teleport".to_string()));

        let mut s = Lambda::new();
        s.on("function:my-fn");
        assert_eq!(s.statement().validate().unwrap_err(), IamError::InvalidResource("function:my-fn".to_string()));

        let mut s = PolicyStatement::new();
        s.on("arn:aws:omics:*:*:tag/${TagKey}");
        assert_eq!(
            s.validate().unwrap_err(),
            IamError::InvalidResource("arn:aws:omics:*:*:tag/${TagKey}".to_string())
        );

        let mut s = PolicyStatement::new();
        s.on("arn:aws:s3:::bucket/${aws:username}/*").condition("aws:Foo", "x", Some("StringSorta".into()));
        assert_eq!(s.validate().unwrap_err(), IamError::InvalidConditionOperator("StringSorta".to_string()));

        // Operators are never checked while building.
        assert_eq!(s.conditions().len(), 1);

        let mut s = DynamoDb::new();
        s.if_full_table_scan(None)
            .if_leading_keys("${aws:userid}", Some("ForAllValues:StringEquals".into()))
            .condition("Attributes", "id", Some(ConditionOp::Null.into()));
        assert!(s.statement().validate().is_ok());

        s.if_select("ALL_ATTRIBUTES", Some(ConditionOp::NumericEquals.into()));
        assert_eq!(
            s.statement().validate().unwrap_err(),
            IamError::IncompatibleConditionOperator("NumericEquals on dynamodb:Select".to_string())
        );

        // ARN keys take the string operators too.
        let mut s = Lambda::new();
        s.if_function_arn("arn:aws:lambda:*:*:function:app-*", Some(ConditionOp::StringLike.into()));
        assert!(s.statement().validate().is_ok());

        let mut s = Ecs::new();
        s.if_resource_tag("team", "storage", Some(ConditionOp::DateEquals.into()));
        assert_eq!(
            s.statement().validate().unwrap_err(),
            IamError::IncompatibleConditionOperator("DateEquals on ecs:ResourceTag/team".to_string())
        );
    }
}
