use crate::{ConditionOp, ConditionValue, Operator, Statement};

/// Condition methods for the `aws:*` global condition keys, available on every statement type.
///
/// Each method records one condition entry. When `operator` is `None`, the operator AWS recommends for the key is
/// used; for most string keys that is `StringLike`.
pub trait GlobalConditions: Statement {
    /// `aws:CalledVia`. Default operator: `ForAnyValue:StringEquals`.
    fn if_aws_called_via<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| Operator::from(ConditionOp::StringEquals).for_any_value());
        self.condition("aws:CalledVia", value, Some(operator))
    }

    fn if_aws_called_via_first<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:CalledViaFirst", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_called_via_last<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:CalledViaLast", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:CurrentTime`. Pass a [chrono::DateTime] or an ISO 8601 string. Default operator: `DateLessThanEquals`.
    fn if_aws_current_time<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::DateLessThanEquals.into());
        self.condition("aws:CurrentTime", value, Some(operator))
    }

    /// `aws:EpochTime`. Default operator: `DateLessThanEquals`.
    fn if_aws_epoch_time<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::DateLessThanEquals.into());
        self.condition("aws:EpochTime", value, Some(operator))
    }

    /// `aws:MultiFactorAuthAge`, in seconds. Default operator: `NumericLessThan`.
    fn if_aws_multi_factor_auth_age<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::NumericLessThan.into());
        self.condition("aws:MultiFactorAuthAge", value, Some(operator))
    }

    /// `aws:MultiFactorAuthPresent` with `Bool`. The value defaults to `true`.
    fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.condition("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(ConditionOp::Bool.into()))
    }

    fn if_aws_principal_account<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:PrincipalAccount", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:PrincipalArn`. Default operator: `ArnLike`.
    fn if_aws_principal_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::ArnLike.into());
        self.condition("aws:PrincipalArn", value, Some(operator))
    }

    fn if_aws_principal_org_id<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:PrincipalOrgID", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_principal_org_paths<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.condition("aws:PrincipalOrgPaths", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:PrincipalTag/<tag_key>`.
    fn if_aws_principal_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.tag_condition("aws:PrincipalTag/${TagKey}", tag_key, value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_principal_type<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:PrincipalType", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_referer<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:Referer", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_requested_region<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:RequestedRegion", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:RequestTag/<tag_key>`.
    fn if_aws_request_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.tag_condition("aws:RequestTag/${TagKey}", tag_key, value, Some(operator.unwrap_or_default()))
    }

    /// `aws:ResourceTag/<tag_key>`.
    fn if_aws_resource_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.tag_condition("aws:ResourceTag/${TagKey}", tag_key, value, Some(operator.unwrap_or_default()))
    }

    /// `aws:SecureTransport` with `Bool`. The value defaults to `true`.
    fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.condition("aws:SecureTransport", value.unwrap_or(true), Some(ConditionOp::Bool.into()))
    }

    fn if_aws_source_account<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:SourceAccount", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:SourceArn`. Default operator: `ArnLike`.
    fn if_aws_source_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::ArnLike.into());
        self.condition("aws:SourceArn", value, Some(operator))
    }

    /// `aws:SourceIp`. Pass an [ipnet::IpNet], a list of them, or CIDR strings. Default operator: `IpAddress`.
    fn if_aws_source_ip<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::IpAddress.into());
        self.condition("aws:SourceIp", value, Some(operator))
    }

    fn if_aws_source_vpc<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:SourceVpc", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_source_vpce<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:SourceVpce", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:TagKeys`. Combine with [Operator::for_all_values] or [Operator::for_any_value] to test the whole set.
    fn if_aws_tag_keys<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:TagKeys", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:TokenIssueTime`. Default operator: `DateGreaterThanEquals`.
    fn if_aws_token_issue_time<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::DateGreaterThanEquals.into());
        self.condition("aws:TokenIssueTime", value, Some(operator))
    }

    fn if_aws_user_agent<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:UserAgent", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_userid<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:userid", value, Some(operator.unwrap_or_default()))
    }

    fn if_aws_username<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.condition("aws:username", value, Some(operator.unwrap_or_default()))
    }

    /// `aws:ViaAWSService` with `Bool`. The value defaults to `true`.
    fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.condition("aws:ViaAWSService", value.unwrap_or(true), Some(ConditionOp::Bool.into()))
    }

    /// `aws:VpcSourceIp`. Default operator: `IpAddress`.
    fn if_aws_vpc_source_ip<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| ConditionOp::IpAddress.into());
        self.condition("aws:VpcSourceIp", value, Some(operator))
    }
}

impl<T: Statement> GlobalConditions for T {}

#[cfg(test)]
mod tests {
    use {
        crate::{services::FirewallManager, ConditionOp, GlobalConditions, Operator, PolicyStatement, Statement},
        chrono::{DateTime, Utc},
        indoc::indoc,
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        serde_json::json,
        std::str::FromStr,
    };

    fn operators(s: &PolicyStatement) -> Vec<(String, String)> {
        s.conditions().iter().map(|c| (c.key().to_string(), c.operator().to_string())).collect()
    }

    #[test_log::test]
    fn test_default_operators() {
        let new_year = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
        let mut s = PolicyStatement::new();
        s.if_aws_called_via("athena.amazonaws.com", None)
            .if_aws_current_time(new_year, None)
            .if_aws_epoch_time(1704067200i64, None)
            .if_aws_multi_factor_auth_age(3600u32, None)
            .if_aws_principal_arn("arn:aws:iam::123456789012:role/*", None)
            .if_aws_source_ip(IpNet::from_str("203.0.113.0/24").unwrap(), None)
            .if_aws_token_issue_time("2024-01-01T00:00:00Z", None)
            .if_aws_principal_org_id("o-abc", None)
            .if_aws_request_tag("team", "storage", None);

        assert_eq!(
            operators(&s),
            vec![
                ("aws:CalledVia".to_string(), "ForAnyValue:StringEquals".to_string()),
                ("aws:CurrentTime".to_string(), "DateLessThanEquals".to_string()),
                ("aws:EpochTime".to_string(), "DateLessThanEquals".to_string()),
                ("aws:MultiFactorAuthAge".to_string(), "NumericLessThan".to_string()),
                ("aws:PrincipalArn".to_string(), "ArnLike".to_string()),
                ("aws:SourceIp".to_string(), "IpAddress".to_string()),
                ("aws:TokenIssueTime".to_string(), "DateGreaterThanEquals".to_string()),
                ("aws:PrincipalOrgID".to_string(), "StringLike".to_string()),
                ("aws:RequestTag/team".to_string(), "StringLike".to_string()),
            ]
        );

        let current = s.conditions().get("aws:CurrentTime").next().unwrap();
        assert_eq!(current.value().values(), &[json!("2024-01-01T00:00:00.000Z")]);
    }

    #[test_log::test]
    fn test_bool_defaults() {
        let mut s = PolicyStatement::new();
        s.if_aws_secure_transport(None).if_aws_multi_factor_auth_present(Some(false)).if_aws_via_aws_service(None);

        let values: Vec<_> = s.conditions().iter().map(|c| c.value().values()[0].clone()).collect();
        assert_eq!(values, vec![json!("true"), json!("false"), json!("true")]);
        assert!(s.conditions().iter().all(|c| c.operator() == &ConditionOp::Bool));
    }

    #[test_log::test]
    fn test_explicit_operator_wins() {
        let mut s = FirewallManager::new();
        s.if_aws_tag_keys(["Owner", "Team"], Some(Operator::from(ConditionOp::StringEquals).for_all_values()))
            .if_aws_source_arn("arn:aws:sns:us-east-1:123456789012:t", Some(ConditionOp::ArnEquals.into()));

        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": [],
                "Resource": "*",
                "Condition": {
                    "ForAllValues:StringEquals": {
                        "aws:TagKeys": [
                            "Owner",
                            "Team"
                        ]
                    },
                    "ArnEquals": {
                        "aws:SourceArn": "arn:aws:sns:us-east-1:123456789012:t"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_global_keys_are_not_prefixed() {
        let mut s = FirewallManager::new();
        s.if_aws_username("alice", None).if_aws_resource_tag("env", "prod", None).condition("aws:userid", "x", None);
        let keys: Vec<_> = s.statement().conditions().iter().map(|c| c.key().to_string()).collect();
        assert_eq!(keys, vec!["aws:username", "aws:ResourceTag/env", "aws:userid"]);
    }
}
