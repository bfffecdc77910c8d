use {
    crate::IamError,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

const PARTITION_START: usize = 4;

/// The structural pieces of a resource ARN as it appears in a policy statement.
///
/// Each segment may contain IAM wildcards (`*`, `?`) or policy variables; only the six-part `arn:` shape is
/// checked. Used by [PolicyStatement::validate][crate::PolicyStatement::validate].
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ResourceArn {
    arn: String,
    service_start: usize,
    region_start: usize,
    account_start: usize,
    resource_start: usize,
}

impl ResourceArn {
    pub fn new(partition: &str, service: &str, region: &str, account: &str, resource: &str) -> Self {
        let arn = format!("arn:{partition}:{service}:{region}:{account}:{resource}");
        let service_start = PARTITION_START + partition.len() + 1;
        let region_start = service_start + service.len() + 1;
        let account_start = region_start + region.len() + 1;
        let resource_start = account_start + account.len() + 1;

        Self {
            arn,
            service_start,
            region_start,
            account_start,
            resource_start,
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.arn[PARTITION_START..self.service_start - 1]
    }

    #[inline]
    pub fn service(&self) -> &str {
        &self.arn[self.service_start..self.region_start - 1]
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.arn[self.region_start..self.account_start - 1]
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.arn[self.account_start..self.resource_start - 1]
    }

    #[inline]
    pub fn resource(&self) -> &str {
        &self.arn[self.resource_start..]
    }
}

impl FromStr for ResourceArn {
    type Err = IamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" || parts[1].is_empty() || parts[2].is_empty() || parts[5].is_empty()
        {
            return Err(IamError::InvalidResource(s.to_string()));
        }

        Ok(Self::new(parts[1], parts[2], parts[3], parts[4], parts[5]))
    }
}

impl Display for ResourceArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.arn)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ResourceArn,
        crate::IamError,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_components() {
        let a = ResourceArn::from_str("arn:aws:lambda:*:*:function:my-fn").unwrap();
        assert_eq!(a.partition(), "aws");
        assert_eq!(a.service(), "lambda");
        assert_eq!(a.region(), "*");
        assert_eq!(a.account(), "*");
        assert_eq!(a.resource(), "function:my-fn");
        assert_eq!(a, ResourceArn::new("aws", "lambda", "*", "*", "function:my-fn"));
        assert_eq!(a.to_string(), "arn:aws:lambda:*:*:function:my-fn");

        let b = ResourceArn::from_str("arn:aws:ecs:::cluster/prod").unwrap();
        assert_eq!(b.region(), "");
        assert_eq!(b.account(), "");
        assert_eq!(b.resource(), "cluster/prod");
        assert_ne!(a, b);
    }

    #[test_log::test]
    fn test_malformed() {
        for bad in [
            "arn",
            "arn:aws",
            "arn:aws:ec2",
            "arn:aws:ec2:us-east-1",
            "arn:aws:ec2:us-east-1:123456789012",
            "arn:aws:ec2:us-east-1:123456789012:",
            "arn::ec2:us-east-1:123456789012:instance/i-1",
            "https:aws:ec2:us-east-1:123456789012:instance/i-1",
        ] {
            assert_eq!(ResourceArn::from_str(bad).unwrap_err(), IamError::InvalidResource(bad.to_string()));
        }
    }
}
