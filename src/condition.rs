use {
    crate::Operator,
    chrono::{DateTime, SecondsFormat, Utc},
    ipnet::IpNet,
    serde::{
        ser::{SerializeMap, SerializeSeq, Serializer},
        Serialize,
    },
    serde_json::Value,
    std::slice::Iter,
};

/// One or more values a condition key is compared against.
///
/// A single value is written to JSON as a scalar; more than one as an array. Booleans and numbers are stored as
/// strings, the way the IAM console writes them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionValue(Vec<Value>);

impl ConditionValue {
    /// A base64-encoded binary value, for use with `BinaryEquals`.
    pub fn binary<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self(vec![Value::String(base64::encode(bytes))])
    }

    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl Serialize for ConditionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.len() == 1 {
            return self.0[0].serialize(serializer);
        }

        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for value in &self.0 {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl From<Value> for ConditionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Self(values),
            other => Self(vec![other]),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self(vec![Value::from(value)])
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        Self(vec![Value::from(value)])
    }
}

impl From<&String> for ConditionValue {
    fn from(value: &String) -> Self {
        Self(vec![Value::from(value.as_str())])
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        Self(vec![Value::String(value.to_string())])
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ConditionValue {
                fn from(value: $t) -> Self {
                    Self(vec![Value::String(value.to_string())])
                }
            }
        )*
    };
}

from_number!(i32, i64, u32, u64, usize, f64);

impl From<Vec<&str>> for ConditionValue {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for ConditionValue {
    fn from(values: Vec<String>) -> Self {
        Self(values.into_iter().map(Value::from).collect())
    }
}

impl From<&[&str]> for ConditionValue {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| Value::from(*v)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ConditionValue {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| Value::from(*v)).collect())
    }
}

impl From<DateTime<Utc>> for ConditionValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self(vec![Value::from(value.to_rfc3339_opts(SecondsFormat::Millis, true))])
    }
}

impl From<IpNet> for ConditionValue {
    fn from(value: IpNet) -> Self {
        Self(vec![Value::from(value.to_string())])
    }
}

impl From<Vec<IpNet>> for ConditionValue {
    fn from(values: Vec<IpNet>) -> Self {
        Self(values.iter().map(|v| Value::from(v.to_string())).collect())
    }
}

/// A single recorded condition: `key` compared against `value` with `operator`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Condition {
    key: String,
    operator: Operator,
    value: ConditionValue,
}

impl Condition {
    pub fn new<K: Into<String>>(key: K, operator: Operator, value: ConditionValue) -> Self {
        Self {
            key: key.into(),
            operator,
            value,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    #[inline]
    pub fn value(&self) -> &ConditionValue {
        &self.value
    }
}

/// The conditions recorded on a statement, in the order they were added.
///
/// Recording never merges or drops entries. When written out as the IAM `Condition` block, entries are grouped by
/// operator (first appearance wins the position). A key repeated under the same operator keeps its first position
/// and the value recorded last.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionBlock(Vec<Condition>);

impl ConditionBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        log::trace!("Recording condition {} {} {:?}", condition.operator, condition.key, condition.value);
        self.0.push(condition);
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Condition> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All entries recorded for `key`, in insertion order.
    pub fn get<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Condition> + 'a {
        self.0.iter().filter(move |c| c.key == key)
    }

    fn grouped(&self) -> Vec<(&Operator, Vec<(&str, &ConditionValue)>)> {
        let mut groups: Vec<(&Operator, Vec<(&str, &ConditionValue)>)> = Vec::new();

        for condition in &self.0 {
            let index = match groups.iter().position(|(op, _)| *op == &condition.operator) {
                Some(index) => index,
                None => {
                    groups.push((&condition.operator, Vec::new()));
                    groups.len() - 1
                }
            };

            let entries = &mut groups[index].1;
            match entries.iter_mut().find(|(key, _)| *key == condition.key) {
                Some((_, value)) => {
                    log::debug!(
                        "Condition {} {} recorded again; keeping the later value",
                        condition.operator,
                        condition.key
                    );
                    *value = &condition.value;
                }
                None => entries.push((condition.key.as_str(), &condition.value)),
            }
        }

        groups
    }
}

impl<'a> IntoIterator for &'a ConditionBlock {
    type Item = &'a Condition;
    type IntoIter = Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct KeyValues<'a>(&'a [(&'a str, &'a ConditionValue)]);

impl Serialize for KeyValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for ConditionBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups = self.grouped();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (operator, entries) in &groups {
            map.serialize_entry(operator, &KeyValues(entries))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Condition, ConditionBlock, ConditionOp, ConditionValue, Operator},
        chrono::{DateTime, Utc},
        indoc::indoc,
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        serde_json::json,
        std::str::FromStr,
    };

    fn cond<V: Into<ConditionValue>>(key: &str, op: ConditionOp, value: V) -> Condition {
        Condition::new(key, Operator::from(op), value.into())
    }

    #[test_log::test]
    fn test_value_conversions() {
        assert_eq!(ConditionValue::from("a").values(), &[json!("a")]);
        assert_eq!(ConditionValue::from(vec!["a", "b"]).values(), &[json!("a"), json!("b")]);
        assert_eq!(ConditionValue::from(["a", "b"]).len(), 2);
        assert_eq!(ConditionValue::from(true).values(), &[json!("true")]);
        assert_eq!(ConditionValue::from(3600i64).values(), &[json!("3600")]);
        assert_eq!(ConditionValue::from(0.5f64).values(), &[json!("0.5")]);
        assert_eq!(ConditionValue::from(json!(["x", 1])).values(), &[json!("x"), json!(1)]);
        assert_eq!(ConditionValue::binary(b"hello").values(), &[json!("aGVsbG8=")]);

        let when = DateTime::parse_from_rfc3339("2022-03-14T15:09:26.535+00:00").unwrap().with_timezone(&Utc);
        assert_eq!(ConditionValue::from(when).values(), &[json!("2022-03-14T15:09:26.535Z")]);

        let net = IpNet::from_str("203.0.113.0/24").unwrap();
        assert_eq!(ConditionValue::from(net).values(), &[json!("203.0.113.0/24")]);
        assert_eq!(ConditionValue::from(vec![net, net]).len(), 2);
    }

    #[test_log::test]
    fn test_value_serialization() {
        assert_eq!(serde_json::to_string(&ConditionValue::from("a")).unwrap(), r#""a""#);
        assert_eq!(serde_json::to_string(&ConditionValue::from(["a", "b"])).unwrap(), r#"["a","b"]"#);
        assert_eq!(serde_json::to_string(&ConditionValue::from(false)).unwrap(), r#""false""#);
        assert_eq!(serde_json::to_string(&ConditionValue::from(3600u32)).unwrap(), r#""3600""#);
        assert_eq!(serde_json::to_string(&ConditionValue::default()).unwrap(), "[]");
    }

    #[test_log::test]
    fn test_recording_is_additive() {
        let mut block = ConditionBlock::new();
        block.push(cond("aws:TagKeys", ConditionOp::StringLike, "a"));
        block.push(cond("aws:TagKeys", ConditionOp::StringLike, "a"));
        block.push(cond("aws:TagKeys", ConditionOp::StringEquals, "b"));

        assert_eq!(block.len(), 3);
        assert_eq!(block.get("aws:TagKeys").count(), 3);
        assert_eq!(block.get("aws:RequestedRegion").count(), 0);
        let ops: Vec<&str> = block.iter().map(|c| c.operator().as_str()).collect();
        assert_eq!(ops, vec!["StringLike", "StringLike", "StringEquals"]);
    }

    #[test_log::test]
    fn test_block_serialization() {
        let mut block = ConditionBlock::new();
        block.push(cond("s3:prefix", ConditionOp::StringLike, "home/"));
        block.push(cond("aws:SourceArn", ConditionOp::ArnLike, "arn:aws:sns:*:*:topic"));
        block.push(cond("s3:prefix", ConditionOp::StringLike, vec!["public/", "shared/"]));
        block.push(cond("aws:SecureTransport", ConditionOp::Bool, true));
        block.push(cond("aws:RequestedRegion", ConditionOp::StringLike, "us-east-1"));

        let mut ser = serde_json::Serializer::with_formatter(
            Vec::new(),
            serde_json::ser::PrettyFormatter::with_indent(b"    "),
        );
        serde::Serialize::serialize(&block, &mut ser).unwrap();
        let text = String::from_utf8(ser.into_inner()).unwrap();

        assert_eq!(
            text,
            indoc! { r#"
            {
                "StringLike": {
                    "s3:prefix": [
                        "public/",
                        "shared/"
                    ],
                    "aws:RequestedRegion": "us-east-1"
                },
                "ArnLike": {
                    "aws:SourceArn": "arn:aws:sns:*:*:topic"
                },
                "Bool": {
                    "aws:SecureTransport": "true"
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_repeated_key_keeps_last_value() {
        let mut block = ConditionBlock::new();
        block.push(cond("aws:RequestedRegion", ConditionOp::StringLike, "us-east-1"));
        block.push(cond("aws:RequestedRegion", ConditionOp::StringEquals, "us-west-2"));
        block.push(cond("aws:RequestedRegion", ConditionOp::StringLike, "eu-west-1"));

        assert_eq!(block.len(), 3);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "StringLike": { "aws:RequestedRegion": "eu-west-1" },
                "StringEquals": { "aws:RequestedRegion": "us-west-2" },
            })
        );
    }
}
