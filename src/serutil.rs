use {
    serde::{ser::Serializer, Serialize},
    std::slice::Iter,
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                match ::serde::Serialize::serialize(self, &mut ser) {
                    Ok(()) => (),
                    Err(e) => {
                        ::log::error!("Failed to serialize: {}", e);
                        return Err(::std::fmt::Error {});
                    }
                };
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => write!(f, "{}", s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// A JSON field holding either a single string or a list of strings.
///
/// Values keep insertion order and are not duplicated: pushing a string already present is a no-op.
#[derive(Clone, Debug)]
pub enum StringList {
    Single(String),
    List(Vec<String>),
}

impl StringList {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::List(s_list) => s_list,
        }
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|s| s == value)
    }

    pub fn push<S: Into<String>>(&mut self, value: S) {
        let value = value.into();
        if self.contains(&value) {
            return;
        }

        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::List(vec![first, value]);
            }
            Self::List(s_list) => s_list.push(value),
        }
    }
}

impl PartialEq<StringList> for StringList {
    fn eq(&self, other: &StringList) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for StringList {}

impl From<&str> for StringList {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for StringList {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Builds the compact form IAM tooling emits: a bare string for one element, otherwise a list.
impl From<&[String]> for StringList {
    fn from(values: &[String]) -> Self {
        match values {
            [single] => Self::Single(single.clone()),
            _ => Self::List(values.to_vec()),
        }
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(v) => v.serialize(serializer),
            Self::List(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::serutil::StringList,
        pretty_assertions::{assert_eq, assert_ne},
        serde::Serialize,
        std::panic::catch_unwind,
    };

    #[test_log::test]
    fn test_basic_ops() {
        let sl1a = StringList::from("a");
        let sl1b = StringList::from(vec!["a".to_string()]);
        let mut sl2 = StringList::from("a");
        sl2.push("b");
        sl2.push("a");

        assert_eq!(sl1a, sl1b);
        assert_ne!(sl1a, sl2);
        assert_eq!(sl2.len(), 2);
        assert!(sl2.contains("b"));
        assert!(!sl1a.is_empty());
        assert!(StringList::List(vec![]).is_empty());
        assert_eq!(sl2.iter().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test_log::test]
    fn test_compact_form() {
        let one = vec!["x".to_string()];
        let two = vec!["x".to_string(), "y".to_string()];
        assert_eq!(serde_json::to_string(&StringList::from(one.as_slice())).unwrap(), r#""x""#);
        assert_eq!(serde_json::to_string(&StringList::from(two.as_slice())).unwrap(), r#"["x","y"]"#);
    }

    #[derive(Clone, Debug)]
    struct SerFail {}
    display_json!(SerFail);

    impl Serialize for SerFail {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("Serialization failed"))
        }
    }

    #[test_log::test]
    fn test_ser_fail() {
        let e = catch_unwind(|| SerFail {}.to_string()).unwrap_err();
        let e2 = e.downcast::<String>().unwrap();
        assert!((*e2).contains("a Display implementation returned an error"));
    }
}
