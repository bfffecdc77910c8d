/// Declare a per-service statement type backed by a [ServiceTable][crate::service::ServiceTable].
///
/// The generated type wraps a [PolicyStatement][crate::PolicyStatement], implements
/// [Statement][crate::Statement], and serializes exactly like the statement it wraps.
#[macro_export]
macro_rules! service_statement {
    ($(#[$meta:meta])* $name:ident => $table:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $name {
            statement: $crate::PolicyStatement,
        }

        impl $name {
            /// Creates a statement with default properties: no sid, `Allow`.
            pub fn new() -> Self {
                Self::with_props($crate::StatementProps::default())
            }

            pub fn with_sid<S: Into<String>>(sid: S) -> Self {
                Self::with_props($crate::StatementProps::with_sid(sid))
            }

            pub fn with_props(props: $crate::StatementProps) -> Self {
                Self {
                    statement: $crate::PolicyStatement::with_table(&$table, props),
                }
            }

            /// The IAM metadata for this service.
            #[inline]
            pub fn table() -> &'static $crate::service::ServiceTable {
                &$table
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::Statement for $name {
            #[inline]
            fn statement(&self) -> &$crate::PolicyStatement {
                &self.statement
            }

            #[inline]
            fn statement_mut(&mut self) -> &mut $crate::PolicyStatement {
                &mut self.statement
            }
        }

        impl From<$name> for $crate::PolicyStatement {
            fn from(s: $name) -> Self {
                s.statement
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.statement, serializer)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.statement, f)
            }
        }
    };
}

/// Generate one builder method per action: `method => "ActionName";`.
#[macro_export]
macro_rules! service_actions {
    ($($(#[$meta:meta])* $method:ident => $action:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self) -> &mut Self {
                $crate::Statement::to(self, $action)
            }
        )*
    };
}

/// Generate one `on_*` method per resource type:
/// `method => "type name" (param => "Placeholder", ...);`.
///
/// Each method takes the resource-specific placeholders followed by optional account, region and partition.
#[macro_export]
macro_rules! service_resources {
    ($($(#[$meta:meta])* $method:ident => $rtype:literal ($($param:ident => $placeholder:literal),* $(,)?);)*) => {
        $(
            $(#[$meta])*
            pub fn $method(
                &mut self,
                $($param: &str,)*
                account: Option<&str>,
                region: Option<&str>,
                partition: Option<&str>,
            ) -> &mut Self {
                let values = $crate::ArnValues::new()
                    $(.with($placeholder, $param))*
                    .account(account)
                    .region(region)
                    .partition(partition);
                $crate::Statement::on_resource_type(self, $rtype, &values)
            }
        )*
    };
}
