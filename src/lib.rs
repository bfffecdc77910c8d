#![warn(clippy::all)]

//! A catalog of AWS IAM actions, resource types and condition keys, with fluent builders for policy statements.
//!
//! ```
//! use iam_catalog::{services::Lambda, GlobalConditions, Statement};
//!
//! let mut s = Lambda::new();
//! s.invoke_function().on_function("my-fn", None, None, None).if_aws_secure_transport(None);
//! assert_eq!(s.statement().resources(), &["arn:aws:lambda:*:*:function:my-fn".to_string()]);
//! ```

pub(crate) mod access_level;
pub(crate) mod action;
pub(crate) mod arn;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod global_condition;
pub(crate) mod operator;
pub(crate) mod policy;
pub(crate) mod principal;
pub(crate) mod resource;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub mod service;
pub mod services;

pub use {
    access_level::AccessLevel,
    action::Action,
    arn::{has_unresolved_placeholder, ArnDefaults, ArnTemplate, ArnValues},
    condition::{Condition, ConditionBlock, ConditionValue},
    effect::Effect,
    error::IamError,
    global_condition::GlobalConditions,
    operator::{ConditionOp, Operator},
    policy::{Policy, PolicyBuilder, PolicyBuilderError, PolicyVersion},
    principal::{Principal, SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError},
    resource::ResourceArn,
    serutil::StringList,
    statement::{PolicyStatement, Statement, StatementProps, StatementPropsBuilder, StatementPropsBuilderError},
};
