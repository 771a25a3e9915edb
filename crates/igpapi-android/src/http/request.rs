/*
[INPUT]:  Path, verb, query and form fields assembled by repositories and feeds
[OUTPUT]: Immutable request descriptors consumed by a transport
[POS]:    HTTP layer - ready-to-send representation of one outbound call
[UPDATE]: When descriptors gain new request attributes
*/

use std::collections::BTreeMap;

use reqwest::Method;

/// Form body fields. Inserting an existing key overwrites it.
pub type Form = BTreeMap<String, String>;

/// Query string parameters
pub type Query = BTreeMap<String, String>;

/// Fully specified outbound call. Path parameters are already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub query: Option<Query>,
    pub form: Option<Form>,
    /// Set when `form` already went through [`Transport::sign`](crate::http::Transport::sign)
    pub signed: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            query: None,
            form: None,
            signed: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    pub fn signed_form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self.signed = true;
        self
    }

    /// Value of a form field, if present
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form.as_ref()?.get(key).map(String::as_str)
    }

    /// Value of a query parameter, if present
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.as_ref()?.get(key).map(String::as_str)
    }
}
