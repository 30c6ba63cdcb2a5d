//! Structural sanity checks for state documents
//!
//! These checks stand in for loading the document into the real tool. They
//! cover the rules the generator promises: index keys, module/provider
//! prefixes, unique addresses and outputs that match their type descriptors.

use crate::state::{Resource, StateDocument};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, Level};

/// One broken structural rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Resource address or `output.<name>`
    pub location: String,
    /// What is wrong
    pub message: String,
}

impl Violation {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self { location: location.into(), message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Check every structural rule, returning all violations found
pub fn check_document(doc: &StateDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut addresses = HashSet::new();

    for resource in &doc.resources {
        let address = resource.address();
        if !addresses.insert(address.clone()) {
            violations.push(Violation::new(&address, "duplicate resource address"));
        }
        check_resource(resource, &address, &mut violations);
    }

    for (name, output) in &doc.outputs {
        if !value_conforms(&output.output_type, &output.value) {
            violations.push(Violation::new(
                format!("output.{}", name),
                format!("value does not match type {}", output.output_type),
            ));
        }
    }

    violations
}

/// Run [`check_document`] and log the outcome at debug level
///
/// Returns the number of violations, or `None` without walking the document
/// when debug events would be discarded anyway.
pub fn log_violations(doc: &StateDocument) -> Option<usize> {
    if !tracing::enabled!(Level::DEBUG) {
        return None;
    }

    let violations = check_document(doc);
    for violation in &violations {
        debug!(%violation, "structural check failed");
    }
    if violations.is_empty() {
        debug!("structural checks passed");
    }
    Some(violations.len())
}

fn check_resource(resource: &Resource, address: &str, violations: &mut Vec<Violation>) {
    match resource.instances.len() {
        0 => violations.push(Violation::new(address, "resource has no instances")),
        1 => {
            if resource.instances[0].index_key.as_deref().is_some_and(|k| !k.is_empty()) {
                violations.push(Violation::new(address, "single instance carries an index key"));
            }
        }
        _ => {
            let mut keys = HashSet::new();
            for instance in &resource.instances {
                match instance.index_key.as_deref() {
                    None | Some("") => {
                        violations.push(Violation::new(address, "keyed instance without index key"))
                    }
                    Some(key) => {
                        if !keys.insert(key) {
                            violations.push(Violation::new(
                                address,
                                format!("duplicate index key {}", key),
                            ));
                        }
                    }
                }
            }
        }
    }

    let expected_prefix = match &resource.module {
        Some(module) => format!("{}.provider[", module),
        None => "provider[".to_string(),
    };
    if !resource.provider.starts_with(&expected_prefix) {
        violations.push(Violation::new(
            address,
            format!("provider {} does not start with {}", resource.provider, expected_prefix),
        ));
    }
}

/// Whether `value` has the shape described by the type descriptor `ty`
///
/// Null conforms to every type.
pub fn value_conforms(ty: &Value, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }

    match ty {
        Value::String(primitive) => match primitive.as_str() {
            "string" => value.is_string(),
            "number" => value.is_number(),
            "bool" => value.is_boolean(),
            "dynamic" => true,
            _ => false,
        },
        Value::Array(parts) => match (parts.first().and_then(Value::as_str), parts.get(1)) {
            (Some("list") | Some("set"), Some(element)) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| value_conforms(element, item))),
            (Some("map"), Some(element)) => value
                .as_object()
                .is_some_and(|items| items.values().all(|item| value_conforms(element, item))),
            (Some("object"), Some(Value::Object(fields))) => value.as_object().is_some_and(|obj| {
                obj.len() == fields.len()
                    && fields.iter().all(|(name, field_ty)| {
                        obj.get(name).is_some_and(|field| value_conforms(field_ty, field))
                    })
            }),
            (Some("tuple"), Some(Value::Array(elements))) => {
                value.as_array().is_some_and(|items| {
                    items.len() == elements.len()
                        && elements.iter().zip(items).all(|(t, v)| value_conforms(t, v))
                })
            }
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Instance, Output};
    use crate::types::{Lineage, ResourceMode};
    use serde_json::json;

    #[test]
    fn test_log_violations_skips_work_without_debug() {
        let doc = StateDocument::new(Lineage::new());
        assert_eq!(log_violations(&doc), None);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();
        let checked = tracing::subscriber::with_default(subscriber, || log_violations(&doc));
        assert_eq!(checked, Some(0));
    }

    fn keyed(key: Option<&str>) -> Instance {
        Instance { index_key: key.map(str::to_string), ..Default::default() }
    }

    fn resource(module: Option<&str>, provider: &str, instances: Vec<Instance>) -> Resource {
        Resource {
            module: module.map(str::to_string),
            mode: ResourceMode::Managed,
            resource_type: "aws_iam_user".to_string(),
            name: "main".to_string(),
            provider: provider.to_string(),
            instances,
        }
    }

    const PROVIDER: &str = "provider[\"registry.terraform.io/hashicorp/aws\"]";

    #[test]
    fn test_primitive_types() {
        assert!(value_conforms(&json!("string"), &json!("x")));
        assert!(value_conforms(&json!("number"), &json!(4.5)));
        assert!(value_conforms(&json!("bool"), &json!(false)));
        assert!(!value_conforms(&json!("bool"), &json!("false")));
        assert!(value_conforms(&json!("number"), &Value::Null));
        assert!(!value_conforms(&json!("unknown"), &json!(1)));
    }

    #[test]
    fn test_collection_types() {
        let list = json!(["list", "string"]);
        assert!(value_conforms(&list, &json!(["a", "b"])));
        assert!(!value_conforms(&list, &json!(["a", 1])));

        let map = json!(["map", "number"]);
        assert!(value_conforms(&map, &json!({ "a": 1, "b": 2 })));
        assert!(!value_conforms(&map, &json!([1, 2])));

        let tuple = json!(["tuple", ["string", "bool"]]);
        assert!(value_conforms(&tuple, &json!(["a", true])));
        assert!(!value_conforms(&tuple, &json!(["a"])));
    }

    #[test]
    fn test_object_type_requires_exact_fields() {
        let ty = json!(["object", { "id": "string", "ports": ["list", "number"] }]);
        assert!(value_conforms(&ty, &json!({ "id": "sg-1", "ports": [80, 443] })));
        assert!(!value_conforms(&ty, &json!({ "id": "sg-1" })));
        assert!(!value_conforms(&ty, &json!({ "id": "sg-1", "ports": [], "extra": 1 })));
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        let mut doc = StateDocument::new(Lineage::new());
        doc.resources.push(resource(None, PROVIDER, vec![keyed(None)]));
        doc.resources.push(resource(
            Some("module.iam"),
            &format!("module.iam.{}", PROVIDER),
            vec![keyed(Some("a-b-0")), keyed(Some("a-b-1"))],
        ));
        doc.outputs.insert("x".to_string(), Output::new(json!("v"), json!("string")));

        assert!(check_document(&doc).is_empty());
    }

    #[test]
    fn test_index_key_rules() {
        let mut doc = StateDocument::new(Lineage::new());
        doc.resources.push(resource(None, PROVIDER, vec![keyed(Some("lonely"))]));

        let violations = check_document(&doc);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("single instance"));

        doc.resources[0].instances = vec![keyed(Some("k")), keyed(Some("k")), keyed(None)];
        let messages: Vec<String> = check_document(&doc).into_iter().map(|v| v.message).collect();
        assert!(messages.iter().any(|m| m.contains("duplicate index key")));
        assert!(messages.iter().any(|m| m.contains("without index key")));
    }

    #[test]
    fn test_module_provider_prefix_and_duplicates() {
        let mut doc = StateDocument::new(Lineage::new());
        doc.resources.push(resource(Some("module.iam"), PROVIDER, vec![keyed(None)]));
        doc.resources.push(resource(Some("module.iam"), PROVIDER, vec![keyed(None)]));

        let violations = check_document(&doc);
        assert!(violations.iter().any(|v| v.message.contains("does not start with")));
        assert!(violations.iter().any(|v| v.message == "duplicate resource address"));
        assert_eq!(violations[0].location, "module.iam.aws_iam_user.main");
    }

    #[test]
    fn test_mismatched_output_is_reported() {
        let mut doc = StateDocument::new(Lineage::new());
        doc.outputs.insert("bad".to_string(), Output::new(json!({ "a": 1 }), json!("string")));

        let violations = check_document(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "output.bad");
    }
}
