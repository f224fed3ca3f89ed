use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::merged_config::MergedConfig;
use crate::core::models::variable_record::VariableRecord;
use crate::core::services::value_encoder::encode_value;
use crate::core::traits::diagnostics::DiagnosticSink;

/// Flattens `env → resource → property` into `ENV_RESOURCE_PROPERTY`
/// variables.
///
/// Order: environments as stored, then resources sorted, then
/// properties sorted. Resources whose value is not an object have no
/// properties and are skipped.
pub struct VariableFlattener<'a> {
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> VariableFlattener<'a> {
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { diagnostics }
    }

    pub fn flatten(&self, merged: &MergedConfig) -> Result<Vec<VariableRecord>> {
        let mut records = Vec::new();

        for env in &merged.environments {
            let mut resources: Vec<(&String, &Value)> = env.resources.iter().collect();
            resources.sort_by(|a, b| a.0.cmp(b.0));

            for (resource, value) in resources {
                let properties = match value {
                    Value::Object(properties) => properties,
                    other => {
                        self.diagnostics.debug(&format!(
                            "Skipping {}.{resource}: {} has no properties",
                            env.name,
                            kind(other)
                        ));
                        continue;
                    }
                };

                let mut properties: Vec<(&String, &Value)> = properties.iter().collect();
                properties.sort_by(|a, b| a.0.cmp(b.0));

                for (property, value) in properties {
                    let record = VariableRecord {
                        name: variable_name(&env.name, resource, property),
                        value: encode_value(value)?,
                    };
                    self.diagnostics.debug(&format!("Variable: {}", record.line()));
                    records.push(record);
                }
            }
        }

        Ok(records)
    }
}

/// `dev`, `elb`, `subnet_purpose` → `DEV_ELB_SUBNET_PURPOSE`
pub fn variable_name(env: &str, resource: &str, property: &str) -> String {
    format!("{env}_{resource}_{property}").to_uppercase()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
