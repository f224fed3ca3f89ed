/// One flattened variable, e.g. `DEV_ELB_SUBNET_PURPOSE="internal"`.
///
/// `value` is already encoded and safe to write after the `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    pub value: String,
}

impl VariableRecord {
    /// `NAME=value`
    pub fn line(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// `export NAME=value`
    pub fn export_line(&self) -> String {
        format!("export {}", self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        let record = VariableRecord {
            name: "DEV_ASG_MIN_SIZE".into(),
            value: "1".into(),
        };
        assert_eq!(record.line(), "DEV_ASG_MIN_SIZE=1");
        assert_eq!(record.export_line(), "export DEV_ASG_MIN_SIZE=1");
    }
}
