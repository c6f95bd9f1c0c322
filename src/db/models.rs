/// One table row projected to JSON, every column as a key.
pub type Row = serde_json::Value;

/// Fixed SQL text plus the values bound to its `$n` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<String>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }
}
