use crate::error::{MyRsError, Result};
use crate::types::{ParamType, SqlValue};

/// Ordered, typed collection of positional parameters.
///
/// Each position holds a value and an optional type tag. Positions without
/// a tag bind with the string-default code, which is also how plain value
/// lists behave after normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterContainer {
    entries: Vec<(SqlValue, Option<ParamType>)>,
}

impl ParameterContainer {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a container from plain values. No type tags are attached, so
    /// every position binds with the string-default code.
    pub fn from_values(values: Vec<SqlValue>) -> Self {
        Self {
            entries: values.into_iter().map(|v| (v, None)).collect(),
        }
    }

    /// Append an untyped value.
    pub fn push(&mut self, value: impl Into<SqlValue>) -> &mut Self {
        self.entries.push((value.into(), None));
        self
    }

    /// Append a value with an explicit type tag.
    pub fn push_typed(&mut self, value: impl Into<SqlValue>, ty: ParamType) -> &mut Self {
        self.entries.push((value.into(), Some(ty)));
        self
    }

    /// Attach a type tag to an existing position.
    pub fn set_type(&mut self, position: usize, ty: ParamType) -> Result<()> {
        match self.entries.get_mut(position) {
            Some(entry) => {
                entry.1 = Some(ty);
                Ok(())
            }
            None => Err(MyRsError::InvalidArgument(format!(
                "no parameter at position {position}"
            ))),
        }
    }

    /// Look up the type tag at a position, if any.
    pub fn type_of(&self, position: usize) -> Option<ParamType> {
        self.entries.get(position).and_then(|entry| entry.1)
    }

    /// Iterate `(position, value)` pairs in bind order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SqlValue)> {
        self.entries.iter().enumerate().map(|(i, (v, _))| (i, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assemble the native bind arguments: the concatenated type-signature
    /// string and the values in position order.
    ///
    /// Null-tagged positions get the integer code AND have their value
    /// forced to `SqlValue::Null`: the native bind call cannot bind a true
    /// null through a dedicated slot, so null rides the integer slot with a
    /// nulled-out value. Deliberate workaround, covered by tests.
    pub fn bind_args(&self) -> (String, Vec<SqlValue>) {
        let mut signature = String::with_capacity(self.entries.len());
        let mut values = Vec::with_capacity(self.entries.len());

        for (value, ty) in &self.entries {
            signature.push(type_code(*ty));
            if *ty == Some(ParamType::Null) {
                values.push(SqlValue::Null);
            } else {
                values.push(value.clone());
            }
        }

        (signature, values)
    }
}

/// Map a type tag to its single-character binding code.
/// Untagged and text positions share the string-default code; the null tag
/// maps onto the integer code (see [`ParameterContainer::bind_args`]).
fn type_code(ty: Option<ParamType>) -> char {
    match ty {
        Some(ParamType::Double) => 'd',
        Some(ParamType::Integer) | Some(ParamType::Null) => 'i',
        Some(ParamType::Text) | None => 's',
    }
}

/// Parameter argument accepted by `Statement::execute`.
///
/// Callers either hand over a plain positional value list or a fully typed
/// container; both normalize to [`ParameterContainer`] before binding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterInput {
    Values(Vec<SqlValue>),
    Container(ParameterContainer),
}

impl ParameterInput {
    /// Normalize to the canonical typed form.
    pub fn into_container(self) -> ParameterContainer {
        match self {
            ParameterInput::Values(values) => ParameterContainer::from_values(values),
            ParameterInput::Container(container) => container,
        }
    }
}

impl From<Vec<SqlValue>> for ParameterInput {
    fn from(values: Vec<SqlValue>) -> Self {
        ParameterInput::Values(values)
    }
}

impl From<ParameterContainer> for ParameterInput {
    fn from(container: ParameterContainer) -> Self {
        ParameterInput::Container(container)
    }
}

/// Accept loosely-typed parameters from layers above that traffic in JSON.
/// Only a flat array of scalars is a recognized collection shape.
impl TryFrom<serde_json::Value> for ParameterInput {
    type Error = MyRsError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Array(items) = value else {
            return Err(MyRsError::InvalidArgument(
                "expected a JSON array of scalar values".to_string(),
            ));
        };

        let mut values = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            values.push(json_scalar(item, position)?);
        }
        Ok(ParameterInput::Values(values))
    }
}

fn json_scalar(value: serde_json::Value, position: usize) -> Result<SqlValue> {
    match value {
        serde_json::Value::Null => Ok(SqlValue::Null),
        serde_json::Value::String(s) => Ok(SqlValue::Text(s)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(SqlValue::Double(f))
            } else {
                Err(MyRsError::InvalidArgument(format!(
                    "unrepresentable number at position {position}"
                )))
            }
        }
        other => Err(MyRsError::InvalidArgument(format!(
            "unsupported value at position {position}: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signature_reflects_tags_in_position_order() {
        let mut container = ParameterContainer::new();
        container.push_typed(1.5, ParamType::Double);
        container.push_typed(7, ParamType::Integer);
        container.push_typed("x", ParamType::Text);
        container.push("y");

        let (signature, values) = container.bind_args();
        assert_eq!(signature, "diss");
        assert_eq!(signature.len(), container.len());
        assert_eq!(
            values,
            vec![
                SqlValue::Double(1.5),
                SqlValue::Int(7),
                SqlValue::Text("x".to_string()),
                SqlValue::Text("y".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_tag_uses_integer_code_and_nulls_the_value() {
        let mut container = ParameterContainer::new();
        container.push_typed("stale", ParamType::Null);
        container.push_typed(2.5, ParamType::Double);

        let (signature, values) = container.bind_args();
        assert_eq!(signature, "id");
        assert_eq!(values[0], SqlValue::Null);
        assert_eq!(values[1], SqlValue::Double(2.5));
    }

    #[test]
    fn test_plain_values_default_to_string_code() {
        let container =
            ParameterContainer::from_values(vec![SqlValue::Int(1), SqlValue::Text("a".into())]);
        let (signature, values) = container.bind_args();
        assert_eq!(signature, "ss");
        assert_eq!(values, vec![SqlValue::Int(1), SqlValue::Text("a".into())]);
    }

    #[test]
    fn test_empty_container_produces_empty_args() {
        let (signature, values) = ParameterContainer::new().bind_args();
        assert!(signature.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn test_iteration_yields_position_value_pairs_in_order() {
        let mut container = ParameterContainer::new();
        container.push(10).push("b").push_typed(3.5, ParamType::Double);

        let pairs: Vec<(usize, SqlValue)> =
            container.iter().map(|(i, v)| (i, v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                (0, SqlValue::Int(10)),
                (1, SqlValue::Text("b".to_string())),
                (2, SqlValue::Double(3.5)),
            ]
        );
    }

    #[test]
    fn test_set_type_rejects_out_of_range_position() {
        let mut container = ParameterContainer::from_values(vec![SqlValue::Int(1)]);
        assert!(container.set_type(0, ParamType::Integer).is_ok());
        assert_eq!(container.type_of(0), Some(ParamType::Integer));

        let err = container.set_type(3, ParamType::Integer).unwrap_err();
        assert!(matches!(err, MyRsError::InvalidArgument(_)));
    }

    #[test]
    fn test_json_array_normalizes_to_plain_values() {
        let input = ParameterInput::try_from(json!([1, "a", null, 2.5])).unwrap();
        assert_eq!(
            input,
            ParameterInput::Values(vec![
                SqlValue::Int(1),
                SqlValue::Text("a".to_string()),
                SqlValue::Null,
                SqlValue::Double(2.5),
            ])
        );

        // Normalized plain values carry no tags, so they bind string-default.
        let (signature, _) = input.into_container().bind_args();
        assert_eq!(signature, "ssss");
    }

    #[test]
    fn test_json_non_array_shapes_are_rejected() {
        for bad in [json!({"id": 1}), json!(true), json!("lone"), json!(5)] {
            let err = ParameterInput::try_from(bad).unwrap_err();
            assert!(matches!(err, MyRsError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_json_nested_elements_are_rejected() {
        let err = ParameterInput::try_from(json!([1, [2, 3]])).unwrap_err();
        match err {
            MyRsError::InvalidArgument(message) => assert!(message.contains("position 1")),
            _ => panic!("Expected InvalidArgument error"),
        }
    }
}
