// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::Deserialize;

use crate::aggregate::Aggregate;
use crate::errors::DescError;
use crate::types::cv::{CVQualifier, Qualifier, RefQualifier};
use crate::types::list::TypeList;
use crate::types::name::Qualified;
use crate::types::primitive::Primitive;
use crate::types::r#type::{BaseType, Type};

#[derive(Debug, Deserialize)]
struct JsonType {
    name: String,
    #[serde(default)]
    r#const: bool,
    #[serde(default)]
    volatile: bool,
    #[serde(default)]
    reference: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonArray {
    element: JsonType,
    size: usize,
}

#[derive(Debug, Deserialize)]
struct JsonAggregate {
    #[serde(default)]
    tuple: Option<Vec<JsonType>>,
    #[serde(default)]
    array: Option<JsonArray>,
    #[serde(default)]
    r#const: bool,
    #[serde(default)]
    volatile: bool,
    #[serde(default)]
    reference: Option<String>,
}

fn get_cv(r#const: bool, volatile: bool) -> CVQualifier {
    let mut cv = CVQualifier::empty();
    if r#const {
        cv |= CVQualifier::CONST;
    }
    if volatile {
        cv |= CVQualifier::VOLATILE;
    }
    cv
}

fn get_reference(reference: &Option<String>) -> Result<RefQualifier, DescError> {
    match reference.as_deref() {
        None => Ok(RefQualifier::None),
        Some("lvalue") => Ok(RefQualifier::LValue),
        Some("rvalue") => Ok(RefQualifier::RValue),
        Some(value) => Err(DescError::InvalidReference {
            value: value.to_string(),
        }),
    }
}

impl JsonType {
    fn get_type(&self) -> Result<Type, DescError> {
        let base = match Primitive::from_spelling(&self.name) {
            Some(prim) => BaseType::Primitive(prim),
            None => BaseType::UD(Qualified::from_spelling(&self.name)),
        };
        Ok(Type {
            base,
            cv: get_cv(self.r#const, self.volatile),
            reference: get_reference(&self.reference)?,
        })
    }
}

impl JsonAggregate {
    fn get_aggregate(self) -> Result<Aggregate, DescError> {
        let qualifier = Qualifier::new(
            get_cv(self.r#const, self.volatile),
            get_reference(&self.reference)?,
        );
        let aggregate = match (self.tuple, self.array) {
            (Some(types), None) => {
                let types = types
                    .iter()
                    .map(JsonType::get_type)
                    .collect::<Result<TypeList, _>>()?;
                Aggregate::tuple(types)
            }
            (None, Some(array)) => Aggregate::array(array.element.get_type()?, array.size),
            _ => return Err(DescError::InvalidShape),
        };

        Ok(aggregate.with_qualifier(qualifier))
    }
}

impl Aggregate {
    /// Reads an aggregate description like
    /// `{"tuple": [{"name": "int"}, {"name": "double"}], "const": true}`.
    pub fn from_json(data: &[u8]) -> Result<Aggregate, DescError> {
        let raw: JsonAggregate = serde_json::de::from_slice(data).map_err(|e| DescError::Syntax {
            message: e.to_string(),
        })?;
        raw.get_aggregate()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{mk_id, mk_type};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tuple_desc() {
        let agg = Aggregate::from_json(
            br#"{
                "tuple": [
                    {"name": "int"},
                    {"name": "double", "const": true},
                    {"name": "std::string", "reference": "lvalue"}
                ],
                "const": true,
                "reference": "lvalue"
            }"#,
        )
        .unwrap();

        assert_eq!(
            agg,
            Aggregate::tuple(TypeList::new(vec![
                mk_type!(Int),
                Type {
                    cv: CVQualifier::CONST,
                    ..mk_type!(Double)
                },
                Type {
                    reference: RefQualifier::LValue,
                    ..Type::ud(mk_id!("std", "string"))
                },
            ]))
            .with_qualifier(Qualifier::new(CVQualifier::CONST, RefQualifier::LValue))
        );
    }

    #[test]
    fn test_array_desc() {
        let agg = Aggregate::from_json(
            br#"{"array": {"element": {"name": "float"}, "size": 5}, "volatile": true}"#,
        )
        .unwrap();

        assert_eq!(
            agg,
            Aggregate::array(mk_type!(Float), 5)
                .with_qualifier(Qualifier::new(CVQualifier::VOLATILE, RefQualifier::None))
        );
        assert_eq!(agg.size(), 5);
    }

    #[test]
    fn test_bad_reference() {
        let err = Aggregate::from_json(
            br#"{"tuple": [{"name": "int", "reference": "pointer"}]}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            DescError::InvalidReference {
                value: "pointer".to_string()
            }
        );
    }

    #[test]
    fn test_bad_shape() {
        let both = Aggregate::from_json(
            br#"{"tuple": [], "array": {"element": {"name": "int"}, "size": 1}}"#,
        )
        .unwrap_err();
        let neither = Aggregate::from_json(br#"{"const": true}"#).unwrap_err();

        assert_eq!(both, DescError::InvalidShape);
        assert_eq!(neither, DescError::InvalidShape);
    }

    #[test]
    fn test_bad_syntax() {
        match Aggregate::from_json(b"{").unwrap_err() {
            DescError::Syntax { .. } => {}
            e => panic!("Expected a syntax error, got {:?}", e),
        }
    }

    #[test]
    fn test_desc_then_extract() {
        let agg = Aggregate::from_json(
            br#"{
                "tuple": [{"name": "int"}, {"name": "double"}, {"name": "char"}],
                "const": true,
                "reference": "lvalue"
            }"#,
        )
        .unwrap();

        assert_eq!(
            agg.extract_range(1, 3).unwrap(),
            TypeList::new(vec![
                Type {
                    cv: CVQualifier::CONST,
                    reference: RefQualifier::LValue,
                    ..mk_type!(Double)
                },
                Type {
                    cv: CVQualifier::CONST,
                    reference: RefQualifier::LValue,
                    ..mk_type!(Char)
                },
            ])
        );
    }
}
