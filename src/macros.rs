/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use graft::graft;
///
/// let value = graft!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "encoding"]
/// });
///
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! graft {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::graft!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::graft!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, ValueMap};

    #[test]
    fn test_graft_macro_primitives() {
        assert_eq!(graft!(null), Value::Null);
        assert_eq!(graft!(true), Value::Bool(true));
        assert_eq!(graft!(false), Value::Bool(false));
        assert_eq!(graft!(42), Value::Number(Number::Integer(42)));
        assert_eq!(graft!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(graft!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_graft_macro_arrays() {
        assert_eq!(graft!([]), Value::Array(vec![]));

        let arr = graft!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_graft_macro_objects() {
        assert_eq!(graft!({}), Value::Object(ValueMap::new()));

        let obj = graft!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_graft_macro_nesting() {
        let value = graft!({
            "items": [{"id": 1}, {"id": 2}],
            "empty": {}
        });

        let items = value.as_object().unwrap().get("items").unwrap();
        assert_eq!(items.as_array().unwrap().len(), 2);
    }
}
