//! Statically declared field tables.
//!
//! A bindable type lists its fields through [`Bindable::fields`], each pairing
//! a [`Descriptor`] with typed accessors. The orchestrator walks this table in
//! declaration order instead of inspecting the type at runtime.

use crate::descriptor::Descriptor;
use crate::value::{FieldValue, Value, ValueType};

type Setter<T> = Box<dyn Fn(&mut T, Value) -> bool>;
type Getter<T> = Box<dyn Fn(&T) -> Option<String>>;

/// One bindable field of `T`.
pub struct Field<T> {
    name: &'static str,
    descriptor: Descriptor,
    field_type: ValueType,
    field_type_name: &'static str,
    set: Setter<T>,
    get: Getter<T>,
}

impl<T: 'static> Field<T> {
    /// Declares a field.
    ///
    /// # Arguments
    /// * `name` - The field name, used in dumps and error messages
    /// * `descriptor` - How the field's value is resolved and validated
    /// * `get` / `get_mut` - Accessors for the field on `T`
    pub fn new<V>(
        name: &'static str,
        descriptor: impl Into<Descriptor>,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self
    where
        V: FieldValue + 'static,
    {
        Self {
            name,
            descriptor: descriptor.into(),
            field_type: V::value_type(),
            field_type_name: std::any::type_name::<V>(),
            set: Box::new(move |target: &mut T, value: Value| match V::from_value(value) {
                Some(value) => {
                    *get_mut(target) = value;
                    true
                }
                None => false,
            }),
            get: Box::new(move |target: &T| get(target).display_value()),
        }
    }
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns the value type the field accepts.
    pub fn field_type(&self) -> ValueType {
        self.field_type
    }

    /// Returns the Rust type name of the field.
    pub fn field_type_name(&self) -> &'static str {
        self.field_type_name
    }

    /// Writes `value` into the field. Returns false if the types are incompatible.
    pub(crate) fn assign(&self, target: &mut T, value: Value) -> bool {
        (self.set)(target, value)
    }

    /// Renders the field's current value; `None` means the value is absent.
    pub fn display_value(&self, target: &T) -> Option<String> {
        (self.get)(target)
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .field("field_type", &self.field_type)
            .finish_non_exhaustive()
    }
}

/// A type whose fields can be bound from arguments.
pub trait Bindable: Sized + 'static {
    /// Returns the field table, in declaration order.
    fn fields() -> Vec<Field<Self>>;

    /// Returns the name used in error messages and dumps.
    ///
    /// The module path is stripped; generic arguments are kept as written.
    fn type_name() -> &'static str {
        strip_module_path(std::any::type_name::<Self>())
    }
}

fn strip_module_path(full: &str) -> &str {
    let path_end = full.find('<').unwrap_or(full.len());
    match full[..path_end].rfind("::") {
        Some(separator) => &full[separator + 2..],
        None => full,
    }
}

/// Declares a [`Field`] from a struct field name and a descriptor.
///
/// ```
/// use argbind::{Bindable, Field, IntegerArgument, field};
///
/// #[derive(Default)]
/// struct Config {
///     count: i32,
/// }
///
/// impl Bindable for Config {
///     fn fields() -> Vec<Field<Self>> {
///         vec![field!(Config, count, IntegerArgument::new("count").max(10))]
///     }
/// }
/// ```
#[macro_export]
macro_rules! field {
    ($type:ty, $name:ident, $descriptor:expr) => {
        $crate::Field::<$type>::new(
            stringify!($name),
            $descriptor,
            |target: &$type| &target.$name,
            |target: &mut $type| &mut target.$name,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BooleanArgument, StringArgument};

    #[derive(Default)]
    struct Target {
        name: Option<String>,
        flag: bool,
    }

    impl Bindable for Target {
        fn fields() -> Vec<Field<Self>> {
            vec![
                crate::field!(Target, name, StringArgument::new("name")),
                crate::field!(Target, flag, BooleanArgument::new("flag")),
            ]
        }
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let names: Vec<_> = Target::fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "flag"]);
    }

    #[test]
    fn test_assign_and_display() {
        let fields = Target::fields();
        let mut target = Target::default();

        assert_eq!(fields[0].display_value(&target), None);
        assert!(fields[0].assign(&mut target, Value::String(Some("x".to_string()))));
        assert_eq!(target.name.as_deref(), Some("x"));
        assert_eq!(fields[0].display_value(&target).as_deref(), Some("x"));
    }

    #[test]
    fn test_assign_rejects_incompatible_value() {
        let fields = Target::fields();
        let mut target = Target::default();

        assert!(!fields[1].assign(&mut target, Value::Integer(1)));
        assert!(!target.flag);
    }

    #[test]
    fn test_field_type() {
        let fields = Target::fields();
        assert_eq!(fields[0].field_type(), ValueType::String);
        assert_eq!(fields[1].field_type(), ValueType::Boolean);
        assert_eq!(fields[1].field_type_name(), "bool");
    }

    #[test]
    fn test_type_name_strips_module_path() {
        assert_eq!(Target::type_name(), "Target");
    }

    #[derive(Default)]
    struct Wrapper<T> {
        flag: bool,
        _inner: std::marker::PhantomData<T>,
    }

    impl<T: 'static> Bindable for Wrapper<T> {
        fn fields() -> Vec<Field<Self>> {
            vec![crate::field!(Wrapper<T>, flag, BooleanArgument::new("flag"))]
        }
    }

    #[test]
    fn test_type_name_keeps_generic_arguments() {
        let name = Wrapper::<Target>::type_name();
        assert!(name.starts_with("Wrapper<"), "unexpected name {:?}", name);
        assert!(name.ends_with("::Target>"), "unexpected name {:?}", name);
        assert_eq!(strip_module_path("a::b::Wrapper<m::Inner>"), "Wrapper<m::Inner>");
        assert_eq!(strip_module_path("Plain"), "Plain");
        assert_eq!(strip_module_path("i32"), "i32");
    }
}
