//! Bound values and the field types that can receive them.
//!
//! - [`Value`]: a converted value produced by a binder
//! - [`ValueType`]: the type a descriptor produces or a field declares
//! - [`FieldValue`]: implemented by every Rust type a descriptor may bind into
//! - [`BindableEnum`] / [`EnumType`]: enumeration metadata for enum arguments

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use camino::{Utf8Path, Utf8PathBuf};
use strum::IntoEnumIterator;

/// Path to a file, as bound from a file path argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(Utf8PathBuf);

/// Path to a directory, as bound from a directory path argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryPath(Utf8PathBuf);

macro_rules! impl_path_newtype {
    ($type:ident) => {
        impl $type {
            pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
                Self(path.into())
            }

            pub fn as_path(&self) -> &Utf8Path {
                &self.0
            }

            pub fn into_inner(self) -> Utf8PathBuf {
                self.0
            }
        }

        impl AsRef<Utf8Path> for $type {
            fn as_ref(&self) -> &Utf8Path {
                &self.0
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_path_newtype!(FilePath);
impl_path_newtype!(DirectoryPath);

/// The type a descriptor produces, or a field declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Integer,
    FilePath,
    DirectoryPath,
    /// An enumeration, identified by its Rust type.
    Enum(EnumTypeId),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::FilePath => "FilePath",
            Self::DirectoryPath => "DirectoryPath",
            Self::Enum(id) => id.name(),
        };
        f.write_str(name)
    }
}

/// Identity of an enumeration's Rust type.
///
/// Two ids are equal only if they come from the same Rust type; the name is
/// kept for messages and help text.
#[derive(Debug, Clone, Copy)]
pub struct EnumTypeId {
    id: TypeId,
    name: &'static str,
}

impl EnumTypeId {
    pub fn of<E: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<E>(),
            name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EnumTypeId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EnumTypeId {}

impl Hash for EnumTypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One member of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    pub name: &'static str,
    pub discriminant: i64,
}

/// Type-erased description of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    id: EnumTypeId,
    members: Vec<EnumMember>,
}

impl EnumType {
    /// Builds the description of a [`BindableEnum`], members in declaration order.
    pub fn of<E: BindableEnum>() -> Self {
        Self {
            id: EnumTypeId::of::<E>(E::type_name()),
            members: E::iter()
                .map(|member| EnumMember {
                    name: member.member_name(),
                    discriminant: member.discriminant(),
                })
                .collect(),
        }
    }

    /// Builds a description of `E` from explicit members.
    pub fn new<E: ?Sized + 'static>(name: &'static str, members: Vec<EnumMember>) -> Self {
        Self {
            id: EnumTypeId::of::<E>(name),
            members,
        }
    }

    pub fn id(&self) -> EnumTypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Returns the member whose discriminant is zero.
    pub fn zero_member(&self) -> Option<EnumMember> {
        self.members.iter().copied().find(|m| m.discriminant == 0)
    }

    /// Finds a member by name.
    pub fn find(&self, name: &str, ignore_case: bool) -> Option<EnumMember> {
        if ignore_case {
            let wanted = name.to_lowercase();
            self.members
                .iter()
                .copied()
                .find(|m| m.name.to_lowercase() == wanted)
        } else {
            self.members.iter().copied().find(|m| m.name == name)
        }
    }

    /// Returns groups of member names that are equal when case is ignored.
    pub fn case_insensitive_collisions(&self) -> Vec<Vec<&'static str>> {
        let mut groups: Vec<(String, Vec<&'static str>)> = Vec::new();
        for member in &self.members {
            let key = member.name.to_lowercase();
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, names)) => names.push(member.name),
                None => groups.push((key, vec![member.name])),
            }
        }
        groups
            .into_iter()
            .map(|(_, names)| names)
            .filter(|names| names.len() > 1)
            .collect()
    }
}

/// An enumeration member bound from an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub enum_type: EnumTypeId,
    pub member: EnumMember,
}

/// A converted value, ready to be written into a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(Option<String>),
    Boolean(bool),
    Integer(i32),
    FilePath(Option<FilePath>),
    DirectoryPath(Option<DirectoryPath>),
    Enum(EnumValue),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Integer(_) => ValueType::Integer,
            Self::FilePath(_) => ValueType::FilePath,
            Self::DirectoryPath(_) => ValueType::DirectoryPath,
            Self::Enum(value) => ValueType::Enum(value.enum_type),
        }
    }
}

/// A Rust type that a descriptor can bind into.
///
/// Implemented for `String`, `Option<String>`, `bool`, `i32`,
/// `Option<FilePath>`, `Option<DirectoryPath>`, and for enumerations through
/// [`bindable_enum!`](crate::bindable_enum).
pub trait FieldValue: Sized {
    /// The value type this field accepts.
    fn value_type() -> ValueType;

    /// Converts a bound value, or returns `None` if the types are incompatible.
    fn from_value(value: Value) -> Option<Self>;

    /// Renders the current value; `None` means the value is absent.
    fn display_value(&self) -> Option<String>;
}

/// A `String` field can not hold null; binding a null default into one fails.
/// Use `Option<String>` for arguments whose default is null.
impl FieldValue for String {
    fn value_type() -> ValueType {
        ValueType::String
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(value) => value,
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl FieldValue for Option<String> {
    fn value_type() -> ValueType {
        ValueType::String
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        self.clone()
    }
}

impl FieldValue for bool {
    fn value_type() -> ValueType {
        ValueType::Boolean
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(value) => Some(value),
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl FieldValue for i32 {
    fn value_type() -> ValueType {
        ValueType::Integer
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl FieldValue for Option<FilePath> {
    fn value_type() -> ValueType {
        ValueType::FilePath
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::FilePath(value) => Some(value),
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }
}

impl FieldValue for Option<DirectoryPath> {
    fn value_type() -> ValueType {
        ValueType::DirectoryPath
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::DirectoryPath(value) => Some(value),
            _ => None,
        }
    }

    fn display_value(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }
}

/// A fieldless enumeration usable with enum arguments.
///
/// Implement it with [`bindable_enum!`](crate::bindable_enum) on a type that
/// derives `strum::EnumIter` and `strum::IntoStaticStr`.
pub trait BindableEnum: IntoEnumIterator + Copy + 'static {
    fn type_name() -> &'static str;

    fn member_name(self) -> &'static str;

    fn discriminant(self) -> i64;
}

#[doc(hidden)]
pub fn enum_from_value<E: BindableEnum>(value: Value) -> Option<E> {
    match value {
        Value::Enum(value) if value.enum_type == EnumTypeId::of::<E>(E::type_name()) => {
            E::iter().find(|m| m.discriminant() == value.member.discriminant)
        }
        _ => None,
    }
}

/// Implements [`BindableEnum`] and [`FieldValue`] for a fieldless enum.
///
/// The enum must derive `Clone`, `Copy`, `strum::EnumIter` and
/// `strum::IntoStaticStr`. The member with discriminant `0` is the default
/// value of optional enum arguments.
///
/// ```
/// use strum::{EnumIter, IntoStaticStr};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
/// enum Verbosity {
///     Quiet,
///     Normal,
///     Diagnostic,
/// }
///
/// argbind::bindable_enum!(Verbosity);
/// ```
#[macro_export]
macro_rules! bindable_enum {
    ($type:ident) => {
        impl $crate::BindableEnum for $type {
            fn type_name() -> &'static str {
                stringify!($type)
            }

            fn member_name(self) -> &'static str {
                self.into()
            }

            fn discriminant(self) -> i64 {
                self as i64
            }
        }

        impl $crate::FieldValue for $type {
            fn value_type() -> $crate::ValueType {
                $crate::ValueType::Enum($crate::EnumTypeId::of::<$type>(stringify!($type)))
            }

            fn from_value(value: $crate::Value) -> ::std::option::Option<Self> {
                $crate::value::enum_from_value::<$type>(value)
            }

            fn display_value(&self) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(
                    <$type as $crate::BindableEnum>::member_name(*self).to_string(),
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumIter, IntoStaticStr};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
    enum Color {
        Red = 1,
        Green = 0,
        Blue = 5,
    }

    crate::bindable_enum!(Color);

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
    enum Casing {
        #[strum(serialize = "value")]
        Lower,
        #[strum(serialize = "VALUE")]
        Upper,
        Other,
    }

    crate::bindable_enum!(Casing);

    #[test]
    fn test_enum_type_of_lists_members_in_declaration_order() {
        let ty = EnumType::of::<Color>();
        assert_eq!(ty.name(), "Color");
        let names: Vec<_> = ty.members().iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Red", "Green", "Blue"]);
        assert_eq!(ty.members()[2].discriminant, 5);
    }

    #[test]
    fn test_zero_member() {
        let ty = EnumType::of::<Color>();
        assert_eq!(ty.zero_member().map(|m| m.name), Some("Green"));

        let ty = EnumType::new::<()>(
            "NoZero",
            vec![EnumMember {
                name: "One",
                discriminant: 1,
            }],
        );
        assert_eq!(ty.zero_member(), None);
    }

    #[test]
    fn test_find_respects_case_setting() {
        let ty = EnumType::of::<Color>();
        assert_eq!(ty.find("Blue", false).map(|m| m.discriminant), Some(5));
        assert_eq!(ty.find("blue", false), None);
        assert_eq!(ty.find("bLUE", true).map(|m| m.discriminant), Some(5));
        assert_eq!(ty.find("Purple", true), None);
    }

    #[test]
    fn test_case_insensitive_collisions() {
        assert!(EnumType::of::<Color>().case_insensitive_collisions().is_empty());
        assert_eq!(
            EnumType::of::<Casing>().case_insensitive_collisions(),
            vec![vec!["value", "VALUE"]]
        );
    }

    #[test]
    fn test_enum_field_value_round_trips_through_value() {
        let ty = EnumType::of::<Color>();
        let member = ty.find("Blue", false).unwrap();
        let value = Value::Enum(EnumValue {
            enum_type: ty.id(),
            member,
        });
        assert_eq!(Color::from_value(value), Some(Color::Blue));
        assert_eq!(Color::value_type(), ValueType::Enum(ty.id()));
        assert_eq!(Color::Red.display_value().as_deref(), Some("Red"));
    }

    #[test]
    fn test_enum_field_rejects_other_enum() {
        let value = Value::Enum(EnumValue {
            enum_type: EnumType::of::<Casing>().id(),
            member: EnumMember {
                name: "value",
                discriminant: 0,
            },
        });
        assert_eq!(Color::from_value(value), None);
    }

    #[test]
    fn test_enum_identity_ignores_name() {
        mod other {
            #[allow(dead_code)]
            pub enum Color {}
        }

        let local = EnumTypeId::of::<Color>("Color");
        assert_eq!(local, EnumType::of::<Color>().id());
        assert_ne!(local, EnumTypeId::of::<other::Color>("Color"));

        let value = Value::Enum(EnumValue {
            enum_type: EnumTypeId::of::<other::Color>("Color"),
            member: EnumMember {
                name: "Green",
                discriminant: 0,
            },
        });
        assert_eq!(Color::from_value(value), None);
    }

    #[test]
    fn test_string_field_from_null() {
        assert_eq!(String::from_value(Value::String(None)), None);
        assert_eq!(String::from_value(Value::String(Some(String::new()))), Some(String::new()));
        assert_eq!(<Option<String>>::from_value(Value::String(None)), Some(None));
        assert_eq!(bool::from_value(Value::Integer(1)), None);
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Integer.to_string(), "Integer");
        assert_eq!(ValueType::DirectoryPath.to_string(), "DirectoryPath");
        assert_eq!(EnumType::of::<Color>().id().name(), "Color");
        assert_eq!(ValueType::Enum(EnumType::of::<Color>().id()).to_string(), "Color");
    }

    #[test]
    fn test_path_display() {
        let path = FilePath::new("dir/file.txt");
        assert_eq!(path.to_string(), "dir/file.txt");
        assert_eq!(path.as_path(), Utf8Path::new("dir/file.txt"));
        assert_eq!(DirectoryPath::new("").to_string(), "");
    }
}
