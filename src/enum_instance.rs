use std::fmt;
use std::ptr;

/// A single named and valued case of an enumeration.
///
/// Instances are meant to live in `static`s for the whole process. Identity is the
/// address of the instance, not its contents: two instances holding the same name and
/// value are still different cases, even if they belong to the same enumeration.
pub struct EnumInstance<V> {
    /// The case's name. Set once by [EnumInstance::new].
    name: &'static str,
    /// The case's value. Set once by [EnumInstance::new].
    value: V,
}

impl<V> EnumInstance<V> {
    /// Create an instance. Both fields are fixed from here on.
    pub const fn new(name: &'static str, value: V) -> Self {
        Self { name, value }
    }

    /// The case's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The case's value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns `true` iff `other` is this very instance.
    ///
    /// The value type of `other` is free so that cases of unrelated enumerations can
    /// be compared. They are never equal, whatever their names and values are.
    pub fn equals<U>(&self, other: Option<&EnumInstance<U>>) -> bool {
        other.is_some_and(|other| ptr::eq(self.address(), other.address()))
    }

    /// Type-erased address used for identity comparison.
    fn address(&self) -> *const () {
        (self as *const Self).cast()
    }
}

impl<V> PartialEq for EnumInstance<V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl<V> Eq for EnumInstance<V> {}

impl<V: fmt::Debug> fmt::Debug for EnumInstance<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInstance")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl<V> fmt::Display for EnumInstance<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
