/*!
Lookup and validation over the instances of an [Enumeration].

Every function takes the enumeration as its first type parameter and is a pure read
of that type's static instances:

    use enumerator::{lookup, Enumeration};

    #[derive(Enumeration)]
    #[enumeration(u32)]
    enum Colour {
        #[instance("red", 1001)]
        Red,
        #[instance("blue", 1002)]
        Blue,
    }

    let blue = lookup::get_by_name::<Colour>("blue", None).unwrap();
    assert!(blue.equals(Some(&Colour::Blue)));
    assert!(lookup::get_by_value::<Colour>(&2001, None).is_none());
    assert!(lookup::is_value_valid::<Colour>(&1001));
*/

use std::any::type_name;

use tracing::trace;

use crate::Enumeration;
use crate::Truthy;

/// All instances of `T`, in declaration order.
pub fn get_all<T: Enumeration>() -> &'static [T] {
    T::instances()
}

/// The first instance of `T` named `name`, or `default` if there is none.
///
/// `default` may borrow a case held anywhere, not only one of the statics.
///
/// A blank `name` (empty or only whitespace) returns `default` without searching,
/// even if `T` declares an instance with an empty name.
pub fn get_by_name<'a, T: Enumeration>(name: &str, default: Option<&'a T>) -> Option<&'a T> {
    if name.trim().is_empty() {
        trace!(enumeration = type_name::<T>(), "blank name, skipping lookup");
        return default;
    }
    let found: Option<&'a T> = find_by_name::<T>(name);
    found.or_else(|| {
        trace!(enumeration = type_name::<T>(), name, "no instance with this name");
        default
    })
}

/// The first instance of `T` whose value equals `value`, or `default` if there is
/// none.
///
/// A falsy `value` (zero, empty string, `false`, ...) returns `default` without
/// searching. Instances with falsy values can therefore never be found here; use
/// [is_value_valid] or iterate [get_all] for those.
pub fn get_by_value<'a, T>(value: &T::Value, default: Option<&'a T>) -> Option<&'a T>
where
    T: Enumeration,
    T::Value: Truthy,
{
    if !value.is_truthy() {
        trace!(enumeration = type_name::<T>(), "falsy value, skipping lookup");
        return default;
    }
    let found: Option<&'a T> = find_by_value::<T>(value);
    found.or_else(|| {
        trace!(enumeration = type_name::<T>(), "no instance with this value");
        default
    })
}

/// Whether `T` declares an instance named `name`. Blank names are searched for
/// literally.
pub fn is_name_valid<T: Enumeration>(name: &str) -> bool {
    find_by_name::<T>(name).is_some()
}

/// Whether `T` declares an instance with value `value`. Falsy values are searched for
/// like any other.
pub fn is_value_valid<T: Enumeration>(value: &T::Value) -> bool {
    find_by_value::<T>(value).is_some()
}

/// First instance in declaration order with the given name.
fn find_by_name<T: Enumeration>(name: &str) -> Option<&'static T> {
    get_all::<T>().iter().find(|instance| instance.name() == name)
}

/// First instance in declaration order with the given value.
fn find_by_value<T: Enumeration>(value: &T::Value) -> Option<&'static T> {
    get_all::<T>().iter().find(|instance| instance.value() == value)
}
