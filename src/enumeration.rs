use crate::EnumInstance;

/// A type whose values are a closed, ordered set of [EnumInstance]s.
///
/// Usually derived with `#[derive(Enumeration)]` on a fieldless enum, but it can
/// also be implemented by hand for a newtype around [EnumInstance] backed by a
/// `static` array.
///
/// # Rejected declarations
///
/// The derive only accepts fieldless, non-generic enums:
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// struct Colour(u32);
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour<T> {
///     #[instance(1)]
///     Red,
///     #[instance(2)]
///     Blue(T),
/// }
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour {
///     #[instance(1)]
///     Red(u8),
/// }
/// ```
///
/// The value type is required and must be a single type:
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// enum Colour {
///     #[instance(1)]
///     Red,
/// }
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32, u8)]
/// enum Colour {
///     #[instance(1)]
///     Red,
/// }
/// ```
///
/// Every variant needs exactly one `#[instance]` with a value and an optional
/// string literal name:
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour {
///     #[instance(1)]
///     Red,
///     Blue,
/// }
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour {
///     #[instance(1)]
///     #[instance(2)]
///     Red,
/// }
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// const RED: &str = "red";
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour {
///     #[instance(RED, 1)]
///     Red,
/// }
/// ```
///
/// ```compile_fail
/// use enumerator::Enumeration;
///
/// #[derive(Enumeration)]
/// #[enumeration(u32)]
/// enum Colour {
///     #[instance("red", 1, 2)]
///     Red,
/// }
/// ```
pub trait Enumeration: Sized + 'static {
    /// The type of each instance's value.
    type Value: PartialEq + 'static;

    /// All declared instances, in declaration order.
    fn instances() -> &'static [Self];

    /// The instance backing this case. Its address is the case's identity.
    fn instance(&self) -> &EnumInstance<Self::Value>;

    /// Name of this case's instance.
    fn name(&self) -> &'static str {
        self.instance().name()
    }

    /// Value of this case's instance.
    fn value(&self) -> &Self::Value {
        self.instance().value()
    }

    /// Returns `true` iff `other` is the same case as `self`.
    ///
    /// Cases of two different enumerations are never equal, even with identical
    /// names and values.
    fn equals<O: Enumeration>(&self, other: Option<&O>) -> bool {
        self.instance().equals(other.map(|other| other.instance()))
    }
}
