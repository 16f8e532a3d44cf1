/*!
Rich enumerations: named, valued cases with lookup by name or value.

Declare an enumeration by deriving [Enumeration] on a fieldless enum. Every variant
is backed by one static [EnumInstance], which gives the variant its name, its value
and its identity:

    use enumerator::{lookup, Enumeration};

    #[derive(Clone, Copy, Debug, Enumeration)]
    #[enumeration(u32)]
    enum ColourType {
        #[instance("red", 1001)]
        Red,
        #[instance("blue", 1002)]
        Blue,
        #[instance(1003)]
        Green,
    }

    assert_eq!(ColourType::Green.name(), "Green");
    assert_eq!(*ColourType::Blue.value(), 1002);
    assert_eq!(lookup::get_all::<ColourType>().len(), 3);

    let fallback = &ColourType::Red;
    let found = lookup::get_by_name("purple", Some(fallback)).unwrap();
    assert!(found.equals(Some(&ColourType::Red)));

Enumerations can also be written by hand as a newtype around [EnumInstance] whose
instances live in a `static` array:

    use enumerator::{EnumInstance, Enumeration};

    struct BodyPart(EnumInstance<u32>);

    static BODY_PARTS: [BodyPart; 2] = [
        BodyPart(EnumInstance::new("hand", 1)),
        BodyPart(EnumInstance::new("foot", 2)),
    ];

    impl Enumeration for BodyPart {
        type Value = u32;

        fn instances() -> &'static [Self] {
            &BODY_PARTS
        }

        fn instance(&self) -> &EnumInstance<u32> {
            &self.0
        }
    }

    assert!(enumerator::lookup::is_name_valid::<BodyPart>("foot"));

Equality between cases is identity: a case equals only itself, never a case of another
enumeration that happens to share its name and value.
*/
#![warn(clippy::missing_docs_in_private_items)]

extern crate self as enumerator;

mod enum_instance;
mod enumeration;
pub mod lookup;
mod truthy;


pub use enum_instance::EnumInstance;
pub use enumeration::Enumeration;
pub use enumerator_derive::Enumeration;
pub use truthy::Truthy;
