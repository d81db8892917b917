//! Polymorphic model families
//!
//! A family is a closed set of concrete types sharing a base. On the wire
//! the concrete type is named by `@odata.type`; in Rust the family is an
//! enum with one variant per concrete type, and decoding picks the variant
//! from the discriminator before any field is read.

/// Declare a family enum with discriminator dispatch.
///
/// The first variant is the base type, used when the discriminator is
/// absent, not a string, or not one of the listed values.
macro_rules! discriminated_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            base $base_variant:ident($base_ty:ty),
            $( $discriminator:literal => $variant:ident($ty:ty), )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $base_variant($base_ty),
            $( $variant($ty), )*
        }

        impl $name {
            /// Discriminator values that select a subtype
            pub const DISCRIMINATORS: &'static [&'static str] = &[$($discriminator),*];

            /// Construct the variant named by `discriminator`, falling back to the base type
            pub fn from_discriminator(discriminator: Option<&str>) -> Self {
                match discriminator {
                    $( Some($discriminator) => Self::$variant(<$ty>::new()), )*
                    Some(unknown) => {
                        tracing::debug!(
                            discriminator = unknown,
                            family = stringify!($name),
                            "Unknown discriminator, decoding as base type"
                        );
                        Self::$base_variant(<$base_ty>::new())
                    }
                    None => Self::$base_variant(<$base_ty>::new()),
                }
            }

            /// Name of the concrete Rust type held by this value
            pub fn type_name(&self) -> &'static str {
                match self {
                    Self::$base_variant(_) => stringify!($base_ty),
                    $( Self::$variant(_) => stringify!($ty), )*
                }
            }

            pub fn as_parsable(&self) -> &dyn $crate::serialization::Parsable {
                match self {
                    Self::$base_variant(model) => model,
                    $( Self::$variant(model) => model, )*
                }
            }

            fn as_parsable_mut(&mut self) -> &mut dyn $crate::serialization::Parsable {
                match self {
                    Self::$base_variant(model) => model,
                    $( Self::$variant(model) => model, )*
                }
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.as_parsable().serialize(writer)
            }

            fn deserialize_fields(
                &mut self,
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.as_parsable_mut().deserialize_fields(node)
            }

            fn backing_store(&self) -> &$crate::store::ModelStore {
                self.as_parsable().backing_store()
            }

            fn backing_store_mut(&mut self) -> &mut $crate::store::ModelStore {
                self.as_parsable_mut().backing_store_mut()
            }
        }

        impl $crate::serialization::ParsableFactory for $name {
            fn create_from_discriminator_value(
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<Self, $crate::serialization::SerializationError> {
                let discriminator = $crate::serialization::discriminator_value(node);
                Ok(Self::from_discriminator(discriminator.as_deref()))
            }
        }

        impl From<$base_ty> for $name {
            fn from(model: $base_ty) -> Self {
                Self::$base_variant(model)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(model: $ty) -> Self {
                    Self::$variant(model)
                }
            }
        )*
    };
}
