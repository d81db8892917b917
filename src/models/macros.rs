//! Accessor generation for store-backed models

/// Generate typed getter/setter pairs reading and writing the model's
/// backing store.
///
/// ```ignore
/// impl SortProperty {
///     store_accessors! {
///         /// Sort descending when true
///         is_descending / set_is_descending: bool = "isDescending";
///     }
/// }
/// ```
macro_rules! store_accessors {
    ($( $(#[$meta:meta])* $getter:ident / $setter:ident : $ty:ty = $key:literal; )*) => {
        $(
            $(#[$meta])*
            pub fn $getter(&self) -> Result<Option<$ty>, $crate::store::StoreError> {
                use $crate::store::BackingStoreExt;
                <Self as $crate::serialization::Parsable>::backing_store(self).get_value::<$ty>($key)
            }

            pub fn $setter(&mut self, value: Option<$ty>) -> Result<(), $crate::store::StoreError> {
                use $crate::store::BackingStoreExt;
                <Self as $crate::serialization::Parsable>::backing_store_mut(self).set_value($key, value)
            }
        )*
    };
}

/// Implement `Deref`/`DerefMut` from a subtype to its embedded base
macro_rules! derive_base {
    ($ty:ty => $base:ty) => {
        impl std::ops::Deref for $ty {
            type Target = $base;

            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }

        impl std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.base
            }
        }
    };
}

/// Implement `Parsable`, `ParsableFactory` and `Default` for a model with
/// `new()`, `write_fields()` and a `FieldDeserializable` impl.
///
/// `store` names the field holding the model's own store; `base` names the
/// embedded base whose store the model shares.
macro_rules! impl_parsable {
    ($ty:ty { store: $field:ident }) => {
        impl_parsable!(@impl $ty, |model| &model.$field, |model| &mut model.$field);
    };
    ($ty:ty { base: $field:ident }) => {
        impl_parsable!(
            @impl $ty,
            |model| $crate::serialization::Parsable::backing_store(&model.$field),
            |model| $crate::serialization::Parsable::backing_store_mut(&mut model.$field)
        );
    };
    (@impl $ty:ty, |$r:ident| $get:expr, |$w:ident| $get_mut:expr) => {
        impl $crate::serialization::Parsable for $ty {
            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.write_fields(writer)?;
                writer.write_additional_data(
                    &$crate::serialization::Parsable::additional_data(self)?,
                )
            }

            fn deserialize_fields(
                &mut self,
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<(), $crate::serialization::SerializationError> {
                let table = <Self as $crate::serialization::FieldDeserializable>::field_deserializers();
                $crate::serialization::deserialize_with(self, &table, node)
            }

            fn backing_store(&self) -> &$crate::store::ModelStore {
                let $r = self;
                $get
            }

            fn backing_store_mut(&mut self) -> &mut $crate::store::ModelStore {
                let $w = self;
                $get_mut
            }
        }

        impl $crate::serialization::ParsableFactory for $ty {
            fn create_from_discriminator_value(
                _node: &dyn $crate::serialization::ParseNode,
            ) -> Result<Self, $crate::serialization::SerializationError> {
                Ok(Self::new())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
