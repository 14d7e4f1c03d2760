/// Identifiers are assigned by the collection store and treated as opaque
/// strings on this side. The store may hand back numeric ids; the adapter
/// coerces them to strings before they reach the domain.
macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn raw(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(UserId);
define_id!(EventId);
