//! Helper macro generating port error enums with snake_case constructors.
//!
//! Each variant gets a `thiserror` message and a constructor whose fields
//! accept anything convertible into the declared type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for port error enums.
    define_port_error! {
        pub enum StoreCheckError {
            Unreachable { message: String } => "store unreachable: {message}",
            Timeout { seconds: u64 } => "store timed out after {seconds}s",
            Rejected { message: String, code: i32 } => "store rejected ({code}): {message}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = StoreCheckError::unreachable("no route to host");
        assert_eq!(err.to_string(), "store unreachable: no route to host");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        let err = StoreCheckError::timeout(30_u64);
        assert_eq!(err.to_string(), "store timed out after 30s");
    }

    #[test]
    fn mixed_fields_are_supported() {
        let err = StoreCheckError::rejected("auth failed", 18);
        assert_eq!(err.to_string(), "store rejected (18): auth failed");
    }
}
