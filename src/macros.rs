//! Declarative schema generation for configuration records.

/// Implements [`Record`](crate::schema::Record) for an existing struct.
///
/// Each line of the body describes one field, in declaration order:
///
/// - `field,` for a leaf scalar whose external name is the field's own name
/// - `field => "Name",` for a leaf scalar with an explicit external name
/// - `field: group,` for a nested record with no name prefix
/// - `field: group "prefix",` for a nested record whose prefix is prepended
///   to every descendant's resolved name
///
/// Fields left out of the body are invisible to loading.
///
/// ```
/// #[derive(Default)]
/// struct DbConfig {
///     name: String,
///     port: u16,
/// }
///
/// strata::schema! {
///     DbConfig {
///         name => "Name",
///         port,
///     }
/// }
///
/// #[derive(Default)]
/// struct AppConfig {
///     listen_url: String,
///     db: DbConfig,
/// }
///
/// strata::schema! {
///     AppConfig {
///         listen_url => "ListenURL",
///         db: group "db",
///     }
/// }
/// ```
#[macro_export]
macro_rules! schema {
    ($ty:ty { $($body:tt)* }) => {
        impl $crate::schema::Record for $ty {
            fn entries(&mut self) -> ::std::vec::Vec<$crate::schema::Entry<'_>> {
                let mut entries = ::std::vec::Vec::new();
                $crate::schema!(@push self, entries, $($body)*);
                entries
            }
        }
    };

    (@push $self:ident, $out:ident,) => {};

    // Leaf with an explicit external name.
    (@push $self:ident, $out:ident, $field:ident => $ext:literal, $($rest:tt)*) => {
        $out.push($crate::schema::Entry::leaf(
            stringify!($field),
            ::std::option::Option::Some($ext),
            $crate::schema::Bind::bind(&mut $self.$field),
        ));
        $crate::schema!(@push $self, $out, $($rest)*);
    };
    (@push $self:ident, $out:ident, $field:ident => $ext:literal) => {
        $crate::schema!(@push $self, $out, $field => $ext,);
    };

    // Nested group with a name prefix.
    (@push $self:ident, $out:ident, $field:ident : group $prefix:literal, $($rest:tt)*) => {
        $out.push($crate::schema::Entry::group(
            stringify!($field),
            $prefix,
            &mut $self.$field,
        ));
        $crate::schema!(@push $self, $out, $($rest)*);
    };
    (@push $self:ident, $out:ident, $field:ident : group $prefix:literal) => {
        $crate::schema!(@push $self, $out, $field : group $prefix,);
    };

    // Nested group without a prefix.
    (@push $self:ident, $out:ident, $field:ident : group, $($rest:tt)*) => {
        $out.push($crate::schema::Entry::group(
            stringify!($field),
            "",
            &mut $self.$field,
        ));
        $crate::schema!(@push $self, $out, $($rest)*);
    };
    (@push $self:ident, $out:ident, $field:ident : group) => {
        $crate::schema!(@push $self, $out, $field : group,);
    };

    // Leaf using its declared name.
    (@push $self:ident, $out:ident, $field:ident, $($rest:tt)*) => {
        $out.push($crate::schema::Entry::leaf(
            stringify!($field),
            ::std::option::Option::None,
            $crate::schema::Bind::bind(&mut $self.$field),
        ));
        $crate::schema!(@push $self, $out, $($rest)*);
    };
    (@push $self:ident, $out:ident, $field:ident) => {
        $crate::schema!(@push $self, $out, $field,);
    };
}
