//! Paths addressing values inside nested containers.

use alloc::string::{String, ToString};

/// One segment of the path to a value: an array index or an object key,
/// root-first.
///
/// # Examples
///
/// ```
/// use jsonstream::{PathSegment, path};
///
/// let p = path!["items", 2];
/// assert_eq!(
///     p,
///     vec![PathSegment::Key("items".into()), PathSegment::Index(2)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Position inside an array.
    Index(usize),
    /// Key inside an object.
    Key(String),
}

impl PathSegment {
    /// Returns the index if this segment addresses an array slot.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Key(_) => None,
        }
    }

    /// Returns the key if this segment addresses an object member.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        Self::Key(s.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

#[doc(hidden)]
pub trait PathSegmentFrom<T> {
    fn from_path_segment(value: T) -> PathSegment;
}

macro_rules! impl_integer_as_path_segment {
    ($($t:ty),+) => {
        $(
            impl PathSegmentFrom<$t> for PathSegment {
                fn from_path_segment(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    PathSegment::Index(value as usize)
                }
            }
        )+
    };
}
impl_integer_as_path_segment!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathSegmentFrom<&str> for PathSegment {
    fn from_path_segment(value: &str) -> Self {
        PathSegment::Key(value.to_string())
    }
}

impl PathSegmentFrom<String> for PathSegment {
    fn from_path_segment(value: String) -> Self {
        PathSegment::Key(value)
    }
}

// Custom (de)serialization so a path becomes e.g. `["foo", 0, "bar"]` instead
// of the default tagged representation.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::string::{String, ToString};
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, Unexpected, Visitor},
    };

    use super::PathSegment;

    impl Serialize for PathSegment {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                PathSegment::Key(k) => serializer.serialize_str(k),
                PathSegment::Index(i) => serializer.serialize_u64(*i as u64),
            }
        }
    }

    struct PathSegmentVisitor;

    impl Visitor<'_> for PathSegmentVisitor {
        type Value = PathSegment;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or unsigned integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathSegment::Key(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathSegment::Key(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            #[allow(clippy::cast_possible_truncation)]
            Ok(PathSegment::Index(value as usize))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value < 0 {
                return Err(Error::invalid_value(
                    Unexpected::Signed(value),
                    &"non-negative index",
                ));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(PathSegment::Index(value as usize))
        }
    }

    impl<'de> Deserialize<'de> for PathSegment {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(PathSegmentVisitor)
        }
    }
}
