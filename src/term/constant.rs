use std::{
    fmt,
    hash::{Hash, Hasher},
    num::ParseIntError,
    str::FromStr,
};

/// Constant value carried by a constant term
///
/// Two constants are equal only if they are the same kind and carry the same
/// value. Floats compare by bit pattern so a constant always equals itself,
/// `NaN` included, and `0.0` is distinct from `-0.0`
#[derive(Debug, Clone)]
pub enum Constant {
    #[allow(missing_docs)]
    Integer(i64),
    #[allow(missing_docs)]
    Float(f64),
    #[allow(missing_docs)]
    Boolean(bool),
    /// Text, `None` is the explicit absence of a value and never equals empty
    /// text
    Text(Option<Box<str>>),
    #[allow(missing_docs)]
    Version(Version),
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => {
                left.to_bits() == right.to_bits()
            }
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Version(left), Self::Version(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Boolean(value) => value.hash(state),
            Self::Text(value) => value.hash(state),
            Self::Version(value) => value.hash(state),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(Some(value)) => write!(f, "{value:?}"),
            Self::Text(None) => f.write_str("null"),
            Self::Version(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Constant {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.into()))
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Self::Text(Some(value.into_boxed_str()))
    }
}

impl From<Option<&str>> for Constant {
    fn from(value: Option<&str>) -> Self {
        Self::Text(value.map(Into::into))
    }
}

impl From<Option<String>> for Constant {
    fn from(value: Option<String>) -> Self {
        Self::Text(value.map(String::into_boxed_str))
    }
}

impl From<Version> for Constant {
    fn from(value: Version) -> Self {
        Self::Version(value)
    }
}

/// Opaque comparable version identifier, `major.minor[.build[.revision]]`
///
/// Components are compared one by one, a missing component is not the same as
/// a zero one (`1.2` != `1.2.0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    build: Option<u32>,
    revision: Option<u32>,
}

impl Version {
    /// `major.minor`
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    /// `major.minor.build.revision`
    #[must_use]
    pub const fn full(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build: Some(build),
            revision: Some(revision),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn build(&self) -> Option<u32> {
        self.build
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn revision(&self) -> Option<u32> {
        self.revision
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{revision}")?;
        }
        Ok(())
    }
}

/// Returned when a string is not a valid [`Version`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Fewer than two or more than four components
    #[error("Expected 2 to 4 version components, found {0}")]
    ComponentCount(usize),
    /// A component is not an unsigned integer
    #[error("Invalid version component {component:?}")]
    Component {
        #[allow(missing_docs)]
        component: String,
        #[allow(missing_docs)]
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('.').collect::<Vec<_>>();
        if !(2..=4).contains(&parts.len()) {
            return Err(VersionError::ComponentCount(parts.len()));
        }
        let mut components = Vec::with_capacity(parts.len());
        for part in parts {
            let component =
                part.parse::<u32>().map_err(|source| VersionError::Component {
                    component: part.to_owned(),
                    source,
                })?;
            components.push(component);
        }
        Ok(Self {
            major: components[0],
            minor: components[1],
            build: components.get(2).copied(),
            revision: components.get(3).copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Constant, Version, VersionError};

    #[test]
    fn text_none_is_not_empty() {
        assert_eq!(Constant::from(None::<&str>), Constant::Text(None));
        assert!(Constant::from("") != Constant::Text(None));
    }

    #[test]
    fn kinds_never_compare_equal() {
        assert!(Constant::from(1) != Constant::from(1.0));
        assert!(Constant::from(true) != Constant::from(1));
        assert!(Constant::from("1") != Constant::from(1));
    }

    #[test]
    fn floats_compare_bits() {
        assert_eq!(Constant::from(f64::NAN), Constant::from(f64::NAN));
        assert!(Constant::from(0.0) != Constant::from(-0.0));
        assert!(
            Constant::from(std::f64::consts::PI)
                != Constant::from(std::f64::consts::E)
        );
    }

    #[test]
    fn parse_version() -> Result<(), VersionError> {
        assert_eq!(Version::full(1, 2, 3, 4), "1.2.3.4".parse::<Version>()?);
        assert_eq!(Version::new(1, 2), "1.2".parse::<Version>()?);
        assert!("1.2".parse::<Version>()? != "1.2.0".parse::<Version>()?);
        assert_eq!("1.2.3.4", Version::full(1, 2, 3, 4).to_string());
        Ok(())
    }

    #[test]
    fn parse_version_errors() {
        assert_eq!(
            Err(VersionError::ComponentCount(1)),
            "1".parse::<Version>()
        );
        assert_eq!(
            Err(VersionError::ComponentCount(5)),
            "1.2.3.4.5".parse::<Version>()
        );
        assert!(matches!(
            "1.x".parse::<Version>(),
            Err(VersionError::Component { component, .. }) if component == "x"
        ));
    }

    #[test]
    fn display() {
        assert_eq!("3", Constant::from(3).to_string());
        assert_eq!("1.5", Constant::from(1.5).to_string());
        assert_eq!("\"bob\"", Constant::from("bob").to_string());
        assert_eq!("null", Constant::Text(None).to_string());
        assert_eq!("false", Constant::from(false).to_string());
    }
}
