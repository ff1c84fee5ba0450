use derive_more::{Display, From, Into};

/// Location of an active uniform inside a linked program, as returned by
/// `glGetUniformLocation`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct UniformLocation(pub i32);

impl UniformLocation {
    /// Returned by the native lookup when the program has no active uniform
    /// with the requested name.
    pub const NOT_FOUND: Self = Self(-1);

    pub fn is_found(self) -> bool {
        self != Self::NOT_FOUND
    }
}

impl Default for UniformLocation {
    fn default() -> Self {
        Self::NOT_FOUND
    }
}

/// Location of an active vertex attribute, as returned by `glGetAttribLocation`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct AttribLocation(pub i32);

impl AttribLocation {
    pub const NOT_FOUND: Self = Self(-1);

    pub fn is_found(self) -> bool {
        self != Self::NOT_FOUND
    }

    /// The location as an attribute index, `None` for [`Self::NOT_FOUND`].
    pub fn index(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }
}

impl Default for AttribLocation {
    fn default() -> Self {
        Self::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_sentinel() {
        assert!(!UniformLocation::NOT_FOUND.is_found());
        assert!(!UniformLocation::default().is_found());
        assert!(UniformLocation(0).is_found());
        assert_eq!(UniformLocation::from(-1), UniformLocation::NOT_FOUND);
    }

    #[test]
    fn test_attrib_index() {
        assert_eq!(AttribLocation(3).index(), Some(3));
        assert_eq!(AttribLocation::NOT_FOUND.index(), None);
        assert!(!AttribLocation::default().is_found());
    }
}
