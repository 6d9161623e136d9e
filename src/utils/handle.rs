//! Typed wrappers around the numeric object names handed out by OpenGL.
//!
//! Every wrapper is `#[repr(transparent)]` over `u32`, so a slice of them can
//! be passed to the native layer as a slice of raw names without copying.

use std::fmt::Debug;
use std::hash::Hash;

/// The raw object name as seen by the native layer.
pub type RawId = u32;

/// Common behaviour of the per-category object names.
///
/// # Safety
///
/// Implementors must be `#[repr(transparent)]` wrappers around a `RawId`. The
/// backends rely on this to reinterpret `&[Self]` as `&[RawId]`. Use
/// `impl_gl_id!` instead of implementing this by hand.
pub unsafe trait GlId: Debug + Copy + Hash + PartialEq + Eq {
    /// The reserved name `0`, which unbinds the target it is bound to.
    const NONE: Self;

    fn new(id: RawId) -> Self;
    fn raw(self) -> RawId;

    #[inline]
    fn is_none(self) -> bool {
        self.raw() == 0
    }
}

/// Views a slice of typed names as raw names.
#[inline]
pub fn as_raw<T: GlId>(ids: &[T]) -> &[RawId] {
    unsafe { ::std::slice::from_raw_parts(ids.as_ptr() as *const RawId, ids.len()) }
}

/// Views a mutable slice of typed names as raw names, used by the `gen_*`
/// family to let the native layer write into caller storage.
#[inline]
pub fn as_raw_mut<T: GlId>(ids: &mut [T]) -> &mut [RawId] {
    unsafe { ::std::slice::from_raw_parts_mut(ids.as_mut_ptr() as *mut RawId, ids.len()) }
}

#[macro_export]
macro_rules! impl_gl_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::utils::handle::RawId);

        impl $name {
            pub const NONE: $name = $name(0);

            #[inline]
            pub fn new(id: $crate::utils::handle::RawId) -> Self {
                $name(id)
            }

            #[inline]
            pub fn raw(self) -> $crate::utils::handle::RawId {
                self.0
            }

            #[inline]
            pub fn is_none(self) -> bool {
                self.0 == 0
            }
        }

        unsafe impl $crate::utils::handle::GlId for $name {
            const NONE: $name = $name(0);

            #[inline]
            fn new(id: $crate::utils::handle::RawId) -> Self {
                $name(id)
            }

            #[inline]
            fn raw(self) -> $crate::utils::handle::RawId {
                self.0
            }
        }

        impl From<$name> for $crate::utils::handle::RawId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

impl_gl_id!(
    /// Name of a shader object, from `create_shader`.
    ShaderId
);
impl_gl_id!(
    /// Name of a program object, from `create_program`.
    ProgramId
);
impl_gl_id!(BufferId);
impl_gl_id!(VertexArrayId);
impl_gl_id!(TextureId);
impl_gl_id!(SamplerId);
impl_gl_id!(QueryId);
impl_gl_id!(FramebufferId);
impl_gl_id!(RenderbufferId);
impl_gl_id!(TransformFeedbackId);

/// Location of a uniform variable inside a linked program.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniformLocation(i32);

impl UniformLocation {
    #[inline]
    pub fn new(location: i32) -> Self {
        UniformLocation(location)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }
}

impl ::std::fmt::Display for UniformLocation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "UniformLocation({})", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn basic() {
        let shader = ShaderId::new(3);
        assert_eq!(shader.raw(), 3);
        assert!(!shader.is_none());
        assert!(ShaderId::NONE.is_none());
        assert_eq!(ShaderId::default(), ShaderId::NONE);
        assert_eq!(u32::from(shader), 3);
        assert_eq!(format!("{}", shader), "ShaderId(3)");
    }

    #[test]
    fn container() {
        let mut set = HashSet::new();
        assert!(set.insert(BufferId::new(1)));
        assert!(set.insert(BufferId::new(2)));
        assert!(!set.insert(BufferId::new(1)));
        assert!(set.contains(&BufferId::new(2)));
    }

    #[test]
    fn raw_views() {
        let mut ids = [TextureId::NONE; 3];
        {
            let raw = as_raw_mut(&mut ids);
            raw[0] = 7;
            raw[2] = 9;
        }

        assert_eq!(ids[0], TextureId::new(7));
        assert!(ids[1].is_none());
        assert_eq!(as_raw(&ids), &[7, 0, 9]);
    }
}
