use std::cmp;

use super::registry;
use super::types::{self, GLenum};
use super::GlFunctions;
use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the version of the context behind `gl`.
    ///
    /// # Unsafe
    ///
    /// The context owning `gl` must be current on this thread.
    pub unsafe fn parse(gl: &dyn GlFunctions) -> Result<Version> {
        Version::parse_str(&gl.get_string(types::VERSION))
    }

    /// Parses a `GL_VERSION` string such as `4.5.0 NVIDIA 390.87` or
    /// `OpenGL ES 3.2 Mesa 18.0`.
    pub fn parse_str(desc: &str) -> Result<Version> {
        let malformed = || Error::MalformedVersion(desc.to_owned());

        let (es, tail) = if desc.starts_with("OpenGL ES-") {
            (true, desc.get(13..).unwrap_or(""))
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let number = tail.split(' ').next().ok_or_else(malformed)?;
        let mut iter = number.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

macro_rules! extensions {
    ($($string:expr => $field:ident,)+) => {
        /// Contains data about the list of extensions.
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Returns the list of extensions supported by the context behind `gl`.
            ///
            /// The version must match the one of the context: GL 3.0 and ES 3.0 onwards are
            /// queried one by one, older ones through the space-separated list.
            pub unsafe fn parse(gl: &dyn GlFunctions, version: Version) -> Extensions {
                let strings: Vec<String> =
                    if version >= Version::GL(3, 0) || version >= Version::ES(3, 0) {
                        let mut num_extensions = [0];
                        gl.get_integer_v(types::NUM_EXTENSIONS, &mut num_extensions);
                        (0..num_extensions[0].max(0) as u32)
                            .map(|i| gl.get_string_i(types::EXTENSIONS, i))
                            .collect()
                    } else {
                        gl.get_string(types::EXTENSIONS)
                            .split(' ')
                            .map(|e| e.to_owned())
                            .collect()
                    };

                Extensions::from_names(strings.iter().map(|v| &v[..]))
            }

            pub fn from_names<'a, T>(names: T) -> Extensions
            where
                T: IntoIterator<Item = &'a str>,
            {
                let mut extensions = Extensions::default();
                for extension in names {
                    match extension {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => ()
                    }
                }

                extensions
            }
        }
    }
}

extensions! {
    "GL_KHR_debug" => gl_khr_debug,
    "GL_ARB_debug_output" => gl_arb_debug_output,
    "GL_ARB_buffer_storage" => gl_arb_buffer_storage,
    "GL_ARB_multi_draw_indirect" => gl_arb_multi_draw_indirect,
    "GL_ARB_timer_query" => gl_arb_timer_query,
    "GL_ARB_texture_storage" => gl_arb_texture_storage,
    "GL_ARB_invalidate_subdata" => gl_arb_invalidate_subdata,
    "GL_ARB_uniform_buffer_object" => gl_arb_uniform_buffer_object,
    "GL_ARB_framebuffer_object" => gl_arb_framebuffer_object,
    "GL_EXT_framebuffer_object" => gl_ext_framebuffer_object,
    "GL_NV_fbo_color_attachments" => gl_nv_fbo_color_attachments,
    "GL_EXT_texture_compression_s3tc" => gl_ext_texture_compression_s3tc,
    "GL_IMG_texture_compression_pvrtc" => gl_img_texture_compression_pvrtc,
    "GL_ARB_ES3_compatibility" => gl_arb_es3_compatibility,
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The list of OpenGL extensions support by this implementation.
    pub extensions: Extensions,

    /// Maximum number of textures that can be bound to a program.
    ///
    /// `glActiveTexture` must be between `GL_TEXTURE0` and `GL_TEXTURE0` + this value - 1.
    pub max_combined_texture_image_units: u32,

    /// Maximum number of color attachment bind points.
    pub max_color_attachments: u32,
}

impl Capabilities {
    /// Queries the context behind `gl`.
    ///
    /// # Unsafe
    ///
    /// The context owning `gl` must be current on this thread.
    pub unsafe fn parse(gl: &dyn GlFunctions) -> Result<Capabilities> {
        let version = Version::parse(gl)?;
        let extensions = Extensions::parse(gl, version);

        Ok(Capabilities {
            version,
            vendor: Capabilities::parse_str(gl, types::VENDOR)?,
            renderer: Capabilities::parse_str(gl, types::RENDERER)?,
            extensions,
            max_combined_texture_image_units: Capabilities::parse_texture_image_units(gl),
            max_color_attachments: Capabilities::parse_color_attachments(gl, version, &extensions),
        })
    }

    /// Whether debug groups, object labels and debug messages have any effect.
    pub fn has_debug_output(&self) -> bool {
        self.version >= Version::GL(4, 3)
            || self.version >= Version::ES(3, 2)
            || self.extensions.gl_khr_debug
    }

    #[inline]
    unsafe fn parse_str(gl: &dyn GlFunctions, id: GLenum) -> Result<String> {
        let s = gl.get_string(id);
        if s.is_empty() {
            return Err(Error::MalformedString(id));
        }

        Ok(s)
    }

    #[inline]
    unsafe fn parse_texture_image_units(gl: &dyn GlFunctions) -> u32 {
        let mut val = [2];
        gl.get_integer_v(types::MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut val);
        val[0].max(0) as u32
    }

    #[inline]
    unsafe fn parse_color_attachments(
        gl: &dyn GlFunctions,
        version: Version,
        exts: &Extensions,
    ) -> u32 {
        if version >= Version::GL(3, 0)
            || version >= Version::ES(3, 0)
            || exts.gl_arb_framebuffer_object
            || exts.gl_ext_framebuffer_object
            || exts.gl_nv_fbo_color_attachments
        {
            let mut val = [4];
            gl.get_integer_v(types::MAX_COLOR_ATTACHMENTS, &mut val);
            val[0].max(0) as u32
        } else if version >= Version::ES(2, 0) {
            1
        } else {
            0
        }
    }
}

/// Queries the capabilities of the installed backend. The
/// queries bypass the diagnostics.
pub unsafe fn capabilities() -> Result<Capabilities> {
    registry::with_active("capabilities", |dispatcher| {
        Capabilities::parse(dispatcher.functions())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_order() {
        assert!(Version::GL(4, 3) > Version::GL(3, 3));
        assert!(Version::GL(3, 3) > Version::GL(3, 0));
        assert!(Version::ES(3, 2) >= Version::ES(3, 2));
        assert!(!(Version::GL(4, 5) >= Version::ES(3, 0)));
        assert!(!(Version::ES(3, 0) >= Version::GL(3, 0)));
    }

    #[test]
    fn parse_version_strings() {
        assert_eq!(
            Version::parse_str("4.5.0 NVIDIA 390.87").unwrap(),
            Version::GL(4, 5)
        );
        assert_eq!(
            Version::parse_str("OpenGL ES 3.2 Mesa 18.0.5").unwrap(),
            Version::ES(3, 2)
        );
        assert_eq!(
            Version::parse_str("OpenGL ES-CM 1.1").unwrap(),
            Version::ES(1, 1)
        );
        assert_eq!(Version::parse_str("2.1").unwrap(), Version::GL(2, 1));

        assert!(Version::parse_str("").is_err());
        assert!(Version::parse_str("4").is_err());
        assert!(Version::parse_str("unknown").is_err());
    }

    #[test]
    fn extension_names() {
        let exts = Extensions::from_names(vec!["GL_KHR_debug", "GL_FOO_bar", ""]);
        assert!(exts.gl_khr_debug);
        assert!(!exts.gl_arb_buffer_storage);
    }
}
