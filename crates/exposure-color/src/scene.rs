//! Scene object color bindings
//!
//! A scene object references its surface colors indirectly through integer
//! texture handles. `-1` means nothing is bound and the caller's intrinsic
//! color is used instead. Geometry is opaque here; the object is generic
//! over whatever shape type the scene graph uses.

use crate::color::{RgbF, RgbU8};
use crate::matrix;
use crate::{Error, Result};
use tracing::trace;

/// Index of refraction used when no material data is available
///
/// 5.0 is far above physical materials (roughly 1.0 to 2.5) and looks like
/// a placeholder, but reference scenes were produced with it.
pub const DEFAULT_IOR: f32 = 5.0;

/// Handle into an external texture table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub i32);

impl TextureId {
    /// No texture bound
    pub const UNBOUND: Self = Self(-1);

    /// Wrap a raw handle
    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw handle value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// True unless the handle is [`TextureId::UNBOUND`]
    #[inline]
    pub const fn is_bound(self) -> bool {
        self.0 != Self::UNBOUND.0
    }

    /// Table index, `None` for negative handles
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl Default for TextureId {
    fn default() -> Self {
        Self::UNBOUND
    }
}

impl From<i32> for TextureId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Which of an object's texture slots to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureChannel {
    Diffuse,
    Specular,
    Glossiness,
}

impl TextureChannel {
    pub const ALL: [TextureChannel; 3] = [Self::Diffuse, Self::Specular, Self::Glossiness];
}

/// Source of texel colors, indexed by texture handle
pub trait TextureTable {
    /// Texel at `index`, `None` if the table has no such entry
    fn texel(&self, index: usize) -> Option<RgbF>;
}

impl TextureTable for [RgbF] {
    fn texel(&self, index: usize) -> Option<RgbF> {
        self.get(index).copied()
    }
}

impl TextureTable for Vec<RgbF> {
    fn texel(&self, index: usize) -> Option<RgbF> {
        self.as_slice().texel(index)
    }
}

/// Quantized texels are scaled to [0, 1] per channel
impl TextureTable for [RgbU8] {
    fn texel(&self, index: usize) -> Option<RgbF> {
        self.get(index)
            .map(|c| RgbF::from_array(c.to_array().map(matrix::normalize)))
    }
}

/// A renderable object: shape, texture bindings and index of refraction
///
/// `Clone` copies every field, shape included.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject<S> {
    pub shape: S,
    pub diffuse_texture: TextureId,
    pub specular_texture: TextureId,
    pub glossiness_texture: TextureId,
    pub ior: f32,
}

impl<S> SceneObject<S> {
    /// Object with no textures bound and the default IOR
    pub fn new(shape: S) -> Self {
        Self {
            shape,
            diffuse_texture: TextureId::UNBOUND,
            specular_texture: TextureId::UNBOUND,
            glossiness_texture: TextureId::UNBOUND,
            ior: DEFAULT_IOR,
        }
    }

    /// Handle bound to `channel`
    pub fn texture(&self, channel: TextureChannel) -> TextureId {
        match channel {
            TextureChannel::Diffuse => self.diffuse_texture,
            TextureChannel::Specular => self.specular_texture,
            TextureChannel::Glossiness => self.glossiness_texture,
        }
    }

    /// Bind `id` to `channel`
    pub fn set_texture(&mut self, channel: TextureChannel, id: TextureId) {
        match channel {
            TextureChannel::Diffuse => self.diffuse_texture = id,
            TextureChannel::Specular => self.specular_texture = id,
            TextureChannel::Glossiness => self.glossiness_texture = id,
        }
    }

    /// Builder form of [`set_texture`](Self::set_texture)
    pub fn with_texture(mut self, channel: TextureChannel, id: impl Into<TextureId>) -> Self {
        self.set_texture(channel, id.into());
        self
    }

    /// Set the index of refraction
    pub fn with_ior(mut self, ior: f32) -> Self {
        self.ior = ior;
        self
    }

    /// Color for `channel`: the bound texel, or `intrinsic` when unbound
    ///
    /// A bound handle missing from `table` is an error.
    pub fn resolve<T>(&self, channel: TextureChannel, table: &T, intrinsic: RgbF) -> Result<RgbF>
    where
        T: TextureTable + ?Sized,
    {
        let id = self.texture(channel);
        if !id.is_bound() {
            trace!(?channel, "texture unbound, using intrinsic color");
            return Ok(intrinsic);
        }
        id.index()
            .and_then(|index| table.texel(index))
            .ok_or(Error::UnknownTexture(id.get()))
    }
}

impl<S: Default> Default for SceneObject<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
