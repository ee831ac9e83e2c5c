/// Dimensions of a decoded texture image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

/// Lifecycle of the optional surface texture.
///
/// Loading happens outside the core; the session only records the outcome.
/// A texture that fails to load leaves the surface drawn untextured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextureState {
    #[default]
    Disabled,
    Pending,
    Ready(TextureInfo),
    Failed(String),
}

impl TextureState {
    /// Whether draws should sample the texture.
    pub fn is_ready(&self) -> bool {
        matches!(self, TextureState::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TextureState::Pending)
    }
}
