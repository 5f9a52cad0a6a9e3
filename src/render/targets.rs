use super::helpers;

/// Depth attachment sized to the surface; recreated on resize.
pub(crate) struct RenderTargets {
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, "depth_tex", width, height);
        Self {
            _depth_tex: depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height);
    }
}
