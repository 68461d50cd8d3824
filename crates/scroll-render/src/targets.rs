use super::helpers;

/// Offscreen attachments that follow the surface size.
///
/// Only a depth buffer: meshes and particles share one pass straight into
/// the swapchain.
pub(crate) struct RenderTargets {
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        Self {
            depth_view: helpers::create_depth_view(device, "depth_tex", width, height),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = helpers::create_depth_view(device, "depth_tex", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::depth_extent;

    #[test]
    fn depth_buffer_tracks_surface_size() {
        let e = depth_extent(2880, 1800);
        assert_eq!((e.width, e.height, e.depth_or_array_layers), (2880, 1800, 1));
    }

    #[test]
    fn minimized_surface_still_gets_a_depth_buffer() {
        let e = depth_extent(0, 0);
        assert_eq!((e.width, e.height), (1, 1));
    }
}
