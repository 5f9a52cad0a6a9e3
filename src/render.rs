use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

use crate::constants::CLEAR_RGB;
use crate::textures::DecodedImage;

mod cards;
mod helpers;
mod targets;
use cards::{create_card_resources, create_texture_bind_group, CardResources, Globals, QuadInstance};
use targets::RenderTargets;

pub use crate::camera::view_proj;

/// One textured rounded plane to draw this frame.
pub struct QuadDraw<'u> {
    pub texture_url: &'u str,
    pub model: Mat4,
    pub size: Vec2,
    pub corner_radius: f32,
}

struct CardTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    cards: CardResources,
    targets: RenderTargets,
    textures: FnvHashMap<String, CardTexture>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // An owned canvas handle gives a surface that outlives this borrow
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let cards = create_card_resources(&device, format);
        let targets = RenderTargets::new(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            cards,
            targets,
            textures: FnvHashMap::default(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn upload_texture(&mut self, url: &str, image: &DecodedImage) {
        let (texture, view) = helpers::create_rgba_texture(
            &self.device,
            &self.queue,
            url,
            image.width,
            image.height,
            &image.rgba,
        );
        let bind_group = create_texture_bind_group(&self.device, &self.cards, url, &view);
        self.textures.insert(
            url.to_string(),
            CardTexture {
                _texture: texture,
                bind_group,
            },
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    /// Draw every quad whose texture is resident; the rest wait for their upload.
    ///
    /// Quads are drawn back to front so rounded edges blend over what lies behind.
    pub fn render(
        &mut self,
        view_proj: Mat4,
        cam_eye: Vec3,
        quads: &[QuadDraw<'_>],
    ) -> Result<(), wgpu::SurfaceError> {
        let mut visible: Vec<&QuadDraw<'_>> = quads
            .iter()
            .filter(|q| self.textures.contains_key(q.texture_url))
            .collect();
        visible.sort_by(|a, b| {
            let da = a.model.w_axis.truncate().distance_squared(cam_eye);
            let db = b.model.w_axis.truncate().distance_squared(cam_eye);
            db.total_cmp(&da)
        });
        let instances: Vec<QuadInstance> = visible
            .iter()
            .map(|q| QuadInstance {
                model: q.model.to_cols_array_2d(),
                size_radius: [q.size.x, q.size.y, q.corner_radius, 1.0],
            })
            .collect();
        self.cards.ensure_capacity(&self.device, instances.len());

        let globals = Globals {
            view_proj: view_proj.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.cards.globals_buffer, 0, bytemuck::bytes_of(&globals));
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.cards.instance_buffer,
                0,
                bytemuck::cast_slice(&instances),
            );
        }

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cards_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.cards.pipeline);
            rpass.set_bind_group(0, &self.cards.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.cards.instance_buffer.slice(..));
            for (i, q) in visible.iter().enumerate() {
                if let Some(tex) = self.textures.get(q.texture_url) {
                    rpass.set_bind_group(1, &tex.bind_group, &[]);
                    let i = i as u32;
                    rpass.draw(0..6, i..i + 1);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
