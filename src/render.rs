use crate::constants::{CLEAR_COLOR, QUAD_VERTEX_COUNT};
use glam::Vec2;
use parallax_core::{layer_uniforms, Layer, ParallaxConfig, ParallaxFrame};
use web_sys as web;

mod helpers;
mod layers;
use layers::{create_layer_bgl, upload_layer, LayerResources};

pub static LAYER_WGSL: &str = include_str!("../shaders/layer.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    layer_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,
    // indexed by Layer::index; None until the image arrives
    layers: [Option<LayerResources>; 3],

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("layer_shader"),
            source: wgpu::ShaderSource::Wgsl(LAYER_WGSL.into()),
        });
        let layer_bgl = create_layer_bgl(&device);
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("layer_pl"),
            bind_group_layouts: &[&layer_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_layer_pipeline(&device, &pl, &shader, format);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            layer_bgl,
            linear_sampler,
            layers: [None, None, None],
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    /// Upload the decoded image for `layer`, replacing any previous one.
    pub fn set_layer_image(&mut self, layer: Layer, bitmap: &web::ImageBitmap) {
        let res = upload_layer(
            &self.device,
            &self.queue,
            &self.layer_bgl,
            &self.linear_sampler,
            layer,
            bitmap,
        );
        log::info!(
            "[gpu] {} layer {}x{}",
            layer.name(),
            res.image_size.x,
            res.image_size.y
        );
        self.layers[layer.index()] = Some(res);
    }

    /// Returns true when the surface was reconfigured.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Reapply the surface configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        frame: &ParallaxFrame,
        cfg: &ParallaxConfig,
        pixel_ratio: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let viewport = Vec2::new(self.width as f32, self.height as f32);
        for layer in Layer::ALL {
            if let Some(res) = &self.layers[layer.index()] {
                let u =
                    layer_uniforms(frame, cfg, layer, res.image_size, viewport, pixel_ratio);
                self.queue
                    .write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&u));
            }
        }

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("parallax_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            // back to front
            for res in self.layers.iter().flatten() {
                rpass.set_bind_group(0, &res.bind_group, &[]);
                rpass.draw(0..QUAD_VERTEX_COUNT, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
