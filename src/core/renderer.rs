use crate::core::depth_buffer::DepthBuffer;
use crate::core::frame_buffer::FrameBuffer;
use crate::core::line::draw_line;
use crate::core::mesh::MeshProvider;
use crate::core::rasterizer::rasterize_triangle;
use crate::core::triangle_processor::{FaceOutcome, TriangleProcessor};
use crate::geometry::transform::object_to_pixel;
use crate::io::render_settings::RenderSettings;
use crate::material_system::color::{WHITE, get_face_color, linear_rgb_to_u8};
use crate::material_system::light::DirectionalLight;
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// 一次渲染的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces_total: usize,
    /// 至少经过光栅化的面数
    pub faces_drawn: usize,
    /// 背向光源被剔除的面数
    pub faces_culled: usize,
    /// 屏幕空间面积为零、没有产生像素的面数
    pub faces_degenerate: usize,
    pub pixels_written: usize,
}

/// 场景驱动：持有帧缓冲区，按面顺序完成一次渲染
pub struct Renderer {
    pub frame_buffer: FrameBuffer,
    light: DirectionalLight,
    wireframe: bool,
    colorize: bool,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer {
            frame_buffer: FrameBuffer::new(width, height),
            light: DirectionalLight::default(),
            wireframe: false,
            colorize: false,
        }
    }

    /// 按渲染设置创建，光照方向为零向量时报错
    pub fn from_settings(settings: &RenderSettings) -> Result<Self, String> {
        let light = DirectionalLight::new(settings.light_direction)
            .ok_or_else(|| "光照方向不能为零向量".to_string())?;
        Ok(Renderer {
            frame_buffer: FrameBuffer::new(settings.width, settings.height),
            light,
            wireframe: settings.wireframe,
            colorize: settings.colorize,
        })
    }

    pub fn with_light(mut self, light: DirectionalLight) -> Self {
        self.light = light;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool, colorize: bool) -> Self {
        self.wireframe = wireframe;
        self.colorize = colorize;
        self
    }

    pub fn width(&self) -> usize {
        self.frame_buffer.width()
    }

    pub fn height(&self) -> usize {
        self.frame_buffer.height()
    }

    /// 渲染一帧：清空帧缓冲区，分配深度缓冲区，逐面光栅化
    ///
    /// 深度缓冲区只在本次调用内存在。结果保留在 `frame_buffer` 中，尚未翻转。
    pub fn render<M: MeshProvider + ?Sized>(&mut self, model: &M) -> RenderStats {
        let mut depth_buffer = DepthBuffer::new(self.width(), self.height());
        self.render_with(model, &mut depth_buffer)
    }

    /// 使用调用方提供的深度缓冲区渲染，尺寸必须与帧缓冲区一致
    pub fn render_into<M: MeshProvider + ?Sized>(
        &mut self,
        model: &M,
        depth_buffer: &mut DepthBuffer,
    ) -> Result<RenderStats, String> {
        if depth_buffer.width() != self.width() || depth_buffer.height() != self.height() {
            return Err(format!(
                "深度缓冲区尺寸 {}x{} 与帧缓冲区 {}x{} 不一致",
                depth_buffer.width(),
                depth_buffer.height(),
                self.width(),
                self.height()
            ));
        }
        Ok(self.render_with(model, depth_buffer))
    }

    fn render_with<M: MeshProvider + ?Sized>(
        &mut self,
        model: &M,
        depth_buffer: &mut DepthBuffer,
    ) -> RenderStats {
        let start = Instant::now();
        self.frame_buffer.clear();

        let stats = if self.wireframe {
            self.draw_wireframe(model)
        } else {
            self.draw_filled(model, depth_buffer)
        };

        info!(
            "渲染完成：{} 个面，绘制 {}，剔除 {}，退化 {}，写入 {} 个像素，耗时 {:?}",
            stats.faces_total,
            stats.faces_drawn,
            stats.faces_culled,
            stats.faces_degenerate,
            stats.pixels_written,
            start.elapsed()
        );
        stats
    }

    fn draw_filled<M: MeshProvider + ?Sized>(
        &mut self,
        model: &M,
        depth_buffer: &mut DepthBuffer,
    ) -> RenderStats {
        let (width, height) = (self.width(), self.height());
        let mut stats = RenderStats {
            faces_total: model.face_count(),
            ..Default::default()
        };

        for face_index in 0..stats.faces_total {
            match TriangleProcessor::process_face(model, face_index, width, height, &self.light) {
                FaceOutcome::Culled => stats.faces_culled += 1,
                FaceOutcome::Visible(triangle) => {
                    if !triangle.is_valid() {
                        debug!("面 {} 在屏幕空间退化，跳过", face_index);
                        stats.faces_degenerate += 1;
                        continue;
                    }
                    stats.faces_drawn += 1;
                    stats.pixels_written +=
                        rasterize_triangle(&triangle, &mut self.frame_buffer, depth_buffer);
                }
            }
        }

        stats
    }

    /// 线框模式：画出每个面的三条边，不做剔除和深度测试
    fn draw_wireframe<M: MeshProvider + ?Sized>(&mut self, model: &M) -> RenderStats {
        let (width, height) = (self.width(), self.height());
        let mut stats = RenderStats {
            faces_total: model.face_count(),
            ..Default::default()
        };

        for face_index in 0..stats.faces_total {
            let color = if self.colorize {
                linear_rgb_to_u8(&get_face_color(face_index))
            } else {
                WHITE
            };
            let corners = model
                .face_vertex_indices(face_index)
                .map(|i| object_to_pixel(&model.vertex_position(i), width, height));

            for j in 0..3 {
                let p0 = corners[j];
                let p1 = corners[(j + 1) % 3];
                stats.pixels_written +=
                    draw_line(&mut self.frame_buffer, p0.x, p0.y, p1.x, p1.y, color);
            }
            stats.faces_drawn += 1;
        }

        stats
    }

    /// 完整的一次渲染：渲染、垂直翻转、写出图像文件
    pub fn render_to_file<M: MeshProvider + ?Sized, P: AsRef<Path>>(
        &mut self,
        model: &M,
        output: P,
    ) -> Result<RenderStats, String> {
        let stats = self.render(model);
        self.frame_buffer.flip_vertically();
        self.frame_buffer.write_to_file(output)?;
        Ok(stats)
    }
}
