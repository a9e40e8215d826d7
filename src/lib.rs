//! # tiny_rasterizer
//!
//! 极简离线软件光栅化器：加载三角网格，正交投影到屏幕，
//! 以平面着色和Z缓冲填充三角形，最后写出图像文件。
//!
//! 命令行程序只接受一个可选的模型路径，其余参数取 [`RenderSettings`] 的默认值。
//! TOML 配置（[`TomlConfigLoader`]）以及线框、按面着色等选项只对库调用方开放：
//!
//! ```no_run
//! use tiny_rasterizer::{Renderer, TomlConfigLoader, load_obj_model};
//!
//! let settings = TomlConfigLoader::load_from_file("render.toml")?;
//! let model = load_obj_model(&settings.obj, &settings)?;
//! let mut renderer = Renderer::from_settings(&settings)?;
//! renderer.render_to_file(&model, &settings.output)?;
//! # Ok::<(), String>(())
//! ```

pub mod core;
pub mod geometry;
pub mod io;
pub mod material_system;

pub use crate::core::depth_buffer::DepthBuffer;
pub use crate::core::frame_buffer::FrameBuffer;
pub use crate::core::line::{draw_line, rasterize_line};
pub use crate::core::mesh::{Face, MeshProvider, ModelData};
pub use crate::core::rasterizer::{TriangleData, VertexRenderData, rasterize_triangle};
pub use crate::core::renderer::{RenderStats, Renderer};
pub use crate::io::config_loader::TomlConfigLoader;
pub use crate::io::obj_loader::load_obj_model;
pub use crate::io::render_settings::RenderSettings;
