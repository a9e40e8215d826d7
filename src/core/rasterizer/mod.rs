//! # 三角形光栅化模块
//!
//! 基于重心坐标的三角形填充，逐像素深度测试与平面着色

pub mod pixel_processor;
pub mod triangle_data;

// 重新导出主要类型和函数
pub use pixel_processor::{Fragment, for_each_fragment, rasterize_triangle};
pub use triangle_data::{BoundingBox, TriangleData, VertexRenderData};
