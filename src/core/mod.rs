pub mod depth_buffer;
pub mod frame_buffer;
pub mod line;
pub mod mesh;
pub mod rasterizer;
pub mod renderer;
pub mod triangle_processor;
