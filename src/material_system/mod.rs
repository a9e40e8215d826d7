// material_system/mod.rs
// 颜色与光源
pub mod color;
pub mod light;
