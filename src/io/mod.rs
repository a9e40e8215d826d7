// io/mod.rs
// 命令行、配置与模型加载
pub mod args;
pub mod config_loader;
pub mod obj_loader;
pub mod render_settings;
