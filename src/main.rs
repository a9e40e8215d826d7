use clap::Parser;
use log::info;
use std::time::Instant;
use tiny_rasterizer::io::args::Args;
use tiny_rasterizer::{RenderSettings, Renderer, load_obj_model};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let start_time = Instant::now();

    let settings = RenderSettings {
        obj: args.obj,
        ..Default::default()
    };
    settings.validate()?;

    // --- 加载模型 ---
    let model = load_obj_model(&settings.obj, &settings)?;

    // --- 渲染并保存 ---
    info!(
        "开始渲染 {}x{}（{}）",
        settings.width,
        settings.height,
        settings.get_mode_description()
    );
    let mut renderer = Renderer::from_settings(&settings)?;
    renderer.render_to_file(&model, &settings.output)?;

    info!("总耗时 {:?}", start_time.elapsed());
    Ok(())
}
