use crate::io::render_settings::DEFAULT_OBJ_PATH;
use clap::Parser;

/// 极简离线光栅化器：加载 OBJ 模型，正交投影、平面着色，输出 output.tga
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 输入OBJ文件路径
    #[arg(value_name = "OBJ", default_value = DEFAULT_OBJ_PATH)]
    pub obj: String,
}

/// 解析逗号分隔的三个浮点数，例如 "0,0,-1"
pub fn parse_vec3(s: &str) -> Result<nalgebra::Vector3<f32>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("需要 3 个逗号分隔的数值，实际为 '{}'", s));
    }
    let mut values = [0.0f32; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("无效的数值 '{}': {}", part, e))?;
    }
    Ok(nalgebra::Vector3::from(values))
}
