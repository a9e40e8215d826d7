use crate::io::args::parse_vec3;
use crate::io::render_settings::RenderSettings;
use log::warn;
use nalgebra::Vector2;
use std::path::Path;
use toml::Value;

/// TOML配置加载器
///
/// 未出现的字段保留 [`RenderSettings::default`] 的值。支持的结构：
///
/// ```toml
/// [files]
/// obj = "obj/african_head.obj"
/// output = "output.tga"
///
/// [render]
/// width = 800
/// height = 800
/// wireframe = false
/// colorize = false
/// texture_extent = [1024, 1024]
///
/// [lighting]
/// light_direction = "0,0,-1"
/// ```
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// 从TOML文件加载完整配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("读取配置文件 {} 失败: {}", path.display(), e))?;

        Self::load_from_content(&content)
    }

    /// 从TOML内容字符串加载配置
    pub fn load_from_content(content: &str) -> Result<RenderSettings, String> {
        let toml_value: Value =
            toml::from_str(content).map_err(|e| format!("解析TOML失败: {}", e))?;

        let settings = Self::parse_toml_to_settings(toml_value)?;
        settings.validate()?;
        Ok(settings)
    }

    fn parse_toml_to_settings(toml: Value) -> Result<RenderSettings, String> {
        let mut settings = RenderSettings::default();

        if let Some(files) = toml.get("files").and_then(|v| v.as_table()) {
            Self::parse_files_section(&mut settings, files)?;
        }

        if let Some(render) = toml.get("render").and_then(|v| v.as_table()) {
            Self::parse_render_section(&mut settings, render)?;
        }

        if let Some(lighting) = toml.get("lighting").and_then(|v| v.as_table()) {
            Self::parse_lighting_section(&mut settings, lighting)?;
        }

        if let Some(table) = toml.as_table() {
            for key in table.keys() {
                if !matches!(key.as_str(), "files" | "render" | "lighting") {
                    warn!("忽略未知的配置段 [{}]", key);
                }
            }
        }

        Ok(settings)
    }

    fn parse_files_section(
        settings: &mut RenderSettings,
        files: &toml::Table,
    ) -> Result<(), String> {
        if let Some(obj) = files.get("obj") {
            settings.obj = Self::as_string(obj, "files.obj")?;
        }
        if let Some(output) = files.get("output") {
            settings.output = Self::as_string(output, "files.output")?;
        }
        Ok(())
    }

    fn parse_render_section(
        settings: &mut RenderSettings,
        render: &toml::Table,
    ) -> Result<(), String> {
        if let Some(width) = render.get("width") {
            settings.width = Self::as_dimension(width, "render.width")?;
        }
        if let Some(height) = render.get("height") {
            settings.height = Self::as_dimension(height, "render.height")?;
        }
        if let Some(wireframe) = render.get("wireframe") {
            settings.wireframe = wireframe
                .as_bool()
                .ok_or_else(|| "render.wireframe 必须是布尔值".to_string())?;
        }
        if let Some(colorize) = render.get("colorize") {
            settings.colorize = colorize
                .as_bool()
                .ok_or_else(|| "render.colorize 必须是布尔值".to_string())?;
        }
        if let Some(extent) = render.get("texture_extent") {
            let values = extent
                .as_array()
                .filter(|values| values.len() == 2)
                .ok_or_else(|| "render.texture_extent 必须是两个整数的数组".to_string())?;
            settings.texture_extent = Vector2::new(
                Self::as_dimension(&values[0], "render.texture_extent")? as u32,
                Self::as_dimension(&values[1], "render.texture_extent")? as u32,
            );
        }
        Ok(())
    }

    fn parse_lighting_section(
        settings: &mut RenderSettings,
        lighting: &toml::Table,
    ) -> Result<(), String> {
        if let Some(direction) = lighting.get("light_direction") {
            let direction = Self::as_string(direction, "lighting.light_direction")?;
            settings.light_direction = parse_vec3(&direction)
                .map_err(|e| format!("lighting.light_direction 格式错误: {}", e))?;
        }
        Ok(())
    }

    fn as_string(value: &Value, key: &str) -> Result<String, String> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| format!("{} 必须是字符串", key))
    }

    fn as_dimension(value: &Value, key: &str) -> Result<usize, String> {
        match value.as_integer() {
            Some(n) if n > 0 && n <= u32::MAX as i64 => Ok(n as usize),
            Some(n) => Err(format!("{} 必须是正整数，实际为 {}", key, n)),
            None => Err(format!("{} 必须是整数", key)),
        }
    }
}
