use crate::core::mesh::{Face, ModelData};
use crate::io::render_settings::RenderSettings;
use log::{debug, info, warn};
use nalgebra::{Point3, Vector2};
use std::path::Path;
use std::time::Instant;

/// 从文件路径中提取基本文件名（不含扩展名）
fn get_basename_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 加载 OBJ 模型文件
///
/// 所有子模型合并为一个网格，面被三角化。纹理坐标缺失时该面的纹理坐标为 None。
/// 文件不存在、解析失败、没有任何三角形面或索引越界都返回错误。
pub fn load_obj_model<P: AsRef<Path>>(
    obj_path: P,
    settings: &RenderSettings,
) -> Result<ModelData, String> {
    let obj_path_ref = obj_path.as_ref();
    info!("加载 OBJ 文件: {:?}", obj_path_ref);
    let load_start = Instant::now();

    if !obj_path_ref.exists() {
        return Err(format!(
            "输入的 OBJ 文件未找到：{}",
            obj_path_ref.display()
        ));
    }

    let load_options = tobj::LoadOptions {
        triangulate: true,   // 将所有面转换为三角形
        single_index: false, // 保持独立的索引以处理分开的纹理坐标
        ignore_points: true, // 忽略点元素
        ignore_lines: true,  // 忽略线元素
    };

    // 材质文件缺失不影响几何加载
    let (models, _materials) = tobj::load_obj(obj_path_ref, &load_options)
        .map_err(|e| format!("加载 OBJ {} 失败: {}", obj_path_ref.display(), e))?;

    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut texcoords: Vec<Vector2<f32>> = Vec::new();
    let mut faces: Vec<Face> = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        if mesh.indices.is_empty() {
            debug!("跳过没有面的网格 '{}'", model.name);
            continue;
        }

        let vertex_offset = vertices.len();
        let texcoord_offset = texcoords.len();

        vertices.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Point3::new(p[0], p[1], p[2])),
        );
        texcoords.extend(
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| Vector2::new(t[0], t[1])),
        );

        let has_texcoords = mesh.texcoord_indices.len() == mesh.indices.len();
        if !has_texcoords {
            warn!(
                "网格 '{}' 缺少纹理坐标，纹理坐标将为零",
                model.name
            );
        }

        for (corner_start, face) in mesh.indices.chunks_exact(3).enumerate() {
            let vertex_indices = [
                vertex_offset + face[0] as usize,
                vertex_offset + face[1] as usize,
                vertex_offset + face[2] as usize,
            ];
            let texcoord_indices = has_texcoords.then(|| {
                let tc = &mesh.texcoord_indices[corner_start * 3..corner_start * 3 + 3];
                [
                    texcoord_offset + tc[0] as usize,
                    texcoord_offset + tc[1] as usize,
                    texcoord_offset + tc[2] as usize,
                ]
            });
            faces.push(Face {
                vertex_indices,
                texcoord_indices,
            });
        }

        debug!(
            "处理网格 '{}': {} 个顶点，{} 个三角形",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len() / 3
        );
    }

    if faces.is_empty() {
        return Err(format!(
            "OBJ 文件 {} 中没有有效的三角形面",
            obj_path_ref.display()
        ));
    }

    let model_data = ModelData::new(
        get_basename_from_path(obj_path_ref),
        vertices,
        texcoords,
        faces,
        settings.texture_extent,
    )?;

    info!(
        "模型 '{}' 加载完成：{} 个顶点，{} 个面，耗时 {:?}",
        model_data.name(),
        model_data.vertices().len(),
        model_data.faces().len(),
        load_start.elapsed()
    );

    Ok(model_data)
}
