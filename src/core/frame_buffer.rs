use crate::material_system::color::{BLACK, Rgb8};
use image::ColorType;
use log::info;
use std::path::Path;

/// 帧缓冲区实现，存储渲染结果
///
/// 按行优先存储RGB颜色，像素 (x, y) 位于 `(x + y * width) * 3`。
/// 所有写入都经过 [`FrameBuffer::set_pixel`]，越界坐标被忽略。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    /// 存储RGB颜色值 [0, 255]，不透明度恒为满值，不单独存储
    color_buffer: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            color_buffer: vec![0; width * height * 3],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 用黑色清空
    pub fn clear(&mut self) {
        self.color_buffer.fill(0);
    }

    #[inline]
    fn color_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| (x + y * self.width) * 3)
    }

    /// 写入像素颜色，返回是否真正写入（越界时返回 false）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb8) -> bool {
        match self.color_index(x, y) {
            Some(index) => {
                self.color_buffer[index..index + 3].copy_from_slice(&color);
                true
            }
            None => false,
        }
    }

    /// 读取像素颜色，越界时返回 None
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.color_index(x, y).map(|index| {
            [
                self.color_buffer[index],
                self.color_buffer[index + 1],
                self.color_buffer[index + 2],
            ]
        })
    }

    /// 统计非黑色像素数量
    pub fn count_non_black(&self) -> usize {
        self.color_buffer
            .chunks_exact(3)
            .filter(|pixel| *pixel != BLACK)
            .count()
    }

    /// 上下翻转，把原点在左下角的渲染坐标转换为图像文件的左上角原点
    pub fn flip_vertically(&mut self) {
        let row_len = self.width * 3;
        let half = self.height / 2;
        for y in 0..half {
            let (top, bottom) = self.color_buffer.split_at_mut((self.height - 1 - y) * row_len);
            top[y * row_len..(y + 1) * row_len].swap_with_slice(&mut bottom[..row_len]);
        }
    }

    /// 获取颜色缓冲区的字节数据
    pub fn get_color_buffer_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    /// 保存为图像文件，格式由扩展名决定（例如 `.tga`、`.png`）
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.color_buffer,
            self.width as u32,
            self.height as u32,
            ColorType::Rgb8,
        )
        .map_err(|e| format!("保存图像到 {} 时出错: {}", path.display(), e))?;
        info!("图像已保存到 {}", path.display());
        Ok(())
    }
}
