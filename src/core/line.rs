use crate::core::frame_buffer::FrameBuffer;
use crate::material_system::color::Rgb8;
use std::mem::swap;

/// Bresenham 直线光栅化
///
/// 按 x 步进（陡峭时先转置坐标），只用整数误差累加。每个步进回调一次 `plot`，
/// 相邻两个像素在任一轴上相差不超过 1。两端点重合时只产生一个像素。
/// 误差项用 i64 计算，任意 i32 端点都不会溢出。
pub fn rasterize_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, plot: F)
where
    F: FnMut(i32, i32),
{
    walk_line(x0, y0, x1, y1, None, plot);
}

/// 在帧缓冲区上画线，返回实际写入的像素数
///
/// 主轴先裁剪到帧范围，端点远在屏幕外时也只遍历屏幕内的那一段。
pub fn draw_line(
    frame_buffer: &mut FrameBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgb8,
) -> usize {
    let extent = (frame_buffer.width() as i64, frame_buffer.height() as i64);
    let mut written = 0;
    walk_line(x0, y0, x1, y1, Some(extent), |x, y| {
        if frame_buffer.set_pixel(x, y, color) {
            written += 1;
        }
    });
    written
}

/// `clip` 为 (宽, 高) 时只遍历主轴落在 [0, 宽或高) 内的步进，
/// 产生的像素与完整遍历中对应的像素完全相同
fn walk_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, clip: Option<(i64, i64)>, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let derror2 = (y1 - y0).abs() * 2;
    let y_step = if y1 > y0 { 1 } else { -1 };

    let (first, last) = match clip {
        Some((width, height)) => {
            let major = if steep { height } else { width };
            (x0.max(0), x1.min(major - 1))
        }
        None => (x0, x1),
    };
    if first > last {
        return;
    }

    // 直接求出跳过 skipped 步之后的状态：误差保持在 (-dx, dx] 内
    let skipped = (first - x0) as i128;
    let accumulated = skipped * derror2 as i128;
    let y_advances = if dx == 0 {
        0
    } else {
        let period = 2 * dx as i128;
        -(-(accumulated - dx as i128)).div_euclid(period)
    };
    let mut error2 = (accumulated - y_advances * 2 * dx as i128) as i64;
    let mut y = y0 + y_step * y_advances as i64;

    for x in first..=last {
        if steep {
            plot(y as i32, x as i32);
        } else {
            plot(x as i32, y as i32);
        }
        error2 += derror2;
        if error2 > dx {
            y += y_step;
            error2 -= dx * 2;
        }
    }
}
