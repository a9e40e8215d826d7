/// 初始深度值，低于任何可达深度，保证每个像素的第一次写入一定成功
pub const DEPTH_SENTINEL: f32 = f32::NEG_INFINITY;

/// 深度缓冲区（Z缓冲）
///
/// 每个像素一个 f32，索引为 `x + y * width`。约定数值越大越靠近观察者。
/// 由场景驱动在一次渲染中独占持有，渲染结束即释放。
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        DepthBuffer {
            width,
            height,
            data: vec![DEPTH_SENTINEL; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 重新填充为初始值
    pub fn clear(&mut self) {
        self.data.fill(DEPTH_SENTINEL);
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(x + y * self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.index(x, y).map(|index| self.data[index])
    }

    /// 深度测试：新深度严格大于已存值时更新并返回 true，否则两者都不变
    #[inline]
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: f32) -> bool {
        match self.index(x, y) {
            Some(index) if depth > self.data[index] => {
                self.data[index] = depth;
                true
            }
            _ => false,
        }
    }

    /// 没有任何像素被写入过
    pub fn is_untouched(&self) -> bool {
        self.data.iter().all(|&depth| depth == DEPTH_SENTINEL)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_always_succeeds() {
        let mut zbuf = DepthBuffer::new(3, 2);
        assert!(zbuf.is_untouched());
        assert!(zbuf.test_and_set(2, 1, -1.0e30));
        assert_eq!(zbuf.get(2, 1), Some(-1.0e30));
        assert_eq!(zbuf.as_slice()[2 + 3], -1.0e30);
    }

    #[test]
    fn only_larger_depth_passes() {
        let mut zbuf = DepthBuffer::new(2, 2);
        assert!(zbuf.test_and_set(0, 0, 0.5));
        assert!(!zbuf.test_and_set(0, 0, 0.5));
        assert!(!zbuf.test_and_set(0, 0, 0.1));
        assert!(zbuf.test_and_set(0, 0, 0.7));
        assert_eq!(zbuf.get(0, 0), Some(0.7));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut zbuf = DepthBuffer::new(2, 2);
        assert!(!zbuf.test_and_set(2, 0, 1.0));
        assert_eq!(zbuf.get(0, 2), None);
        assert!(zbuf.is_untouched());
    }

    #[test]
    fn clear_restores_sentinel() {
        let mut zbuf = DepthBuffer::new(2, 2);
        zbuf.test_and_set(1, 1, 3.0);
        zbuf.clear();
        assert!(zbuf.is_untouched());
        assert_eq!(zbuf.len(), 4);
    }
}
