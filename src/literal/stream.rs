/// 带单步回退能力的 UTF-16 输入游标。
///
/// 回退只是游标减一，不做任何缓冲。
pub(crate) struct Stream<'a> {
    units: &'a [u16],
    position: usize,
}

impl<'a> Stream<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Self { units, position: 0 }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.position < self.units.len()
    }

    pub(crate) fn next(&mut self) -> Option<u16> {
        let unit = self.units.get(self.position).copied()?;
        self.position += 1;
        Some(unit)
    }

    /// 退回最近读取的一个码元。
    pub(crate) fn put_back(&mut self) {
        debug_assert!(self.position > 0, "put_back 之前必须先读取");
        self.position = self.position.saturating_sub(1);
    }
}
