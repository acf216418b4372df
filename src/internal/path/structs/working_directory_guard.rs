use std::ops::{Deref, DerefMut};

use super::path_resolver::PathResolver;

/// 工作目录快照守卫
///
/// 创建时记录当前工作目录，析构时无条件恢复。无论循环正常结束、提前返回错误，
/// 还是 future 在中途被丢弃，工作目录都会回到进入时的状态。
pub struct WorkingDirectoryGuard<'a> {
    resolver: &'a mut PathResolver,
    snapshot: String,
}

impl<'a> WorkingDirectoryGuard<'a> {
    pub fn new(resolver: &'a mut PathResolver) -> Self {
        let snapshot = resolver.current_working_directory().to_string();
        Self { resolver, snapshot }
    }

    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }
}

impl Deref for WorkingDirectoryGuard<'_> {
    type Target = PathResolver;

    fn deref(&self) -> &Self::Target {
        self.resolver
    }
}

impl DerefMut for WorkingDirectoryGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resolver
    }
}

impl Drop for WorkingDirectoryGuard<'_> {
    fn drop(&mut self) {
        let snapshot = std::mem::take(&mut self.snapshot);
        self.resolver.change_directory(&snapshot);
    }
}
