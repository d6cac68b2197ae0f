use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::Instant;

/// 性能日志开关环境变量
pub const PERF_LOG_ENV: &str = "ELEKTRIK_PERF_LOG";

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);
static PERF_INIT: Once = Once::new();

thread_local! {
    static PERF_DEPTH: Cell<u32> = const { Cell::new(0) };
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 性能日志是否开启
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `ELEKTRIK_PERF_LOG=1` 强制开启, `=0` 强制关闭
pub fn enabled() -> bool {
    PERF_INIT.call_once(|| {
        let enabled = match std::env::var(PERF_LOG_ENV) {
            Ok(v) => is_true(&v),
            Err(_) => cfg!(debug_assertions),
        };
        PERF_ENABLED.store(enabled, Ordering::Relaxed);
    });
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 运行时覆盖开关
pub fn set_enabled(enabled: bool) {
    PERF_INIT.call_once(|| {});
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

/// 性能统计 Guard：记录 elapsed_us + 嵌套深度
///
/// 使用方式：
/// ```ignore
/// let _perf = elektrik_backend::perf::PerfGuard::new("calculate");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    depth: u32,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let depth = d.get().saturating_add(1);
            d.set(depth);
            depth
        });
        Self {
            op,
            start: Instant::now(),
            depth,
        }
    }

    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if enabled() {
            let elapsed_us = self.start.elapsed().as_micros() as u64;
            tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_us,
                depth = self.depth,
                "done"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// 当前线程上活跃的 PerfGuard 数量
pub fn current_depth() -> u32 {
    PERF_DEPTH.with(|d| d.get())
}
