//! Worker-count heuristics.
//!
//! Two policies size a pass from its pixel count: fixed size tiers, or a
//! pixels-per-thread budget capped by the host's parallelism. The host query
//! is behind [`Parallelism`] so tests can pin it.

use crate::imaging::GrayImage;

/// Pixels one worker should have before adding another pays off.
pub const DEFAULT_PIXELS_PER_THREAD: usize = 250_000;

/// Source of "how many threads can run at once".
pub trait Parallelism {
    fn available(&self) -> usize;
}

/// Queries the running host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostParallelism;

impl Parallelism for HostParallelism {
    fn available(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Reports a constant; zero is treated as one.
#[derive(Debug, Clone, Copy)]
pub struct FixedParallelism(pub usize);

impl Parallelism for FixedParallelism {
    fn available(&self) -> usize {
        self.0.max(1)
    }
}

/// How to pick a thread count when the user did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPolicy {
    /// Size-only tiers: 1, 2, 4 or 8 threads.
    StaticTiers,
    /// `total / pixels_per_thread`, capped at the available parallelism.
    CoreAware { pixels_per_thread: usize },
}

impl Default for ThreadPolicy {
    fn default() -> Self {
        Self::CoreAware {
            pixels_per_thread: DEFAULT_PIXELS_PER_THREAD,
        }
    }
}

impl ThreadPolicy {
    /// Short name used in config files and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StaticTiers => "static-tiers",
            Self::CoreAware { .. } => "core-aware",
        }
    }

    /// Thread count for an image of `total_pixels`. Always at least 1.
    pub fn threads_for(&self, total_pixels: usize, parallelism: &impl Parallelism) -> usize {
        match *self {
            Self::StaticTiers => static_tier(total_pixels),
            Self::CoreAware { pixels_per_thread } => {
                let by_pixels = (total_pixels / pixels_per_thread.max(1)).max(1);
                parallelism.available().min(by_pixels).max(1)
            }
        }
    }
}

fn static_tier(total_pixels: usize) -> usize {
    match total_pixels {
        0..512_000 => 1,
        512_000..1_024_000 => 2,
        1_024_000..4_096_000 => 4,
        _ => 8,
    }
}

/// Resolve the worker count for `image`.
///
/// A positive `user_override` always wins and is returned unchanged. `None`
/// and `Some(0)` fall through to the policy; rejecting an explicit zero is
/// the job of config validation, before this point.
pub fn decide_thread_count(
    image: &GrayImage,
    user_override: Option<usize>,
    policy: ThreadPolicy,
    parallelism: &impl Parallelism,
) -> usize {
    match user_override {
        Some(n) if n > 0 => n,
        _ => policy.threads_for(image.pixel_count(), parallelism),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::uniform_image;

    const CORE_AWARE: ThreadPolicy = ThreadPolicy::CoreAware {
        pixels_per_thread: DEFAULT_PIXELS_PER_THREAD,
    };

    #[test]
    fn override_wins_unchanged() {
        let img = uniform_image(10, 10, 0);
        for n in [1, 3, 64, 1000] {
            assert_eq!(
                decide_thread_count(&img, Some(n), CORE_AWARE, &FixedParallelism(2)),
                n
            );
            assert_eq!(
                decide_thread_count(&img, Some(n), ThreadPolicy::StaticTiers, &HostParallelism),
                n
            );
        }
    }

    #[test]
    fn zero_override_falls_back_to_policy() {
        let img = uniform_image(10, 10, 0);
        assert_eq!(
            decide_thread_count(&img, Some(0), ThreadPolicy::StaticTiers, &HostParallelism),
            1
        );
    }

    #[test]
    fn static_tier_boundaries() {
        let p = FixedParallelism(64);
        let tiers = ThreadPolicy::StaticTiers;
        assert_eq!(tiers.threads_for(0, &p), 1);
        assert_eq!(tiers.threads_for(511_999, &p), 1);
        assert_eq!(tiers.threads_for(512_000, &p), 2);
        assert_eq!(tiers.threads_for(1_023_999, &p), 2);
        assert_eq!(tiers.threads_for(1_024_000, &p), 4);
        assert_eq!(tiers.threads_for(4_095_999, &p), 4);
        assert_eq!(tiers.threads_for(4_096_000, &p), 8);
        assert_eq!(tiers.threads_for(usize::MAX, &p), 8);
    }

    #[test]
    fn static_tiers_ignore_host() {
        let tiers = ThreadPolicy::StaticTiers;
        assert_eq!(tiers.threads_for(5_000_000, &FixedParallelism(1)), 8);
    }

    #[test]
    fn core_aware_small_image_gets_one_thread() {
        assert_eq!(CORE_AWARE.threads_for(1000, &FixedParallelism(16)), 1);
        assert_eq!(CORE_AWARE.threads_for(0, &FixedParallelism(16)), 1);
    }

    #[test]
    fn core_aware_scales_with_pixels() {
        // 1920x1080 = 2_073_600 px → 8 by pixels
        assert_eq!(CORE_AWARE.threads_for(2_073_600, &FixedParallelism(16)), 8);
        assert_eq!(CORE_AWARE.threads_for(750_000, &FixedParallelism(16)), 3);
    }

    #[test]
    fn core_aware_capped_by_host() {
        assert_eq!(CORE_AWARE.threads_for(100_000_000, &FixedParallelism(6)), 6);
        assert_eq!(CORE_AWARE.threads_for(100_000_000, &FixedParallelism(0)), 1);
    }

    #[test]
    fn core_aware_zero_budget_does_not_divide_by_zero() {
        let policy = ThreadPolicy::CoreAware {
            pixels_per_thread: 0,
        };
        assert_eq!(policy.threads_for(10, &FixedParallelism(4)), 4);
    }

    #[test]
    fn heuristic_is_at_least_one() {
        for total in [0, 1, 249_999, 250_000, 10_000_000] {
            for cores in [0, 1, 3, 128] {
                assert!(CORE_AWARE.threads_for(total, &FixedParallelism(cores)) >= 1);
                let tiers = ThreadPolicy::StaticTiers;
                assert!(tiers.threads_for(total, &FixedParallelism(cores)) >= 1);
            }
        }
    }

    #[test]
    fn host_parallelism_is_positive() {
        assert!(HostParallelism.available() >= 1);
    }

    #[test]
    fn default_policy_is_core_aware() {
        assert_eq!(ThreadPolicy::default(), CORE_AWARE);
        assert_eq!(ThreadPolicy::default().name(), "core-aware");
        assert_eq!(ThreadPolicy::StaticTiers.name(), "static-tiers");
    }
}
