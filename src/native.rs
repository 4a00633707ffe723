/// Fixed-width companion workloads
///
/// Same loop shape as [`crate::counter`] but on `u64` registers, so a profiler
/// observes native ADD/SUB/MUL/DIV. Overflow wraps on purpose.
use crate::types::{summary_line, LoopConfig, Snapshot};
use clap::ValueEnum;
use serde::Serialize;
use std::hint::black_box;

/// Length of the memory-operand pass that precedes the `Mixed` register loop
pub const MEMORY_PASS_LEN: u64 = 512;

const MIXED_X: u64 = 1_234_567_890_123;
const MIXED_Y: u64 = 9_876_543_210_987;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NativeVariant {
    /// add=1 sub=100 mul=3 div=3; add += i, sub -= i, mul *= 2, div /= 2
    Go,
    /// a=1 b=2 c=3 d=4; a += b, b -= c, c *= 5, d /= 2
    Cpp,
    /// 512 memory-operand steps over 1..=512, then register-only steps
    /// add += y, sub -= x, mul *= (x&7)+1, div /= (y&7)+1, x += 1, y -= 1
    Mixed,
}

impl NativeVariant {
    fn seeds(self) -> [u64; 4] {
        match self {
            NativeVariant::Go => [1, 100, 3, 3],
            NativeVariant::Cpp => [1, 2, 3, 4],
            NativeVariant::Mixed => [0, 0, 1, 1],
        }
    }
}

pub struct NativeLoop {
    variant: NativeVariant,
    config: LoopConfig,
    next: u64,
    add: u64,
    sub: u64,
    mul: u64,
    div: u64,
    // register operands of the Mixed loop
    x: u64,
    y: u64,
}

impl NativeLoop {
    /// Seed the accumulators. For `Mixed` this also runs the memory pass, so
    /// `completed()` counts register steps only.
    pub fn new(variant: NativeVariant, config: LoopConfig) -> Self {
        let [add, sub, mul, div] = variant.seeds();
        let mut workload = Self {
            variant,
            config,
            next: 0,
            add,
            sub,
            mul,
            div,
            x: MIXED_X,
            y: MIXED_Y,
        };
        if variant == NativeVariant::Mixed {
            workload.memory_pass();
        }
        workload
    }

    fn memory_pass(&mut self) {
        let operands: Vec<u64> = (1..=MEMORY_PASS_LEN).collect();
        for &v in black_box(&operands).iter() {
            self.add = self.add.wrapping_add(v);
            self.sub = self.sub.wrapping_sub(v);
            self.mul = self.mul.wrapping_mul(v);
            // odd divisor, never zero
            self.div /= v | 1;
        }
    }

    pub fn variant(&self) -> NativeVariant {
        self.variant
    }

    /// Run one iteration. Returns `false` without touching state once done.
    pub fn step(&mut self) -> bool {
        if self.next >= self.config.iterations {
            return false;
        }
        match self.variant {
            NativeVariant::Go => {
                let i = self.next;
                self.add = self.add.wrapping_add(i);
                self.sub = self.sub.wrapping_sub(i);
                self.mul = self.mul.wrapping_mul(2);
                self.div /= 2;
            }
            NativeVariant::Cpp => {
                // Each update reads its neighbour before that neighbour moves.
                self.add = self.add.wrapping_add(self.sub);
                self.sub = self.sub.wrapping_sub(self.mul);
                self.mul = self.mul.wrapping_mul(5);
                self.div /= 2;
            }
            NativeVariant::Mixed => {
                self.add = self.add.wrapping_add(self.y);
                self.sub = self.sub.wrapping_sub(self.x);
                self.mul = self.mul.wrapping_mul((self.x & 7) + 1);
                self.div /= (self.y & 7) + 1;
                self.x = self.x.wrapping_add(1);
                self.y = self.y.wrapping_sub(1);
            }
        }
        self.next += 1;
        true
    }

    pub fn run(&mut self) {
        log::debug!(
            "native {:?} loop: running {} iterations",
            self.variant,
            self.config.iterations - self.next
        );
        while self.step() {}
    }

    pub fn completed(&self) -> u64 {
        self.next
    }

    pub fn total(&self) -> u64 {
        self.add
            .wrapping_add(self.sub)
            .wrapping_add(self.mul)
            .wrapping_add(self.div)
    }

    pub fn snapshot(&self) -> Snapshot<u64> {
        Snapshot {
            completed: self.next,
            add: self.add,
            sub: self.sub,
            mul: self.mul,
            div: self.div,
            total: self.total(),
        }
    }

    pub fn summary_line(&self) -> String {
        summary_line(&self.total())
    }
}
