/// Arbitrary-precision counter loop
///
/// Four accumulators start at 1 and are updated once per iteration:
/// `add += i`, `sub -= i`, `mul *= 2`, `div = floor(div / 2)`.
/// `mul` reaches 2^iterations, so every value is a [`BigInt`].
use crate::types::{summary_line, LoopConfig, Result, Snapshot};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

pub struct CounterLoop {
    config: LoopConfig,
    next: u64,
    add: BigInt,
    sub: BigInt,
    mul: BigInt,
    div: BigInt,
}

impl CounterLoop {
    /// Create a loop with all accumulators seeded to 1
    pub fn new(config: LoopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: LoopConfig) -> Self {
        Self {
            config,
            next: 0,
            add: BigInt::one(),
            sub: BigInt::one(),
            mul: BigInt::one(),
            div: BigInt::one(),
        }
    }

    /// Run one iteration. Returns `false` without touching state once done.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let i = self.next;
        self.add += i;
        self.sub -= i;
        self.mul *= 2u32;
        self.div = self.div.div_floor(&BigInt::from(2u32));
        self.next += 1;
        true
    }

    /// Step until the configured iteration count is reached
    pub fn run(&mut self) {
        log::debug!("counter loop: running {} iterations", self.remaining());
        while self.step() {}
        log::debug!(
            "counter loop: done, mul has {} bits",
            self.mul.bits()
        );
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.config.iterations
    }

    pub fn completed(&self) -> u64 {
        self.next
    }

    pub fn remaining(&self) -> u64 {
        self.config.iterations - self.next
    }

    pub fn add(&self) -> &BigInt {
        &self.add
    }

    pub fn sub(&self) -> &BigInt {
        &self.sub
    }

    pub fn mul(&self) -> &BigInt {
        &self.mul
    }

    pub fn div(&self) -> &BigInt {
        &self.div
    }

    /// `add + sub + mul + div`
    pub fn total(&self) -> BigInt {
        &self.add + &self.sub + &self.mul + &self.div
    }

    pub fn snapshot(&self) -> Snapshot<String> {
        Snapshot {
            completed: self.next,
            add: self.add.to_string(),
            sub: self.sub.to_string(),
            mul: self.mul.to_string(),
            div: self.div.to_string(),
            total: self.total().to_string(),
        }
    }

    /// `dummy: <total>`
    pub fn summary_line(&self) -> String {
        summary_line(&self.total())
    }
}

/// Run the reference 100000-iteration workload and return its total
pub fn run_default() -> BigInt {
    let mut counter = CounterLoop::seeded(LoopConfig::default());
    counter.run();
    counter.total()
}
