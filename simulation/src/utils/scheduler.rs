use crate::Economy;
use common::history::History;
use ordered_float::OrderedFloat;
use std::time::Instant;

pub trait RunnableSystem {
    fn run(&self, eco: &mut Economy);
    fn name(&self) -> &'static str;
}

pub struct RunnableFn<F: Fn(&mut Economy)> {
    pub f: F,
    pub name: &'static str,
}

impl<F: Fn(&mut Economy)> RunnableSystem for RunnableFn<F> {
    fn run(&self, eco: &mut Economy) {
        (self.f)(eco)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(Default)]
pub struct SeqSchedule {
    systems: Vec<(Box<dyn RunnableSystem>, History)>,
}

impl SeqSchedule {
    pub fn add_system(&mut self, s: Box<dyn RunnableSystem>) -> &mut Self {
        self.systems.push((s, History::new(100)));
        self
    }

    #[inline(never)]
    pub fn execute(&mut self, eco: &mut Economy) {
        profiling::scope!("scheduler::execute");
        for (sys, h) in &mut self.systems {
            let start = Instant::now();

            sys.run(eco);

            let elapsed = start.elapsed();

            h.add_value(1000.0 * elapsed.as_secs_f32());
        }
    }

    /// Average run time per system in milliseconds, slowest first.
    pub fn times(&self) -> Vec<(String, f32)> {
        let mut times = self
            .systems
            .iter()
            .map(|(s, h)| (s.name().to_string(), h.avg()))
            .collect::<Vec<_>>();
        times.sort_unstable_by_key(|(_, t)| OrderedFloat(-*t));
        times
    }
}
