use common::logger::MyLog;
use simulation::config::EconomyConfig;
use simulation::{Economy, PeriodRecord};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "macrosim headless", no_version)]
struct Opt {
    /// Path to the YAML configuration
    #[structopt(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Number of periods to simulate
    #[structopt(long, default_value = "30")]
    periods: u64,

    /// Write every period record to this file as JSON after the run
    #[structopt(long)]
    out: Option<PathBuf>,

    /// Log per-system timing averages after the run
    #[structopt(long)]
    timings: bool,
}

fn main() {
    let opt: Opt = Opt::from_args();
    MyLog::init();

    let config: EconomyConfig = match common::saveload::load_yaml(&opt.config) {
        Some(c) => c,
        None => return,
    };

    let mut eco = match Economy::from_config(&config) {
        Ok(eco) => eco,
        Err(e) => {
            log::error!("invalid configuration:\n{}", e);
            return;
        }
    };
    let mut sched = Economy::schedule();

    let mut records: Vec<PeriodRecord> = Vec::with_capacity(opt.periods as usize);
    for _ in 0..opt.periods {
        let r = eco.step(&mut sched);
        log::info!(
            "period {:>3} | Y={:8.2} | pi={:6.2}% | u={:5.2}% | r={:5.2}% | w={:6.2}",
            r.period,
            r.output,
            100.0 * r.inflation,
            100.0 * r.unemployment,
            100.0 * r.rate,
            r.wage
        );
        records.push(r);
    }

    let last = eco.state();
    log::info!(
        "simulated {} periods: output {:.2}, unemployment {:.2}%, rate {:.2}%",
        opt.periods,
        last.output,
        100.0 * last.unemployment,
        100.0 * last.interest_rate
    );

    if let Some(ref path) = opt.out {
        let _ = common::saveload::save_json(&records, path);
    }

    if opt.timings {
        for (name, avg_ms) in sched.times() {
            log::info!("{:>7.3}ms {}", avg_ms, name);
        }
    }
}
