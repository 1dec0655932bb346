use pipesim_core::stats::SimStats;

use crate::common::harness::TestContext;
use crate::common::programs;

#[test]
fn test_ipc_undefined_before_first_cycle() {
    let stats = SimStats::default();
    assert_eq!(stats.ipc(), None);
    assert_eq!(stats.cpi(), None);
}

#[test]
fn test_derived_metrics() {
    let stats = SimStats {
        cycles: 8,
        instructions_executed: 2,
        stalls: 1,
    };
    assert_eq!(stats.ipc(), Some(0.25));
    assert_eq!(stats.cpi(), Some(4.0));
}

#[test]
fn test_report_contents() {
    let stats = SimStats {
        cycles: 8,
        instructions_executed: 2,
        stalls: 1,
    };
    let mut out = Vec::new();
    stats.write_to(&mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains("sim_cycles               8"));
    assert!(report.contains("sim_insts                2"));
    assert!(report.contains("sim_ipc                  0.2500"));
    assert!(report.contains("stalls.data            1 (12.50%)"));
}

#[test]
fn test_report_without_cycles() {
    let report = SimStats::default().to_string();
    assert!(report.contains("sim_ipc                  -"));
    assert!(report.contains("stalls.data            0 (0.00%)"));
}

#[test]
fn test_stats_from_a_run() {
    let mut tc = TestContext::new()
        .load_asm(programs::RAW_HAZARD)
        .with_reg(0, 0);
    tc.run_to_end();

    assert_eq!(
        *tc.sim.stats(),
        SimStats {
            cycles: 8,
            instructions_executed: 2,
            stalls: 1,
        }
    );
    assert_eq!(tc.sim.get_ipc(), Some(0.25));
}
