#![forbid(unsafe_code)]
use shiftplan::{assign_shifts, model::Staff, ScheduleConfig, SchedError, Scheduler};

fn single_slot_config(n: u32, m: u32) -> ScheduleConfig {
    ScheduleConfig::uniform(vec![1], vec![9], n, m)
}

fn pair() -> Vec<Staff> {
    vec![
        Staff::new("A", [1], [9]).unwrap().with_ability(2),
        Staff::new("B", [1], [9]).unwrap().with_ability(1),
    ]
}

#[test]
fn first_eligible_satisfies_slot() {
    let results = assign_shifts(&pair(), &single_slot_config(1, 0)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!((results[0].day, results[0].hour), (1, 9));
    assert_eq!(results[0].assigned, vec!["A"]);
}

#[test]
fn ability_threshold_overshoots_headcount() {
    let results = assign_shifts(&pair(), &single_slot_config(1, 5)).unwrap();
    assert_eq!(results[0].assigned, vec!["A", "B"]);
    assert_eq!(results[0].ability_sum, 3);
    assert!(results[0].is_understaffed());
}

#[test]
fn zero_need_slot_still_gets_one() {
    let staff = vec![Staff::new("A", [1], [9]).unwrap()];
    let results = assign_shifts(&staff, &single_slot_config(0, 0)).unwrap();
    assert_eq!(results[0].assigned, vec!["A"]);
}

#[test]
fn slots_respect_holidays_and_window() {
    let mut cfg = ScheduleConfig::default();
    cfg.holidays = [3, 6, 7].into_iter().collect();
    let staff = vec![Staff::new("A", 1..=7, 0..=23).unwrap()];
    let results = assign_shifts(&staff, &cfg).unwrap();

    // 4 days x hours 8..=18
    assert_eq!(results.len(), 4 * 11);
    for r in &results {
        assert!(!cfg.holidays.contains(&r.day));
        assert!(cfg.start_hour <= r.hour && r.hour <= cfg.end_hour);
    }
    assert_eq!((results[0].day, results[0].hour), (1, 8));
    assert_eq!((results[11].day, results[11].hour), (2, 8));
}

#[test]
fn identical_inputs_give_identical_results() {
    let cfg = ScheduleConfig::uniform(vec![1, 2, 3], vec![9, 10, 11], 2, 3);
    let staff: Vec<Staff> = (0..6)
        .map(|i| {
            Staff::new(format!("s{i}"), [1 + i % 3], [9, 10 + i % 2])
                .unwrap()
                .with_ability(i as u32)
        })
        .collect();
    let a = assign_shifts(&staff, &cfg).unwrap();
    let b = assign_shifts(&staff, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn scanning_never_stops_while_a_threshold_is_unmet() {
    let cfg = ScheduleConfig::uniform(vec![1], vec![9], 2, 4);
    let staff: Vec<Staff> = (0..5)
        .map(|i| Staff::new(format!("s{i}"), [1], [9]).unwrap().with_ability(1))
        .collect();
    let results = assign_shifts(&staff, &cfg).unwrap();
    // headcount met after 2, ability only after 4
    assert_eq!(results[0].assigned.len(), 4);
    assert!(!results[0].is_understaffed());
}

#[test]
fn missing_table_entry_aborts_whole_pass() {
    let mut cfg = ScheduleConfig::uniform(vec![1, 2], vec![9, 10], 1, 0);
    cfg.min_ability.remove(&10);
    let err = assign_shifts(&pair(), &cfg).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err, SchedError::MissingMinAbility { day: 1, hour: 10 }));
}

#[test]
fn entries_outside_window_are_not_required() {
    let mut cfg = ScheduleConfig::uniform(vec![1], vec![9, 22], 1, 0);
    cfg.end_hour = 18;
    cfg.min_ability.remove(&22);
    cfg.headcount.get_mut(&1).unwrap().remove(&22);
    let results = assign_shifts(&pair(), &cfg).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn scheduler_rejects_inverted_window() {
    let mut cfg = single_slot_config(1, 0);
    cfg.start_hour = 12;
    cfg.end_hour = 9;
    assert!(matches!(
        Scheduler::new(cfg),
        Err(SchedError::InvalidConfig(_))
    ));
}

#[test]
fn scheduler_reports_shortfalls() {
    let scheduler = Scheduler::new(ScheduleConfig::uniform(vec![1, 2], vec![9], 2, 0)).unwrap();
    let staff = vec![
        Staff::new("A", [1, 2], [9]).unwrap(),
        Staff::new("B", [1], [9]).unwrap(),
    ];
    assert_eq!(scheduler.slots().len(), 2);
    let results = scheduler.assign(&staff).unwrap();
    let gaps = scheduler.detect_shortfalls(&results);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].slot.day, 2);
    assert_eq!(gaps[0].assigned, 1);
}
